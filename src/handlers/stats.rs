use super::SharedStore;
use crate::error::AppError;
use crate::export::{self, ExportFormat, UnsupportedFormat};
use crate::voting::{compute_tally, statistics_entries};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::{
        HeaderMap, StatusCode,
        header::{CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_TYPE, ETAG, IF_NONE_MATCH},
    },
    response::{IntoResponse, Response},
};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use log::{debug, warn};
use serde::Deserialize;
use sha2::{Digest, Sha256};

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    #[serde(rename = "fileType")]
    file_type: Option<String>,
}

// Strong validator over the raw vote log: "<length in hex>-<27 chars of base64 sha256>"
pub fn etag_for(log: &[u8]) -> String {
    let hash = BASE64.encode(Sha256::digest(log));
    format!("\"{:x}-{}\"", log.len(), &hash[..27])
}

pub fn if_none_match(header: &str, etag: &str) -> bool {
    header
        .split(',')
        .map(str::trim)
        .any(|tag| tag == "*" || tag.trim_start_matches("W/") == etag)
}

pub async fn stat_handler(
    State(store): State<SharedStore>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let etag = etag_for(&store.vote_log_bytes().await?);
    let cache_headers = [(CACHE_CONTROL, "max-age=0".to_string()), (ETAG, etag.clone())];

    let fresh = headers
        .get(IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| if_none_match(value, &etag));
    if fresh {
        debug!("Statistics unchanged for {}", etag);
        return Ok((StatusCode::NOT_MODIFIED, cache_headers).into_response());
    }

    let options = store.get_options().await?;
    let votes = store.get_votes().await?;
    let tally = compute_tally(&options, &votes);

    Ok((cache_headers, Json(tally)).into_response())
}

pub async fn download_handler(
    State(store): State<SharedStore>,
    query: Result<Query<DownloadQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let file_type = match query {
        Ok(Query(query)) => query.file_type.unwrap_or_default(),
        Err(rejection) => {
            warn!("Unreadable export query: {}", rejection);
            return Err(UnsupportedFormat(String::new()).into());
        }
    };

    let format: ExportFormat = file_type.parse().map_err(|e: UnsupportedFormat| {
        warn!("Rejected export request: {}", e);
        e
    })?;

    let options = store.get_options().await?;
    let votes = store.get_votes().await?;
    let entries = statistics_entries(&options, &compute_tally(&options, &votes));
    debug!("Exporting {} entries as {}", entries.len(), format);

    let headers = [
        (CONTENT_TYPE, format.content_type()),
        (CONTENT_DISPOSITION, "attachment"),
    ];
    Ok((headers, export::render(&entries, format)).into_response())
}
