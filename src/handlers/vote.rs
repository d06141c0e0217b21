use super::SharedStore;
use crate::error::AppError;
use crate::models::Vote;
use crate::voting::is_valid_option_id;
use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::header::CONTENT_TYPE,
};
use log::{info, warn};
use serde::Deserialize;

// Body of POST /vote, either JSON or url-encoded
#[derive(Debug, Deserialize)]
pub struct VoteSubmission {
    #[serde(default)]
    pub vote: Option<String>,
}

pub async fn vote_handler(
    State(store): State<SharedStore>,
    request: Request,
) -> Result<&'static str, AppError> {
    let submission = decode_submission(request).await?;

    let Some(option_id) = submission.vote else {
        warn!("Vote submission without an option id");
        return Err(AppError::InvalidVote);
    };

    // Only options currently in the registry may receive new votes
    let options = store.get_options().await?;
    if !is_valid_option_id(&option_id, &options) {
        warn!("Rejected vote for unknown option '{}'", option_id);
        return Err(AppError::InvalidVote);
    }

    store.append_vote(&Vote::new(option_id.as_str())).await?;
    info!("Recorded vote for '{}'", option_id);

    Ok("OK")
}

async fn decode_submission(request: Request) -> Result<VoteSubmission, AppError> {
    let is_json = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));

    if is_json {
        let Json(submission) = Json::<VoteSubmission>::from_request(request, &())
            .await
            .map_err(|e| {
                warn!("Unreadable JSON vote body: {}", e);
                AppError::MalformedPayload
            })?;
        Ok(submission)
    } else {
        let Form(submission) = Form::<VoteSubmission>::from_request(request, &())
            .await
            .map_err(|e| {
                warn!("Unreadable form vote body: {}", e);
                AppError::MalformedPayload
            })?;
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::db::VoteStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};

    fn post_vote(content_type: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/vote")
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_json_vote_for_known_option() {
        let store = pets_store(&[]);
        let response = send(store.clone(), post_vote("application/json", r#"{"vote":"cats"}"#)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "OK");
        assert_eq!(store.get_votes().await.unwrap(), vec![Vote::from("cats")]);
    }

    #[tokio::test]
    async fn accepts_form_encoded_vote() {
        let store = pets_store(&["cats"]);
        let response = send(
            store.clone(),
            post_vote("application/x-www-form-urlencoded", "vote=dogs"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            store.get_votes().await.unwrap(),
            vec![Vote::from("cats"), Vote::from("dogs")]
        );
    }

    #[tokio::test]
    async fn rejects_unknown_option_without_appending() {
        let store = pets_store(&["cats"]);
        let response = send(store.clone(), post_vote("application/json", r#"{"vote":"fish"}"#)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Invalid voting submission");
        assert_eq!(store.get_votes().await.unwrap(), vec![Vote::from("cats")]);
    }

    #[tokio::test]
    async fn rejects_submission_without_vote_field() {
        let store = pets_store(&[]);
        let response = send(store.clone(), post_vote("application/json", "{}")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Invalid voting submission");
        assert!(store.get_votes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_malformed_body() {
        let store = pets_store(&[]);
        let response = send(store.clone(), post_vote("application/json", "{\"vote\":")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Malformed payload");
        assert!(store.get_votes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn votes_for_removed_options_are_kept_but_not_counted() {
        let store = pets_store(&["cats", "dogs"]);
        store
            .set_options(vec![crate::models::PollOption {
                id: "dogs".to_string(),
                description: "Dogs".to_string(),
            }])
            .await;

        let rejected = send(store.clone(), post_vote("application/json", r#"{"vote":"cats"}"#)).await;
        assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);

        let response = send(store.clone(), get_request("/stat")).await;
        let tally: crate::models::TallyMap = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(tally.len(), 1);
        assert_eq!(tally["dogs"], 1);
        assert_eq!(store.get_votes().await.unwrap().len(), 2);
    }
}
