//! Statistics export: renders enriched tally entries as JSON, XML or HTML.
//!
//! Format identifiers are parsed at the boundary, so [`render`] only ever
//! sees one of the three supported formats. XML and HTML output is written
//! verbatim without escaping field values.

mod html;
mod json;
mod xml;

use crate::models::StatisticsEntry;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use html::render_html;
pub use json::render_json;
pub use xml::render_xml;

type Renderer = fn(&[StatisticsEntry]) -> String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Json,
    Xml,
    Html,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unsupported export format: {0:?}")]
pub struct UnsupportedFormat(pub String);

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Json, ExportFormat::Xml, ExportFormat::Html];

    /// Identifier accepted in the `fileType` query parameter.
    pub const fn identifier(self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Xml => "XML",
            ExportFormat::Html => "HTML",
        }
    }

    pub const fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Xml => "text/xml",
            ExportFormat::Html => "text/html",
        }
    }

    const fn renderer(self) -> Renderer {
        match self {
            ExportFormat::Json => render_json,
            ExportFormat::Xml => render_xml,
            ExportFormat::Html => render_html,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = UnsupportedFormat;

    // Identifiers are matched exactly; "json" is not "JSON"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.identifier() == s)
            .ok_or_else(|| UnsupportedFormat(s.to_string()))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

pub fn render(entries: &[StatisticsEntry], format: ExportFormat) -> String {
    (format.renderer())(entries)
}
