//! The render engine: template + resume content → [`Document`].
//!
//! Everything under this module is synchronous and pure. The HTTP layer in
//! [`handlers`] moves calls onto the blocking pool.

pub mod bespoke;
pub mod colors;
pub mod document;
pub mod handlers;
pub mod header;
pub mod layout;
pub mod markup;
pub mod orchestrator;
pub mod sections;
pub mod styling;

use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub use document::Document;
pub use orchestrator::render;

/// A region of a two-panel page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentRegion {
    Sidebar,
    Main,
}

impl fmt::Display for ContentRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentRegion::Sidebar => f.write_str("sidebar"),
            ContentRegion::Main => f.write_str("main"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A bespoke layout found nothing it can draw in one or more regions.
    #[error("template '{template_id}' needs typed content for: {}", join_regions(.missing))]
    IncompleteContent {
        template_id: String,
        missing: Vec<ContentRegion>,
    },
}

fn join_regions(regions: &[ContentRegion]) -> String {
    regions
        .iter()
        .map(ContentRegion::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_content_message_names_regions() {
        let err = RenderError::IncompleteContent {
            template_id: "noir".to_string(),
            missing: vec![ContentRegion::Sidebar, ContentRegion::Main],
        };
        assert_eq!(
            err.to_string(),
            "template 'noir' needs typed content for: sidebar, main"
        );
    }
}
