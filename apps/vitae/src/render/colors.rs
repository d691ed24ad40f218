//! Color theme resolution: template + caller-held variant index → effective colors.
//!
//! Never fails. An out-of-range index falls back to palette entry 0, and a
//! template without a palette uses its own styling colors.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::template::TemplateDescriptor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedColors {
    pub primary: String,
    pub secondary: String,
    /// Palette label, when the colors came from a palette entry.
    pub label: Option<String>,
}

pub fn resolve_colors(template: &TemplateDescriptor, variant_index: usize) -> ResolvedColors {
    let palette = template.palette();

    let variant = palette.get(variant_index).or_else(|| {
        if !palette.is_empty() {
            debug!(
                template = %template.id,
                variant_index,
                palette_len = palette.len(),
                "Color variant out of range, using palette default"
            );
        }
        palette.first()
    });

    match variant {
        Some(v) => ResolvedColors {
            primary: v.primary.clone(),
            secondary: v.secondary.clone(),
            label: Some(v.label.clone()),
        },
        None => ResolvedColors {
            primary: template.styling.primary_color.clone(),
            secondary: template.styling.secondary_color.clone(),
            label: None,
        },
    }
}
