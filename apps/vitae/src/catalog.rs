//! Template catalog: the set of descriptors the service can render with.
//!
//! The built-in set ships with the binary. Deployments may replace it with a
//! JSON file (an array of descriptors) named by `TEMPLATE_CATALOG_PATH`.

use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::template::{
    ColorOptions, ColorVariant, FontRoles, HeadingCase, LayoutAssignment, SkillsDisplay, Spacing,
    TemplateDescriptor, TemplateStyling, MAX_SIDEBAR_WIDTH,
};
use crate::render::bespoke::NOIR_TEMPLATE_ID;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read template catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid template catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate template id '{0}'")]
    DuplicateId(String),

    #[error("template catalog is empty")]
    Empty,

    #[error("template '{id}' has sidebar width {width}%, must be at most 100%")]
    InvalidSidebarWidth { id: String, width: u8 },
}

/// Immutable after construction; shared across requests behind an `Arc`.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: BTreeMap<String, TemplateDescriptor>,
}

impl TemplateCatalog {
    pub fn from_templates(templates: Vec<TemplateDescriptor>) -> Result<Self, CatalogError> {
        if templates.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut map = BTreeMap::new();
        for template in templates {
            let id = template.id.clone();
            if let Some(width) = template
                .layout
                .as_ref()
                .and_then(|l| l.sidebar_width)
                .filter(|w| *w > MAX_SIDEBAR_WIDTH)
            {
                return Err(CatalogError::InvalidSidebarWidth { id, width });
            }
            if map.insert(id.clone(), template).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
        }
        Ok(TemplateCatalog { templates: map })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let path_str = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path_str.clone(),
            source,
        })?;
        let templates: Vec<TemplateDescriptor> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path_str.clone(),
                source,
            })?;

        let catalog = Self::from_templates(templates)?;
        info!(path = %path_str, count = catalog.len(), "Loaded template catalog");
        Ok(catalog)
    }

    pub fn builtin() -> Self {
        let templates = builtin_templates()
            .into_iter()
            .map(|t| (t.id.clone(), t))
            .collect();
        TemplateCatalog { templates }
    }

    pub fn get(&self, id: &str) -> Option<&TemplateDescriptor> {
        self.templates.get(id)
    }

    /// All templates ordered by id.
    pub fn list(&self) -> impl Iterator<Item = &TemplateDescriptor> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Built-in templates
// ────────────────────────────────────────────────────────────────────────────

fn variant(label: &str, primary: &str, secondary: &str) -> ColorVariant {
    ColorVariant {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        label: label.to_string(),
    }
}

fn fragments(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn builtin_templates() -> Vec<TemplateDescriptor> {
    vec![
        TemplateDescriptor {
            id: "classic".to_string(),
            name: Some("Classic".to_string()),
            styling: TemplateStyling {
                primary_color: "#1f2937".to_string(),
                secondary_color: "#6b7280".to_string(),
                font_family: Some("Georgia, 'Times New Roman', serif".to_string()),
                spacing: Spacing::Standard,
                heading_case: HeadingCase::Upper,
                skills_display: SkillsDisplay::Inline,
            },
            fonts: None,
            color_options: Some(ColorOptions {
                palette: vec![
                    variant("Charcoal", "#1f2937", "#6b7280"),
                    variant("Navy", "#1e3a8a", "#60a5fa"),
                    variant("Burgundy", "#7f1d1d", "#f87171"),
                ],
            }),
            layout: None,
        },
        TemplateDescriptor {
            id: "executive".to_string(),
            name: Some("Executive".to_string()),
            styling: TemplateStyling {
                primary_color: "#0f172a".to_string(),
                secondary_color: "#b45309".to_string(),
                font_family: Some("'Libre Baskerville', Georgia, serif".to_string()),
                spacing: Spacing::Spacious,
                heading_case: HeadingCase::Title,
                skills_display: SkillsDisplay::Inline,
            },
            fonts: Some(FontRoles {
                header: Some("'Playfair Display', Georgia, serif".to_string()),
                section: None,
                body: Some("'Source Sans Pro', Helvetica, sans-serif".to_string()),
            }),
            color_options: Some(ColorOptions {
                palette: vec![
                    variant("Midnight", "#0f172a", "#b45309"),
                    variant("Slate", "#334155", "#0e7490"),
                ],
            }),
            layout: None,
        },
        TemplateDescriptor {
            id: "modern".to_string(),
            name: Some("Modern".to_string()),
            styling: TemplateStyling {
                primary_color: "#2563eb".to_string(),
                secondary_color: "#93c5fd".to_string(),
                font_family: None,
                spacing: Spacing::Standard,
                heading_case: HeadingCase::Upper,
                skills_display: SkillsDisplay::Bulleted,
            },
            fonts: None,
            color_options: Some(ColorOptions {
                palette: vec![
                    variant("Blue", "#2563eb", "#93c5fd"),
                    variant("Teal", "#0f766e", "#5eead4"),
                    variant("Violet", "#6d28d9", "#c4b5fd"),
                ],
            }),
            layout: Some(LayoutAssignment {
                kind: Some("two-column".to_string()),
                main: fragments(&["summary", "experience", "projects"]),
                sidebar: fragments(&["skills", "education", "certifications", "languages"]),
                sidebar_width: Some(32),
            }),
        },
        TemplateDescriptor {
            id: "technical".to_string(),
            name: Some("Technical".to_string()),
            styling: TemplateStyling {
                primary_color: "#111827".to_string(),
                secondary_color: "#10b981".to_string(),
                font_family: Some("'IBM Plex Sans', Helvetica, sans-serif".to_string()),
                spacing: Spacing::Compact,
                heading_case: HeadingCase::Upper,
                skills_display: SkillsDisplay::Inline,
            },
            fonts: Some(FontRoles {
                header: Some("'IBM Plex Mono', monospace".to_string()),
                section: Some("'IBM Plex Mono', monospace".to_string()),
                body: None,
            }),
            color_options: None,
            layout: Some(LayoutAssignment {
                kind: Some("two-column".to_string()),
                main: fragments(&["experience", "projects", "publications"]),
                sidebar: fragments(&["skills", "education", "certifications"]),
                sidebar_width: Some(28),
            }),
        },
        TemplateDescriptor {
            id: NOIR_TEMPLATE_ID.to_string(),
            name: Some("Noir".to_string()),
            styling: TemplateStyling {
                primary_color: "#1a1a1a".to_string(),
                secondary_color: "#9ca3af".to_string(),
                font_family: Some("Montserrat, Helvetica, sans-serif".to_string()),
                spacing: Spacing::Standard,
                heading_case: HeadingCase::Upper,
                skills_display: SkillsDisplay::Inline,
            },
            fonts: None,
            color_options: Some(ColorOptions {
                palette: vec![
                    variant("Ink", "#1a1a1a", "#9ca3af"),
                    variant("Crimson", "#9f1239", "#fda4af"),
                ],
            }),
            layout: None,
        },
    ]
}
