//! Template descriptors: the static visual identity of a resume template.
//!
//! Descriptors are read-only inputs to a render call. The `id` doubles as the
//! lookup key in the catalog and as the switch that selects a bespoke layout.

use serde::{Deserialize, Serialize};

/// Font stack used for any role the template leaves unset.
pub const DEFAULT_FONT_STACK: &str = "Inter, Helvetica, Arial, sans-serif";

/// Default sidebar width (percent of page width) for two-column layouts.
pub const DEFAULT_SIDEBAR_WIDTH: u8 = 32;

/// Widths are percentages of the page.
pub const MAX_SIDEBAR_WIDTH: u8 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Styling
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    Compact,
    #[default]
    Standard,
    Spacious,
}

/// How section headings are cased on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingCase {
    #[default]
    Upper,
    Title,
}

/// How a skills section lays out the items of each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillsDisplay {
    /// `Languages: Go, Rust`
    #[default]
    Inline,
    /// Category heading followed by one bullet per item.
    Bulleted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStyling {
    pub primary_color: String,
    pub secondary_color: String,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub spacing: Spacing,
    #[serde(default)]
    pub heading_case: HeadingCase,
    #[serde(default)]
    pub skills_display: SkillsDisplay,
}

/// Font role mapping. Every role is optional; see `render::styling`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontRoles {
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Color variants
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorVariant {
    pub primary: String,
    pub secondary: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorOptions {
    #[serde(default)]
    pub palette: Vec<ColorVariant>,
}

// ────────────────────────────────────────────────────────────────────────────
// Layout assignment
// ────────────────────────────────────────────────────────────────────────────

/// Region assignment by normalized section-name fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutAssignment {
    /// Free-form classification label carried over from the catalog ("two-column", ...).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub sidebar: Vec<String>,
    #[serde(default)]
    pub main: Vec<String>,
    #[serde(default)]
    pub sidebar_width: Option<u8>,
}

impl LayoutAssignment {
    /// True when neither region has any fragment, which means single column.
    pub fn is_empty(&self) -> bool {
        self.sidebar.is_empty() && self.main.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Descriptor
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDescriptor {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub styling: TemplateStyling,
    #[serde(default)]
    pub fonts: Option<FontRoles>,
    #[serde(default)]
    pub color_options: Option<ColorOptions>,
    #[serde(default)]
    pub layout: Option<LayoutAssignment>,
}

impl TemplateDescriptor {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// The palette, or an empty slice when the template declares none.
    pub fn palette(&self) -> &[ColorVariant] {
        self.color_options
            .as_ref()
            .map(|o| o.palette.as_slice())
            .unwrap_or(&[])
    }

    /// The region assignment, if it actually assigns anything.
    pub fn region_assignment(&self) -> Option<&LayoutAssignment> {
        self.layout.as_ref().filter(|l| !l.is_empty())
    }
}
