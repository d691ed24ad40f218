//! The rendered block tree handed to the preview layer or a document compiler.

use serde::Serialize;

use crate::models::resume::SectionKindTag;
use crate::render::colors::ResolvedColors;
use crate::render::styling::EffectiveStyling;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub template_id: String,
    pub colors: ResolvedColors,
    pub styling: EffectiveStyling,
    pub header: Header,
    pub body: Body,
}

impl Document {
    /// All blocks in reading order: main before sidebar for two-column,
    /// sidebar before main for panels.
    pub fn blocks(&self) -> Vec<&Block> {
        match &self.body {
            Body::SingleColumn { blocks } => blocks.iter().collect(),
            Body::TwoColumn { main, sidebar, .. } => main.iter().chain(sidebar).collect(),
            Body::Panels { sidebar, main, .. } => sidebar.iter().chain(main).collect(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Linkedin,
    Github,
    Website,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub name: String,
    pub title: Option<String>,
    pub contact: Vec<ContactItem>,
    pub name_color: String,
    pub accent_color: String,
    pub font: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Body
// ────────────────────────────────────────────────────────────────────────────

/// Colors of the bespoke two-panel identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelTheme {
    pub sidebar_background: String,
    pub sidebar_foreground: String,
    pub main_background: String,
    pub sidebar_width: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "camelCase")]
pub enum Body {
    SingleColumn {
        blocks: Vec<Block>,
    },
    TwoColumn {
        main: Vec<Block>,
        sidebar: Vec<Block>,
        #[serde(rename = "sidebarWidth")]
        sidebar_width: u8,
    },
    Panels {
        sidebar: Vec<Block>,
        main: Vec<Block>,
        theme: PanelTheme,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Blocks
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    /// Already cased per the template's heading rule.
    pub text: String,
    pub color: String,
    pub font: String,
    pub letter_spacing_em: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMarker {
    Bullet,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryDisplay {
    Inline,
    Bulleted,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryLine {
    pub name: Option<String>,
    pub items: Vec<String>,
}

/// One dated item: a job, a degree or a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Entry {
    pub heading: String,
    pub subheading: Option<String>,
    pub dates: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockContent {
    Paragraph {
        text: String,
    },
    List {
        items: Vec<String>,
        marker: ListMarker,
    },
    Categories {
        categories: Vec<CategoryLine>,
        display: CategoryDisplay,
    },
    Entries {
        entries: Vec<Entry>,
    },
    Group {
        children: Vec<Block>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub kind: SectionKindTag,
    /// Position of the originating section in its content collection.
    pub source_index: usize,
    pub heading: Option<Heading>,
    pub content: BlockContent,
    pub space_after_pt: f32,
}
