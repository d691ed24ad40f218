//! Bespoke "noir" layout: black sidebar, white main panel.
//!
//! This template does not use title-fragment partitioning at all. The sidebar
//! is read from `content.sidebar.sections` and the main panel from
//! `content.sections`, and in both only sections tagged by an explicit `type`
//! field count. Titles are display text here, nothing more.
//!
//! The sidebar draws contact, education and skills with its own renderers
//! instead of the generic registry.

use tracing::debug;

use crate::models::resume::{Section, SectionKind, SectionKindTag, SectionOrigin};
use crate::render::document::{
    Block, BlockContent, Body, Entry, Heading, ListMarker, PanelTheme,
};
use crate::render::header::contact_items;
use crate::render::layout::{LayoutContext, LayoutStrategy};
use crate::render::sections::{education_entry, job_entry};
use crate::render::{ContentRegion, RenderError};

pub const NOIR_TEMPLATE_ID: &str = "noir";

const SIDEBAR_BACKGROUND: &str = "#1a1a1a";
const SIDEBAR_FOREGROUND: &str = "#ffffff";
const MAIN_BACKGROUND: &str = "#ffffff";
const SIDEBAR_WIDTH: u8 = 35;
const HEADING_LETTER_SPACING_EM: f32 = 0.12;
const SIDEBAR_GAP_PT: f32 = 14.0;
const MAIN_GAP_PT: f32 = 16.0;

const SIDEBAR_KINDS: [SectionKindTag; 3] = [
    SectionKindTag::Contact,
    SectionKindTag::Education,
    SectionKindTag::Skills,
];
const MAIN_KINDS: [SectionKindTag; 2] = [SectionKindTag::Summary, SectionKindTag::Experience];

pub struct NoirStrategy;

impl LayoutStrategy for NoirStrategy {
    fn name(&self) -> &'static str {
        NOIR_TEMPLATE_ID
    }

    fn layout(&self, ctx: &LayoutContext<'_>) -> Result<Body, RenderError> {
        let sidebar_sections = ctx
            .content
            .sidebar
            .as_ref()
            .map(|sidebar| sidebar.sections.as_slice())
            .unwrap_or(&[]);

        let sidebar: Vec<Block> = typed_sections(sidebar_sections, &SIDEBAR_KINDS)
            .filter_map(|(index, section)| render_sidebar_section(section, index, ctx))
            .collect();
        let main: Vec<Block> = typed_sections(&ctx.content.sections, &MAIN_KINDS)
            .filter_map(|(index, section)| render_main_section(section, index, ctx))
            .collect();

        let mut missing = Vec::new();
        if sidebar.is_empty() {
            missing.push(ContentRegion::Sidebar);
        }
        if main.is_empty() {
            missing.push(ContentRegion::Main);
        }
        if !missing.is_empty() {
            return Err(RenderError::IncompleteContent {
                template_id: ctx.template.id.clone(),
                missing,
            });
        }

        Ok(Body::Panels {
            sidebar,
            main,
            theme: PanelTheme {
                sidebar_background: SIDEBAR_BACKGROUND.to_string(),
                sidebar_foreground: SIDEBAR_FOREGROUND.to_string(),
                main_background: MAIN_BACKGROUND.to_string(),
                sidebar_width: SIDEBAR_WIDTH,
            },
        })
    }
}

/// Sections tagged by `type` whose kind belongs to the region, with their indices.
fn typed_sections<'a>(
    sections: &'a [Section],
    kinds: &'a [SectionKindTag],
) -> impl Iterator<Item = (usize, &'a Section)> + 'a {
    sections.iter().enumerate().filter(move |(index, section)| {
        let accepted = section.origin == SectionOrigin::TypeField && kinds.contains(&section.tag());
        if !accepted {
            debug!(index, title = %section.title, "Section not read by noir layout");
        }
        accepted
    })
}

fn panel_heading(title: &str, color: &str, ctx: &LayoutContext<'_>) -> Heading {
    Heading {
        text: title.to_uppercase(),
        color: color.to_string(),
        font: ctx.styling.fonts.section.clone(),
        letter_spacing_em: HEADING_LETTER_SPACING_EM,
    }
}

fn render_sidebar_section(section: &Section, index: usize, ctx: &LayoutContext<'_>) -> Option<Block> {
    let content = match &section.kind {
        SectionKind::Contact { lines } => {
            let lines = if lines.is_empty() {
                contact_items(&ctx.content.contact)
                    .into_iter()
                    .map(|item| item.value)
                    .collect()
            } else {
                lines.clone()
            };
            if lines.is_empty() {
                return None;
            }
            BlockContent::List {
                items: lines,
                marker: ListMarker::Plain,
            }
        }
        SectionKind::Education { entries } if !entries.is_empty() => BlockContent::Entries {
            entries: entries.iter().map(education_entry).collect(),
        },
        // Flat list: categories are not drawn in the sidebar.
        SectionKind::Skills { categories } => {
            let items: Vec<String> = categories
                .iter()
                .flat_map(|c| c.items.iter().cloned())
                .collect();
            if items.is_empty() {
                return None;
            }
            BlockContent::List {
                items,
                marker: ListMarker::Bullet,
            }
        }
        _ => return None,
    };

    Some(Block {
        kind: section.tag(),
        source_index: index,
        heading: Some(panel_heading(&section.title, SIDEBAR_FOREGROUND, ctx)),
        content,
        space_after_pt: SIDEBAR_GAP_PT,
    })
}

fn render_main_section(section: &Section, index: usize, ctx: &LayoutContext<'_>) -> Option<Block> {
    let content = match &section.kind {
        SectionKind::Summary { content } if !content.trim().is_empty() => BlockContent::Paragraph {
            text: content.trim().to_string(),
        },
        SectionKind::Experience { jobs } if !jobs.is_empty() => BlockContent::Entries {
            entries: jobs.iter().map(job_entry).collect::<Vec<Entry>>(),
        },
        _ => return None,
    };

    Some(Block {
        kind: section.tag(),
        source_index: index,
        heading: Some(panel_heading(&section.title, &ctx.styling.colors.primary, ctx)),
        content,
        space_after_pt: MAIN_GAP_PT,
    })
}
