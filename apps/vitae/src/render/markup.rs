//! HTML preview of a [`Document`].
//!
//! Produces one standalone page with inline styles. Every piece of resume text
//! is spliced through maud, which escapes it.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::models::template::MAX_SIDEBAR_WIDTH;
use crate::render::document::{
    Block, BlockContent, Body, CategoryDisplay, Document, Entry, Header, Heading, ListMarker,
    PanelTheme,
};
use crate::render::styling::EffectiveStyling;

const PAGE_CSS: &str = "*{box-sizing:border-box}body{margin:0;background:#f3f4f6}\
.page{max-width:816px;margin:24px auto;background:#fff;box-shadow:0 1px 4px rgba(0,0,0,.15)}\
.columns{display:flex}.columns>div{padding:32px}\
ul{margin:0;padding-left:18px}ul.plain{list-style:none;padding-left:0}\
h1,h2,h3,p{margin:0}";

pub fn to_html(doc: &Document) -> Markup {
    let styling = &doc.styling;
    let body_style = format!(
        "font-family:{};line-height:{};color:#1f2937;font-size:10.5pt",
        styling.fonts.body, styling.spacing.line_height
    );

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (doc.header.name) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body style=(body_style) {
                div.page data-template=(doc.template_id) {
                    @match &doc.body {
                        Body::SingleColumn { blocks } => {
                            div style="padding:40px" {
                                (header(&doc.header, styling))
                                (blocks_markup(blocks, styling))
                            }
                        }
                        Body::TwoColumn { main, sidebar, sidebar_width } => {
                            div style="padding:40px 40px 0" {
                                (header(&doc.header, styling))
                            }
                            div.columns {
                                div style=(format!("width:{}%", main_width(*sidebar_width))) {
                                    (blocks_markup(main, styling))
                                }
                                div style=(format!("width:{}%;background:#f9fafb", sidebar_width)) {
                                    (blocks_markup(sidebar, styling))
                                }
                            }
                        }
                        Body::Panels { sidebar, main, theme } => {
                            (panels(&doc.header, sidebar, main, theme, styling))
                        }
                    }
                }
            }
        }
    }
}

/// Share of the page left to the main column.
fn main_width(sidebar_width: u8) -> u8 {
    MAX_SIDEBAR_WIDTH.saturating_sub(sidebar_width)
}

fn header(header: &Header, styling: &EffectiveStyling) -> Markup {
    let gap = styling.spacing.section_gap_pt;
    html! {
        header style=(format!("margin-bottom:{gap}pt")) {
            h1 style=(format!("font-family:{};color:{};font-size:24pt", header.font, header.name_color)) {
                (header.name)
            }
            @if let Some(title) = &header.title {
                p style=(format!("color:{};font-size:12pt", header.accent_color)) { (title) }
            }
            @if !header.contact.is_empty() {
                p style="font-size:9pt;color:#4b5563" {
                    @for (i, item) in header.contact.iter().enumerate() {
                        @if i > 0 { " · " }
                        span { (item.value) }
                    }
                }
            }
        }
    }
}

/// The noir identity: sidebar carries the header, main carries the story.
fn panels(
    header_block: &Header,
    sidebar: &[Block],
    main: &[Block],
    theme: &PanelTheme,
    styling: &EffectiveStyling,
) -> Markup {
    let sidebar_style = format!(
        "width:{}%;background:{};color:{}",
        theme.sidebar_width, theme.sidebar_background, theme.sidebar_foreground
    );
    let main_style = format!(
        "width:{}%;background:{}",
        main_width(theme.sidebar_width),
        theme.main_background
    );

    html! {
        div.columns style="min-height:1056px" {
            div style=(sidebar_style) {
                h1 style=(format!("font-family:{};font-size:22pt", header_block.font)) {
                    (header_block.name)
                }
                @if let Some(title) = &header_block.title {
                    p style="font-size:11pt;opacity:.8;margin-bottom:18pt" { (title) }
                }
                (blocks_markup(sidebar, styling))
            }
            div style=(main_style) {
                (blocks_markup(main, styling))
            }
        }
    }
}

fn blocks_markup(blocks: &[Block], styling: &EffectiveStyling) -> Markup {
    html! {
        @for block in blocks {
            (block_markup(block, styling))
        }
    }
}

fn block_markup(block: &Block, styling: &EffectiveStyling) -> Markup {
    html! {
        section data-kind=(block.kind.type_name()) style=(format!("margin-bottom:{}pt", block.space_after_pt)) {
            @if let Some(heading) = &block.heading {
                (heading_markup(heading))
            }
            (content_markup(&block.content, styling))
        }
    }
}

fn heading_markup(heading: &Heading) -> Markup {
    let style = format!(
        "font-family:{};color:{};letter-spacing:{}em;font-size:11pt;margin-bottom:4pt",
        heading.font, heading.color, heading.letter_spacing_em
    );
    html! {
        h2 style=(style) { (heading.text) }
    }
}

fn content_markup(content: &BlockContent, styling: &EffectiveStyling) -> Markup {
    let entry_gap = styling.spacing.entry_gap_pt;
    html! {
        @match content {
            BlockContent::Paragraph { text } => {
                p { (text) }
            }
            BlockContent::List { items, marker } => {
                ul class=[(*marker == ListMarker::Plain).then_some("plain")] {
                    @for item in items {
                        li { (item) }
                    }
                }
            }
            BlockContent::Categories { categories, display } => {
                @for category in categories {
                    @match display {
                        CategoryDisplay::Inline => {
                            p {
                                @if let Some(name) = &category.name {
                                    strong { (name) ": " }
                                }
                                (category.items.join(", "))
                            }
                        }
                        CategoryDisplay::Bulleted => {
                            @if let Some(name) = &category.name {
                                h3 style="font-size:10pt" { (name) }
                            }
                            ul {
                                @for item in &category.items {
                                    li { (item) }
                                }
                            }
                        }
                    }
                }
            }
            BlockContent::Entries { entries } => {
                @for entry in entries {
                    (entry_markup(entry, entry_gap))
                }
            }
            BlockContent::Group { children } => {
                (blocks_markup(children, styling))
            }
        }
    }
}

fn entry_markup(entry: &Entry, gap_pt: f32) -> Markup {
    html! {
        div style=(format!("margin-bottom:{gap_pt}pt")) {
            p { strong { (entry.heading) } }
            @if entry.subheading.is_some() || entry.dates.is_some() || entry.location.is_some() {
                p style="font-style:italic" {
                    @if let Some(sub) = &entry.subheading { (sub) }
                    @if let Some(dates) = &entry.dates { " | " (dates) }
                    @if let Some(location) = &entry.location { " | " (location) }
                }
            }
            @if let Some(description) = &entry.description {
                p { (description) }
            }
            @if !entry.tags.is_empty() {
                p style="font-size:9pt;color:#6b7280" { (entry.tags.join(" · ")) }
            }
            @if !entry.bullets.is_empty() {
                ul {
                    @for bullet in &entry.bullets {
                        li { (bullet) }
                    }
                }
            }
        }
    }
}
