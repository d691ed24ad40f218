//! Single entry point for a render call.
//!
//! Colors are resolved first, then styling, then the layout strategy runs over
//! the normalized content. Nothing here mutates its inputs or keeps state, so
//! the same inputs always produce the same [`Document`].

use tracing::debug;

use crate::models::resume::ResumeContent;
use crate::models::template::TemplateDescriptor;
use crate::render::colors::resolve_colors;
use crate::render::document::Document;
use crate::render::header::build_header;
use crate::render::layout::{default_registry, LayoutContext, LayoutRegistry};
use crate::render::styling::resolve_styling;
use crate::render::RenderError;

/// Renders `content` with `template` using the standard layout registry.
pub fn render(
    content: &ResumeContent,
    template: &TemplateDescriptor,
    variant_index: usize,
) -> Result<Document, RenderError> {
    render_with(default_registry(), content, template, variant_index)
}

/// Renders against an explicit registry.
pub fn render_with(
    registry: &LayoutRegistry,
    content: &ResumeContent,
    template: &TemplateDescriptor,
    variant_index: usize,
) -> Result<Document, RenderError> {
    let colors = resolve_colors(template, variant_index);
    let styling = resolve_styling(template, colors.clone());
    let strategy = registry.strategy_for(template);

    debug!(
        template_id = %template.id,
        variant_index,
        layout = strategy.name(),
        sections = content.sections.len(),
        "Rendering resume"
    );

    let header = build_header(content, &styling);
    let body = strategy.layout(&LayoutContext {
        content,
        template,
        styling: &styling,
    })?;

    Ok(Document {
        template_id: template.id.clone(),
        colors,
        styling,
        header,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ingest_content;
    use crate::models::resume::{RawResumeContent, SectionKindTag};
    use crate::models::template::{
        ColorOptions, ColorVariant, LayoutAssignment, TemplateStyling,
    };
    use crate::render::bespoke::NOIR_TEMPLATE_ID;
    use crate::render::document::{BlockContent, Body, CategoryLine};
    use crate::render::ContentRegion;
    use serde_json::json;

    fn make_template(id: &str, layout: Option<LayoutAssignment>) -> TemplateDescriptor {
        TemplateDescriptor {
            id: id.to_string(),
            name: None,
            styling: TemplateStyling {
                primary_color: "#222222".to_string(),
                secondary_color: "#888888".to_string(),
                font_family: None,
                spacing: Default::default(),
                heading_case: Default::default(),
                skills_display: Default::default(),
            },
            fonts: None,
            color_options: Some(ColorOptions {
                palette: vec![
                    ColorVariant {
                        primary: "#0b3d91".to_string(),
                        secondary: "#9ec5fe".to_string(),
                        label: "Navy".to_string(),
                    },
                    ColorVariant {
                        primary: "#14532d".to_string(),
                        secondary: "#86efac".to_string(),
                        label: "Forest".to_string(),
                    },
                ],
            }),
            layout,
        }
    }

    fn two_column() -> LayoutAssignment {
        LayoutAssignment {
            kind: Some("two-column".to_string()),
            main: vec!["experience".to_string()],
            sidebar: vec!["education".to_string(), "skills".to_string()],
            sidebar_width: Some(30),
        }
    }

    fn content(value: serde_json::Value) -> ResumeContent {
        let raw: RawResumeContent = serde_json::from_value(value).unwrap();
        ingest_content(&raw)
    }

    #[test]
    fn test_single_column_end_to_end() {
        let content = content(json!({
            "name": "Jane Doe",
            "sections": [
                { "title": "Summary", "content": "Engineer." },
                { "title": "Skills", "categories": { "Languages": ["Go", "Rust"] } }
            ]
        }));

        let doc = render(&content, &make_template("classic", None), 0).unwrap();

        assert_eq!(doc.header.name, "Jane Doe");
        let Body::SingleColumn { blocks } = &doc.body else {
            panic!("expected single column");
        };
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0].content,
            BlockContent::Paragraph {
                text: "Engineer.".to_string()
            }
        );
        assert_eq!(blocks[1].heading.as_ref().unwrap().text, "SKILLS");
        let BlockContent::Categories { categories, .. } = &blocks[1].content else {
            panic!("expected categories");
        };
        assert_eq!(
            categories,
            &vec![CategoryLine {
                name: Some("Languages".to_string()),
                items: vec!["Go".to_string(), "Rust".to_string()],
            }]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let content = content(json!({
            "name": "Jane Doe",
            "contact": { "email": "jane@example.com", "github": "https://github.com/jane" },
            "sections": [
                { "title": "Work Experience", "jobs": [{ "title": "SRE", "company": "Acme", "bullets": ["On-call lead"] }] },
                { "title": "Education", "education": ["BSc, MIT"] }
            ]
        }));
        let template = make_template("modern", Some(two_column()));

        let first = render(&content, &template, 1).unwrap();
        let second = render(&content, &template, 1).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_variant_index_selects_palette_entry() {
        let content = content(json!({ "name": "Jane Doe", "sections": [] }));
        let template = make_template("classic", None);

        let forest = render(&content, &template, 1).unwrap();
        let fallback = render(&content, &template, 99).unwrap();

        assert_eq!(forest.colors.primary, "#14532d");
        assert_eq!(forest.header.name_color, "#14532d");
        assert_eq!(fallback.colors.primary, "#0b3d91");
    }

    #[test]
    fn test_single_column_preserves_document_order() {
        let content = content(json!({
            "name": "Jane Doe",
            "sections": [
                { "title": "Certifications", "items": ["CKA"] },
                { "title": "Hobbies", "items": ["Chess"] },
                { "title": "Experience", "jobs": [{ "title": "SRE", "company": "Acme" }] },
                { "title": "Summary", "content": "Engineer." }
            ]
        }));

        let doc = render(&content, &make_template("classic", None), 0).unwrap();
        let kinds: Vec<_> = doc.blocks().iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKindTag::Certifications,
                SectionKindTag::Experience,
                SectionKindTag::Summary
            ]
        );
    }

    #[test]
    fn test_two_column_partitions_sections() {
        let content = content(json!({
            "name": "Jane Doe",
            "sections": [
                { "title": "Technical Skills", "items": ["Rust"] },
                { "title": "Professional Experience", "jobs": [{ "title": "SRE", "company": "Acme" }] },
                { "title": "Education & Training", "education": ["BSc, MIT"] },
                { "title": "Publications", "items": ["On Queues"] }
            ]
        }));

        let doc = render(&content, &make_template("modern", Some(two_column())), 0).unwrap();
        let Body::TwoColumn {
            main,
            sidebar,
            sidebar_width,
        } = &doc.body
        else {
            panic!("expected two columns");
        };

        let main_titles: Vec<_> = main.iter().map(|b| b.heading.as_ref().unwrap().text.as_str()).collect();
        let sidebar_titles: Vec<_> =
            sidebar.iter().map(|b| b.heading.as_ref().unwrap().text.as_str()).collect();
        assert_eq!(main_titles, vec!["PROFESSIONAL EXPERIENCE", "PUBLICATIONS"]);
        assert_eq!(sidebar_titles, vec!["TECHNICAL SKILLS", "EDUCATION & TRAINING"]);
        assert_eq!(*sidebar_width, 30);
    }

    #[test]
    fn test_bespoke_template_ignores_title_sections() {
        let content = content(json!({
            "name": "Jane Doe",
            "sections": [
                { "title": "Professional Experience", "jobs": [{ "title": "SRE", "company": "Acme" }] }
            ]
        }));
        let template = make_template(NOIR_TEMPLATE_ID, Some(two_column()));

        let err = render(&content, &template, 0).unwrap_err();
        assert_eq!(
            err,
            RenderError::IncompleteContent {
                template_id: NOIR_TEMPLATE_ID.to_string(),
                missing: vec![ContentRegion::Sidebar, ContentRegion::Main],
            }
        );
    }

    #[test]
    fn test_bespoke_template_renders_panels() {
        let content = content(json!({
            "name": "Jane Doe",
            "contact": { "email": "jane@example.com" },
            "sections": [{ "type": "experience", "jobs": [{ "title": "SRE", "company": "Acme" }] }],
            "sidebar": { "sections": [{ "type": "skills", "items": ["Rust"] }] }
        }));
        let template = make_template(NOIR_TEMPLATE_ID, None);

        let doc = render(&content, &template, 0).unwrap();
        assert!(matches!(doc.body, Body::Panels { .. }));
        assert_eq!(doc.template_id, NOIR_TEMPLATE_ID);
        let kinds: Vec<_> = doc.blocks().iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![SectionKindTag::Skills, SectionKindTag::Experience]);
    }

    #[test]
    fn test_empty_registry_treats_bespoke_id_as_generic() {
        let content = content(json!({
            "name": "Jane Doe",
            "sections": [{ "title": "Summary", "content": "Engineer." }]
        }));
        let template = make_template(NOIR_TEMPLATE_ID, None);

        let doc = render_with(&LayoutRegistry::empty(), &content, &template, 0).unwrap();
        assert!(matches!(doc.body, Body::SingleColumn { .. }));
    }
}
