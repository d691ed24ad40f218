//! Layout resolution and the generic layout strategies.
//!
//! A template resolves to exactly one [`LayoutMode`]. Bespoke ids are a total
//! override: once a template id is registered as bespoke, its `layout`
//! assignment is never consulted and the generic strategies never run for it.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::content::aliases::normalize_title;
use crate::models::resume::{ResumeContent, Section};
use crate::models::template::{TemplateDescriptor, DEFAULT_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH};
use crate::render::bespoke::{NoirStrategy, NOIR_TEMPLATE_ID};
use crate::render::document::Body;
use crate::render::sections::render_sections;
use crate::render::styling::EffectiveStyling;
use crate::render::RenderError;

// ────────────────────────────────────────────────────────────────────────────
// Layout mode
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LayoutMode {
    SingleColumn,
    TwoColumn { main: Vec<String>, sidebar: Vec<String> },
    Bespoke { template_id: String },
}

/// Classifies a template against the default strategy registry.
pub fn resolve_layout(template: &TemplateDescriptor) -> LayoutMode {
    default_registry().mode_for(template)
}

// ────────────────────────────────────────────────────────────────────────────
// Strategy seam
// ────────────────────────────────────────────────────────────────────────────

/// Inputs shared by every strategy for one render call.
pub struct LayoutContext<'a> {
    pub content: &'a ResumeContent,
    pub template: &'a TemplateDescriptor,
    pub styling: &'a EffectiveStyling,
}

/// Builds the document body for one family of templates.
pub trait LayoutStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn layout(&self, ctx: &LayoutContext<'_>) -> Result<Body, RenderError>;
}

/// Every section in document order, one flow.
pub struct SingleColumnStrategy;

impl LayoutStrategy for SingleColumnStrategy {
    fn name(&self) -> &'static str {
        "single_column"
    }

    fn layout(&self, ctx: &LayoutContext<'_>) -> Result<Body, RenderError> {
        Ok(Body::SingleColumn {
            blocks: render_sections(ctx.content.sections.iter().enumerate(), ctx.styling),
        })
    }
}

/// Sections split into main and sidebar by title fragment.
pub struct TwoColumnStrategy;

impl LayoutStrategy for TwoColumnStrategy {
    fn name(&self) -> &'static str {
        "two_column"
    }

    fn layout(&self, ctx: &LayoutContext<'_>) -> Result<Body, RenderError> {
        let Some(assignment) = ctx.template.region_assignment() else {
            return SingleColumnStrategy.layout(ctx);
        };

        let (main, sidebar) =
            partition_sections(&ctx.content.sections, &assignment.main, &assignment.sidebar);

        Ok(Body::TwoColumn {
            main: render_sections(main, ctx.styling),
            sidebar: render_sections(sidebar, ctx.styling),
            sidebar_width: assignment
                .sidebar_width
                .unwrap_or(DEFAULT_SIDEBAR_WIDTH)
                .min(MAX_SIDEBAR_WIDTH),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Region partitioning
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Main,
    Sidebar,
}

/// Assigns a title to a region by normalized substring match.
///
/// Main fragments are tested first. A title matching neither list lands in
/// main so that no section disappears from the page.
pub fn assign_region(title: &str, main: &[String], sidebar: &[String]) -> Region {
    let title = normalize_title(title);
    let matches_any = |fragments: &[String]| {
        fragments.iter().any(|fragment| {
            let fragment = normalize_title(fragment);
            !fragment.is_empty() && title.contains(&fragment)
        })
    };

    if matches_any(main) {
        Region::Main
    } else if matches_any(sidebar) {
        Region::Sidebar
    } else {
        Region::Main
    }
}

/// Splits sections into `(main, sidebar)`, each keeping document order and
/// the original section index.
pub fn partition_sections<'a>(
    sections: &'a [Section],
    main: &[String],
    sidebar: &[String],
) -> (Vec<(usize, &'a Section)>, Vec<(usize, &'a Section)>) {
    sections
        .iter()
        .enumerate()
        .partition(|(_, section)| assign_region(&section.title, main, sidebar) == Region::Main)
}

// ────────────────────────────────────────────────────────────────────────────
// Registry
// ────────────────────────────────────────────────────────────────────────────

/// Strategy lookup keyed by template id, with generic fallbacks.
pub struct LayoutRegistry {
    bespoke: HashMap<&'static str, Box<dyn LayoutStrategy>>,
    single: SingleColumnStrategy,
    two_column: TwoColumnStrategy,
}

impl LayoutRegistry {
    /// Generic strategies only.
    pub fn empty() -> Self {
        LayoutRegistry {
            bespoke: HashMap::new(),
            single: SingleColumnStrategy,
            two_column: TwoColumnStrategy,
        }
    }

    /// The registry used by the service: generic strategies plus every bespoke template.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register_bespoke(NOIR_TEMPLATE_ID, Box::new(NoirStrategy));
        registry
    }

    pub fn register_bespoke(&mut self, template_id: &'static str, strategy: Box<dyn LayoutStrategy>) {
        self.bespoke.insert(template_id, strategy);
    }

    pub fn is_bespoke(&self, template_id: &str) -> bool {
        self.bespoke.contains_key(template_id)
    }

    pub fn mode_for(&self, template: &TemplateDescriptor) -> LayoutMode {
        if self.is_bespoke(&template.id) {
            return LayoutMode::Bespoke {
                template_id: template.id.clone(),
            };
        }
        match template.region_assignment() {
            Some(assignment) => LayoutMode::TwoColumn {
                main: assignment.main.clone(),
                sidebar: assignment.sidebar.clone(),
            },
            None => LayoutMode::SingleColumn,
        }
    }

    pub fn strategy_for(&self, template: &TemplateDescriptor) -> &dyn LayoutStrategy {
        if let Some(strategy) = self.bespoke.get(template.id.as_str()) {
            return strategy.as_ref();
        }
        if template.region_assignment().is_some() {
            &self.two_column
        } else {
            &self.single
        }
    }
}

pub fn default_registry() -> &'static LayoutRegistry {
    static REGISTRY: OnceLock<LayoutRegistry> = OnceLock::new();
    REGISTRY.get_or_init(LayoutRegistry::standard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{SectionKind, SectionOrigin};
    use crate::models::template::{LayoutAssignment, TemplateStyling};

    fn make_template(id: &str, layout: Option<LayoutAssignment>) -> TemplateDescriptor {
        TemplateDescriptor {
            id: id.to_string(),
            name: None,
            styling: TemplateStyling {
                primary_color: "#000".to_string(),
                secondary_color: "#666".to_string(),
                font_family: None,
                spacing: Default::default(),
                heading_case: Default::default(),
                skills_display: Default::default(),
            },
            fonts: None,
            color_options: None,
            layout,
        }
    }

    fn assignment(main: &[&str], sidebar: &[&str]) -> LayoutAssignment {
        LayoutAssignment {
            kind: Some("two-column".to_string()),
            main: main.iter().map(|s| s.to_string()).collect(),
            sidebar: sidebar.iter().map(|s| s.to_string()).collect(),
            sidebar_width: None,
        }
    }

    fn make_section(title: &str) -> Section {
        Section {
            title: title.to_string(),
            origin: SectionOrigin::TitleAlias,
            kind: SectionKind::Summary {
                content: "x".to_string(),
            },
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_layout_is_single_column() {
        assert_eq!(resolve_layout(&make_template("classic", None)), LayoutMode::SingleColumn);
        assert_eq!(
            resolve_layout(&make_template("classic", Some(assignment(&[], &[])))),
            LayoutMode::SingleColumn
        );
    }

    #[test]
    fn test_assignment_is_two_column() {
        let mode = resolve_layout(&make_template(
            "modern",
            Some(assignment(&["experience"], &["skills"])),
        ));
        assert!(matches!(mode, LayoutMode::TwoColumn { .. }));
    }

    #[test]
    fn test_bespoke_id_overrides_assignment() {
        let t = make_template(NOIR_TEMPLATE_ID, Some(assignment(&["experience"], &["skills"])));
        assert_eq!(
            resolve_layout(&t),
            LayoutMode::Bespoke {
                template_id: NOIR_TEMPLATE_ID.to_string()
            }
        );
        assert_eq!(default_registry().strategy_for(&t).name(), "noir");
    }

    #[test]
    fn test_region_partitioning_by_fragment() {
        let main = strings(&["experience"]);
        let sidebar = strings(&["education", "skills"]);

        assert_eq!(assign_region("Professional Experience", &main, &sidebar), Region::Main);
        assert_eq!(assign_region("Education & Training", &main, &sidebar), Region::Sidebar);
        assert_eq!(assign_region("Technical Skills", &main, &sidebar), Region::Sidebar);
    }

    #[test]
    fn test_fragments_are_normalized() {
        let main = strings(&["work-experience"]);
        let sidebar = strings(&["Board_Roles"]);

        assert_eq!(assign_region("WORK EXPERIENCE", &main, &sidebar), Region::Main);
        assert_eq!(assign_region("Board Roles", &main, &sidebar), Region::Sidebar);
    }

    #[test]
    fn test_unmatched_section_falls_to_main() {
        let main = strings(&["experience"]);
        let sidebar = strings(&["skills"]);
        assert_eq!(assign_region("Publications", &main, &sidebar), Region::Main);
    }

    #[test]
    fn test_partition_preserves_order_and_indices() {
        let sections = vec![
            make_section("Skills"),
            make_section("Experience"),
            make_section("Education"),
            make_section("Projects"),
            make_section("Languages & Skills"),
        ];
        let (main, sidebar) = partition_sections(
            &sections,
            &strings(&["experience", "projects"]),
            &strings(&["skills", "education"]),
        );

        let main_idx: Vec<_> = main.iter().map(|(i, _)| *i).collect();
        let sidebar_idx: Vec<_> = sidebar.iter().map(|(i, _)| *i).collect();
        assert_eq!(main_idx, vec![1, 3]);
        assert_eq!(sidebar_idx, vec![0, 2, 4]);
    }

    #[test]
    fn test_two_column_width_is_capped_at_full_page() {
        let mut wide = assignment(&["experience"], &["skills"]);
        wide.sidebar_width = Some(150);
        let template = make_template("wide", Some(wide));
        let content = ResumeContent {
            name: "Jane Doe".to_string(),
            title: None,
            contact: Default::default(),
            sections: vec![make_section("Summary")],
            sidebar: None,
        };
        let styling = crate::render::styling::resolve_styling(
            &template,
            crate::render::colors::resolve_colors(&template, 0),
        );

        let body = TwoColumnStrategy
            .layout(&LayoutContext {
                content: &content,
                template: &template,
                styling: &styling,
            })
            .unwrap();
        let Body::TwoColumn { sidebar_width, .. } = body else {
            panic!("expected two columns");
        };
        assert_eq!(sidebar_width, MAX_SIDEBAR_WIDTH);
    }

    #[test]
    fn test_empty_registry_has_no_bespoke_templates() {
        let registry = LayoutRegistry::empty();
        let t = make_template(NOIR_TEMPLATE_ID, None);
        assert!(!registry.is_bespoke(NOIR_TEMPLATE_ID));
        assert_eq!(registry.strategy_for(&t).name(), "single_column");
    }
}
