//! Section renderer registry: one renderer per [`SectionKind`].
//!
//! Renderers are pure. They read styling from [`EffectiveStyling`] and return
//! `None` for sections with nothing to show or with no generic renderer, so a
//! single section never takes the rest of the document down with it.

use tracing::debug;

use crate::models::resume::{EducationItem, Job, Project, Section, SectionKind, SkillCategory};
use crate::models::template::SkillsDisplay;
use crate::render::document::{
    Block, BlockContent, CategoryDisplay, CategoryLine, Entry, Heading, ListMarker,
};
use crate::render::styling::EffectiveStyling;

// ────────────────────────────────────────────────────────────────────────────
// Dispatch
// ────────────────────────────────────────────────────────────────────────────

/// Renders one section. `index` is the section's position in its source collection.
pub fn render_section(section: &Section, index: usize, styling: &EffectiveStyling) -> Option<Block> {
    if section.kind.is_empty() {
        debug!(title = %section.title, index, "Skipping empty section");
        return None;
    }

    let content = match &section.kind {
        SectionKind::Summary { content } => paragraph(content),
        SectionKind::Skills { categories } => render_skills(categories, styling.skills_display),
        SectionKind::Experience { jobs } => render_jobs(jobs),
        SectionKind::Education { entries } => render_education(entries),
        SectionKind::Projects { projects } => render_projects(projects),
        SectionKind::Certifications { items }
        | SectionKind::Publications { items }
        | SectionKind::Memberships { items }
        | SectionKind::Achievements { items }
        | SectionKind::BoardRoles { items } => bullet_list(items),
        SectionKind::ExecutiveHybrid { content, jobs } => {
            render_executive(section, content.as_deref(), jobs, index, styling)
        }
        // Contact details live in the header; only bespoke sidebars draw them as a section.
        SectionKind::Contact { .. } => {
            debug!(title = %section.title, "No generic renderer for contact sections");
            return None;
        }
    };

    Some(Block {
        kind: section.tag(),
        source_index: index,
        heading: Some(section_heading(&section.title, styling)),
        content,
        space_after_pt: styling.spacing.section_gap_pt,
    })
}

/// Renders a run of `(index, section)` pairs, dropping the ones that render nothing.
pub fn render_sections<'a, I>(sections: I, styling: &EffectiveStyling) -> Vec<Block>
where
    I: IntoIterator<Item = (usize, &'a Section)>,
{
    sections
        .into_iter()
        .filter_map(|(index, section)| render_section(section, index, styling))
        .collect()
}

pub fn section_heading(title: &str, styling: &EffectiveStyling) -> Heading {
    Heading {
        text: styling.heading.apply(title),
        color: styling.colors.primary.clone(),
        font: styling.fonts.section.clone(),
        letter_spacing_em: styling.heading.letter_spacing_em,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Per-kind renderers
// ────────────────────────────────────────────────────────────────────────────

fn paragraph(text: &str) -> BlockContent {
    BlockContent::Paragraph {
        text: text.trim().to_string(),
    }
}

fn bullet_list(items: &[String]) -> BlockContent {
    BlockContent::List {
        items: items.to_vec(),
        marker: ListMarker::Bullet,
    }
}

fn render_skills(categories: &[SkillCategory], display: SkillsDisplay) -> BlockContent {
    BlockContent::Categories {
        categories: categories
            .iter()
            .filter(|c| !c.items.is_empty())
            .map(|c| CategoryLine {
                name: c.name.clone(),
                items: c.items.clone(),
            })
            .collect(),
        display: match display {
            SkillsDisplay::Inline => CategoryDisplay::Inline,
            SkillsDisplay::Bulleted => CategoryDisplay::Bulleted,
        },
    }
}

fn render_jobs(jobs: &[Job]) -> BlockContent {
    BlockContent::Entries {
        entries: jobs.iter().map(job_entry).collect(),
    }
}

fn render_education(entries: &[EducationItem]) -> BlockContent {
    BlockContent::Entries {
        entries: entries.iter().map(education_entry).collect(),
    }
}

fn render_projects(projects: &[Project]) -> BlockContent {
    BlockContent::Entries {
        entries: projects.iter().map(project_entry).collect(),
    }
}

/// Summary-shaped paragraph followed by experience-shaped entries, under one heading.
fn render_executive(
    section: &Section,
    content: Option<&str>,
    jobs: &[Job],
    index: usize,
    styling: &EffectiveStyling,
) -> BlockContent {
    let mut children = Vec::new();

    if let Some(text) = content.filter(|t| !t.trim().is_empty()) {
        children.push(Block {
            kind: section.tag(),
            source_index: index,
            heading: None,
            content: paragraph(text),
            space_after_pt: styling.spacing.entry_gap_pt,
        });
    }
    if !jobs.is_empty() {
        children.push(Block {
            kind: section.tag(),
            source_index: index,
            heading: None,
            content: render_jobs(jobs),
            space_after_pt: styling.spacing.entry_gap_pt,
        });
    }

    BlockContent::Group { children }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry builders (shared with bespoke layouts)
// ────────────────────────────────────────────────────────────────────────────

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Company line first, then the role and dates, then bullets.
pub fn job_entry(job: &Job) -> Entry {
    let (heading, subheading) = match non_empty(&job.company) {
        Some(company) => (company, non_empty(&job.title)),
        None => (job.title.trim().to_string(), None),
    };

    Entry {
        heading,
        subheading,
        dates: non_empty(&job.dates),
        location: non_empty(&job.location),
        description: None,
        tags: Vec::new(),
        bullets: job
            .bullets
            .iter()
            .filter_map(|b| non_empty(b))
            .collect(),
    }
}

pub fn education_entry(item: &EducationItem) -> Entry {
    match item {
        EducationItem::Legacy(text) => Entry {
            heading: text.clone(),
            ..Entry::default()
        },
        EducationItem::Structured(edu) => {
            let (heading, subheading) = match non_empty(&edu.degree) {
                Some(degree) => (degree, non_empty(&edu.institution)),
                None => (edu.institution.trim().to_string(), None),
            };
            Entry {
                heading,
                subheading,
                dates: non_empty(&edu.dates),
                location: edu.location.as_deref().and_then(non_empty),
                description: edu.gpa.as_ref().map(|gpa| format!("GPA: {gpa}")),
                tags: Vec::new(),
                bullets: Vec::new(),
            }
        }
    }
}

pub fn project_entry(project: &Project) -> Entry {
    Entry {
        heading: project.name.trim().to_string(),
        subheading: None,
        dates: None,
        location: None,
        description: non_empty(&project.description),
        tags: project.technologies.clone(),
        bullets: project
            .achievements
            .iter()
            .filter_map(|a| non_empty(a))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EduEntry, SectionOrigin};
    use crate::models::template::{HeadingCase, Spacing};
    use crate::render::colors::ResolvedColors;
    use crate::render::styling::{EffectiveFonts, HeadingStyle, SpacingScale};

    fn make_styling(display: SkillsDisplay) -> EffectiveStyling {
        EffectiveStyling {
            colors: ResolvedColors {
                primary: "#1e3a8a".to_string(),
                secondary: "#93c5fd".to_string(),
                label: None,
            },
            fonts: EffectiveFonts {
                header: "Lato".to_string(),
                section: "Oswald".to_string(),
                body: "Lato".to_string(),
            },
            spacing: SpacingScale::for_spacing(Spacing::Compact),
            heading: HeadingStyle::for_case(HeadingCase::Upper),
            skills_display: display,
        }
    }

    fn make_section(title: &str, kind: SectionKind) -> Section {
        Section {
            title: title.to_string(),
            origin: SectionOrigin::TitleAlias,
            kind,
        }
    }

    fn make_job(company: &str, title: &str) -> Job {
        Job {
            title: title.to_string(),
            company: company.to_string(),
            location: "Remote".to_string(),
            dates: "2021 - Present".to_string(),
            bullets: vec!["Shipped the billing rewrite".to_string(), "  ".to_string()],
        }
    }

    #[test]
    fn test_heading_uses_styling() {
        let styling = make_styling(SkillsDisplay::Inline);
        let block = render_section(
            &make_section("Summary", SectionKind::Summary {
                content: " Engineer. ".to_string(),
            }),
            0,
            &styling,
        )
        .unwrap();

        let heading = block.heading.unwrap();
        assert_eq!(heading.text, "SUMMARY");
        assert_eq!(heading.font, "Oswald");
        assert_eq!(heading.color, "#1e3a8a");
        assert_eq!(block.space_after_pt, 8.0);
        assert_eq!(
            block.content,
            BlockContent::Paragraph {
                text: "Engineer.".to_string()
            }
        );
    }

    #[test]
    fn test_experience_entry_shape() {
        let styling = make_styling(SkillsDisplay::Inline);
        let block = render_section(
            &make_section("Work Experience", SectionKind::Experience {
                jobs: vec![make_job("Acme", "Staff Engineer")],
            }),
            3,
            &styling,
        )
        .unwrap();

        assert_eq!(block.source_index, 3);
        let BlockContent::Entries { entries } = block.content else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].heading, "Acme");
        assert_eq!(entries[0].subheading.as_deref(), Some("Staff Engineer"));
        assert_eq!(entries[0].dates.as_deref(), Some("2021 - Present"));
        assert_eq!(entries[0].bullets, vec!["Shipped the billing rewrite"]);
    }

    #[test]
    fn test_job_without_company_promotes_title() {
        let entry = job_entry(&make_job("", "Consultant"));
        assert_eq!(entry.heading, "Consultant");
        assert_eq!(entry.subheading, None);
    }

    #[test]
    fn test_education_handles_structured_and_legacy() {
        let structured = education_entry(&EducationItem::Structured(EduEntry {
            degree: "MBA".to_string(),
            institution: "INSEAD".to_string(),
            location: Some("Fontainebleau".to_string()),
            dates: "2012".to_string(),
            gpa: Some("3.7".to_string()),
        }));
        let legacy = education_entry(&EducationItem::Legacy("BA History, Yale".to_string()));

        assert_eq!(structured.heading, "MBA");
        assert_eq!(structured.subheading.as_deref(), Some("INSEAD"));
        assert_eq!(structured.description.as_deref(), Some("GPA: 3.7"));
        assert_eq!(legacy.heading, "BA History, Yale");
        assert_eq!(legacy.subheading, None);
    }

    #[test]
    fn test_skills_display_follows_template() {
        let categories = vec![SkillCategory {
            name: Some("Languages".to_string()),
            items: vec!["Go".to_string(), "Rust".to_string()],
        }];
        let section = make_section("Skills", SectionKind::Skills { categories });

        let inline = render_section(&section, 0, &make_styling(SkillsDisplay::Inline)).unwrap();
        let bulleted =
            render_section(&section, 0, &make_styling(SkillsDisplay::Bulleted)).unwrap();

        assert!(matches!(
            inline.content,
            BlockContent::Categories { display: CategoryDisplay::Inline, .. }
        ));
        assert!(matches!(
            bulleted.content,
            BlockContent::Categories { display: CategoryDisplay::Bulleted, .. }
        ));
    }

    #[test]
    fn test_uniform_list_kinds_render_bullets() {
        let styling = make_styling(SkillsDisplay::Inline);
        let items = vec!["Chair, Red Cross".to_string()];
        for kind in [
            SectionKind::Achievements { items: items.clone() },
            SectionKind::Certifications { items: items.clone() },
            SectionKind::Publications { items: items.clone() },
            SectionKind::Memberships { items: items.clone() },
            SectionKind::BoardRoles { items: items.clone() },
        ] {
            let block = render_section(&make_section("List", kind), 0, &styling).unwrap();
            assert_eq!(
                block.content,
                BlockContent::List {
                    items: items.clone(),
                    marker: ListMarker::Bullet
                }
            );
        }
    }

    #[test]
    fn test_executive_hybrid_groups_summary_and_jobs() {
        let styling = make_styling(SkillsDisplay::Inline);
        let block = render_section(
            &make_section("Executive Profile", SectionKind::ExecutiveHybrid {
                content: Some("Turnaround CEO.".to_string()),
                jobs: vec![make_job("Globex", "CEO")],
            }),
            1,
            &styling,
        )
        .unwrap();

        assert_eq!(block.heading.as_ref().unwrap().text, "EXECUTIVE PROFILE");
        let BlockContent::Group { children } = block.content else {
            panic!("expected group");
        };
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|c| c.heading.is_none()));
        assert!(matches!(children[0].content, BlockContent::Paragraph { .. }));
        assert!(matches!(children[1].content, BlockContent::Entries { .. }));
    }

    #[test]
    fn test_empty_and_contact_sections_render_nothing() {
        let styling = make_styling(SkillsDisplay::Inline);
        let empty = make_section("Projects", SectionKind::Projects { projects: vec![] });
        let contact = make_section("Contact", SectionKind::Contact {
            lines: vec!["Paris".to_string()],
        });

        assert!(render_section(&empty, 0, &styling).is_none());
        assert!(render_section(&contact, 1, &styling).is_none());
    }

    #[test]
    fn test_project_entry_carries_tags_and_achievements() {
        let entry = project_entry(&Project {
            name: "ledger".to_string(),
            description: "Double-entry accounting engine".to_string(),
            technologies: vec!["Rust".to_string(), "SQLite".to_string()],
            achievements: vec!["1k GitHub stars".to_string()],
        });
        assert_eq!(entry.tags, vec!["Rust", "SQLite"]);
        assert_eq!(entry.bullets, vec!["1k GitHub stars"]);
        assert_eq!(entry.description.as_deref(), Some("Double-entry accounting engine"));
    }
}
