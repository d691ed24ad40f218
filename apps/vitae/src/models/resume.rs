//! Resume content: the wire shape submitted by callers and the normalized
//! shape the renderer consumes.
//!
//! On the wire a section is a loose JSON object tagged either by its display
//! `title` (legacy) or by an explicit `type`. `content::ingest` turns each one
//! into a [`Section`] carrying a proper [`SectionKind`] payload.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ────────────────────────────────────────────────────────────────────────────
// Wire shape
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Resume content exactly as submitted. Sections stay untyped JSON until ingestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawResumeContent {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub sections: Vec<Value>,
    /// Only read by bespoke layouts.
    #[serde(default)]
    pub sidebar: Option<RawSidebar>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSidebar {
    #[serde(default)]
    pub sections: Vec<Value>,
}

// ────────────────────────────────────────────────────────────────────────────
// Entry payloads
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    /// Free text, e.g. "Jan 2020 – Present".
    #[serde(default)]
    pub dates: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EduEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub dates: String,
    /// Accepts `"3.9"` or `3.9` on the wire.
    #[serde(default, deserialize_with = "display_text")]
    pub gpa: Option<String>,
}

/// One education item. Plain strings are still accepted from older resumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationItem {
    Structured(EduEntry),
    Legacy(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillCategory {
    /// `None` for a flat skills list with no category names.
    pub name: Option<String>,
    pub items: Vec<String>,
}

fn display_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Normalized sections
// ────────────────────────────────────────────────────────────────────────────

/// Payload-free discriminant of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKindTag {
    Summary,
    Skills,
    Experience,
    Education,
    Projects,
    Certifications,
    Publications,
    Memberships,
    Achievements,
    BoardRoles,
    ExecutiveHybrid,
    Contact,
}

impl SectionKindTag {
    pub const ALL: [SectionKindTag; 12] = [
        SectionKindTag::Summary,
        SectionKindTag::Skills,
        SectionKindTag::Experience,
        SectionKindTag::Education,
        SectionKindTag::Projects,
        SectionKindTag::Certifications,
        SectionKindTag::Publications,
        SectionKindTag::Memberships,
        SectionKindTag::Achievements,
        SectionKindTag::BoardRoles,
        SectionKindTag::ExecutiveHybrid,
        SectionKindTag::Contact,
    ];

    /// Value of the explicit `type` field that selects this kind.
    pub fn type_name(self) -> &'static str {
        match self {
            SectionKindTag::Summary => "summary",
            SectionKindTag::Skills => "skills",
            SectionKindTag::Experience => "experience",
            SectionKindTag::Education => "education",
            SectionKindTag::Projects => "projects",
            SectionKindTag::Certifications => "certifications",
            SectionKindTag::Publications => "publications",
            SectionKindTag::Memberships => "memberships",
            SectionKindTag::Achievements => "achievements",
            SectionKindTag::BoardRoles => "board-roles",
            SectionKindTag::ExecutiveHybrid => "executive",
            SectionKindTag::Contact => "contact",
        }
    }

    /// Display title used when a typed section does not carry one.
    pub fn canonical_title(self) -> &'static str {
        match self {
            SectionKindTag::Summary => "Summary",
            SectionKindTag::Skills => "Skills",
            SectionKindTag::Experience => "Experience",
            SectionKindTag::Education => "Education",
            SectionKindTag::Projects => "Projects",
            SectionKindTag::Certifications => "Certifications",
            SectionKindTag::Publications => "Publications",
            SectionKindTag::Memberships => "Memberships",
            SectionKindTag::Achievements => "Achievements",
            SectionKindTag::BoardRoles => "Board Roles",
            SectionKindTag::ExecutiveHybrid => "Executive Profile",
            SectionKindTag::Contact => "Contact",
        }
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|tag| tag.type_name() == name)
    }
}

/// A section payload, one variant per renderable kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SectionKind {
    Summary { content: String },
    Skills { categories: Vec<SkillCategory> },
    Experience { jobs: Vec<Job> },
    Education { entries: Vec<EducationItem> },
    Projects { projects: Vec<Project> },
    Certifications { items: Vec<String> },
    Publications { items: Vec<String> },
    Memberships { items: Vec<String> },
    Achievements { items: Vec<String> },
    BoardRoles { items: Vec<String> },
    ExecutiveHybrid { content: Option<String>, jobs: Vec<Job> },
    Contact { lines: Vec<String> },
}

impl SectionKind {
    pub fn tag(&self) -> SectionKindTag {
        match self {
            SectionKind::Summary { .. } => SectionKindTag::Summary,
            SectionKind::Skills { .. } => SectionKindTag::Skills,
            SectionKind::Experience { .. } => SectionKindTag::Experience,
            SectionKind::Education { .. } => SectionKindTag::Education,
            SectionKind::Projects { .. } => SectionKindTag::Projects,
            SectionKind::Certifications { .. } => SectionKindTag::Certifications,
            SectionKind::Publications { .. } => SectionKindTag::Publications,
            SectionKind::Memberships { .. } => SectionKindTag::Memberships,
            SectionKind::Achievements { .. } => SectionKindTag::Achievements,
            SectionKind::BoardRoles { .. } => SectionKindTag::BoardRoles,
            SectionKind::ExecutiveHybrid { .. } => SectionKindTag::ExecutiveHybrid,
            SectionKind::Contact { .. } => SectionKindTag::Contact,
        }
    }

    /// True when there is nothing to put on the page.
    pub fn is_empty(&self) -> bool {
        match self {
            SectionKind::Summary { content } => content.trim().is_empty(),
            SectionKind::Skills { categories } => categories.iter().all(|c| c.items.is_empty()),
            SectionKind::Experience { jobs } => jobs.is_empty(),
            SectionKind::Education { entries } => entries.is_empty(),
            SectionKind::Projects { projects } => projects.is_empty(),
            SectionKind::Certifications { items }
            | SectionKind::Publications { items }
            | SectionKind::Memberships { items }
            | SectionKind::Achievements { items }
            | SectionKind::BoardRoles { items } => items.is_empty(),
            SectionKind::ExecutiveHybrid { content, jobs } => {
                content.as_deref().map_or(true, |c| c.trim().is_empty()) && jobs.is_empty()
            }
            SectionKind::Contact { lines } => lines.is_empty(),
        }
    }
}

/// Where a section's kind came from. Bespoke layouts only accept `TypeField`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionOrigin {
    TitleAlias,
    TypeField,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Display title, kept verbatim for headings and region matching.
    pub title: String,
    pub origin: SectionOrigin,
    pub kind: SectionKind,
}

impl Section {
    pub fn tag(&self) -> SectionKindTag {
        self.kind.tag()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SidebarContent {
    pub sections: Vec<Section>,
}

/// Normalized resume content. Read-only for the duration of a render.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumeContent {
    pub name: String,
    pub title: Option<String>,
    pub contact: Contact,
    pub sections: Vec<Section>,
    pub sidebar: Option<SidebarContent>,
}
