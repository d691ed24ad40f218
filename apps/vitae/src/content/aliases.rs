//! Title alias table: maps legacy display titles onto section kinds.
//!
//! Older resumes carry no explicit kind; the title *is* the tag. Matching is on
//! the normalized title (see [`normalize_title`]) against a fixed table, never a
//! fuzzy search, so "Hobbies" stays unknown instead of being guessed at.

use crate::models::resume::SectionKindTag;

const TITLE_ALIASES: &[(&str, SectionKindTag)] = &[
    // Summary
    ("summary", SectionKindTag::Summary),
    ("professional summary", SectionKindTag::Summary),
    ("executive summary", SectionKindTag::Summary),
    ("career summary", SectionKindTag::Summary),
    ("profile", SectionKindTag::Summary),
    ("professional profile", SectionKindTag::Summary),
    ("about", SectionKindTag::Summary),
    ("about me", SectionKindTag::Summary),
    ("objective", SectionKindTag::Summary),
    ("career objective", SectionKindTag::Summary),
    // Skills
    ("skills", SectionKindTag::Skills),
    ("technical skills", SectionKindTag::Skills),
    ("key skills", SectionKindTag::Skills),
    ("core skills", SectionKindTag::Skills),
    ("core competencies", SectionKindTag::Skills),
    ("competencies", SectionKindTag::Skills),
    ("skills & expertise", SectionKindTag::Skills),
    ("areas of expertise", SectionKindTag::Skills),
    ("clinical skills", SectionKindTag::Skills),
    // Experience
    ("experience", SectionKindTag::Experience),
    ("work experience", SectionKindTag::Experience),
    ("professional experience", SectionKindTag::Experience),
    ("relevant experience", SectionKindTag::Experience),
    ("employment history", SectionKindTag::Experience),
    ("work history", SectionKindTag::Experience),
    ("career history", SectionKindTag::Experience),
    ("medical experience", SectionKindTag::Experience),
    ("clinical experience", SectionKindTag::Experience),
    ("teaching experience", SectionKindTag::Experience),
    // Education
    ("education", SectionKindTag::Education),
    ("education & training", SectionKindTag::Education),
    ("academic background", SectionKindTag::Education),
    ("medical education", SectionKindTag::Education),
    ("education & certifications", SectionKindTag::Education),
    // Projects
    ("projects", SectionKindTag::Projects),
    ("key projects", SectionKindTag::Projects),
    ("selected projects", SectionKindTag::Projects),
    ("personal projects", SectionKindTag::Projects),
    ("research projects", SectionKindTag::Projects),
    // Certifications
    ("certifications", SectionKindTag::Certifications),
    ("certificates", SectionKindTag::Certifications),
    ("licenses & certifications", SectionKindTag::Certifications),
    ("certifications & licenses", SectionKindTag::Certifications),
    // Publications
    ("publications", SectionKindTag::Publications),
    ("research & publications", SectionKindTag::Publications),
    ("selected publications", SectionKindTag::Publications),
    // Memberships
    ("memberships", SectionKindTag::Memberships),
    ("professional memberships", SectionKindTag::Memberships),
    ("affiliations", SectionKindTag::Memberships),
    ("professional affiliations", SectionKindTag::Memberships),
    // Achievements
    ("achievements", SectionKindTag::Achievements),
    ("key achievements", SectionKindTag::Achievements),
    ("awards", SectionKindTag::Achievements),
    ("honors & awards", SectionKindTag::Achievements),
    ("awards & achievements", SectionKindTag::Achievements),
    // Board roles
    ("board roles", SectionKindTag::BoardRoles),
    ("board positions", SectionKindTag::BoardRoles),
    ("board memberships", SectionKindTag::BoardRoles),
    ("board & advisory roles", SectionKindTag::BoardRoles),
    // Executive / leadership hybrid
    ("executive profile", SectionKindTag::ExecutiveHybrid),
    ("leadership", SectionKindTag::ExecutiveHybrid),
    ("leadership experience", SectionKindTag::ExecutiveHybrid),
    ("executive leadership", SectionKindTag::ExecutiveHybrid),
    ("executive experience", SectionKindTag::ExecutiveHybrid),
];

/// Lower-cases, turns `-`/`_` into spaces, collapses whitespace and spells
/// "and" as "&". Used for both alias lookup and region fragment matching.
pub fn normalize_title(title: &str) -> String {
    let lowered = title.to_lowercase().replace(|c: char| c == '-' || c == '_', " ");
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .split(' ')
        .map(|word| if word == "and" { "&" } else { word })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolves a display title to its section kind, if the title is registered.
pub fn canonical_kind(title: &str) -> Option<SectionKindTag> {
    let normalized = normalize_title(title);
    TITLE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, tag)| *tag)
}
