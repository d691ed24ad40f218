//! Content ingestion: turns loosely-typed wire sections into [`Section`]s.
//!
//! Failures are scoped to the smallest unit. An unrecognized section is dropped
//! on its own, a malformed job or education entry is dropped without touching
//! its siblings, and nothing here ever fails the whole resume.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::content::aliases::canonical_kind;
use crate::models::resume::{
    EduEntry, EducationItem, RawResumeContent, ResumeContent, Section, SectionKind,
    SectionKindTag, SectionOrigin, SidebarContent, SkillCategory,
};

/// Normalizes a full resume. The sidebar collection is kept apart from the
/// main one so bespoke layouts can address each directly.
pub fn ingest_content(raw: &RawResumeContent) -> ResumeContent {
    ResumeContent {
        name: raw.name.trim().to_string(),
        title: raw
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string),
        contact: raw.contact.clone(),
        sections: ingest_sections(&raw.sections),
        sidebar: raw.sidebar.as_ref().map(|sidebar| SidebarContent {
            sections: ingest_sections(&sidebar.sections),
        }),
    }
}

/// Normalizes a list of sections, preserving order and skipping unknown ones.
pub fn ingest_sections(values: &[Value]) -> Vec<Section> {
    values.iter().filter_map(ingest_section).collect()
}

/// Normalizes one wire section.
///
/// A recognized `type` field wins; otherwise the display title goes through the
/// alias table. Returns `None` for sections that match neither.
pub fn ingest_section(value: &Value) -> Option<Section> {
    let Some(obj) = value.as_object() else {
        warn!("Skipping section that is not a JSON object");
        return None;
    };

    let title = obj
        .get("title")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|t| !t.is_empty());
    let declared = obj.get("type").and_then(|v| v.as_str());

    let typed = declared.and_then(SectionKindTag::from_type_name);
    if typed.is_none() {
        if let Some(declared) = declared {
            debug!(declared, "Unrecognized section type, falling back to title");
        }
    }

    let (tag, origin) = match typed {
        Some(tag) => (tag, SectionOrigin::TypeField),
        None => match title.and_then(canonical_kind) {
            Some(tag) => (tag, SectionOrigin::TitleAlias),
            None => {
                debug!(title = title.unwrap_or(""), "Dropping section with unknown type");
                return None;
            }
        },
    };

    let title = title
        .map(str::to_string)
        .unwrap_or_else(|| tag.canonical_title().to_string());

    Some(Section {
        kind: build_kind(tag, obj, &title),
        title,
        origin,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Payload decoding
// ────────────────────────────────────────────────────────────────────────────

fn build_kind(tag: SectionKindTag, obj: &Map<String, Value>, title: &str) -> SectionKind {
    match tag {
        SectionKindTag::Summary => SectionKind::Summary {
            content: text_field(obj, "content").unwrap_or_default(),
        },
        SectionKindTag::Skills => SectionKind::Skills {
            categories: skill_categories(obj, title),
        },
        SectionKindTag::Experience => SectionKind::Experience {
            jobs: decode_list(obj, "jobs", title),
        },
        SectionKindTag::Education => SectionKind::Education {
            entries: education_items(list_field(obj, &["education", "entries", "items"]), title),
        },
        SectionKindTag::Projects => SectionKind::Projects {
            projects: decode_list(obj, "projects", title),
        },
        SectionKindTag::Certifications => SectionKind::Certifications {
            items: string_items(list_field(obj, &["certifications", "items"]), title),
        },
        SectionKindTag::Publications => SectionKind::Publications {
            items: string_items(list_field(obj, &["publications", "items"]), title),
        },
        SectionKindTag::Memberships => SectionKind::Memberships {
            items: string_items(list_field(obj, &["memberships", "items"]), title),
        },
        SectionKindTag::Achievements => SectionKind::Achievements {
            items: string_items(list_field(obj, &["achievements", "items"]), title),
        },
        SectionKindTag::BoardRoles => SectionKind::BoardRoles {
            items: string_items(list_field(obj, &["roles", "items"]), title),
        },
        SectionKindTag::ExecutiveHybrid => SectionKind::ExecutiveHybrid {
            content: text_field(obj, "content"),
            jobs: decode_list(obj, "jobs", title),
        },
        SectionKindTag::Contact => SectionKind::Contact {
            lines: string_items(list_field(obj, &["items", "lines"]), title),
        },
    }
}

fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// First array found under any of `keys`, or an empty slice.
fn list_field<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> &'a [Value] {
    keys.iter()
        .find_map(|key| obj.get(*key).and_then(|v| v.as_array()))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Decodes each element of `obj[key]` independently; undecodable elements are skipped.
fn decode_list<T: DeserializeOwned>(obj: &Map<String, Value>, key: &str, section: &str) -> Vec<T> {
    list_field(obj, &[key])
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                warn!(section, index, "Skipping malformed entry: not an object");
                return None;
            }
            match serde_json::from_value::<T>(item.clone()) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    warn!(section, index, error = %e, "Skipping malformed entry");
                    None
                }
            }
        })
        .collect()
}

fn string_items(values: &[Value], section: &str) -> Vec<String> {
    values
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item.as_str() {
            Some(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Some(_) => None,
            None => {
                warn!(section, index, "Skipping non-text list item");
                None
            }
        })
        .collect()
}

/// Education accepts structured objects and, for older resumes, plain strings.
/// Anything else is a malformed entry and is skipped on its own.
fn education_items(values: &[Value], section: &str) -> Vec<EducationItem> {
    values
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(EducationItem::Legacy(s.trim().to_string())),
            Value::Object(_) => match serde_json::from_value::<EduEntry>(item.clone()) {
                Ok(entry) => Some(EducationItem::Structured(entry)),
                Err(e) => {
                    warn!(section, index, error = %e, "Skipping malformed education entry");
                    None
                }
            },
            _ => {
                warn!(section, index, "Skipping malformed education entry");
                None
            }
        })
        .collect()
}

/// `categories` is an object of name → items (authored order kept); a flat
/// `items` list becomes one unnamed category.
fn skill_categories(obj: &Map<String, Value>, section: &str) -> Vec<SkillCategory> {
    let mut categories = Vec::new();

    if let Some(map) = obj.get("categories").and_then(|v| v.as_object()) {
        for (name, items) in map {
            let items = match items {
                Value::Array(values) => string_items(values, section),
                Value::String(joined) => joined
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
                _ => {
                    warn!(section, category = %name, "Skipping malformed skill category");
                    continue;
                }
            };
            categories.push(SkillCategory {
                name: Some(name.trim().to_string()),
                items,
            });
        }
    }

    let flat = string_items(list_field(obj, &["items", "skills"]), section);
    if !flat.is_empty() {
        categories.push(SkillCategory {
            name: None,
            items: flat,
        });
    }

    categories
}
