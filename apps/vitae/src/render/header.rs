//! Identity block: name, title and contact line.

use crate::models::resume::{Contact, ResumeContent};
use crate::render::document::{ContactItem, ContactKind, Header};
use crate::render::styling::EffectiveStyling;

pub fn build_header(content: &ResumeContent, styling: &EffectiveStyling) -> Header {
    Header {
        name: content.name.clone(),
        title: content.title.clone(),
        contact: contact_items(&content.contact),
        name_color: styling.colors.primary.clone(),
        accent_color: styling.colors.secondary.clone(),
        font: styling.fonts.header.clone(),
    }
}

/// Non-empty contact fields in display order. Links are shown without scheme.
pub fn contact_items(contact: &Contact) -> Vec<ContactItem> {
    let fields = [
        (ContactKind::Email, Some(contact.email.as_str())),
        (ContactKind::Phone, Some(contact.phone.as_str())),
        (ContactKind::Location, Some(contact.location.as_str())),
        (ContactKind::Linkedin, contact.linkedin.as_deref()),
        (ContactKind::Github, contact.github.as_deref()),
        (ContactKind::Website, contact.website.as_deref()),
    ];

    fields
        .into_iter()
        .filter_map(|(kind, value)| {
            let value = value?.trim();
            if value.is_empty() {
                return None;
            }
            let value = match kind {
                ContactKind::Linkedin | ContactKind::Github | ContactKind::Website => {
                    display_link(value)
                }
                _ => value.to_string(),
            };
            Some(ContactItem { kind, value })
        })
        .collect()
}

fn display_link(url: &str) -> String {
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let stripped = stripped.strip_prefix("www.").unwrap_or(stripped);
    stripped.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_items_skip_blank_fields() {
        let items = contact_items(&Contact {
            email: "jane@example.com".to_string(),
            phone: "   ".to_string(),
            location: "Berlin".to_string(),
            linkedin: Some("https://www.linkedin.com/in/janedoe/".to_string()),
            github: None,
            website: Some("".to_string()),
        });

        let kinds: Vec<_> = items.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![ContactKind::Email, ContactKind::Location, ContactKind::Linkedin]
        );
        assert_eq!(items[2].value, "linkedin.com/in/janedoe");
    }

    #[test]
    fn test_display_link_keeps_bare_hosts() {
        assert_eq!(display_link("github.com/jane"), "github.com/jane");
        assert_eq!(display_link("http://jane.dev/"), "jane.dev");
    }
}
