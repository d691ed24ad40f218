//! Effective styling, materialized once per render.
//!
//! Every renderer reads fonts, spacing and heading treatment from here instead
//! of applying its own fallbacks.

use serde::Serialize;

use crate::models::template::{
    HeadingCase, SkillsDisplay, Spacing, TemplateDescriptor, DEFAULT_FONT_STACK,
};
use crate::render::colors::ResolvedColors;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveFonts {
    pub header: String,
    pub section: String,
    pub body: String,
}

/// Vertical rhythm in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingScale {
    pub section_gap_pt: f32,
    pub entry_gap_pt: f32,
    pub line_height: f32,
}

impl SpacingScale {
    pub fn for_spacing(spacing: Spacing) -> Self {
        match spacing {
            Spacing::Compact => SpacingScale {
                section_gap_pt: 8.0,
                entry_gap_pt: 4.0,
                line_height: 1.25,
            },
            Spacing::Standard => SpacingScale {
                section_gap_pt: 12.0,
                entry_gap_pt: 6.0,
                line_height: 1.4,
            },
            Spacing::Spacious => SpacingScale {
                section_gap_pt: 18.0,
                entry_gap_pt: 10.0,
                line_height: 1.55,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingStyle {
    pub case: HeadingCase,
    pub letter_spacing_em: f32,
}

impl HeadingStyle {
    pub fn for_case(case: HeadingCase) -> Self {
        let letter_spacing_em = match case {
            HeadingCase::Upper => 0.08,
            HeadingCase::Title => 0.02,
        };
        HeadingStyle {
            case,
            letter_spacing_em,
        }
    }

    pub fn apply(&self, title: &str) -> String {
        match self.case {
            HeadingCase::Upper => title.to_uppercase(),
            HeadingCase::Title => title.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveStyling {
    pub colors: ResolvedColors,
    pub fonts: EffectiveFonts,
    pub spacing: SpacingScale,
    pub heading: HeadingStyle,
    pub skills_display: SkillsDisplay,
}

/// Fills every font role: explicit role → template font family → generic stack.
pub fn resolve_fonts(template: &TemplateDescriptor) -> EffectiveFonts {
    let family = template
        .styling
        .font_family
        .as_deref()
        .filter(|f| !f.trim().is_empty())
        .unwrap_or(DEFAULT_FONT_STACK);
    let roles = template.fonts.clone().unwrap_or_default();
    let pick = |role: Option<String>| {
        role.filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| family.to_string())
    };

    EffectiveFonts {
        header: pick(roles.header),
        section: pick(roles.section),
        body: pick(roles.body),
    }
}

pub fn resolve_styling(template: &TemplateDescriptor, colors: ResolvedColors) -> EffectiveStyling {
    EffectiveStyling {
        colors,
        fonts: resolve_fonts(template),
        spacing: SpacingScale::for_spacing(template.styling.spacing),
        heading: HeadingStyle::for_case(template.styling.heading_case),
        skills_display: template.styling.skills_display,
    }
}
