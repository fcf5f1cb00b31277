//! Prompt assembly for the image-generation backend

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::{BackgroundMode, CharacterForm};

/// Fallback physical description when the user leaves it blank
pub const DEFAULT_DESCRIPTION: &str =
    "balanced proportions, natural features and a confident posture";

/// Fallback graphic style when none is selected
pub const DEFAULT_STYLE: &str = "high-quality detailed digital illustration";

pub const DEFAULT_PALETTE: &str = "harmonious";

pub const DEFAULT_NAME: &str = "unnamed";
pub const DEFAULT_GENDER: &str = "human";
pub const DEFAULT_ORIGIN: &str = "mixed";
pub const DEFAULT_AGE: &str = "twenties";

pub const FLAT_BACKGROUND: &str = "on a flat background";
pub const DEFAULT_ENVIRONMENT: &str = "within a detailed environment";

/// Reinforcing terms appended to each selectable graphic style
static STYLE_SYNONYMS: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    HashMap::from([
        (
            "Fantasy",
            &["epic fantasy art", "heroic fantasy", "magical atmosphere"][..],
        ),
        (
            "Realistic",
            &["photorealistic", "lifelike detail", "natural lighting"][..],
        ),
        (
            "Cartoon",
            &["cartoon style", "bold outlines", "flat cel shading"][..],
        ),
        (
            "Manga",
            &["anime style", "japanese manga", "clean line art"][..],
        ),
        (
            "Watercolor",
            &["watercolor painting", "soft washes", "paper texture"][..],
        ),
        (
            "Pencil drawing",
            &["graphite sketch", "hand-drawn", "fine hatching"][..],
        ),
    ])
});

fn filled(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Chooses where the character is placed.
pub fn background_clause(mode: BackgroundMode, context: &str) -> String {
    match mode {
        BackgroundMode::Flat => FLAT_BACKGROUND.to_string(),
        BackgroundMode::Contextual => match filled(context) {
            Some(context) => format!("within context: {}", context),
            None => DEFAULT_ENVIRONMENT.to_string(),
        },
    }
}

/// Expands a style label with its synonyms, or returns the label alone
/// when the table has no entry for it.
pub fn style_terms(style: &str) -> String {
    match STYLE_SYNONYMS.get(style) {
        Some(synonyms) => {
            let mut terms = Vec::with_capacity(synonyms.len() + 1);
            terms.push(style);
            terms.extend_from_slice(synonyms);
            terms.join(", ")
        }
        None => style.to_string(),
    }
}

/// Builds the full prompt sent to the image-generation backend.
///
/// The output depends only on the form, so identical forms always produce
/// identical prompts.
pub fn build_prompt(form: &CharacterForm) -> String {
    let name = filled(&form.name).unwrap_or(DEFAULT_NAME);
    let gender = filled(&form.gender)
        .map(str::to_lowercase)
        .unwrap_or_else(|| DEFAULT_GENDER.to_string());
    let origin = filled(&form.origin).unwrap_or(DEFAULT_ORIGIN);
    let age = filled(&form.age).unwrap_or(DEFAULT_AGE);
    let background = background_clause(form.background_mode, &form.context);

    let subject = format!(
        "Character illustration {} of {}, a {} of {} origin, aged {}.",
        background, name, gender, origin, age
    );
    let physical = format!(
        "Physical description: {}.",
        filled(&form.description).unwrap_or(DEFAULT_DESCRIPTION)
    );
    let outfit = filled(&form.outfit)
        .map(|outfit| format!("Wearing: {}.", outfit))
        .unwrap_or_default();
    let elements = filled(&form.elements)
        .map(|elements| format!("Distinctive elements: {}.", elements))
        .unwrap_or_default();
    let expression = filled(&form.expression)
        .map(|expression| format!("Expression or attitude: {}.", expression))
        .unwrap_or_default();

    let style = filled(&form.style).unwrap_or(DEFAULT_STYLE);
    let palette = filled(&form.palette).unwrap_or(DEFAULT_PALETTE);
    let styling = format!(
        "Rendered in {} style, using a {} color palette.",
        style_terms(style),
        palette
    );

    [subject, physical, outfit, elements, expression, styling]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
