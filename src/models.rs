//! Data models and structures used throughout the application

use serde::{Deserialize, Serialize};

/// Where the character is placed in the generated picture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundMode {
    #[default]
    Flat,
    Contextual,
}

/// Character description as filled in by the user.
///
/// Every field is optional; blank values fall back to the defaults of the
/// prompt template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterForm {
    pub name: String,
    pub gender: String,
    pub age: String,
    pub origin: String,
    pub description: String,
    pub outfit: String,
    pub elements: String,
    pub expression: String,
    pub palette: String,
    pub style: String,
    pub background_mode: BackgroundMode,
    pub context: String,
}

/// Selectable values offered by the form's drop-downs
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub genders: Vec<&'static str>,
    pub origins: Vec<&'static str>,
    pub palettes: Vec<&'static str>,
    pub styles: Vec<&'static str>,
}

pub const GENDERS: [&str; 4] = ["Male", "Female", "Non-binary", "Neutral"];

pub const ORIGINS: [&str; 11] = [
    "Caucasian",
    "Black",
    "Asian",
    "Indian",
    "Viking",
    "Elf",
    "Dwarf",
    "Orc",
    "Giant",
    "Dragon",
    "Gnome",
];

pub const PALETTES: [&str; 4] = ["Warm tones", "Cool tones", "Pastel", "Black and white"];

pub const STYLES: [&str; 6] = [
    "Fantasy",
    "Realistic",
    "Cartoon",
    "Manga",
    "Watercolor",
    "Pencil drawing",
];

impl FormOptions {
    pub fn all() -> Self {
        Self {
            genders: GENDERS.to_vec(),
            origins: ORIGINS.to_vec(),
            palettes: PALETTES.to_vec(),
            styles: STYLES.to_vec(),
        }
    }
}

/// Example pictures shown until a portrait has been generated
pub const GALLERY_IMAGES: [&str; 3] = [
    "images/image1.jpg",
    "images/image2.jpg",
    "images/image3.jpg",
];

/// Daily usage as reported to the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotaStatus {
    pub date: String,
    pub used: u32,
    pub limit: u32,
    pub remaining: u32,
}
