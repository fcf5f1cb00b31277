//! Character portrait generator.
//!
//! Turns a character description form into a prompt, sends it to a remote
//! image-generation backend and keeps a daily cap on successful generations.
//! The desktop shell (feature `desktop`) exposes this to a webview UI.

pub mod backend;
pub mod config;
pub mod download;
pub mod error;
pub mod models;
pub mod paths;
pub mod prompts;
pub mod quota;
pub mod store;
pub mod studio;

pub use backend::{HttpImageBackend, ImageBackend};
pub use config::StudioConfig;
pub use error::GenerationError;
pub use models::{BackgroundMode, CharacterForm, FormOptions, QuotaStatus};
pub use quota::QuotaTracker;
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
pub use studio::{Studio, SubmissionGate, SubmissionState};
