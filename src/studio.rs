//! Submission flow: quota guard, prompt assembly, backend call, bookkeeping

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, error, info, warn};
use serde::Serialize;

use crate::backend::ImageBackend;
use crate::error::GenerationError;
use crate::models::{CharacterForm, QuotaStatus};
use crate::prompts::build_prompt;
use crate::quota::QuotaTracker;
use crate::store::KeyValueStore;

/// Where the current generation attempt stands
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success {
        image: String,
    },
    Failed {
        message: String,
    },
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn image(&self) -> Option<&str> {
        match self {
            Self::Success { image } => Some(image),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Lets at most one submission run at a time, independently of whoever
/// else is holding the studio for a quick read.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    in_flight: AtomicBool,
}

/// Held for the duration of a submission; reopens the gate when dropped
#[derive(Debug)]
pub struct SubmissionPass<'a> {
    gate: &'a SubmissionGate,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` while another submission is still running
    pub fn try_enter(&self) -> Option<SubmissionPass<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmissionPass { gate: self })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

impl Drop for SubmissionPass<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.store(false, Ordering::Release);
    }
}

/// Owns the quota tracker and the backend, and runs one submission at a time
pub struct Studio<S, B> {
    quota: QuotaTracker<S>,
    backend: B,
    state: SubmissionState,
}

impl<S, B> Studio<S, B>
where
    S: KeyValueStore,
    B: ImageBackend,
{
    pub fn new(quota: QuotaTracker<S>, backend: B) -> Self {
        Self {
            quota,
            backend,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn quota(&self) -> &QuotaTracker<S> {
        &self.quota
    }

    pub fn quota_status(&self) -> QuotaStatus {
        self.quota.status()
    }

    /// Runs a full generation attempt for `form` and returns the outcome.
    ///
    /// The quota is checked before anything else so that an exhausted quota
    /// never reaches the backend, and it is only consumed once an image has
    /// actually been received.
    pub async fn submit(&mut self, form: &CharacterForm) -> &SubmissionState {
        if let Err(err) = self.quota.check() {
            warn!("[studio] {}", err);
            self.state = SubmissionState::Failed {
                message: err.to_string(),
            };
            return &self.state;
        }

        self.state = SubmissionState::Submitting;
        let prompt = build_prompt(form);
        debug!("[studio] Prompt sent: {}", prompt);

        self.state = match self.backend.generate(&prompt).await {
            Ok(image) => {
                if let Err(e) = self.quota.consume() {
                    error!("[studio] Failed to persist generation count: {}", e);
                }
                info!(
                    "[studio] Image generated ({} of {} today)",
                    self.quota.count(),
                    self.quota.limit()
                );
                SubmissionState::Success { image }
            }
            Err(err) => {
                error!("[studio] Generation failed: {}", err);
                SubmissionState::Failed {
                    message: err.to_string(),
                }
            }
        };
        &self.state
    }

    /// Same as [`Studio::submit`] but as a `Result`, for callers that only
    /// care about the image.
    pub async fn generate(&mut self, form: &CharacterForm) -> Result<String, String> {
        match self.submit(form).await {
            SubmissionState::Success { image } => Ok(image.clone()),
            SubmissionState::Failed { message } => Err(message.clone()),
            other => Err(format!("Unexpected submission state: {:?}", other)),
        }
    }
}
