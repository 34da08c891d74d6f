use serde_derive::{Deserialize, Serialize};

/// Phase of the most recent request driven by a fetch controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Loading => "loading",
            Phase::Success => "success",
            Phase::Error => "error",
        };
        f.write_str(name)
    }
}

/// Snapshot of a fetch controller.
///
/// Data only exists in `Success` and a message only in `Error`, so the
/// payload can never disagree with the phase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success {
        data: T,
    },
    Error {
        #[serde(rename = "errorMessage")]
        error_message: String,
    },
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub const FALLBACK_ERROR: &'static str = "request failed";

    /// Builds an error state, substituting a generic message for a blank one.
    pub fn error<M: Into<String>>(message: M) -> Self {
        let message = message.into();
        let error_message = if message.trim().is_empty() {
            Self::FALLBACK_ERROR.to_string()
        } else {
            message
        };
        FetchState::Error { error_message }
    }

    pub fn phase(&self) -> Phase {
        match self {
            FetchState::Idle => Phase::Idle,
            FetchState::Loading => Phase::Loading,
            FetchState::Success { .. } => Phase::Success,
            FetchState::Error { .. } => Phase::Error,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success { data } => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Error { error_message } => Some(error_message.as_str()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}
