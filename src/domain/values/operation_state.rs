use serde::Serialize;

/// Transient UI state of one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum UiOperationState<T> {
    Idle,
    InFlight,
    Succeeded(T),
    Failed(String),
}

impl<T> Default for UiOperationState<T> {
    fn default() -> Self {
        UiOperationState::Idle
    }
}

impl<T> UiOperationState<T> {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, UiOperationState::InFlight)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, UiOperationState::Failed(_))
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            UiOperationState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UiOperationState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
