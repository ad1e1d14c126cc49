//! Recipe session state machine
//!
//! Session progresses through:
//! IDLE → REQUESTING → SUCCEEDED | FAILED → REQUESTING → ...
//!
//! SUCCEEDED and FAILED are idle states as far as the generate action is
//! concerned; only REQUESTING blocks a new request. The display state is
//! derived from the session state plus the "hidden" override set by
//! clearing the selection.

use crate::client::GenerateError;
use pantry_common::api::Recipe;
use thiserror::Error;

/// Recipe session state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No request made yet
    #[default]
    Idle,
    /// One request outstanding
    Requesting,
    /// Last request returned recipes (possibly none)
    Succeeded(Vec<Recipe>),
    /// Last request failed
    Failed(GenerateError),
}

/// Inputs to the state machine
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Generate action triggered with this many selected ingredients
    Start { ingredient_count: usize },
    /// Outstanding request settled
    Settle(Result<Vec<Recipe>, GenerateError>),
}

/// Rejected state transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("A request is already outstanding")]
    AlreadyRequesting,

    #[error("Cannot request recipes for an empty selection")]
    EmptySelection,

    #[error("No request is outstanding")]
    NotRequesting,
}

/// What the recipe area shows, derived from the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState<'a> {
    Hidden,
    Loading,
    Results(&'a [Recipe]),
    Empty,
    Error(&'a str),
}

impl SessionState {
    /// Transition function; the current state is left untouched
    pub fn next(&self, event: SessionEvent) -> Result<SessionState, TransitionError> {
        match (self, event) {
            (SessionState::Requesting, SessionEvent::Start { .. }) => {
                Err(TransitionError::AlreadyRequesting)
            }
            (_, SessionEvent::Start { ingredient_count: 0 }) => Err(TransitionError::EmptySelection),
            (_, SessionEvent::Start { .. }) => Ok(SessionState::Requesting),
            (SessionState::Requesting, SessionEvent::Settle(Ok(recipes))) => {
                Ok(SessionState::Succeeded(recipes))
            }
            (SessionState::Requesting, SessionEvent::Settle(Err(error))) => {
                Ok(SessionState::Failed(error))
            }
            (_, SessionEvent::Settle(_)) => Err(TransitionError::NotRequesting),
        }
    }

    pub fn is_requesting(&self) -> bool {
        matches!(self, SessionState::Requesting)
    }
}

/// Session state plus display visibility
#[derive(Debug, Clone, Default)]
pub struct RecipeSession {
    state: SessionState,
    hidden: bool,
}

impl RecipeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Loading flag: true only while a request is outstanding
    pub fn is_loading(&self) -> bool {
        self.state.is_requesting()
    }

    /// Apply a transition; on error the session is unchanged
    pub fn apply(&mut self, event: SessionEvent) -> Result<(), TransitionError> {
        let next = self.state.next(event)?;
        tracing::debug!(from = ?self.state_name(), to = ?state_name(&next), "Session transition");
        self.state = next;
        self.hidden = false;
        Ok(())
    }

    /// Force the recipe display back to hidden
    ///
    /// An outstanding request keeps running; its outcome is shown when it
    /// settles.
    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn display(&self) -> DisplayState<'_> {
        if self.hidden {
            return DisplayState::Hidden;
        }

        match &self.state {
            SessionState::Idle => DisplayState::Hidden,
            SessionState::Requesting => DisplayState::Loading,
            SessionState::Succeeded(recipes) if recipes.is_empty() => DisplayState::Empty,
            SessionState::Succeeded(recipes) => DisplayState::Results(recipes),
            SessionState::Failed(error) => DisplayState::Error(error.user_message()),
        }
    }

    fn state_name(&self) -> &'static str {
        state_name(&self.state)
    }
}

fn state_name(state: &SessionState) -> &'static str {
    match state {
        SessionState::Idle => "IDLE",
        SessionState::Requesting => "REQUESTING",
        SessionState::Succeeded(_) => "SUCCEEDED",
        SessionState::Failed(_) => "FAILED",
    }
}
