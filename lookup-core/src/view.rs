use crate::{
    error::{LookupError, VALIDATION_MESSAGE},
    model::WeatherRecord,
};

/// What the lookup view shows. Exactly one of these at a time; a new attempt
/// replaces the previous record or error wholesale.
#[derive(Debug, Clone, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Fetching,
    Error(String),
    Loaded(WeatherRecord),
}

/// A validated submission, stamped with the generation it was issued under.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: String,
    pub generation: u64,
}

/// The lookup view: current input plus the idle/fetching/error/result state.
///
/// Submissions are stamped with a generation counter so that when the user
/// resubmits before an earlier request completes, the earlier outcome is
/// dropped instead of overwriting the later attempt's state.
#[derive(Debug, Default)]
pub struct LookupView {
    input: String,
    state: ViewState,
    generation: u64,
}

impl LookupView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self.state, ViewState::Fetching)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn record(&self) -> Option<&WeatherRecord> {
        match &self.state {
            ViewState::Loaded(record) => Some(record),
            _ => None,
        }
    }

    /// Validates the current input. An empty identifier fails locally with
    /// the validation message and produces no submission. Otherwise any
    /// previous error or record is cleared, the view starts fetching, and the
    /// caller gets a stamped submission to drive.
    pub fn submit(&mut self) -> Option<Submission> {
        if self.input.is_empty() {
            self.state = ViewState::Error(VALIDATION_MESSAGE.to_string());
            return None;
        }

        self.generation += 1;
        self.state = ViewState::Fetching;
        Some(Submission { id: self.input.clone(), generation: self.generation })
    }

    /// Applies the outcome of a submission. An outcome from a superseded
    /// generation is dropped entirely. For the current generation the view
    /// always leaves `Fetching`, whatever the outcome.
    pub fn resolve(
        &mut self,
        submission: &Submission,
        outcome: Result<WeatherRecord, LookupError>,
    ) {
        if submission.generation != self.generation {
            return;
        }

        self.state = match outcome {
            Ok(record) => ViewState::Loaded(record),
            Err(err) => ViewState::Error(err.to_string()),
        };
    }
}
