use std::fmt;

/// Result type for orchestrator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Caller errors raised by the view-state orchestrator.
///
/// Gateway failures never surface here: they land in the orchestrator's
/// error slot and leave the state machine on the input screen (see
/// `Orchestrator::submit`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A submission is already outstanding for this orchestrator.
    SubmissionInFlight,

    /// The trigger is not valid from the current screen.
    InvalidTransition {
        from: &'static str,
        trigger: &'static str,
    },

    /// The selected record is not part of the currently shown results.
    SelectionNotInResults,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SubmissionInFlight => {
                write!(f, "a submission is already in flight")
            }
            Error::InvalidTransition { from, trigger } => {
                write!(f, "'{}' is not a valid trigger on the {} screen", trigger, from)
            }
            Error::SelectionNotInResults => {
                write!(f, "selected record is not in the current results")
            }
        }
    }
}

impl std::error::Error for Error {}
