//! Assessment session lifecycle
//!
//! One assessment session moves through a fixed state machine:
//!
//! ```text
//! NotAnalyzed → Analyzing → Saving → Complete
//!                   ↑                    |
//!                   └── (at most once) ──┘
//! ```
//!
//! Re-analysis (`Complete → Analyzing`) is permitted exactly once, and the
//! machine is the single source of truth for it. A re-analysis run
//! produces a brand-new summary; the engine never merges or diffs against
//! the prior one.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of one assessment session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No analysis run yet
    NotAnalyzed,
    /// Batch pipeline in flight
    Analyzing,
    /// Results handed to the persistence collaborator
    Saving,
    /// Summary saved; session can re-analyze once
    Complete,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionState::NotAnalyzed => "not analyzed",
            SessionState::Analyzing => "analyzing",
            SessionState::Saving => "saving",
            SessionState::Complete => "complete",
        };
        f.write_str(label)
    }
}

/// Rejected session transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid session transition: {from} -> {to}")]
pub struct TransitionError {
    /// State the session was in
    pub from: SessionState,
    /// State the caller asked for
    pub to: SessionState,
}

/// State machine for one assessment session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSession {
    state: SessionState,
    reanalyzed: bool,
}

impl AssessmentSession {
    /// Fresh session, nothing analyzed yet
    pub fn new() -> Self {
        Self {
            state: SessionState::NotAnalyzed,
            reanalyzed: false,
        }
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True once the single permitted re-analysis has been used
    pub fn has_reanalyzed(&self) -> bool {
        self.reanalyzed
    }

    /// Enter `Analyzing`
    ///
    /// Legal from `NotAnalyzed`, or from `Complete` at most once
    /// (re-analysis).
    pub fn begin_analysis(&mut self) -> Result<(), TransitionError> {
        match self.state {
            SessionState::NotAnalyzed => {
                self.state = SessionState::Analyzing;
                Ok(())
            }
            SessionState::Complete if !self.reanalyzed => {
                log::debug!("session re-entering analysis (single permitted re-analysis)");
                self.reanalyzed = true;
                self.state = SessionState::Analyzing;
                Ok(())
            }
            from => Err(TransitionError {
                from,
                to: SessionState::Analyzing,
            }),
        }
    }

    /// Enter `Saving`; legal only from `Analyzing`
    pub fn begin_save(&mut self) -> Result<(), TransitionError> {
        match self.state {
            SessionState::Analyzing => {
                self.state = SessionState::Saving;
                Ok(())
            }
            from => Err(TransitionError {
                from,
                to: SessionState::Saving,
            }),
        }
    }

    /// Enter `Complete`; legal only from `Saving`
    pub fn complete(&mut self) -> Result<(), TransitionError> {
        match self.state {
            SessionState::Saving => {
                self.state = SessionState::Complete;
                Ok(())
            }
            from => Err(TransitionError {
                from,
                to: SessionState::Complete,
            }),
        }
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_session() -> AssessmentSession {
        let mut session = AssessmentSession::new();
        session.begin_analysis().unwrap();
        session.begin_save().unwrap();
        session.complete().unwrap();
        session
    }

    #[test]
    fn test_happy_path() {
        let session = completed_session();
        assert_eq!(session.state(), SessionState::Complete);
        assert!(!session.has_reanalyzed());
    }

    #[test]
    fn test_single_reanalysis_allowed() {
        let mut session = completed_session();
        assert!(session.begin_analysis().is_ok());
        assert!(session.has_reanalyzed());
        assert_eq!(session.state(), SessionState::Analyzing);
    }

    #[test]
    fn test_second_reanalysis_rejected() {
        let mut session = completed_session();
        session.begin_analysis().unwrap();
        session.begin_save().unwrap();
        session.complete().unwrap();

        let err = session.begin_analysis().unwrap_err();
        assert_eq!(err.from, SessionState::Complete);
        assert_eq!(err.to, SessionState::Analyzing);
    }

    #[test]
    fn test_save_before_analysis_rejected() {
        let mut session = AssessmentSession::new();
        assert!(session.begin_save().is_err());
    }

    #[test]
    fn test_complete_before_save_rejected() {
        let mut session = AssessmentSession::new();
        session.begin_analysis().unwrap();
        assert!(session.complete().is_err());
    }

    #[test]
    fn test_double_analysis_rejected() {
        let mut session = AssessmentSession::new();
        session.begin_analysis().unwrap();
        let err = session.begin_analysis().unwrap_err();
        assert_eq!(err.from, SessionState::Analyzing);
    }

    #[test]
    fn test_transition_error_message() {
        let err = TransitionError {
            from: SessionState::NotAnalyzed,
            to: SessionState::Saving,
        };
        assert_eq!(
            err.to_string(),
            "invalid session transition: not analyzed -> saving"
        );
    }
}
