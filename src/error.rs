use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures outside the roster itself: settings, logging and the terminal.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("failed to load settings: {0}")]
    Settings(#[from] confy::ConfyError),

    #[error("no subjects configured")]
    NoSubjects,

    #[error("subject name must not be empty")]
    EmptySubject,

    #[error("subject `{0}` is configured twice")]
    DuplicateSubject(String),

    #[error("invalid score bounds {min}..={max}")]
    ScoreBounds { min: u8, max: u8 },

    #[error("default score {score} for `{subject}` is outside {min}..={max}")]
    DefaultOutOfBounds {
        subject: String,
        score: u8,
        min: u8,
        max: u8,
    },

    #[error("invalid subject `{0}`, expected NAME or NAME=SCORE")]
    SubjectSyntax(String),

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to install log subscriber: {0}")]
    Subscriber(String),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Rejections from the entry form before a record is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Roll No must be a whole number of at least 1")]
    InvalidRollNo,
}
