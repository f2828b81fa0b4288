//! Read-only view of an Errbit problem.
//!
//! These types carry only what a notification needs. They are filled in by the caller from
//! whatever store holds problems and are never modified by this crate.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// An aggregated error record for one application, grouping one or more notices.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Problem {
    /// Display name of the application the problem belongs to.
    pub app_name: String,
    /// Human readable error message.
    pub message: String,
    /// Error class, e.g. `NoMethodError`.
    pub error_class: Option<String>,
    /// Environment name, e.g. `production`.
    pub environment: String,
    /// Location the error was raised at, e.g. `UsersController#show`.
    pub r#where: String,
    /// Number of times the problem occurred.
    pub notices_count: Option<u64>,
    /// Time the problem was first seen.
    pub first_notice_at: Option<DateTime<Utc>>,
    /// Canonical URL to view the problem.
    pub url: String,
    /// Occurrences of the problem, most recent last.
    pub notices: Vec<Notice>,
}

/// One concrete occurrence of a [`Problem`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Notice {
    /// Backtrace captured with the notice, if any.
    pub backtrace: Option<Backtrace>,
}

/// Ordered list of stack frames.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Backtrace {
    /// Stack frames, innermost first.
    pub lines: Vec<BacktraceLine>,
}

/// One stack frame within a [`Backtrace`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BacktraceLine {
    /// Directory part of the file path. May wrap the in-app part in `<strong>` tags.
    pub path: String,
    /// File name, appended to `path`.
    pub file_name: String,
    /// Line number within the file.
    pub number: Option<u32>,
    /// Method or function name.
    pub method: String,
}

impl Problem {
    /// The most recently added notice.
    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Error class if set and non-empty, otherwise the message.
    pub fn error_title(&self) -> &str {
        match self.error_class.as_deref() {
            Some(error_class) if !error_class.is_empty() => error_class,
            _ => &self.message,
        }
    }
}
