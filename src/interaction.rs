//! Input model: pairwise developer interactions and the contributor roster

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of recorded collaboration event, with a fixed per-kind weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionKind {
    IssueComment,
    PullRequestComment,
    IssueOpened,
    PullRequestReview,
    PullRequestApproval,
    PullRequestMerge,
    IssueClosed,
}

impl InteractionKind {
    /// Numeric weight contributed to an aggregated edge
    pub fn weight(self) -> f64 {
        match self {
            Self::IssueComment => 2.0,
            Self::PullRequestComment => 2.0,
            Self::IssueOpened => 3.0,
            Self::PullRequestReview => 4.0,
            Self::PullRequestApproval => 4.0,
            Self::PullRequestMerge => 5.0,
            Self::IssueClosed => 3.0,
        }
    }

    /// Human-readable description of the event kind
    pub fn description(self) -> &'static str {
        match self {
            Self::IssueComment => "comment on issue",
            Self::PullRequestComment => "comment on pull request",
            Self::IssueOpened => "issue opened",
            Self::PullRequestReview => "pull request review",
            Self::PullRequestApproval => "pull request approval",
            Self::PullRequestMerge => "pull request merge",
            Self::IssueClosed => "issue closed",
        }
    }
}

/// One directed interaction between two developers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Login of the developer who acted
    pub source: String,

    /// Login of the developer acted upon
    pub target: String,

    /// Kind of the recorded event
    pub kind: InteractionKind,

    /// When the event happened
    pub timestamp: DateTime<Utc>,

    /// Free-text tag locating the event (issue/PR reference)
    pub context: Option<String>,
}

impl Interaction {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        kind: InteractionKind,
        timestamp: DateTime<Utc>,
        context: Option<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
            timestamp,
            context,
        }
    }

    /// Weight of this record, delegated to its kind
    pub fn weight(&self) -> f64 {
        self.kind.weight()
    }
}

/// Roster entry mapping a login to its dense vertex id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub vertex_id: usize,
}

impl Contributor {
    pub fn new(login: impl Into<String>, vertex_id: usize) -> Self {
        Self {
            login: login.into(),
            vertex_id,
        }
    }
}
