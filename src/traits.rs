//! Core domain traits and tags for the repair route planner.
//!
//! Issue sources implement [`Report`] for their own records; the planner
//! only reads through this trait and never mutates the caller's data.

use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// A single reported civic problem that may be routed.
pub trait Report {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Location coordinates (lat, lng), if the report carries one.
    fn location(&self) -> Option<(f64, f64)>;

    fn category(&self) -> Category;

    /// Reported severity. `None` when the reporter left it blank.
    fn severity(&self) -> Option<Severity>;

    /// Community upvotes.
    fn votes(&self) -> u32;

    /// Risk score in [0, 100], if one was assessed.
    fn risk_score(&self) -> Option<f64>;

    /// Workflow status. Reports default to pending.
    fn status(&self) -> IssueStatus {
        IssueStatus::Pending
    }

    /// Estimated repair cost, if quoted.
    fn estimated_cost(&self) -> Option<f64> {
        None
    }
}

/// Issue category. Routing never looks at it; trend alerts group by it.
///
/// Tags outside the known set are kept verbatim in [`Category::Other`] so
/// they round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Pothole,
    Streetlight,
    Graffiti,
    Garbage,
    DamagedSign,
    Flooding,
    #[serde(untagged)]
    Other(String),
}

impl Default for Category {
    fn default() -> Self {
        Category::Other("other".to_string())
    }
}

/// Reported severity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
    /// Any other severity tag, kept verbatim. Scored like a missing severity.
    #[serde(untagged)]
    Unrecognized(String),
}

/// Workflow status of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    #[default]
    Pending,
    InProgress,
    Fixed,
}
