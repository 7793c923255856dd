//! Plain issue and depot records.
//!
//! These mirror the JSON shape the reporting front end stores, so they can be
//! deserialized straight from a query result and handed to the planner.

use serde::{Deserialize, Serialize};

use crate::traits::{Category, IssueStatus, Report, Severity};

/// A WGS84 coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// True when both components are finite and inside the WGS84 range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<(f64, f64)> for Location {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// The office every repair route starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub address: String,
}

impl Depot {
    pub fn new(lat: f64, lng: f64, address: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            address: address.into(),
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.lat, self.lng)
    }
}

/// A location as it arrived from the issue store.
///
/// Anything that is not a `{ lat, lng }` pair of numbers is kept as raw JSON
/// instead of failing the whole batch; the planner then rejects the issue
/// with [`ExclusionReason::InvalidCoordinates`](crate::priority::ExclusionReason).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportedLocation {
    Point(Location),
    Malformed(serde_json::Value),
}

impl ReportedLocation {
    /// (lat, lng) of a well-formed point; non-finite for a malformed one.
    pub fn coords(&self) -> (f64, f64) {
        match self {
            ReportedLocation::Point(location) => location.coords(),
            ReportedLocation::Malformed(_) => (f64::NAN, f64::NAN),
        }
    }

    pub fn point(&self) -> Option<Location> {
        match self {
            ReportedLocation::Point(location) => Some(*location),
            ReportedLocation::Malformed(_) => None,
        }
    }
}

impl From<Location> for ReportedLocation {
    fn from(location: Location) -> Self {
        ReportedLocation::Point(location)
    }
}

/// A reported issue as stored by the reporting app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    #[serde(default)]
    pub location: Option<ReportedLocation>,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub votes: u32,
    #[serde(default)]
    pub risk_score: Option<f64>,
    #[serde(default)]
    pub status: IssueStatus,
    #[serde(default)]
    pub estimated_cost: Option<f64>,
}

impl Issue {
    /// A pending issue at the given coordinate with every optional field unset.
    pub fn new(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            location: Some(Location::new(lat, lng).into()),
            category: Category::default(),
            severity: None,
            votes: 0,
            risk_score: None,
            status: IssueStatus::Pending,
            estimated_cost: None,
        }
    }
}

impl Report for Issue {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn location(&self) -> Option<(f64, f64)> {
        self.location.as_ref().map(ReportedLocation::coords)
    }

    fn category(&self) -> Category {
        self.category.clone()
    }

    fn severity(&self) -> Option<Severity> {
        self.severity.clone()
    }

    fn votes(&self) -> u32 {
        self.votes
    }

    fn risk_score(&self) -> Option<f64> {
        self.risk_score
    }

    fn status(&self) -> IssueStatus {
        self.status
    }

    fn estimated_cost(&self) -> Option<f64> {
        self.estimated_cost
    }
}
