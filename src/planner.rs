//! Repair route planner (score, cluster, sequence, measure).

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cluster::{cluster_issues, DEFAULT_CLUSTER_RADIUS_KM};
use crate::issue::{Depot, Location};
use crate::metrics::{compute_metrics, TravelModel, DEFAULT_SERVICE_HOURS_PER_STOP, DEFAULT_SPEED_KMH};
use crate::polyline::Polyline;
use crate::priority::{normalize, ExclusionReason};
use crate::sequence::sequence_clusters;
use crate::traits::{Category, IssueStatus, Report, Severity};

/// Errors that stop a route from being planned at all.
///
/// Problems with individual reports never surface here; those reports are
/// listed in [`RoutePlan::excluded`] instead.
#[derive(Debug, Error)]
pub enum PlanError {
    /// No depot was supplied.
    #[error("no depot configured: a route needs a starting point")]
    MissingDepot,
    /// The depot coordinate is non-finite or outside the WGS84 range.
    #[error("depot coordinate ({lat}, {lng}) is not a valid WGS84 position")]
    InvalidDepot { lat: f64, lng: f64 },
    /// An option value is out of range.
    #[error("invalid planner options: {0}")]
    InvalidOptions(String),
    /// Options JSON could not be parsed.
    #[error("failed to parse planner options: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Planner configuration. Defaults reproduce the dashboard's behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerOptions {
    /// Radius around a cluster seed, in kilometers.
    pub cluster_radius_km: f64,
    /// On-site service time per stop, in hours.
    pub service_hours_per_stop: f64,
    /// Average travel speed for the time estimate.
    pub average_speed_kmh: f64,
    /// Route only pending reports, ignoring in-progress and fixed ones.
    pub pending_only: bool,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            cluster_radius_km: DEFAULT_CLUSTER_RADIUS_KM,
            service_hours_per_stop: DEFAULT_SERVICE_HOURS_PER_STOP,
            average_speed_kmh: DEFAULT_SPEED_KMH,
            pending_only: false,
        }
    }
}

impl PlannerOptions {
    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, PlanError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        if !self.cluster_radius_km.is_finite() || self.cluster_radius_km <= 0.0 {
            return Err(PlanError::InvalidOptions(format!(
                "cluster_radius_km must be positive, got {}",
                self.cluster_radius_km
            )));
        }
        if !self.average_speed_kmh.is_finite() || self.average_speed_kmh <= 0.0 {
            return Err(PlanError::InvalidOptions(format!(
                "average_speed_kmh must be positive, got {}",
                self.average_speed_kmh
            )));
        }
        if !self.service_hours_per_stop.is_finite() || self.service_hours_per_stop < 0.0 {
            return Err(PlanError::InvalidOptions(format!(
                "service_hours_per_stop must not be negative, got {}",
                self.service_hours_per_stop
            )));
        }
        Ok(())
    }

    pub fn travel_model(&self) -> TravelModel {
        TravelModel {
            service_hours_per_stop: self.service_hours_per_stop,
            speed_kmh: self.average_speed_kmh,
        }
    }
}

/// One visit in a planned route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop<IssueId> {
    pub id: IssueId,
    /// 1-based position in the route.
    pub order: usize,
    pub category: Category,
    pub severity: Option<Severity>,
    pub votes: u32,
    pub location: Location,
    pub priority: f64,
    /// Kilometers from the depot (first stop) or the previous stop.
    pub distance_from_previous: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludedIssue<IssueId> {
    pub id: IssueId,
    pub reason: ExclusionReason,
}

/// A planned repair route starting at the depot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan<IssueId> {
    pub start_point: Depot,
    pub stops: Vec<RouteStop<IssueId>>,
    pub total_issues: usize,
    /// Kilometers along depot -> stop 1 -> ... -> stop n.
    pub total_distance: f64,
    /// Kilometers when visiting the same issues in report order.
    pub baseline_distance: f64,
    pub time_saved_percent: i32,
    pub estimated_time_hours: f64,
    pub cluster_count: usize,
    /// Reports that could not be routed, in input order.
    pub excluded: Vec<ExcludedIssue<IssueId>>,
}

impl<IssueId> RoutePlan<IssueId> {
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn per_stop_distances(&self) -> Vec<f64> {
        self.stops.iter().map(|stop| stop.distance_from_previous).collect()
    }

    /// Route geometry: the depot followed by every stop.
    pub fn path(&self) -> Polyline {
        let depot = self.start_point.location().coords();
        Polyline::new(
            std::iter::once(depot)
                .chain(self.stops.iter().map(|stop| stop.location.coords()))
                .collect(),
        )
    }
}

/// Plan a repair route over `reports` starting at `depot`.
///
/// Reports without a usable location are left out and listed in
/// [`RoutePlan::excluded`]. An empty input yields an empty plan.
pub fn plan_route<R>(
    reports: &[R],
    depot: Option<&Depot>,
    options: &PlannerOptions,
) -> Result<RoutePlan<R::Id>, PlanError>
where
    R: Report + Sync,
{
    options.validate()?;

    let depot = depot.ok_or(PlanError::MissingDepot)?;
    if !depot.location().is_valid() {
        return Err(PlanError::InvalidDepot {
            lat: depot.lat,
            lng: depot.lng,
        });
    }
    let origin = depot.location().coords();

    let mut normalized = normalize(reports);
    if options.pending_only {
        normalized
            .scored
            .retain(|issue| issue.report.status() == IssueStatus::Pending);
        normalized
            .rejected
            .retain(|(report, _)| report.status() == IssueStatus::Pending);
    }
    debug!(
        reports = reports.len(),
        routable = normalized.scored.len(),
        rejected = normalized.rejected.len(),
        "scored reports"
    );

    let excluded: Vec<ExcludedIssue<R::Id>> = normalized
        .rejected
        .iter()
        .map(|(report, reason)| {
            warn!(?reason, "report excluded from route");
            ExcludedIssue {
                id: report.id().clone(),
                reason: *reason,
            }
        })
        .collect();

    let report_order: Vec<(f64, f64)> = normalized.scored.iter().map(|issue| issue.location).collect();

    let clusters = cluster_issues(&normalized.scored, options.cluster_radius_km);
    let cluster_count = clusters.len();
    debug!(clusters = cluster_count, radius_km = options.cluster_radius_km, "clustered issues");

    let route = sequence_clusters(clusters, origin);
    let ordered: Vec<(f64, f64)> = route.iter().map(|issue| issue.location).collect();
    let metrics = compute_metrics(&ordered, origin, &report_order, &options.travel_model());

    let stops: Vec<RouteStop<R::Id>> = route
        .iter()
        .zip(metrics.per_stop_distances_km.iter())
        .enumerate()
        .map(|(position, (issue, &distance))| RouteStop {
            id: issue.report.id().clone(),
            order: position + 1,
            category: issue.report.category(),
            severity: issue.report.severity(),
            votes: issue.report.votes(),
            location: Location::from(issue.location),
            priority: issue.priority,
            distance_from_previous: distance,
        })
        .collect();

    info!(
        stops = stops.len(),
        excluded = excluded.len(),
        total_km = metrics.total_distance_km,
        time_saved_percent = metrics.time_saved_percent,
        "route planned"
    );

    Ok(RoutePlan {
        start_point: depot.clone(),
        total_issues: stops.len(),
        stops,
        total_distance: metrics.total_distance_km,
        baseline_distance: metrics.baseline_distance_km,
        time_saved_percent: metrics.time_saved_percent,
        estimated_time_hours: metrics.estimated_time_hours,
        cluster_count,
        excluded,
    })
}
