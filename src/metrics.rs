//! Route metrics: distances, time saved against report order, and a linear
//! time estimate.

use serde::{Deserialize, Serialize};

use crate::haversine::leg_distances_km;

/// Fixed on-site service time per stop, in hours.
pub const DEFAULT_SERVICE_HOURS_PER_STOP: f64 = 0.5;

/// Assumed average travel speed for time estimation.
pub const DEFAULT_SPEED_KMH: f64 = 30.0;

/// Linear time model: fixed service time per stop plus travel at a flat speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelModel {
    pub service_hours_per_stop: f64,
    pub speed_kmh: f64,
}

impl Default for TravelModel {
    fn default() -> Self {
        Self {
            service_hours_per_stop: DEFAULT_SERVICE_HOURS_PER_STOP,
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl TravelModel {
    /// Hours to service `stops` stops and drive `distance_km` between them.
    pub fn estimated_hours(&self, stops: usize, distance_km: f64) -> f64 {
        stops as f64 * self.service_hours_per_stop + distance_km / self.speed_kmh
    }
}

/// Distance and time summary of an ordered route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    /// Kilometers along depot -> first stop -> ... -> last stop.
    pub total_distance_km: f64,
    /// Length of the walk that visits issues in report order.
    pub baseline_distance_km: f64,
    /// Whole percent of the baseline saved; see [`time_saved_percent`].
    pub time_saved_percent: i32,
    /// Service time plus travel time under the [`TravelModel`].
    pub estimated_time_hours: f64,
    /// `per_stop_distances_km[i]` is the leg ending at stop `i`.
    pub per_stop_distances_km: Vec<f64>,
}

/// Percentage of `baseline_km` saved by `total_km`, rounded half away from zero.
///
/// Zero when the baseline is zero. Negative when the route is longer than
/// the baseline.
pub fn time_saved_percent(baseline_km: f64, total_km: f64) -> i32 {
    if baseline_km <= 0.0 || !baseline_km.is_finite() {
        return 0;
    }
    ((baseline_km - total_km) / baseline_km * 100.0).round() as i32
}

/// Metrics for visiting `ordered` from `depot`, compared against visiting
/// `report_order` (the same issues as submitted) from `depot`.
pub fn compute_metrics(
    ordered: &[(f64, f64)],
    depot: (f64, f64),
    report_order: &[(f64, f64)],
    model: &TravelModel,
) -> RouteMetrics {
    let per_stop_distances_km = leg_distances_km(depot, ordered.iter().copied());
    let total_distance_km: f64 = per_stop_distances_km.iter().sum();
    let baseline_distance_km: f64 = leg_distances_km(depot, report_order.iter().copied())
        .iter()
        .sum();

    RouteMetrics {
        total_distance_km,
        baseline_distance_km,
        time_saved_percent: time_saved_percent(baseline_distance_km, total_distance_km),
        estimated_time_hours: model.estimated_hours(ordered.len(), total_distance_km),
        per_stop_distances_km,
    }
}
