//! Pre-planning filters used by the admin dashboard before a route is built.

use tracing::debug;

use crate::haversine::haversine_km;
use crate::traits::{IssueStatus, Report};

/// Radius of the "nearby reports" view, in kilometers.
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 50.0;

/// Reports still waiting for a crew.
pub fn pending_only<R: Report>(reports: &[R]) -> Vec<&R> {
    reports
        .iter()
        .filter(|report| report.status() == IssueStatus::Pending)
        .collect()
}

/// Reports within `radius_km` of `center`.
///
/// Without a center every report is kept. Reports without a location are
/// always dropped when a center is given.
pub fn within_radius<R: Report>(
    reports: &[R],
    center: Option<(f64, f64)>,
    radius_km: f64,
) -> Vec<&R> {
    let Some(center) = center else {
        debug!("no center for nearby filter, keeping all reports");
        return reports.iter().collect();
    };

    let nearby: Vec<&R> = reports
        .iter()
        .filter(|report| {
            report
                .location()
                .is_some_and(|location| haversine_km(center, location) <= radius_km)
        })
        .collect();

    debug!(
        total = reports.len(),
        nearby = nearby.len(),
        radius_km,
        "filtered reports by distance"
    );
    nearby
}
