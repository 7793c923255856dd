//! Great-circle distance on a spherical Earth.
//!
//! Every distance in the planner (cluster radius checks, nearest-neighbor
//! selection, route metrics) goes through [`haversine_km`] so the phases
//! agree with each other to the last bit.

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two (lat, lng) points in kilometers.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance of each leg of a walk that starts at `start` and visits `points`
/// in order. The first entry is `start -> points[0]`.
pub fn leg_distances_km<I>(start: (f64, f64), points: I) -> Vec<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut previous = start;
    points
        .into_iter()
        .map(|point| {
            let leg = haversine_km(previous, point);
            previous = point;
            leg
        })
        .collect()
}

/// Total length of the walk `start -> points[0] -> ... -> points[n-1]`.
///
/// Zero when `points` is empty.
pub fn path_length_km<I>(start: (f64, f64), points: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    leg_distances_km(start, points).iter().sum()
}
