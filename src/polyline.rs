//! Route geometry for map consumers.
//!
//! The planner emits straight legs between stops; drawing them is up to the
//! caller. Encoding to a compact polyline string happens at the API boundary,
//! not here.

use serde::{Deserialize, Serialize};

use crate::haversine::path_length_km;

/// An ordered sequence of (latitude, longitude) points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) tuple.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    /// Returns true when the polyline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Great-circle length of the line in kilometers.
    pub fn length_km(&self) -> f64 {
        match self.points.split_first() {
            Some((&first, rest)) => path_length_km(first, rest.iter().copied()),
            None => 0.0,
        }
    }

    /// South-west and north-east corners, for fitting a map viewport.
    ///
    /// Lines crossing the antimeridian get a box spanning the long way round.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let (&first, rest) = self.points.split_first()?;
        let bounds = rest.iter().fold((first, first), |(sw, ne), &(lat, lng)| {
            ((sw.0.min(lat), sw.1.min(lng)), (ne.0.max(lat), ne.1.max(lng)))
        });
        Some(bounds)
    }
}
