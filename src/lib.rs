//! repair-route-planner core
//!
//! Orders pending civic issue reports into a repair route that starts at a
//! fixed depot: issues are scored, grouped into proximity clusters, and
//! visited cluster by cluster with a priority-weighted nearest-neighbor walk.

pub mod traits;
pub mod issue;
pub mod haversine;
pub mod priority;
pub mod cluster;
pub mod sequence;
pub mod metrics;
pub mod planner;
pub mod filter;
pub mod roi;
pub mod alerts;
pub mod polyline;
