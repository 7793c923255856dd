//! Cluster ordering and the priority-weighted nearest-neighbor walk.
//!
//! Clusters are visited by descending average priority. Inside a cluster the
//! next stop is the unvisited member with the smallest
//! `distance / (priority / 100)`, so urgent issues look closer than they are.
//! The walk never resets between clusters: the last stop of one cluster is
//! the origin for the next.

use crate::cluster::Cluster;
use crate::haversine::haversine_km;
use crate::priority::ScoredIssue;
use crate::traits::Report;

/// Sort clusters by average priority, highest first. Ties keep their order.
pub fn order_clusters<'a, R: Report>(mut clusters: Vec<Cluster<'a, R>>) -> Vec<Cluster<'a, R>> {
    // `sort_by` is stable.
    clusters.sort_by(|a, b| b.average_priority().total_cmp(&a.average_priority()));
    clusters
}

/// Priority-discounted distance from `from` to `issue`. Lower is better.
pub fn selection_score<R: Report>(from: (f64, f64), issue: &ScoredIssue<'_, R>) -> f64 {
    haversine_km(from, issue.location) / (issue.priority / 100.0)
}

/// Walk one cluster greedily from `start`.
///
/// Returns the visiting order and the position the walk ends at (`start`
/// when `members` is empty). Equal scores go to the earlier member.
pub fn route_within_cluster<'a, R: Report>(
    members: Vec<ScoredIssue<'a, R>>,
    start: (f64, f64),
) -> (Vec<ScoredIssue<'a, R>>, (f64, f64)) {
    let mut remaining = members;
    let mut visited = Vec::with_capacity(remaining.len());
    let mut position = start;

    while !remaining.is_empty() {
        let mut best_idx = 0;
        let mut best_score = f64::INFINITY;
        for (idx, candidate) in remaining.iter().enumerate() {
            let score = selection_score(position, candidate);
            if score < best_score {
                best_score = score;
                best_idx = idx;
            }
        }

        let next = remaining.remove(best_idx);
        position = next.location;
        visited.push(next);
    }

    (visited, position)
}

/// Flatten clusters into a single visiting order starting at `depot`.
pub fn sequence_clusters<'a, R: Report>(
    clusters: Vec<Cluster<'a, R>>,
    depot: (f64, f64),
) -> Vec<ScoredIssue<'a, R>> {
    let (route, _) = order_clusters(clusters).into_iter().fold(
        (Vec::new(), depot),
        |(mut route, position), cluster| {
            let (visited, position) = route_within_cluster(cluster.into_members(), position);
            route.extend(visited);
            (route, position)
        },
    );
    route
}
