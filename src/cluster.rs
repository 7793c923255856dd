//! Seed-based proximity clustering.
//!
//! A single greedy pass in input order: the first unclaimed issue seeds a
//! cluster and absorbs every other unclaimed issue within the radius of the
//! seed. Membership is measured against the seed only, so two members of
//! the same cluster can be up to twice the radius apart.

use crate::haversine::haversine_km;
use crate::priority::ScoredIssue;
use crate::traits::Report;

/// Radius around a seed issue, in kilometers.
pub const DEFAULT_CLUSTER_RADIUS_KM: f64 = 2.0;

/// A group of nearby issues. The seed is always the first member.
///
/// Only [`cluster_issues`] builds clusters, so a cluster is never empty.
pub struct Cluster<'a, R: Report> {
    members: Vec<ScoredIssue<'a, R>>,
    average_priority: f64,
}

impl<R: Report> Clone for Cluster<'_, R> {
    fn clone(&self) -> Self {
        Self {
            members: self.members.clone(),
            average_priority: self.average_priority,
        }
    }
}

impl<'a, R: Report> Cluster<'a, R> {
    /// Build a cluster from its members, seed first. `members` must be non-empty.
    fn from_members(members: Vec<ScoredIssue<'a, R>>) -> Self {
        let total: f64 = members.iter().map(|member| member.priority).sum();
        let average_priority = total / members.len() as f64;
        Self {
            members,
            average_priority,
        }
    }

    /// The issue the cluster grew around.
    pub fn seed(&self) -> &ScoredIssue<'a, R> {
        &self.members[0]
    }

    /// Members in claim order, seed first.
    pub fn members(&self) -> &[ScoredIssue<'a, R>] {
        &self.members
    }

    pub fn into_members(self) -> Vec<ScoredIssue<'a, R>> {
        self.members
    }

    /// Mean priority of the members.
    pub fn average_priority(&self) -> f64 {
        self.average_priority
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Partition `issues` into seed-based clusters of the given radius.
///
/// Clusters come out in seed order; members keep input order after the seed.
pub fn cluster_issues<'a, R: Report>(
    issues: &[ScoredIssue<'a, R>],
    radius_km: f64,
) -> Vec<Cluster<'a, R>> {
    let mut claimed = vec![false; issues.len()];
    let mut clusters = Vec::new();

    for (seed_idx, seed) in issues.iter().enumerate() {
        if claimed[seed_idx] {
            continue;
        }
        claimed[seed_idx] = true;

        let mut members = vec![*seed];
        // Everything before the seed is already claimed.
        for (other_idx, other) in issues.iter().enumerate().skip(seed_idx + 1) {
            if claimed[other_idx] {
                continue;
            }
            if haversine_km(seed.location, other.location) <= radius_km {
                claimed[other_idx] = true;
                members.push(*other);
            }
        }

        clusters.push(Cluster::from_members(members));
    }

    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Issue;
    use crate::priority::normalize;

    /// One hundredth of a degree of latitude is ~1.11 km.
    const STEP: f64 = 0.01;

    fn member_ids<'a>(cluster: &Cluster<'a, Issue>) -> Vec<&'a str> {
        cluster.members.iter().map(|m| m.report.id.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        let reports: Vec<Issue> = Vec::new();
        let normalized = normalize(&reports);
        assert!(cluster_issues(&normalized.scored, DEFAULT_CLUSTER_RADIUS_KM).is_empty());
    }

    #[test]
    fn test_isolated_issue_is_singleton() {
        let reports = vec![Issue::new("a", 0.0, 0.0), Issue::new("b", 1.0, 1.0)];
        let normalized = normalize(&reports);
        let clusters = cluster_issues(&normalized.scored, DEFAULT_CLUSTER_RADIUS_KM);

        assert_eq!(clusters.len(), 2);
        assert_eq!(member_ids(&clusters[0]), vec!["a"]);
        assert_eq!(member_ids(&clusters[1]), vec!["b"]);
    }

    #[test]
    fn test_membership_is_relative_to_seed() {
        // a -- b -- c on a meridian, 1.5 steps apart: a reaches b, not c.
        let reports = vec![
            Issue::new("a", 0.0, 0.0),
            Issue::new("b", 1.5 * STEP, 0.0),
            Issue::new("c", 3.0 * STEP, 0.0),
        ];
        let normalized = normalize(&reports);
        let clusters = cluster_issues(&normalized.scored, DEFAULT_CLUSTER_RADIUS_KM);

        assert_eq!(clusters.len(), 2);
        assert_eq!(member_ids(&clusters[0]), vec!["a", "b"]);
        assert_eq!(member_ids(&clusters[1]), vec!["c"]);
    }

    #[test]
    fn test_input_order_decides_seeds() {
        // Same points, middle one first: it reaches both ends.
        let reports = vec![
            Issue::new("b", 1.5 * STEP, 0.0),
            Issue::new("a", 0.0, 0.0),
            Issue::new("c", 3.0 * STEP, 0.0),
        ];
        let normalized = normalize(&reports);
        let clusters = cluster_issues(&normalized.scored, DEFAULT_CLUSTER_RADIUS_KM);

        assert_eq!(clusters.len(), 1);
        assert_eq!(member_ids(&clusters[0]), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_far_issues_seed_their_own_clusters() {
        // x is far from a, so x seeds its own cluster and picks up y after it.
        let reports = vec![
            Issue::new("a", 0.0, 0.0),
            Issue::new("x", 0.5, 0.5),
            Issue::new("a2", STEP, 0.0),
            Issue::new("y", 0.5 + STEP, 0.5),
        ];
        let normalized = normalize(&reports);
        let clusters = cluster_issues(&normalized.scored, DEFAULT_CLUSTER_RADIUS_KM);

        assert_eq!(clusters.len(), 2);
        assert_eq!(member_ids(&clusters[0]), vec!["a", "a2"]);
        assert_eq!(member_ids(&clusters[1]), vec!["x", "y"]);
    }

    #[test]
    fn test_average_priority() {
        let mut severe = Issue::new("severe", 0.0, 0.0);
        severe.severity = Some(crate::traits::Severity::Severe); // 100 + 50
        let minor = {
            let mut issue = Issue::new("minor", STEP, 0.0);
            issue.severity = Some(crate::traits::Severity::Minor); // 20 + 50
            issue
        };
        let reports = vec![severe, minor];
        let normalized = normalize(&reports);
        let clusters = cluster_issues(&normalized.scored, DEFAULT_CLUSTER_RADIUS_KM);

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].average_priority(), 110.0);
    }

    #[test]
    fn test_every_cluster_has_its_seed_first() {
        let reports: Vec<Issue> = (0..30)
            .map(|i| Issue::new(format!("r{}", i), 0.004 * (i % 6) as f64, 0.03 * (i / 6) as f64))
            .collect();
        let normalized = normalize(&reports);
        let clusters = cluster_issues(&normalized.scored, DEFAULT_CLUSTER_RADIUS_KM);

        assert!(!clusters.is_empty());
        for cluster in &clusters {
            assert!(!cluster.is_empty());
            assert_eq!(cluster.seed().index, cluster.members()[0].index);
            // Seeds are the lowest input position in their cluster.
            assert!(cluster.members().iter().all(|m| m.index >= cluster.seed().index));
        }
    }

    #[test]
    fn test_radius_boundary_is_inclusive() {
        let reports = vec![Issue::new("a", 0.0, 0.0), Issue::new("b", 0.0, 0.1)];
        let normalized = normalize(&reports);
        let exact = haversine_km((0.0, 0.0), (0.0, 0.1));

        assert_eq!(cluster_issues(&normalized.scored, exact).len(), 1);
        assert_eq!(cluster_issues(&normalized.scored, exact * 0.999).len(), 2);
    }
}
