//! Trend alerts over a batch of reports.
//!
//! Reports are grouped by category. Each group is checked for hotspots
//! (tight proximity clusters) and for reports with strong community demand;
//! category totals then raise rain-season warnings for potholes and flooding.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cluster::cluster_issues;
use crate::priority::{ScoredIssue, normalize};
use crate::traits::{Category, Report};

/// Radius of a hotspot around its seed, in kilometers.
pub const HOTSPOT_RADIUS_KM: f64 = 0.5;

/// Smallest cluster reported as a hotspot.
pub const HOTSPOT_MIN_REPORTS: usize = 3;

/// Share of the repair cost avoided by fixing a hotspot early.
pub const HOTSPOT_PREVENTION_FACTOR: f64 = 0.4;

/// Reports with more votes than this count as high community priority.
pub const HIGH_VOTE_THRESHOLD: u32 = 10;

/// More potholes than this raise a rain warning.
pub const POTHOLE_WEATHER_THRESHOLD: usize = 5;
pub const POTHOLE_WEATHER_SAVINGS: f64 = 50_000.0;

/// More flooding reports than this raise a drainage warning.
pub const FLOODING_WEATHER_THRESHOLD: usize = 2;
pub const FLOODING_WEATHER_SAVINGS: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Several reports of one category close together.
    Hotspot,
    /// Reports with many community votes.
    HighVotes,
    /// Category volume likely to worsen with rain.
    Weather,
}

/// Alert urgency. Declared low to high so `Ord` ranks `High` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAlert<IssueId> {
    pub kind: AlertKind,
    pub level: AlertLevel,
    pub category: Category,
    /// Reports behind the alert, in input order (hotspots: seed first).
    pub report_ids: Vec<IssueId>,
    /// Estimated cost avoided by acting now, when one can be given.
    pub savings_estimate: Option<f64>,
}

/// Typical repair cost for a category.
pub fn base_repair_cost(category: &Category) -> f64 {
    match category {
        Category::Pothole => 5_000.0,
        Category::Streetlight => 3_000.0,
        Category::Flooding => 15_000.0,
        Category::DamagedSign => 2_000.0,
        Category::Graffiti => 1_000.0,
        Category::Garbage => 500.0,
        Category::Other(_) => 3_000.0,
    }
}

/// Savings from fixing `count` reports of a category before they worsen.
pub fn hotspot_savings(count: usize, category: &Category) -> f64 {
    (base_repair_cost(category) * count as f64 * HOTSPOT_PREVENTION_FACTOR).round()
}

struct CategoryGroup {
    category: Category,
    indices: Vec<usize>,
}

/// Group report positions by category, groups in first-appearance order.
fn group_by_category<R: Report>(reports: &[R]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for (index, report) in reports.iter().enumerate() {
        let category = report.category();
        match groups.iter_mut().find(|group| group.category == category) {
            Some(group) => group.indices.push(index),
            None => groups.push(CategoryGroup {
                category,
                indices: vec![index],
            }),
        }
    }
    groups
}

/// Analyze a batch of reports and return alerts, `High` before `Medium`.
///
/// Within a level, alerts keep discovery order: per category (hotspots, then
/// high votes), then the weather warnings. Reports without a valid location
/// never join a hotspot but still count toward the other alerts.
pub fn analyze_trends<R>(reports: &[R]) -> Vec<TrendAlert<R::Id>>
where
    R: Report + Sync,
{
    let groups = group_by_category(reports);
    let normalized = normalize(reports);
    let mut alerts = Vec::new();

    for group in &groups {
        let located: Vec<ScoredIssue<'_, R>> = normalized
            .scored
            .iter()
            .filter(|issue| group.indices.binary_search(&issue.index).is_ok())
            .copied()
            .collect();

        for cluster in cluster_issues(&located, HOTSPOT_RADIUS_KM) {
            if cluster.len() < HOTSPOT_MIN_REPORTS {
                continue;
            }
            alerts.push(TrendAlert {
                kind: AlertKind::Hotspot,
                level: AlertLevel::High,
                category: group.category.clone(),
                savings_estimate: Some(hotspot_savings(cluster.len(), &group.category)),
                report_ids: cluster
                    .members()
                    .iter()
                    .map(|member| member.report.id().clone())
                    .collect(),
            });
        }

        let high_votes: Vec<R::Id> = group
            .indices
            .iter()
            .map(|&index| &reports[index])
            .filter(|report| report.votes() > HIGH_VOTE_THRESHOLD)
            .map(|report| report.id().clone())
            .collect();
        if !high_votes.is_empty() {
            alerts.push(TrendAlert {
                kind: AlertKind::HighVotes,
                level: AlertLevel::High,
                category: group.category.clone(),
                report_ids: high_votes,
                savings_estimate: None,
            });
        }
    }

    alerts.extend(weather_alert(
        reports,
        &groups,
        Category::Pothole,
        POTHOLE_WEATHER_THRESHOLD,
        AlertLevel::Medium,
        POTHOLE_WEATHER_SAVINGS,
    ));
    alerts.extend(weather_alert(
        reports,
        &groups,
        Category::Flooding,
        FLOODING_WEATHER_THRESHOLD,
        AlertLevel::High,
        FLOODING_WEATHER_SAVINGS,
    ));

    alerts.sort_by(|a, b| b.level.cmp(&a.level));
    debug!(reports = reports.len(), alerts = alerts.len(), "analyzed trends");
    alerts
}

fn weather_alert<R: Report>(
    reports: &[R],
    groups: &[CategoryGroup],
    category: Category,
    threshold: usize,
    level: AlertLevel,
    savings: f64,
) -> Option<TrendAlert<R::Id>> {
    let group = groups.iter().find(|group| group.category == category)?;
    if group.indices.len() <= threshold {
        return None;
    }
    Some(TrendAlert {
        kind: AlertKind::Weather,
        level,
        category,
        report_ids: group
            .indices
            .iter()
            .map(|&index| reports[index].id().clone())
            .collect(),
        savings_estimate: Some(savings),
    })
}
