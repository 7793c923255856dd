//! Priority scoring and report normalization.
//!
//! All default policy for optional report fields lives here: a report is
//! normalized once into a [`ScoredIssue`] and every later phase reads the
//! resolved values instead of re-applying fallbacks.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::issue::Location;
use crate::traits::{Report, Severity};

/// Risk score assumed when a report has none.
pub const DEFAULT_RISK_SCORE: f64 = 50.0;

/// Weight for a missing or unrecognized severity.
pub const UNKNOWN_SEVERITY_WEIGHT: f64 = 30.0;

/// Priority points per community vote.
pub const VOTE_WEIGHT: f64 = 10.0;

/// Why a report could not be routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// The report has no location at all.
    MissingLocation,
    /// The location is non-finite or outside the WGS84 range.
    InvalidCoordinates,
}

/// Priority points for a severity: severe 100, moderate 50, minor 20, else 30.
pub fn severity_weight(severity: Option<&Severity>) -> f64 {
    match severity {
        Some(Severity::Severe) => 100.0,
        Some(Severity::Moderate) => 50.0,
        Some(Severity::Minor) => 20.0,
        Some(Severity::Unrecognized(_)) | None => UNKNOWN_SEVERITY_WEIGHT,
    }
}

/// Resolve an optional risk score to a value in [0, 100].
pub fn resolve_risk_score(risk_score: Option<f64>) -> f64 {
    match risk_score {
        Some(score) if score.is_finite() => score.clamp(0.0, 100.0),
        _ => DEFAULT_RISK_SCORE,
    }
}

/// `votes * 10 + severity weight + risk score`.
///
/// Always at least 20 for a resolved risk score, so it is safe to divide by.
pub fn priority_score(votes: u32, severity: Option<&Severity>, risk_score: f64) -> f64 {
    f64::from(votes) * VOTE_WEIGHT + severity_weight(severity) + risk_score
}

/// Priority of a report with its optional fields defaulted.
pub fn score<R: Report>(report: &R) -> f64 {
    priority_score(
        report.votes(),
        report.severity().as_ref(),
        resolve_risk_score(report.risk_score()),
    )
}

/// A routable report: location validated, defaults resolved, priority computed.
pub struct ScoredIssue<'a, R: Report> {
    pub report: &'a R,
    /// Position of the report in the caller's input slice.
    pub index: usize,
    pub location: (f64, f64),
    pub risk_score: f64,
    pub priority: f64,
}

impl<R: Report> Clone for ScoredIssue<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Report> Copy for ScoredIssue<'_, R> {}

impl<'a, R: Report> ScoredIssue<'a, R> {
    /// Validate and score a single report.
    pub fn from_report(index: usize, report: &'a R) -> Result<Self, ExclusionReason> {
        let (lat, lng) = report.location().ok_or(ExclusionReason::MissingLocation)?;
        if !Location::new(lat, lng).is_valid() {
            return Err(ExclusionReason::InvalidCoordinates);
        }

        let risk_score = resolve_risk_score(report.risk_score());
        Ok(Self {
            report,
            index,
            location: (lat, lng),
            risk_score,
            priority: priority_score(report.votes(), report.severity().as_ref(), risk_score),
        })
    }
}

/// Reports split into routable issues and rejected ones, both in input order.
pub struct Normalized<'a, R: Report> {
    pub scored: Vec<ScoredIssue<'a, R>>,
    pub rejected: Vec<(&'a R, ExclusionReason)>,
}

/// Score every report in parallel, keeping input order.
pub fn normalize<R>(reports: &[R]) -> Normalized<'_, R>
where
    R: Report + Sync,
{
    let results: Vec<Result<ScoredIssue<'_, R>, (&R, ExclusionReason)>> = reports
        .par_iter()
        .enumerate()
        .map(|(index, report)| {
            ScoredIssue::from_report(index, report).map_err(|reason| (report, reason))
        })
        .collect();

    let mut scored = Vec::with_capacity(results.len());
    let mut rejected = Vec::new();
    for result in results {
        match result {
            Ok(issue) => scored.push(issue),
            Err(rejection) => rejected.push(rejection),
        }
    }

    Normalized { scored, rejected }
}
