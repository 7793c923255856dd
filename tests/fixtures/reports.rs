//! Builder-style report type and seeded report generator.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use repair_route_planner::traits::{Category, IssueStatus, Report, Severity};

#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct TestId(pub u32);

/// Builder for test reports with sensible defaults.
#[derive(Clone, Debug)]
pub struct TestReport {
    pub id: TestId,
    pub location: Option<(f64, f64)>,
    pub category: Category,
    pub severity: Option<Severity>,
    pub votes: u32,
    pub risk_score: Option<f64>,
    pub status: IssueStatus,
}

impl TestReport {
    pub fn new(id: u32) -> Self {
        Self {
            id: TestId(id),
            location: Some((0.0, 0.0)),
            category: Category::Pothole,
            severity: None,
            votes: 0,
            risk_score: None,
            status: IssueStatus::Pending,
        }
    }

    pub fn at(mut self, lat: f64, lng: f64) -> Self {
        self.location = Some((lat, lng));
        self
    }

    pub fn without_location(mut self) -> Self {
        self.location = None;
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn votes(mut self, votes: u32) -> Self {
        self.votes = votes;
        self
    }

    pub fn risk(mut self, risk: f64) -> Self {
        self.risk_score = Some(risk);
        self
    }

    pub fn status(mut self, status: IssueStatus) -> Self {
        self.status = status;
        self
    }
}

impl Report for TestReport {
    type Id = TestId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn location(&self) -> Option<(f64, f64)> {
        self.location
    }

    fn category(&self) -> Category {
        self.category.clone()
    }

    fn severity(&self) -> Option<Severity> {
        self.severity.clone()
    }

    fn votes(&self) -> u32 {
        self.votes
    }

    fn risk_score(&self) -> Option<f64> {
        self.risk_score
    }

    fn status(&self) -> IssueStatus {
        self.status
    }
}

/// Seeded report generator for property sweeps.
pub struct PointGen {
    rng: SmallRng,
}

impl PointGen {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// A point within roughly `span_deg` degrees of `center`.
    pub fn point_near(&mut self, center: (f64, f64), span_deg: f64) -> (f64, f64) {
        let half = span_deg / 2.0;
        (
            center.0 + self.rng.random_range(-half..half),
            center.1 + self.rng.random_range(-half..half),
        )
    }

    pub fn severity(&mut self) -> Option<Severity> {
        match self.rng.random_range(0..5) {
            0 => None,
            1 => Some(Severity::Minor),
            2 => Some(Severity::Moderate),
            3 => Some(Severity::Severe),
            _ => Some(Severity::Unrecognized("critical".to_string())),
        }
    }

    /// `count` pending reports scattered around `center`.
    pub fn reports(&mut self, count: u32, center: (f64, f64), span_deg: f64) -> Vec<TestReport> {
        (0..count)
            .map(|id| {
                let (lat, lng) = self.point_near(center, span_deg);
                let mut report = TestReport::new(id).at(lat, lng).votes(self.rng.random_range(0..8));
                report.severity = self.severity();
                if self.rng.random_bool(2.0 / 3.0) {
                    report.risk_score = Some(self.rng.random_range(0..=100) as f64);
                }
                report
            })
            .collect()
    }
}
