use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::RiskError;
use crate::subject::Subject;

/// One risk factor: a severity weight (1-10) and a score per subject.
/// Negative scores reduce risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskRow {
    pub factor: String,
    pub severity: u8,
    #[serde(rename = "Polly")]
    pub polly: i8,
    #[serde(rename = "Lisa")]
    pub lisa: i8,
}

impl RiskRow {
    pub fn new(factor: &str, severity: u8, polly: i8, lisa: i8) -> Self {
        Self {
            factor: factor.to_string(),
            severity,
            polly,
            lisa,
        }
    }

    /// Raw score for one subject, widened for weighting arithmetic.
    pub fn score(&self, subject: Subject) -> f64 {
        match subject {
            Subject::Polly => f64::from(self.polly),
            Subject::Lisa => f64::from(self.lisa),
        }
    }

    /// `severity * score` for one subject.
    pub fn weighted(&self, subject: Subject) -> f64 {
        f64::from(self.severity) * self.score(subject)
    }
}

/// Total risk for one subject plus the per-factor breakdown, in table order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedRisk {
    pub total: f64,
    pub details: Vec<(String, f64)>,
}

/// One row of the combined table: raw scores and weighted values for every
/// subject side by side. This is the shape the table endpoint serves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub factor: String,
    pub severity: f64,
    #[serde(rename = "Polly")]
    pub polly: f64,
    #[serde(rename = "Lisa")]
    pub lisa: f64,
    pub polly_weighted: f64,
    pub lisa_weighted: f64,
}

/// An ordered, immutable sequence of risk factors. Row order defines the
/// reporting order everywhere downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskTable {
    rows: Vec<RiskRow>,
}

impl RiskTable {
    pub fn new(rows: Vec<RiskRow>) -> Self {
        Self { rows }
    }

    /// The fixed reference dataset. Constructed once at process start and
    /// never mutated afterwards.
    pub fn builtin() -> Self {
        Self::new(vec![
            RiskRow::new("Spontaneous Behavior", 8, 2, 2),
            RiskRow::new("Career Stability", 7, 2, 2),
            RiskRow::new("Insurance/Health Coverage", 9, 2, -2),
            RiskRow::new("Lifestyle Stability", 6, 4, -2),
            RiskRow::new("High School Compatibility", 3, 0, 0),
            RiskRow::new("Childhood Affection", 5, 0, 1),
            RiskRow::new("Food Allergy & IBS", 4, 3, 0),
            RiskRow::new("Credit Score", 7, 3, -2),
            RiskRow::new("Family Health Background", 6, 4, 0),
        ])
    }

    pub fn rows(&self) -> &[RiskRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The subjects this table scores, derived from its rows.
    /// An empty table has no subject set to derive.
    pub fn subjects(&self) -> Result<Vec<Subject>, RiskError> {
        if self.rows.is_empty() {
            return Err(RiskError::EmptyTable);
        }
        Ok(Subject::ALL.to_vec())
    }

    /// Weighted risk for one subject: iterate rows in order, accumulate
    /// `severity * score`, and keep the per-factor breakdown alongside.
    pub fn weighted_risk(&self, subject: Subject) -> WeightedRisk {
        let mut total = 0.0;
        let mut details = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let weighted = row.weighted(subject);
            details.push((row.factor.clone(), weighted));
            total += weighted;
        }
        WeightedRisk { total, details }
    }

    /// Weighted risk for a subject given by name. Unknown names fail with
    /// `InvalidSubject` and produce no partial result.
    pub fn weighted_risk_named(&self, person: &str) -> Result<WeightedRisk, RiskError> {
        let subject = person.parse::<Subject>()?;
        Ok(self.weighted_risk(subject))
    }

    /// Weighted risk for every subject the table scores.
    pub fn all_risks(&self) -> Result<BTreeMap<Subject, WeightedRisk>, RiskError> {
        let mut results = BTreeMap::new();
        for subject in self.subjects()? {
            results.insert(subject, self.weighted_risk(subject));
        }
        Ok(results)
    }

    /// The combined row-by-row table: every factor annotated with both
    /// subjects' raw scores and weighted values.
    pub fn combined_rows(&self) -> Vec<TableRow> {
        self.rows
            .iter()
            .map(|row| TableRow {
                factor: row.factor.clone(),
                severity: f64::from(row.severity),
                polly: row.score(Subject::Polly),
                lisa: row.score(Subject::Lisa),
                polly_weighted: row.weighted(Subject::Polly),
                lisa_weighted: row.weighted(Subject::Lisa),
            })
            .collect()
    }
}

impl Default for RiskTable {
    fn default() -> Self {
        Self::builtin()
    }
}
