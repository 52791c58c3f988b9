mod rules;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::SchemeCatalog;
use super::domain::{ApplicantProfile, Dimension, SchemeId, SchemeRecord};

/// Matching dimensions a scheme needs before it is offered to the applicant.
/// At most one of the six may miss.
pub const MATCH_THRESHOLD: usize = 5;

/// Stateless evaluator that applies the match threshold to a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityEvaluator {
    threshold: usize,
}

impl EligibilityEvaluator {
    pub fn new() -> Self {
        Self {
            threshold: MATCH_THRESHOLD,
        }
    }

    /// Override the threshold, clamped to the number of dimensions.
    pub fn with_threshold(threshold: usize) -> Self {
        Self {
            threshold: threshold.min(Dimension::COUNT),
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn is_eligible(&self, scheme: &SchemeRecord, profile: &ApplicantProfile) -> bool {
        rules::match_count(&scheme.eligibility, profile) >= self.threshold
    }

    /// Schemes meeting the threshold, in catalog order.
    pub fn evaluate<'a>(
        &self,
        catalog: &'a SchemeCatalog,
        profile: &ApplicantProfile,
    ) -> Vec<&'a SchemeRecord> {
        let matches: Vec<_> = catalog
            .schemes()
            .iter()
            .filter(|scheme| self.is_eligible(scheme, profile))
            .collect();

        debug!(
            evaluated = catalog.len(),
            matched = matches.len(),
            threshold = self.threshold,
            "evaluated eligibility profile"
        );

        matches
    }

    /// Per-dimension breakdown for one scheme.
    pub fn assess(&self, scheme: &SchemeRecord, profile: &ApplicantProfile) -> MatchAssessment {
        let checks = rules::check_dimensions(&scheme.eligibility, profile);
        let (matched, unmatched): (Vec<&rules::DimensionCheck>, Vec<&rules::DimensionCheck>) =
            checks.iter().partition(|check| check.matched);

        let matched: Vec<Dimension> = matched.into_iter().map(|check| check.dimension).collect();
        let unmatched: Vec<Dimension> =
            unmatched.into_iter().map(|check| check.dimension).collect();
        let match_count = matched.len();

        MatchAssessment {
            scheme_id: scheme.id,
            match_count,
            eligible: match_count >= self.threshold,
            matched,
            unmatched,
        }
    }

    /// Breakdown for every scheme in the catalog, in catalog order.
    pub fn assess_all(
        &self,
        catalog: &SchemeCatalog,
        profile: &ApplicantProfile,
    ) -> Vec<MatchAssessment> {
        catalog
            .schemes()
            .iter()
            .map(|scheme| self.assess(scheme, profile))
            .collect()
    }
}

impl Default for EligibilityEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate with the standard threshold.
pub fn evaluate<'a>(
    catalog: &'a SchemeCatalog,
    profile: &ApplicantProfile,
) -> Vec<&'a SchemeRecord> {
    EligibilityEvaluator::new().evaluate(catalog, profile)
}

/// Which dimensions a profile satisfied for a scheme, so results can be explained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAssessment {
    pub scheme_id: SchemeId,
    pub match_count: usize,
    pub eligible: bool,
    pub matched: Vec<Dimension>,
    pub unmatched: Vec<Dimension>,
}

impl MatchAssessment {
    pub fn summary(&self) -> String {
        if self.unmatched.is_empty() {
            return format!("scheme {}: all {} criteria met", self.scheme_id, self.match_count);
        }

        let missed: Vec<&str> = self
            .unmatched
            .iter()
            .map(|dimension| dimension.label())
            .collect();
        format!(
            "scheme {}: {}/{} criteria met (missed {})",
            self.scheme_id,
            self.match_count,
            Dimension::COUNT,
            missed.join(", ")
        )
    }
}
