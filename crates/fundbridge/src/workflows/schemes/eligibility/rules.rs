use std::collections::BTreeSet;

use super::super::domain::{ApplicantProfile, CategoryValue, Dimension, EligibilityCriteria};

/// Membership outcome for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DimensionCheck {
    pub dimension: Dimension,
    pub matched: bool,
}

fn check<T: CategoryValue>(accepted: &BTreeSet<T>, selected: T) -> DimensionCheck {
    DimensionCheck {
        dimension: T::DIMENSION,
        // The unlisted marker never sits in a valid criteria set, so it simply misses.
        matched: accepted.contains(&selected),
    }
}

/// Test every profile field against the scheme's accepted values, in form order.
pub(crate) fn check_dimensions(
    criteria: &EligibilityCriteria,
    profile: &ApplicantProfile,
) -> [DimensionCheck; Dimension::COUNT] {
    [
        check(&criteria.startup_stage, profile.startup_stage),
        check(&criteria.industry_type, profile.industry_type),
        check(&criteria.annual_revenue, profile.annual_revenue),
        check(&criteria.employees, profile.employees),
        check(&criteria.registered_location, profile.registered_location),
        check(&criteria.existing_support, profile.existing_support),
    ]
}

pub(crate) fn match_count(criteria: &EligibilityCriteria, profile: &ApplicantProfile) -> usize {
    check_dimensions(criteria, profile)
        .iter()
        .filter(|check| check.matched)
        .count()
}
