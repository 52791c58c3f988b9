use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::schemes::catalog::SchemeCatalog;
use crate::workflows::schemes::domain::{
    ApplicantProfile, CategoryValue, EmployeeBand, IndustryType, LocationType, RevenueBand,
    SchemeId, SchemeRecord, StartupStage, SupportLevel,
};
use crate::workflows::schemes::lookup::EligibilityForm;

pub(super) fn catalog() -> SchemeCatalog {
    SchemeCatalog::standard()
}

pub(super) fn shared_catalog() -> Arc<SchemeCatalog> {
    Arc::new(SchemeCatalog::standard())
}

pub(super) fn scheme(catalog: &SchemeCatalog, id: u32) -> &SchemeRecord {
    catalog.get(SchemeId(id)).expect("scheme exists in catalog")
}

pub(super) fn ids(schemes: &[&SchemeRecord]) -> Vec<u32> {
    schemes.iter().map(|scheme| scheme.id.0).collect()
}

/// Early-stage FinTech founder in a metro city with no prior support.
pub(super) fn seed_stage_profile() -> ApplicantProfile {
    ApplicantProfile {
        startup_stage: StartupStage::Ideation,
        industry_type: IndustryType::FinTech,
        annual_revenue: RevenueBand::PreRevenue,
        employees: EmployeeBand::OneToFive,
        registered_location: LocationType::MetroCity,
        existing_support: SupportLevel::None,
    }
}

pub(super) fn seed_stage_form() -> EligibilityForm {
    EligibilityForm::from(seed_stage_profile())
}

fn first<T: CategoryValue>(accepted: &std::collections::BTreeSet<T>) -> T {
    *accepted.iter().next().expect("criteria sets are non-empty")
}

/// A profile satisfying every criteria set of the scheme.
pub(super) fn perfect_profile_for(scheme: &SchemeRecord) -> ApplicantProfile {
    let criteria = &scheme.eligibility;
    ApplicantProfile {
        startup_stage: first(&criteria.startup_stage),
        industry_type: first(&criteria.industry_type),
        annual_revenue: first(&criteria.annual_revenue),
        employees: first(&criteria.employees),
        registered_location: first(&criteria.registered_location),
        existing_support: first(&criteria.existing_support),
    }
}

/// Value of `T` that the accepted set does not contain; falls back to the unlisted marker.
pub(super) fn outside<T: CategoryValue>(accepted: &std::collections::BTreeSet<T>) -> T {
    T::options()
        .iter()
        .copied()
        .find(|value| !accepted.contains(value))
        .unwrap_or(T::UNLISTED)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
