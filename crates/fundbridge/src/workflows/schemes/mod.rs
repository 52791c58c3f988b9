//! Government scheme lookup: the static catalog, search/category filtering,
//! and the eligibility questionnaire.

pub mod catalog;
pub mod domain;
pub mod eligibility;
pub mod filter;
pub mod lookup;
pub mod router;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, SchemeCatalog};
pub use domain::{
    ApplicantProfile, CategoryValue, Dimension, DisplayTone, EligibilityCriteria, EmployeeBand,
    IndustryType, LocationType, RevenueBand, SchemeDetail, SchemeId, SchemeRecord, StartupStage,
    SupportLevel,
};
pub use eligibility::{evaluate, EligibilityEvaluator, MatchAssessment, MATCH_THRESHOLD};
pub use filter::{filter, CategoryRule, FilterState, SchemeCategory, SchemeField, CATEGORY_RULES};
pub use lookup::{EligibilityForm, FormError, LookupError, LookupState, SchemeLookup};
pub use router::scheme_router;
pub use views::{EligibilityReport, EligibilityStatus, FormOptions, SchemeListView};
