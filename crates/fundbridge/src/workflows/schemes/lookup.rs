//! View model for the scheme lookup page.
//!
//! The page moves between browsing the (filtered) catalog, filling in the
//! eligibility questionnaire, and reviewing matches. Filtering is available in
//! every state; evaluation only ever sees a complete profile.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::catalog::SchemeCatalog;
use super::domain::{
    ApplicantProfile, CategoryValue, Dimension, EmployeeBand, IndustryType, LocationType,
    RevenueBand, SchemeId, SchemeRecord, StartupStage, SupportLevel,
};
use super::eligibility::EligibilityEvaluator;
use super::filter::{FilterState, SchemeCategory};

/// Questionnaire draft; each field holds the raw dropdown value, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityForm {
    #[serde(default)]
    pub startup_stage: Option<String>,
    #[serde(default)]
    pub industry_type: Option<String>,
    #[serde(default)]
    pub annual_revenue: Option<String>,
    #[serde(default)]
    pub employees: Option<String>,
    #[serde(default)]
    pub registered_location: Option<String>,
    #[serde(default)]
    pub existing_support: Option<String>,
}

impl EligibilityForm {
    fn slot(&self, dimension: Dimension) -> &Option<String> {
        match dimension {
            Dimension::StartupStage => &self.startup_stage,
            Dimension::IndustryType => &self.industry_type,
            Dimension::AnnualRevenue => &self.annual_revenue,
            Dimension::Employees => &self.employees,
            Dimension::RegisteredLocation => &self.registered_location,
            Dimension::ExistingSupport => &self.existing_support,
        }
    }

    fn slot_mut(&mut self, dimension: Dimension) -> &mut Option<String> {
        match dimension {
            Dimension::StartupStage => &mut self.startup_stage,
            Dimension::IndustryType => &mut self.industry_type,
            Dimension::AnnualRevenue => &mut self.annual_revenue,
            Dimension::Employees => &mut self.employees,
            Dimension::RegisteredLocation => &mut self.registered_location,
            Dimension::ExistingSupport => &mut self.existing_support,
        }
    }

    pub fn value(&self, dimension: Dimension) -> Option<&str> {
        self.slot(dimension)
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn set(&mut self, dimension: Dimension, value: impl Into<String>) {
        *self.slot_mut(dimension) = Some(value.into());
    }

    pub fn clear(&mut self, dimension: Dimension) {
        *self.slot_mut(dimension) = None;
    }

    /// Dimensions still unselected, in form order. Blank strings count as unselected.
    pub fn missing(&self) -> Vec<Dimension> {
        Dimension::ordered()
            .into_iter()
            .filter(|dimension| self.value(*dimension).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Convert a complete draft into a profile. Values outside the options are
    /// kept as unlisted selections rather than rejected.
    pub fn to_profile(&self) -> Result<ApplicantProfile, FormError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(FormError::Incomplete { missing });
        }

        Ok(ApplicantProfile {
            startup_stage: self.resolve::<StartupStage>(),
            industry_type: self.resolve::<IndustryType>(),
            annual_revenue: self.resolve::<RevenueBand>(),
            employees: self.resolve::<EmployeeBand>(),
            registered_location: self.resolve::<LocationType>(),
            existing_support: self.resolve::<SupportLevel>(),
        })
    }

    fn resolve<T: CategoryValue>(&self) -> T {
        let raw = self.value(T::DIMENSION).unwrap_or_default();
        T::from_label(raw).unwrap_or_else(|| {
            debug!(field = T::DIMENSION.field(), value = raw, "unlisted form value");
            T::UNLISTED
        })
    }
}

impl From<ApplicantProfile> for EligibilityForm {
    fn from(profile: ApplicantProfile) -> Self {
        fn label<T: CategoryValue>(value: T) -> Option<String> {
            value.label().map(str::to_string)
        }

        Self {
            startup_stage: label(profile.startup_stage),
            industry_type: label(profile.industry_type),
            annual_revenue: label(profile.annual_revenue),
            employees: label(profile.employees),
            registered_location: label(profile.registered_location),
            existing_support: label(profile.existing_support),
        }
    }
}

/// Reasons the questionnaire cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("eligibility form is missing {}", field_list(.missing))]
    Incomplete { missing: Vec<Dimension> },
}

fn field_list(dimensions: &[Dimension]) -> String {
    dimensions
        .iter()
        .map(|dimension| dimension.field())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised when an action does not apply to the current page state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },
}

/// Page states of the lookup flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LookupState {
    Browsing,
    FormOpen,
    ResultsOpen { matches: Vec<SchemeId> },
}

impl LookupState {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Browsing => "browsing",
            Self::FormOpen => "form_open",
            Self::ResultsOpen { .. } => "results_open",
        }
    }
}

/// Explicit state machine behind the lookup page.
#[derive(Debug, Clone)]
pub struct SchemeLookup {
    catalog: Arc<SchemeCatalog>,
    evaluator: EligibilityEvaluator,
    filter: FilterState,
    form: EligibilityForm,
    state: LookupState,
}

impl SchemeLookup {
    pub fn new(catalog: Arc<SchemeCatalog>) -> Self {
        Self::with_evaluator(catalog, EligibilityEvaluator::new())
    }

    pub fn with_evaluator(catalog: Arc<SchemeCatalog>, evaluator: EligibilityEvaluator) -> Self {
        Self {
            catalog,
            evaluator,
            filter: FilterState::default(),
            form: EligibilityForm::default(),
            state: LookupState::Browsing,
        }
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn form(&self) -> &EligibilityForm {
        &self.form
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    pub fn set_category(&mut self, category: Option<SchemeCategory>) {
        self.filter.category = category;
    }

    /// Catalog entries passing the current search and category.
    pub fn visible_schemes(&self) -> Vec<&SchemeRecord> {
        self.filter.apply(self.catalog.schemes())
    }

    pub fn open_form(&mut self) -> Result<(), LookupError> {
        match self.state {
            LookupState::Browsing | LookupState::FormOpen => {
                self.state = LookupState::FormOpen;
                Ok(())
            }
            LookupState::ResultsOpen { .. } => Err(self.invalid("open the form")),
        }
    }

    pub fn select(
        &mut self,
        dimension: Dimension,
        value: impl Into<String>,
    ) -> Result<(), LookupError> {
        if self.state != LookupState::FormOpen {
            return Err(self.invalid("edit the form"));
        }
        self.form.set(dimension, value);
        Ok(())
    }

    /// Evaluate the draft. An incomplete draft leaves the form open.
    pub fn submit(&mut self) -> Result<Vec<SchemeId>, LookupError> {
        if self.state != LookupState::FormOpen {
            return Err(self.invalid("submit the form"));
        }

        let profile = self.form.to_profile()?;
        let matches: Vec<SchemeId> = self
            .evaluator
            .evaluate(&self.catalog, &profile)
            .into_iter()
            .map(|scheme| scheme.id)
            .collect();

        info!(matched = matches.len(), "eligibility form submitted");
        self.state = LookupState::ResultsOpen {
            matches: matches.clone(),
        };
        Ok(matches)
    }

    /// Return from the results to the filled-in form.
    pub fn revise(&mut self) -> Result<(), LookupError> {
        match self.state {
            LookupState::ResultsOpen { .. } => {
                self.state = LookupState::FormOpen;
                Ok(())
            }
            _ => Err(self.invalid("revise results")),
        }
    }

    /// Dismiss the form or results. The draft is kept for the next visit.
    pub fn close(&mut self) {
        self.state = LookupState::Browsing;
    }

    pub fn reset_form(&mut self) {
        self.form = EligibilityForm::default();
    }

    /// True only once a submission has been evaluated, even if nothing matched.
    pub fn has_results(&self) -> bool {
        matches!(self.state, LookupState::ResultsOpen { .. })
    }

    /// Matched schemes while results are open; `None` before any submission.
    pub fn results(&self) -> Option<Vec<&SchemeRecord>> {
        match &self.state {
            LookupState::ResultsOpen { matches } => Some(
                matches
                    .iter()
                    .filter_map(|id| self.catalog.get(*id))
                    .collect(),
            ),
            _ => None,
        }
    }

    fn invalid(&self, action: &'static str) -> LookupError {
        LookupError::InvalidTransition {
            state: self.state.label(),
            action,
        }
    }
}
