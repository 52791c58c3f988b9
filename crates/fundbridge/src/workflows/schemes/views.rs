use serde::Serialize;

use super::domain::{
    CategoryValue, Dimension, EmployeeBand, IndustryType, LocationType, RevenueBand,
    SchemeRecord, StartupStage, SupportLevel,
};
use super::eligibility::MatchAssessment;
use super::filter::{FilterState, SchemeCategory};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeListView {
    pub total: usize,
    pub filter: FilterState,
    pub schemes: Vec<SchemeRecord>,
}

impl SchemeListView {
    pub fn new(filter: FilterState, schemes: Vec<&SchemeRecord>) -> Self {
        Self {
            total: schemes.len(),
            filter,
            schemes: schemes.into_iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    Matched,
    NoMatches,
}

impl EligibilityStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Matched => "Matching schemes found",
            Self::NoMatches => "No matching schemes",
        }
    }
}

/// Outcome of one questionnaire submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityReport {
    pub status: EligibilityStatus,
    pub match_threshold: usize,
    pub evaluated: usize,
    pub matches: Vec<SchemeRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessments: Option<Vec<MatchAssessment>>,
}

impl EligibilityReport {
    pub fn new(
        match_threshold: usize,
        evaluated: usize,
        matches: Vec<&SchemeRecord>,
        assessments: Option<Vec<MatchAssessment>>,
    ) -> Self {
        let status = if matches.is_empty() {
            EligibilityStatus::NoMatches
        } else {
            EligibilityStatus::Matched
        };

        Self {
            status,
            match_threshold,
            evaluated,
            matches: matches.into_iter().cloned().collect(),
            assessments,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub field: &'static str,
    pub label: &'static str,
    pub options: Vec<FormOption>,
}

/// Dropdown contents for the questionnaire and the category filter.
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub fields: Vec<FormField>,
    pub categories: Vec<FormOption>,
}

impl FormOptions {
    pub fn standard() -> Self {
        let fields = Dimension::ordered()
            .into_iter()
            .map(|dimension| FormField {
                field: dimension.field(),
                label: dimension.label(),
                options: options_for(dimension),
            })
            .collect();

        let mut categories = vec![FormOption {
            value: "",
            label: "All Categories",
        }];
        categories.extend(SchemeCategory::ordered().into_iter().map(|category| FormOption {
            value: category.tag(),
            label: category.label(),
        }));

        Self { fields, categories }
    }
}

fn options_for(dimension: Dimension) -> Vec<FormOption> {
    match dimension {
        Dimension::StartupStage => labelled::<StartupStage>(),
        Dimension::IndustryType => labelled::<IndustryType>(),
        Dimension::AnnualRevenue => labelled::<RevenueBand>(),
        Dimension::Employees => labelled::<EmployeeBand>(),
        Dimension::RegisteredLocation => labelled::<LocationType>(),
        Dimension::ExistingSupport => SupportLevel::options()
            .iter()
            .filter_map(|level| {
                level.label().map(|value| FormOption {
                    value,
                    label: level.description(),
                })
            })
            .collect(),
    }
}

fn labelled<T: CategoryValue>() -> Vec<FormOption> {
    T::options()
        .iter()
        .filter_map(|value| value.label())
        .map(|label| FormOption {
            value: label,
            label,
        })
        .collect()
}
