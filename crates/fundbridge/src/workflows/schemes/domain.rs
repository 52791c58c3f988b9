use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeId(pub u32);

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The six questionnaire dimensions a scheme's eligibility is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    StartupStage,
    IndustryType,
    AnnualRevenue,
    Employees,
    RegisteredLocation,
    ExistingSupport,
}

impl Dimension {
    pub const COUNT: usize = 6;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::StartupStage,
            Self::IndustryType,
            Self::AnnualRevenue,
            Self::Employees,
            Self::RegisteredLocation,
            Self::ExistingSupport,
        ]
    }

    /// Field name used by the eligibility form.
    pub const fn field(self) -> &'static str {
        match self {
            Self::StartupStage => "startupStage",
            Self::IndustryType => "industryType",
            Self::AnnualRevenue => "annualRevenue",
            Self::Employees => "employees",
            Self::RegisteredLocation => "registeredLocation",
            Self::ExistingSupport => "existingSupport",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StartupStage => "Startup Stage",
            Self::IndustryType => "Industry Type",
            Self::AnnualRevenue => "Annual Revenue",
            Self::Employees => "Number of Employees",
            Self::RegisteredLocation => "Registered Location",
            Self::ExistingSupport => "Existing Government Support",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// Shared surface of the categorical value types so form options and catalog
/// validation can treat every dimension uniformly.
pub trait CategoryValue: Copy + Ord + Sized + 'static {
    const DIMENSION: Dimension;
    /// Stand-in for a submitted value that is not among the options.
    const UNLISTED: Self;

    /// Every listed value, in form order.
    fn options() -> &'static [Self];

    /// Canonical form label; `None` for the unlisted marker.
    fn label(self) -> Option<&'static str>;

    fn is_listed(self) -> bool {
        self.label().is_some()
    }

    /// Resolve a label, tolerating surrounding whitespace and ASCII case.
    fn from_label(raw: &str) -> Option<Self> {
        let needle = raw.trim();
        Self::options().iter().copied().find(|value| {
            value
                .label()
                .map(|label| label.eq_ignore_ascii_case(needle))
                .unwrap_or(false)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StartupStage {
    Ideation,
    Validation,
    #[serde(rename = "Early Traction")]
    EarlyTraction,
    Scaling,
    Established,
    #[serde(other, rename = "unlisted")]
    Unlisted,
}

impl CategoryValue for StartupStage {
    const DIMENSION: Dimension = Dimension::StartupStage;
    const UNLISTED: Self = Self::Unlisted;

    fn options() -> &'static [Self] {
        &[
            Self::Ideation,
            Self::Validation,
            Self::EarlyTraction,
            Self::Scaling,
            Self::Established,
        ]
    }

    fn label(self) -> Option<&'static str> {
        match self {
            Self::Ideation => Some("Ideation"),
            Self::Validation => Some("Validation"),
            Self::EarlyTraction => Some("Early Traction"),
            Self::Scaling => Some("Scaling"),
            Self::Established => Some("Established"),
            Self::Unlisted => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IndustryType {
    Agriculture,
    EdTech,
    FinTech,
    Healthcare,
    #[serde(rename = "IT/Software")]
    ItSoftware,
    Manufacturing,
    Retail,
    #[serde(rename = "Clean Energy")]
    CleanEnergy,
    Transportation,
    Others,
    #[serde(other, rename = "unlisted")]
    Unlisted,
}

impl IndustryType {
    pub const ALL_LISTED: [Self; 10] = [
        Self::Agriculture,
        Self::EdTech,
        Self::FinTech,
        Self::Healthcare,
        Self::ItSoftware,
        Self::Manufacturing,
        Self::Retail,
        Self::CleanEnergy,
        Self::Transportation,
        Self::Others,
    ];
}

impl CategoryValue for IndustryType {
    const DIMENSION: Dimension = Dimension::IndustryType;
    const UNLISTED: Self = Self::Unlisted;

    fn options() -> &'static [Self] {
        &Self::ALL_LISTED
    }

    fn label(self) -> Option<&'static str> {
        match self {
            Self::Agriculture => Some("Agriculture"),
            Self::EdTech => Some("EdTech"),
            Self::FinTech => Some("FinTech"),
            Self::Healthcare => Some("Healthcare"),
            Self::ItSoftware => Some("IT/Software"),
            Self::Manufacturing => Some("Manufacturing"),
            Self::Retail => Some("Retail"),
            Self::CleanEnergy => Some("Clean Energy"),
            Self::Transportation => Some("Transportation"),
            Self::Others => Some("Others"),
            Self::Unlisted => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RevenueBand {
    #[serde(rename = "Pre-revenue")]
    PreRevenue,
    #[serde(rename = "Less than ₹10 Lakhs")]
    UnderTenLakhs,
    #[serde(rename = "₹10 Lakhs–₹50 Lakhs", alias = "₹10 Lakhs - ₹50 Lakhs")]
    TenToFiftyLakhs,
    #[serde(rename = "₹50 Lakhs–₹2 Crore", alias = "₹50 Lakhs - ₹2 Crore")]
    FiftyLakhsToTwoCrore,
    #[serde(rename = "₹2 Crore–₹5 Crore", alias = "₹2 Crore - ₹5 Crore")]
    TwoToFiveCrore,
    #[serde(rename = "More than ₹5 Crore")]
    AboveFiveCrore,
    #[serde(other, rename = "unlisted")]
    Unlisted,
}

impl CategoryValue for RevenueBand {
    const DIMENSION: Dimension = Dimension::AnnualRevenue;
    const UNLISTED: Self = Self::Unlisted;

    fn options() -> &'static [Self] {
        &[
            Self::PreRevenue,
            Self::UnderTenLakhs,
            Self::TenToFiftyLakhs,
            Self::FiftyLakhsToTwoCrore,
            Self::TwoToFiveCrore,
            Self::AboveFiveCrore,
        ]
    }

    fn label(self) -> Option<&'static str> {
        match self {
            Self::PreRevenue => Some("Pre-revenue"),
            Self::UnderTenLakhs => Some("Less than ₹10 Lakhs"),
            Self::TenToFiftyLakhs => Some("₹10 Lakhs–₹50 Lakhs"),
            Self::FiftyLakhsToTwoCrore => Some("₹50 Lakhs–₹2 Crore"),
            Self::TwoToFiveCrore => Some("₹2 Crore–₹5 Crore"),
            Self::AboveFiveCrore => Some("More than ₹5 Crore"),
            Self::Unlisted => None,
        }
    }

    fn from_label(raw: &str) -> Option<Self> {
        // Hyphenated ranges are common when the en dash is typed by hand.
        let normalized = raw.trim().replace(" - ", "–");
        Self::options().iter().copied().find(|value| {
            value
                .label()
                .map(|label| label.eq_ignore_ascii_case(&normalized))
                .unwrap_or(false)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmployeeBand {
    #[serde(rename = "1-5 employees", alias = "1-5")]
    OneToFive,
    #[serde(rename = "6-20 employees", alias = "6-20")]
    SixToTwenty,
    #[serde(rename = "21-50 employees", alias = "21-50")]
    TwentyOneToFifty,
    #[serde(rename = "51-100 employees", alias = "51-100")]
    FiftyOneToHundred,
    #[serde(rename = "More than 100 employees")]
    AboveHundred,
    #[serde(other, rename = "unlisted")]
    Unlisted,
}

impl CategoryValue for EmployeeBand {
    const DIMENSION: Dimension = Dimension::Employees;
    const UNLISTED: Self = Self::Unlisted;

    fn options() -> &'static [Self] {
        &[
            Self::OneToFive,
            Self::SixToTwenty,
            Self::TwentyOneToFifty,
            Self::FiftyOneToHundred,
            Self::AboveHundred,
        ]
    }

    fn label(self) -> Option<&'static str> {
        match self {
            Self::OneToFive => Some("1-5 employees"),
            Self::SixToTwenty => Some("6-20 employees"),
            Self::TwentyOneToFifty => Some("21-50 employees"),
            Self::FiftyOneToHundred => Some("51-100 employees"),
            Self::AboveHundred => Some("More than 100 employees"),
            Self::Unlisted => None,
        }
    }

    fn from_label(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let expanded = if trimmed.to_ascii_lowercase().ends_with("employees") {
            trimmed.to_string()
        } else {
            format!("{trimmed} employees")
        };
        Self::options().iter().copied().find(|value| {
            value
                .label()
                .map(|label| label.eq_ignore_ascii_case(&expanded))
                .unwrap_or(false)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LocationType {
    #[serde(rename = "Metro City")]
    MetroCity,
    #[serde(rename = "Tier 2 City")]
    TierTwoCity,
    #[serde(rename = "Tier 3 City")]
    TierThreeCity,
    #[serde(rename = "Rural Area")]
    RuralArea,
    #[serde(rename = "Special Economic Zone")]
    SpecialEconomicZone,
    #[serde(rename = "Industrial Cluster")]
    IndustrialCluster,
    #[serde(other, rename = "unlisted")]
    Unlisted,
}

impl LocationType {
    pub const ALL_LISTED: [Self; 6] = [
        Self::MetroCity,
        Self::TierTwoCity,
        Self::TierThreeCity,
        Self::RuralArea,
        Self::SpecialEconomicZone,
        Self::IndustrialCluster,
    ];
}

impl CategoryValue for LocationType {
    const DIMENSION: Dimension = Dimension::RegisteredLocation;
    const UNLISTED: Self = Self::Unlisted;

    fn options() -> &'static [Self] {
        &Self::ALL_LISTED
    }

    fn label(self) -> Option<&'static str> {
        match self {
            Self::MetroCity => Some("Metro City"),
            Self::TierTwoCity => Some("Tier 2 City"),
            Self::TierThreeCity => Some("Tier 3 City"),
            Self::RuralArea => Some("Rural Area"),
            Self::SpecialEconomicZone => Some("Special Economic Zone"),
            Self::IndustrialCluster => Some("Industrial Cluster"),
            Self::Unlisted => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    None,
    Incubation,
    Funding,
    Tax,
    Multiple,
    #[serde(other)]
    Unlisted,
}

impl CategoryValue for SupportLevel {
    const DIMENSION: Dimension = Dimension::ExistingSupport;
    const UNLISTED: Self = Self::Unlisted;

    fn options() -> &'static [Self] {
        &[
            Self::None,
            Self::Incubation,
            Self::Funding,
            Self::Tax,
            Self::Multiple,
        ]
    }

    fn label(self) -> Option<&'static str> {
        match self {
            Self::None => Some("none"),
            Self::Incubation => Some("incubation"),
            Self::Funding => Some("funding"),
            Self::Tax => Some("tax"),
            Self::Multiple => Some("multiple"),
            Self::Unlisted => None,
        }
    }
}

impl SupportLevel {
    /// Human wording shown next to the form option.
    pub const fn description(self) -> &'static str {
        match self {
            Self::None => "No existing support",
            Self::Incubation => "Incubation support",
            Self::Funding => "Government funding",
            Self::Tax => "Tax benefits",
            Self::Multiple => "Multiple schemes",
            Self::Unlisted => "Unlisted",
        }
    }
}

/// Accepted values per dimension for one scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityCriteria {
    pub startup_stage: BTreeSet<StartupStage>,
    pub industry_type: BTreeSet<IndustryType>,
    pub annual_revenue: BTreeSet<RevenueBand>,
    pub employees: BTreeSet<EmployeeBand>,
    pub registered_location: BTreeSet<LocationType>,
    pub existing_support: BTreeSet<SupportLevel>,
}

/// Label/value pair rendered in a scheme's detail list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeDetail {
    pub label: String,
    pub value: String,
}

impl SchemeDetail {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Card accent used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTone {
    Blue,
    Green,
    Purple,
    Orange,
    Teal,
    Indigo,
    Rose,
    Amber,
}

/// One government support program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeRecord {
    pub id: SchemeId,
    pub title: String,
    pub ministry: String,
    pub description: String,
    pub details: Vec<SchemeDetail>,
    pub tone: DisplayTone,
    pub website: String,
    pub application_url: Option<String>,
    pub eligibility: EligibilityCriteria,
}

impl SchemeRecord {
    pub fn has_application_channel(&self) -> bool {
        self.application_url.is_some()
    }
}

/// Single selection per dimension, as submitted by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantProfile {
    pub startup_stage: StartupStage,
    pub industry_type: IndustryType,
    pub annual_revenue: RevenueBand,
    pub employees: EmployeeBand,
    pub registered_location: LocationType,
    pub existing_support: SupportLevel,
}
