use std::collections::{BTreeSet, HashSet};

use url::Url;

use super::domain::{
    CategoryValue, Dimension, DisplayTone, EligibilityCriteria, EmployeeBand, IndustryType,
    LocationType, RevenueBand, SchemeDetail, SchemeId, SchemeRecord, StartupStage, SupportLevel,
};

/// Reasons a catalog fails its structural invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("scheme id {0} appears more than once")]
    DuplicateId(SchemeId),
    #[error("scheme {scheme} accepts no values for {dimension}")]
    EmptyCriteria {
        scheme: SchemeId,
        dimension: Dimension,
    },
    #[error("scheme {scheme} lists a value outside the {dimension} options")]
    UnlistedCriteria {
        scheme: SchemeId,
        dimension: Dimension,
    },
    #[error("scheme {scheme} has an invalid {field} '{value}'")]
    InvalidUrl {
        scheme: SchemeId,
        field: &'static str,
        value: String,
    },
}

/// Immutable collection of government support schemes.
#[derive(Debug, Clone)]
pub struct SchemeCatalog {
    schemes: Vec<SchemeRecord>,
}

impl SchemeCatalog {
    /// Build a catalog, rejecting records that break the eligibility invariants.
    pub fn new(schemes: Vec<SchemeRecord>) -> Result<Self, CatalogError> {
        let catalog = Self { schemes };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The eight programs shipped with the lookup tool.
    pub fn standard() -> Self {
        Self {
            schemes: standard_schemes(),
        }
    }

    pub fn schemes(&self) -> &[SchemeRecord] {
        &self.schemes
    }

    pub fn get(&self, id: SchemeId) -> Option<&SchemeRecord> {
        self.schemes.iter().find(|scheme| scheme.id == id)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for scheme in &self.schemes {
            if !seen.insert(scheme.id) {
                return Err(CatalogError::DuplicateId(scheme.id));
            }

            let criteria = &scheme.eligibility;
            check_dimension(scheme.id, &criteria.startup_stage)?;
            check_dimension(scheme.id, &criteria.industry_type)?;
            check_dimension(scheme.id, &criteria.annual_revenue)?;
            check_dimension(scheme.id, &criteria.employees)?;
            check_dimension(scheme.id, &criteria.registered_location)?;
            check_dimension(scheme.id, &criteria.existing_support)?;

            check_url(scheme.id, "website", &scheme.website)?;
            if let Some(application_url) = &scheme.application_url {
                check_url(scheme.id, "applicationUrl", application_url)?;
            }
        }
        Ok(())
    }
}

impl Default for SchemeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_dimension<T: CategoryValue>(
    scheme: SchemeId,
    accepted: &BTreeSet<T>,
) -> Result<(), CatalogError> {
    if accepted.is_empty() {
        return Err(CatalogError::EmptyCriteria {
            scheme,
            dimension: T::DIMENSION,
        });
    }
    if accepted.iter().any(|value| !value.is_listed()) {
        return Err(CatalogError::UnlistedCriteria {
            scheme,
            dimension: T::DIMENSION,
        });
    }
    Ok(())
}

fn check_url(scheme: SchemeId, field: &'static str, value: &str) -> Result<(), CatalogError> {
    let invalid = || CatalogError::InvalidUrl {
        scheme,
        field,
        value: value.to_string(),
    };
    let parsed = Url::parse(value).map_err(|_| invalid())?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(invalid()),
    }
}

fn only<T: Ord + Copy>(values: &[T]) -> BTreeSet<T> {
    values.iter().copied().collect()
}

fn any<T: CategoryValue>() -> BTreeSet<T> {
    T::options().iter().copied().collect()
}

fn standard_schemes() -> Vec<SchemeRecord> {
    use EmployeeBand as E;
    use IndustryType as I;
    use LocationType as L;
    use RevenueBand as R;
    use StartupStage as S;
    use SupportLevel as G;

    vec![
        SchemeRecord {
            id: SchemeId(1),
            title: "Startup India Seed Fund Scheme".to_string(),
            ministry: "Department for Promotion of Industry and Internal Trade (DPIIT)"
                .to_string(),
            description: "Provides financial assistance to startups for proof of concept, prototype development, product trials, market entry and commercialization.".to_string(),
            details: vec![
                SchemeDetail::new("Support", "Up to ₹20 Lakhs grant and ₹50 Lakhs debt"),
                SchemeDetail::new("Eligibility", "DPIIT-recognised startups incorporated within 2 years"),
                SchemeDetail::new("Disbursal", "Through selected incubators"),
            ],
            tone: DisplayTone::Blue,
            website: "https://seedfund.startupindia.gov.in/".to_string(),
            application_url: Some("https://seedfund.startupindia.gov.in/apply".to_string()),
            eligibility: EligibilityCriteria {
                startup_stage: only(&[S::Ideation, S::Validation, S::EarlyTraction]),
                industry_type: any(),
                annual_revenue: only(&[R::PreRevenue, R::UnderTenLakhs]),
                employees: only(&[E::OneToFive, E::SixToTwenty]),
                registered_location: any(),
                existing_support: only(&[G::None, G::Incubation]),
            },
        },
        SchemeRecord {
            id: SchemeId(2),
            title: "Credit Guarantee Scheme for Micro and Small Enterprises".to_string(),
            ministry: "Ministry of MSME".to_string(),
            description: "Collateral-free credit guarantee cover for term loans and working capital extended by member lending institutions to micro and small enterprises.".to_string(),
            details: vec![
                SchemeDetail::new("Guarantee cover", "Up to 85% of sanctioned amount"),
                SchemeDetail::new("Loan ceiling", "₹5 Crore per borrower"),
            ],
            tone: DisplayTone::Green,
            website: "https://www.cgtmse.in/".to_string(),
            application_url: None,
            eligibility: EligibilityCriteria {
                startup_stage: only(&[S::EarlyTraction, S::Scaling, S::Established]),
                industry_type: only(&[
                    I::Agriculture,
                    I::Manufacturing,
                    I::Retail,
                    I::CleanEnergy,
                    I::Transportation,
                    I::Others,
                ]),
                annual_revenue: any(),
                employees: only(&[
                    E::OneToFive,
                    E::SixToTwenty,
                    E::TwentyOneToFifty,
                    E::FiftyOneToHundred,
                ]),
                registered_location: any(),
                existing_support: only(&[G::None, G::Incubation, G::Tax]),
            },
        },
        SchemeRecord {
            id: SchemeId(3),
            title: "Fund of Funds for Startups".to_string(),
            ministry: "Department for Promotion of Industry and Internal Trade (DPIIT)"
                .to_string(),
            description: "Commits capital to SEBI-registered Alternative Investment Funds, which in turn invest in high-potential startups to widen access to domestic venture capital.".to_string(),
            details: vec![
                SchemeDetail::new("Corpus", "₹10,000 Crore"),
                SchemeDetail::new("Managed by", "SIDBI"),
                SchemeDetail::new("Route", "Equity through participating AIFs"),
            ],
            tone: DisplayTone::Purple,
            website: "https://www.sidbivcf.in/en/funds/ffs".to_string(),
            application_url: None,
            eligibility: EligibilityCriteria {
                startup_stage: only(&[S::EarlyTraction, S::Scaling]),
                industry_type: any(),
                annual_revenue: only(&[
                    R::UnderTenLakhs,
                    R::TenToFiftyLakhs,
                    R::FiftyLakhsToTwoCrore,
                    R::TwoToFiveCrore,
                ]),
                employees: only(&[E::SixToTwenty, E::TwentyOneToFifty, E::FiftyOneToHundred]),
                registered_location: only(&[
                    L::MetroCity,
                    L::TierTwoCity,
                    L::SpecialEconomicZone,
                ]),
                existing_support: only(&[G::None, G::Incubation, G::Tax]),
            },
        },
        SchemeRecord {
            id: SchemeId(4),
            title: "Atal Innovation Mission".to_string(),
            ministry: "NITI Aayog".to_string(),
            description: "Establishes Atal Incubation Centres and Atal Tinkering Labs to nurture innovation, entrepreneurship and research-driven startups.".to_string(),
            details: vec![
                SchemeDetail::new("Incubator grant", "Up to ₹10 Crore over 5 years"),
                SchemeDetail::new("Focus", "Deep-tech and social innovation"),
            ],
            tone: DisplayTone::Orange,
            website: "https://aim.gov.in/".to_string(),
            application_url: Some("https://aim.gov.in/apply".to_string()),
            eligibility: EligibilityCriteria {
                startup_stage: only(&[S::Ideation, S::Validation]),
                industry_type: only(&[
                    I::EdTech,
                    I::Healthcare,
                    I::ItSoftware,
                    I::CleanEnergy,
                    I::Agriculture,
                ]),
                annual_revenue: only(&[R::PreRevenue, R::UnderTenLakhs]),
                employees: only(&[E::OneToFive, E::SixToTwenty]),
                registered_location: any(),
                existing_support: only(&[G::None]),
            },
        },
        SchemeRecord {
            id: SchemeId(5),
            title: "ASPIRE: Promotion of Innovation, Rural Industry and Entrepreneurship".to_string(),
            ministry: "Ministry of MSME".to_string(),
            description: "Sets up livelihood business incubators and technology business incubators to promote rural enterprise and agro-based industry.".to_string(),
            details: vec![
                SchemeDetail::new("Incubator support", "Up to ₹1 Crore per centre"),
                SchemeDetail::new("Priority", "Rural and agro-based enterprises"),
            ],
            tone: DisplayTone::Teal,
            website: "https://aspire.msme.gov.in/".to_string(),
            application_url: Some("https://aspire.msme.gov.in/ASPIRE/AFHome.aspx".to_string()),
            eligibility: EligibilityCriteria {
                startup_stage: only(&[S::Ideation, S::Validation, S::EarlyTraction]),
                industry_type: only(&[I::Agriculture, I::Manufacturing, I::Others]),
                annual_revenue: only(&[R::PreRevenue, R::UnderTenLakhs, R::TenToFiftyLakhs]),
                employees: only(&[E::OneToFive, E::SixToTwenty, E::TwentyOneToFifty]),
                registered_location: only(&[L::TierThreeCity, L::RuralArea, L::IndustrialCluster]),
                existing_support: only(&[G::None, G::Incubation]),
            },
        },
        SchemeRecord {
            id: SchemeId(6),
            title: "Credit Linked Capital Subsidy Scheme".to_string(),
            ministry: "Ministry of MSME".to_string(),
            description: "Offers an upfront capital subsidy on institutional credit for technology upgradation of small-scale manufacturing units.".to_string(),
            details: vec![
                SchemeDetail::new("Subsidy", "15% of eligible plant and machinery cost"),
                SchemeDetail::new("Cap", "₹15 Lakhs"),
            ],
            tone: DisplayTone::Indigo,
            website: "https://dcmsme.gov.in/schemes/clcss.htm".to_string(),
            application_url: None,
            eligibility: EligibilityCriteria {
                startup_stage: only(&[S::Scaling, S::Established]),
                industry_type: only(&[I::Manufacturing, I::CleanEnergy, I::Transportation]),
                annual_revenue: only(&[
                    R::TenToFiftyLakhs,
                    R::FiftyLakhsToTwoCrore,
                    R::TwoToFiveCrore,
                    R::AboveFiveCrore,
                ]),
                employees: only(&[
                    E::TwentyOneToFifty,
                    E::FiftyOneToHundred,
                    E::AboveHundred,
                ]),
                registered_location: only(&[
                    L::TierTwoCity,
                    L::TierThreeCity,
                    L::IndustrialCluster,
                    L::SpecialEconomicZone,
                ]),
                existing_support: only(&[G::None, G::Funding, G::Multiple]),
            },
        },
        SchemeRecord {
            id: SchemeId(7),
            title: "Prime Minister's Employment Generation Programme".to_string(),
            ministry: "Ministry of MSME (implemented by KVIC)".to_string(),
            description: "Credit-linked subsidy programme for setting up new micro enterprises in rural and urban areas, with margin money of up to 35% of project cost.".to_string(),
            details: vec![
                SchemeDetail::new("Project ceiling", "₹50 Lakhs manufacturing, ₹20 Lakhs services"),
                SchemeDetail::new("Margin money", "15% to 35% of project cost"),
            ],
            tone: DisplayTone::Rose,
            website: "https://www.kviconline.gov.in/pmegp/".to_string(),
            application_url: Some(
                "https://www.kviconline.gov.in/pmegpeportal/pmegphome/index.jsp".to_string(),
            ),
            eligibility: EligibilityCriteria {
                startup_stage: only(&[S::Ideation, S::Validation]),
                industry_type: only(&[
                    I::Agriculture,
                    I::Manufacturing,
                    I::Retail,
                    I::Transportation,
                    I::Others,
                ]),
                annual_revenue: only(&[R::PreRevenue, R::UnderTenLakhs]),
                employees: only(&[E::OneToFive, E::SixToTwenty]),
                registered_location: only(&[L::TierTwoCity, L::TierThreeCity, L::RuralArea]),
                existing_support: only(&[G::None]),
            },
        },
        SchemeRecord {
            id: SchemeId(8),
            title: "Startup India Tax Exemption (Section 80-IAC)".to_string(),
            ministry: "Central Board of Direct Taxes, Ministry of Finance".to_string(),
            description: "Income tax holiday on profits for three consecutive years out of the first ten years for eligible DPIIT-recognised startups.".to_string(),
            details: vec![
                SchemeDetail::new("Benefit", "100% deduction on profits for 3 years"),
                SchemeDetail::new("Certification", "Inter-Ministerial Board approval"),
            ],
            tone: DisplayTone::Amber,
            website: "https://www.startupindia.gov.in/content/sih/en/startupgov/tax_exemption.html".to_string(),
            application_url: Some("https://www.startupindia.gov.in/content/sih/en/startupgov/startup_recognition_page.html".to_string()),
            eligibility: EligibilityCriteria {
                startup_stage: only(&[S::EarlyTraction, S::Scaling]),
                industry_type: any(),
                annual_revenue: only(&[
                    R::UnderTenLakhs,
                    R::TenToFiftyLakhs,
                    R::FiftyLakhsToTwoCrore,
                    R::TwoToFiveCrore,
                    R::AboveFiveCrore,
                ]),
                employees: any(),
                registered_location: any(),
                existing_support: only(&[G::None, G::Incubation, G::Funding]),
            },
        },
    ]
}
