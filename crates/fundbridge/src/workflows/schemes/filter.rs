use serde::{Deserialize, Serialize};

use super::catalog::SchemeCatalog;
use super::domain::SchemeRecord;

/// Category tags offered by the lookup page's filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeCategory {
    Financial,
    Tax,
    Incubation,
    Research,
    Msme,
}

impl SchemeCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Financial,
            Self::Tax,
            Self::Incubation,
            Self::Research,
            Self::Msme,
        ]
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::Tax => "tax",
            Self::Incubation => "incubation",
            Self::Research => "research",
            Self::Msme => "msme",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Financial => "Financial Support",
            Self::Tax => "Tax Benefits",
            Self::Incubation => "Incubation",
            Self::Research => "Research & Development",
            Self::Msme => "MSME Schemes",
        }
    }

    /// Parse a dropdown tag. Empty and unknown tags mean "no restriction".
    pub fn from_tag(raw: &str) -> Option<Self> {
        let tag = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|category| category.tag() == tag)
    }

    pub fn rule(self) -> &'static CategoryRule {
        // CATEGORY_RULES holds one entry per variant in `ordered()` order.
        &CATEGORY_RULES[self as usize]
    }

    pub fn matches(self, scheme: &SchemeRecord) -> bool {
        self.rule().matches(scheme)
    }
}

/// Scheme text a category rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeField {
    Title,
    Ministry,
    Description,
}

impl SchemeField {
    fn text(self, scheme: &SchemeRecord) -> &str {
        match self {
            Self::Title => &scheme.title,
            Self::Ministry => &scheme.ministry,
            Self::Description => &scheme.description,
        }
    }
}

/// Keyword heuristic classifying a scheme into a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub category: SchemeCategory,
    pub field: SchemeField,
    /// Lowercase fragments; any one present is enough.
    pub keywords: &'static [&'static str],
}

impl CategoryRule {
    pub fn matches(&self, scheme: &SchemeRecord) -> bool {
        let haystack = self.field.text(scheme).to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| haystack.contains(keyword))
    }
}

pub static CATEGORY_RULES: [CategoryRule; 5] = [
    CategoryRule {
        category: SchemeCategory::Financial,
        field: SchemeField::Description,
        keywords: &["financial", "fund"],
    },
    CategoryRule {
        category: SchemeCategory::Tax,
        field: SchemeField::Description,
        keywords: &["tax"],
    },
    CategoryRule {
        category: SchemeCategory::Incubation,
        field: SchemeField::Description,
        keywords: &["incubat"],
    },
    CategoryRule {
        category: SchemeCategory::Research,
        field: SchemeField::Description,
        keywords: &["research", "r&d"],
    },
    CategoryRule {
        category: SchemeCategory::Msme,
        field: SchemeField::Ministry,
        keywords: &["msme"],
    },
];

/// Search box contents and category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub category: Option<SchemeCategory>,
}

impl FilterState {
    pub fn new(search_term: impl Into<String>, category: Option<SchemeCategory>) -> Self {
        Self {
            search_term: search_term.into(),
            category,
        }
    }

    /// Build from raw query/dropdown strings.
    pub fn from_raw(search_term: Option<&str>, category_tag: Option<&str>) -> Self {
        Self {
            search_term: search_term.unwrap_or_default().to_string(),
            category: category_tag.and_then(SchemeCategory::from_tag),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.search_term.is_empty() && self.category.is_none()
    }

    pub fn matches(&self, scheme: &SchemeRecord) -> bool {
        matches_search(scheme, &self.search_term)
            && self
                .category
                .map(|category| category.matches(scheme))
                .unwrap_or(true)
    }

    /// Stable filter over any scheme sequence.
    pub fn apply<'a, I>(&self, schemes: I) -> Vec<&'a SchemeRecord>
    where
        I: IntoIterator<Item = &'a SchemeRecord>,
    {
        schemes
            .into_iter()
            .filter(|scheme| self.matches(scheme))
            .collect()
    }
}

fn matches_search(scheme: &SchemeRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    [&scheme.title, &scheme.description, &scheme.ministry]
        .iter()
        .any(|text| text.to_lowercase().contains(&needle))
}

/// Narrow the catalog by search term and category, preserving catalog order.
pub fn filter<'a>(
    catalog: &'a SchemeCatalog,
    search_term: &str,
    category: Option<SchemeCategory>,
) -> Vec<&'a SchemeRecord> {
    FilterState::new(search_term, category).apply(catalog.schemes())
}
