use chrono::NaiveDate;
use fundbridge::error::AppError;
use fundbridge::workflows::schemes::{SchemeCatalog, SchemeCategory};
use fundbridge::workflows::site::StoryLibrary;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Static content shared by every handler.
#[derive(Debug, Clone)]
pub(crate) struct PlatformContent {
    pub(crate) catalog: Arc<SchemeCatalog>,
    pub(crate) stories: Arc<StoryLibrary>,
}

impl PlatformContent {
    /// Build and validate the built-in catalog and story library.
    pub(crate) fn load() -> Result<Self, AppError> {
        let catalog = SchemeCatalog::standard();
        catalog.validate()?;
        let stories = StoryLibrary::standard()?;
        debug!(
            schemes = catalog.len(),
            stories = stories.len(),
            "loaded platform content"
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            stories: Arc::new(stories),
        })
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_category(raw: &str) -> Result<SchemeCategory, String> {
    SchemeCategory::from_tag(raw).ok_or_else(|| {
        let tags: Vec<&str> = SchemeCategory::ordered()
            .into_iter()
            .map(SchemeCategory::tag)
            .collect();
        format!("unknown category '{raw}' (expected one of: {})", tags.join(", "))
    })
}
