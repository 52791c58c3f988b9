//! Role-based dashboard selection for signed-in users.

pub mod identity;
pub mod router;

use serde::Serialize;
use tracing::{debug, warn};

pub use identity::{
    ClaimsJson, DecodedIdentity, HeaderIdentity, IdentityError, IdentityProvider, StaticIdentity,
};
pub use router::dashboard_router;

/// Greeting used when the identity carries no name.
pub const FALLBACK_DISPLAY_NAME: &str = "there";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardRole {
    Startup,
    Investor,
}

impl DashboardRole {
    /// Only an explicit `startup` user type gets the startup dashboard.
    pub fn from_user_type(user_type: Option<&str>) -> Self {
        match user_type {
            Some(value) if value.trim().eq_ignore_ascii_case("startup") => Self::Startup,
            _ => Self::Investor,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Investor => "investor",
        }
    }

    pub fn cards(self) -> Vec<DashboardCard> {
        let cards: &[(&'static str, &'static str, &'static str)] = match self {
            Self::Startup => &[
                (
                    "Government Schemes",
                    "Check which schemes your startup qualifies for.",
                    "/schemes",
                ),
                (
                    "Pitch Profile",
                    "Keep your pitch deck, traction and funding ask up to date.",
                    "/startup/profile",
                ),
                (
                    "Investor Matches",
                    "Investors whose thesis fits your sector and stage.",
                    "/startup/investors",
                ),
                (
                    "Success Stories",
                    "See how founders closed their rounds on the platform.",
                    "/stories",
                ),
            ],
            Self::Investor => &[
                (
                    "Deal Flow",
                    "Startups looking for capital in your focus sectors.",
                    "/investor/deals",
                ),
                (
                    "Portfolio",
                    "Track the companies you have backed.",
                    "/investor/portfolio",
                ),
                (
                    "Investment Preferences",
                    "Tune ticket size, sectors and stages for your matches.",
                    "/investor/preferences",
                ),
                (
                    "Success Stories",
                    "Recent rounds closed through the platform.",
                    "/stories",
                ),
            ],
        };

        cards
            .iter()
            .map(|&(title, description, route)| DashboardCard {
                title,
                description,
                route,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardCard {
    pub title: &'static str,
    pub description: &'static str,
    pub route: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub role: DashboardRole,
    pub display_name: String,
    pub cards: Vec<DashboardCard>,
}

impl DashboardView {
    pub fn for_identity(identity: Option<&DecodedIdentity>) -> Self {
        let role = DashboardRole::from_user_type(
            identity.and_then(|identity| identity.user_type.as_deref()),
        );
        let display_name = identity
            .and_then(|identity| identity.name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_DISPLAY_NAME)
            .to_string();

        Self {
            role,
            display_name,
            cards: role.cards(),
        }
    }

    pub fn greeting(&self) -> String {
        format!("Welcome back, {}!", self.display_name)
    }
}

/// Pick the dashboard for whoever the provider reports. Identity failures
/// degrade to the investor view instead of failing the page.
pub fn select_dashboard<P>(provider: &P) -> DashboardView
where
    P: IdentityProvider + ?Sized,
{
    let identity = match provider.current_identity() {
        Ok(identity) => identity,
        Err(error) => {
            warn!(error = %error, "failed to read identity; using investor dashboard");
            None
        }
    };

    let view = DashboardView::for_identity(identity.as_ref());
    debug!(role = view.role.label(), "selected dashboard");
    view
}
