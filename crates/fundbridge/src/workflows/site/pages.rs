use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageSlug {
    Home,
    About,
    HowItWorks,
    ForStartups,
    ForInvestors,
}

impl PageSlug {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::HowItWorks,
        Self::ForStartups,
        Self::ForInvestors,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::HowItWorks => "how-it-works",
            Self::ForStartups => "for-startups",
            Self::ForInvestors => "for-investors",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|slug| slug.as_str().eq_ignore_ascii_case(raw))
    }

    pub const fn route(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::HowItWorks => "/how-it-works",
            Self::ForStartups => "/for-startups",
            Self::ForInvestors => "/for-investors",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSection {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketingPage {
    pub slug: PageSlug,
    pub title: &'static str,
    pub tagline: &'static str,
    pub sections: Vec<PageSection>,
}

fn section(heading: &'static str, body: &'static str) -> PageSection {
    PageSection { heading, body }
}

impl MarketingPage {
    pub fn for_slug(slug: PageSlug) -> Self {
        match slug {
            PageSlug::Home => Self {
                slug,
                title: "FundBridge",
                tagline: "Where founders and investors find each other.",
                sections: vec![
                    section(
                        "Raise with confidence",
                        "Build a profile once and get matched with investors whose thesis fits your sector and stage.",
                    ),
                    section(
                        "Curated deal flow",
                        "Investors see startups filtered by ticket size, sector and traction.",
                    ),
                    section(
                        "Government schemes",
                        "Check your eligibility for central schemes in a single questionnaire.",
                    ),
                ],
            },
            PageSlug::About => Self {
                slug,
                title: "About us",
                tagline: "Making early-stage capital easier to reach.",
                sections: vec![
                    section(
                        "Our mission",
                        "Shorten the path from idea to first cheque for founders outside the usual networks.",
                    ),
                    section(
                        "Who we are",
                        "A team of former founders, operators and fund managers.",
                    ),
                ],
            },
            PageSlug::HowItWorks => Self {
                slug,
                title: "How it works",
                tagline: "Three steps from sign-up to term sheet.",
                sections: vec![
                    section(
                        "1. Create your profile",
                        "Startups describe their stage, sector and funding ask. Investors set their preferences.",
                    ),
                    section(
                        "2. Get matched",
                        "Both sides receive ranked matches and can request an introduction.",
                    ),
                    section(
                        "3. Close the round",
                        "Share documents, run diligence and track the deal from the dashboard.",
                    ),
                ],
            },
            PageSlug::ForStartups => Self {
                slug,
                title: "For startups",
                tagline: "Find capital and support that fit your stage.",
                sections: vec![
                    section(
                        "Investor matching",
                        "Reach angels and funds actively investing in your sector.",
                    ),
                    section(
                        "Scheme lookup",
                        "See which government schemes you qualify for before you apply.",
                    ),
                ],
            },
            PageSlug::ForInvestors => Self {
                slug,
                title: "For investors",
                tagline: "Screened deal flow, on your terms.",
                sections: vec![
                    section(
                        "Filtered pipeline",
                        "Only startups that match your ticket size, sectors and stages reach your inbox.",
                    ),
                    section(
                        "Portfolio tracking",
                        "Follow the companies you back from a single dashboard.",
                    ),
                ],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub route: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: Vec<NavLink>,
}

/// Header links and footer columns shared by every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteNavigation {
    pub links: Vec<NavLink>,
    pub footer: Vec<FooterColumn>,
}

fn link(label: &'static str, route: &'static str) -> NavLink {
    NavLink { label, route }
}

impl SiteNavigation {
    pub fn standard() -> Self {
        let links = PageSlug::ALL
            .into_iter()
            .map(|slug| link(MarketingPage::for_slug(slug).title, slug.route()))
            .chain([
                link("Schemes", "/schemes"),
                link("Success Stories", "/stories"),
                link("Dashboard", "/dashboard"),
            ])
            .collect();

        let footer = vec![
            FooterColumn {
                heading: "Platform",
                links: vec![
                    link("How it works", PageSlug::HowItWorks.route()),
                    link("Government schemes", "/schemes"),
                    link("Success stories", "/stories"),
                ],
            },
            FooterColumn {
                heading: "Join",
                links: vec![
                    link("For startups", PageSlug::ForStartups.route()),
                    link("For investors", PageSlug::ForInvestors.route()),
                ],
            },
            FooterColumn {
                heading: "Company",
                links: vec![
                    link("About us", PageSlug::About.route()),
                    link("Contact", "/contact"),
                ],
            },
        ];

        Self { links, footer }
    }
}
