//! Marketing pages, site navigation and success stories.

pub mod pages;
pub mod router;
pub mod stories;

pub use pages::{FooterColumn, MarketingPage, NavLink, PageSection, PageSlug, SiteNavigation};
pub use router::site_router;
pub use stories::{StoryCarousel, StoryError, StoryId, StoryLibrary, SuccessStory};
