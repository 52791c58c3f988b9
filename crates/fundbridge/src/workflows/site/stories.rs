use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StoryId(pub u32);

/// A round closed through the platform, shown on the home page carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessStory {
    pub id: StoryId,
    pub startup: &'static str,
    pub founder: &'static str,
    pub sector: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub amount_raised: &'static str,
    pub investor: &'static str,
    pub closed_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoryError {
    #[error("story {id} has an impossible closing date {year}-{month:02}-{day:02}")]
    InvalidDate {
        id: u32,
        year: i32,
        month: u32,
        day: u32,
    },
}

struct StorySeed {
    id: u32,
    startup: &'static str,
    founder: &'static str,
    sector: &'static str,
    headline: &'static str,
    summary: &'static str,
    amount_raised: &'static str,
    investor: &'static str,
    closed_on: (i32, u32, u32),
}

const STORY_SEEDS: [StorySeed; 5] = [
    StorySeed {
        id: 1,
        startup: "KhetiLink",
        founder: "Priya Nair",
        sector: "Agriculture",
        headline: "Farm-to-market logistics across 40 districts",
        summary: "Connected smallholder farmers with wholesale buyers and raised a seed round after a six-week diligence on the platform.",
        amount_raised: "₹2.5 Crore",
        investor: "Sahyadri Angels",
        closed_on: (2024, 2, 14),
    },
    StorySeed {
        id: 2,
        startup: "PaySetu",
        founder: "Arjun Mehta",
        sector: "FinTech",
        headline: "UPI collections for neighbourhood retailers",
        summary: "Met a lead investor through a sector match and closed a pre-Series A round within two months.",
        amount_raised: "₹8 Crore",
        investor: "Northbridge Ventures",
        closed_on: (2024, 5, 3),
    },
    StorySeed {
        id: 3,
        startup: "ShikshaBox",
        founder: "Meera Iyer",
        sector: "EdTech",
        headline: "Offline-first learning kits for rural schools",
        summary: "Combined an Atal Incubation Centre grant with an angel syndicate found on the platform.",
        amount_raised: "₹1.2 Crore",
        investor: "Bharat Impact Collective",
        closed_on: (2024, 8, 21),
    },
    StorySeed {
        id: 4,
        startup: "VoltGrid",
        founder: "Rahul Deshpande",
        sector: "Clean Energy",
        headline: "Battery swapping for last-mile electric fleets",
        summary: "Used the scheme lookup to secure CLCSS support before raising growth capital from a climate fund.",
        amount_raised: "₹15 Crore",
        investor: "GreenArc Capital",
        closed_on: (2024, 11, 9),
    },
    StorySeed {
        id: 5,
        startup: "CareNest",
        founder: "Dr. Sana Qureshi",
        sector: "Healthcare",
        headline: "Remote monitoring for post-operative patients",
        summary: "Shortlisted by three investors in its first week on the platform and closed a seed round led by a hospital network.",
        amount_raised: "₹4 Crore",
        investor: "Medwise Partners",
        closed_on: (2025, 1, 27),
    },
];

impl StorySeed {
    fn build(&self) -> Result<SuccessStory, StoryError> {
        let (year, month, day) = self.closed_on;
        let closed_on =
            NaiveDate::from_ymd_opt(year, month, day).ok_or(StoryError::InvalidDate {
                id: self.id,
                year,
                month,
                day,
            })?;

        Ok(SuccessStory {
            id: StoryId(self.id),
            startup: self.startup,
            founder: self.founder,
            sector: self.sector,
            headline: self.headline,
            summary: self.summary,
            amount_raised: self.amount_raised,
            investor: self.investor,
            closed_on,
        })
    }
}

/// Curated success stories in presentation order.
#[derive(Debug, Clone)]
pub struct StoryLibrary {
    stories: Vec<SuccessStory>,
}

impl StoryLibrary {
    pub fn standard() -> Result<Self, StoryError> {
        let stories = STORY_SEEDS
            .iter()
            .map(StorySeed::build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { stories })
    }

    pub fn stories(&self) -> &[SuccessStory] {
        &self.stories
    }

    pub fn get(&self, id: StoryId) -> Option<&SuccessStory> {
        self.stories.iter().find(|story| story.id == id)
    }

    /// Stories in the given sector, compared case-insensitively.
    pub fn in_sector(&self, sector: &str) -> Vec<&SuccessStory> {
        let sector = sector.trim();
        self.stories
            .iter()
            .filter(|story| sector.is_empty() || story.sector.eq_ignore_ascii_case(sector))
            .collect()
    }

    /// Most recently closed first.
    pub fn latest(&self, limit: usize) -> Vec<&SuccessStory> {
        let mut stories: Vec<_> = self.stories.iter().collect();
        stories.sort_by(|a, b| b.closed_on.cmp(&a.closed_on));
        stories.truncate(limit);
        stories
    }

    pub fn carousel(&self) -> StoryCarousel<'_> {
        StoryCarousel::new(&self.stories)
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}

/// Cursor over the stories that wraps around at both ends.
#[derive(Debug, Clone)]
pub struct StoryCarousel<'a> {
    stories: &'a [SuccessStory],
    index: usize,
}

impl<'a> StoryCarousel<'a> {
    pub fn new(stories: &'a [SuccessStory]) -> Self {
        Self { stories, index: 0 }
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&'a SuccessStory> {
        self.stories.get(self.index)
    }

    pub fn next(&mut self) -> Option<&'a SuccessStory> {
        if self.stories.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.stories.len();
        self.current()
    }

    pub fn previous(&mut self) -> Option<&'a SuccessStory> {
        if self.stories.is_empty() {
            return None;
        }
        self.index = self
            .index
            .checked_sub(1)
            .unwrap_or(self.stories.len() - 1);
        self.current()
    }

    pub fn jump_to(&mut self, position: usize) -> Option<&'a SuccessStory> {
        if position >= self.stories.len() {
            return None;
        }
        self.index = position;
        self.current()
    }
}
