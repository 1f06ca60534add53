use serde::Serialize;

// COLUMN NAMES

pub const NAME: &str = "Name";
pub const PLATFORM: &str = "Platform";
pub const YEAR: &str = "Year_of_Release";
pub const GENRE: &str = "Genre";
pub const PUBLISHER: &str = "Publisher";
pub const NA_SALES: &str = "NA_Sales";
pub const EU_SALES: &str = "EU_Sales";
pub const JP_SALES: &str = "JP_Sales";
pub const GLOBAL_SALES: &str = "Global_Sales";
pub const CRITIC_SCORE: &str = "Critic_Score";
pub const USER_SCORE: &str = "User_Score";

pub const NA_RATIO: &str = "NA_Ratio";
pub const EU_RATIO: &str = "EU_Ratio";
pub const JP_RATIO: &str = "JP_Ratio";

/// Columns that must be present in every input file.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    NAME,
    PLATFORM,
    YEAR,
    GENRE,
    PUBLISHER,
    NA_SALES,
    EU_SALES,
    JP_SALES,
    GLOBAL_SALES,
    CRITIC_SCORE,
    USER_SCORE,
];

pub const SCORE_COLUMNS: [&str; 2] = [CRITIC_SCORE, USER_SCORE];
pub const SALES_COLUMNS: [&str; 4] = [NA_SALES, EU_SALES, JP_SALES, GLOBAL_SALES];
pub const TEXT_COLUMNS: [&str; 4] = [NAME, PLATFORM, GENRE, PUBLISHER];

// AGGREGATE VIEWS

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct GenreSuccess {
    pub genre: String,
    /// Titles with a recorded global sales figure
    pub count: u64,
    pub total_sales: f64,
    pub mean_sales: f64,
    /// `None` when no title in the genre has a critic score
    pub mean_critic_score: Option<f64>,
}

/// Mean share of global sales per region for one genre.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct RegionalShare {
    pub genre: String,
    pub na_ratio: Option<f64>,
    pub eu_ratio: Option<f64>,
    pub jp_ratio: Option<f64>,
}

impl RegionalShare {
    pub fn ratios(&self) -> [Option<f64>; 3] {
        [self.na_ratio, self.eu_ratio, self.jp_ratio]
    }
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct PublisherTotal {
    pub publisher: String,
    pub total_sales: f64,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct PublisherYearSales {
    pub publisher: String,
    /// `None` groups titles without a release year
    pub year: Option<i32>,
    pub global_sales: f64,
}

#[derive(Clone, Serialize, Debug, PartialEq, Default)]
pub struct PublisherTimeline {
    /// Largest publishers by total sales, biggest first
    pub top_publishers: Vec<PublisherTotal>,
    pub points: Vec<PublisherYearSales>,
}

impl PublisherTimeline {
    /// Yearly points for one publisher, skipping the unknown-year group.
    pub fn series_for(&self, publisher: &str) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .filter(|p| p.publisher == publisher)
            .filter_map(|p| p.year.map(|y| [f64::from(y), p.global_sales]))
            .collect()
    }
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct PlatformYearSales {
    pub platform: String,
    pub year: Option<i32>,
    pub global_sales: f64,
    pub title_count: u64,
}

/// Every derived view computed from one cleaned table.
#[derive(Clone, Serialize, Debug, Default)]
pub struct AnalysisViews {
    pub row_count: usize,
    pub genre_success: Vec<GenreSuccess>,
    pub regional_preferences: Vec<RegionalShare>,
    /// Every publisher, biggest first
    pub publisher_totals: Vec<PublisherTotal>,
    pub publisher_timeline: PublisherTimeline,
    pub platform_lifecycle: Vec<PlatformYearSales>,
    pub critic_commercial_correlation: f64,
    /// `[critic_score, global_sales]` for rows where both are present
    #[serde(skip)]
    pub critic_sales_points: Vec<[f64; 2]>,
}

/// Headline results returned to the caller and printed to the console.
#[derive(Clone, Serialize, Debug)]
pub struct Insights {
    pub top_genres: Vec<GenreSuccess>,
    pub regional_preferences: Vec<RegionalShare>,
    pub critic_commercial_correlation: f64,
    pub top_publishers: Vec<PublisherTotal>,
}
