use std::collections::BTreeSet;

/// Job board a posting was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Source {
    Linkedin,
    Naukri,
    Indeed,
    Twitter,
}

impl Source {
    pub const ALL: [Source; 4] = [
        Source::Linkedin,
        Source::Naukri,
        Source::Indeed,
        Source::Twitter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Source::Linkedin => "linkedin",
            Source::Naukri => "naukri",
            Source::Indeed => "indeed",
            Source::Twitter => "twitter",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "linkedin" => Some(Source::Linkedin),
            "naukri" => Some(Source::Naukri),
            "indeed" => Some(Source::Indeed),
            "twitter" => Some(Source::Twitter),
            _ => None,
        }
    }
}

/// Posting age window applied to both search and discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFilter {
    H1,
    #[default]
    H24,
    D7,
    D30,
}

impl TimeFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeFilter::H1 => "1h",
            TimeFilter::H24 => "24h",
            TimeFilter::D7 => "7d",
            TimeFilter::D30 => "30d",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "1h" => Some(TimeFilter::H1),
            "24h" => Some(TimeFilter::H24),
            "7d" => Some(TimeFilter::D7),
            "30d" => Some(TimeFilter::D30),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub fn as_str(self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "full-time" => Some(JobType::FullTime),
            "part-time" => Some(JobType::PartTime),
            "contract" => Some(JobType::Contract),
            "internship" => Some(JobType::Internship),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "entry" => Some(ExperienceLevel::Entry),
            "mid" => Some(ExperienceLevel::Mid),
            "senior" => Some(ExperienceLevel::Senior),
            "lead" => Some(ExperienceLevel::Lead),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Recent,
    Relevance,
    Salary,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Recent => "recent",
            SortBy::Relevance => "relevance",
            SortBy::Salary => "salary",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "recent" => Some(SortBy::Recent),
            "relevance" => Some(SortBy::Relevance),
            "salary" => Some(SortBy::Salary),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

/// The confirmed search criteria. A value object: every mutation goes
/// through [`SearchFilters::apply`] and yields a fresh value, so an
/// in-flight request always holds a consistent snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    pub text: String,
    pub hashtags: Vec<String>,
    pub sources: BTreeSet<Source>,
    pub time_filter: TimeFilter,
    pub location: String,
    pub job_type: Option<JobType>,
    pub experience_level: Option<ExperienceLevel>,
    pub salary_min: Option<u64>,
    pub salary_max: Option<u64>,
    pub skills: BTreeSet<String>,
    pub has_contacts: bool,
    pub remote_only: bool,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            text: String::new(),
            hashtags: Vec::new(),
            // All sources selected by default; an empty set is translated
            // to "all" only at the API boundary, never stored here.
            sources: Source::ALL.into_iter().collect(),
            time_filter: TimeFilter::default(),
            location: String::new(),
            job_type: None,
            experience_level: None,
            salary_min: None,
            salary_max: None,
            skills: BTreeSet::new(),
            has_contacts: false,
            remote_only: false,
        }
    }
}

impl SearchFilters {
    /// Overlays `patch` on `self` and returns the corrected new value.
    ///
    /// A salary range entered backwards is swapped rather than rejected:
    /// it is a UI correction, not a hard failure.
    pub fn apply(&self, patch: FilterPatch) -> SearchFilters {
        let mut next = self.clone();
        if let Some(text) = patch.text {
            next.text = text;
        }
        if let Some(hashtags) = patch.hashtags {
            next.hashtags = hashtags;
        }
        if let Some(sources) = patch.sources {
            next.sources = sources;
        }
        if let Some(time_filter) = patch.time_filter {
            next.time_filter = time_filter;
        }
        if let Some(location) = patch.location {
            next.location = location;
        }
        if let Some(job_type) = patch.job_type {
            next.job_type = job_type;
        }
        if let Some(experience_level) = patch.experience_level {
            next.experience_level = experience_level;
        }
        if let Some(salary_min) = patch.salary_min {
            next.salary_min = salary_min;
        }
        if let Some(salary_max) = patch.salary_max {
            next.salary_max = salary_max;
        }
        if let Some(skills) = patch.skills {
            next.skills = skills;
        }
        if let Some(has_contacts) = patch.has_contacts {
            next.has_contacts = has_contacts;
        }
        if let Some(remote_only) = patch.remote_only {
            next.remote_only = remote_only;
        }

        if let (Some(min), Some(max)) = (next.salary_min, next.salary_max) {
            if min > max {
                next.salary_min = Some(max);
                next.salary_max = Some(min);
            }
        }

        next
    }
}

/// Partial overlay for [`SearchFilters::apply`]. `None` leaves a field
/// untouched; the double-`Option` fields can also clear a value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPatch {
    pub text: Option<String>,
    pub hashtags: Option<Vec<String>>,
    pub sources: Option<BTreeSet<Source>>,
    pub time_filter: Option<TimeFilter>,
    pub location: Option<String>,
    pub job_type: Option<Option<JobType>>,
    pub experience_level: Option<Option<ExperienceLevel>>,
    pub salary_min: Option<Option<u64>>,
    pub salary_max: Option<Option<u64>>,
    pub skills: Option<BTreeSet<String>>,
    pub has_contacts: Option<bool>,
    pub remote_only: Option<bool>,
}

/// Scans `free_text` for `#token` occurrences and returns the normalized
/// tags: `#` stripped, lower-cased, de-duplicated preserving first-seen
/// order. A token is one or more word characters (`[A-Za-z0-9_]`).
pub fn extract_hashtags(free_text: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut seen = BTreeSet::new();
    let mut chars = free_text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '#' {
            continue;
        }
        let mut token = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_ascii_alphanumeric() || next == '_' {
                token.push(next.to_ascii_lowercase());
                chars.next();
            } else {
                break;
            }
        }
        if !token.is_empty() && seen.insert(token.clone()) {
            tags.push(token);
        }
    }

    tags
}
