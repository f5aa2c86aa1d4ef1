use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier wrapper for catalog postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostingId(pub u32);

impl fmt::Display for PostingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Employment arrangement advertised on a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Contract")]
    Contract,
    #[serde(rename = "Internship")]
    Internship,
    #[serde(rename = "Temporary")]
    Temporary,
}

impl JobType {
    pub const fn all() -> [Self; 5] {
        [
            Self::FullTime,
            Self::PartTime,
            Self::Contract,
            Self::Internship,
            Self::Temporary,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Internship => "Internship",
            Self::Temporary => "Temporary",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Labels are matched exactly; "full-time" is not a job type.
impl FromStr for JobType {
    type Err = CriteriaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|job_type| job_type.label() == value)
            .ok_or_else(|| CriteriaError::UnknownJobType(value.to_string()))
    }
}

/// A single job listing. Postings are read-only once a catalog is seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: PostingId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary_range: String,
    pub job_type: JobType,
    /// Free-text recency such as "2 days ago".
    pub posted_label: String,
    pub description: String,
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Job type narrowing; `Any` disables the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobTypeFilter {
    #[default]
    Any,
    Only(JobType),
}

impl JobTypeFilter {
    pub fn admits(self, job_type: JobType) -> bool {
        match self {
            Self::Any => true,
            Self::Only(expected) => expected == job_type,
        }
    }
}

impl FromStr for JobTypeFilter {
    type Err = CriteriaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "" | "All" | "any" => Ok(Self::Any),
            other => other.parse().map(Self::Only),
        }
    }
}

/// Coarse recency buckets.
///
/// Buckets are resolved against the posting's free-text label, not a timestamp:
/// `Last24Hours` admits any label mentioning "day" and `LastWeek` admits labels
/// mentioning "day" or "week". A "2 days ago" posting therefore lands in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePostedBucket {
    #[default]
    Any,
    #[serde(rename = "last_24_hours")]
    Last24Hours,
    LastWeek,
}

impl DatePostedBucket {
    pub fn admits(self, posted_label: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Last24Hours => posted_label.contains("day"),
            Self::LastWeek => posted_label.contains("day") || posted_label.contains("week"),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Any => "Any Time",
            Self::Last24Hours => "Last 24 hours",
            Self::LastWeek => "Last week",
        }
    }
}

impl FromStr for DatePostedBucket {
    type Err = CriteriaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "" | "any" | "All" | "Any Time" => Ok(Self::Any),
            "last_24_hours" | "Last 24 hours" => Ok(Self::Last24Hours),
            "last_week" | "Last week" => Ok(Self::LastWeek),
            other => Err(CriteriaError::UnknownDateBucket(other.to_string())),
        }
    }
}

/// Immutable snapshot of everything a seeker has typed or selected.
///
/// Empty strings and `Any`/`None` members are the "no filter" values, so
/// `FilterCriteria::default()` admits every posting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub location_text: String,
    #[serde(default)]
    pub job_type: JobTypeFilter,
    #[serde(default)]
    pub date_posted: DatePostedBucket,
    #[serde(default)]
    pub category: Option<String>,
}

impl FilterCriteria {
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn location(mut self, text: impl Into<String>) -> Self {
        self.location_text = text.into();
        self
    }

    pub fn job_type(mut self, job_type: JobType) -> Self {
        self.job_type = JobTypeFilter::Only(job_type);
        self
    }

    pub fn posted_within(mut self, bucket: DatePostedBucket) -> Self {
        self.date_posted = bucket;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty()
            && self.location_text.is_empty()
            && self.job_type == JobTypeFilter::Any
            && self.date_posted == DatePostedBucket::Any
            && self.category.is_none()
    }
}

/// Raised when textual criteria (query strings, CLI flags) name an unknown member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    UnknownJobType(String),
    UnknownDateBucket(String),
}

impl fmt::Display for CriteriaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriteriaError::UnknownJobType(value) => write!(
                f,
                "unknown job type '{}' (expected one of Full-time, Part-time, Contract, Internship, Temporary)",
                value
            ),
            CriteriaError::UnknownDateBucket(value) => write!(
                f,
                "unknown date posted bucket '{}' (expected any, last_24_hours or last_week)",
                value
            ),
        }
    }
}

impl std::error::Error for CriteriaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_type_parsing_is_case_sensitive() {
        assert_eq!("Contract".parse::<JobType>(), Ok(JobType::Contract));
        assert_eq!(
            "contract".parse::<JobType>(),
            Err(CriteriaError::UnknownJobType("contract".to_string()))
        );
    }

    #[test]
    fn job_type_filter_treats_blank_and_all_as_any() {
        assert_eq!("".parse::<JobTypeFilter>(), Ok(JobTypeFilter::Any));
        assert_eq!("All".parse::<JobTypeFilter>(), Ok(JobTypeFilter::Any));
        assert_eq!(
            "Part-time".parse::<JobTypeFilter>(),
            Ok(JobTypeFilter::Only(JobType::PartTime))
        );
    }

    #[test]
    fn week_bucket_also_admits_day_labels() {
        assert!(DatePostedBucket::LastWeek.admits("2 days ago"));
        assert!(DatePostedBucket::Last24Hours.admits("2 days ago"));
        assert!(!DatePostedBucket::Last24Hours.admits("1 week ago"));
        assert!(!DatePostedBucket::LastWeek.admits("3 months ago"));
    }

    #[test]
    fn job_type_serializes_with_display_label() {
        let json = serde_json::to_string(&JobType::FullTime).expect("serializes");
        assert_eq!(json, "\"Full-time\"");
        let bucket = serde_json::to_string(&DatePostedBucket::Last24Hours).expect("serializes");
        assert_eq!(bucket, "\"last_24_hours\"");
    }
}
