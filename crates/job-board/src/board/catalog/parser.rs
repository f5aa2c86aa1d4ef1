use crate::board::domain::{JobPosting, JobType, PostingId};
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::CatalogError;

pub(crate) fn parse_postings<R: Read>(reader: R) -> Result<Vec<JobPosting>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut postings = Vec::new();

    for record in csv_reader.deserialize::<PostingRow>() {
        let row = record?;
        postings.push(row.into_posting()?);
    }

    Ok(postings)
}

#[derive(Debug, Deserialize)]
struct PostingRow {
    id: u32,
    title: String,
    company: String,
    location: String,
    #[serde(default)]
    salary: String,
    job_type: String,
    posted: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
    description: String,
    #[serde(default)]
    requirements: String,
}

impl PostingRow {
    fn into_posting(self) -> Result<JobPosting, CatalogError> {
        let job_type = self
            .job_type
            .parse::<JobType>()
            .map_err(|_| CatalogError::UnknownJobType {
                id: PostingId(self.id),
                value: self.job_type.clone(),
            })?;

        Ok(JobPosting {
            id: PostingId(self.id),
            title: self.title,
            company: self.company,
            location: self.location,
            salary_range: self.salary,
            job_type,
            posted_label: self.posted,
            description: self.description,
            requirements: split_requirements(&self.requirements),
            category: self.category,
        })
    }
}

fn split_requirements(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
