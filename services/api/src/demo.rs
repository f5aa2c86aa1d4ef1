use crate::infra::{
    load_catalog, load_config, parse_date_bucket, parse_job_type, InMemoryNoticePublisher,
    InMemorySeekerRepository,
};
use clap::Args;
use job_board::board::seeker::{
    ApplicationSubmission, JobSeekerService, ResumeAttachment, SeekerServiceError,
};
use job_board::board::{
    DatePostedBucket, FilterCriteria, JobCatalog, JobTypeFilter, SearchResults,
};
use job_board::error::AppError;
use job_board::telemetry;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Free text matched against title, company, and description
    #[arg(long, short)]
    pub(crate) query: Option<String>,
    /// Free text matched against the posting location
    #[arg(long, short)]
    pub(crate) location: Option<String>,
    /// Exact job type label, e.g. Full-time or Contract
    #[arg(long, value_parser = parse_job_type)]
    pub(crate) job_type: Option<JobTypeFilter>,
    /// Recency bucket: any, last_24_hours, last_week
    #[arg(long, value_parser = parse_date_bucket)]
    pub(crate) date_posted: Option<DatePostedBucket>,
    /// Exact category, e.g. Design
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// CSV catalog to search instead of the built-in sample
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl SearchArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_text: self.query.clone().unwrap_or_default(),
            location_text: self.location.clone().unwrap_or_default(),
            job_type: self.job_type.unwrap_or_default(),
            date_posted: self.date_posted.unwrap_or_default(),
            category: self.category.clone(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// CSV catalog to use instead of the built-in sample
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let config = load_config(args.catalog.clone())?;
    let catalog = load_catalog(config.catalog.path)?;
    let criteria = args.criteria();
    let results = catalog.search(&criteria);

    if args.json {
        match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Search results unavailable: {err}"),
        }
    } else {
        render_results(&criteria, &results);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = load_config(args.catalog)?;
    telemetry::init(&config.telemetry)?;
    let catalog = load_catalog(config.catalog.path)?;
    run_demo_session(catalog);
    Ok(())
}

fn run_demo_session(catalog: JobCatalog) {
    println!("Job board demo ({} postings)", catalog.len());

    let criteria = demo_criteria();
    let results = catalog.search(&criteria);
    render_results(&criteria, &results);

    let Some(first) = results.jobs.first().cloned() else {
        return;
    };

    let repository = Arc::new(InMemorySeekerRepository::default());
    let notices = Arc::new(InMemoryNoticePublisher::default());
    let service = JobSeekerService::new(catalog, repository, notices.clone());

    println!("\nSeeker actions");
    match service.toggle_saved(first.id) {
        Ok(outcome) => println!("- Save \"{}\" -> {:?}", first.title, outcome),
        Err(err) => println!("- Save failed: {err}"),
    }

    let mut submission = ApplicationSubmission {
        posting_id: first.id,
        applicant_name: "Demo Seeker".to_string(),
        resume: None,
    };
    match service.apply(submission.clone()) {
        Err(SeekerServiceError::Action(err)) => println!("- Apply without resume -> {err}"),
        Ok(_) => println!("- Apply without resume unexpectedly succeeded"),
        Err(err) => println!("- Apply failed: {err}"),
    }

    submission.resume = Some(ResumeAttachment {
        file_name: "demo-seeker.pdf".to_string(),
    });
    match service.apply(submission) {
        Ok(record) => {
            let view = record.view();
            match serde_json::to_string_pretty(&view) {
                Ok(json) => println!("- Application stored:\n{json}"),
                Err(err) => println!("- Application payload unavailable: {err}"),
            }
        }
        Err(err) => println!("- Apply failed: {err}"),
    }

    let events = notices.events();
    if events.is_empty() {
        println!("\nNotices: none");
    } else {
        println!("\nNotices");
        for notice in events {
            println!("- [{}] {}", notice.template, notice.message);
        }
    }
}

fn demo_criteria() -> FilterCriteria {
    FilterCriteria::default()
        .search("developer")
        .posted_within(DatePostedBucket::LastWeek)
}

pub(crate) fn render_results(criteria: &FilterCriteria, results: &SearchResults) {
    if criteria.is_unfiltered() {
        println!("Filters: none");
    } else {
        println!("Filters: {}", describe_criteria(criteria));
    }
    println!("{} | {}", results.headline, results.showing);

    if results.is_empty() {
        println!("No jobs found");
        return;
    }

    for job in &results.jobs {
        println!(
            "- #{} {} @ {} | {} | {} | {} | posted {}",
            job.id,
            job.title,
            job.company,
            job.location,
            job.job_type,
            job.salary_range,
            job.posted_label
        );
    }
}

fn describe_criteria(criteria: &FilterCriteria) -> String {
    let mut parts = Vec::new();
    if !criteria.search_text.is_empty() {
        parts.push(format!("text \"{}\"", criteria.search_text));
    }
    if !criteria.location_text.is_empty() {
        parts.push(format!("location \"{}\"", criteria.location_text));
    }
    if let JobTypeFilter::Only(job_type) = criteria.job_type {
        parts.push(format!("type {job_type}"));
    }
    if criteria.date_posted != DatePostedBucket::Any {
        parts.push(format!("posted {}", criteria.date_posted.label()));
    }
    if let Some(category) = &criteria.category {
        parts.push(format!("category {category}"));
    }
    parts.join(", ")
}
