use job_board::board::{CatalogError, DatePostedBucket, FilterCriteria, JobCatalog, PostingId};
use std::io::Write;
use std::path::PathBuf;

const HEADER: &str =
    "id,title,company,location,salary,job_type,posted,category,description,requirements\n";

fn write_temp_csv(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("job-board-{}-{name}.csv", std::process::id()));
    let mut file = std::fs::File::create(&path).expect("temp file created");
    file.write_all(HEADER.as_bytes()).expect("header written");
    file.write_all(body.as_bytes()).expect("rows written");
    path
}

#[test]
fn catalog_loads_from_path_and_searches() {
    let path = write_temp_csv(
        "ok",
        "21,Site Reliability Engineer,Ferrous Labs,\"Portland, OR (Remote)\",\"$140,000 - $170,000\",Full-time,1 day ago,Operations,Keep the fleet healthy.,Linux;Kubernetes\n\
         22,QA Contractor,Ferrous Labs,\"Austin, TX\",,Contract,3 weeks ago,,Exercise release candidates.,\n",
    );

    let catalog = JobCatalog::from_path(&path).expect("catalog loads");
    std::fs::remove_file(&path).ok();

    assert_eq!(catalog.len(), 2);
    let sre = catalog.get(PostingId(21)).expect("posting present");
    assert_eq!(sre.requirements, vec!["Linux", "Kubernetes"]);

    let recent = catalog.search(&FilterCriteria::default().posted_within(DatePostedBucket::Last24Hours));
    assert_eq!(recent.total, 1);
    assert_eq!(recent.jobs[0].id, PostingId(21));

    let remote = catalog.search(&FilterCriteria::default().location("remote"));
    assert_eq!(remote.headline, "1 Job Found");
}

#[test]
fn missing_catalog_file_reports_io_error() {
    let path = std::env::temp_dir().join("job-board-definitely-missing.csv");
    match JobCatalog::from_path(&path) {
        Err(CatalogError::Io(_)) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn duplicate_rows_are_rejected_on_import() {
    let path = write_temp_csv(
        "dup",
        "5,Barista,Bean Co,Remote,,Part-time,2 days ago,,Pour coffee.,\n\
         5,Barista,Bean Co,Remote,,Part-time,2 days ago,,Pour coffee.,\n",
    );

    let result = JobCatalog::from_path(&path);
    std::fs::remove_file(&path).ok();

    match result {
        Err(CatalogError::DuplicateId(id)) => assert_eq!(id, PostingId(5)),
        other => panic!("expected duplicate id, got {other:?}"),
    }
}
