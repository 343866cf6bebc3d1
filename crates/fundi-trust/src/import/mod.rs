//! File-backed data access: score history CSV, analytics feed JSON, gig CSV and
//! region tree JSON. Everything here produces plain values for the pure cores.

mod gigs;
mod scores;

use crate::dashboard::AnalyticsFeed;
use crate::regions::{GigRecord, RegionTree, RegionTreeError};
use crate::trend::ScoreSample;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

pub use gigs::read_gig_records;
pub use scores::read_score_samples;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid analytics feed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("line {line}: '{value}' is not an RFC 3339 timestamp or YYYY-MM-DD date")]
    InvalidTimestamp { line: u64, value: String },
    #[error("line {line}: '{value}' is not a numeric score")]
    InvalidScore { line: u64, value: String },
    #[error(transparent)]
    Regions(#[from] RegionTreeError),
}

pub fn read_score_samples_path<P: AsRef<Path>>(path: P) -> Result<Vec<ScoreSample>, ImportError> {
    read_score_samples(open(path.as_ref())?)
}

pub fn read_gig_records_path<P: AsRef<Path>>(path: P) -> Result<Vec<GigRecord>, ImportError> {
    read_gig_records(open(path.as_ref())?)
}

pub fn read_analytics_feed<R: Read>(reader: R) -> Result<AnalyticsFeed, ImportError> {
    let feed: AnalyticsFeed = serde_json::from_reader(reader)?;
    debug!(
        trends = feed.trends.len(),
        organizations = feed.organizations.len(),
        job_types = feed.job_types.len(),
        "analytics feed parsed"
    );
    Ok(feed)
}

pub fn read_analytics_feed_path<P: AsRef<Path>>(path: P) -> Result<AnalyticsFeed, ImportError> {
    read_analytics_feed(open(path.as_ref())?)
}

pub fn read_region_tree_path<P: AsRef<Path>>(path: P) -> Result<RegionTree, ImportError> {
    Ok(RegionTree::from_reader(open(path.as_ref())?)?)
}

fn open(path: &Path) -> Result<BufReader<File>, ImportError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ImportError::Open {
            path: path.display().to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn missing_file_reports_path() {
        let err = read_score_samples_path("/definitely/not/here.csv").expect_err("missing file");
        assert!(matches!(err, ImportError::Open { .. }));
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }

    #[test]
    fn feed_accepts_api_field_names() {
        let json = r#"{
            "summary": {
                "all_time": { "total_gigs": 4, "verified_gigs": 3, "total_earnings": 60500, "unique_orgs": 3 },
                "last_7_days": { "total_gigs": 1, "verified_gigs": 1, "total_earnings": 8500 }
            },
            "trends": [ { "period": "2025-01-01", "total_gigs": 2, "verified_gigs": 1, "total_earnings": 12000, "verification_rate": 50 } ],
            "organizations": [ { "organization_id": 7, "organization_name": "KNH", "total_gigs": 2, "verified_gigs": 2, "total_earnings": 27000 } ],
            "job_types": [ { "job_type": "Plumbing", "total_gigs": 1, "verified_gigs": 1, "total_earnings": 8500 } ],
            "credit_score": { "current_score": 64, "score_history": [ { "timestamp": "2025-01-01T00:00:00Z", "score": 64 } ] },
            "comparative": {
                "current_period": { "total_gigs": 3, "verified_gigs": 2, "total_earnings": 20500, "unique_orgs": 2 },
                "previous_period": { "total_gigs": 1, "verified_gigs": 1, "total_earnings": 8500, "unique_orgs": 1 }
            }
        }"#;

        let feed = read_analytics_feed(Cursor::new(json)).expect("feed parses");

        assert_eq!(feed.summary.all_time.total_count, 4);
        assert_eq!(feed.summary.all_time.unique_entities, 3);
        assert_eq!(feed.summary.last_7_days.earnings, 8500.0);
        assert_eq!(feed.summary.last_30_days.total_count, 0);
        assert_eq!(feed.organizations[0].name, "KNH");
        assert_eq!(feed.job_types[0].name, "Plumbing");
        let credit = feed.credit_score.expect("credit score present");
        assert_eq!(credit.current_score, Some(64.0));
        assert_eq!(credit.score_history[0].value, 64.0);
        let comparative = feed.comparative.expect("comparative present");
        assert_eq!(comparative.current_period.total_count, 3);
    }

    #[test]
    fn feed_defaults_missing_sections() {
        let feed = read_analytics_feed(Cursor::new("{}")).expect("empty feed parses");
        assert!(feed.trends.is_empty());
        assert!(feed.credit_score.is_none());
        assert!(feed.comparative.is_none());
    }
}
