use chrono::{DateTime, NaiveDate, Utc};
use fundi_trust::dashboard::AnalyticsFeed;
use fundi_trust::error::AppError;
use fundi_trust::import::{
    read_analytics_feed_path, read_gig_records_path, read_region_tree_path,
    read_score_samples_path,
};
use fundi_trust::regions::{GigRecord, RegionTree};
use fundi_trust::trend::{sorted_samples, ScoreSample};
use std::path::PathBuf;
use tracing::debug;

/// Runs file-bound work on the blocking pool.
pub(crate) async fn blocking<T, F>(job: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|err| AppError::Background(err.to_string()))?
}

/// Reads the feed and an optional score CSV side by side. Without a CSV the
/// feed's own score history is used.
pub(crate) async fn load_dashboard_inputs(
    feed_path: PathBuf,
    scores_path: Option<PathBuf>,
) -> Result<(AnalyticsFeed, Vec<ScoreSample>), AppError> {
    let feed = blocking(move || Ok(read_analytics_feed_path(&feed_path)?));
    let scores = blocking(move || {
        scores_path
            .map(|path| read_score_samples_path(&path))
            .transpose()
            .map_err(AppError::from)
    });

    let (feed, scores) = tokio::try_join!(feed, scores)?;
    let samples = match scores {
        Some(samples) => samples,
        None => sorted_samples(feed.score_history()),
    };
    debug!(samples = samples.len(), "dashboard inputs loaded");
    Ok((feed, samples))
}

/// Loads a region tree file (falling back to the bundled sample) alongside an
/// optional gig export.
pub(crate) async fn load_region_inputs(
    tree_path: Option<PathBuf>,
    gigs_path: Option<PathBuf>,
) -> Result<(RegionTree, Vec<GigRecord>), AppError> {
    let tree = blocking(move || match tree_path {
        Some(path) => Ok(read_region_tree_path(&path)?),
        None => Ok(RegionTree::kenya_sample()),
    });
    let gigs = blocking(move || match gigs_path {
        Some(path) => Ok(read_gig_records_path(&path)?),
        None => Ok(Vec::new()),
    });

    tokio::try_join!(tree, gigs)
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("failed to parse '{raw}' as RFC 3339 or YYYY-MM-DD"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fundi-trust-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("scratch dir");
        let path = dir.join(name);
        fs::write(&path, contents).expect("scratch file");
        path
    }

    #[test]
    fn parses_dates_and_rfc3339() {
        let date = parse_timestamp("2025-02-01").expect("date parses");
        assert_eq!(date.to_rfc3339(), "2025-02-01T00:00:00+00:00");
        let instant = parse_timestamp("2025-02-01T10:30:00+03:00").expect("rfc3339 parses");
        assert_eq!(instant.to_rfc3339(), "2025-02-01T07:30:00+00:00");
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[tokio::test]
    async fn feed_history_backs_missing_score_file() {
        let feed = scratch_file(
            "feed.json",
            r#"{"credit_score": {"current_score": 61, "score_history": [
                {"timestamp": "2025-01-05T00:00:00Z", "score": 61},
                {"timestamp": "2025-01-01T00:00:00Z", "score": 55}
            ]}}"#,
        );

        let (feed, samples) = load_dashboard_inputs(feed, None)
            .await
            .expect("inputs load");

        assert_eq!(feed.score_history().len(), 2);
        let values: Vec<f64> = samples.iter().map(|sample| sample.value).collect();
        assert_eq!(values, vec![55.0, 61.0]);
    }

    #[tokio::test]
    async fn missing_feed_surfaces_import_error() {
        let err = load_dashboard_inputs(Path::new("/nonexistent/feed.json").to_path_buf(), None)
            .await
            .expect_err("missing file fails");
        assert!(matches!(err, AppError::Import(_)));
    }

    #[tokio::test]
    async fn region_inputs_default_to_bundled_sample() {
        let (tree, gigs) = load_region_inputs(None, None).await.expect("sample loads");
        assert!(tree.county_names().contains(&"Nairobi"));
        assert!(gigs.is_empty());
    }
}
