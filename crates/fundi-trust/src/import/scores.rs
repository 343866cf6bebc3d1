use super::ImportError;
use crate::trend::{sorted_samples, ScoreSample};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct ScoreRow {
    #[serde(alias = "Timestamp", alias = "created_at")]
    timestamp: String,
    #[serde(
        alias = "Score",
        alias = "value",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    score: Option<String>,
}

/// Reads a `timestamp,score` CSV into samples ordered by timestamp.
///
/// Rows without a score are skipped; malformed timestamps or scores fail the import.
pub fn read_score_samples<R: Read>(reader: R) -> Result<Vec<ScoreSample>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut record = csv::StringRecord::new();
    let mut samples = Vec::new();

    while csv_reader.read_record(&mut record)? {
        let line = record.position().map_or(0, |position| position.line());
        let row: ScoreRow = record.deserialize(Some(&headers))?;

        let Some(raw_score) = row.score else {
            warn!(line, "skipping score row without a value");
            continue;
        };

        let timestamp = parse_timestamp(&row.timestamp).ok_or_else(|| {
            ImportError::InvalidTimestamp {
                line,
                value: row.timestamp.clone(),
            }
        })?;
        let value = raw_score
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or(ImportError::InvalidScore {
                line,
                value: raw_score.clone(),
            })?;

        samples.push(ScoreSample::new(timestamp, value));
    }

    debug!(samples = samples.len(), "score history imported");
    Ok(sorted_samples(&samples))
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Cursor;

    #[test]
    fn parses_mixed_timestamp_formats_in_order() {
        let csv = "timestamp,score\n\
                   2025-01-03,55\n\
                   2025-01-01T08:30:00+03:00,60\n\
                   2025-01-02 12:00:00,65\n";

        let samples = read_score_samples(Cursor::new(csv)).expect("csv parses");

        let values: Vec<f64> = samples.iter().map(|sample| sample.value).collect();
        assert_eq!(values, vec![60.0, 65.0, 55.0]);
        assert_eq!(
            samples[0].timestamp,
            Utc.with_ymd_and_hms(2025, 1, 1, 5, 30, 0)
                .single()
                .expect("valid timestamp")
        );
    }

    #[test]
    fn skips_rows_without_scores() {
        let csv = "timestamp,score\n2025-01-01,60\n2025-01-02,\n2025-01-03,58.5\n";

        let samples = read_score_samples(Cursor::new(csv)).expect("csv parses");
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].value, 58.5);
    }

    #[test]
    fn reports_line_of_bad_timestamp() {
        let csv = "timestamp,score\n2025-01-01,60\nyesterday,61\n";

        match read_score_samples(Cursor::new(csv)) {
            Err(ImportError::InvalidTimestamp { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "yesterday");
            }
            other => panic!("expected timestamp error, got {other:?}"),
        }
    }

    #[test]
    fn line_numbers_count_blank_and_multiline_rows() {
        let csv = "timestamp,score\n2025-01-01,60\n\nyesterday,61\n";
        match read_score_samples(Cursor::new(csv)) {
            Err(ImportError::InvalidTimestamp { line, .. }) => assert_eq!(line, 4),
            other => panic!("expected timestamp error, got {other:?}"),
        }

        let csv = "timestamp,score,note\n2025-01-01,60,\"first\nsecond\"\n2025-01-02,n/a,\n";
        match read_score_samples(Cursor::new(csv)) {
            Err(ImportError::InvalidScore { line, value }) => {
                assert_eq!(line, 4);
                assert_eq!(value, "n/a");
            }
            other => panic!("expected score error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_scores() {
        let csv = "timestamp,score\n2025-01-01,high\n";
        assert!(matches!(
            read_score_samples(Cursor::new(csv)),
            Err(ImportError::InvalidScore { line: 2, .. })
        ));
    }

    #[test]
    fn accepts_value_header_alias() {
        let csv = "timestamp,value\n2025-01-01,60\n";
        let samples = read_score_samples(Cursor::new(csv)).expect("csv parses");
        assert_eq!(samples[0].value, 60.0);
    }
}
