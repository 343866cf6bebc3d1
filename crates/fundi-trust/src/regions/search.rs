use super::selection::SelectionState;
use serde::{Deserialize, Serialize};

/// A logged gig as returned by the gig listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GigRecord {
    pub id: u64,
    pub job_type: String,
    pub client_name: String,
    pub county: String,
    pub constituency: String,
    pub ward: String,
    #[serde(default)]
    pub is_verified: bool,
}

/// Filter payload for gig search: the region selection plus free-form filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GigSearchQuery {
    #[serde(flatten)]
    pub selection: SelectionState,
    pub job_type: Option<String>,
    pub client_name: Option<String>,
}

impl GigSearchQuery {
    pub fn new(selection: SelectionState) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    pub fn with_job_type(mut self, job_type: Option<String>) -> Self {
        self.job_type = job_type.filter(|value| !value.trim().is_empty());
        self
    }

    pub fn with_client_name(mut self, client_name: Option<String>) -> Self {
        self.client_name = client_name
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        self
    }

    /// Search stays disabled until at least one filter is set.
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
            && self.selection.ward.is_none()
            && self.job_type.is_none()
            && self.client_name.is_none()
    }

    pub fn matches(&self, gig: &GigRecord) -> bool {
        let exact = |filter: &Option<String>, value: &str| {
            filter.as_deref().map_or(true, |wanted| wanted == value)
        };

        exact(&self.selection.county, &gig.county)
            && exact(&self.selection.constituency, &gig.constituency)
            && exact(&self.selection.ward, &gig.ward)
            && exact(&self.job_type, &gig.job_type)
            && self.client_name.as_deref().map_or(true, |needle| {
                gig.client_name
                    .to_lowercase()
                    .contains(&needle.to_lowercase())
            })
    }

    /// Matching gigs in their original order. An empty query matches nothing.
    pub fn filter<'g>(&self, gigs: &'g [GigRecord]) -> Vec<&'g GigRecord> {
        if self.is_empty() {
            return Vec::new();
        }
        gigs.iter().filter(|gig| self.matches(gig)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gig(id: u64, job_type: &str, client: &str, constituency: &str, ward: &str) -> GigRecord {
        GigRecord {
            id,
            job_type: job_type.to_string(),
            client_name: client.to_string(),
            county: "Nairobi".to_string(),
            constituency: constituency.to_string(),
            ward: ward.to_string(),
            is_verified: id % 2 == 1,
        }
    }

    fn gigs() -> Vec<GigRecord> {
        vec![
            gig(1, "Plumbing", "Nairobi Hospital", "Westlands", "Parklands"),
            gig(2, "Electrical", "KNH", "Dagoretti North", "Kilimani"),
            gig(3, "Carpentry", "Aga Khan Hospital", "Westlands", "Parklands"),
            gig(4, "Painting", "MP Shah Hospital", "Starehe", "Nairobi Central"),
        ]
    }

    fn selection(constituency: Option<&str>) -> SelectionState {
        SelectionState {
            county: Some("Nairobi".to_string()),
            constituency: constituency.map(str::to_string),
            ward: None,
        }
    }

    #[test]
    fn empty_query_is_disabled() {
        let query = GigSearchQuery::default()
            .with_client_name(Some("   ".to_string()))
            .with_job_type(Some(String::new()));

        assert!(query.is_empty());
        assert!(query.filter(&gigs()).is_empty());
    }

    #[test]
    fn region_filters_narrow_results() {
        let records = gigs();
        let query = GigSearchQuery::new(selection(Some("Westlands")));

        let ids: Vec<u64> = query.filter(&records).iter().map(|gig| gig.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn client_name_matches_case_insensitively() {
        let records = gigs();
        let query = GigSearchQuery::default().with_client_name(Some(" hospital ".to_string()));

        let ids: Vec<u64> = query.filter(&records).iter().map(|gig| gig.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn combines_job_type_with_region() {
        let records = gigs();
        let query = GigSearchQuery::new(selection(None))
            .with_job_type(Some("Electrical".to_string()));

        let ids: Vec<u64> = query.filter(&records).iter().map(|gig| gig.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn payload_flattens_selection() {
        let query = GigSearchQuery::new(selection(Some("Westlands")));
        let json = serde_json::to_value(&query).expect("serializes");

        assert_eq!(json["county"], "Nairobi");
        assert_eq!(json["constituency"], "Westlands");
        assert!(json["ward"].is_null());
        assert!(json["client_name"].is_null());
    }
}
