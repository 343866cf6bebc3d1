use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constituency {
    #[serde(alias = "constituency_name")]
    pub name: String,
    #[serde(default)]
    pub wards: Vec<String>,
}

impl Constituency {
    pub fn has_ward(&self, ward: &str) -> bool {
        self.wards.iter().any(|candidate| candidate == ward)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct County {
    #[serde(alias = "county_name")]
    pub name: String,
    #[serde(default)]
    pub constituencies: Vec<Constituency>,
}

impl County {
    pub fn constituency(&self, name: &str) -> Option<&Constituency> {
        self.constituencies
            .iter()
            .find(|constituency| constituency.name == name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegionTreeError {
    #[error("duplicate name '{name}' within {scope}")]
    DuplicateName { scope: String, name: String },
    #[error("invalid region tree JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only region forest. Sibling names are unique; the tree never changes once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RegionTree {
    counties: Vec<County>,
}

impl RegionTree {
    pub fn new(counties: Vec<County>) -> Result<Self, RegionTreeError> {
        ensure_unique("the county list", counties.iter().map(|county| &county.name))?;

        for county in &counties {
            ensure_unique(
                &format!("county {}", county.name),
                county.constituencies.iter().map(|constituency| &constituency.name),
            )?;

            for constituency in &county.constituencies {
                ensure_unique(
                    &format!("constituency {}", constituency.name),
                    constituency.wards.iter(),
                )?;
            }
        }

        Ok(Self { counties })
    }

    /// Parses a JSON array of counties.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RegionTreeError> {
        let counties: Vec<County> = serde_json::from_reader(reader)?;
        Self::new(counties)
    }

    /// Builds a tree from data already known to be unique.
    pub(crate) fn from_trusted(counties: Vec<County>) -> Self {
        Self { counties }
    }

    pub fn counties(&self) -> &[County] {
        &self.counties
    }

    pub fn county(&self, name: &str) -> Option<&County> {
        self.counties.iter().find(|county| county.name == name)
    }

    pub fn county_names(&self) -> Vec<&str> {
        self.counties
            .iter()
            .map(|county| county.name.as_str())
            .collect()
    }

    /// Constituencies of `county`; empty when no county is given or the name is unknown.
    pub fn constituencies_of(&self, county: Option<&str>) -> Vec<&str> {
        county
            .and_then(|name| self.county(name))
            .map(|county| {
                county
                    .constituencies
                    .iter()
                    .map(|constituency| constituency.name.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Wards of `constituency` inside `county`; empty for any missing or unknown level.
    pub fn wards_of(&self, county: Option<&str>, constituency: Option<&str>) -> Vec<&str> {
        self.find_constituency(county, constituency)
            .map(|constituency| constituency.wards.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub(crate) fn find_constituency(
        &self,
        county: Option<&str>,
        constituency: Option<&str>,
    ) -> Option<&Constituency> {
        let county = self.county(county?)?;
        county.constituency(constituency?)
    }
}

fn ensure_unique<'a>(
    scope: &str,
    names: impl Iterator<Item = &'a String>,
) -> Result<(), RegionTreeError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(RegionTreeError::DuplicateName {
                scope: scope.to_string(),
                name: name.clone(),
            });
        }
    }
    Ok(())
}
