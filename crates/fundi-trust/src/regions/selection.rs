use super::tree::RegionTree;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Selection payload handed to the gig query collaborator.
///
/// Values produced by [`RegionSelector`] always satisfy: a constituency implies a
/// county that contains it, and a ward implies a constituency that contains it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub county: Option<String>,
    pub constituency: Option<String>,
    pub ward: Option<String>,
}

impl SelectionState {
    pub fn stage(&self) -> SelectionStage {
        match (&self.county, &self.constituency, &self.ward) {
            (_, Some(_), Some(_)) => SelectionStage::WardSelected,
            (_, Some(_), None) => SelectionStage::ConstituencySelected,
            (Some(_), None, _) => SelectionStage::CountySelected,
            (None, None, _) => SelectionStage::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stage() == SelectionStage::Empty
    }
}

/// Deepest level that currently holds a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStage {
    Empty,
    CountySelected,
    ConstituencySelected,
    WardSelected,
}

impl SelectionStage {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "Nothing selected",
            Self::CountySelected => "County selected",
            Self::ConstituencySelected => "Constituency selected",
            Self::WardSelected => "Ward selected",
        }
    }
}

/// Result of a selection event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Applied,
    /// The value was not a child of the current parent; state is unchanged.
    Rejected,
}

/// Cascading picker state over a [`RegionTree`].
///
/// Every transition clears the levels below the one it writes, so the held
/// [`SelectionState`] can be sent to the query layer at any time.
#[derive(Debug, Clone)]
pub struct RegionSelector<'a> {
    tree: &'a RegionTree,
    state: SelectionState,
}

impl<'a> RegionSelector<'a> {
    pub fn new(tree: &'a RegionTree) -> Self {
        Self {
            tree,
            state: SelectionState::default(),
        }
    }

    /// Replays a possibly stale payload through the validated transitions.
    /// Levels that no longer fit the tree are dropped along with their descendants.
    pub fn restore(tree: &'a RegionTree, state: &SelectionState) -> Self {
        let mut selector = Self::new(tree);
        selector.select_county(state.county.as_deref());
        if selector.select_constituency(state.constituency.as_deref()) == SelectionChange::Applied
        {
            selector.select_ward(state.ward.as_deref());
        }
        selector
    }

    /// Sets the county and clears the lower levels. Unknown counties are kept but
    /// offer no constituencies.
    pub fn select_county(&mut self, name: Option<&str>) -> SelectionChange {
        self.state = SelectionState {
            county: non_blank(name).map(str::to_string),
            constituency: None,
            ward: None,
        };
        SelectionChange::Applied
    }

    pub fn select_constituency(&mut self, name: Option<&str>) -> SelectionChange {
        let Some(name) = non_blank(name) else {
            self.state.constituency = None;
            self.state.ward = None;
            return SelectionChange::Applied;
        };

        let known = self
            .tree
            .find_constituency(self.state.county.as_deref(), Some(name))
            .is_some();
        if !known {
            debug!(
                county = ?self.state.county,
                constituency = name,
                "constituency rejected: not a child of the selected county"
            );
            return SelectionChange::Rejected;
        }

        self.state.constituency = Some(name.to_string());
        self.state.ward = None;
        SelectionChange::Applied
    }

    pub fn select_ward(&mut self, name: Option<&str>) -> SelectionChange {
        let Some(name) = non_blank(name) else {
            self.state.ward = None;
            return SelectionChange::Applied;
        };

        let known = self
            .tree
            .find_constituency(
                self.state.county.as_deref(),
                self.state.constituency.as_deref(),
            )
            .is_some_and(|constituency| constituency.has_ward(name));
        if !known {
            debug!(
                constituency = ?self.state.constituency,
                ward = name,
                "ward rejected: not a child of the selected constituency"
            );
            return SelectionChange::Rejected;
        }

        self.state.ward = Some(name.to_string());
        SelectionChange::Applied
    }

    pub fn reset(&mut self) {
        self.state = SelectionState::default();
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn into_state(self) -> SelectionState {
        self.state
    }

    pub fn stage(&self) -> SelectionStage {
        self.state.stage()
    }

    pub fn county_options(&self) -> Vec<&'a str> {
        self.tree.county_names()
    }

    pub fn constituency_options(&self) -> Vec<&'a str> {
        self.tree.constituencies_of(self.state.county.as_deref())
    }

    pub fn ward_options(&self) -> Vec<&'a str> {
        self.tree.wards_of(
            self.state.county.as_deref(),
            self.state.constituency.as_deref(),
        )
    }

    pub fn constituency_picker_enabled(&self) -> bool {
        self.state.county.is_some() && !self.constituency_options().is_empty()
    }

    pub fn ward_picker_enabled(&self) -> bool {
        self.state.constituency.is_some() && !self.ward_options().is_empty()
    }
}

fn non_blank(name: Option<&str>) -> Option<&str> {
    name.filter(|value| !value.trim().is_empty())
}
