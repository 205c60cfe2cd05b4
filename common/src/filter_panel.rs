//! State and view model of the filter/sort panel.
//!
//! The panel never talks to the network. It renders links whose targets come
//! from the codec, the applied filter tracker and the sort resolver.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::applied_filter::{AppliedFilter, removal_url};
use crate::facet::{Facet, FacetType};
use crate::filter_codec::{decode_filters, filter_link};
use crate::query_params::Location;
use crate::sort::{SORT_OPTIONS, SortParam, active_sort_option, sort_url};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Panel visibility plus one collapse state per filter group, all closed at first.
/// Only explicit toggles change it; applying a filter does not.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPanelState {
    panel: Disclosure,
    groups: BTreeMap<String, Disclosure>,
}

impl FilterPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel.is_open()
    }

    pub fn toggle_panel(&mut self) {
        self.panel = self.panel.toggled();
    }

    pub fn set_panel_open(&mut self, open: bool) {
        self.panel = if open { Disclosure::Open } else { Disclosure::Closed };
    }

    pub fn group(&self, group_id: &str) -> Disclosure {
        self.groups.get(group_id).copied().unwrap_or_default()
    }

    pub fn toggle_group(&mut self, group_id: &str) {
        let next = self.group(group_id).toggled();
        self.groups.insert(group_id.to_string(), next);
    }
}

// Picking a facet option rewrites the current entry; a range commit adds one.
const OPTION_LINK_REPLACES: bool = true;
const RANGE_COMMIT_REPLACES: bool = false;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptionView {
    pub id: String,
    pub label: String,
    pub count: u64,
    pub href: String,
    /// Swap the current history entry instead of adding one.
    pub replace: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterGroupBody {
    Options(Vec<FilterOptionView>),
    /// Text inputs seeded from the URL; `replace` applies to their debounced commit.
    PriceRange { replace: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterGroupView {
    pub id: String,
    pub label: String,
    pub body: FilterGroupBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppliedFilterChip {
    pub filter: AppliedFilter,
    pub removal_href: String,
    pub replace: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortOptionView {
    pub param: SortParam,
    pub label: &'static str,
    pub href: String,
    pub replace: bool,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterPanelView {
    pub groups: Vec<FilterGroupView>,
    pub applied_filters: Vec<AppliedFilterChip>,
    pub sort_options: Vec<SortOptionView>,
    pub active_sort: SortParam,
}

impl FilterPanelView {
    pub fn build(location: &Location, facets: &[Facet]) -> Self {
        let Location { path, params } = location;

        let groups = facets
            .iter()
            .filter_map(|facet| {
                let body = match facet.facet_type {
                    FacetType::PriceRange => FilterGroupBody::PriceRange { replace: RANGE_COMMIT_REPLACES },
                    FacetType::List | FacetType::Boolean => FilterGroupBody::Options(
                        facet
                            .values
                            .iter()
                            .filter_map(|value| {
                                let href = filter_link(facet.facet_type, &value.input, params, path)?;
                                Some(FilterOptionView {
                                    id: value.id.clone(),
                                    label: value.label.clone(),
                                    count: value.count,
                                    href,
                                    replace: OPTION_LINK_REPLACES,
                                })
                            })
                            .collect(),
                    ),
                    FacetType::Unknown => return None,
                };
                Some(FilterGroupView { id: facet.id.clone(), label: facet.label.clone(), body })
            })
            .collect();

        let applied_filters = decode_filters(params)
            .applied_filters
            .into_iter()
            .map(|filter| {
                let removal_href = removal_url(&filter, params, path);
                AppliedFilterChip { filter, removal_href, replace: false }
            })
            .collect();

        let active_sort = active_sort_option(params);
        let sort_options = SORT_OPTIONS
            .into_iter()
            .map(|param| SortOptionView {
                param,
                label: param.label(),
                href: sort_url(param, params, path),
                replace: false,
                active: param == active_sort,
            })
            .collect();

        Self { groups, applied_filters, sort_options, active_sort }
    }
}
