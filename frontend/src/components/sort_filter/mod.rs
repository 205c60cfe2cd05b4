//! Filter and sort panel shared by collection and search pages.
//!
//! Everything here renders links computed from the current location. Which
//! parts of the panel are expanded is owned by the page, outside any suspense
//! boundary, so it survives the reload that follows every navigation.

pub mod applied_filters;
pub mod filters_drawer;
pub mod price_range_filter;
pub mod sort_menu;

use common::{
    facet::Facet,
    filter_panel::{FilterPanelState, FilterPanelView},
    query_params::Location,
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_image_icons::MdTune};

use crate::components::sort_filter::{filters_drawer::FiltersDrawer, sort_menu::SortMenu};

#[derive(Clone, Copy)]
pub struct SortFilterContext {
    pub location: ReadSignal<Location>,
    pub panel_state: Signal<FilterPanelState>,
}

#[component]
pub fn SortFilter(
    location: ReadSignal<Location>,
    facets: ReadSignal<Vec<Facet>>,
    mut panel_state: Signal<FilterPanelState>,
    children: Element,
) -> Element {
    use_context_provider(move || SortFilterContext { location, panel_state });

    let view = use_memo(move || FilterPanelView::build(&location.read(), &facets.read()));
    let is_open = use_memo(move || panel_state.read().is_panel_open());
    let applied_count = use_memo(move || view.read().applied_filters.len());

    rsx! {
        div {
            id: "x-sort-filter-toolbar",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: space-between;
                gap: 16px;
                width: 100%;
                padding: 12px 0;
            ",
            button {
                style: "
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    border: 1px solid rgba(0,0,0,0.3);
                    border-radius: 1000px;
                    background-color: white;
                    padding: 8px 16px;
                    font-size: 15px;
                ",
                onclick: move |_| panel_state.write().toggle_panel(),
                Icon { icon: MdTune, style: "width: 20px; height: 20px;" }
                if applied_count() > 0 {
                    "Filter and sort ({applied_count})"
                } else {
                    "Filter and sort"
                }
            }
            SortMenu { options: view.read().sort_options.clone(), active_label: view.read().active_sort.label().to_string() }
        }
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 32px;
                width: 100%;
            ",
            if is_open() {
                div {
                    id: "x-filters-drawer",
                    style: "
                        flex-shrink: 0;
                        width: 280px;
                    ",
                    FiltersDrawer {
                        groups: view.read().groups.clone(),
                        applied_filters: view.read().applied_filters.clone(),
                    }
                }
            }
            div {
                style: "flex-grow: 1; min-width: 0;",
                {children}
            }
        }
    }
}
