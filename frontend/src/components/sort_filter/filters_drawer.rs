//! Collapsible filter groups.

use common::filter_panel::{AppliedFilterChip, FilterGroupBody, FilterGroupView, FilterOptionView};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdExpandLess, MdExpandMore}};

use crate::components::{
    sort_filter::{SortFilterContext, applied_filters::AppliedFilters, price_range_filter::PriceRangeFilter},
    url_link::UrlLink,
};

#[component]
pub fn FiltersDrawer(groups: ReadSignal<Vec<FilterGroupView>>, applied_filters: ReadSignal<Vec<AppliedFilterChip>>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
            ",
            if !applied_filters.read().is_empty() {
                AppliedFilters { filters: applied_filters }
            }
            for group in groups() {
                FilterGroup { key: "{group.id}", group }
            }
        }
    }
}

#[component]
fn FilterGroup(group: ReadSignal<FilterGroupView>) -> Element {
    let SortFilterContext { mut panel_state, .. } = use_context::<SortFilterContext>();
    let group_id = use_memo(move || group.read().id.clone());
    let is_open = use_memo(move || panel_state.read().group(&group_id.read()).is_open());
    let FilterGroupView { label, body, .. } = group();

    rsx! {
        div {
            style: "border-bottom: 1px solid #E0E0E0; padding-bottom: 8px;",
            button {
                style: "
                    cursor: pointer;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    width: 100%;
                    border: none;
                    background: none;
                    padding: 8px 0;
                    font-size: 16px;
                ",
                onclick: move |_| panel_state.write().toggle_group(&group_id.read()),
                "{label}"
                if is_open() {
                    Icon { icon: MdExpandLess, style: "width: 20px; height: 20px;" }
                } else {
                    Icon { icon: MdExpandMore, style: "width: 20px; height: 20px;" }
                }
            }
            if is_open() {
                FilterGroupContent { body }
            }
        }
    }
}

#[component]
fn FilterGroupContent(body: ReadSignal<FilterGroupBody>) -> Element {
    match body() {
        FilterGroupBody::Options(options) => rsx! {
            ul {
                style: "list-style: none; margin: 0; padding: 0;",
                for option in options {
                    li {
                        key: "{option.id}",
                        FilterOptionLink { option }
                    }
                }
            }
        },
        FilterGroupBody::PriceRange { replace } => rsx! { PriceRangeFilter { replace } },
    }
}

#[component]
fn FilterOptionLink(option: ReadSignal<FilterOptionView>) -> Element {
    let FilterOptionView { label, count, href, replace, .. } = option();
    rsx! {
        UrlLink {
            href,
            replace,
            class: "x-filter-option",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                padding: 4px;
                font-size: 15px;
            ",
            span { "{label}" }
            div { style: "flex: 1 1 auto;" }
            span { style: "color: rgba(28, 33, 45, 0.6);", "{count}" }
        }
    }
}
