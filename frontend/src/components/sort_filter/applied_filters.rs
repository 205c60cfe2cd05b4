//! Removable chips for the filters currently in the URL.

use common::filter_panel::AppliedFilterChip;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::components::url_link::UrlLink;

#[component]
pub fn AppliedFilters(filters: ReadSignal<Vec<AppliedFilterChip>>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; padding-bottom: 16px; border-bottom: 1px solid #E0E0E0;",
            div { style: "font-size: 15px; font-weight: 500;", "Applied filters" }
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 8px;",
                for chip in filters() {
                    UrlLink {
                        key: "{chip.removal_href}-{chip.filter.label}",
                        href: chip.removal_href.clone(),
                        replace: chip.replace,
                        class: "x-applied-filter-chip",
                        style: "
                            display: flex;
                            align-items: center;
                            gap: 4px;
                            border: 1px solid rgba(0,0,0,0.3);
                            border-radius: 1000px;
                            padding: 2px 10px;
                            font-size: 14px;
                        ",
                        "{chip.filter.label}"
                        Icon { icon: MdClose, style: "width: 14px; height: 14px;" }
                    }
                }
            }
        }
    }
}
