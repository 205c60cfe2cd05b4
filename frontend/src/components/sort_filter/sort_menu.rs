//! Sort order dropdown.

use common::filter_panel::SortOptionView;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdArrowDropDown};

use crate::components::url_link::UrlLink;

#[component]
pub fn SortMenu(options: ReadSignal<Vec<SortOptionView>>, active_label: ReadSignal<String>) -> Element {
    let mut expanded = use_signal(|| false);
    rsx! {
        div {
            style: "position: relative;",
            button {
                style: "
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    gap: 4px;
                    border: none;
                    background: none;
                    font-size: 15px;
                ",
                onclick: move |_| expanded.toggle(),
                "Sort by: {active_label}"
                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px;" }
            }
            if expanded() {
                div {
                    style: "
                        position: absolute;
                        right: 0px;
                        top: 36px;
                        display: flex;
                        flex-direction: column;
                        gap: 6px;
                        min-width: 200px;
                        padding: 10px;
                        background-color: white;
                        border: 1px solid rgba(0,0,0,0.2);
                        border-radius: 8px;
                        box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                        z-index: 100;
                    ",
                    for option in options() {
                        div {
                            key: "{option.param}",
                            onclick: move |_| expanded.set(false),
                            SortOptionLink { option }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SortOptionLink(option: ReadSignal<SortOptionView>) -> Element {
    let SortOptionView { label, href, replace, active, .. } = option();
    let font_weight = if active { 700 } else { 400 };
    rsx! {
        UrlLink {
            href,
            replace,
            style: "font-size: 15px; font-weight: {font_weight};",
            "{label}"
        }
    }
}
