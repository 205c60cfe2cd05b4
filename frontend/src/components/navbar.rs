//! Top navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSearch};
use dioxus_free_icons::icons::md_navigation_icons::MdApps;
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
            ",


            div {
                id:"x-nav-topbar",
                style:"
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 28px;
                    height: 64px;
                    padding: 0 32px;
                    background-color: #1C212D;
                    box-sizing: border-box;
                ",

                NavbarLogo{},

                // empty space
                div {
                    style: "flex-grow:1;"
                }
                NavbarIconLinks{},
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn NavbarLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage { },
            span {
                style: "color:white; font-size: 22px; font-weight: 500; letter-spacing: 0.5px;",
                "Storefront"
            }
        }
    }
}

#[component]
fn NavbarIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: row;
                gap: 24px;
                align-items: center;
            ",
            IconLink { to: Route::HomePage { }, icon: MdHome, label: "Home" }
            IconLink { to: Route::collection("all"), icon: MdApps, label: "All products" }
            IconLink { to: Route::search(), icon: MdSearch, label: "Search" }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                style: "color:white; display:flex; flex-direction: row; align-items: center; gap: 6px; font-size: 15px;",
                Icon { icon: icon, style: "width: 24px; height: 24px;" }
                "{label}"
            }
        }
    }
}
