use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

const PLACEHOLDER_TILES: usize = 8;

/// Shows a placeholder grid while a loader below is pending.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! { ProductGridPlaceholder {} },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
fn ProductGridPlaceholder() -> Element {
    rsx! {
        div {
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                gap: 24px;
                width: 100%;
                padding: 24px 40px;
                box-sizing: border-box;
            ",
            for i in 0..PLACEHOLDER_TILES {
                div {
                    key: "{i}",
                    style: "display: flex; flex-direction: column; gap: 6px;",
                    div { style: "width: 100%; aspect-ratio: 4 / 5; border-radius: 8px; background: #F5F6F8;" }
                    div { style: "width: 70%; height: 14px; border-radius: 4px; background: #ECEEF2;" }
                    div { style: "width: 40%; height: 14px; border-radius: 4px; background: #ECEEF2;" }
                }
            }
        }
    }
}
