use dioxus::prelude::*;

use crate::components::search_input::SearchInput;
use crate::routes::Route;

const FEATURED_COLLECTIONS: [(&str, &str); 3] = [
    ("all", "All products"),
    ("freestyle", "Freestyle"),
    ("backcountry", "Backcountry"),
];

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Storefront - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 100%;
                padding: 36px 40px;
                box-sizing: border-box;
            ",
            h1 {
                style: "font-size: 40px; font-weight: 500; margin: 0;",
                "Shop the collection"
            }
            SearchInput { initial_term: String::new() }

            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                ",
                for (handle, title) in FEATURED_COLLECTIONS {
                    CollectionCard { key: "{handle}", handle: handle.to_string(), title: title.to_string() }
                }
            }
        }
    }
}

#[component]
fn CollectionCard(handle: String, title: String) -> Element {
    rsx! {
        Link {
            to: Route::collection(handle),
            div {
                style: "
                    display:flex;
                    align-items: flex-end;
                    width: 260px;
                    height: 160px;
                    border-radius: 16px;
                    padding: 18px;
                    box-sizing: border-box;
                    background: linear-gradient(135deg, #1C212D 0%, #4B5770 100%);
                    color: white;
                    font-size: 22px;
                    font-weight: 500;
                ",
                "{title}"
            }
        }
    }
}
