use dioxus::{logger::tracing, prelude::*};

use crate::components::navbar::Navbar;
use crate::data_definitions::url_query::UrlQuery;
use crate::pages::collection_page::CollectionPage;
use crate::pages::home_page::HomePage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/collections/:handle?:..query")]
    CollectionPage {
        handle: String,
        query: UrlQuery,
    },


    #[route("/search?:..query")]
    SearchPage { query: UrlQuery },

}

impl Route {
    pub fn collection(handle: impl Into<String>) -> Self {
        Self::CollectionPage { handle: handle.into(), query: UrlQuery::default() }
    }

    pub fn search() -> Self {
        Self::SearchPage { query: UrlQuery::default() }
    }
}

/// Navigate to a URL produced by the filter/sort helpers.
///
/// `replace` swaps the current history entry instead of adding one.
pub fn navigate_to_url(url: &str, replace: bool) {
    match url.parse::<Route>() {
        Ok(route) if replace => {
            navigator().replace(route);
        }
        Ok(route) => {
            navigator().push(route);
        }
        Err(e) => tracing::error!("cannot navigate to {}: {}", url, e),
    }
}
