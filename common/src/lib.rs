//! Common library exports shared between frontend and backend.
//!
//! Everything in here is a pure projection of the URL query string: filters and
//! sort order are encoded into it, decoded from it, and every user interaction
//! produces a new ready-to-navigate URL instead of mutating shared state.

extern crate serde;


pub mod query_params;
pub mod facet;
pub mod filter_descriptor;
pub mod filter_codec;
pub mod applied_filter;
pub mod sort;
pub mod debounce;
pub mod range_input;
pub mod filter_panel;
pub mod storefront;
pub mod storefront_const;
