//! Server side access to the hosted commerce API.

pub mod api;
pub mod storefront_utils;
