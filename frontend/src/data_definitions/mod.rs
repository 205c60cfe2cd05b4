//! Route parameter types.

pub mod url_query;
