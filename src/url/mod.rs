//! URL handling module for OnionScout
//!
//! This module answers the questions the traversal keeps asking about URL
//! strings: is it absolute, is it an onion address, is it a service's top
//! page, and what absolute URL does an anchor target resolve to.

mod classify;
mod resolve;

pub use classify::{
    host_of, is_absolute_url, is_fragment_link, is_http_scheme, is_onion_address, is_top_page,
    origin_of,
};
pub use resolve::resolve;
