//! Client side of the headless CMS: query encoding, HTTP client, view-models
//! and the per-collection accessors the pages use.

pub mod client;
pub mod content;
pub mod model;
pub mod query;

pub use client::{CmsClient, CmsError};
pub use query::CmsQuery;
