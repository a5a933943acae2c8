//! Core domain entities.
//!
//! Entities are plain values. The store hands out clones, never references
//! into its own map.

pub mod link;

pub use link::{LinkAnalytics, ShortLink, ShortReference};
