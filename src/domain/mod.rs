//! Domain layer containing the short link model and its storage contract.
//!
//! Nothing in here knows about HTTP. The types and traits defined by this
//! module are consumed by [`crate::application::services`] and implemented by
//! [`crate::infrastructure`].
//!
//! # Architecture
//!
//! - [`code`] - The [`code::ShortCode`] identifier newtype and reserved segments
//! - [`entities`] - The [`entities::ShortLink`] value handed out to callers
//! - [`generator`] - Candidate identifier strategies behind [`generator::CodeGenerator`]
//! - [`store`] - The [`store::LinkStore`] contract owning every link
//! - [`error`] - Typed failures raised by the store and the service
//!
//! # Redirect Flow
//!
//! 1. HTTP handler receives `GET /{short_id}`
//! 2. [`crate::application::services::ShortenerService::resolve`] is called
//! 3. [`store::LinkStore::resolve`] reads the target and bumps the click counter
//!    as a single step
//! 4. The handler answers with a redirect or a 404

pub mod code;
pub mod entities;
pub mod error;
pub mod generator;
pub mod store;

pub use code::ShortCode;
pub use error::{CapacityExceeded, ShortenerError, StoreError};
