//! Infrastructure layer for concrete implementations.
//!
//! This layer implements interfaces defined by the domain layer and wraps
//! external libraries.
//!
//! # Modules
//!
//! - [`memory_store`] - In-process [`crate::domain::store::LinkStore`]
//! - [`qr`] - PNG QR code rendering

pub mod memory_store;
pub mod qr;

pub use memory_store::MemoryLinkStore;
pub use qr::{QrError, QrRenderer};
