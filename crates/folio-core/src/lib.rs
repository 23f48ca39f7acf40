//! Core types and content-synchronization rules for folio.
//!
//! This crate has no HTTP or database dependencies.
//! Every other crate depends on it: the store implements
//! [`store::ContentRepository`], the API drives [`service::ContentService`],
//! and the editor CLI builds on [`form::ContentForm`].

pub mod codec;
pub mod content;
pub mod error;
pub mod form;
pub mod lenient;
pub mod normalize;
pub mod reconcile;
pub mod service;
pub mod store;
pub mod timestamp;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
