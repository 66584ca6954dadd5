//! Core types and trait definitions for the Holonet catalog.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! favorites manager and the query façade are generic over
//! [`store::CatalogStore`], which storage backends implement.

pub mod catalog;
pub mod entity;
pub mod error;
pub mod favorite;
pub mod favorites;
pub mod store;

pub use catalog::Catalog;
pub use error::{Error, ErrorKind, Result};
pub use favorites::Favorites;
