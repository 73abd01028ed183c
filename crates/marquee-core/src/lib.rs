//! Core types and traits for the Marquee movie catalog.
//!
//! This crate provides the movie model, the error taxonomy, the store
//! contract and the catalog contract shared by the storage backends, the
//! catalog service and the HTTP gateway.

pub mod catalog;
pub mod error;
pub mod movie;
pub mod repository;
pub mod validation;

pub use catalog::MovieCatalog;
pub use error::{CatalogError, StorageError};
pub use movie::{Movie, MovieDraft, MovieId};
pub use repository::{ReadRepository, Repository};
