//! Movie catalog service implementation.
//!
//! This crate provides [`CatalogService`], the implementation of the
//! [`MovieCatalog`](marquee_core::MovieCatalog) use cases on top of any
//! [`Repository`](marquee_core::Repository). Core types live in
//! `marquee_core`.

pub mod service;

pub use service::CatalogService;
