//! HTTP gateway for the Marquee movie catalog.
//!
//! Exposes the [`MovieCatalog`](marquee_core::MovieCatalog) use cases as a
//! JSON API and maps catalog error kinds to HTTP status codes.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
