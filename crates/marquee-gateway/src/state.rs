use std::sync::Arc;

use marquee_core::MovieCatalog;

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<dyn MovieCatalog>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &dyn MovieCatalog {
        self.catalog.as_ref()
    }
}
