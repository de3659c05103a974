use std::sync::Arc;

use services::RosterService;

/// What the composition root must provide to the UI.
pub trait UiApp: Send + Sync {
    fn roster(&self) -> Arc<RosterService>;
}

#[derive(Clone)]
pub struct AppContext {
    roster: Arc<RosterService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            roster: app.roster(),
        }
    }

    #[must_use]
    pub fn roster(&self) -> Arc<RosterService> {
        Arc::clone(&self.roster)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
