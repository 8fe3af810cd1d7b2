use std::sync::Arc;

use learn_core::Catalog;
use services::{LearnerStateService, LearningServices};

use crate::actions::{ActionError, LessonAction, dispatch};
use crate::routes::{NavigationError, Route, resolve_address};
use crate::vm::{LessonVm, Page, build_page};

/// What a front-end needs from the application to render pages.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn learner_state(&self) -> Arc<LearnerStateService>;
}

impl UiApp for LearningServices {
    fn catalog(&self) -> Arc<Catalog> {
        LearningServices::catalog(self)
    }

    fn learner_state(&self) -> Arc<LearnerStateService> {
        LearningServices::learner_state(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    learner_state: Arc<LearnerStateService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            learner_state: app.learner_state(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn learner_state(&self) -> &LearnerStateService {
        &self.learner_state
    }

    /// Render the page at `address`, redirecting home when it names nothing.
    pub async fn open(&self, address: &str) -> Page {
        let navigation = resolve_address(address, &self.catalog);
        if let Err(err) = &navigation {
            tracing::info!(address, error = %err, "navigation redirected");
        }
        self.render_navigation(navigation).await
    }

    pub async fn render_route(&self, route: Route) -> Page {
        self.render_navigation(Ok(route)).await
    }

    /// Apply a lesson-page action and return the refreshed lesson view.
    ///
    /// # Errors
    ///
    /// Returns `ActionError` when the lesson does not exist or the change
    /// could not be saved.
    pub async fn apply(&self, action: LessonAction) -> Result<LessonVm, ActionError> {
        dispatch(&self.catalog, &self.learner_state, action).await
    }

    /// Render a navigation outcome from a fresh snapshot of learner state.
    pub async fn render_navigation(&self, navigation: Result<Route, NavigationError>) -> Page {
        let snapshot = self.learner_state.snapshot().await;
        build_page(&self.catalog, &snapshot, navigation)
    }
}
