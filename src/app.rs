use std::sync::Arc;

use iced::{Element, Task, Theme};

use crate::adapters::{ReqwestImageFetcher, ReqwestSearchApiClient, SystemBrowserLinkOpener};
use crate::core::models::UserSettings;
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::core::services::SearchService;
use crate::global_constants::LOG_TAG_APP;

pub struct SearchApp {
    orchestrator: AppOrchestrator,
}

impl SearchApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("{} Initializing application", LOG_TAG_APP);

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("{} Failed to load settings: {}, using defaults", LOG_TAG_APP, e);
            UserSettings::default()
        });

        let request_timeout = settings.request_timeout();

        let search_service = Arc::new(SearchService::build(
            settings.query_template(),
            Arc::new(ReqwestSearchApiClient::new(request_timeout)),
            Arc::new(ReqwestImageFetcher::new(request_timeout)),
        ));

        search_service.subscribe(|items| {
            log::debug!("{} Result list now holds {} items", LOG_TAG_APP, items.len());
        });

        let orchestrator = AppOrchestrator::build(
            search_service,
            Arc::new(SystemBrowserLinkOpener::new()),
            settings.theme_mode.clone(),
        );

        (Self { orchestrator }, Task::none())
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view()
    }

    pub fn theme(&self) -> Theme {
        self.orchestrator.theme()
    }
}
