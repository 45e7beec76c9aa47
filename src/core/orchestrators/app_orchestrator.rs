use std::sync::Arc;

use iced::{Element, Task, Theme};
use uuid::Uuid;

use crate::core::interfaces::adapters::LinkOpener;
use crate::core::models::ThemeMode;
use crate::core::services::{SearchOutcome, SearchService};
use crate::presentation::app_theme;
use crate::presentation::{SearchView, SearchViewMessage};

pub struct AppOrchestrator {
    search_service: Arc<SearchService>,
    link_opener: Arc<dyn LinkOpener>,
    search_view: SearchView,
    theme_mode: ThemeMode,
}

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    SearchView(SearchViewMessage),
    SearchFinished(SearchOutcome),
}

impl AppOrchestrator {
    pub fn build(
        search_service: Arc<SearchService>,
        link_opener: Arc<dyn LinkOpener>,
        theme_mode: ThemeMode,
    ) -> Self {
        Self {
            search_service,
            link_opener,
            search_view: SearchView::build(),
            theme_mode,
        }
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        match message {
            OrchestratorMessage::SearchView(SearchViewMessage::SubmitSearch) => {
                return self.handle_submit_search();
            }
            OrchestratorMessage::SearchView(SearchViewMessage::OpenResult(id)) => {
                self.handle_open_result(id);
            }
            OrchestratorMessage::SearchView(view_message) => {
                self.search_view.update(view_message);
            }
            OrchestratorMessage::SearchFinished(outcome) => {
                self.handle_search_finished(outcome);
            }
        }

        Task::none()
    }

    fn handle_submit_search(&mut self) -> Task<OrchestratorMessage> {
        let keyword = self.search_view.keyword().to_string();
        log::info!("[ORCHESTRATOR] Starting search for {:?}", keyword);

        self.search_view.mark_searching();

        let search_service = Arc::clone(&self.search_service);
        Task::perform(
            async move { search_service.search(&keyword).await },
            OrchestratorMessage::SearchFinished,
        )
    }

    fn handle_search_finished(&mut self, outcome: SearchOutcome) {
        match outcome {
            Ok(report) => {
                self.search_view.show_results(&report.items);
            }
            Err(error) if error.is_superseded() => {
                log::debug!("[ORCHESTRATOR] Ignoring stale completion: {}", error);
            }
            Err(error) => {
                log::error!("[ORCHESTRATOR] Search failed: {}", error);
                self.search_view.show_failure(&error);
            }
        }
    }

    fn handle_open_result(&self, id: Uuid) {
        let Some(link) = self.search_view.find_link(id) else {
            log::warn!("[ORCHESTRATOR] No result with id {}", id);
            return;
        };

        if let Err(error) = self.link_opener.open_link(link) {
            log::error!("[ORCHESTRATOR] Failed to open {}: {:#}", link, error);
        }
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.search_view
            .render_ui()
            .map(OrchestratorMessage::SearchView)
    }

    pub fn theme(&self) -> Theme {
        app_theme::get_theme(&self.theme_mode)
    }
}
