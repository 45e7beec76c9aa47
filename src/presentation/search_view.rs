use iced::widget::{button, column, container, image, row, scrollable, text, text_input, Column};
use iced::{Alignment, ContentFit, Element, Length};
use reqwest::Url;
use uuid::Uuid;

use crate::core::models::{SearchError, SearchResultItem};
use crate::global_constants;
use crate::presentation::app_theme;

struct ResultRow {
    id: Uuid,
    name: String,
    link: Url,
    thumbnail: image::Handle,
}

impl ResultRow {
    fn from_item(item: &SearchResultItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            link: item.link.clone(),
            thumbnail: image::Handle::from_bytes(item.image.bytes.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum SearchStatus {
    Idle,
    Searching,
    Showing(usize),
    Failed(String),
}

pub struct SearchView {
    keyword: String,
    rows: Vec<ResultRow>,
    status: SearchStatus,
}

#[derive(Debug, Clone)]
pub enum SearchViewMessage {
    KeywordChanged(String),
    SubmitSearch,
    OpenResult(Uuid),
}

impl SearchView {
    pub fn build() -> Self {
        Self {
            keyword: String::new(),
            rows: Vec::new(),
            status: SearchStatus::Idle,
        }
    }

    pub fn update(&mut self, message: SearchViewMessage) {
        match message {
            SearchViewMessage::KeywordChanged(keyword) => {
                self.keyword = keyword;
            }
            SearchViewMessage::SubmitSearch => {
                log::debug!("[SEARCH_VIEW] Submit requested for {:?}", self.keyword);
            }
            SearchViewMessage::OpenResult(id) => {
                log::debug!("[SEARCH_VIEW] Result {} selected", id);
            }
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn mark_searching(&mut self) {
        self.status = SearchStatus::Searching;
    }

    pub fn show_results(&mut self, items: &[SearchResultItem]) {
        log::info!("[SEARCH_VIEW] Showing {} results", items.len());
        self.rows = items.iter().map(ResultRow::from_item).collect();
        self.status = SearchStatus::Showing(self.rows.len());
    }

    /// Keeps the rows from the last successful search on screen.
    pub fn show_failure(&mut self, error: &SearchError) {
        self.status = SearchStatus::Failed(error.to_string());
    }

    pub fn find_link(&self, id: Uuid) -> Option<&Url> {
        self.rows.iter().find(|row| row.id == id).map(|row| &row.link)
    }

    pub fn status_text(&self) -> String {
        match &self.status {
            SearchStatus::Idle => global_constants::STATUS_READY.to_string(),
            SearchStatus::Searching => global_constants::STATUS_SEARCHING.to_string(),
            SearchStatus::Showing(0) => "No results".to_string(),
            SearchStatus::Showing(1) => "1 result".to_string(),
            SearchStatus::Showing(count) => format!("{} results", count),
            SearchStatus::Failed(reason) => format!("Search failed: {}", reason),
        }
    }

    pub fn render_ui(&self) -> Element<'_, SearchViewMessage> {
        let keyword_input = text_input(global_constants::KEYWORD_PLACEHOLDER, &self.keyword)
            .on_input(SearchViewMessage::KeywordChanged)
            .on_submit(SearchViewMessage::SubmitSearch)
            .padding(10)
            .size(16)
            .width(Length::Fill);

        let status_line = text(self.status_text()).size(13);

        let result_rows = Column::with_children(self.rows.iter().map(Self::render_row))
            .spacing(6)
            .width(Length::Fill);

        let content = column![
            keyword_input,
            status_line,
            scrollable(result_rows).height(Length::Fill),
        ]
        .spacing(12)
        .padding(16)
        .width(Length::Fill);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn render_row(result_row: &ResultRow) -> Element<'_, SearchViewMessage> {
        let thumbnail = image(result_row.thumbnail.clone())
            .height(Length::Fixed(global_constants::RESULT_IMAGE_HEIGHT))
            .content_fit(ContentFit::Contain);

        let label = text(result_row.name.as_str()).size(16);

        button(row![thumbnail, label].spacing(12).align_y(Alignment::Center))
            .width(Length::Fill)
            .padding([6, 10])
            .style(app_theme::result_row_button_style)
            .on_press(SearchViewMessage::OpenResult(result_row.id))
            .into()
    }
}
