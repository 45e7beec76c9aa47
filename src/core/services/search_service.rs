use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::core::interfaces::adapters::{ImageFetcher, SearchApiClient};
use crate::core::models::{
    ItemImage, ItemMaterializationError, SearchError, SearchQueryTemplate, SearchResultItem,
    ValidatedEntry,
};
use crate::core::services::result_decoder::ResultDecoder;
use crate::core::services::result_list::{ObserverId, ResultList, ResultSnapshot};
use crate::global_constants::LOG_TAG_SEARCH;

pub type SearchOutcome = Result<SearchReport, SearchError>;

#[derive(Debug, Clone)]
pub struct SearchReport {
    pub generation: u64,
    pub items: ResultSnapshot,
    pub dropped_items: Vec<ItemMaterializationError>,
}

/// Generation handed out to one `search` call. Once a newer search (or an
/// explicit cancel) bumps the counter, this ticket is stale.
#[derive(Debug, Clone, Copy)]
struct SearchTicket {
    generation: u64,
}

pub struct SearchService {
    query_template: SearchQueryTemplate,
    search_api_client: Arc<dyn SearchApiClient>,
    image_fetcher: Arc<dyn ImageFetcher>,
    result_list: ResultList,
    latest_generation: AtomicU64,
    publication: Mutex<()>,
}

impl SearchService {
    pub fn build(
        query_template: SearchQueryTemplate,
        search_api_client: Arc<dyn SearchApiClient>,
        image_fetcher: Arc<dyn ImageFetcher>,
    ) -> Self {
        log::debug!(
            "{} building search service for {}",
            LOG_TAG_SEARCH,
            query_template.endpoint
        );

        Self {
            query_template,
            search_api_client,
            image_fetcher,
            result_list: ResultList::new(),
            latest_generation: AtomicU64::new(0),
            publication: Mutex::new(()),
        }
    }

    pub fn results(&self) -> ResultSnapshot {
        self.result_list.snapshot()
    }

    pub fn subscribe<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&[SearchResultItem]) + Send + Sync + 'static,
    {
        self.result_list.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.result_list.unsubscribe(id)
    }

    /// Supersedes whatever search is in flight; its results will not be published.
    pub fn cancel(&self) {
        let generation = self.latest_generation.fetch_add(1, Ordering::SeqCst) + 1;
        log::info!(
            "{} in-flight search cancelled (now at #{})",
            LOG_TAG_SEARCH,
            generation
        );
    }

    /// Runs one full search cycle. On success the published list is replaced
    /// and observers are notified; on any failure it is left as it was.
    pub async fn search(&self, keyword: &str) -> SearchOutcome {
        let ticket = self.begin_search();
        log::info!(
            "{} #{} searching for {:?}",
            LOG_TAG_SEARCH,
            ticket.generation,
            keyword
        );

        let outcome = self.run_search(ticket, keyword).await;

        match &outcome {
            Ok(report) => log::info!(
                "{} #{} published {} items ({} dropped)",
                LOG_TAG_SEARCH,
                report.generation,
                report.items.len(),
                report.dropped_items.len()
            ),
            Err(error) if error.is_superseded() => {
                log::info!("{} {}", LOG_TAG_SEARCH, error)
            }
            Err(error) => log::warn!(
                "{} #{} search aborted, keeping previous results: {}",
                LOG_TAG_SEARCH,
                ticket.generation,
                error
            ),
        }

        outcome
    }

    fn begin_search(&self) -> SearchTicket {
        SearchTicket {
            generation: self.latest_generation.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    fn ensure_current(&self, ticket: SearchTicket) -> Result<(), SearchError> {
        if self.latest_generation.load(Ordering::SeqCst) == ticket.generation {
            Ok(())
        } else {
            Err(SearchError::Superseded(ticket.generation))
        }
    }

    async fn run_search(&self, ticket: SearchTicket, keyword: &str) -> SearchOutcome {
        let request_url = self.query_template.build_url(keyword)?;
        log::debug!("{} #{} GET {}", LOG_TAG_SEARCH, ticket.generation, request_url);

        let fetched = self
            .search_api_client
            .fetch_search_payload(&request_url)
            .await;

        // A stale search reports Superseded whether or not its request succeeded.
        self.ensure_current(ticket)?;
        let payload =
            fetched.map_err(|error| SearchError::Transport(format!("{:#}", error)))?;

        let entries = ResultDecoder::decode(&payload)?;

        let mut items = Vec::with_capacity(entries.len());
        let mut dropped_items = Vec::new();

        for entry in entries {
            self.ensure_current(ticket)?;

            match self.materialize_entry(entry).await {
                Ok(item) => items.push(item),
                Err(error) => {
                    log::warn!("{} dropping entry: {}", LOG_TAG_SEARCH, error);
                    dropped_items.push(error);
                }
            }
        }

        let published = self.publish(ticket, items)?;

        Ok(SearchReport {
            generation: ticket.generation,
            items: published,
            dropped_items,
        })
    }

    async fn materialize_entry(
        &self,
        entry: ValidatedEntry,
    ) -> Result<SearchResultItem, ItemMaterializationError> {
        let bytes = self
            .image_fetcher
            .fetch_image_bytes(&entry.image_url)
            .await
            .map_err(|error| ItemMaterializationError::ImageFetch {
                url: entry.image_url.to_string(),
                reason: format!("{:#}", error),
            })?;

        let image = ItemImage::decode(&entry.image_url, bytes)?;

        Ok(SearchResultItem::build(entry, image))
    }

    fn publish(
        &self,
        ticket: SearchTicket,
        items: Vec<SearchResultItem>,
    ) -> Result<ResultSnapshot, SearchError> {
        let _publication = self
            .publication
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        self.ensure_current(ticket)?;

        Ok(self.result_list.replace(items))
    }
}
