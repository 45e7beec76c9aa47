use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::core::models::SearchResultItem;

pub type ResultSnapshot = Arc<Vec<SearchResultItem>>;

type ResultObserver = Arc<dyn Fn(&[SearchResultItem]) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// The published search results. Replaced whole, never merged.
pub struct ResultList {
    items: RwLock<ResultSnapshot>,
    observers: Mutex<Vec<(ObserverId, ResultObserver)>>,
    next_observer_id: AtomicU64,
}

impl Default for ResultList {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultList {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Arc::new(Vec::new())),
            observers: Mutex::new(Vec::new()),
            next_observer_id: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> ResultSnapshot {
        Arc::clone(&self.items.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn subscribe<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&[SearchResultItem]) + Send + Sync + 'static,
    {
        let id = ObserverId(self.next_observer_id.fetch_add(1, Ordering::Relaxed));
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(observer)));

        log::debug!("[RESULT_LIST] observer {:?} subscribed", id);
        id
    }

    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut observers = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = observers.len();
        observers.retain(|(observer_id, _)| *observer_id != id);

        let removed = observers.len() != before;
        log::debug!("[RESULT_LIST] observer {:?} unsubscribed: {}", id, removed);
        removed
    }

    /// Swaps in the new list, then notifies every observer once with it.
    ///
    /// Callers serialize replacements; observers run without any lock held so
    /// they may read the list or (un)subscribe from inside the callback.
    pub(crate) fn replace(&self, items: Vec<SearchResultItem>) -> ResultSnapshot {
        let snapshot = Arc::new(items);
        *self.items.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&snapshot);

        let observers: Vec<ResultObserver> = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        log::info!(
            "[RESULT_LIST] published {} items to {} observers",
            snapshot.len(),
            observers.len()
        );

        for observer in observers {
            observer(&snapshot);
        }

        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{encode_test_png, ItemImage, RawApiItem, ValidatedEntry};
    use reqwest::Url;

    fn build_item(name: &str) -> SearchResultItem {
        let entry = ValidatedEntry::from_raw(RawApiItem {
            name: Some(name.to_string()),
            url: Some(format!("https://x/{}", name)),
            image: Some(format!("https://x/{}.png", name)),
        })
        .unwrap();
        let image_url = Url::parse("https://x/a.png").unwrap();
        let image = ItemImage::decode(&image_url, encode_test_png(1, 1)).unwrap();
        SearchResultItem::build(entry, image)
    }

    fn names(items: &[SearchResultItem]) -> Vec<String> {
        items.iter().map(|item| item.name.clone()).collect()
    }

    #[test]
    fn test_new_list_is_empty() {
        assert!(ResultList::new().snapshot().is_empty());
    }

    #[test]
    fn test_replace_discards_previous_contents() {
        let list = ResultList::new();

        list.replace(vec![build_item("a"), build_item("b")]);
        list.replace(vec![build_item("c")]);

        assert_eq!(names(&list.snapshot()), vec!["c"]);
    }

    #[test]
    fn test_earlier_snapshot_is_unaffected_by_replace() {
        let list = ResultList::new();
        list.replace(vec![build_item("a")]);
        let earlier = list.snapshot();

        list.replace(vec![]);

        assert_eq!(names(&earlier), vec!["a"]);
        assert!(list.snapshot().is_empty());
    }

    #[test]
    fn test_observer_receives_each_replacement_once() {
        let list = ResultList::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        list.subscribe(move |items| seen_clone.lock().unwrap().push(names(items)));

        list.replace(vec![build_item("a"), build_item("b")]);
        list.replace(vec![]);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], vec!["a", "b"]);
        assert!(seen[1].is_empty());
    }

    #[test]
    fn test_unsubscribed_observer_is_not_called() {
        let list = ResultList::new();
        let calls = Arc::new(AtomicU64::new(0));
        let calls_clone = Arc::clone(&calls);
        let id = list.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(list.unsubscribe(id));
        assert!(!list.unsubscribe(id));
        list.replace(vec![build_item("a")]);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_observer_sees_the_complete_list_when_reading_back() {
        let list = Arc::new(ResultList::new());
        let list_clone = Arc::clone(&list);
        let read_back = Arc::new(Mutex::new(Vec::new()));
        let read_back_clone = Arc::clone(&read_back);
        list.subscribe(move |_| {
            *read_back_clone.lock().unwrap() = names(&list_clone.snapshot());
        });

        list.replace(vec![build_item("a"), build_item("b"), build_item("c")]);

        assert_eq!(*read_back.lock().unwrap(), vec!["a", "b", "c"]);
    }
}
