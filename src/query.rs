//! Catalog Queries
//!
//! One cached fetch per view, keyed by `QueryKey`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, QueryKey};
use crate::config::CatalogConfig;
use crate::models::MovieList;
use crate::store::{store_cached, store_insert, use_catalog_store, CatalogStore};

/// Load state of a view's list
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState {
    /// No key yet (empty search)
    Idle,
    Loading,
    Ready(MovieList),
    Failed(String),
}

impl QueryState {
    pub fn list(&self) -> Option<&MovieList> {
        match self {
            QueryState::Ready(list) => Some(list),
            _ => None,
        }
    }
}

/// Ready state for `key` if the store already holds its list
fn cached_state(store: &CatalogStore, key: &QueryKey) -> Option<QueryState> {
    store_cached(store, key).map(QueryState::Ready)
}

/// Whether a response for `key` is still wanted
fn is_current(requested: Option<&QueryKey>, key: &QueryKey) -> bool {
    requested == Some(key)
}

/// Fetch the list for the current key, reusing the store's cached copy.
/// Re-runs when `key` changes; a response for a key that is no longer
/// requested is dropped.
pub fn use_catalog_query(
    key: impl Fn() -> Option<QueryKey> + 'static,
) -> ReadSignal<QueryState> {
    let config = expect_context::<CatalogConfig>();
    let store = use_catalog_store();
    let (state, set_state) = signal(QueryState::Loading);
    let requested = RwSignal::new(None::<QueryKey>);

    Effect::new(move |_| {
        let Some(key) = key() else {
            requested.set(None);
            set_state.set(QueryState::Idle);
            return;
        };
        requested.set(Some(key.clone()));

        if let Some(cached) = cached_state(&store, &key) {
            log::debug!("[Query] Cache hit for {}", key);
            set_state.set(cached);
            return;
        }

        set_state.set(QueryState::Loading);
        let config = config.clone();
        spawn_local(async move {
            let result = api::fetch_list(&config, &key).await;
            if !is_current(requested.try_get_untracked().flatten().as_ref(), &key) {
                log::debug!("[Query] Dropping stale response for {}", key);
                return;
            }
            match result {
                Ok(list) => {
                    log::info!("[Query] Loaded {} titles for {}", list.results.len(), key);
                    store_insert(&store, key, list.clone());
                    set_state.set(QueryState::Ready(list));
                }
                Err(e) => {
                    log::warn!("[Query] Failed to load {}: {}", key, e);
                    set_state.set(QueryState::Failed(e.to_string()));
                }
            }
        });
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CatalogState;

    #[test]
    fn test_list_only_when_ready() {
        assert!(QueryState::Loading.list().is_none());
        assert!(QueryState::Failed("x".into()).list().is_none());
        let ready = QueryState::Ready(MovieList::default());
        assert_eq!(ready.list(), Some(&MovieList::default()));
    }

    #[test]
    fn test_stale_response_is_not_current() {
        let dune = QueryKey::Search("dune".to_string());
        let alien = QueryKey::Search("alien".to_string());
        assert!(is_current(Some(&dune), &dune));
        assert!(!is_current(Some(&alien), &dune));
        // keyword cleared while the request was in flight
        assert!(!is_current(None, &dune));
        assert!(!is_current(Some(&QueryKey::PopularTv), &QueryKey::NowPlaying));
    }

    #[test]
    fn test_cache_hit_is_ready_without_fetch() {
        let owner = Owner::new();
        owner.with(|| {
            let store = CatalogStore::new(CatalogState::default());
            assert_eq!(cached_state(&store, &QueryKey::NowPlaying), None);

            let list = MovieList { page: 1, total_pages: 3, ..MovieList::default() };
            store_insert(&store, QueryKey::NowPlaying, list.clone());
            assert_eq!(
                cached_state(&store, &QueryKey::NowPlaying),
                Some(QueryState::Ready(list))
            );
            assert_eq!(cached_state(&store, &QueryKey::PopularTv), None);
        });
    }
}
