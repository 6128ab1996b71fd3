//! Global Catalog Store
//!
//! Uses Leptos reactive_stores; fetched lists live here for the lifetime of the page.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::QueryKey;
use crate::models::MovieList;

/// Fetched lists by query key
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    pub lists: HashMap<QueryKey, MovieList>,
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Cached list for `key`, without subscribing
pub fn store_cached(store: &CatalogStore, key: &QueryKey) -> Option<MovieList> {
    store.lists().with_untracked(|lists| lists.get(key).cloned())
}

/// Insert or replace the list for `key`
pub fn store_insert(store: &CatalogStore, key: QueryKey, list: MovieList) {
    store.lists().write().insert(key, list);
}
