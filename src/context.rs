//! Browse Context
//!
//! Shared state a browse view provides to its nested detail route.

use leptos::prelude::*;

use crate::models::{Movie, MovieList};

/// Provided by each browse page via the Leptos Context API
#[derive(Clone, Copy)]
pub struct BrowseContext {
    /// Loaded list (None while loading or failed)
    pub list: Signal<Option<MovieList>>,
    /// Route prefix of detail links, e.g. `/movies`
    pub detail_base: &'static str,
    /// Route the overlay returns to, e.g. `/`
    pub back_base: &'static str,
    /// Query string carried on detail and back links (`""` or `?keyword=…`)
    pub query_suffix: Signal<String>,
}

impl BrowseContext {
    pub fn detail_href(&self, id: u64) -> String {
        detail_path(self.detail_base, id, &self.query_suffix.get_untracked())
    }

    pub fn back_href(&self) -> String {
        format!("{}{}", self.back_base, self.query_suffix.get_untracked())
    }

    /// Look up a title in the loaded list
    pub fn find(&self, id: u64) -> Option<Movie> {
        self.list
            .with(|list| list.as_ref().and_then(|list| list.find(id).cloned()))
    }
}

pub fn detail_path(base: &str, id: u64, query_suffix: &str) -> String {
    format!("{}/{}{}", base.trim_end_matches('/'), id, query_suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_path() {
        assert_eq!(detail_path("/movies", 42, ""), "/movies/42");
        assert_eq!(detail_path("/search/", 7, "?keyword=dune"), "/search/7?keyword=dune");
    }
}
