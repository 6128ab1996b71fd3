//! Search Page
//!
//! Movie search driven by the `keyword` query parameter.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::api::QueryKey;
use crate::components::BrowseView;

/// Query string for a keyword: `?keyword=…`
pub fn keyword_query(keyword: &str) -> String {
    format!("?keyword={}", utf8_percent_encode(keyword, NON_ALPHANUMERIC))
}

/// Route for a search
pub fn search_href(keyword: &str) -> String {
    format!("/search{}", keyword_query(keyword))
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let query = use_query_map();
    let keyword = Memo::new(move |_| {
        query.with(|q| {
            q.get("keyword")
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
        })
    });

    let query_key = Signal::derive(move || keyword.get().map(QueryKey::Search));
    let query_suffix = Signal::derive(move || {
        keyword.get().map(|k| keyword_query(&k)).unwrap_or_default()
    });

    view! {
        <BrowseView
            query_key=query_key
            detail_base="/search"
            back_base="/search"
            query_suffix=query_suffix
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_href_encodes() {
        assert_eq!(search_href("dune"), "/search?keyword=dune");
        assert_eq!(search_href("la la land"), "/search?keyword=la%20la%20land");
    }
}
