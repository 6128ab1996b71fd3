//! Header Component
//!
//! Brand, navigation links and the search box.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};

use crate::pages::search_href;

/// Keyword to show in the search box for `path`, taken from `?keyword=` on search routes
fn routed_keyword(path: &str, keyword: Option<String>) -> Option<String> {
    if path == "/search" || path.starts_with("/search/") {
        keyword.map(|k| k.trim().to_string())
    } else {
        None
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let query = use_query_map();
    let navigate = use_navigate();
    let (keyword, set_keyword) = signal(String::new());

    // Keep the box in sync when a search route is opened directly
    Effect::new(move |_| {
        let path = location.pathname.get();
        let routed = query.with(|q| q.get("keyword").map(|k| k.to_string()));
        if let Some(routed) = routed_keyword(&path, routed) {
            set_keyword.set(routed);
        }
    });

    let is_home = move || {
        let path = location.pathname.get();
        path == "/" || path.starts_with("/movies")
    };
    let is_tv = move || location.pathname.get().starts_with("/tv");

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let keyword = keyword.get_untracked();
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return;
        }
        log::debug!("[Header] Search for {:?}", keyword);
        navigate(&search_href(keyword), Default::default());
    };

    view! {
        <nav class="header">
            <div class="header-col">
                <a href="/" class="logo">"NOW PLAYING"</a>
                <ul class="header-items">
                    <li class=move || if is_home() { "header-item active" } else { "header-item" }>
                        <a href="/">"Home"</a>
                    </li>
                    <li class=move || if is_tv() { "header-item active" } else { "header-item" }>
                        <a href="/tv">"TV Shows"</a>
                    </li>
                </ul>
            </div>
            <div class="header-col">
                <form class="search" on:submit=on_search>
                    <input
                        type="text"
                        placeholder="Search for movie..."
                        prop:value=keyword
                        on:input=move |ev| set_keyword.set(event_target_value(&ev))
                    />
                </form>
            </div>
        </nav>
    }
}
