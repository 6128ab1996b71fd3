use leptos::prelude::*;

use crate::api::QueryKey;
use crate::components::BrowseView;

/// Now-playing movies; detail overlay at `/movies/:id`
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <BrowseView
            query_key=Signal::stored(Some(QueryKey::NowPlaying))
            detail_base="/movies"
            back_base="/"
            query_suffix=Signal::stored(String::new())
        />
    }
}
