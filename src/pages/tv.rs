use leptos::prelude::*;

use crate::api::QueryKey;
use crate::components::BrowseView;

/// Popular TV shows; detail overlay at `/tv/:id`
#[component]
pub fn TvPage() -> impl IntoView {
    view! {
        <BrowseView
            query_key=Signal::stored(Some(QueryKey::PopularTv))
            detail_base="/tv"
            back_base="/tv"
            query_suffix=Signal::stored(String::new())
        />
    }
}
