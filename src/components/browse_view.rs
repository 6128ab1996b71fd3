//! Browse View Component
//!
//! Banner plus carousel for one catalog list, with the nested detail route
//! rendered on top.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Outlet;

use crate::api::QueryKey;
use crate::components::{Banner, ErrorPanel, Loader, Slider};
use crate::config::SLIDE_DURATION_MS;
use crate::context::BrowseContext;
use crate::pager::Pager;
use crate::query::{use_catalog_query, QueryState};

#[component]
pub fn BrowseView(
    /// List to show; None renders the idle hint
    query_key: Signal<Option<QueryKey>>,
    detail_base: &'static str,
    back_base: &'static str,
    query_suffix: Signal<String>,
) -> impl IntoView {
    let state = use_catalog_query(move || query_key.get());
    let list = Memo::new(move |_| state.with(|s| s.list().cloned()));
    let pager = RwSignal::new(Pager::default());

    provide_context(BrowseContext {
        list: list.into(),
        detail_base,
        back_base,
        query_suffix,
    });

    // New list, start from the first page
    Effect::new(move |_| {
        list.track();
        pager.update(Pager::reset);
    });

    let advance = move |_: ()| {
        let tiles = list.with_untracked(|l| l.as_ref().map_or(0, |l| l.tiles().len()));
        if let Some(epoch) = pager.try_update(|p| p.advance(tiles)).flatten() {
            spawn_local(async move {
                TimeoutFuture::new(SLIDE_DURATION_MS).await;
                pager.try_update(|p| p.finish_leaving(epoch));
            });
        }
    };

    let body = move || match state.get() {
        QueryState::Idle => view! {
            <p class="browse-hint">"Search for a title to get started."</p>
        }.into_any(),
        QueryState::Loading => view! { <Loader /> }.into_any(),
        QueryState::Failed(message) => view! { <ErrorPanel message=message /> }.into_any(),
        QueryState::Ready(list) => match list.featured().cloned() {
            Some(featured) => view! {
                <Banner movie=featured on_advance=advance />
                <Slider pager=pager />
            }.into_any(),
            None => view! { <p class="browse-hint">"Nothing to show."</p> }.into_any(),
        },
    };

    view! {
        <div class="browse">
            {body}
            <Outlet />
        </div>
    }
}
