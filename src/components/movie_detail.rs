//! Movie Detail Component
//!
//! Overlay for the title named by the `:id` route parameter. Rendered through
//! the browse view's `Outlet`.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::Loader;
use crate::config::CatalogConfig;
use crate::context::BrowseContext;
use crate::images::{background_image, make_image_path};

#[component]
pub fn MovieDetail() -> impl IntoView {
    let ctx = expect_context::<BrowseContext>();
    let config = expect_context::<CatalogConfig>();
    let params = use_params_map();
    let navigate = use_navigate();

    let selected_id = move || {
        params.with(|p| p.get("id").and_then(|id| id.parse::<u64>().ok()))
    };

    let close = move |_| navigate(&ctx.back_href(), Default::default());

    let card = move || {
        let loaded = ctx.list.with(Option::is_some);
        let movie = selected_id().and_then(|id| ctx.find(id));
        match (loaded, movie) {
            (false, _) => view! { <Loader /> }.into_any(),
            (true, None) => view! { <p class="detail-missing">"Title not found"</p> }.into_any(),
            (true, Some(movie)) => {
                let image = make_image_path(&config.image_base, movie.artwork().unwrap_or_default(), Some("w780"));
                view! {
                    <div class="detail-cover" style=background_image(&image, false)></div>
                    <h3 class="detail-title">{movie.title}</h3>
                    <p class="detail-rating">{format!("★ {:.1}", movie.vote_average)}</p>
                    <p class="detail-overview">{movie.overview}</p>
                }.into_any()
            }
        }
    };

    view! {
        <div class="detail-overlay" on:click=close></div>
        <div class="detail-card">{card}</div>
    }
}
