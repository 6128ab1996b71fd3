//! Tile Component
//!
//! One clickable carousel entry.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::CatalogConfig;
use crate::context::BrowseContext;
use crate::images::{background_image, make_image_path};
use crate::models::Movie;

#[component]
pub fn Tile(movie: Movie) -> impl IntoView {
    let config = expect_context::<CatalogConfig>();
    let ctx = expect_context::<BrowseContext>();
    let navigate = use_navigate();

    let id = movie.id;
    let image = make_image_path(&config.image_base, movie.artwork().unwrap_or_default(), Some("w500"));

    view! {
        <div
            class="tile"
            style=background_image(&image, false)
            on:click=move |_| navigate(&ctx.detail_href(id), Default::default())
        >
            <div class="tile-info">
                <h4>{movie.title}</h4>
            </div>
        </div>
    }
}
