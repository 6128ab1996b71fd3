//! Banner Component
//!
//! Full-height hero for the featured title.

use leptos::prelude::*;

use crate::config::CatalogConfig;
use crate::images::{background_image, make_image_path};
use crate::models::Movie;

/// Hero banner; clicking it advances the carousel
#[component]
pub fn Banner(
    movie: Movie,
    #[prop(into)] on_advance: Callback<()>,
) -> impl IntoView {
    let config = expect_context::<CatalogConfig>();
    let image = make_image_path(&config.image_base, movie.artwork().unwrap_or_default(), None);

    view! {
        <section
            class="banner"
            style=background_image(&image, true)
            on:click=move |_| on_advance.run(())
        >
            <h2 class="banner-title">{movie.title}</h2>
            <p class="banner-overview">{movie.overview}</p>
        </section>
    }
}
