//! Slider Component
//!
//! Row of tiles for the current page. On advance the previous row slides out
//! left while the new one slides in from the right.

use leptos::prelude::*;

use crate::components::Tile;
use crate::context::BrowseContext;
use crate::models::Movie;
use crate::pager::Pager;

#[component]
pub fn Slider(pager: RwSignal<Pager>) -> impl IntoView {
    let ctx = expect_context::<BrowseContext>();

    // Titles on page `index` of the tile list (banner title excluded)
    let page_titles = move |index: usize| -> Vec<Movie> {
        ctx.list.with(|list| {
            list.as_ref()
                .map(|list| pager.with_untracked(|p| p.page(list.tiles(), index).to_vec()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="slider">
            {move || {
                let p = pager.get();
                p.previous().map(|previous| view! {
                    <SliderRow titles=page_titles(previous) class="slider-row leaving" />
                })
            }}
            {move || {
                let p = pager.get();
                let class = if p.is_leaving() { "slider-row entering" } else { "slider-row" };
                view! { <SliderRow titles=page_titles(p.index()) class=class /> }
            }}
        </div>
    }
}

#[component]
fn SliderRow(titles: Vec<Movie>, class: &'static str) -> impl IntoView {
    view! {
        <div class=class>
            <For
                each=move || titles.clone()
                key=|movie| movie.id
                children=move |movie| view! { <Tile movie=movie /> }
            />
        </div>
    }
}
