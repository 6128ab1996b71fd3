//! Now Playing App
//!
//! Router, shared header and the browse routes.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{Header, MovieDetail};
use crate::config::CatalogConfig;
use crate::pages::{HomePage, NotFound, SearchPage, TvPage};
use crate::store::CatalogState;

#[component]
pub fn App(config: CatalogConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(config);
    provide_context(Store::new(CatalogState::default()));

    view! {
        <Router>
            <Header />
            <main class="page">
                <Routes fallback=|| view! { <NotFound /> }>
                    <ParentRoute path=path!("/tv") view=TvPage>
                        <Route path=path!(":id") view=MovieDetail />
                        <Route path=path!("") view=|| () />
                    </ParentRoute>
                    <ParentRoute path=path!("/search") view=SearchPage>
                        <Route path=path!(":id") view=MovieDetail />
                        <Route path=path!("") view=|| () />
                    </ParentRoute>
                    <ParentRoute path=path!("") view=HomePage>
                        <Route path=path!("movies/:id") view=MovieDetail />
                        <Route path=path!("") view=|| () />
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}
