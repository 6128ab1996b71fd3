use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! { <div class="loader">"Loading..."</div> }
}
