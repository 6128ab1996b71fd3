//! Error Panel Component
//!
//! Shown in place of a view whose list failed to load.

use leptos::prelude::*;

/// Error message plus the logger's recent lines for diagnosis
#[component]
pub fn ErrorPanel(#[prop(into)] message: String) -> impl IntoView {
    let recent = console_logger::recent_lines();
    let log_view = (!recent.is_empty()).then(|| {
        view! {
            <details class="error-log">
                <summary>"Recent log"</summary>
                <pre>{recent.join("\n")}</pre>
            </details>
        }
    });

    view! {
        <div class="error-panel">
            <h3>"Could not load titles"</h3>
            <p class="error-message">{message}</p>
            {log_view}
        </div>
    }
}
