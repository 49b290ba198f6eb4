//! Error banner for a failed user fetch. Messages must be safe to render; they
//! come from `FetchError`'s `Display` output.

use leptos::prelude::*;

/// Renders the fetch failure. The refresh hint is copy only; reloading the
/// page is the sole way to retry.
#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div
            class="flex items-start gap-3 rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200"
            role="alert"
        >
            <span class="material-symbols-outlined text-base">"error"</span>
            <div class="space-y-1">
                <p class="font-medium">"Error loading users"</p>
                <p>{message}</p>
                <p class="text-red-600/80 dark:text-red-300/80">
                    "Please try refreshing the page."
                </p>
            </div>
        </div>
    }
}
