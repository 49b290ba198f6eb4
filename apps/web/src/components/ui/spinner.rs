use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-3 py-16">
            <div
                class="inline-block h-10 w-10 animate-spin rounded-full border-4 border-blue-200 border-t-blue-600"
                role="status"
                aria-live="polite"
                aria-label="Loading"
            ></div>
            <p class="text-sm text-gray-500 dark:text-gray-400">"Loading users..."</p>
        </div>
    }
}
