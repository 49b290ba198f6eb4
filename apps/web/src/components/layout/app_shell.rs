//! Page chrome shared by the dashboard: a header bar and the main content
//! container.

use leptos::prelude::*;

/// Wraps page content with the header and a centered container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 bg-white dark:border-gray-700 dark:bg-gray-900">
                <div class="max-w-screen-xl flex items-center mx-auto p-4 space-x-3">
                    <span class="material-symbols-outlined text-blue-600 dark:text-blue-400">
                        "groups"
                    </span>
                    <span class="font-semibold whitespace-nowrap dark:text-white">
                        "User Directory"
                    </span>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
        </div>
    }
}
