use leptos::prelude::*;

/// Controlled search input. Every keystroke writes the term straight through;
/// there is no debounce.
#[component]
pub fn SearchBar(value: ReadSignal<String>, set_value: WriteSignal<String>) -> impl IntoView {
    view! {
        <div class="relative">
            <span class="material-symbols-outlined pointer-events-none absolute inset-y-0 left-0 flex items-center pl-3 text-gray-400">
                "search"
            </span>
            <input
                type="search"
                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 pl-10 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500"
                placeholder="Search by name or email..."
                aria-label="Search users by name or email"
                prop:value=move || value.get()
                on:input=move |event| set_value.set(event_target_value(&event))
            />
        </div>
    }
}
