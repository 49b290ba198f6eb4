//! The dashboard page and owner of all its state.
//!
//! On mount it starts the single user fetch. The full set lives in a
//! `ViewState` signal and the search term in a string signal; the filtered set
//! is a memo over both, recomputed in full on every change.

use crate::{
    components::{AppShell, ErrorMessage, LoadingSpinner, SearchBar, UserList},
    features::users::client,
};
use leptos::{prelude::*, task::spawn_local};
use user_directory::{DirectoryConfig, ViewState};

#[component]
pub fn DirectoryPage() -> impl IntoView {
    let config = use_context::<DirectoryConfig>().unwrap_or_default();
    let (state, set_state) = signal(ViewState::default());
    let (search_term, set_search_term) = signal(String::new());

    spawn_local(async move {
        let result = client::list_users(&config).await;
        set_state.update(|state| state.settle(result));
    });

    let filtered = Memo::new(move |_| {
        state.with(|current| search_term.with(|term| current.filtered(term)))
    });
    let shown = move || filtered.with(Vec::len);
    let total = move || state.with(|current| current.users().len());

    view! {
        <AppShell>
            <div class="space-y-6">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Users"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Browse the directory and search by name or email."
                    </p>
                </div>

                {move || match state.get() {
                    ViewState::Loading => view! { <LoadingSpinner /> }.into_any(),
                    ViewState::Error(message) => {
                        view! { <ErrorMessage message=message /> }.into_any()
                    }
                    ViewState::Ready(_) => {
                        view! {
                            <SearchBar value=search_term set_value=set_search_term />
                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                "Showing " {shown} " of " {total} " users"
                            </p>
                            <UserList users=filtered />
                        }
                        .into_any()
                    }
                }}
            </div>
        </AppShell>
    }
}
