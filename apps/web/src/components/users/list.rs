use super::UserCard;
use crate::app_lib::theme::Theme;
use leptos::prelude::*;
use user_directory::User;

/// Renders one card per user, or the empty state when there are none.
#[component]
pub fn UserList(#[prop(into)] users: Signal<Vec<User>>) -> impl IntoView {
    view! {
        <Show
            when=move || users.with(|list| !list.is_empty())
            fallback=|| view! {
                <div class="text-center py-12 bg-white dark:bg-gray-800 rounded-lg border border-dashed border-gray-300 dark:border-gray-700">
                    <span class="material-symbols-outlined text-4xl text-gray-400">"person_search"</span>
                    <h3 class="mt-2 text-sm font-medium text-gray-900 dark:text-white">"No users found"</h3>
                    <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">"Try a different name or email."</p>
                </div>
            }
        >
            <div class=Theme::GRID>
                <For
                    each=move || users.get()
                    key=|user| user.id
                    children=|user| view! { <UserCard user=user /> }
                />
            </div>
        </Show>
    }
}
