use crate::routes::DirectoryPage;
use leptos::prelude::*;
use user_directory::DirectoryConfig;

#[component]
pub fn App(config: DirectoryConfig) -> impl IntoView {
    provide_context(config);

    view! { <DirectoryPage /> }
}
