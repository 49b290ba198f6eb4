use crate::app_lib::theme::Theme;
use leptos::prelude::*;

/// One labeled field on a user card. With `href` the value renders as a link
/// that opens in a new browsing context without leaking the opener or referrer.
#[component]
pub fn UserDetailItem(
    icon: &'static str,
    label: &'static str,
    #[prop(into)] value: String,
    #[prop(optional, into)] href: Option<String>,
) -> impl IntoView {
    let content = match href {
        Some(href) => view! {
            <a href=href target="_blank" rel="noopener noreferrer" class=Theme::LINK>
                {value}
            </a>
        }
        .into_any(),
        None => view! {
            <span class="truncate text-gray-900 dark:text-white">{value}</span>
        }
        .into_any(),
    };

    view! {
        <div class="flex items-center gap-2 text-sm">
            <span class=Theme::ICON_SMALL>{icon}</span>
            <span class="w-20 shrink-0 text-gray-500 dark:text-gray-400">{label}</span>
            {content}
        </div>
    }
}
