//! Card for a single user record: an initials badge, the display name, and
//! four detail rows.

use super::UserDetailItem;
use crate::app_lib::theme::Theme;
use leptos::prelude::*;
use user_directory::{
    User,
    display::{initials, mailto_href, website_href, website_label},
};

#[component]
pub fn UserCard(user: User) -> impl IntoView {
    let badge = initials(&user.name);
    let email_href = mailto_href(&user.email);
    let website_target = website_href(&user.website);
    let website_text = website_label(&user.website).to_string();

    view! {
        <article class=Theme::CARD>
            <div class="flex items-center gap-4">
                <div class=Theme::AVATAR aria-hidden="true">{badge}</div>
                <h2 class="truncate text-lg font-medium text-gray-900 dark:text-white">
                    {user.name}
                </h2>
            </div>
            <div class="space-y-2">
                <UserDetailItem icon="person" label="Username" value=user.username />
                <UserDetailItem icon="mail" label="Email" value=user.email href=email_href />
                <UserDetailItem icon="apartment" label="Company" value=user.company.name />
                <UserDetailItem
                    icon="language"
                    label="Website"
                    value=website_text
                    href=website_target
                />
            </div>
        </article>
    }
}
