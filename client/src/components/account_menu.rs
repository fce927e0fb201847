//! Account dropdown with the user's identity and session actions.
//!
//! DESIGN
//! ======
//! `account_view` reduces the user to exactly what is displayed so the staff
//! and missing-user rules are checked without rendering.

#[cfg(test)]
#[path = "account_menu_test.rs"]
mod account_menu_test;

use leptos::prelude::*;

use crate::components::loader::Loader;
use crate::net::types::User;
use crate::util::format::capitalize;
use crate::util::i18n::use_messages;
use crate::util::routes::{ADMIN_URL, DOCS_URL, LANDING_PATH};

/// Display model of a signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountView {
    pub full_name: String,
    pub email: String,
    pub show_admin_link: bool,
}

/// `None` while the user is unknown.
pub fn account_view(user: Option<&User>) -> Option<AccountView> {
    user.map(|user| AccountView {
        full_name: format!(
            "{} {}",
            capitalize(user.first_name.as_deref()),
            capitalize(user.last_name.as_deref())
        ),
        email: user.email_address.to_lowercase(),
        show_admin_link: user.is_staff,
    })
}

/// Invoke `logout_user` with the post-logout destination.
pub fn request_logout(logout_user: impl FnOnce(String)) {
    logout_user(LANDING_PATH.to_owned());
}

/// Account menu body. Shows a loader until the user is known.
#[component]
pub fn AccountMenu(#[prop(into)] user: Signal<Option<User>>, logout_user: Callback<String>) -> impl IntoView {
    let messages = use_messages();
    let text = move |id: &'static str| move || messages.with(|m| m.format(id));

    view! {
        <div class="account-menu">
            {move || match user.with(|u| account_view(u.as_ref())) {
                None => view! { <Loader min_height="200px"/> }.into_any(),
                Some(account) => view! {
                    <div class="account-menu__infos">
                        <span class="account-menu__name">{account.full_name}</span>
                        <span class="account-menu__email">{account.email}</span>
                    </div>
                    <ul class="account-menu__actions">
                        <li class="account-menu__action">
                            <a href=DOCS_URL target="_blank" rel="noopener noreferrer">
                                {text("Header.see_the_docs")}
                            </a>
                        </li>
                        <Show when=move || account.show_admin_link>
                            <li class="account-menu__action">
                                <a href=ADMIN_URL target="_blank" rel="noopener noreferrer">
                                    {text("Header.go_to_admin")}
                                </a>
                            </li>
                        </Show>
                        <li class="account-menu__action">
                            <button
                                class="account-menu__logout"
                                on:click=move |_| request_logout(|to| logout_user.run(to))
                            >
                                {text("Header.logout_link")}
                            </button>
                        </li>
                    </ul>
                }
                .into_any(),
            }}
        </div>
    }
}
