//! Top bar with the product link and the account dropdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the logout flow: the account menu only reports where to go next, the
//! header ends the server session, clears auth state and navigates.

use leptos::prelude::*;

use crate::components::account_menu::AccountMenu;
use crate::state::auth::AuthState;
use crate::util::i18n::use_messages;
use crate::util::routes::LANDING_PATH;

/// End the session, forget the user and leave for `redirect_to`.
pub fn logout_user(auth: RwSignal<AuthState>, redirect_to: String) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.update(AuthState::sign_out);
            log::info!("signed out, redirecting to {redirect_to}");
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href(&redirect_to);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, redirect_to);
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let messages = use_messages();
    let menu_open = RwSignal::new(false);

    let user = Signal::derive(move || auth.with(|a| a.user.clone()));
    let on_logout = Callback::new(move |redirect_to: String| {
        menu_open.set(false);
        logout_user(auth, redirect_to);
    });

    view! {
        <header class="header">
            <a class="header__logo" href=LANDING_PATH>"Falco"</a>
            <span class="header__spacer"></span>
            <div class="header__account">
                <button
                    class="btn header__account-toggle"
                    aria-haspopup="true"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || messages.with(|m| m.format("Header.account"))}
                </button>
                <Show when=move || menu_open.get()>
                    <div class="header__account-dropdown">
                        <AccountMenu user=user logout_user=on_logout/>
                    </div>
                </Show>
            </div>
        </header>
    }
}
