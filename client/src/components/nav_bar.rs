//! Sticky site navigation with desktop menus and a collapsible mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `ShellState` for the menu flag and the login/logout choice. Login
//! and logout are delegated to the page shell through callbacks so the
//! shell stays the only writer of the session.

use leptos::prelude::*;

use crate::routes::{COMPANY_LINKS, NavLink, POLICY_LINKS, SERVICE_LINKS, SitePage};
use crate::state::shell::ShellState;

const LOGO_SRC: &str = "/assets/logo.svg";

#[component]
pub fn NavBar(#[prop(into)] on_login: Callback<()>, #[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let close_menu = move || shell.update(ShellState::close_menu);

    view! {
        <nav class="site-nav">
            <div class="site-nav__bar">
                <a href=SitePage::Home.path() class="site-nav__brand" on:click=move |_| close_menu()>
                    <img src=LOGO_SRC alt="Tech Friends Logo" class="site-nav__logo"/>
                    <span class="gradient-text">"Tech Friends"</span>
                </a>

                <ul class="site-nav__desktop">
                    <li><a class="nav-link" href=SitePage::Home.path()>"Home"</a></li>
                    <NavMenu label="Services" links=&SERVICE_LINKS/>
                    <li><a class="nav-link" href=SitePage::Resources.path()>"Resources"</a></li>
                    <NavMenu label="Company" links=&COMPANY_LINKS/>
                    <NavMenu label="Policies" links=&POLICY_LINKS/>
                    <li>
                        <SessionButton on_login=on_login on_logout=on_logout/>
                    </li>
                </ul>

                <button
                    class="site-nav__toggle"
                    aria-label="Open main menu"
                    aria-expanded=move || shell.with(|s| s.menu_open).to_string()
                    on:click=move |_| shell.update(ShellState::toggle_menu)
                >
                    {move || if shell.with(|s| s.menu_open) { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || shell.with(|s| s.menu_open)>
                <div class="site-nav__mobile">
                    <a class="nav-link" href=SitePage::Home.path() on:click=move |_| close_menu()>"Home"</a>
                    <MobileGroup label="Services" links=&SERVICE_LINKS/>
                    <a class="nav-link" href=SitePage::Resources.path() on:click=move |_| close_menu()>
                        "Resources"
                    </a>
                    <MobileGroup label="Company" links=&COMPANY_LINKS/>
                    <MobileGroup label="Policies" links=&POLICY_LINKS/>
                    <SessionButton on_login=on_login on_logout=on_logout/>
                </div>
            </Show>
        </nav>
    }
}

/// Login button while signed out, logout button while signed in, nothing
/// while the startup lookup is pending.
#[component]
fn SessionButton(on_login: Callback<()>, on_logout: Callback<()>) -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();

    view! {
        <Show when=move || shell.with(ShellState::login_available)>
            <button class="btn btn--primary" type="button" on:click=move |_| on_login.run(())>
                "Login"
            </button>
        </Show>
        <Show when=move || shell.with(ShellState::logout_available)>
            <button
                class="btn btn--ghost"
                type="button"
                disabled=move || shell.with(|s| s.logout_pending)
                on:click=move |_| on_logout.run(())
            >
                "Logout"
            </button>
        </Show>
    }
}

/// Desktop dropdown. Opens on hover/focus via CSS.
#[component]
fn NavMenu(label: &'static str, links: &'static [NavLink]) -> impl IntoView {
    view! {
        <li class="nav-menu" tabindex="0">
            <span class="nav-link nav-menu__trigger">{label}</span>
            <ul class="nav-menu__panel">
                {links
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a class="nav-menu__item" href=link.href>
                                    <span class="nav-menu__title">{link.title}</span>
                                    <span class="nav-menu__description">{link.description}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </li>
    }
}

/// Mobile `<details>` group. Following a link closes the whole menu.
#[component]
fn MobileGroup(label: &'static str, links: &'static [NavLink]) -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();

    view! {
        <details class="mobile-group">
            <summary class="nav-link">{label}</summary>
            {links
                .iter()
                .map(|link| {
                    view! {
                        <a
                            class="mobile-group__link"
                            href=link.href
                            on:click=move |_| shell.update(ShellState::close_menu)
                        >
                            {link.title}
                        </a>
                    }
                })
                .collect_view()}
        </details>
    }
}
