//! Project side menu listing audited pages and scripts.
//!
//! DESIGN
//! ======
//! Rows are derived fresh from the project on every render and never cached.
//! Whether a row is active depends only on its link path and the current URL:
//!
//! 1. When the URL is inside the project's audit-details tree, a row is active
//!    iff the URL starts with the row's link path. Deeper sub-routes of a
//!    target keep its row highlighted.
//! 2. Otherwise a row is active only on an exact match.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeColors};
use crate::components::icons::MenuArrowIcon;
use crate::net::types::Project;
use crate::util::i18n::use_messages;
use crate::util::routes::{audits_details_path, project_audits_base_path};

const PAGE_BADGE: BadgeColors = BadgeColors { background: "#e3e8fd", text: "#4a6df1" };
const PAGE_BADGE_SELECTED: BadgeColors = BadgeColors { background: "#ffffff", text: "#4a6df1" };
const SCRIPT_BADGE: BadgeColors = BadgeColors { background: "#dcf3ec", text: "#10a580" };
const SCRIPT_BADGE_SELECTED: BadgeColors = BadgeColors { background: "#ffffff", text: "#10a580" };

const MENU_ARROW: &str = "#b4bdd6";
const MENU_ARROW_SELECTED: &str = "#ffffff";

/// Whether a menu entry is a page or a script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Page,
    Script,
}

impl EntryKind {
    /// Catalog id of the badge text.
    pub fn badge_message_id(self) -> &'static str {
        match self {
            Self::Page => "Menu.page_badge",
            Self::Script => "Menu.script_badge",
        }
    }
}

/// One navigable menu entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOrScript {
    pub uuid: String,
    pub title: String,
    pub link_path: String,
    pub kind: EntryKind,
}

/// Pages then scripts of `project`, each in its original order.
pub fn pages_and_scripts(project: &Project, audit_parameters_id: Option<&str>) -> Vec<PageOrScript> {
    let pages = project.pages.iter().map(|page| PageOrScript {
        uuid: page.uuid.clone(),
        title: page.name.clone(),
        link_path: audits_details_path(&project.uuid, &page.uuid, audit_parameters_id),
        kind: EntryKind::Page,
    });
    let scripts = project.scripts.iter().map(|script| PageOrScript {
        uuid: script.uuid.clone(),
        title: script.name.clone(),
        link_path: audits_details_path(&project.uuid, &script.uuid, audit_parameters_id),
        kind: EntryKind::Script,
    });
    pages.chain(scripts).collect()
}

/// Whether the row linking to `link_path` is the active one for `url`.
pub fn does_link_path_correspond_to_url(project_id: &str, link_path: &str, url: &str) -> bool {
    if url.starts_with(&project_audits_base_path(project_id)) {
        url.starts_with(link_path)
    } else {
        link_path == url
    }
}

/// Badge colors from the fixed kind x selection table.
pub fn badge_colors(kind: EntryKind, selected: bool) -> BadgeColors {
    match (kind, selected) {
        (EntryKind::Page, false) => PAGE_BADGE,
        (EntryKind::Page, true) => PAGE_BADGE_SELECTED,
        (EntryKind::Script, false) => SCRIPT_BADGE,
        (EntryKind::Script, true) => SCRIPT_BADGE_SELECTED,
    }
}

pub fn menu_arrow_color(selected: bool) -> &'static str {
    if selected { MENU_ARROW_SELECTED } else { MENU_ARROW }
}

/// A fully resolved row, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuRow {
    pub entry: PageOrScript,
    pub active: bool,
    pub badge: BadgeColors,
    pub arrow_color: &'static str,
}

pub fn menu_rows(project: &Project, current_url: &str, audit_parameters_id: Option<&str>) -> Vec<MenuRow> {
    pages_and_scripts(project, audit_parameters_id)
        .into_iter()
        .map(|entry| {
            let active = does_link_path_correspond_to_url(&project.uuid, &entry.link_path, current_url);
            MenuRow { badge: badge_colors(entry.kind, active), arrow_color: menu_arrow_color(active), active, entry }
        })
        .collect()
}

/// Side menu of a project. Renders an empty container until a project is known.
#[component]
pub fn Menu(
    #[prop(into)] project: Signal<Option<Project>>,
    #[prop(into)] current_url: Signal<String>,
    #[prop(into)] audit_parameters_id: Signal<Option<String>>,
    #[prop(optional)] on_launch_audits: Option<Callback<String>>,
) -> impl IntoView {
    let messages = use_messages();

    let rows = move || {
        project.with(|project| {
            project.as_ref().map_or_else(Vec::new, |project| {
                menu_rows(project, &current_url.get(), audit_parameters_id.get().as_deref())
            })
        })
    };
    let project_name = move || project.with(|p| p.as_ref().map(|p| p.name.clone()).unwrap_or_default());

    view! {
        <nav class="menu">
            <Show when=move || project.with(Option::is_some)>
                <h2 class="menu__project-name">{project_name}</h2>
                <div class="menu__audits">"Audits"</div>
                {move || {
                    rows()
                        .into_iter()
                        .map(|row| {
                            let kind = row.entry.kind;
                            let badge_text =
                                Signal::derive(move || messages.with(|m| m.format(kind.badge_message_id())));
                            let arrow_color = row.arrow_color;
                            view! {
                                <a
                                    class="menu__item"
                                    class:active=row.active
                                    href=row.entry.link_path.clone()
                                >
                                    <span class="menu__item-title-block">
                                        <span class="menu__item-title">{row.entry.title.clone()}</span>
                                        <Badge colors=row.badge text=badge_text/>
                                    </span>
                                    <span class="menu__item-arrow">
                                        <MenuArrowIcon color=arrow_color/>
                                    </span>
                                </a>
                            }
                        })
                        .collect_view()
                }}
                {on_launch_audits
                    .map(|on_launch| {
                        let launch = move |_| {
                            if let Some(id) = project.with_untracked(|p| p.as_ref().map(|p| p.uuid.clone())) {
                                on_launch.run(id);
                            }
                        };
                        view! {
                            <button class="btn menu__launch" on:click=launch>
                                {move || messages.with(|m| m.format("Menu.launch_audits"))}
                            </button>
                        }
                    })}
            </Show>
        </nav>
    }
}
