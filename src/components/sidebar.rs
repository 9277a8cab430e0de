//! Left navigation rail with grouped menu links.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuGroup {
    pub title: &'static str,
    pub items: &'static [MenuItem],
}

/// Entry and System links point at screens that do not exist yet and land on
/// the not-found page.
pub const MENU: &[MenuGroup] = &[
    MenuGroup { title: "Main", items: &[MenuItem { label: "Dashboard", href: "/dashboard" }] },
    MenuGroup {
        title: "Masters",
        items: &[
            MenuItem { label: "User Management", href: "/users" },
            MenuItem { label: "Measurements", href: "/measurements" },
            MenuItem { label: "Tailoring Items", href: "/tailoring-items" },
            MenuItem { label: "Customers", href: "/customers" },
            MenuItem { label: "Contacts", href: "/contacts" },
        ],
    },
    MenuGroup {
        title: "Entry",
        items: &[
            MenuItem { label: "New Booking", href: "/booking/new" },
            MenuItem { label: "Order Status", href: "/orders" },
        ],
    },
    MenuGroup { title: "System", items: &[MenuItem { label: "Settings", href: "/settings" }] },
];

pub const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Exact path match; a trailing slash on the current path is ignored.
pub fn is_active(current: &str, href: &str) -> bool {
    let current = if current.len() > 1 { current.trim_end_matches('/') } else { current };
    current == href
}

/// Menu entry whose link matches `current`, if any.
pub fn active_item(current: &str) -> Option<&'static MenuItem> {
    MENU.iter().flat_map(|g| g.items.iter()).find(|item| is_active(current, item.href))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo">"S"</span>
                <div>
                    <h1 class="sidebar__title">"Sunrise"</h1>
                    <p class="sidebar__tagline">"ERP SOLUTIONS"</p>
                </div>
            </div>
            <nav class="sidebar__nav">
                {MENU
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="sidebar__group">
                                <h3 class="sidebar__group-title">{group.title}</h3>
                                {group
                                    .items
                                    .iter()
                                    .map(|item| {
                                        let href = item.href;
                                        view! {
                                            <a
                                                class="sidebar__link"
                                                class:sidebar__link--active=move || pathname.with(|p| is_active(p, href))
                                                href=href
                                            >
                                                {item.label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar__footer">{APP_VERSION}</div>
        </aside>
    }
}
