use dioxus::prelude::*;

use crate::menu::MobileMenu;

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub to: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub const fn new(to: &'static str, label: &'static str) -> Self {
        Self { to, label }
    }
}

/// Top navigation: inline links on wide screens, a toggled panel on narrow ones.
#[component]
pub fn Navbar(brand: String, links: Vec<NavLink>) -> Element {
    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-inner",
                Link { class: "navbar-brand", to: "/", "{brand}" }
                div {
                    class: "navbar-links",
                    for link in links.iter() {
                        Link { key: "{link.to}", class: "navbar-link", to: link.to, "{link.label}" }
                    }
                }
                MobileMenu {
                    for link in links.iter() {
                        Link { key: "{link.to}", class: "mobile-menu-link", to: link.to, "{link.label}" }
                    }
                }
            }
        }
    }
}
