use dioxus::prelude::*;

use crate::icons::FaBars;
use crate::Icon;

const PANEL_CLASS: &str = "mobile-menu";

/// Visibility of the collapsible navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuVisibility {
    Shown,
    #[default]
    Hidden,
}

impl MenuVisibility {
    pub fn toggle(self) -> Self {
        match self {
            MenuVisibility::Shown => MenuVisibility::Hidden,
            MenuVisibility::Hidden => MenuVisibility::Shown,
        }
    }

    pub fn is_hidden(self) -> bool {
        self == MenuVisibility::Hidden
    }

    /// `base`, plus `hidden` while collapsed.
    pub fn panel_class(self, base: &str) -> String {
        if self.is_hidden() {
            format!("{base} hidden")
        } else {
            base.to_string()
        }
    }
}

/// Menu button plus the `#mobile-menu` panel it shows and hides.
#[component]
pub fn MobileMenu(children: Element) -> Element {
    let mut visibility = use_signal(MenuVisibility::default);
    let class = visibility().panel_class(PANEL_CLASS);

    rsx! {
        button {
            class: "mobile-menu-button",
            r#type: "button",
            title: "Menu",
            onclick: move |_| {
                let current = visibility();
                visibility.set(current.toggle());
            },
            Icon { icon: FaBars, width: 20, height: 20 }
        }
        div {
            id: "mobile-menu",
            class: "{class}",
            {children}
        }
    }
}
