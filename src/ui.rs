use crate::config::AppConfig;
use crate::state::location::probe;
use crate::state::{
    ConversationStore, GlowPreference, IpApiLookup, LocationInfo, ModelRegistry, SidebarState,
};
use crate::theme::{ThemeDefinition, theme_definition};
use crate::types::{ThemeMode, current_time};
use crate::views::{ChatView, SettingsDialog, Sidebar};
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::load_or_default);
    let conversations = use_signal(|| ConversationStore::seeded(current_time()));
    let models = use_signal(ModelRegistry::default);
    let sidebar = use_signal(SidebarState::default);
    let glow = use_signal(GlowPreference::default);
    let location = use_signal(LocationInfo::pending);
    let theme = use_signal(ThemeMode::default);
    let settings_open = use_signal(|| false);

    use_location_probe(location, config.location_endpoint.clone());

    let ThemeDefinition { css, root_class } = theme_definition(theme());
    let collapsed_class = if sidebar().is_collapsed() {
        "sidebar-collapsed"
    } else {
        ""
    };

    rsx! {
        ThemeStyles { css }
        div { class: "app-shell {root_class} {collapsed_class}",
            Sidebar {
                sidebar,
                conversations,
                models,
                location,
                settings_open,
            }
            main { class: "main",
                TopBar { initial: avatar_initial(config.user_name.as_deref()) }
                ChatView {
                    glow,
                    location,
                    user_name: config.user_name.clone(),
                    token_delay: config.token_delay,
                }
            }
            SettingsDialog { open: settings_open, glow, theme }
        }
    }
}

/// Resolve the sidebar location once per session.
fn use_location_probe(location: Signal<LocationInfo>, endpoint: String) {
    use_future(move || {
        let endpoint = endpoint.clone();
        let mut location = location;
        async move {
            let lookup = IpApiLookup::new(endpoint);
            location.set(probe(&lookup).await);
        }
    });
}

#[component]
fn ThemeStyles(css: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        style { dangerous_inner_html: "{css}" }
    }
}

fn avatar_initial(user_name: Option<&str>) -> String {
    user_name
        .and_then(|name| name.chars().next())
        .map(|first| first.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[component]
fn TopBar(initial: String) -> Element {
    rsx! {
        div { class: "top-bar",
            button { class: "btn btn-outline upgrade-btn", r#type: "button",
                span { class: "upgrade-icon", "▾" }
                "Try Advanced"
            }
            div { class: "profile-avatar", "{initial}" }
        }
    }
}
