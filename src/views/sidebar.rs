use crate::state::conversations::NEW_CHAT_TITLE;
use crate::state::models::model_version;
use crate::state::{ConversationStore, LocationInfo, ModelRegistry, SidebarState};
use crate::types::{ChatThread, Model, current_time};
use dioxus::events::{FormEvent, Key, KeyboardEvent};
use dioxus::prelude::*;

const MENU_ITEMS: [(&str, &str); 4] = [
    ("♡", "Gem manager"),
    ("?", "Help"),
    ("◷", "Activity"),
    ("⚙", "Settings"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ThreadGroup {
    Pinned,
    Recent,
    Archived,
}

impl ThreadGroup {
    fn heading(self) -> &'static str {
        match self {
            ThreadGroup::Pinned => "Pinned",
            ThreadGroup::Recent => "Recent",
            ThreadGroup::Archived => "Archived",
        }
    }
}

#[component]
pub fn Sidebar(
    sidebar: Signal<SidebarState>,
    conversations: Signal<ConversationStore>,
    models: Signal<ModelRegistry>,
    location: Signal<LocationInfo>,
    settings_open: Signal<bool>,
) -> Element {
    let mut sidebar = sidebar;
    let mut conversations = conversations;
    let mut settings_open = settings_open;
    let collapsed = sidebar().is_collapsed();

    let (pinned, recent, archived, has_more) = conversations.with(|store| {
        (
            owned(store.pinned()),
            owned(store.recent()),
            owned(store.archived()),
            store.has_more_recent(),
        )
    });

    let aside_class = if collapsed { "sidebar collapsed" } else { "sidebar" };

    rsx! {
        aside { class: aside_class,
            div { class: "sidebar-header",
                button {
                    class: "btn-ghost icon-btn",
                    r#type: "button",
                    title: "Toggle sidebar",
                    onclick: move |_| sidebar.write().toggle(),
                    "☰"
                }
                if !collapsed {
                    ModelSelector { models }
                }
            }

            div { class: "sidebar-section",
                button {
                    class: "btn new-chat-btn",
                    r#type: "button",
                    title: "Start new chat",
                    onclick: move |_| {
                        conversations.write().create(NEW_CHAT_TITLE, current_time());
                    },
                    span { class: "icon", "+" }
                    if !collapsed { "New chat" }
                }
            }

            div { class: "thread-scroll",
                if !pinned.is_empty() {
                    ThreadSection { group: ThreadGroup::Pinned, threads: pinned, collapsed, conversations }
                }
                ThreadSection { group: ThreadGroup::Recent, threads: recent, collapsed, conversations }
                if has_more {
                    button {
                        class: "btn-ghost load-more",
                        r#type: "button",
                        onclick: move |_| conversations.write().load_more(),
                        span { class: "icon", "⋯" }
                        if !collapsed { "Load more" }
                    }
                }
                if !archived.is_empty() {
                    ThreadSection { group: ThreadGroup::Archived, threads: archived, collapsed, conversations }
                }
            }

            nav { class: "sidebar-menu",
                for (icon, label) in MENU_ITEMS {
                    button {
                        key: "{label}",
                        class: "btn-ghost menu-item",
                        r#type: "button",
                        title: label,
                        onclick: move |_| settings_open.set(true),
                        span { class: "icon", "{icon}" }
                        if !collapsed { "{label}" }
                    }
                }
            }

            if !collapsed {
                LocationFooter { location }
            }
        }
    }
}

fn owned(threads: Vec<&ChatThread>) -> Vec<ChatThread> {
    threads.into_iter().cloned().collect()
}

#[component]
fn ThreadSection(
    group: ThreadGroup,
    threads: Vec<ChatThread>,
    collapsed: bool,
    conversations: Signal<ConversationStore>,
) -> Element {
    rsx! {
        div { class: "thread-group",
            if !collapsed {
                h2 { class: "thread-group-title", "{group.heading()}" }
            }
            div { class: "thread-list",
                for thread in threads.iter() {
                    ChatListItem { key: "{thread.id}", thread: thread.clone(), collapsed, conversations }
                }
            }
        }
    }
}

#[component]
fn ChatListItem(
    thread: ChatThread,
    collapsed: bool,
    conversations: Signal<ConversationStore>,
) -> Element {
    let mut conversations = conversations;
    let mut renaming = use_signal(|| false);
    let mut draft = use_signal(String::new);
    let mut menu_open = use_signal(|| false);

    let key_rename_id = thread.id.clone();
    let blur_rename_id = thread.id.clone();
    let start_title = thread.title.clone();
    let pin_id = thread.id.clone();
    let archive_id = thread.id.clone();
    let delete_id = thread.id.clone();
    let pinned = thread.pinned;
    let archived = thread.archived;
    let link_class = if collapsed { "thread-link centered" } else { "thread-link" };

    rsx! {
        div { class: "thread-item",
            a { class: link_class, href: "#",
                span { class: "icon thread-icon", "▭" }
                if !collapsed {
                    if renaming() {
                        input {
                            class: "rename-input",
                            r#type: "text",
                            value: "{draft}",
                            autofocus: true,
                            oninput: move |ev: FormEvent| draft.set(ev.value()),
                            onkeydown: move |ev: KeyboardEvent| {
                                if ev.key() == Key::Enter {
                                    ev.prevent_default();
                                    commit_rename(conversations, renaming, draft, &key_rename_id);
                                }
                            },
                            onblur: move |_| commit_rename(conversations, renaming, draft, &blur_rename_id),
                        }
                    } else {
                        span { class: "thread-title", "{thread.title}" }
                    }
                }
            }

            if !collapsed && !renaming() {
                button {
                    class: "btn-ghost icon-btn thread-menu-trigger",
                    r#type: "button",
                    title: "More options",
                    onclick: move |_| menu_open.set(!menu_open()),
                    "⋮"
                }
                if menu_open() {
                    div { class: "thread-menu", onmouseleave: move |_| menu_open.set(false),
                        button {
                            class: "menu-entry",
                            r#type: "button",
                            onclick: move |_| {
                                let mut store = conversations.write();
                                if pinned { store.unpin(&pin_id) } else { store.pin(&pin_id) }
                                menu_open.set(false);
                            },
                            if pinned { "Unpin" } else { "Pin" }
                        }
                        button {
                            class: "menu-entry",
                            r#type: "button",
                            onclick: move |_| {
                                draft.set(start_title.clone());
                                renaming.set(true);
                                menu_open.set(false);
                            },
                            "Rename"
                        }
                        button {
                            class: "menu-entry",
                            r#type: "button",
                            onclick: move |_| {
                                let mut store = conversations.write();
                                if archived { store.unarchive(&archive_id) } else { store.archive(&archive_id) }
                                menu_open.set(false);
                            },
                            if archived { "Unarchive" } else { "Archive" }
                        }
                        button {
                            class: "menu-entry danger",
                            r#type: "button",
                            onclick: move |_| {
                                conversations.write().delete(&delete_id);
                                menu_open.set(false);
                            },
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

/// Blank titles keep the input open so the user can fix them.
fn commit_rename(
    mut conversations: Signal<ConversationStore>,
    mut renaming: Signal<bool>,
    draft: Signal<String>,
    id: &str,
) {
    let title = draft();
    if conversations.write().rename(id, &title) {
        renaming.set(false);
    }
}

#[component]
fn ModelSelector(models: Signal<ModelRegistry>) -> Element {
    let mut open = use_signal(|| false);
    let mut query = use_signal(String::new);

    let registry = models.read();
    let selected = registry.selected().clone();
    let matches: Vec<_> = registry.search(&query()).into_iter().cloned().collect();
    drop(registry);

    rsx! {
        div { class: "model-selector",
            button {
                class: "btn btn-outline model-trigger",
                r#type: "button",
                role: "combobox",
                aria_expanded: "{open}",
                onclick: move |_| open.set(!open()),
                span { "{selected.name}" }
                if let Some(version) = model_version(&selected.id) {
                    span { class: "model-version", "{version}" }
                }
                span { class: "chevron", "⇕" }
            }
            if open() {
                div { class: "model-popover",
                    input {
                        class: "model-search",
                        r#type: "text",
                        placeholder: "Search model...",
                        value: "{query}",
                        oninput: move |ev: FormEvent| query.set(ev.value()),
                    }
                    if matches.is_empty() {
                        p { class: "model-empty", "No model found." }
                    }
                    for model in matches.iter() {
                        ModelOption { key: "{model.id}", model: model.clone(), selected: selected.id.clone(), models, open, query }
                    }
                }
            }
        }
    }
}

#[component]
fn ModelOption(
    model: Model,
    selected: String,
    models: Signal<ModelRegistry>,
    open: Signal<bool>,
    query: Signal<String>,
) -> Element {
    let mut models = models;
    let mut open = open;
    let mut query = query;
    let check_class = if selected == model.id { "check visible" } else { "check" };
    let id = model.id.clone();

    rsx! {
        button {
            class: "model-option",
            r#type: "button",
            onclick: move |_| {
                models.write().select(&id);
                open.set(false);
                query.set(String::new());
            },
            span { class: check_class, "✓" }
            "{model.name}"
        }
    }
}

#[component]
fn LocationFooter(location: Signal<LocationInfo>) -> Element {
    let info = location();
    rsx! {
        div { class: "location-footer",
            if info.loading {
                div { class: "location-skeleton",
                    div { class: "skeleton-line wide" }
                    div { class: "skeleton-line" }
                }
            } else {
                div { class: "location-place",
                    span { class: "icon", "⌖" }
                    "{info.label()}"
                }
                div { class: "location-source", "From your IP address" }
            }
        }
    }
}
