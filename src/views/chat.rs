use crate::greeting::{GREETING_REFRESH, current_greeting};
use crate::scroll::{SETTLE_DELAY, ScrollCoordinator, ScrollMetrics};
use crate::state::{GlowPreference, LocationInfo};
use crate::streaming::{CannedReply, ChatSession, StreamTicket, paced};
use crate::theme::glow_style;
use crate::timing;
use crate::types::{Message, Role};
use crate::views::shared::{
    CHAT_LIST_ID, copy_to_clipboard, format_message_timestamp, markdown_to_html,
    scroll_chat_to_bottom,
};
use dioxus::events::{FormEvent, Key, KeyboardEvent, MountedEvent, ScrollEvent};
use dioxus::prelude::*;
use futures::StreamExt;
use std::rc::Rc;
use std::time::Duration;

const INPUT_PLACEHOLDER: &str = "Ask anything...";

/// Feed a reply stream into the session until it runs out or is superseded.
async fn play_reply(mut session: Signal<ChatSession>, ticket: StreamTicket, delay: Duration) {
    let StreamTicket { generation, stream } = ticket;
    let prefixes = paced(stream, delay);
    futures::pin_mut!(prefixes);
    while let Some(prefix) = prefixes.next().await {
        if !session.write().apply(generation, prefix) {
            return;
        }
    }
    session.write().finish(generation);
}

#[component]
pub fn ChatView(
    glow: Signal<GlowPreference>,
    location: Signal<LocationInfo>,
    #[props(!optional)] user_name: Option<String>,
    token_delay: Duration,
) -> Element {
    let mut session = use_signal(ChatSession::new);
    let greeting = use_greeting(user_name);

    let is_empty = session.read().messages().is_empty();
    let streaming = session.read().is_streaming();

    rsx! {
        div { class: "chat-area",
            if is_empty {
                div { class: "greeting",
                    h1 { span { class: "greeting-text", "{greeting}" } }
                }
            } else {
                MessageList { session }
            }
        }
        div { class: "input-area",
            ChatInput {
                glow,
                streaming,
                on_submit: move |text: String| {
                    let ticket = session.write().submit(&text, &CannedReply);
                    if let Some(ticket) = ticket {
                        spawn(play_reply(session, ticket, token_delay));
                    }
                },
            }
            LocationLine { location }
        }
    }
}

fn use_greeting(user_name: Option<String>) -> Signal<String> {
    let initial_name = user_name.clone();
    let greeting = use_signal(move || current_greeting(initial_name.as_deref()));
    use_future(move || {
        let user_name = user_name.clone();
        let mut greeting = greeting;
        async move {
            loop {
                timing::sleep(GREETING_REFRESH).await;
                greeting.set(current_greeting(user_name.as_deref()));
            }
        }
    });
    greeting
}

async fn read_metrics(element: &MountedData) -> Option<ScrollMetrics> {
    let offset = element.get_scroll_offset().await.ok()?;
    let size = element.get_scroll_size().await.ok()?;
    let rect = element.get_client_rect().await.ok()?;
    Some(ScrollMetrics {
        scroll_top: offset.y,
        scroll_height: size.height,
        client_height: rect.size.height,
    })
}

#[component]
fn MessageList(session: Signal<ChatSession>) -> Element {
    let mut coordinator = use_signal(ScrollCoordinator::new);
    let mut list_element = use_signal(|| Option::<Rc<MountedData>>::None);

    // Follow new content unless the user has scrolled away from it.
    use_effect(move || {
        // Reading here subscribes the effect to new messages, token updates and stream end.
        let (_latest_len, _streaming) = session.with(|current| {
            (
                current.messages().last().map(|m| m.content.len()),
                current.is_streaming(),
            )
        });
        let follow = coordinator.peek().follow_behavior();
        if let Some(behavior) = follow {
            scroll_chat_to_bottom(behavior);
            coordinator.write().mark_at_bottom();
        }
    });

    let on_scroll = move |_: ScrollEvent| {
        let Some(element) = list_element() else {
            return;
        };
        spawn(async move {
            let Some(metrics) = read_metrics(&element).await else {
                return;
            };
            let ticket = coordinator.write().observe(metrics);
            timing::sleep(SETTLE_DELAY).await;
            coordinator.write().settle(ticket);
        });
    };

    let (messages, streaming_id) = session.with(|current| {
        (
            current.messages().to_vec(),
            current.streaming_message_id().map(str::to_string),
        )
    });
    let show_jump = coordinator.read().show_jump_button();
    let jump_class = if show_jump { "jump-to-bottom visible" } else { "jump-to-bottom" };

    rsx! {
        div { class: "message-container",
            div {
                id: CHAT_LIST_ID,
                class: "message-list",
                onmounted: move |ev: MountedEvent| list_element.set(Some(ev.data())),
                onscroll: on_scroll,
                for message in messages.iter() {
                    ChatMessage {
                        key: "{message.id}",
                        message: message.clone(),
                        is_streaming: streaming_id.as_deref() == Some(message.id.as_str()),
                    }
                }
            }
            div { class: jump_class,
                button {
                    class: "btn icon-btn round",
                    r#type: "button",
                    title: "Scroll to bottom",
                    disabled: !show_jump,
                    onclick: move |_| {
                        let behavior = coordinator.write().jump_to_bottom();
                        scroll_chat_to_bottom(behavior);
                    },
                    "⌄"
                }
            }
        }
    }
}

#[component]
fn ChatMessage(message: Message, is_streaming: bool) -> Element {
    let role_class = message.role.css_class();
    let timestamp = format_message_timestamp(message.timestamp).unwrap_or_default();
    let show_copy = message.role == Role::Assistant && !is_streaming && !message.content.is_empty();
    let copy_payload = message.content.clone();
    let content_html = match message.role {
        Role::User => String::new(),
        Role::Assistant => markdown_to_html(&message.content),
    };

    rsx! {
        div { class: "message-row {role_class}",
            div { class: "message-meta",
                div { class: "avatar {role_class}", "{message.role.avatar_initial()}" }
                span { class: "message-timestamp", "{timestamp}" }
                if show_copy {
                    button {
                        class: "action-btn",
                        r#type: "button",
                        title: "Copy",
                        onclick: move |_| copy_to_clipboard(copy_payload.clone()),
                        "Copy"
                    }
                }
            }
            if message.role == Role::User {
                div { class: "message-body plain", "{message.content}" }
            } else if is_streaming && message.content.is_empty() {
                div { class: "message-body", span { class: "shimmer-text", "Thinking…" } }
            } else {
                div { class: "message-body md", dangerous_inner_html: "{content_html}" }
            }
        }
    }
}

#[component]
fn ChatInput(
    glow: Signal<GlowPreference>,
    streaming: bool,
    on_submit: EventHandler<String>,
) -> Element {
    let mut draft = use_signal(String::new);

    let mut submit = move || {
        let text = draft();
        if text.trim().is_empty() || streaming {
            return;
        }
        on_submit.call(text);
        draft.set(String::new());
    };

    let glow_enabled = glow.read().enabled();
    let style = glow_style(&glow.read());
    let wrapper_class = if glow_enabled { "chat-input glow" } else { "chat-input" };
    let send_disabled = streaming || draft().trim().is_empty();

    rsx! {
        div { class: wrapper_class, style: "{style}",
            if glow_enabled {
                div { class: "glow-layer glow-base" }
                div { class: "glow-layer glow-emissive" }
            }
            div { class: "input-card",
                button { class: "btn-ghost icon-btn", r#type: "button", title: "Attach file", "⎘" }
                textarea {
                    rows: "1",
                    placeholder: INPUT_PLACEHOLDER,
                    value: "{draft}",
                    disabled: streaming,
                    oninput: move |ev: FormEvent| draft.set(ev.value()),
                    onkeydown: move |ev: KeyboardEvent| {
                        if ev.key() == Key::Enter && !ev.modifiers().shift() {
                            ev.prevent_default();
                            submit();
                        }
                    },
                }
                button { class: "btn-ghost icon-btn", r#type: "button", title: "Voice input", "◉" }
                button {
                    class: "btn-ghost icon-btn send-btn",
                    r#type: "button",
                    title: "Send message",
                    disabled: send_disabled,
                    onclick: move |_| submit(),
                    "➤"
                }
            }
        }
    }
}

#[component]
fn LocationLine(location: Signal<LocationInfo>) -> Element {
    let info = location();
    rsx! {
        div { class: "location-line",
            span { class: "icon", "⌖" }
            if info.loading {
                span { class: "pulse", "Loading location..." }
            } else {
                span { "{info.label()}" }
            }
        }
    }
}
