use crate::state::glow::{BRIGHTNESS_RANGE, RADIUS_RANGE, SPEED_RANGE_SECS};
use crate::state::{ColorMode, GlowPreference};
use crate::types::ThemeMode;
use dioxus::events::{FormEvent, Key, KeyboardEvent, MouseEvent};
use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SettingsCategory {
    Account,
    Profile,
    Preferences,
    Appearance,
    Advanced,
}

impl SettingsCategory {
    const ALL: [SettingsCategory; 5] = [
        SettingsCategory::Account,
        SettingsCategory::Profile,
        SettingsCategory::Preferences,
        SettingsCategory::Appearance,
        SettingsCategory::Advanced,
    ];

    fn label(self) -> &'static str {
        match self {
            SettingsCategory::Account => "Account",
            SettingsCategory::Profile => "Profile",
            SettingsCategory::Preferences => "Preferences",
            SettingsCategory::Appearance => "Appearance",
            SettingsCategory::Advanced => "Advanced",
        }
    }
}

#[component]
pub fn SettingsDialog(
    open: Signal<bool>,
    glow: Signal<GlowPreference>,
    theme: Signal<ThemeMode>,
) -> Element {
    let mut open = open;
    let mut active = use_signal(|| SettingsCategory::Appearance);

    if !open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "dialog-overlay",
            tabindex: "-1",
            onclick: move |_| open.set(false),
            onkeydown: move |ev: KeyboardEvent| {
                if ev.key() == Key::Escape {
                    open.set(false);
                }
            },
            div {
                class: "dialog",
                role: "dialog",
                aria_modal: "true",
                onclick: move |ev: MouseEvent| ev.stop_propagation(),
                div { class: "dialog-header",
                    h2 { class: "dialog-title", "Settings" }
                    p { class: "text-muted", "Manage your account settings and preferences." }
                    button {
                        class: "btn-ghost icon-btn dialog-close",
                        r#type: "button",
                        title: "Close",
                        onclick: move |_| open.set(false),
                        "✕"
                    }
                }
                div { class: "dialog-body",
                    nav { class: "settings-tabs",
                        for category in SettingsCategory::ALL {
                            button {
                                key: "{category.label()}",
                                class: format_args!("settings-tab {}", if active() == category { "active" } else { "" }),
                                r#type: "button",
                                onclick: move |_| active.set(category),
                                "{category.label()}"
                            }
                        }
                    }
                    div { class: "settings-content",
                        if active() == SettingsCategory::Appearance {
                            AppearanceSettings { glow, theme }
                        } else {
                            p { class: "text-muted", "{active().label()} settings coming soon." }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AppearanceSettings(glow: Signal<GlowPreference>, theme: Signal<ThemeMode>) -> Element {
    let mut glow = glow;
    let mut theme = theme;
    let current = glow();
    let enabled = current.enabled();

    rsx! {
        div { class: "settings-section",
            h3 { class: "section-title", "Theme" }
            p { class: "text-muted", "Customize the appearance of the application" }
            div { class: "theme-toggle",
                for mode in ThemeMode::ALL {
                    button {
                        key: "{mode.label()}",
                        class: format_args!("theme-option {}", if theme() == mode { "active" } else { "" }),
                        r#type: "button",
                        onclick: move |_| theme.set(mode),
                        "{mode.label()}"
                    }
                }
            }
        }
        div { class: "settings-section",
            h3 { class: "section-title", "Input Glow Effect" }
            p { class: "text-muted", "Customize the glowing effect around the chat input" }
            div { class: "setting-row",
                label { for: "glow-toggle", "Enable glow effect" }
                button {
                    id: "glow-toggle",
                    class: format_args!("switch {}", if enabled { "on" } else { "" }),
                    r#type: "button",
                    role: "switch",
                    aria_checked: "{enabled}",
                    onclick: move |_| glow.write().set_enabled(!enabled),
                    span { class: "switch-thumb" }
                }
            }
            if enabled {
                GlowControls { glow, current }
            }
        }
    }
}

#[component]
fn GlowControls(glow: Signal<GlowPreference>, current: GlowPreference) -> Element {
    let mut glow = glow;
    let mode = current.color_mode();

    rsx! {
        div { class: "setting-group",
            label { "Color Mode" }
            div { class: "radio-row",
                label {
                    input {
                        r#type: "radio",
                        name: "glow-mode",
                        checked: mode == ColorMode::Solid,
                        onchange: move |_| glow.write().set_color_mode(ColorMode::Solid),
                    }
                    "Solid Color"
                }
                label {
                    input {
                        r#type: "radio",
                        name: "glow-mode",
                        checked: mode == ColorMode::Gradient,
                        onchange: move |_| glow.write().set_color_mode(ColorMode::Gradient),
                    }
                    "Gradient"
                }
            }
        }
        if let Some(end) = current.gradient_end() {
            div { class: "color-grid",
                ColorField {
                    label: "Gradient Start",
                    value: current.color().to_string(),
                    on_change: move |value: String| {
                        glow.write().set_color(&value);
                    },
                }
                ColorField {
                    label: "Gradient End",
                    value: end.to_string(),
                    on_change: move |value: String| {
                        glow.write().set_gradient_end(&value);
                    },
                }
            }
        } else {
            ColorField {
                label: "Color",
                value: current.color().to_string(),
                on_change: move |value: String| {
                    glow.write().set_color(&value);
                },
            }
        }
        RangeField {
            label: "Brightness",
            min: *BRIGHTNESS_RANGE.start(),
            max: *BRIGHTNESS_RANGE.end(),
            step: 0.1,
            value: current.brightness(),
            on_change: move |value: f32| glow.write().set_brightness(value),
        }
        RangeField {
            label: "Animation Speed (seconds)",
            min: *SPEED_RANGE_SECS.start(),
            max: *SPEED_RANGE_SECS.end(),
            step: 0.5,
            value: current.speed_secs(),
            on_change: move |value: f32| glow.write().set_speed_secs(value),
        }
        RangeField {
            label: "Glow Radius",
            min: *RADIUS_RANGE.start(),
            max: *RADIUS_RANGE.end(),
            step: 1.0,
            value: current.radius(),
            on_change: move |value: f32| glow.write().set_radius(value),
        }
    }
}

#[component]
fn ColorField(label: &'static str, value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        div { class: "setting-group",
            label { "{label}" }
            input {
                r#type: "color",
                class: "color-input",
                value: "{value.to_ascii_lowercase()}",
                oninput: move |ev: FormEvent| on_change.call(ev.value()),
            }
        }
    }
}

#[component]
fn RangeField(
    label: &'static str,
    min: f32,
    max: f32,
    step: f32,
    value: f32,
    on_change: EventHandler<f32>,
) -> Element {
    rsx! {
        div { class: "setting-group",
            div { class: "range-label",
                label { "{label}" }
                span { class: "range-value", "{value}" }
            }
            input {
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                oninput: move |ev: FormEvent| {
                    if let Ok(parsed) = ev.value().parse::<f32>() {
                        on_change.call(parsed);
                    }
                },
            }
        }
    }
}
