use crate::state::GlowPreference;
use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: String,
    pub root_class: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME.to_string(),
            root_class: "theme-dark",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME.to_string(),
            root_class: "theme-light",
        },
        ThemeMode::Device => ThemeDefinition {
            css: format!("{DARK_THEME}\n@media (prefers-color-scheme: light) {{\n{LIGHT_THEME}\n}}"),
            root_class: "theme-device",
        },
    }
}

/// Inline style for the glow layers around the chat input.
///
/// Returns an empty string when the effect is off; the stylesheet hides the layers then.
pub fn glow_style(glow: &GlowPreference) -> String {
    if !glow.enabled() {
        return String::new();
    }
    let end = glow.gradient_end().unwrap_or(glow.color());
    format!(
        "--glow-start: {}; --glow-end: {}; --glow-brightness: {:.1}; --glow-speed: {:.1}s; --glow-radius: {:.0}px;",
        glow.color(),
        end,
        glow.brightness(),
        glow.speed_secs(),
        glow.radius(),
    )
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #1e1f20;
    --color-bg-sidebar: #27282a;
    --color-bg-hover: #383838;
    --color-bg-menu: #2d2d2d;
    --color-text-primary: #ffffff;
    --color-text-muted: #9ca3af;
    --color-border: #383838;
    --color-danger: #f87171;
    --color-user-bubble: rgba(56, 56, 56, 0.5);
    --color-avatar-user: #a855f7;
    --color-avatar-assistant: #3b82f6;
    --color-tooltip-bg: #f9fafb;
    --color-tooltip-text: #1f2937;
}
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-sidebar: #f1f3f4;
    --color-bg-hover: #e2e5e8;
    --color-bg-menu: #ffffff;
    --color-text-primary: #1f1f1f;
    --color-text-muted: #5f6368;
    --color-border: #d7dade;
    --color-danger: #d93025;
    --color-user-bubble: rgba(226, 229, 232, 0.7);
    --color-avatar-user: #9333ea;
    --color-avatar-assistant: #2563eb;
    --color-tooltip-bg: #1f2937;
    --color-tooltip-text: #f9fafb;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_theme_contains_both_palettes() {
        let css = theme_definition(ThemeMode::Device).css;
        assert!(css.contains("prefers-color-scheme: light"));
        assert!(css.contains("#1e1f20"));
        assert!(css.contains("#f1f3f4"));
    }

    #[test]
    fn test_glow_style_empty_when_disabled() {
        assert!(glow_style(&GlowPreference::default()).is_empty());
    }

    #[test]
    fn test_glow_style_solid_uses_one_color() {
        let mut glow = GlowPreference::default();
        glow.set_enabled(true);
        let style = glow_style(&glow);
        assert!(style.contains("--glow-start: #FF4500;"));
        assert!(style.contains("--glow-end: #FF4500;"));
        assert!(style.contains("--glow-speed: 3.0s;"));
        assert!(style.contains("--glow-radius: 20px;"));
    }
}
