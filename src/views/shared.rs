use crate::scroll::ScrollBehavior;
use comrak::{Options, markdown_to_html as render_markdown};
use dioxus::prelude::*;
use once_cell::sync::Lazy;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

pub const CHAT_LIST_ID: &str = "chat-list";

static MARKDOWN_OPTIONS: Lazy<Options> = Lazy::new(|| {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.render.hardbreaks = true;
    options
});

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero]:[second padding:zero] [period case:upper]");

pub fn markdown_to_html(md: &str) -> String {
    render_markdown(md, &MARKDOWN_OPTIONS)
}

pub fn format_message_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

/// Scroll the message list to its end.
pub fn scroll_chat_to_bottom(behavior: ScrollBehavior) {
    let script = format!(
        "const el = document.getElementById('{CHAT_LIST_ID}'); \
         if (el) {{ el.scrollTo({{ top: el.scrollHeight, behavior: '{}' }}); }}",
        behavior.as_js()
    );
    let _ = document::eval(&script);
}

pub fn copy_to_clipboard(text: String) {
    #[cfg(feature = "desktop")]
    {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(err) = clipboard.set_text(text) {
                    tracing::warn!("clipboard write failed: {err}");
                }
            }
            Err(err) => tracing::warn!("clipboard unavailable: {err}"),
        }
    }
    #[cfg(not(feature = "desktop"))]
    {
        match serde_json::to_string(&text) {
            Ok(literal) => {
                let _ = document::eval(&format!("navigator.clipboard.writeText({literal});"));
            }
            Err(err) => tracing::warn!("could not encode clipboard text: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_escapes_raw_html() {
        let html = markdown_to_html("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_markdown_keeps_single_line_breaks() {
        let html = markdown_to_html("first\nsecond");
        assert!(html.contains("<br"));
    }

    #[test]
    fn test_markdown_renders_ordered_lists() {
        let html = markdown_to_html("1. Theropods\n2. Sauropods");
        assert!(html.contains("<ol>"));
    }

    #[test]
    fn test_timestamp_formats() {
        let formatted = format_message_timestamp(OffsetDateTime::UNIX_EPOCH).expect("format");
        assert!(formatted.ends_with("AM") || formatted.ends_with("PM"));
    }
}
