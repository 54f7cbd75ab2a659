use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn css_class(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    pub fn avatar_initial(self) -> &'static str {
        match self {
            Role::User => "U",
            Role::Assistant => "A",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: OffsetDateTime,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>, timestamp: OffsetDateTime) -> Self {
        Self {
            id: new_id(),
            role,
            content: content.into(),
            timestamp,
        }
    }

    /// Same identity and timestamp, new content.
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            role: self.role,
            content: content.into(),
            timestamp: self.timestamp,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatThread {
    pub id: String,
    pub title: String,
    pub created_at: OffsetDateTime,
    pub pinned: bool,
    pub archived: bool,
}

impl ChatThread {
    pub fn new(title: impl Into<String>, created_at: OffsetDateTime) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            created_at,
            pinned: false,
            archived: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Model {
    pub fn built_in(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            is_custom: false,
            api_key: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
    Device,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Dark, ThemeMode::Light, ThemeMode::Device];

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
            ThemeMode::Device => "Device",
        }
    }
}

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn current_time() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}
