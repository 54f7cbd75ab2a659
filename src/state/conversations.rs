use crate::types::ChatThread;
use time::{Duration, OffsetDateTime};

/// Recent threads shown before "Load more" is used.
pub const INITIAL_VISIBLE_RECENT: usize = 6;
/// How many more recent threads each "Load more" reveals.
pub const LOAD_MORE_STEP: usize = 20;

pub const NEW_CHAT_TITLE: &str = "New Chat";

const SEED_TITLES: [&str; 4] = [
    "Dinosaur Essay and Discussion",
    "Gemini Introduces Itself",
    "Secure Password Hashing in ...",
    "A Poem for Mr. Mystery",
];

/// The sidebar's thread list.
///
/// Threads are kept newest-first. The pinned and archived flags are independent; for
/// display, archived wins over pinned and pinned wins over recent, so every thread lands
/// in exactly one group.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversationStore {
    threads: Vec<ChatThread>,
    visible_recent: usize,
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationStore {
    pub fn new() -> Self {
        Self {
            threads: Vec::new(),
            visible_recent: INITIAL_VISIBLE_RECENT,
        }
    }

    /// Store holding the sample threads every fresh session starts with.
    pub fn seeded(now: OffsetDateTime) -> Self {
        let mut store = Self::new();
        for (age_secs, title) in (1..=SEED_TITLES.len() as i64).rev().zip(SEED_TITLES) {
            store.insert(ChatThread::new(title, now - Duration::seconds(age_secs)));
        }
        store
    }

    pub fn threads(&self) -> &[ChatThread] {
        &self.threads
    }

    pub fn get(&self, id: &str) -> Option<&ChatThread> {
        self.threads.iter().find(|thread| thread.id == id)
    }

    pub fn create(&mut self, title: impl Into<String>, now: OffsetDateTime) -> String {
        let thread = ChatThread::new(title, now);
        let id = thread.id.clone();
        self.insert(thread);
        id
    }

    pub fn insert(&mut self, thread: ChatThread) {
        tracing::debug!(id = %thread.id, "adding chat thread");
        self.threads.insert(0, thread);
    }

    pub fn delete(&mut self, id: &str) {
        self.threads.retain(|thread| thread.id != id);
    }

    pub fn pin(&mut self, id: &str) {
        self.update(id, |thread| thread.pinned = true);
    }

    pub fn unpin(&mut self, id: &str) {
        self.update(id, |thread| thread.pinned = false);
    }

    pub fn archive(&mut self, id: &str) {
        self.update(id, |thread| thread.archived = true);
    }

    pub fn unarchive(&mut self, id: &str) {
        self.update(id, |thread| thread.archived = false);
    }

    /// Returns `false` and leaves the title alone when `title` is blank.
    pub fn rename(&mut self, id: &str, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            tracing::debug!(id, "ignoring blank rename");
            return false;
        }
        self.update(id, |thread| thread.title = title.to_string())
    }

    pub fn pinned(&self) -> Vec<&ChatThread> {
        self.threads
            .iter()
            .filter(|thread| thread.pinned && !thread.archived)
            .collect()
    }

    /// Recent threads inside the visible window.
    pub fn recent(&self) -> Vec<&ChatThread> {
        self.recent_iter().take(self.visible_recent).collect()
    }

    pub fn recent_total(&self) -> usize {
        self.recent_iter().count()
    }

    pub fn has_more_recent(&self) -> bool {
        self.recent_total() > self.visible_recent
    }

    pub fn visible_recent(&self) -> usize {
        self.visible_recent
    }

    pub fn archived(&self) -> Vec<&ChatThread> {
        self.threads.iter().filter(|thread| thread.archived).collect()
    }

    /// Grow the recent window by [`LOAD_MORE_STEP`], capped at the number of recent threads.
    pub fn load_more(&mut self) {
        self.visible_recent = (self.visible_recent + LOAD_MORE_STEP).min(self.recent_total());
    }

    fn recent_iter(&self) -> impl Iterator<Item = &ChatThread> {
        self.threads
            .iter()
            .filter(|thread| !thread.pinned && !thread.archived)
    }

    fn update(&mut self, id: &str, apply: impl FnOnce(&mut ChatThread)) -> bool {
        match self.threads.iter_mut().find(|thread| thread.id == id) {
            Some(thread) => {
                apply(thread);
                true
            }
            None => false,
        }
    }
}
