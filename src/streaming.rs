//! Message list and the simulated token-by-token assistant reply.
//!
//! A submit appends the user's message plus an empty assistant message and hands back a
//! [`StreamTicket`]. The caller plays the ticket's [`ReplyStream`] (usually through
//! [`paced`]) and feeds each prefix back with [`ChatSession::apply`], then calls
//! [`ChatSession::finish`]. Every ticket carries a generation; anything tagged with an
//! older generation is dropped, so a torn-down or aborted stream cannot write into a
//! newer one.

use crate::timing;
use crate::types::{Message, Role, current_time};
use futures::Stream;
use std::time::Duration;

pub const TOKEN_DELAY: Duration = Duration::from_millis(30);

pub const CANNED_REPLY: &str = "A Walk Through Time: The Fascinating World of Dinosaurs

Introduction

Dinosaurs, the colossal reptiles that once roamed the Earth, continue to captivate our imaginations. These prehistoric creatures, which existed millions of years ago, have left behind a legacy of wonder and mystery. From the towering sauropods to the ferocious tyrannosaurus, dinosaurs offer a glimpse into a world vastly different from our own.

The Reign of the Dinosaurs

The dinosaur era, spanning from the Triassic period (252 to 201 million years ago) to the Cretaceous period (145 to 66 million years ago), witnessed an extraordinary diversity of life. These creatures evolved into a wide range of shapes and sizes, adapting to various environments and ecological niches.

Major Dinosaur Groups

1. Theropods: Including the famous Tyrannosaurus Rex and Velociraptor, these were mostly carnivorous bipedal dinosaurs.
2. Sauropods: Long-necked herbivores like Brachiosaurus and Diplodocus, known for their massive size.
3. Ornithischians: Plant-eaters like Stegosaurus and Triceratops, with diverse defensive adaptations.

The End of an Era

The extinction of dinosaurs, approximately 66 million years ago, marked one of the most significant events in Earth's history. While many theories exist, the prevailing explanation involves a massive asteroid impact, which led to catastrophic global changes.

Legacy and Modern Science

Today, paleontologists continue to make remarkable discoveries, using advanced technology to uncover new species and better understand dinosaur biology, behavior, and evolution. These findings help us piece together the story of life on Earth and remind us of our planet's incredible history.";

/// Produces the full text of an assistant reply.
pub trait ReplySource {
    fn reply_for(&self, prompt: &str) -> String;
}

/// Answers every prompt with [`CANNED_REPLY`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CannedReply;

impl ReplySource for CannedReply {
    fn reply_for(&self, _prompt: &str) -> String {
        CANNED_REPLY.to_string()
    }
}

/// Finite producer of ever-longer prefixes of a reply.
///
/// Tokens are split on single spaces so newlines stay attached to their words and the
/// last prefix reproduces the reply exactly.
#[derive(Clone, Debug)]
pub struct ReplyStream {
    tokens: Vec<String>,
    next: usize,
    revealed: String,
}

impl ReplyStream {
    pub fn new(text: &str) -> Self {
        let mut tokens: Vec<String> = if text.is_empty() {
            Vec::new()
        } else {
            text.split(' ').map(str::to_string).collect()
        };
        // Leading spaces ride along with the first word so no prefix is empty.
        while tokens.len() > 1 && tokens[0].is_empty() {
            tokens.remove(0);
            tokens[0].insert(0, ' ');
        }
        Self {
            tokens,
            next: 0,
            revealed: String::new(),
        }
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.tokens.len()
    }
}

impl Iterator for ReplyStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let token = self.tokens.get(self.next)?;
        if self.next > 0 {
            self.revealed.push(' ');
        }
        self.revealed.push_str(token);
        self.next += 1;
        Some(self.revealed.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.tokens.len() - self.next;
        (left, Some(left))
    }
}

/// Waits `delay` before releasing each prefix.
pub fn paced(stream: ReplyStream, delay: Duration) -> impl Stream<Item = String> {
    futures::stream::unfold(stream, move |mut stream| async move {
        if stream.is_finished() {
            return None;
        }
        timing::sleep(delay).await;
        let prefix = stream.next()?;
        Some((prefix, stream))
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamState {
    Idle,
    Streaming { generation: u64 },
}

pub struct StreamTicket {
    pub generation: u64,
    pub stream: ReplyStream,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    messages: Vec<Message>,
    state: StreamState,
    generation: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            state: StreamState::Idle,
            generation: 0,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    pub fn is_streaming(&self) -> bool {
        matches!(self.state, StreamState::Streaming { .. })
    }

    /// Id of the assistant message currently being written, if any.
    pub fn streaming_message_id(&self) -> Option<&str> {
        if !self.is_streaming() {
            return None;
        }
        self.messages
            .last()
            .filter(|msg| msg.role == Role::Assistant)
            .map(|msg| msg.id.as_str())
    }

    pub fn submit(&mut self, content: &str, source: &dyn ReplySource) -> Option<StreamTicket> {
        let trimmed = content.trim();
        if trimmed.is_empty() || self.is_streaming() {
            tracing::debug!(streaming = self.is_streaming(), "submit ignored");
            return None;
        }

        let now = current_time();
        self.messages.push(Message::new(Role::User, trimmed, now));
        self.messages.push(Message::new(Role::Assistant, String::new(), now));

        self.generation += 1;
        let generation = self.generation;
        self.state = StreamState::Streaming { generation };

        let stream = ReplyStream::new(&source.reply_for(trimmed));
        tracing::info!(generation, tokens = stream.token_count(), "reply stream started");
        Some(StreamTicket { generation, stream })
    }

    /// Replace the streaming assistant message with one holding `prefix`.
    ///
    /// Returns `false` when `generation` is not the active stream.
    pub fn apply(&mut self, generation: u64, prefix: String) -> bool {
        if self.state != (StreamState::Streaming { generation }) {
            return false;
        }
        match self.messages.last_mut() {
            Some(last) if last.role == Role::Assistant => {
                *last = last.with_content(prefix);
                true
            }
            _ => false,
        }
    }

    pub fn finish(&mut self, generation: u64) -> bool {
        if self.state != (StreamState::Streaming { generation }) {
            return false;
        }
        self.state = StreamState::Idle;
        tracing::info!(generation, "reply stream finished");
        true
    }

    /// Stop the active stream where it is. Late updates from it are discarded.
    pub fn abort(&mut self) {
        if let StreamState::Streaming { generation } = self.state {
            tracing::debug!(generation, "reply stream aborted");
        }
        self.generation += 1;
        self.state = StreamState::Idle;
    }
}
