//! Auto-follow versus manual scrolling for the message list.
//!
//! Scroll events are classified after a quiet period: [`ScrollCoordinator::observe`]
//! records the latest sample and returns a ticket, and the caller hands the ticket back to
//! [`ScrollCoordinator::settle`] once [`SETTLE_DELAY`] has passed. A newer sample
//! supersedes the pending one, so only the last event of a burst is classified.

use std::time::Duration;

/// Distance from the end of the content, in CSS pixels, that still counts as "at bottom".
pub const BOTTOM_THRESHOLD_PX: f64 = 10.0;
pub const SETTLE_DELAY: Duration = Duration::from_millis(150);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump without animation; used while tokens are arriving.
    Instant,
    Smooth,
}

impl ScrollBehavior {
    pub fn as_js(self) -> &'static str {
        match self {
            ScrollBehavior::Instant => "auto",
            ScrollBehavior::Smooth => "smooth",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn distance_to_bottom(&self) -> f64 {
        (self.scroll_height - self.scroll_top - self.client_height).abs()
    }

    pub fn is_at_bottom(&self) -> bool {
        self.distance_to_bottom() < BOTTOM_THRESHOLD_PX
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingClassification {
    ticket: SettleTicket,
    scrolled_up: bool,
    at_bottom: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollCoordinator {
    at_bottom: bool,
    user_has_scrolled: bool,
    last_scroll_top: f64,
    pending: Option<PendingClassification>,
    next_ticket: u64,
}

impl Default for ScrollCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollCoordinator {
    pub fn new() -> Self {
        Self {
            at_bottom: true,
            user_has_scrolled: false,
            last_scroll_top: 0.0,
            pending: None,
            next_ticket: 0,
        }
    }

    pub fn at_bottom(&self) -> bool {
        self.at_bottom
    }

    pub fn user_has_scrolled(&self) -> bool {
        self.user_has_scrolled
    }

    pub fn show_jump_button(&self) -> bool {
        !self.at_bottom
    }

    pub fn observe(&mut self, metrics: ScrollMetrics) -> SettleTicket {
        self.next_ticket += 1;
        let ticket = SettleTicket(self.next_ticket);
        let at_bottom = metrics.is_at_bottom();
        self.pending = Some(PendingClassification {
            ticket,
            scrolled_up: self.last_scroll_top > metrics.scroll_top,
            at_bottom,
        });
        self.last_scroll_top = metrics.scroll_top;
        self.at_bottom = at_bottom;
        ticket
    }

    /// Apply the classification for `ticket` if no newer sample replaced it.
    pub fn settle(&mut self, ticket: SettleTicket) -> bool {
        let Some(pending) = self.pending.filter(|pending| pending.ticket == ticket) else {
            return false;
        };
        self.pending = None;
        if pending.scrolled_up {
            self.user_has_scrolled = true;
        }
        // Arriving at the bottom overrides any upward motion before it.
        if pending.at_bottom {
            self.user_has_scrolled = false;
        }
        true
    }

    /// How to scroll after the content changed, or `None` to leave the view alone.
    pub fn follow_behavior(&self) -> Option<ScrollBehavior> {
        (!self.user_has_scrolled).then_some(ScrollBehavior::Instant)
    }

    /// The user asked to go back to the latest message.
    pub fn jump_to_bottom(&mut self) -> ScrollBehavior {
        self.mark_at_bottom();
        ScrollBehavior::Smooth
    }

    /// A programmatic scroll to the end has been issued.
    pub fn mark_at_bottom(&mut self) {
        self.at_bottom = true;
        self.user_has_scrolled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            scroll_height: 1000.0,
            client_height: 400.0,
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(at(591.0).is_at_bottom());
        assert!(!at(590.0).is_at_bottom());
    }

    #[test]
    fn test_button_tracks_latest_sample_immediately() {
        let mut coordinator = ScrollCoordinator::new();
        assert!(!coordinator.show_jump_button());
        coordinator.observe(at(100.0));
        assert!(coordinator.show_jump_button());
        coordinator.observe(at(600.0));
        assert!(!coordinator.show_jump_button());
    }

    #[test]
    fn test_unknown_ticket_is_ignored() {
        let mut coordinator = ScrollCoordinator::new();
        let ticket = coordinator.observe(at(600.0));
        coordinator.observe(at(100.0));
        assert!(!coordinator.settle(ticket));
        assert!(!coordinator.user_has_scrolled());
    }
}
