//! Integration tests for the message list scroll coordinator

use lumen::scroll::{BOTTOM_THRESHOLD_PX, ScrollBehavior, ScrollCoordinator, ScrollMetrics};

fn at(scroll_top: f64) -> ScrollMetrics {
    ScrollMetrics {
        scroll_top,
        scroll_height: 2000.0,
        client_height: 500.0,
    }
}

const BOTTOM: f64 = 1500.0;

mod classification_tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert!(at(BOTTOM - BOTTOM_THRESHOLD_PX + 1.0).is_at_bottom());
        assert!(!at(BOTTOM - BOTTOM_THRESHOLD_PX).is_at_bottom());
    }

    #[test]
    fn test_fresh_coordinator_follows_content() {
        let coordinator = ScrollCoordinator::new();
        assert!(coordinator.at_bottom());
        assert!(!coordinator.user_has_scrolled());
        assert!(!coordinator.show_jump_button());
        assert_eq!(coordinator.follow_behavior(), Some(ScrollBehavior::Instant));
    }

    #[test]
    fn test_upward_scroll_stops_following() {
        let mut coordinator = ScrollCoordinator::new();
        coordinator.observe(at(BOTTOM));
        let ticket = coordinator.observe(at(900.0));

        assert!(!coordinator.at_bottom());
        assert!(coordinator.show_jump_button());
        assert!(coordinator.settle(ticket));
        assert!(coordinator.user_has_scrolled());
        assert_eq!(coordinator.follow_behavior(), None);
    }

    #[test]
    fn test_burst_ending_at_bottom_resumes_following() {
        let mut coordinator = ScrollCoordinator::new();
        coordinator.observe(at(BOTTOM));
        let first = coordinator.observe(at(1200.0));
        coordinator.observe(at(1100.0));
        let last = coordinator.observe(at(BOTTOM));

        // Superseded samples never classify
        assert!(!coordinator.settle(first));
        assert!(coordinator.settle(last));
        assert!(!coordinator.user_has_scrolled());
        assert!(coordinator.at_bottom());
    }

    #[test]
    fn test_returning_to_bottom_clears_scrolled_flag() {
        let mut coordinator = ScrollCoordinator::new();
        coordinator.observe(at(BOTTOM));
        let up = coordinator.observe(at(700.0));
        coordinator.settle(up);
        assert!(coordinator.user_has_scrolled());
        assert_eq!(coordinator.follow_behavior(), None);

        let down = coordinator.observe(at(BOTTOM));
        assert!(coordinator.settle(down));
        assert!(!coordinator.user_has_scrolled());
        assert_eq!(coordinator.follow_behavior(), Some(ScrollBehavior::Instant));
    }

    #[test]
    fn test_upward_nudge_inside_threshold_stays_at_bottom() {
        let mut coordinator = ScrollCoordinator::new();
        coordinator.observe(at(1505.0));
        let ticket = coordinator.observe(at(1498.0));
        assert!(coordinator.at_bottom());
        assert!(coordinator.settle(ticket));
        assert!(!coordinator.user_has_scrolled());
    }

    #[test]
    fn test_settling_twice_is_ignored() {
        let mut coordinator = ScrollCoordinator::new();
        let ticket = coordinator.observe(at(200.0));
        assert!(coordinator.settle(ticket));
        assert!(!coordinator.settle(ticket));
    }

    #[test]
    fn test_downward_scroll_short_of_bottom_keeps_state() {
        let mut coordinator = ScrollCoordinator::new();
        let ticket = coordinator.observe(at(400.0));
        coordinator.settle(ticket);
        assert!(!coordinator.user_has_scrolled());
        assert!(coordinator.show_jump_button());
    }
}

mod jump_tests {
    use super::*;

    #[test]
    fn test_jump_to_bottom_clears_both_flags() {
        let mut coordinator = ScrollCoordinator::new();
        coordinator.observe(at(BOTTOM));
        let ticket = coordinator.observe(at(100.0));
        coordinator.settle(ticket);

        assert_eq!(coordinator.jump_to_bottom(), ScrollBehavior::Smooth);
        assert!(coordinator.at_bottom());
        assert!(!coordinator.user_has_scrolled());
        assert_eq!(coordinator.follow_behavior(), Some(ScrollBehavior::Instant));
    }

    #[test]
    fn test_behaviors_map_to_dom_values() {
        assert_eq!(ScrollBehavior::Instant.as_js(), "auto");
        assert_eq!(ScrollBehavior::Smooth.as_js(), "smooth");
    }
}
