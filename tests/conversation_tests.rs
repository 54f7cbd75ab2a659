//! Integration tests for the sidebar's conversation store and model registry

use lumen::state::conversations::{INITIAL_VISIBLE_RECENT, LOAD_MORE_STEP, NEW_CHAT_TITLE};
use lumen::state::{ConversationStore, ModelRegistry};
use lumen::types::{Model, current_time};

fn titles(threads: Vec<&lumen::types::ChatThread>) -> Vec<String> {
    threads.into_iter().map(|thread| thread.title.clone()).collect()
}

fn store_with(count: usize) -> ConversationStore {
    let mut store = ConversationStore::new();
    let now = current_time();
    for n in 0..count {
        store.create(format!("Thread {n}"), now);
    }
    store
}

mod grouping_tests {
    use super::*;

    #[test]
    fn test_seeded_store_lists_newest_first() {
        let store = ConversationStore::seeded(current_time());
        let recent = titles(store.recent());
        assert_eq!(recent.len(), 4);
        assert_eq!(recent[0], "A Poem for Mr. Mystery");
        assert_eq!(recent[3], "Dinosaur Essay and Discussion");
        assert!(store.pinned().is_empty());
        assert!(store.archived().is_empty());
    }

    #[test]
    fn test_new_chat_goes_to_the_top() {
        let mut store = ConversationStore::seeded(current_time());
        let id = store.create(NEW_CHAT_TITLE, current_time());
        assert_eq!(store.recent()[0].id, id);
        assert_eq!(store.recent()[0].title, NEW_CHAT_TITLE);
    }

    #[test]
    fn test_pin_moves_thread_out_of_recent() {
        let mut store = ConversationStore::seeded(current_time());
        let id = store.recent()[1].id.clone();

        store.pin(&id);
        assert_eq!(store.pinned().len(), 1);
        assert!(store.recent().iter().all(|thread| thread.id != id));

        store.unpin(&id);
        assert!(store.pinned().is_empty());
        assert!(store.recent().iter().any(|thread| thread.id == id));
    }

    #[test]
    fn test_archived_thread_leaves_pinned_group() {
        let mut store = ConversationStore::seeded(current_time());
        let id = store.recent()[0].id.clone();

        store.pin(&id);
        store.archive(&id);
        assert!(store.pinned().is_empty());
        assert_eq!(titles(store.archived()), vec!["A Poem for Mr. Mystery"]);

        // Unarchiving restores the pin it had before
        store.unarchive(&id);
        assert_eq!(store.pinned()[0].id, id);
    }

    #[test]
    fn test_every_thread_lands_in_one_group() {
        let mut store = ConversationStore::seeded(current_time());
        let ids: Vec<String> = store.threads().iter().map(|t| t.id.clone()).collect();
        store.pin(&ids[0]);
        store.archive(&ids[1]);
        store.pin(&ids[2]);
        store.archive(&ids[2]);

        let shown = store.pinned().len() + store.recent().len() + store.archived().len();
        assert_eq!(shown, store.threads().len());
    }
}

mod mutation_tests {
    use super::*;

    #[test]
    fn test_rename_sets_new_title() {
        let mut store = ConversationStore::seeded(current_time());
        let id = store.recent()[0].id.clone();
        let others: Vec<_> = store
            .threads()
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();

        assert!(store.rename(&id, "New Title"));
        assert_eq!(store.get(&id).map(|t| t.title.as_str()), Some("New Title"));

        let after: Vec<_> = store
            .threads()
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();
        assert_eq!(after, others);
    }

    #[test]
    fn test_rename_to_blank_is_rejected() {
        let mut store = ConversationStore::seeded(current_time());
        let id = store.recent()[0].id.clone();
        assert!(!store.rename(&id, ""));
        assert!(!store.rename(&id, "   "));
        assert_eq!(
            store.get(&id).map(|t| t.title.as_str()),
            Some("A Poem for Mr. Mystery")
        );
    }

    #[test]
    fn test_rename_unknown_id_is_rejected() {
        let mut store = ConversationStore::seeded(current_time());
        let before = store.clone();
        assert!(!store.rename("missing", "Anything"));
        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = ConversationStore::seeded(current_time());
        let id = store.recent()[2].id.clone();
        store.delete(&id);
        assert_eq!(store.threads().len(), 3);
        store.delete(&id);
        assert_eq!(store.threads().len(), 3);
        assert!(store.get(&id).is_none());
    }

    #[test]
    fn test_flag_changes_on_unknown_id_do_nothing() {
        let mut store = ConversationStore::seeded(current_time());
        let before = store.clone();
        store.pin("missing");
        store.archive("missing");
        assert_eq!(store, before);
    }
}

mod windowing_tests {
    use super::*;

    #[test]
    fn test_recent_window_starts_small() {
        let store = store_with(INITIAL_VISIBLE_RECENT + 4);
        assert_eq!(store.recent().len(), INITIAL_VISIBLE_RECENT);
        assert!(store.has_more_recent());
    }

    #[test]
    fn test_load_more_is_capped_by_thread_count() {
        let mut store = store_with(INITIAL_VISIBLE_RECENT + 4);
        store.load_more();
        assert_eq!(store.visible_recent(), INITIAL_VISIBLE_RECENT + 4);
        assert!(!store.has_more_recent());

        store.load_more();
        assert_eq!(store.visible_recent(), INITIAL_VISIBLE_RECENT + 4);
    }

    #[test]
    fn test_load_more_steps_through_long_lists() {
        let total = INITIAL_VISIBLE_RECENT + LOAD_MORE_STEP + 5;
        let mut store = store_with(total);
        store.load_more();
        assert_eq!(store.recent().len(), INITIAL_VISIBLE_RECENT + LOAD_MORE_STEP);
        store.load_more();
        assert_eq!(store.recent().len(), total);
    }

    #[test]
    fn test_load_more_caps_a_short_list() {
        let mut store = store_with(3);
        store.load_more();
        assert_eq!(store.visible_recent(), 3);
        assert_eq!(store.recent().len(), 3);
        assert!(!store.has_more_recent());
    }

    #[test]
    fn test_load_more_ignores_pinned_and_archived() {
        let mut store = store_with(INITIAL_VISIBLE_RECENT + 2);
        let ids: Vec<String> = store.threads().iter().map(|t| t.id.clone()).collect();
        store.pin(&ids[0]);
        store.archive(&ids[1]);
        store.load_more();
        assert_eq!(store.visible_recent(), INITIAL_VISIBLE_RECENT);
        assert!(!store.has_more_recent());
    }
}

mod model_tests {
    use super::*;

    #[test]
    fn test_default_selection_is_first_built_in() {
        let registry = ModelRegistry::default();
        assert_eq!(registry.selected().id, "gemini-pro");
        assert_eq!(registry.models().len(), 3);
    }

    #[test]
    fn test_select_known_model() {
        let mut registry = ModelRegistry::default();
        assert!(registry.select("gemini-ultra"));
        assert!(registry.is_selected("gemini-ultra"));
    }

    #[test]
    fn test_select_unknown_model_keeps_selection() {
        let mut registry = ModelRegistry::default();
        registry.select("gemini-pro-vision");
        assert!(!registry.select("gpt-unknown"));
        assert_eq!(registry.selected().id, "gemini-pro-vision");
    }

    #[test]
    fn test_custom_models_are_appended_and_selectable() {
        let mut registry = ModelRegistry::default();
        let mut local = Model::built_in("local-llm", "Local LLM");
        local.api_key = Some("secret".to_string());
        registry.add_custom(local);

        let added = registry.models().last().expect("custom model");
        assert!(added.is_custom);
        assert_eq!(added.api_key.as_deref(), Some("secret"));
        assert!(registry.select("local-llm"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let registry = ModelRegistry::default();
        let names: Vec<_> = registry.search("VISION").into_iter().map(|m| m.id.as_str()).collect();
        assert_eq!(names, vec!["gemini-pro-vision"]);
        assert!(registry.search("claude").is_empty());
        assert_eq!(registry.search("").len(), 3);
    }
}
