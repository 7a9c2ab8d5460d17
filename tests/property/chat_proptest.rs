//! Property-based tests
//!
//! Uses proptest to check the registry, the recent-messages window and
//! input normalization over generated inputs.

use std::num::NonZeroU32;
use std::sync::Arc;

use proptest::prelude::*;
use roomchat::backend::messages::MessageLog;
use roomchat::backend::presence::PresenceRegistry;
use roomchat::backend::store::{select_visible, ChatStore, MemoryStore, MessageWindow};
use roomchat::shared::normalize::{has_markup, strip_markup};
use roomchat::shared::{Message, MessageKind};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn kind() -> impl Strategy<Value = MessageKind> {
    prop_oneof![
        Just(MessageKind::Message),
        Just(MessageKind::PrivateMessage),
        Just(MessageKind::Status),
    ]
}

fn person() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Ana".to_string()),
        Just("Bia".to_string()),
        Just("Caio".to_string()),
        Just("all".to_string()),
    ]
}

prop_compose! {
    fn message()(from in person(), to in person(), kind in kind(), text in "[a-z]{1,8}") -> Message {
        Message::new(from, to, text, kind, "12:00:00")
    }
}

proptest! {
    #[test]
    fn test_register_then_list_has_each_name_once(
        names in proptest::collection::vec("[A-Za-z]{1,6}", 1..12)
    ) {
        let rt = runtime();
        rt.block_on(async {
            let store: Arc<dyn ChatStore> = Arc::new(MemoryStore::new());
            let presence = PresenceRegistry::new(store.clone(), MessageLog::new(store));

            for name in &names {
                let first_time = !presence.contains(name).await.unwrap();
                let result = presence.register(name, 1_000).await;
                prop_assert_eq!(result.is_ok(), first_time);
            }

            let listed = presence.list().await.unwrap();
            for name in &names {
                let count = listed.iter().filter(|p| &p.name == name).count();
                prop_assert_eq!(count, 1);
            }
            Ok(())
        })?;
    }

    #[test]
    fn test_recent_window_is_tail_of_visible(
        log in proptest::collection::vec(message(), 0..40),
        viewer in person(),
        limit in 1u32..10,
    ) {
        let window = MessageWindow::Recent(NonZeroU32::new(limit).unwrap());
        let recent = select_visible(&log, &viewer, window);

        let visible: Vec<Message> = log
            .iter()
            .filter(|m| m.visible_in_recent(&viewer))
            .cloned()
            .collect();
        let start = visible.len().saturating_sub(limit as usize);

        prop_assert!(recent.len() <= limit as usize);
        prop_assert_eq!(recent, visible[start..].to_vec());
    }

    #[test]
    fn test_full_window_matches_history_predicate(
        log in proptest::collection::vec(message(), 0..40),
        viewer in person(),
    ) {
        let full = select_visible(&log, &viewer, MessageWindow::Full);
        prop_assert!(full.iter().all(|m| m.visible_in_history(&viewer)));
        prop_assert_eq!(
            full.len(),
            log.iter().filter(|m| m.visible_in_history(&viewer)).count()
        );
    }

    #[test]
    fn test_strip_markup_output_has_no_tags_or_padding(raw in ".{0,40}") {
        let cleaned = strip_markup(&raw);
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
        prop_assert!(!has_markup(&cleaned));
    }
}
