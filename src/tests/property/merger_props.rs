//! Property-based tests for the Message Merger
//!
//! Tests invariants:
//! - Non-empty texts survive in order, nothing is invented
//! - Output ids are an ordered subsequence of input ids
//! - Every turn boundary is justified by a sender change or a gap

use std::collections::HashMap;

use proptest::prelude::*;

use crate::core::dialog::{Dialog, Message};
use crate::core::preprocess::{MergerConfig, MessageMerger, PipelineStage};

const MAX_GAP: i64 = 60;

/// Messages from up to three senders with mostly increasing dates.
fn arb_messages() -> impl Strategy<Value = Vec<Message>> {
    prop::collection::vec((1i64..4, -10i64..120, "[a-z]{0,5}"), 0..30).prop_map(|raw| {
        let mut date = 0;
        raw.into_iter()
            .enumerate()
            .map(|(i, (from_id, delta, text))| {
                date += delta;
                Message::new(i as i64 + 1, from_id, date, text)
            })
            .collect()
    })
}

fn merge(messages: Vec<Message>) -> Vec<Message> {
    let merger = MessageMerger::new(MergerConfig {
        max_gap_secs: MAX_GAP as u64,
        ..Default::default()
    });
    merger
        .run(Dialog::new(1, "prop").with_messages(messages))
        .map(|d| d.messages)
        .unwrap_or_default()
}

proptest! {
    #[test]
    fn texts_are_preserved_in_order(messages in arb_messages()) {
        let expected: Vec<String> = messages
            .iter()
            .map(|m| m.text.clone())
            .filter(|t| !t.is_empty())
            .collect();
        let merged = merge(messages);
        let actual: Vec<String> = merged
            .iter()
            .flat_map(|m| m.text.split('\n').map(str::to_string).collect::<Vec<_>>())
            .filter(|t| !t.is_empty())
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn output_ids_are_ordered_subsequence(messages in arb_messages()) {
        let first = messages.first().map(|m| m.id);
        let count = messages.len();
        let merged = merge(messages);

        prop_assert!(merged.len() <= count);
        prop_assert_eq!(merged.first().map(|m| m.id), first);
        prop_assert!(merged.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn boundaries_are_justified(messages in arb_messages()) {
        let index: HashMap<i64, usize> =
            messages.iter().enumerate().map(|(i, m)| (m.id, i)).collect();
        let merged = merge(messages.clone());

        for turn in merged.iter().skip(1) {
            let k = index[&turn.id];
            let prev = &messages[k - 1];
            let next = &messages[k];
            let gap = next.date - prev.date;
            prop_assert!(
                prev.from_id != next.from_id || !(0..=MAX_GAP).contains(&gap),
                "messages {} and {} should have merged",
                prev.id,
                next.id
            );
        }
    }
}
