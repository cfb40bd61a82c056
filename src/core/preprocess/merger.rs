//! Message Merger
//!
//! Joins runs of adjacent messages that form one logical turn. The policy is
//! configurable: by default a message merges into the previous one when the
//! sender matches and it arrived within `max_gap_secs` of the previous raw
//! message. The retained message keeps the id, sender and date of the first
//! message of the run.

use super::config::MergerConfig;
use super::error::PreprocessResult;
use super::stage::PipelineStage;
use crate::core::dialog::{Dialog, Message};

#[derive(Clone, Debug, Default)]
pub struct MessageMerger {
    config: MergerConfig,
}

impl MessageMerger {
    pub fn new(config: MergerConfig) -> Self {
        Self { config }
    }

    /// Whether `next` continues the turn whose latest raw message was sent
    /// at `last_date` by `turn.from_id`.
    fn continues_turn(&self, turn: &Message, last_date: i64, next: &Message) -> bool {
        if self.config.require_same_sender && turn.from_id != next.from_id {
            return false;
        }
        // Dates come straight from the store; a gap that does not fit in
        // i64 never merges.
        match next.date.checked_sub(last_date) {
            Some(gap) => gap >= 0 && gap.unsigned_abs() <= self.config.max_gap_secs,
            None => false,
        }
    }

    fn absorb(&self, turn: &mut Message, next: Message) {
        if turn.text.is_empty() {
            turn.text = next.text;
        } else if !next.text.is_empty() {
            turn.text.push_str(&self.config.separator);
            turn.text.push_str(&next.text);
        }

        // Tokens and language must describe the merged text; keep them only
        // when both sides agree on having them.
        turn.tokens = match (turn.tokens.take(), next.tokens) {
            (Some(mut head), Some(tail)) => {
                head.extend(tail);
                Some(head)
            }
            _ => None,
        };
        if turn.lang != next.lang {
            turn.lang = None;
        }
    }
}

impl PipelineStage for MessageMerger {
    fn name(&self) -> &'static str {
        "merge"
    }

    fn run(&self, mut dialog: Dialog) -> PreprocessResult<Dialog> {
        let before = dialog.messages.len();
        let mut merged: Vec<Message> = Vec::with_capacity(before);
        let mut last_date = 0;

        for msg in std::mem::take(&mut dialog.messages) {
            if let Some(turn) = merged.last_mut() {
                if self.continues_turn(turn, last_date, &msg) {
                    last_date = msg.date;
                    self.absorb(turn, msg);
                    continue;
                }
            }
            last_date = msg.date;
            merged.push(msg);
        }

        if merged.len() != before {
            log::debug!(
                "Dialog {}: merged {} messages into {}",
                dialog.id,
                before,
                merged.len()
            );
        }
        dialog.messages = merged;
        Ok(dialog)
    }
}
