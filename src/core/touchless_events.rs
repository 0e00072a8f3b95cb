// Touchless events - discrete slide notifications derived from swipe scores

use tracing::info;

use crate::models::pose::Hand;
use crate::models::swipe::{SwipeScore, TouchlessEvent, TouchlessEventType};

/// Emits one event per hand whenever its score reaches full confidence.
///
/// The detector clears its accumulators on a trigger, so a single sustained
/// swipe produces exactly one event.
#[derive(Debug, Clone, Default)]
pub struct TouchlessEventEmitter {
    frame: u64,
    emitted: u64,
}

impl TouchlessEventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the score of the next frame
    pub fn observe(&mut self, score: &SwipeScore) -> Vec<TouchlessEvent> {
        self.frame += 1;

        let events: Vec<TouchlessEvent> = Hand::ALL
            .iter()
            .filter(|hand| score.is_triggered(**hand))
            .map(|hand| TouchlessEvent {
                event_type: TouchlessEventType::for_hand(*hand),
                hand: *hand,
                frame: self.frame,
            })
            .collect();

        for event in &events {
            info!(frame = event.frame, event = event.event_type.to_string(), "Touchless event");
        }
        self.emitted += events.len() as u64;

        events
    }

    /// Number of frames observed so far
    pub fn frames_observed(&self) -> u64 {
        self.frame
    }

    pub fn events_emitted(&self) -> u64 {
        self.emitted
    }
}
