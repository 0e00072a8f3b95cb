// Data models for swipe scores, detector configuration, and touchless events

use serde::{Deserialize, Serialize};

use super::pose::Hand;

// ==============================================================================
// Swipe Score
// ==============================================================================

/// Per-hand swipe confidence for one frame, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SwipeScore {
    pub left: f32,
    pub right: f32,
}

impl SwipeScore {
    pub const ZERO: SwipeScore = SwipeScore { left: 0.0, right: 0.0 };

    pub fn get(&self, hand: Hand) -> f32 {
        match hand {
            Hand::Left => self.left,
            Hand::Right => self.right,
        }
    }

    /// A score of 1 means the gesture fired on this frame
    pub fn is_triggered(&self, hand: Hand) -> bool {
        self.get(hand) >= 1.0
    }
}

/// Wrist movement relative to the body center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    In,
    Out,
}

impl SwipeDirection {
    pub fn opposite(self) -> SwipeDirection {
        match self {
            SwipeDirection::In => SwipeDirection::Out,
            SwipeDirection::Out => SwipeDirection::In,
        }
    }

    pub fn to_string(&self) -> &'static str {
        match self {
            SwipeDirection::In => "in",
            SwipeDirection::Out => "out",
        }
    }
}

// ==============================================================================
// Configuration
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeConfig {
    pub center_tolerance: Option<f32>, // Max center drift before the subject counts as lost (default: relative size / 2)
    pub window_size: usize,            // Accumulator capacity per hand and direction (default: 9)
    pub min_movement_fraction: f32,    // Share of relative size that counts as decisive movement (default: 0.1)
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            center_tolerance: None,
            window_size: 9,
            min_movement_fraction: 0.1,
        }
    }
}

impl SwipeConfig {
    /// Overwrite every field that the update sets. Values are taken as-is.
    pub fn merge(&mut self, update: &SwipeConfigUpdate) {
        if let Some(center_tolerance) = update.center_tolerance {
            self.center_tolerance = Some(center_tolerance);
        }
        if let Some(window_size) = update.window_size {
            self.window_size = window_size;
        }
        if let Some(min_movement_fraction) = update.min_movement_fraction {
            self.min_movement_fraction = min_movement_fraction;
        }
    }

    pub fn merged(mut self, update: &SwipeConfigUpdate) -> Self {
        self.merge(update);
        self
    }
}

/// Partial swipe configuration; unset fields keep their current value
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_tolerance: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_movement_fraction: Option<f32>,
}

// ==============================================================================
// Touchless Events
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchlessEventType {
    SlideLeft,
    SlideRight,
}

impl TouchlessEventType {
    pub fn for_hand(hand: Hand) -> Self {
        match hand {
            Hand::Left => TouchlessEventType::SlideLeft,
            Hand::Right => TouchlessEventType::SlideRight,
        }
    }

    pub fn to_string(&self) -> &'static str {
        match self {
            TouchlessEventType::SlideLeft => "SlideLeft",
            TouchlessEventType::SlideRight => "SlideRight",
        }
    }
}

/// A discrete gesture notification derived from a triggered swipe score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchlessEvent {
    #[serde(rename = "type")]
    pub event_type: TouchlessEventType,
    pub hand: Hand,
    pub frame: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_config_default() {
        let config = SwipeConfig::default();
        assert_eq!(config.center_tolerance, None);
        assert_eq!(config.window_size, 9);
        assert_eq!(config.min_movement_fraction, 0.1);
    }

    #[test]
    fn test_merge_overrides_only_set_fields() {
        let mut config = SwipeConfig::default();
        config.merge(&SwipeConfigUpdate {
            window_size: Some(4),
            ..Default::default()
        });
        assert_eq!(config.window_size, 4);
        assert_eq!(config.min_movement_fraction, 0.1);
        assert_eq!(config.center_tolerance, None);

        // Last write wins, no range checks
        let config = config
            .merged(&SwipeConfigUpdate {
                center_tolerance: Some(-3.0),
                window_size: Some(0),
                min_movement_fraction: Some(2.5),
            })
            .merged(&SwipeConfigUpdate {
                window_size: Some(12),
                ..Default::default()
            });
        assert_eq!(config.center_tolerance, Some(-3.0));
        assert_eq!(config.window_size, 12);
        assert_eq!(config.min_movement_fraction, 2.5);
    }

    #[test]
    fn test_update_deserializes_partial_json() {
        let update: SwipeConfigUpdate = serde_json::from_str(r#"{"window_size":5}"#).unwrap();
        assert_eq!(update.window_size, Some(5));
        assert_eq!(update.center_tolerance, None);
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"window_size":5}"#);
    }

    #[test]
    fn test_score_trigger() {
        let score = SwipeScore { left: 1.0, right: 0.4 };
        assert!(score.is_triggered(Hand::Left));
        assert!(!score.is_triggered(Hand::Right));
        assert_eq!(score.get(Hand::Right), 0.4);
        assert_eq!(TouchlessEventType::for_hand(Hand::Right), TouchlessEventType::SlideRight);
    }
}
