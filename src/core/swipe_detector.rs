// Swipe detection - turns per-frame wrist movement into left/right swipe confidence

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::accumulator::HandAccumulator;
use crate::core::geometry::distance;
use crate::models::pose::{ActivePose, Hand, PerHand, Vector2D};
use crate::models::swipe::{SwipeConfig, SwipeConfigUpdate, SwipeDirection, SwipeScore};

/// Body scale assumed before the first tracked pose
const INITIAL_RELATIVE_SIZE: f32 = 10.0;

/// Where the detector ended up after the last processed frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectorState {
    /// No locked subject; accumulated evidence is decaying
    Idle,
    /// Subject locked, movement is being accumulated
    Tracking,
    /// A hand reached full confidence and all accumulators were cleared
    Triggered,
}

/// Stateful swipe detector for one tracked session.
///
/// Feed it one pose per frame, in arrival order, through [`SwipeDetector::process`].
/// The detector is not shared between streams: each consumer owns its own instance.
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    config: SwipeConfig,
    center: Option<Vector2D>,
    relative_size: f32,
    prev_wrist: PerHand<Vector2D>,
    accumulators: PerHand<HandAccumulator>,
    state: DetectorState,
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

impl SwipeDetector {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            center: None,
            relative_size: INITIAL_RELATIVE_SIZE,
            prev_wrist: PerHand::default(),
            accumulators: PerHand::default(),
            state: DetectorState::Idle,
        }
    }

    /// Create a detector with `update` merged over the default configuration
    pub fn with_update(update: &SwipeConfigUpdate) -> Self {
        Self::new(SwipeConfig::default().merged(update))
    }

    /// Merge configuration overrides; takes effect on the next frame
    pub fn set_config(&mut self, update: &SwipeConfigUpdate) {
        self.config.merge(update);
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Forget all tracking history, keeping the configuration
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    /// Process one frame. `None` means the pose source reported no active subject.
    pub fn process(&mut self, pose: Option<&ActivePose>) -> SwipeScore {
        match pose {
            Some(pose) if self.is_locked_on(pose) => {
                self.center = Some(pose.center);
                // Collapsed joints give no usable scale; keep the last one
                let relative_size = Self::relative_size_of(pose);
                if relative_size.is_finite() && relative_size > 0.0 {
                    self.relative_size = relative_size;
                } else {
                    debug!(relative_size, "Degenerate pose scale, keeping previous relative size");
                }
                self.state = DetectorState::Tracking;

                let min_movement = self.relative_size * self.config.min_movement_fraction;
                for hand in Hand::ALL {
                    self.accumulate(pose, hand, min_movement);
                }
            }
            _ => {
                if self.state != DetectorState::Idle {
                    debug!(has_pose = pose.is_some(), "Swipe subject lost, decaying accumulators");
                }
                self.state = DetectorState::Idle;
                for hand in Hand::ALL {
                    self.accumulators[hand].decay();
                }
            }
        }

        let left = self.score(Hand::Left);
        let right = self.score(Hand::Right);
        SwipeScore { left, right }
    }

    /// Whether `pose` belongs to the subject tracked so far.
    ///
    /// The first pose after construction or reset is always acquired instead
    /// of being compared against an origin center: with the initial relative
    /// size of 10 that comparison would only ever accept subjects standing
    /// within 5 units of the image origin.
    fn is_locked_on(&self, pose: &ActivePose) -> bool {
        match self.center {
            Some(center) => distance(center, pose.center) < self.center_tolerance(),
            None => true,
        }
    }

    fn center_tolerance(&self) -> f32 {
        self.config
            .center_tolerance
            .unwrap_or(self.relative_size / 2.0)
    }

    /// Longest of both upper arms and the shoulder width
    fn relative_size_of(pose: &ActivePose) -> f32 {
        let upper_arm = |hand: Hand| distance(pose.position(hand.shoulder()), pose.position(hand.elbow()));
        let shoulders = distance(
            pose.position(Hand::Left.shoulder()),
            pose.position(Hand::Right.shoulder()),
        );

        upper_arm(Hand::Left).max(upper_arm(Hand::Right)).max(shoulders)
    }

    fn accumulate(&mut self, pose: &ActivePose, hand: Hand, min_movement: f32) {
        let wrist = pose.position(hand.wrist());

        if let Some(prev) = self.prev_wrist(hand) {
            match Self::swipe_dir(pose, hand, prev, min_movement) {
                Some((direction, size)) => {
                    trace!(hand = hand.to_string(), direction = direction.to_string(), size, "Wrist movement classified");
                    self.accumulators[hand].record(direction, size, self.config.window_size);
                }
                None => self.accumulators[hand].decay(),
            }
        }

        self.prev_wrist[hand] = wrist;
    }

    /// Classify the wrist movement since the previous frame.
    ///
    /// Returns the direction and the signed horizontal delta, or `None` when
    /// the wrist is inactive or the movement is ambiguous: outward, but the
    /// wrist has not cleared the shoulder by `min_movement`.
    fn swipe_dir(
        pose: &ActivePose,
        hand: Hand,
        prev: Vector2D,
        min_movement: f32,
    ) -> Option<(SwipeDirection, f32)> {
        let wrist = pose.keypoint(hand.wrist());
        if !wrist.is_active {
            return None;
        }

        // Keypoint confidence never gates the threshold branch below, only
        // the wrist activity flag above does.
        let shoulder_x = pose.position(hand.shoulder()).x;
        let wrist_x = wrist.position.x;
        let swipe_size = prev.x - wrist_x;

        if swipe_size * hand.sign() >= 0.0 {
            return Some((SwipeDirection::In, swipe_size));
        }

        let crossed = match hand {
            Hand::Left => shoulder_x + min_movement < wrist_x,
            Hand::Right => shoulder_x - min_movement > wrist_x,
        };
        crossed.then_some((SwipeDirection::Out, swipe_size))
    }

    /// Score one hand: its own inward movement, or the other hand's outward
    /// movement across the body, relative to body size.
    fn score(&mut self, hand: Hand) -> f32 {
        let max_swipe = self.accumulators[hand]
            .window(SwipeDirection::In)
            .sum()
            .max(self.accumulators[hand.opposite()].window(SwipeDirection::Out).sum());

        if max_swipe == 0.0 {
            return 0.0;
        }

        let score = max_swipe / self.relative_size;
        if score >= 1.0 {
            debug!(hand = hand.to_string(), "Swipe triggered, clearing accumulators");
            self.clear_accumulators();
            self.state = DetectorState::Triggered;
            return 1.0;
        }
        score
    }

    fn clear_accumulators(&mut self) {
        for hand in Hand::ALL {
            self.accumulators[hand].clear();
        }
    }

    pub fn state(&self) -> DetectorState {
        self.state
    }

    pub fn relative_size(&self) -> f32 {
        self.relative_size
    }

    /// Center of the locked subject, if one was ever acquired
    pub fn center(&self) -> Option<Vector2D> {
        self.center
    }

    /// Last recorded wrist position. A wrist at x = 0 reads as never recorded.
    pub fn prev_wrist(&self, hand: Hand) -> Option<Vector2D> {
        let wrist = self.prev_wrist[hand];
        (wrist.x != 0.0).then_some(wrist)
    }

    pub fn accumulator(&self, hand: Hand) -> &HandAccumulator {
        &self.accumulators[hand]
    }
}
