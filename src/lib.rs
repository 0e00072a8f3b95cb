pub mod core;
pub mod models;

pub use crate::core::config::{Config, ConfigError};
pub use crate::core::swipe_detector::{DetectorState, SwipeDetector};
pub use crate::core::swipe_stream::{StreamError, SwipeOutput, SwipeScores, SwipeStream};
pub use crate::core::touchless_events::TouchlessEventEmitter;
pub use crate::models::pose::{ActivePose, BodyLandmark, Hand, Keypoint, PoseError, Vector2D};
pub use crate::models::swipe::{
    SwipeConfig, SwipeConfigUpdate, SwipeDirection, SwipeScore, TouchlessEvent, TouchlessEventType,
};
