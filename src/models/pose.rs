// Data models for the tracked body pose fed into swipe detection

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

// ==============================================================================
// Geometry
// ==============================================================================

/// A point in image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const ORIGIN: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ==============================================================================
// Body Keypoints (17 joints)
// ==============================================================================

/// Number of keypoints in an active pose
pub const KEYPOINT_COUNT: usize = 17;

/// Body joint indices, in the order the pose source emits them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BodyLandmark {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl BodyLandmark {
    pub const ALL: [BodyLandmark; KEYPOINT_COUNT] = [
        BodyLandmark::Nose,
        BodyLandmark::LeftEye,
        BodyLandmark::RightEye,
        BodyLandmark::LeftEar,
        BodyLandmark::RightEar,
        BodyLandmark::LeftShoulder,
        BodyLandmark::RightShoulder,
        BodyLandmark::LeftElbow,
        BodyLandmark::RightElbow,
        BodyLandmark::LeftWrist,
        BodyLandmark::RightWrist,
        BodyLandmark::LeftHip,
        BodyLandmark::RightHip,
        BodyLandmark::LeftKnee,
        BodyLandmark::RightKnee,
        BodyLandmark::LeftAnkle,
        BodyLandmark::RightAnkle,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A single tracked joint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keypoint {
    pub position: Vector2D,
    #[serde(rename = "score", alias = "confidence")]
    pub confidence: f32, // Detection confidence [0, 1]
    #[serde(default)]
    pub is_active: bool,
}

impl Keypoint {
    pub fn new(x: f32, y: f32, confidence: f32, is_active: bool) -> Self {
        Self {
            position: Vector2D::new(x, y),
            confidence,
            is_active,
        }
    }
}

// ==============================================================================
// Hands
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    /// Scoring order: left is always evaluated before right
    pub const ALL: [Hand; 2] = [Hand::Left, Hand::Right];

    pub fn opposite(self) -> Hand {
        match self {
            Hand::Left => Hand::Right,
            Hand::Right => Hand::Left,
        }
    }

    /// Direction of "toward the body" along x, expressed as the sign of
    /// `previous_x - current_x` for an inward movement.
    pub fn sign(self) -> f32 {
        match self {
            Hand::Left => 1.0,
            Hand::Right => -1.0,
        }
    }

    pub fn wrist(self) -> BodyLandmark {
        match self {
            Hand::Left => BodyLandmark::LeftWrist,
            Hand::Right => BodyLandmark::RightWrist,
        }
    }

    pub fn elbow(self) -> BodyLandmark {
        match self {
            Hand::Left => BodyLandmark::LeftElbow,
            Hand::Right => BodyLandmark::RightElbow,
        }
    }

    pub fn shoulder(self) -> BodyLandmark {
        match self {
            Hand::Left => BodyLandmark::LeftShoulder,
            Hand::Right => BodyLandmark::RightShoulder,
        }
    }

    pub fn to_string(&self) -> &'static str {
        match self {
            Hand::Left => "left",
            Hand::Right => "right",
        }
    }
}

/// Fixed two-slot table keyed by [`Hand`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerHand<T> {
    pub left: T,
    pub right: T,
}

impl<T> PerHand<T> {
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }
}

impl<T> Index<Hand> for PerHand<T> {
    type Output = T;

    fn index(&self, hand: Hand) -> &T {
        match hand {
            Hand::Left => &self.left,
            Hand::Right => &self.right,
        }
    }
}

impl<T> IndexMut<Hand> for PerHand<T> {
    fn index_mut(&mut self, hand: Hand) -> &mut T {
        match hand {
            Hand::Left => &mut self.left,
            Hand::Right => &mut self.right,
        }
    }
}

// ==============================================================================
// Active Pose
// ==============================================================================

/// The pose of the single subject currently selected for gesture control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivePose {
    pub keypoints: [Keypoint; KEYPOINT_COUNT],
    pub score: f32,
    pub center: Vector2D,
}

impl ActivePose {
    pub fn new(keypoints: [Keypoint; KEYPOINT_COUNT], score: f32, center: Vector2D) -> Self {
        Self {
            keypoints,
            score,
            center,
        }
    }

    /// Build a pose from a keypoint list, which must hold exactly one entry per joint
    pub fn from_keypoints(keypoints: Vec<Keypoint>, score: f32, center: Vector2D) -> PoseResult<Self> {
        let actual = keypoints.len();
        let keypoints: [Keypoint; KEYPOINT_COUNT] = keypoints
            .try_into()
            .map_err(|_| PoseError::InvalidKeypointCount {
                expected: KEYPOINT_COUNT,
                actual,
            })?;

        Ok(Self::new(keypoints, score, center))
    }

    pub fn keypoint(&self, landmark: BodyLandmark) -> &Keypoint {
        &self.keypoints[landmark.index()]
    }

    pub fn position(&self, landmark: BodyLandmark) -> Vector2D {
        self.keypoint(landmark).position
    }
}

// ==============================================================================
// Error Types
// ==============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PoseError {
    #[error("Invalid keypoint count: expected {expected}, got {actual}")]
    InvalidKeypointCount { expected: usize, actual: usize },
}

pub type PoseResult<T> = Result<T, PoseError>;
