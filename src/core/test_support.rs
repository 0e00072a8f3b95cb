// Pose fixtures shared by the detector and stream tests

use crate::models::pose::{ActivePose, BodyLandmark, Keypoint, Vector2D, KEYPOINT_COUNT};

pub(crate) const SHOULDER_Y: f32 = 100.0;
pub(crate) const LEFT_SHOULDER_X: f32 = 70.0;
pub(crate) const RIGHT_SHOULDER_X: f32 = -30.0;

/// Standing subject whose relative size is exactly 100: shoulders 100 apart,
/// upper arms 50 long. Wrists sit at the given x positions.
pub(crate) fn pose_with(left_wrist_x: f32, right_wrist_x: f32) -> ActivePose {
    let mut keypoints = [Keypoint::new(20.0, 50.0, 0.9, true); KEYPOINT_COUNT];
    let mut place = |landmark: BodyLandmark, x: f32, y: f32| {
        keypoints[landmark.index()] = Keypoint::new(x, y, 0.9, true);
    };

    place(BodyLandmark::LeftShoulder, LEFT_SHOULDER_X, SHOULDER_Y);
    place(BodyLandmark::RightShoulder, RIGHT_SHOULDER_X, SHOULDER_Y);
    place(BodyLandmark::LeftElbow, LEFT_SHOULDER_X, SHOULDER_Y + 50.0);
    place(BodyLandmark::RightElbow, RIGHT_SHOULDER_X, SHOULDER_Y + 50.0);
    place(BodyLandmark::LeftWrist, left_wrist_x, SHOULDER_Y + 80.0);
    place(BodyLandmark::RightWrist, right_wrist_x, SHOULDER_Y + 80.0);

    ActivePose::new(keypoints, 0.9, Vector2D::new(20.0, 150.0))
}

pub(crate) fn shifted(mut pose: ActivePose, dx: f32) -> ActivePose {
    pose.center.x += dx;
    pose
}

pub(crate) fn with_keypoint(mut pose: ActivePose, landmark: BodyLandmark, keypoint: Keypoint) -> ActivePose {
    pose.keypoints[landmark.index()] = keypoint;
    pose
}
