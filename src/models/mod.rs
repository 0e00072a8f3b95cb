// Data models for tracked poses, swipe scores, and touchless events

pub mod pose;
pub mod swipe;
