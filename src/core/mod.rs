pub mod config;
pub mod geometry;
pub mod accumulator;

// Swipe detection and its stream adapters
pub mod swipe_detector;
pub mod swipe_stream;
pub mod touchless_events;

#[cfg(test)]
pub(crate) mod test_support;
