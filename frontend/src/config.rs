use log::Level;

use crate::motion::typewriter::TypewriterConfig;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Observer attach/detach chatter while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Timings shared by every section.
pub struct MotionConfig {
    pub typewriter: TypewriterConfig,
    pub count_up_ms: u32,
    pub count_up_frame_ms: u32,
    pub reveal_threshold: f64,
    pub stagger_s: f64,
}

pub const MOTION: MotionConfig = MotionConfig {
    typewriter: TypewriterConfig {
        type_ms: 80,
        delete_ms: 50,
        delay_ms: 2000,
        looping: true,
    },
    count_up_ms: 2500,
    count_up_frame_ms: 16,
    reveal_threshold: 0.2,
    stagger_s: 0.2,
};
