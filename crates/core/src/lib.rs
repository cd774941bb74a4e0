#![forbid(unsafe_code)]

pub mod evaluator;
pub mod model;
pub mod time;

pub use evaluator::AchievementEvaluator;
pub use time::Clock;
