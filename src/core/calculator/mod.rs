pub mod contexts;
pub mod durations;
pub mod stretch;
