pub mod batch;
pub mod compose;
pub mod config;
pub mod plan;
pub mod shared;
