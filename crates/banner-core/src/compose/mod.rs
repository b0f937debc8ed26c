mod orchestrator;
mod types;

pub use orchestrator::{compose, compose_at, compose_reported, render_banner};
pub use types::{
    ComposeRequest, ComposeStage, ComposedBanner, NoOpReporter, ProgressReporter, RenderedBanner,
};
