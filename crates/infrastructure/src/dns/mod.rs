pub mod engine;
pub mod forwarding;
pub mod iterative;
pub mod record_format;
pub mod transport;

pub use engine::HickoryResolutionEngine;
pub use iterative::IterativeResolver;
