//! GPU presentation pipeline

mod blit;

pub use blit::BlitPipeline;
