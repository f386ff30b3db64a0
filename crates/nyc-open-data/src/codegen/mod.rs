//! Python model generation.

mod context;
mod generator;
mod template;

pub use context::{DatasetContext, FieldContext, RenderContext};
pub use generator::{GenerationSummary, Generator, GeneratorConfig};
pub use template::{Chunks, render};
