//! Pipeline building blocks for text preprocessing.
//!
//! - **compose**: left-to-right function composition ([`Pipeline`], [`compose!`])
//! - **transformer**: the explicit fit/transform contract ([`Transformer`])
//! - **adapters**: [`ColumnSelector`] and [`SeriesToList`], which turn a
//!   `DataFrame` column into a flat list of documents
//! - **error**: the adapter error taxonomy

pub mod adapters;
pub mod compose;
pub mod error;
pub mod transformer;

pub use adapters::{ColumnSelector, SeriesToList, text_column};
pub use compose::{Pipeline, TryPipeline, compose2, identity};
pub use error::{PipelineError, Result};
pub use transformer::{Chain, Transformer};
