//! Index-aligned merging of frames that describe the same samples.

use polars::prelude::*;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Combine frames column-wise; row `i` of every frame is the same sample.
///
/// All frames must have the same height. Duplicate column names are
/// rejected by Polars. An empty slice gives an empty frame.
pub fn merge_frames(frames: &[DataFrame]) -> Result<DataFrame> {
    let Some((first, rest)) = frames.split_first() else {
        return Ok(DataFrame::empty());
    };

    let mut merged = first.clone();
    for frame in rest {
        if frame.height() != merged.height() {
            return Err(IngestError::HeightMismatch {
                expected: merged.height(),
                found: frame.height(),
            });
        }
        merged = merged.hstack(frame.get_columns())?;
    }

    debug!(
        frames = frames.len(),
        rows = merged.height(),
        columns = merged.width(),
        "merged frames"
    );
    Ok(merged)
}
