//! Left-to-right function composition.
//!
//! Two flavours are provided:
//!
//! - [`compose2`] and the [`compose!`](crate::compose!) macro chain functions
//!   whose types may change at every boundary. The chain is fixed at
//!   compile time.
//! - [`Pipeline`] and [`TryPipeline`] hold a runtime list of stages that all
//!   map `T` to `T`. They are used to assemble sentence and token pipelines
//!   from configuration.
//!
//! In both cases `g = compose(f1, .., fn)` satisfies
//! `g(x) == fn(..f2(f1(x)))`, and an empty composition is the identity.
//!
//! # Example
//!
//! ```
//! use nlpf_core::compose::Pipeline;
//!
//! let pipeline = Pipeline::new()
//!     .stage(|s: String| s.to_lowercase())
//!     .stage(|s: String| s.replace("-", " "));
//!
//! assert_eq!(pipeline.apply("Well-Made FILM".to_string()), "well made film");
//! ```

use std::fmt;

use tracing::trace;

/// Returns its argument unchanged.
pub fn identity<T>(value: T) -> T {
    value
}

/// Chain two functions so that `compose2(f, g)(x) == g(f(x))`.
pub fn compose2<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |value| g(f(value))
}

/// Compose any number of functions left to right.
///
/// `compose!(f, g, h)(x)` is `h(g(f(x)))`; `compose!()` is
/// [`identity`](crate::compose::identity).
///
/// ```
/// use nlpf_core::compose;
///
/// let shout = compose!(|s: &str| s.trim().to_string(), |s: String| s.to_uppercase());
/// assert_eq!(shout("  quiet "), "QUIET");
///
/// let same = compose!();
/// assert_eq!(same(7), 7);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::compose::identity
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::compose2($f, $crate::compose!($($rest),+))
    };
}

type Stage<T> = Box<dyn Fn(T) -> T>;
type TryStage<T, E> = Box<dyn Fn(T) -> Result<T, E>>;

/// An ordered list of `T -> T` stages applied left to right.
pub struct Pipeline<T> {
    stages: Vec<Stage<T>>,
}

impl<T> Pipeline<T> {
    /// Create an empty pipeline (the identity).
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Build a pipeline from an ordered collection of stages.
    pub fn from_stages<I, F>(stages: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Fn(T) -> T + 'static,
    {
        let mut pipeline = Self::new();
        for stage in stages {
            pipeline.push(stage);
        }
        pipeline
    }

    /// Append a stage, builder style.
    #[must_use]
    pub fn stage<F>(mut self, stage: F) -> Self
    where
        F: Fn(T) -> T + 'static,
    {
        self.push(stage);
        self
    }

    /// Append a stage in place.
    pub fn push<F>(&mut self, stage: F)
    where
        F: Fn(T) -> T + 'static,
    {
        self.stages.push(Box::new(stage));
    }

    /// Run every stage in order, feeding each output into the next stage.
    pub fn apply(&self, input: T) -> T {
        self.stages
            .iter()
            .enumerate()
            .fold(input, |value, (index, stage)| {
                trace!(stage = index, "applying stage");
                stage(value)
            })
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// True when the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Turn the pipeline into a plain closure.
    pub fn into_fn(self) -> impl Fn(T) -> T {
        move |value| self.apply(value)
    }
}

impl<T> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

/// An ordered list of fallible `T -> Result<T, E>` stages.
///
/// The first stage that returns `Err` aborts the run and its error is
/// returned as is.
pub struct TryPipeline<T, E> {
    stages: Vec<TryStage<T, E>>,
}

impl<T, E> TryPipeline<T, E> {
    /// Create an empty pipeline (the identity).
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a fallible stage.
    #[must_use]
    pub fn stage<F>(mut self, stage: F) -> Self
    where
        F: Fn(T) -> Result<T, E> + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Append a stage that cannot fail.
    #[must_use]
    pub fn infallible_stage<F>(self, stage: F) -> Self
    where
        F: Fn(T) -> T + 'static,
    {
        self.stage(move |value| Ok(stage(value)))
    }

    /// Run the stages in order, stopping at the first error.
    pub fn apply(&self, input: T) -> Result<T, E> {
        self.stages
            .iter()
            .enumerate()
            .try_fold(input, |value, (index, stage)| {
                trace!(stage = index, "applying stage");
                stage(value)
            })
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// True when the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<T, E> Default for TryPipeline<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> fmt::Debug for TryPipeline<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryPipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline: Pipeline<Vec<String>> = Pipeline::new();
        let input = vec!["a".to_string(), "b".to_string()];
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.apply(input.clone()), input);
    }

    #[test]
    fn test_stages_run_left_to_right() {
        let pipeline = Pipeline::new()
            .stage(|x: i64| x + 1)
            .stage(|x: i64| x * 10);
        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.apply(2), 30);
    }

    #[test]
    fn test_compose2_changes_types() {
        let split = |s: &str| s.split('.').map(str::to_string).collect::<Vec<_>>();
        let count = |parts: Vec<String>| parts.len();
        let f = compose2(split, count);
        assert_eq!(f("a.b.c"), 3);
    }

    #[test]
    fn test_try_pipeline_stops_at_first_error() {
        let pipeline: TryPipeline<i64, String> = TryPipeline::new()
            .infallible_stage(|x| x + 1)
            .stage(|x| if x > 2 { Err(format!("too big: {x}")) } else { Ok(x) })
            .stage(|_| Err("unreachable".to_string()));

        assert_eq!(pipeline.apply(5), Err("too big: 6".to_string()));
        assert_eq!(pipeline.apply(0), Err("unreachable".to_string()));
    }

    #[test]
    fn test_debug_reports_stage_count() {
        let pipeline = Pipeline::new().stage(|x: u8| x);
        assert_eq!(format!("{pipeline:?}"), "Pipeline { stages: 1 }");
    }
}
