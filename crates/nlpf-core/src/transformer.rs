//! The fit/transform contract shared by pipeline steps.

use crate::error::Result;

/// A pipeline step that may learn state from data and then transform it.
///
/// `fit` consumes the step and hands back the fitted step. Stateless
/// adapters return `Ok(self)`. `transform` never mutates the step or its
/// input.
pub trait Transformer<In: ?Sized>: Sized {
    /// Value produced by [`transform`](Transformer::transform).
    type Output;

    /// Learn whatever state the step needs from `data`.
    fn fit(self, data: &In) -> Result<Self>;

    /// Produce a new value from `data`.
    fn transform(&self, data: &In) -> Result<Self::Output>;

    /// Fit on `data`, then transform the same `data`.
    fn fit_transform(self, data: &In) -> Result<(Self, Self::Output)> {
        let fitted = self.fit(data)?;
        let output = fitted.transform(data)?;
        Ok((fitted, output))
    }

    /// Feed this step's output into `next`.
    fn then<B>(self, next: B) -> Chain<Self, B>
    where
        B: Transformer<Self::Output>,
    {
        Chain {
            first: self,
            second: next,
        }
    }
}

/// Two transformers run back to back.
///
/// Fitting a chain fits the first step, transforms the input with it and
/// fits the second step on that intermediate value.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    /// The upstream step.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// The downstream step.
    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<In, A, B> Transformer<In> for Chain<A, B>
where
    In: ?Sized,
    A: Transformer<In>,
    B: Transformer<A::Output>,
{
    type Output = B::Output;

    fn fit(self, data: &In) -> Result<Self> {
        let (first, intermediate) = self.first.fit_transform(data)?;
        let second = self.second.fit(&intermediate)?;
        Ok(Self { first, second })
    }

    fn transform(&self, data: &In) -> Result<Self::Output> {
        let intermediate = self.first.transform(data)?;
        self.second.transform(&intermediate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Remembers the largest value seen during `fit`.
    #[derive(Debug, Default)]
    struct MaxScaler {
        max: Option<f64>,
    }

    impl Transformer<[f64]> for MaxScaler {
        type Output = Vec<f64>;

        fn fit(self, data: &[f64]) -> Result<Self> {
            Ok(Self {
                max: data.iter().copied().reduce(f64::max),
            })
        }

        fn transform(&self, data: &[f64]) -> Result<Vec<f64>> {
            let max = self.max.unwrap_or(1.0);
            Ok(data.iter().map(|v| v / max).collect())
        }
    }

    #[derive(Debug)]
    struct Sum;

    impl Transformer<Vec<f64>> for Sum {
        type Output = f64;

        fn fit(self, _data: &Vec<f64>) -> Result<Self> {
            Ok(self)
        }

        fn transform(&self, data: &Vec<f64>) -> Result<f64> {
            Ok(data.iter().sum())
        }
    }

    #[test]
    fn test_fit_transform_uses_fitted_state() {
        let (fitted, scaled) = MaxScaler::default()
            .fit_transform(&[1.0, 2.0, 4.0][..])
            .unwrap();
        assert_eq!(fitted.max, Some(4.0));
        assert_eq!(scaled, vec![0.25, 0.5, 1.0]);
    }

    #[test]
    fn test_chain_fits_and_transforms_in_order() {
        let chain = MaxScaler::default().then(Sum).fit(&[2.0, 4.0][..]).unwrap();
        assert_eq!(chain.first().max, Some(4.0));
        let total = chain.transform(&[4.0, 4.0][..]).unwrap();
        assert!((total - 2.0).abs() < f64::EPSILON);
    }
}
