//! # Element Aggregators
//!
//! An [`Aggregator`] folds a stream of elements into a single accumulated
//! result, starting from an identity seed. Closures cannot carry the seed,
//! so [`FnAggregator`] pairs a cloneable seed with a fold closure.

/// Folds elements into an accumulated result.
pub trait Aggregator<T, A> {
    /// The seed value the fold starts from.
    fn identity(&self) -> A;

    /// Fold one element into the accumulator.
    fn aggregate(&self, acc: A, item: &T) -> A;
}

/// Aggregator built from a seed value and a fold closure.
#[derive(Debug, Clone)]
pub struct FnAggregator<A, F> {
    seed: A,
    fold: F,
}

impl<A, F> FnAggregator<A, F> {
    /// Create an aggregator from a seed and a fold closure.
    pub fn new<T>(seed: A, fold: F) -> Self
    where
        A: Clone,
        F: Fn(A, &T) -> A,
    {
        Self { seed, fold }
    }
}

impl<T, A, F> Aggregator<T, A> for FnAggregator<A, F>
where
    A: Clone,
    F: Fn(A, &T) -> A,
{
    fn identity(&self) -> A {
        self.seed.clone()
    }

    fn aggregate(&self, acc: A, item: &T) -> A {
        (self.fold)(acc, item)
    }
}
