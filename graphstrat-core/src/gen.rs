//! Generator combinators.

use crate::{data::*, tree::*};

/// A generator for test data of type `T`.
///
/// Generators are explicit, first-class values composed with combinator
/// functions; randomness is threaded through them as an explicit [`Seed`],
/// never ambient state.
pub struct Gen<T> {
    generator: Box<dyn Fn(Size, Seed) -> Tree<T>>,
}

impl<T> std::fmt::Debug for Gen<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gen").finish_non_exhaustive()
    }
}

impl<T> Gen<T> {
    /// Create a new generator from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Size, Seed) -> Tree<T> + 'static,
    {
        Gen {
            generator: Box::new(f),
        }
    }

    /// Generate a value using the given size and seed.
    pub fn generate(&self, size: Size, seed: Seed) -> Tree<T> {
        (self.generator)(size, seed)
    }

    /// Create a generator that always produces the same value.
    pub fn constant(value: T) -> Self
    where
        T: Clone + 'static,
    {
        Gen::new(move |_size, _seed| Tree::singleton(value.clone()))
    }
}

impl<T> Gen<T>
where
    T: 'static,
{
    /// Map a function over the generated values.
    pub fn map<U, F>(self, f: F) -> Gen<U>
    where
        F: Fn(T) -> U + 'static + Clone,
        U: 'static,
    {
        Gen::new(move |size, seed| {
            let tree = self.generate(size, seed);
            tree.map(f.clone())
        })
    }

    /// Bind/flatmap for dependent generation.
    pub fn bind<U, F>(self, f: F) -> Gen<U>
    where
        F: Fn(T) -> Gen<U> + 'static,
        U: 'static,
        T: Clone,
    {
        Gen::new(move |size, seed| {
            let (seed1, seed2) = seed.split();
            let tree = self.generate(size, seed1);
            tree.bind(|value| f(value.clone()).generate(size, seed2))
        })
    }
}

impl Gen<usize> {
    /// Generate an integer in `[min, max]`, shrinking toward `min`.
    ///
    /// Constraint floors, not zero, are the natural shrink origin in this
    /// crate, so the shrink chain halves the offset above `min` and ends at
    /// `min` itself.
    pub fn usize_range(min: usize, max: usize) -> Self {
        assert!(min <= max, "usize_range requires min <= max");
        Gen::new(move |_size, seed| {
            let (value, _next) = seed.next_range(min as u64, max as u64);
            let result = value as usize;

            Tree::with_children(result, shrink_toward(min, result))
        })
    }
}

/// Shrink chain for an integer: halve the offset above `origin`, ending at
/// `origin`. Ordered least-shrunk first so the runner's last failing
/// candidate is the smallest.
pub(crate) fn shrink_toward(origin: usize, value: usize) -> Vec<Tree<usize>> {
    halving_path(origin, value)
        .into_iter()
        .map(Tree::singleton)
        .collect()
}

/// The halving descent from `value` down to `origin`, excluding `value`
/// itself and ending at `origin`. Empty when `value <= origin`.
pub(crate) fn halving_path(origin: usize, value: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut offset = value.saturating_sub(origin) / 2;
    while offset > 0 {
        path.push(origin + offset);
        offset /= 2;
    }
    if value > origin {
        path.push(origin);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usize_range_in_bounds() {
        let gen = Gen::usize_range(3, 17);
        let mut seed = Seed::from_u64(1);
        for _ in 0..500 {
            let (s, next) = seed.split();
            seed = next;
            let tree = gen.generate(Size::new(50), s);
            assert!((3..=17).contains(&tree.value));
            for shrink in tree.shrinks() {
                assert!((3..=17).contains(shrink));
            }
        }
    }

    #[test]
    fn test_shrink_chain_ends_at_origin() {
        let chain = shrink_toward(2, 11);
        let values: Vec<usize> = chain.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![6, 4, 3, 2]);

        assert!(shrink_toward(5, 5).is_empty());
    }

    #[test]
    fn test_map_applies_to_shrinks() {
        let gen = Gen::usize_range(1, 8).map(|n| n * 10);
        let tree = gen.generate(Size::new(0), Seed::from_u64(3));
        assert_eq!(tree.value % 10, 0);
        assert!(tree.shrinks().iter().all(|v| *v % 10 == 0));
    }

    #[test]
    fn test_constant_has_no_shrinks() {
        let gen = Gen::constant(9usize);
        let tree = gen.generate(Size::new(100), Seed::from_u64(4));
        assert_eq!(tree.value, 9);
        assert!(!tree.has_shrinks());
    }
}
