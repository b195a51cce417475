//! Rose tree pairing a drawn value with its shrink alternatives.

use std::collections::VecDeque;

/// A drawn value together with the smaller values it can shrink to.
///
/// Children are ordered: the runner tries them breadth-first and keeps the
/// last one that still fails, so chains laid out least-shrunk to most-shrunk
/// converge on the minimal counterexample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    pub value: T,
    pub children: Vec<Tree<T>>,
}

impl<T> Tree<T> {
    /// Create a new tree with the given value and no shrinks.
    pub fn singleton(value: T) -> Self {
        Tree {
            value,
            children: Vec::new(),
        }
    }

    /// Create a new tree with the given value and shrink alternatives.
    pub fn with_children(value: T, children: Vec<Tree<T>>) -> Self {
        Tree { value, children }
    }

    /// Map a function over the tree values.
    pub fn map<U, F>(self, f: F) -> Tree<U>
    where
        F: Fn(T) -> U + Clone,
    {
        Tree {
            value: f(self.value),
            children: self
                .children
                .into_iter()
                .map(|child| child.map(f.clone()))
                .collect(),
        }
    }

    /// Substitute every value with a subtree of its own.
    pub fn bind<U, F>(self, f: F) -> Tree<U>
    where
        F: Fn(T) -> Tree<U> + Clone,
    {
        let Tree {
            value: new_value,
            children: new_children,
        } = f(self.value);

        let mapped_children: Vec<Tree<U>> = self
            .children
            .into_iter()
            .map(|child| child.bind(f.clone()))
            .collect();

        Tree {
            value: new_value,
            children: {
                let mut result = new_children;
                result.extend(mapped_children);
                result
            },
        }
    }

    /// All shrink values in breadth-first order.
    pub fn shrinks(&self) -> Vec<&T> {
        let mut result = Vec::new();
        let mut queue = VecDeque::new();

        for child in &self.children {
            queue.push_back(child);
        }

        while let Some(tree) = queue.pop_front() {
            result.push(&tree.value);
            for child in &tree.children {
                queue.push_back(child);
            }
        }

        result
    }

    /// Get the value from the tree.
    pub fn outcome(&self) -> &T {
        &self.value
    }

    /// Check if the tree has any shrinks.
    pub fn has_shrinks(&self) -> bool {
        !self.children.is_empty()
    }
}

impl<T> From<T> for Tree<T> {
    fn from(value: T) -> Self {
        Tree::singleton(value)
    }
}
