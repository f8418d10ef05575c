//! Weighted quick-union over a payload vector.
//!
//! Indices `0..len` identify the payloads handed to the constructor; unions
//! connect indices, and [`UnionFind::groups`] recovers the final partition
//! as lists of payload references. Union by size plus path halving during
//! lookups keeps the trees near-flat, so finds run in effectively constant
//! time.

use std::collections::HashMap;

use thiserror::Error;

/// Errors from disjoint-set operations.
#[derive(Error, Debug)]
pub enum UnionFindError {
    /// An element index fell outside the constructed range.
    #[error("index {0} is out of bounds for a disjoint-set of {1} elements")]
    IndexOutOfRange(usize, usize),
}

/// Disjoint-set forest tracking connectivity between indexed payloads.
///
/// # Examples
///
/// ```rust
/// use rect_group::UnionFind;
///
/// let mut components = UnionFind::new(vec!["a", "b", "c"]);
/// assert_eq!(components.count(), 3);
///
/// components.union(0, 2).unwrap();
/// assert!(components.connected(0, 2).unwrap());
/// assert_eq!(components.count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    parent: Vec<usize>,
    size: Vec<usize>,
    payloads: Vec<T>,
    count: usize,
}

impl<T> UnionFind<T> {
    /// Create a forest of singletons, one per payload.
    ///
    /// Element `i` starts as the root of its own component and holds
    /// `payloads[i]`.
    pub fn new(payloads: Vec<T>) -> Self {
        let n = payloads.len();
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            payloads,
            count: n,
        }
    }

    /// Number of elements in the forest.
    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    /// Whether the forest holds no elements.
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    /// Number of disjoint components remaining.
    pub fn count(&self) -> usize {
        self.count
    }

    fn validate(&self, index: usize) -> Result<(), UnionFindError> {
        if index >= self.len() {
            return Err(UnionFindError::IndexOutOfRange(index, self.len()));
        }
        Ok(())
    }

    /// Walk parent links to the root, halving the path on the way up.
    fn find_root(&mut self, mut index: usize) -> usize {
        while index != self.parent[index] {
            self.parent[index] = self.parent[self.parent[index]];
            index = self.parent[index];
        }
        index
    }

    /// Resolve the component root for `index`.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::IndexOutOfRange`] when `index` was not part
    /// of the constructed range.
    pub fn find(&mut self, index: usize) -> Result<usize, UnionFindError> {
        self.validate(index)?;
        Ok(self.find_root(index))
    }

    /// Check whether two elements share a component.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::IndexOutOfRange`] when either index was not
    /// part of the constructed range.
    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Join the components containing `p` and `q`.
    ///
    /// Returns `true` when the call merged two components and `false` when
    /// the elements were already connected. The smaller tree is attached
    /// below the larger; on equal sizes `q`'s root goes below `p`'s.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::IndexOutOfRange`] when either index was not
    /// part of the constructed range.
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;
        if root_p == root_q {
            return Ok(false);
        }

        if self.size[root_p] < self.size[root_q] {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        } else {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        }
        self.count -= 1;
        Ok(true)
    }

    /// Collect the current partition as root index to member payloads.
    ///
    /// Members appear in ascending element order within each group, and
    /// every element shows up in exactly one group.
    pub fn groups(&mut self) -> HashMap<usize, Vec<&T>> {
        // Resolve every root before handing out payload references.
        let roots: Vec<usize> = (0..self.len()).map(|index| self.find_root(index)).collect();

        let mut groups: HashMap<usize, Vec<&T>> = HashMap::new();
        for (index, root) in roots.into_iter().enumerate() {
            groups.entry(root).or_default().push(&self.payloads[index]);
        }
        groups
    }
}
