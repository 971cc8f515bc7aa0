//! Visiting orders over stops.
//!
//! A route is a snapshot: it is produced fresh by every sequencing call and
//! never mutated in place. Consumers hold it until the next recomputation
//! replaces it.

/// An ordered sequence of stop identifiers.
///
/// The sequence is always a permutation of the identifiers passed to the
/// sequencing call that produced it.
///
/// # Examples
/// ```
/// use reparto_core::Route;
///
/// let route = Route::new(vec![4, 2, 9]);
/// assert_eq!(route.stop_ids(), &[4, 2, 9]);
/// assert_eq!(route.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    stop_ids: Vec<u64>,
}

impl Route {
    /// Construct a route from an ordered list of stop identifiers.
    #[must_use]
    pub const fn new(stop_ids: Vec<u64>) -> Self {
        Self { stop_ids }
    }

    /// Construct a route with no stops.
    ///
    /// # Examples
    /// ```
    /// use reparto_core::Route;
    ///
    /// assert!(Route::empty().is_empty());
    /// ```
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            stop_ids: Vec::new(),
        }
    }

    /// The stop identifiers in visiting order.
    #[must_use]
    pub fn stop_ids(&self) -> &[u64] {
        &self.stop_ids
    }

    /// Number of stops in the route.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_ids.len()
    }

    /// Whether the route visits no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_ids.is_empty()
    }

    /// Iterate over the stop identifiers in visiting order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.stop_ids.iter().copied()
    }
}
