use crate::query::OverlapHit;
use crate::scene::Body;
use core::fmt;
use core::num::NonZeroUsize;
use core::slice;

/// The outcome of an overlap query: the first intersecting bodies, up to a fixed capacity.
///
/// Hits are stored in the order the bodies were scanned (registry insertion order). At most
/// [`capacity`](Self::capacity) hits are stored; any further match is only counted, so
/// [`total_matches`](Self::total_matches) is always the true number of intersecting bodies
/// and truncation can be detected with [`is_truncated`](Self::is_truncated).
///
/// A result is only produced by a query, so it can be serialized but not deserialized.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct OverlapResult {
    hits: Vec<OverlapHit>,
    capacity: NonZeroUsize,
    total_matches: usize,
}

impl OverlapResult {
    /// Creates an empty result able to hold up to `capacity` hits.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            hits: Vec::new(),
            capacity,
            total_matches: 0,
        }
    }

    /// Counts `body` as a match, storing it as a hit if there is room left.
    ///
    /// Returns `true` if the hit was stored.
    pub(crate) fn record_match(&mut self, body: &Body) -> bool {
        self.total_matches += 1;

        if self.hits.len() < self.capacity.get() {
            self.hits.push(body.to_hit());
            true
        } else {
            false
        }
    }

    /// Whether at least one body intersects the query region.
    #[inline]
    pub fn has_match(&self) -> bool {
        !self.hits.is_empty()
    }

    /// The stored hits, first-intersecting first.
    #[inline]
    pub fn hits(&self) -> &[OverlapHit] {
        &self.hits
    }

    /// Iterates through the stored hits.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, OverlapHit> {
        self.hits.iter()
    }

    /// Consumes this result, returning its stored hits.
    pub fn into_hits(self) -> Vec<OverlapHit> {
        self.hits
    }

    /// The number of stored hits. Never exceeds [`capacity`](Self::capacity).
    #[inline]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Whether no hit was stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// The maximum number of hits this result can store.
    #[inline]
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// The number of intersecting bodies, including those that did not fit.
    #[inline]
    pub fn total_matches(&self) -> usize {
        self.total_matches
    }

    /// Whether some intersecting bodies were dropped for lack of capacity.
    ///
    /// A result shorter than its capacity is never truncated.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.total_matches > self.hits.len()
    }
}

impl<'a> IntoIterator for &'a OverlapResult {
    type Item = &'a OverlapHit;
    type IntoIter = slice::Iter<'a, OverlapHit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for OverlapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_match() {
            return write!(f, "No overlap detected.");
        }

        for (i, hit) in self.hits.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{hit}")?;
        }

        if self.is_truncated() {
            write!(
                f,
                "\n({} more overlapping bodies not reported)",
                self.total_matches - self.hits.len()
            )?;
        }

        Ok(())
    }
}
