//! Priority rotation
//!
//! A [`PriorityCycle`] is a [`CircularList`] seeded once with an ordered set
//! of priority levels. Asking for the successor of a level walks one link
//! forward, so the highest level wraps back to the lowest without any special
//! casing.

use std::borrow::Borrow;
use std::fmt;

use once_cell::sync::Lazy;

use crate::cycle::list::{CircularList, Iter};

/// Built-in priority levels, lowest first
pub const DEFAULT_LEVELS: [&str; 3] = ["low", "medium", "high"];

static GLOBAL_CYCLE: Lazy<PriorityCycle<&'static str>> =
    Lazy::new(|| PriorityCycle::from_seed(DEFAULT_LEVELS));

/// Immutable cycle of priority levels
///
/// Built from a seed sequence and never mutated afterwards, so a shared
/// instance can be read from any number of threads without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityCycle<T> {
    levels: CircularList<T>,
}

impl<T> PriorityCycle<T> {
    /// Build a cycle from levels in rotation order.
    ///
    /// The last level's successor is the first one.
    #[must_use]
    pub fn from_seed<I: IntoIterator<Item = T>>(seed: I) -> Self {
        Self {
            levels: seed.into_iter().collect(),
        }
    }

    /// The level that follows `current`, or `None` if `current` is not part
    /// of the cycle.
    ///
    /// `None` means "leave the priority as it is"; it is never a level.
    #[must_use]
    pub fn successor_of<Q>(&self, current: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.levels
            .find(current)
            .map(|found| found.successor().value())
    }

    /// Returns true if `level` is one of the seeded levels
    #[must_use]
    pub fn contains<Q>(&self, level: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.levels.find(level).is_some()
    }

    /// Levels in seed order
    #[must_use]
    pub fn levels(&self) -> Iter<'_, T> {
        self.levels.iter()
    }

    /// Number of seeded levels
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns true if the cycle was seeded with nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl PriorityCycle<&'static str> {
    /// The process-wide cycle over [`DEFAULT_LEVELS`], built on first use
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL_CYCLE
    }
}

/// Renders as `low -> medium -> high -> low`
impl<T: fmt::Display> fmt::Display for PriorityCycle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut levels = self.levels();
        let Some(first) = levels.next() else {
            return Ok(());
        };
        write!(f, "{first}")?;
        for level in levels {
            write!(f, " -> {level}")?;
        }
        write!(f, " -> {first}")
    }
}

/// Successor of `current` in the default low/medium/high cycle.
///
/// ```
/// use todo_priority::next_priority;
///
/// assert_eq!(next_priority("low"), Some("medium"));
/// assert_eq!(next_priority("high"), Some("low"));
/// assert_eq!(next_priority("urgent"), None);
/// ```
#[must_use]
pub fn next_priority(current: &str) -> Option<&'static str> {
    PriorityCycle::<&str>::global().successor_of(current).copied()
}
