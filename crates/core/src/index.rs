use std::fmt;
use std::num::NonZeroUsize;

/// Position of a person in the displayed list.
///
/// Users see one-based positions; lists are indexed from zero. Zero is not a valid one-based
/// position, so it cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index(NonZeroUsize);

impl Index {
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        NonZeroUsize::new(one_based).map(Self)
    }

    pub fn one_based(self) -> usize {
        self.0.get()
    }

    pub fn zero_based(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
