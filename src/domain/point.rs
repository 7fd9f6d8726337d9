use std::fmt;

/// A non-negative integer identifying a point a group acts on.
///
/// `Point` is a thin wrapper so that point arithmetic can't accidentally mix
/// with unrelated `usize` quantities (orbit sizes, word lengths, ...).
/// Ordering is by the wrapped integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point(pub usize);

impl Point {
    /// The point `0`.
    pub const ZERO: Point = Point(0);

    /// The underlying 0-based integer.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for Point {
    fn from(value: usize) -> Self {
        Point(value)
    }
}

impl From<Point> for usize {
    fn from(value: Point) -> Self {
        value.0
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The convention used to translate a point to/from user-facing text.
///
/// Internal representations are always 0-based; this only affects how a
/// caller's literals (e.g. in [`crate::perm::export::CyclePermutation`])
/// round-trip to and from the wrapped `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointConvention {
    /// User-facing literals are already 0-based.
    ZeroBased,
    /// User-facing literals are 1-based; point `1` is internal point `0`.
    OneBased,
}

impl PointConvention {
    /// Translate a user-facing literal into an internal 0-based point.
    ///
    /// Panics if `OneBased` is used with a literal of `0`, which has no
    /// internal representative under that convention. Caller-supplied
    /// literals should go through [`PointConvention::try_to_internal`]
    /// instead.
    pub fn to_internal(self, literal: usize) -> usize {
        match self {
            PointConvention::ZeroBased => literal,
            PointConvention::OneBased => {
                assert!(literal > 0, "1-based literal must be at least 1");
                literal - 1
            }
        }
    }

    /// Fallible version of [`PointConvention::to_internal`] for
    /// caller-supplied literals: `OneBased` with a literal of `0` is an
    /// input error, not a bug.
    pub fn try_to_internal(self, literal: usize) -> Result<usize, crate::error::Error> {
        match self {
            PointConvention::ZeroBased => Ok(literal),
            PointConvention::OneBased if literal > 0 => Ok(literal - 1),
            PointConvention::OneBased => Err(crate::error::Error::invalid(
                "1-based literal must be at least 1",
            )),
        }
    }

    /// Translate an internal 0-based point into a user-facing literal.
    pub fn from_internal(self, point: usize) -> usize {
        match self {
            PointConvention::ZeroBased => point,
            PointConvention::OneBased => point + 1,
        }
    }
}

impl Default for PointConvention {
    /// The teacher's convention and the one used throughout this crate's
    /// own doctests and cycle notation: 1-based, matching mathematical
    /// convention for writing permutations.
    fn default() -> Self {
        PointConvention::OneBased
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_based_is_identity() {
        let c = PointConvention::ZeroBased;
        assert_eq!(c.to_internal(5), 5);
        assert_eq!(c.from_internal(5), 5);
    }

    #[test]
    fn one_based_shifts_by_one() {
        let c = PointConvention::OneBased;
        assert_eq!(c.to_internal(1), 0);
        assert_eq!(c.from_internal(0), 1);
    }

    #[test]
    fn point_ordering_matches_integer() {
        assert!(Point(2) < Point(3));
        assert_eq!(Point::from(7), Point(7));
        assert_eq!(usize::from(Point(7)), 7);
    }
}
