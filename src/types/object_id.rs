//! PDF object identifier.

use std::fmt;

/// The address of an indirect object: object number plus generation.
///
/// Object number 0 is reserved for the head of the cross-reference free
/// list and never names a real object. Generation numbers only become
/// interesting with incremental updates, which this crate does not emit;
/// everything it writes is at generation 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId {
    /// The object number (>= 1 for indirect objects).
    pub number: u32,
    /// The generation number.
    pub generation: u16,
}

impl ObjectId {
    /// Creates an identifier at generation 0.
    #[inline]
    pub fn new(number: u32) -> Self {
        Self {
            number,
            generation: 0,
        }
    }

    /// Creates an identifier with an explicit generation number.
    #[inline]
    pub fn with_generation(number: u32, generation: u16) -> Self {
        Self { number, generation }
    }
}

impl fmt::Display for ObjectId {
    /// Renders the reference form, e.g. `1 0 R`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.number, self.generation)
    }
}

impl From<(u32, u16)> for ObjectId {
    fn from((number, generation): (u32, u16)) -> Self {
        Self { number, generation }
    }
}

impl From<u32> for ObjectId {
    fn from(number: u32) -> Self {
        Self::new(number)
    }
}
