//! Identifiers for the fields a stepper evolves.

use std::fmt;

/// Identifies one of the (at most two) coupled scalar fields.
///
/// Single-field systems only use [`FieldId::U`]. Coupled systems (a field
/// and its time derivative, or two reacting species) add [`FieldId::V`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    /// The primary field. Always present.
    U,
    /// The optional secondary field.
    V,
}

impl FieldId {
    /// Both field identifiers in evaluation order.
    pub const ALL: [FieldId; 2] = [FieldId::U, FieldId::V];

    /// Storage index of this field within a field pair (U = 0, V = 1).
    pub fn index(self) -> usize {
        match self {
            Self::U => 0,
            Self::V => 1,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U => write!(f, "U"),
            Self::V => write!(f, "V"),
        }
    }
}
