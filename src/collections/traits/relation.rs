use derive_more::{Display, IsVariant};

#[cfg(doc)]
use super::Set;

/// How one set relates to another, as returned by [`Set::relation`].
///
/// The variants are checked in declaration order and the first that applies is returned, so two
/// empty sets are `Equal` (rather than `Disjoint`) and the empty set is a `Subset` of any
/// non-empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant)]
pub enum Relation {
    /// Both sets contain exactly the same elements.
    #[display("equal")]
    Equal,
    /// Every element of the receiver is in the other set, which has more elements.
    #[display("proper subset")]
    Subset,
    /// Every element of the other set is in the receiver, which has more elements.
    #[display("proper superset")]
    Superset,
    /// The sets share no elements.
    #[display("disjoint")]
    Disjoint,
    /// The sets share some, but not all, elements.
    #[display("overlapping")]
    Overlapping,
}

impl Relation {
    /// Returns the relation seen from the other set's side.
    pub const fn flip(self) -> Relation {
        match self {
            Relation::Subset => Relation::Superset,
            Relation::Superset => Relation::Subset,
            other => other,
        }
    }
}
