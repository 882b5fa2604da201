/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of every protocol round completed.
    pub rounds: usize,

    /// A count of every announcement made to a private structure, including redistribution.
    pub announcements: usize,

    /// A count of every world removed from a private structure.
    pub worlds_removed: usize,
}
