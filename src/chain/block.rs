/// The maximum number of character units any single block will hold
pub const BLOCK_CAPACITY: usize = 16;

///
/// Describes a block's slot within a chain's arena
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub (crate) struct BlockIndex(pub (crate) usize);

impl BlockIndex {
    #[inline]
    pub (crate) fn idx(self) -> usize {
        self.0
    }
}

///
/// A run of character units plus the link to the block that follows it
///
/// A block stores exactly its valid units: `units.len()` is the logical size
/// and never exceeds `BLOCK_CAPACITY`, so there is no stale storage beyond the
/// valid prefix to leak into other operations. Blocks that can still grow keep
/// a full block's worth of storage reserved so that pushing units does not
/// reallocate.
///
#[derive(Clone, Default, Debug)]
pub (crate) struct Block {
    /// The valid character units of this block
    pub (crate) units: Vec<char>,

    /// The arena slot of the next block in the chain, if there is one
    pub (crate) next: Option<BlockIndex>,
}

impl Block {
    ///
    /// Creates an empty block with room reserved for a full block of units
    ///
    pub (crate) fn empty() -> Block {
        Block {
            units:  Vec::with_capacity(BLOCK_CAPACITY),
            next:   None,
        }
    }

    ///
    /// The number of valid units currently stored in this block
    ///
    #[inline]
    pub (crate) fn len(&self) -> usize {
        self.units.len()
    }

    ///
    /// True if no further unit can be placed in this block
    ///
    #[inline]
    pub (crate) fn is_full(&self) -> bool {
        self.units.len() >= BLOCK_CAPACITY
    }

    ///
    /// Places one unit at the end of this block's valid prefix
    ///
    pub (crate) fn push(&mut self, unit: char) {
        debug_assert!(!self.is_full(), "Tried to push a unit into a full block");

        self.units.push(unit);
    }

    ///
    /// Releases storage reserved beyond the valid units
    ///
    /// Only the chain's tail block can ever grow, so a block that is about to
    /// move into the interior of a chain gives its reservation back.
    ///
    pub (crate) fn trim(&mut self) {
        self.units.shrink_to_fit();
    }
}
