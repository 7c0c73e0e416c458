use super::block::*;
use super::block_string_iterator::*;

use crate::error::{IndexOutOfRange, Result};

use std::mem;

///
/// A mutable string stored as a chain of fixed-capacity character blocks.
///
/// The chain trades random-access speed for cheap editing: appending a
/// character touches only the tail block, and inserting in the middle splits
/// one block and relinks the chain around the new content rather than moving
/// everything after the insertion point. Locating a position walks the chain,
/// so reads cost O(blocks before the position) rather than O(1).
///
/// The blocks live in an arena owned by the string; `head` and `tail` are
/// slots in that arena and every block links to its successor by slot. The
/// chain always contains at least one block (a new string holds a single
/// empty one), and `tail` always refers to the block whose `next` is `None`.
///
/// ```
/// use block_string::BlockString;
///
/// let mut text = BlockString::from("Itmo University");
/// text.insert_str(4, " State")?;
///
/// assert_eq!(text.to_string(), "Itmo State University");
/// # Ok::<(), block_string::IndexOutOfRange>(())
/// ```
///
#[derive(Clone)]
pub struct BlockString {
    /// The blocks that make up this string
    blocks: Vec<Block>,

    /// The arena slot of the first block in the chain
    pub (super) head: BlockIndex,

    /// The arena slot of the last block in the chain (its `next` is always `None`)
    pub (super) tail: BlockIndex,

    /// Arena slots that are not currently linked into the chain
    free_blocks: Vec<usize>,
}

impl BlockString {
    ///
    /// Creates a new, empty string containing a single empty block
    ///
    pub fn new() -> BlockString {
        BlockString {
            blocks:         vec![Block::empty()],
            head:           BlockIndex(0),
            tail:           BlockIndex(0),
            free_blocks:    vec![],
        }
    }

    ///
    /// The number of character units in this string
    ///
    /// Walks every block in the chain, so this costs O(blocks) rather than O(1)
    ///
    pub fn len(&self) -> usize {
        let mut length  = 0;
        let mut current = self.head;

        loop {
            let block = self.block(current);
            length += block.len();

            match block.next {
                Some(next)  => { current = next; }
                None        => { break; }
            }
        }

        length
    }

    ///
    /// True if this string contains no character units
    ///
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// The number of blocks currently linked into the chain
    ///
    /// Splits leave the chain fragmented; the count shrinks again once the
    /// compaction pass merges neighbouring under-full blocks
    ///
    pub fn block_count(&self) -> usize {
        let mut count   = 0;
        let mut current = self.head;

        loop {
            count += 1;

            match self.block(current).next {
                Some(next)  => { current = next; }
                None        => { break; }
            }
        }

        count
    }

    ///
    /// Iterates over the character units of this string in chain order
    ///
    pub fn chars(&self) -> Chars<'_> {
        Chars {
            string: self,
            block:  Some(self.head),
            offset: 0,
        }
    }

    ///
    /// Appends one character unit to the end of this string
    ///
    /// A fresh block is linked in once every `BLOCK_CAPACITY` units, so the
    /// cost is amortized O(1)
    ///
    pub fn push(&mut self, unit: char) {
        if self.block(self.tail).is_full() {
            // Link a fresh empty block in as the new tail
            let new_tail    = self.store_new_block(Block::empty());
            let old_tail    = self.tail;

            self.block_mut(old_tail).next   = Some(new_tail);
            self.tail                       = new_tail;
        }

        let tail = self.tail;
        self.block_mut(tail).push(unit);
    }

    ///
    /// Appends every character of a string slice in order
    ///
    pub fn push_str(&mut self, text: &str) {
        for unit in text.chars() {
            self.push(unit);
        }
    }

    ///
    /// Appends another chain to the end of this one, consuming it
    ///
    /// The donor's blocks are moved into this chain; the character data is
    /// not copied. Both chains' boundary blocks are trimmed to their valid
    /// length first: once this chain's old tail sits in the interior it can
    /// never grow again, so its reserved storage is handed back.
    ///
    pub fn append(&mut self, mut donor: BlockString) {
        self.trim_boundary_blocks();
        donor.trim_boundary_blocks();

        // Splice the donor's blocks onto the end of the chain
        let (donor_head, donor_tail)    = self.adopt_blocks(donor);
        let old_tail                    = self.tail;

        self.block_mut(old_tail).next   = Some(donor_head);
        self.tail                       = donor_tail;
    }

    ///
    /// Inserts another chain at `index`, consuming it
    ///
    /// The donor's blocks are spliced into the chain at the insertion point:
    /// the block containing `index` is split in two if the point falls inside
    /// it, and the chain is relinked around the donor. `index == len()`
    /// appends; any larger index fails with `IndexOutOfRange` and leaves this
    /// string untouched.
    ///
    pub fn insert(&mut self, index: usize, mut donor: BlockString) -> Result<()> {
        let length = self.len();

        if index > length {
            return Err(IndexOutOfRange { index: index });
        }

        // Merge neighbouring under-full blocks before locating the splice point
        self.compact();

        // Inserting at the very end is the one case where a tail append is the right splice
        if index == length {
            self.append(donor);
            return Ok(());
        }

        donor.trim_boundary_blocks();

        // Locate the block owning `index` and decide where the left anchor is
        let (predecessor, owner, offset) = self.find_unit(index);

        let left_anchor = if offset == 0 {
            match predecessor {
                // The insertion point is a mid-chain block boundary: splice between
                // the predecessor and the owning block
                Some(predecessor)   => predecessor,

                // The insertion point is the start of the chain: the donor's head
                // becomes the new head
                None                => {
                    let old_head                    = self.head;
                    let (donor_head, donor_tail)    = self.adopt_blocks(donor);

                    self.block_mut(donor_tail).next = Some(old_head);
                    self.head                       = donor_head;

                    return Ok(());
                }
            }
        } else {
            // The insertion point is inside the owning block: split it so the
            // left half can anchor the donor
            self.split(owner, offset);
            owner
        };

        // Splice the donor between the left anchor and whatever followed it
        let (donor_head, donor_tail)        = self.adopt_blocks(donor);
        let right_remainder                 = self.block(left_anchor).next;

        self.block_mut(donor_tail).next     = right_remainder;
        self.block_mut(left_anchor).next    = Some(donor_head);

        Ok(())
    }

    ///
    /// Inserts a string slice at `index`
    ///
    /// The text becomes a short-lived chain of its own, and that chain's
    /// blocks are spliced in
    ///
    pub fn insert_str(&mut self, index: usize, text: &str) -> Result<()> {
        let mut donor = BlockString::new();
        donor.push_str(text);

        self.insert(index, donor)
    }

    ///
    /// Reads the character unit at `index`
    ///
    pub fn char_at(&self, index: usize) -> Result<char> {
        if index >= self.len() {
            return Err(IndexOutOfRange { index: index });
        }

        let (_, owner, offset) = self.find_unit(index);

        Ok(self.block(owner).units[offset])
    }

    ///
    /// Overwrites the character unit at `index`
    ///
    pub fn set_char_at(&mut self, index: usize, unit: char) -> Result<()> {
        if index >= self.len() {
            return Err(IndexOutOfRange { index: index });
        }

        let (_, owner, offset) = self.find_unit(index);
        self.block_mut(owner).units[offset] = unit;

        Ok(())
    }

    ///
    /// Extracts the half-open range `[start, end)` into a new, independent string
    ///
    /// The source is left untouched, and the result owns its own blocks, so
    /// editing one never affects the other. `end` may reach `len()`; `start`
    /// may not pass `end`.
    ///
    pub fn substring(&self, start: usize, end: usize) -> Result<BlockString> {
        if end > self.len() {
            return Err(IndexOutOfRange { index: end });
        }
        if start > end {
            return Err(IndexOutOfRange { index: start });
        }

        let mut result = BlockString::new();

        if start == end {
            return Ok(result);
        }

        // Walk block-by-block from the block owning `start`, appending each
        // in-range unit and hopping onwards whenever the local offset runs off
        // the current block
        let (_, mut current, mut offset) = self.find_unit(start);

        for _ in start..end {
            while offset >= self.block(current).len() {
                match self.block(current).next {
                    Some(next)  => {
                        current = next;
                        offset  = 0;
                    }
                    None        => {
                        debug_assert!(false, "Substring range overran the chain");
                        return Ok(result);
                    }
                }
            }

            result.push(self.block(current).units[offset]);
            offset += 1;
        }

        Ok(result)
    }

    ///
    /// Runs the merge pass over the whole chain
    ///
    /// Walks from the head and merges the current block with its successor
    /// for as long as their combined units fit in a single block, then
    /// advances. Editing fragments the chain; `insert` runs this pass itself
    /// before locating its splice point, and it can also be invoked directly
    /// after a burst of edits.
    ///
    pub fn compact(&mut self) {
        let mut current = self.head;

        loop {
            // Absorb successors while the pair fits in one block
            while self.can_merge(current) {
                self.merge_with_next(current);
            }

            match self.block(current).next {
                Some(next)  => { current = next; }
                None        => { break; }
            }
        }
    }

    ///
    /// Retrieves the block stored at an arena slot
    ///
    #[inline]
    pub (super) fn block(&self, block_idx: BlockIndex) -> &Block {
        &self.blocks[block_idx.idx()]
    }

    ///
    /// Retrieves the block stored at an arena slot for editing
    ///
    #[inline]
    pub (super) fn block_mut(&mut self, block_idx: BlockIndex) -> &mut Block {
        &mut self.blocks[block_idx.idx()]
    }

    ///
    /// Stores a block in the arena and returns the slot it was written to
    ///
    fn store_new_block(&mut self, block: Block) -> BlockIndex {
        // Recycle a free slot if there is one
        if let Some(free_slot) = self.free_blocks.pop() {
            self.blocks[free_slot] = block;
            BlockIndex(free_slot)
        } else {
            // Grow the arena
            let new_slot = self.blocks.len();
            self.blocks.push(block);
            BlockIndex(new_slot)
        }
    }

    ///
    /// Locates the block owning the unit at `index`
    ///
    /// Returns the owning block's predecessor (`None` when the owner is the
    /// head), the owning block itself and the offset of the unit within it.
    /// Callers must pass an index strictly inside the string.
    ///
    fn find_unit(&self, index: usize) -> (Option<BlockIndex>, BlockIndex, usize) {
        let mut predecessor = None;
        let mut current     = self.head;
        let mut offset      = index;

        while offset >= self.block(current).len() {
            match self.block(current).next {
                Some(next)  => {
                    offset      -= self.block(current).len();
                    predecessor = Some(current);
                    current     = next;
                }
                None        => {
                    // For the purposes of this walk the last block owns all
                    // trailing offsets
                    debug_assert!(offset == 0, "Index past the end of the chain");
                    break;
                }
            }
        }

        (predecessor, current, offset)
    }

    ///
    /// Divides a block in two so that the original keeps exactly `keep` units
    ///
    /// The new block receives the remaining units, is linked directly after
    /// the original and inherits its link; it also becomes the tail if the
    /// original was the tail. Callers must pass `0 < keep < len`.
    ///
    fn split(&mut self, block_idx: BlockIndex, keep: usize) {
        debug_assert!(keep > 0 && keep < self.block(block_idx).len(), "Split point must fall strictly inside the block");

        // The original keeps the leading units; the remainder moves to a new block
        let block           = self.block_mut(block_idx);
        let remainder_units = block.units.split_off(keep);
        let old_next        = block.next;

        let remainder = self.store_new_block(Block {
            units:  remainder_units,
            next:   old_next,
        });

        self.block_mut(block_idx).next = Some(remainder);

        if self.tail == block_idx {
            self.tail = remainder;
        }
    }

    ///
    /// True if the block and its successor would fit in a single block
    ///
    fn can_merge(&self, block_idx: BlockIndex) -> bool {
        let block = self.block(block_idx);

        match block.next {
            Some(next)  => block.len() + self.block(next).len() <= BLOCK_CAPACITY,
            None        => false,
        }
    }

    ///
    /// Absorbs a block's successor into it, unlinking the successor
    ///
    fn merge_with_next(&mut self, block_idx: BlockIndex) {
        let next_idx = match self.block(block_idx).next {
            Some(next)  => next,
            None        => {
                debug_assert!(false, "Tried to merge past the tail block");
                return;
            }
        };

        // Take the successor out of the arena and recycle its slot
        let absorbed = mem::take(&mut self.blocks[next_idx.idx()]);
        self.free_blocks.push(next_idx.idx());

        debug_assert!(self.block(block_idx).len() + absorbed.len() <= BLOCK_CAPACITY, "Merged blocks must fit in a single block");

        // The successor's units move over in order, and its link is inherited
        let block = self.block_mut(block_idx);
        block.units.extend(absorbed.units);
        block.next = absorbed.next;

        // The tail must never refer to an unlinked block
        if self.tail == next_idx {
            self.tail = block_idx;
        }
    }

    ///
    /// Trims the head and tail blocks to their valid length
    ///
    fn trim_boundary_blocks(&mut self) {
        let head = self.head;
        let tail = self.tail;

        self.block_mut(head).trim();
        self.block_mut(tail).trim();
    }

    ///
    /// Moves a donor chain's blocks into this arena, preserving their order
    ///
    /// Slot indices are remapped as the blocks come across; the character
    /// data itself is moved, never copied. Returns the slots now holding the
    /// donor's head and tail.
    ///
    fn adopt_blocks(&mut self, donor: BlockString) -> (BlockIndex, BlockIndex) {
        let BlockString { mut blocks, head, .. } = donor;

        // Bring the donor's head across first
        let first           = mem::take(&mut blocks[head.idx()]);
        let mut next_donor  = first.next;

        let new_head        = self.store_new_block(Block { units: first.units, next: None });
        let mut new_tail    = new_head;

        // Then each following block, rebuilding the links inside this arena
        while let Some(donor_idx) = next_donor {
            let block       = mem::take(&mut blocks[donor_idx.idx()]);
            next_donor      = block.next;

            let new_idx     = self.store_new_block(Block { units: block.units, next: None });

            self.block_mut(new_tail).next   = Some(new_idx);
            new_tail                        = new_idx;
        }

        (new_head, new_tail)
    }
}
