use super::block::*;
use super::block_string::*;

///
/// Iterator that reads the character units of a `BlockString` in chain order
///
pub struct Chars<'a> {
    /// The string that's being read
    pub (super) string: &'a BlockString,

    /// The block that's being read, or `None` once the chain is exhausted
    pub (super) block: Option<BlockIndex>,

    /// The offset of the next unit within the current block
    pub (super) offset: usize,
}

impl<'a> Iterator for Chars<'a> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            let block_idx   = self.block?;
            let block       = self.string.block(block_idx);

            if self.offset < block.len() {
                // Fetch the unit and move along the block
                let unit    = block.units[self.offset];
                self.offset += 1;

                return Some(unit);
            }

            // Passed over the end of the block: move on to the next one
            self.block  = block.next;
            self.offset = 0;
        }
    }
}
