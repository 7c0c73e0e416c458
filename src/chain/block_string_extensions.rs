use super::block_string::*;

use std::fmt;
use std::fmt::{Write};
use std::ops::{AddAssign};

// These sit alongside the inherent operations so that a BlockString drops into
// code that expects the standard string-building traits

impl Default for BlockString {
    fn default() -> BlockString {
        BlockString::new()
    }
}

impl From<&str> for BlockString {
    fn from(text: &str) -> BlockString {
        let mut string = BlockString::new();
        string.push_str(text);

        string
    }
}

impl From<String> for BlockString {
    fn from(text: String) -> BlockString {
        BlockString::from(text.as_str())
    }
}

impl FromIterator<char> for BlockString {
    fn from_iter<Units: IntoIterator<Item=char>>(units: Units) -> BlockString {
        let mut string = BlockString::new();
        string.extend(units);

        string
    }
}

impl Extend<char> for BlockString {
    fn extend<Units: IntoIterator<Item=char>>(&mut self, units: Units) {
        for unit in units {
            self.push(unit);
        }
    }
}

impl AddAssign<char> for BlockString {
    fn add_assign(&mut self, unit: char) {
        self.push(unit);
    }
}

impl AddAssign<&str> for BlockString {
    fn add_assign(&mut self, text: &str) {
        self.push_str(text);
    }
}

impl fmt::Display for BlockString {
    ///
    /// Renders the concatenation of every block's valid units in chain order
    ///
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in self.chars() {
            formatter.write_char(unit)?;
        }

        Ok(())
    }
}

impl fmt::Debug for BlockString {
    ///
    /// Shows the per-block layout, which is what matters when debugging chain surgery
    ///
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list    = formatter.debug_list();
        let mut current = Some(self.head);

        while let Some(block_idx) = current {
            let block = self.block(block_idx);

            list.entry(&block.units.iter().collect::<String>());
            current = block.next;
        }

        list.finish()
    }
}

// Equality is over the character content: two chains with the same units in
// different block layouts compare equal

impl PartialEq for BlockString {
    fn eq(&self, other: &BlockString) -> bool {
        self.chars().eq(other.chars())
    }
}

impl Eq for BlockString { }

impl PartialEq<str> for BlockString {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl PartialEq<&str> for BlockString {
    fn eq(&self, other: &&str) -> bool {
        self.chars().eq(other.chars())
    }
}
