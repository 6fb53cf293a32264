//! Attribute flags of a file

use std::fmt::Display;
use std::str::FromStr;

use bitflags::bitflags;

use crate::Error;

bitflags! {
    /// Attribute flag set of a file.
    ///
    /// Bit values follow the DOS/Windows file attributes. Bits the platform
    /// reports beyond the named ones are kept as they are.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct FileAttributes: u32 {
        /// The file is not intended to be modified.
        const READ_ONLY = 0x1;
        /// The file is hidden from ordinary directory listings.
        const HIDDEN = 0x2;
        /// The file is used by the operating system.
        const SYSTEM = 0x4;
        /// The file was modified since the last backup.
        const ARCHIVE = 0x20;

        const _ = !0;
    }
}

/// Letters used for the textual form, in display order.
const LETTERS: [(char, FileAttributes); 4] = [
    ('R', FileAttributes::READ_ONLY),
    ('H', FileAttributes::HIDDEN),
    ('S', FileAttributes::SYSTEM),
    ('A', FileAttributes::ARCHIVE),
];

impl FileAttributes {
    /// Returns `true` if at least one flag of `flags` is set.
    pub fn has_any_of(&self, flags: FileAttributes) -> bool {
        self.intersects(flags)
    }

    /// Returns `true` if every flag of `flags` is set.
    pub fn has_all_of(&self, flags: FileAttributes) -> bool {
        self.contains(flags)
    }

    /// Returns the set with `flags` removed. Other bits are untouched.
    pub fn cleared(&self, flags: FileAttributes) -> FileAttributes {
        self.difference(flags)
    }
}

/// Positional `RHSA` letters with `-` for unset flags, e.g. `R--A`.
impl Display for FileAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text: String = LETTERS
            .iter()
            .map(|&(letter, flag)| if self.contains(flag) { letter } else { '-' })
            .collect();
        write!(f, "{text}")
    }
}

/// Parses a set of letters like `ra`. `n` stands for no flag.
impl FromStr for FileAttributes {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .chars()
            .try_fold(FileAttributes::empty(), |acc, ch| {
                match ch.to_ascii_uppercase() {
                    'N' => Ok(acc),
                    upper => LETTERS
                        .iter()
                        .find(|&&(letter, _)| letter == upper)
                        .map(|&(_, flag)| acc | flag)
                        .ok_or(Error::InvalidAttribute(ch)),
                }
            })
    }
}
