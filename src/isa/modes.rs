use std::fmt::{self, Write};

crate::bitflags!(pub Modes [
    wide / WIDE = 5,
    ret  / RETURN = 6,
    keep / KEEP = 7,
]);

impl Modes {
    pub const fn of(byte: u8) -> Self {
        Self::from_bits(byte)
    }

    /// Mnemonic suffixes for the set flags: keep, then return, then wide.
    pub fn suffix(&self) -> String {
        let mut s = String::with_capacity(3);
        if self.keep() {s.push('k')}
        if self.ret() {s.push('r')}
        if self.wide() {s.push('2')}
        s
    }
}

impl fmt::Debug for Modes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(if self.keep() {'k'} else {'-'})?;
        f.write_char(if self.ret() {'r'} else {'-'})?;
        f.write_char(if self.wide() {'2'} else {'-'})
    }
}
