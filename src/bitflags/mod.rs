#[macro_export]

/// Declares a byte-sized flag set over named bit positions.
///
/// `bitflags!(pub Modes [keep / KEEP = 7, wide / WIDE = 5])` produces a
/// `Modes(u8)` newtype with a `KEEP` mask constant and a `keep()` accessor per
/// flag. Bits not named in the list are dropped by `from_bits`.
macro_rules! bitflags {
    ($vis:vis $name:ident [$($flag:ident / $MASK:ident = $bit:expr),* $(,)?]) => {

        #[derive(Copy, PartialEq, Eq, Clone, Hash, Default)]
        $vis struct $name(u8);

        impl $name {
            $(pub const $MASK: u8 = 0x1 << $bit;)*

            pub const ALL: u8 = 0 $(| Self::$MASK)*;

            pub const fn from_bits(bits: u8) -> Self {
                Self(bits & Self::ALL)
            }

            pub const fn bits(&self) -> u8 {
                self.0
            }

            pub const fn is_empty(&self) -> bool {
                self.0 == 0
            }

            pub const fn without(&self, mask: u8) -> Self {
                Self(self.0 & !mask)
            }

            $(
                pub const fn $flag(&self) -> bool {
                    (Self::$MASK & self.0) != 0
                }
            )*
        }
    };
    () => {};
}
