use std::fmt;

pub const FAMILY_MASK: u8 = 0b00011111;

#[rustfmt::skip]
pub static FAMILY_NAMES: [&str; 32] = [
    // stack/misc
    "",    "",    "",    "POP", "SWP", "ROT", "DUP", "OVR",
    // logic/jumps
    "EQU", "GTH", "JMP", "JNZ", "JSR", "STH", "",    "",
    // memory
    "LDZ", "STZ", "LDR", "STR", "LDA", "STA", "PIC", "PUT",
    // maths
    "ADC", "SBC", "MUL", "DVM", "AND", "IOR", "XOR", "SFT",
];

/// Base operation selector, the low 5 bits of an opcode byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Family(u8);

impl Family {
    pub const LIT: Family = Family(0x00);
    pub const POP: Family = Family(0x03);
    pub const OVR: Family = Family(0x07);

    pub const fn of(byte: u8) -> Self {
        Self(byte & FAMILY_MASK)
    }

    pub const fn index(&self) -> u8 {
        self.0
    }

    /// Name from the base table, `None` for nameless slots.
    pub fn name(&self) -> Option<&'static str> {
        match FAMILY_NAMES[self.0 as usize] {
            "" => None,
            name => Some(name),
        }
    }

    pub const fn group(&self) -> Group {
        match self.0 >> 3 {
            0 => Group::Stack,
            1 => Group::Logic,
            2 => Group::Memory,
            _ => Group::Maths,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{:#04x} ({name})", self.0),
            None => write!(f, "{:#04x}", self.0),
        }
    }
}

/// Bands of eight families, used when rendering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    Stack,
    Logic,
    Memory,
    Maths,
}

impl Group {
    pub fn label(&self) -> &'static str {
        match self {
            Group::Stack => "stack/misc",
            Group::Logic => "logic/jumps",
            Group::Memory => "memory",
            Group::Maths => "maths",
        }
    }
}
