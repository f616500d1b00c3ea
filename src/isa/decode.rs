use std::fmt;

use super::{Family, Modes, OpTable};


/// Resolved identity of an opcode byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    Undefined,
    /// Fixed mnemonic tied to one exact byte, never suffixed.
    Atomic(&'static str),
    /// Base name followed by the applicable mode suffixes.
    Composed { base: &'static str, modes: Modes },
}

impl Instruction {
    pub fn is_defined(&self) -> bool {
        !matches!(self, Instruction::Undefined)
    }

    pub fn mnemonic(&self) -> Option<String> {
        match self {
            Instruction::Undefined => None,
            Instruction::Atomic(name) => Some((*name).to_owned()),
            Instruction::Composed { base, modes } => Some(format!("{base}{}", modes.suffix())),
        }
    }

    /// Flags that show up as suffixes. Empty for atomic overrides.
    pub fn modes(&self) -> Modes {
        match self {
            Instruction::Composed { modes, .. } => *modes,
            _ => Modes::default(),
        }
    }
}

/// Undefined prints as nothing, so `{:8}` yields a blank cell.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Undefined => f.pad(""),
            Instruction::Atomic(name) => f.pad(name),
            Instruction::Composed { .. } => f.pad(&self.mnemonic().unwrap_or_default()),
        }
    }
}


#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    Byte(u8),
    /// Families `first..=last` with all of `require` set and none of `forbid`.
    Families { first: Family, last: Family, require: u8, forbid: u8 },
}

impl Pattern {
    pub fn matches(&self, byte: u8) -> bool {
        match *self {
            Pattern::Byte(b) => b == byte,
            Pattern::Families { first, last, require, forbid } => {
                let family = Family::of(byte);
                (first..=last).contains(&family)
                    && byte & require == require
                    && byte & forbid == 0
            }
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Pattern::Byte(b) => write!(f, "byte {b:#04x}"),
            Pattern::Families { first, last, require, forbid } => {
                if first == last {
                    write!(f, "family {:#04x}", first.index())?;
                } else {
                    write!(f, "families {:#04x}..={:#04x}", first.index(), last.index())?;
                }
                if require != 0 {write!(f, " with {:?}", Modes::from_bits(require))?}
                if forbid != 0 {write!(f, " without {:?}", Modes::from_bits(forbid))?}
                Ok(())
            }
        }
    }
}


#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Undefined,
    Atomic(&'static str),
    /// Compose from `base`, or the family name when `None`, after clearing
    /// the `absorb` bits.
    Compose { base: Option<&'static str>, absorb: u8 },
}

#[derive(Debug)]
pub struct Rule {
    pub label: &'static str,
    pub pattern: Pattern,
    pub outcome: Outcome,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.pattern)
    }
}

const fn families(first: u8, last: u8, require: u8, forbid: u8) -> Pattern {
    Pattern::Families { first: Family::of(first), last: Family::of(last), require, forbid }
}

/// Checked in order before the general case; the first match wins.
pub static OVERRIDES: [Rule; 8] = [
    Rule {
        label: "literal push",
        pattern: families(Family::LIT.index(), Family::LIT.index(), Modes::KEEP, 0),
        outcome: Outcome::Compose { base: Some("LIT"), absorb: Modes::KEEP },
    },
    Rule { label: "set carry",   pattern: Pattern::Byte(0x20), outcome: Outcome::Atomic("SEC") },
    Rule { label: "clear carry", pattern: Pattern::Byte(0x40), outcome: Outcome::Atomic("CLC") },
    Rule { label: "extend",      pattern: Pattern::Byte(0x60), outcome: Outcome::Atomic("EXT") },
    Rule {
        label: "unassigned zero-family byte",
        pattern: families(Family::LIT.index(), Family::LIT.index(), 0, Modes::KEEP),
        outcome: Outcome::Undefined,
    },
    Rule {
        label: "reserved family",
        pattern: families(0x01, 0x02, 0, 0),
        outcome: Outcome::Undefined,
    },
    Rule { label: "return from interrupt", pattern: Pattern::Byte(0x83), outcome: Outcome::Atomic("RTI") },
    Rule {
        // keep has no meaning for shuffles
        label: "stack shuffle",
        pattern: families(Family::POP.index(), Family::OVR.index(), 0, 0),
        outcome: Outcome::Compose { base: None, absorb: Modes::KEEP },
    },
];


/// A decoded byte together with the override that produced it, if any.
#[derive(Copy, Clone, Debug)]
pub struct Resolution {
    pub byte: u8,
    pub instruction: Instruction,
    pub rule: Option<&'static Rule>,
}

impl Resolution {
    pub fn family(&self) -> Family {
        Family::of(self.byte)
    }

    /// Mode bits as encoded, before any were absorbed.
    pub fn raw_modes(&self) -> Modes {
        Modes::of(self.byte)
    }
}

/// Applies the rules to one byte in isolation, without the aliasing pass.
pub fn resolve(byte: u8) -> Resolution {
    let family = Family::of(byte);
    let modes = Modes::of(byte);

    let rule = OVERRIDES.iter().find(|rule| rule.pattern.matches(byte));
    let instruction = match rule.map(|r| r.outcome) {
        Some(Outcome::Undefined) => Instruction::Undefined,
        Some(Outcome::Atomic(name)) => Instruction::Atomic(name),
        Some(Outcome::Compose { base, absorb }) => compose(base.or(family.name()), modes.without(absorb)),
        None => compose(family.name(), modes),
    };

    Resolution { byte, instruction, rule }
}

/// Canonical descriptor for `byte`, aliasing included. Use [`resolve`] to
/// see what the rules alone produce.
pub fn decode(byte: u8) -> Instruction {
    OpTable::shared().get(byte)
}

fn compose(base: Option<&'static str>, modes: Modes) -> Instruction {
    match base {
        Some(base) => Instruction::Composed { base, modes },
        None => Instruction::Undefined,
    }
}
