use std::{collections::HashMap, sync::OnceLock};

use super::decode::{resolve, Instruction, Resolution};

/// Every opcode byte resolved up front.
///
/// Composed mnemonics are unique across the table: when a byte composes a
/// name some lower byte already produced (e.g. `0x84` would be `SWP` again
/// since keep is dropped for shuffles), it is reported as undefined and
/// remembered as an alias of that lower byte.
pub struct OpTable {
    entries: Vec<Resolution>,
    aliases: HashMap<u8, u8>,
    by_name: HashMap<String, u8>,
}

static SHARED: OnceLock<OpTable> = OnceLock::new();

impl OpTable {
    pub const LEN: usize = 0x100;

    pub fn build() -> Self {
        let mut entries = Vec::with_capacity(Self::LEN);
        let mut aliases = HashMap::new();
        let mut by_name: HashMap<String, u8> = HashMap::new();

        for byte in 0..=u8::MAX {
            let mut res = resolve(byte);
            if let Some(name) = res.instruction.mnemonic() {
                let owner = by_name.get(&name).copied();
                match owner {
                    Some(owner) if matches!(res.instruction, Instruction::Composed { .. }) => {
                        aliases.insert(byte, owner);
                        res.instruction = Instruction::Undefined;
                    }
                    _ => {by_name.entry(name).or_insert(byte);}
                }
            }
            entries.push(res);
        }

        OpTable { entries, aliases, by_name }
    }

    /// Process-wide table, built on first access.
    pub fn shared() -> &'static OpTable {
        SHARED.get_or_init(OpTable::build)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, byte: u8) -> Instruction {
        self.entries[byte as usize].instruction
    }

    pub fn resolution(&self, byte: u8) -> &Resolution {
        &self.entries[byte as usize]
    }

    /// The byte that owns the name `byte` would have composed.
    pub fn alias_of(&self, byte: u8) -> Option<u8> {
        self.aliases.get(&byte).copied()
    }

    /// Reverse lookup, exact and case-sensitive.
    pub fn find(&self, mnemonic: &str) -> Option<u8> {
        self.by_name.get(mnemonic).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, Instruction)> + '_ {
        self.entries.iter().map(|res| (res.byte, res.instruction))
    }

    pub fn defined(&self) -> impl Iterator<Item = (u8, String)> + '_ {
        self.iter().filter_map(|(byte, instr)| instr.mnemonic().map(|name| (byte, name)))
    }
}

impl std::ops::Index<u8> for OpTable {
    type Output = Instruction;

    fn index(&self, byte: u8) -> &Instruction {
        &self.entries[byte as usize].instruction
    }
}
