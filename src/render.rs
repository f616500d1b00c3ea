use std::io::Write;

use anyhow::{bail, Result};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::isa::{Family, Group, Instruction, OpTable};

/// Width of one table cell. Fits the longest mnemonic (`ADCkr2`) plus a gap.
pub const CELL_WIDTH: usize = 8;

pub fn cell(instr: &Instruction) -> String {
    format!("{instr:<CELL_WIDTH$}")
}

pub fn group_color(group: Group) -> Color {
    match group {
        Group::Stack  => Color::Cyan,
        Group::Logic  => Color::Yellow,
        Group::Memory => Color::Green,
        Group::Maths  => Color::Magenta,
    }
}

fn color_spec(byte: u8, instr: &Instruction) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match instr {
        Instruction::Undefined => {}
        Instruction::Atomic(_) => {spec.set_fg(Some(Color::Red)).set_bold(true);}
        Instruction::Composed { .. } => {spec.set_fg(Some(group_color(Family::of(byte).group())));}
    }
    spec
}

/// 16x16 grid, rows are the high nybble and columns the low one.
pub fn write_grid<W: WriteColor>(out: &mut W, table: &OpTable) -> Result<()> {
    write!(out, "  ")?;
    for col in 0..0x10u8 {
        write!(out, "{col:x}{:pad$}", "", pad = CELL_WIDTH - 1)?;
    }
    writeln!(out)?;

    for row in 0..0x10u8 {
        write!(out, "{row:x} ")?;
        for col in 0..0x10u8 {
            let byte = (row << 4) | col;
            let instr = table.get(byte);
            out.set_color(&color_spec(byte, &instr))?;
            write!(out, "{}", cell(&instr))?;
            out.reset()?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// One `xx NAME` line per byte. Undefined bytes only appear with `all`.
pub fn write_list<W: WriteColor>(out: &mut W, table: &OpTable, all: bool) -> Result<()> {
    for (byte, instr) in table.iter() {
        if !instr.is_defined() {
            if all {writeln!(out, "{byte:02x}")?}
            continue;
        }
        write!(out, "{byte:02x} ")?;
        out.set_color(&color_spec(byte, &instr))?;
        write!(out, "{instr}")?;
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}

/// Mnemonic, family, raw flags, the rule that fired and the owning byte when
/// `byte` is an alias.
pub fn write_lookup<W: Write>(out: &mut W, table: &OpTable, byte: u8) -> Result<()> {
    let res = table.resolution(byte);
    match res.instruction.mnemonic() {
        Some(name) => writeln!(out, "{byte:#04x} {name}")?,
        None => writeln!(out, "{byte:#04x} undefined")?,
    }
    writeln!(out, "  family  {}, {}", res.family(), res.family().group().label())?;
    writeln!(out, "  modes   {:?}", res.raw_modes())?;
    match res.rule {
        Some(rule) => writeln!(out, "  rule    {rule}")?,
        None => writeln!(out, "  rule    general")?,
    }
    if let Some(owner) = table.alias_of(byte) {
        writeln!(out, "  alias   {owner:#04x} ({})", table.get(owner))?;
    }
    Ok(())
}

/// Writes `NAME 0xXX` for every known name, then fails if any were unknown.
pub fn write_find<W: Write>(out: &mut W, table: &OpTable, names: &[String]) -> Result<()> {
    let mut missing = 0;
    for name in names {
        match table.find(name) {
            Some(byte) => writeln!(out, "{name} {byte:#04x}")?,
            None => {
                eprintln!("unknown mnemonic {name}");
                missing += 1;
            }
        }
    }
    if missing > 0 {bail!("{missing} of {} mnemonics not found", names.len())}
    Ok(())
}
