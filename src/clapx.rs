use anyhow::{bail, Context};
use termcolor::ColorChoice;

use crate::codegen::Emit;

/// Accepts `131`, `0x83`, `$83`, `#83` or `0b10000011`.
pub fn parse_byte(value: String) -> anyhow::Result<u8> {
    let s = value.trim();
    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(hex) = s.strip_prefix('$').or_else(|| s.strip_prefix('#')) {
        (hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        (bin, 2)
    } else {
        (s, 10)
    };

    if digits.starts_with(&['+', '-'][..]) {bail!("'{value}' must not carry a sign")}
    let wide = u32::from_str_radix(digits, radix)
        .with_context(|| format!("'{value}' is not a number"))?;
    if wide > u8::MAX as u32 {bail!("{value} is out of range, opcodes are 0..=255")}
    Ok(wide as u8)
}

pub static COLOR_VALUES: [&'static str; 3] = [
    "auto",
    "always",
    "never",
];

pub fn color_value_parser(value: String) -> anyhow::Result<ColorChoice> {
    match value.as_str() {
        "auto" => Ok(ColorChoice::Auto),
        "always" => Ok(ColorChoice::Always),
        "never" => Ok(ColorChoice::Never),
        other => bail!("invalid color choice {other}"),
    }
}

pub static EMIT_VALUES: [&'static str; 2] = [
    "names",
    "consts",
];

pub fn emit_value_parser(value: String) -> anyhow::Result<Emit> {
    match value.as_str() {
        "names" => Ok(Emit::Names),
        "consts" => Ok(Emit::Consts),
        other => bail!("invalid emit kind {other}"),
    }
}
