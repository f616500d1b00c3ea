use std::io;

use genco::{fmt, lang::Rust, prelude::*};

use crate::isa::OpTable;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Emit {
    /// `OPCODE_NAMES`, a byte-indexed lookup array.
    Names,
    /// One `u8` constant per defined mnemonic.
    Consts,
}

pub fn tokens(table: &OpTable, emit: Emit) -> rust::Tokens {
    match emit {
        Emit::Names => names(table),
        Emit::Consts => consts(table),
    }
}

fn names(table: &OpTable) -> rust::Tokens {
    quote! {
        $("// Generated by tablegen, do not edit.")
        pub static OPCODE_NAMES: [Option<&str>; 256] = [
            $(for (byte, instr) in table.iter() => $(name_entry(byte, instr.mnemonic()))$['\r'])
        ];
    }
}

fn name_entry(byte: u8, name: Option<String>) -> rust::Tokens {
    let comment = format!("// {byte:#04x}");
    match name {
        Some(name) => quote!(Some($(quoted(name))), $comment),
        None => quote!(None, $comment),
    }
}

fn consts(table: &OpTable) -> rust::Tokens {
    quote! {
        $("// Generated by tablegen, do not edit.")
        $(for (byte, name) in table.defined() =>
            #[allow(non_upper_case_globals)]
            pub const $name: u8 = $(format!("{byte:#04x}"));$['\r'])
    }
}

pub fn write_rust<W: io::Write>(out: W, tokens: &rust::Tokens) -> anyhow::Result<()> {
    let mut w = fmt::IoWriter::new(out);
    let fmt = fmt::Config::from_lang::<Rust>().with_indentation(fmt::Indentation::Space(4));
    let config = rust::Config::default();
    tokens.format_file(&mut w.as_formatter(&fmt), &config)?;
    Ok(())
}
