use std::io::IsTerminal;

use anyhow::Result;
use clap::{Parser, Subcommand, builder::{PossibleValuesParser, StringValueParser, TypedValueParser}};
use termcolor::{ColorChoice, StandardStream};

use optable::{clapx::{self, COLOR_VALUES}, isa::OpTable, render};

#[derive(Parser)]
#[command(name = "optable", version = env!("GIT_VERSION"), about = "Opcode table for the avc2 stack machine")]
struct Args {
    #[arg(long, default_value = "auto",
        value_parser = PossibleValuesParser::new(COLOR_VALUES).try_map(clapx::color_value_parser))]
    color: ColorChoice,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 16x16 grid, high nybble down and low nybble across
    Grid,
    /// One line per opcode byte
    List {
        /// Include undefined bytes
        #[arg(short, long)]
        all: bool,
    },
    /// Decode opcode bytes and show which rule applied
    Lookup {
        #[arg(required = true, value_parser = StringValueParser::new().try_map(clapx::parse_byte))]
        bytes: Vec<u8>,
    },
    /// Find the opcode byte of mnemonics
    Find {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

fn main() -> Result<()> {
    color_backtrace::install();
    let args = Args::parse();

    let choice = match args.color {
        ColorChoice::Auto if !std::io::stdout().is_terminal() => ColorChoice::Never,
        choice => choice,
    };
    let mut stdout = StandardStream::stdout(choice);
    let table = OpTable::shared();

    match args.command {
        Command::Grid => {
            render::write_grid(&mut stdout, table)?;
            eprintln!("{} of {} opcodes defined", table.defined().count(), table.len());
        }
        Command::List { all } => {
            render::write_list(&mut stdout, table, all)?;
            eprintln!("{} of {} opcodes defined", table.defined().count(), table.len());
        }
        Command::Lookup { bytes } => {
            for byte in bytes {
                render::write_lookup(&mut stdout, table, byte)?;
            }
        }
        Command::Find { names } => render::write_find(&mut stdout, table, &names)?,
    }

    Ok(())
}
