use std::{fs, io::{self, Write}, path::PathBuf};

use anyhow::Context;
use clap::{Parser, builder::{PossibleValuesParser, TypedValueParser}};

use optable::{clapx::{emit_value_parser, EMIT_VALUES}, codegen::{self, Emit}, isa::OpTable};

#[derive(Parser)]
#[command(version = env!("GIT_VERSION"), about = "Emit the avc2 opcode table as Rust source")]
struct Args {
    #[arg(long, default_value = "names",
        value_parser = PossibleValuesParser::new(EMIT_VALUES).try_map(emit_value_parser))]
    emit: Emit,

    #[arg(short = 'o')]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    color_backtrace::install();
    let args = Args::parse();

    let table = OpTable::build();
    let tokens = codegen::tokens(&table, args.emit);

    match &args.output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut out = io::BufWriter::new(file);
            codegen::write_rust(&mut out, &tokens)?;
            out.flush()?;
            eprintln!("Wrote {:?} table to {}", args.emit, path.display());
        }
        None => codegen::write_rust(io::stdout().lock(), &tokens)?,
    }

    Ok(())
}
