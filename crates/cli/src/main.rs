//! RISC-V atomic instruction CLI.
//!
//! This binary exposes the encoder and text forms of the atomic-instruction model. It performs:
//! 1. **Disassembly:** Decode 32-bit words for the configured hart and print their mnemonics.
//! 2. **Assembly:** Parse one `lr`/`sc`/`amo<op>` instruction and print its encoding.
//!
//! The hart (XLEN and enabled extensions) comes from `--config`, or defaults to RV64 with A.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use rvamo_core::config::Config;
use rvamo_core::isa::disasm::{assemble, disassemble};
use rvamo_core::isa::rva::encode;

#[derive(Parser, Debug)]
#[command(
    name = "rvamo",
    author,
    version,
    about = "RISC-V atomic instruction assembler/disassembler",
    long_about = "Encode and decode LR, SC and AMO instructions.\n\nExamples:\n  rvamo disasm 0x1005a52f 00b6252f\n  rvamo asm amoadd.w.aqrl a0, a1, (a2)\n  rvamo --config rv32.json disasm 0x1005b52f"
)]
struct Cli {
    /// JSON configuration selecting XLEN and the enabled extensions.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode instruction words (hex, optional 0x prefix) and print their mnemonics.
    Disasm {
        /// Words to decode.
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Parse one instruction and print its 32-bit encoding.
    Asm {
        /// Instruction text; may be given unquoted.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    debug!(xlen = %config.isa.xlen, a = config.isa.a, zalrsc = config.isa.zalrsc, zaamo = config.isa.zaamo, "hart");

    match cli.command {
        Commands::Disasm { words } => cmd_disasm(&config, &words),
        Commands::Asm { text } => cmd_asm(&config, &text.join(" ")),
    }
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG` or the `-v` count.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints `<word>  <mnemonic>` for each word. Exits with 1 if any word is not valid hex.
fn cmd_disasm(config: &Config, words: &[String]) {
    let mut bad = false;
    for word in words {
        let digits = word
            .strip_prefix("0x")
            .or_else(|| word.strip_prefix("0X"))
            .unwrap_or(word);
        match u32::from_str_radix(digits, 16) {
            Ok(raw) => println!("{raw:08x}  {}", disassemble(raw, &config.isa)),
            Err(e) => {
                eprintln!("Error: `{word}` is not a 32-bit hex word: {e}");
                bad = true;
            }
        }
    }
    if bad {
        process::exit(1);
    }
}

/// Prints the encoding of one instruction. Exits with 1 on a parse error.
fn cmd_asm(config: &Config, text: &str) {
    let insn = assemble(text).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });
    if !insn.is_supported(&config.isa) {
        warn!(%insn, xlen = %config.isa.xlen, "instruction does not decode on the configured hart");
    }
    println!("{:#010x}", encode(&insn));
}
