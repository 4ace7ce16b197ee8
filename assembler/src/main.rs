//! `asm <input.asm> <imemout.txt> <dmemout.txt>`

use std::fmt::Write as _;
use std::fs;

use vm22_core::MEMORY_SIZE;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <input.asm> <imemout.txt> <dmemout.txt>", args[0]);
        std::process::exit(1);
    }

    let source = fs::read_to_string(&args[1]).unwrap_or_else(|e| {
        eprintln!("Error opening input file: {e}");
        std::process::exit(1);
    });

    let assembled = vm22_asm::assemble(&source).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    for warning in &assembled.warnings {
        eprintln!("Error: {warning}");
    }

    if assembled.instructions.len() > MEMORY_SIZE {
        eprintln!(
            "Error: {} instructions exceed the {MEMORY_SIZE}-word instruction memory",
            assembled.instructions.len()
        );
        std::process::exit(1);
    }

    let mut imem_text = String::new();
    for word in &assembled.instructions {
        writeln!(imem_text, "{word:012x}").unwrap();
    }
    for _ in assembled.instructions.len()..MEMORY_SIZE {
        imem_text.push_str("000000000000\n");
    }

    let mut dmem_text = String::new();
    for value in &assembled.dmem {
        writeln!(dmem_text, "{:08x}", *value as u32).unwrap();
    }

    if let Err(e) = fs::write(&args[2], imem_text) {
        eprintln!("Error opening imem file: {e}");
        std::process::exit(1);
    }
    if let Err(e) = fs::write(&args[3], dmem_text) {
        eprintln!("Error opening dmem file: {e}");
        std::process::exit(1);
    }
}
