//! Trellis driver: read reference trees from stdin, build a constraint set
//! for each, and print the sets' debug renderings.
//!
//! Usage: `trellis [KIND]` where KIND is one of `exact-tree`, `lex-tree`,
//! `partial-lex-tree`, `bracket` (the default).

use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

use trellis_constraint::{build, SetKind};
use trellis_core::SymbolTable;
use trellis_lang::LanguagePack;
use trellis_sexp::Reader;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let kind = match args.next() {
        None => SetKind::DEFAULT,
        Some(arg) if arg == "-h" || arg == "--help" => {
            println!("usage: trellis [exact-tree|lex-tree|partial-lex-tree|bracket]");
            println!("reads one reference tree per s-expression from stdin");
            return ExitCode::SUCCESS;
        }
        Some(name) => match name.parse::<SetKind>() {
            Ok(kind) => kind,
            Err(err) => {
                eprintln!("trellis: {err}; using {}", SetKind::DEFAULT);
                SetKind::DEFAULT
            }
        },
    };

    let mut input = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut input) {
        eprintln!("trellis: cannot read stdin: {err}");
        return ExitCode::FAILURE;
    }

    let lang = LanguagePack::default();
    let mut symbols = SymbolTable::new();
    let mut reader = Reader::new(&input, &mut symbols);
    let mut failed = false;

    loop {
        match reader.read() {
            Ok(None) => break,
            Ok(Some(tree)) => match build(kind, &tree, &lang) {
                Ok(set) => match set.to_sexp() {
                    Some(rendering) => println!("{rendering}"),
                    None => println!("()"),
                },
                // the sentence cannot be constrained; skip it and go on
                Err(err) => {
                    eprintln!("trellis: {err}");
                    failed = true;
                }
            },
            // the reader cannot resynchronize after a malformed expression
            Err(err) => {
                eprintln!("trellis: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
