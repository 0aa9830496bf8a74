#[cfg(test)]
#[macro_use]
extern crate quickcheck;

use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::path::PathBuf;

use structopt::StructOpt;

mod emit;
mod error_print;
mod trie;

#[cfg(test)]
mod tests;

use crate::emit::generate_c;
use crate::error_print::{print_keyword_error, GenError};
use crate::trie::build;

#[derive(Debug, StructOpt)]
#[structopt(name = "kw2c", about = "kw2c keyword-list-file")]
struct Opt {
    /// Input file, one keyword per line
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Tag emitted when no keyword matches
    #[structopt(short = "s", long = "sentinel", default_value = "NAME")]
    sentinel: String,

    /// Output file (stdout if omitted)
    #[structopt(parse(from_os_str), short = "o", long = "out")]
    out: Option<PathBuf>,
}

fn read_source(opt: &Opt) -> Result<String, io::Error> {
    let mut file = File::open(&opt.input)?;
    let mut source = String::new();
    file.read_to_string(&mut source)?;

    Ok(source)
}

fn keywords_of(source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn run(source: &str, opt: &Opt) -> Result<(), GenError> {
    let keywords = keywords_of(source);
    let root = build(&keywords)?;

    match &opt.out {
        Some(path) => {
            let file = File::create(path)?;
            generate_c(&root, &opt.sentinel, file)?;
        }
        None => {
            let stdout = io::stdout();
            generate_c(&root, &opt.sentinel, stdout.lock())?;
        }
    }

    Ok(())
}

fn main() {
    let opt = Opt::from_args();
    let source = match read_source(&opt) {
        Ok(s) => s,
        Err(err) => return eprintln!("{}", err),
    };

    match run(&source, &opt) {
        Ok(_) => {}
        Err(e) => match e {
            GenError::BuildFail(e) => print_keyword_error(&e, &source),
            _ => eprintln!("{}", e),
        },
    }
}
