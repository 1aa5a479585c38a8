use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use colored::Colorize;

mod input;
mod output;

use input::*;
use output::*;

fn run(path: PathBuf) -> Result<(), Box<dyn Error>> {
    let mut input = Config::from_file(&path)?;
    input.with_context("constants")?;

    let functions: Vec<String> = input.read("table:functions")?;
    let orders: Vec<usize> = input.read_loop("table:order")?;
    let xs: Vec<f64> = input.read_loop("table:x")?;
    let precision: usize = input.read_optional("output:precision")?.unwrap_or(12);
    let file: Option<String> = input.read_optional("output:file")?;

    let table = Table::new(&functions, &orders, &xs, precision)?;

    let start = Instant::now();
    match file.as_ref() {
        Some(name) => {
            println!("{} {} for {} order(s) and {} argument(s)...", "Tabulating".bold().cyan(), functions.join(", "), orders.len(), xs.len());
            let f = File::create(name).map_err(|_| OutputError::Write(name.to_owned()))?;
            let mut out = BufWriter::new(f);
            table.write(&mut out, name)?;
        },
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            table.write(&mut out, "stdout")?;
        },
    }

    if let Some(name) = file.as_ref() {
        println!(
            "{} {} rows to {} in {:.3} s.",
            "Wrote".bold().bright_green(),
            table.len(),
            name.bold().blue(),
            start.elapsed().as_secs_f64(),
        );
    }

    Ok(())
}

fn main() {
    let path = match std::env::args_os().nth(1) {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("{} Usage: sphbessel input-file", "Error:".bold().red());
            std::process::exit(1);
        },
    };

    if let Err(e) = run(path) {
        eprintln!("{} {}", "Error:".bold().red(), e);
        std::process::exit(1);
    }
}
