use anyhow::{Context, Result};
use clap::CommandFactory;
use clap::{Parser, Subcommand};
use mailfsm_lib::validate_email;

use std::io::{self, BufRead};

#[derive(Parser)]
#[command(name = "mailfsm-cli")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Commands>,

    /// read addresses from stdin (one per line)
    #[arg(long)]
    stdin: bool,

    /// write report to file (JSON/NDJSON/CSV depending on --format)
    #[arg(long)]
    out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// classify a single address
    Check { address: String },
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
struct CheckedAddress {
    address: String,
    valid: bool,
    reason: Option<String>,
}

fn check_one(address: &str) -> CheckedAddress {
    let report = validate_email(Some(address));
    #[cfg(feature = "with-tracing")]
    tracing::debug!(address, valid = report.ok, "checked");
    CheckedAddress {
        address: address.to_string(),
        valid: report.ok,
        reason: report.reason.map(|r| r.to_string()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rows: Vec<CheckedAddress> = Vec::new();

    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let address = line.context("read stdin")?;
            rows.push(check_one(&address));
        }
    } else if let Some(Commands::Check { address }) = cli.cmd {
        rows.push(check_one(&address));
    } else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    match cli.format.as_str() {
        "human" => {
            for r in &rows {
                if r.valid {
                    println!("[OK]      {}", r.address);
                } else {
                    println!(
                        "[INVALID] {} :: {}",
                        r.address,
                        r.reason.as_deref().unwrap_or("rejected")
                    );
                }
            }
        }
        "json" => {
            #[cfg(feature = "with-serde")]
            {
                let s = serde_json::to_string_pretty(&rows)?;
                if let Some(path) = cli.out {
                    write_all_atomically(&path, s.as_bytes())?;
                } else {
                    println!("{s}");
                }
            }
            #[cfg(not(feature = "with-serde"))]
            {
                eprintln!("format=json needs the 'with-serde' feature");
                std::process::exit(1);
            }
        }
        "ndjson" => {
            #[cfg(feature = "with-serde")]
            {
                if let Some(path) = &cli.out {
                    let mut buf = Vec::new();
                    for r in &rows {
                        let line = serde_json::to_string(r)?;
                        buf.extend_from_slice(line.as_bytes());
                        buf.push(b'\n');
                    }
                    write_all_atomically(path, &buf)?;
                } else {
                    for r in &rows {
                        println!("{}", serde_json::to_string(r)?);
                    }
                }
            }
            #[cfg(not(feature = "with-serde"))]
            {
                eprintln!("format=ndjson needs the 'with-serde' feature");
                std::process::exit(1);
            }
        }
        "csv" => {
            #[cfg(feature = "with-csv")]
            {
                if let Some(path) = &cli.out {
                    let mut wtr = csv::Writer::from_writer(Vec::new());
                    for r in &rows {
                        write_csv_row(&mut wtr, r)?;
                    }
                    let data = wtr.into_inner()?;
                    write_all_atomically(path, &data)?;
                } else {
                    let mut wtr = csv::Writer::from_writer(std::io::stdout());
                    for r in &rows {
                        write_csv_row(&mut wtr, r)?;
                    }
                    wtr.flush()?;
                }
            }
            #[cfg(not(feature = "with-csv"))]
            {
                eprintln!("format=csv needs the 'with-csv' feature");
                std::process::exit(1);
            }
        }
        other => {
            eprintln!("unknown --format '{}', use: human|json|ndjson|csv", other);
            std::process::exit(1);
        }
    }

    // exit codes: 0 all valid, 2 some invalid, 1 fatal
    let any_invalid = rows.iter().any(|r| !r.valid);
    if any_invalid {
        std::process::exit(2);
    }
    Ok(())
}

#[cfg(feature = "with-csv")]
fn write_csv_row<W: std::io::Write>(
    wtr: &mut csv::Writer<W>,
    r: &CheckedAddress,
) -> Result<()> {
    wtr.write_record([
        r.address.as_str(),
        if r.valid { "true" } else { "false" },
        r.reason.as_deref().unwrap_or(""),
    ])?;
    Ok(())
}

#[cfg(any(feature = "with-serde", feature = "with-csv"))]
fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;
    let tmp = format!("{}.tmp", path);
    {
        let mut f = std::fs::File::create(&tmp)?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path)?;
    Ok(())
}
