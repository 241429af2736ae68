use std::process;

use clap::{Args, Parser, Subcommand};
use splitball_config::{decode, describe, dpi_table, encode, keyboard, keycode_table, parse_raw};

/// Inspect and plan the pointer settings of Splitball keyboards
#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// The keyboard whose pointer settings to use: a-dux or charybdis-3x5
    #[clap(long, short, default_value = "a-dux")]
    keyboard: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the fields of a stored pointer config byte
    Decode(DecodeArgs),
    /// Compute the config byte for a pair of DPI values
    Encode(EncodeArgs),
    /// List every default and sniping DPI step
    DpiTable,
    /// List the custom keycodes
    Keycodes,
    /// Show the keyboard definition
    Info,
}

#[derive(Args)]
struct DecodeArgs {
    /// Config byte or eeconfig keyboard word; decimal, 0x hex or 0b binary
    raw: String,
}

#[derive(Args)]
struct EncodeArgs {
    /// Default DPI; must be one of the dpi-table steps
    #[clap(long, short, default_value_t = 1000)]
    default_dpi: u16,
    /// Sniping DPI; must be one of the dpi-table steps
    #[clap(long, short, default_value_t = 200)]
    sniping_dpi: u16,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(out) => println!("{out}"),
        Err(err) => {
            eprintln!("{err:#}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let def = keyboard(&cli.keyboard)?;
    log::debug!("using {} pointer settings", def.name);
    let settings = &def.pointer;

    Ok(match &cli.command {
        Commands::Decode(args) => decode(settings, parse_raw(&args.raw)?),
        Commands::Encode(args) => {
            let raw = encode(settings, args.default_dpi, args.sniping_dpi)?;
            format!("{raw:#04x}")
        }
        Commands::DpiTable => dpi_table(settings),
        Commands::Keycodes => keycode_table(),
        Commands::Info => describe(def),
    })
}
