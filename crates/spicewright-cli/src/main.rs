//! spicewright command-line interface.
//!
//! Compiles hierarchical cell descriptions (YAML/JSON) into simulator-ready
//! SPICE netlists, optionally mapping generic devices onto a PDK.
//!
//! Exit codes distinguish the failing stage:
//!   1 - input file missing
//!   2 - load / PDK resolution failure
//!   3 - netlist generation failure
//!   4 - output write failure

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use spicewright_gen::{DIALECTS, get_generator};
use spicewright_ir::Netlist;
use spicewright_pdk::PdkConfig;

/// spicewright - hierarchical SPICE netlist compiler
#[derive(Parser)]
#[command(name = "spicewright")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Top cell description file (YAML or JSON)
    input: PathBuf,

    /// Output dialect (hspice, ngspice, spice3)
    #[arg(short, long, default_value = "spice3")]
    dialect: String,

    /// Output file (default: <input stem>_<dialect>.sp)
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Print the netlist to stdout instead of a file
    #[arg(long)]
    stdout: bool,

    /// PDK configuration file for technology mapping
    #[arg(long)]
    pdk: Option<PathBuf>,

    /// Process corner (default: the PDK's default corner)
    #[arg(long, requires = "pdk")]
    corner: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// A failed pipeline stage and the process exit code it maps to.
struct Failure {
    code: i32,
    error: anyhow::Error,
}

fn fail<E: Into<anyhow::Error>>(code: i32) -> impl FnOnce(E) -> Failure {
    move |e| Failure {
        code,
        error: e.into(),
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    if let Err(failure) = run(&cli) {
        eprintln!("{} {:#}", style("Error:").red().bold(), failure.error);
        std::process::exit(failure.code);
    }
}

fn run(cli: &Cli) -> Result<(), Failure> {
    if !cli.input.exists() {
        return Err(Failure {
            code: 1,
            error: anyhow::anyhow!("input file not found: {}", cli.input.display()),
        });
    }

    let netlist = load_netlist(&cli.input, cli.pdk.as_deref(), cli.corner.as_deref())
        .map_err(fail(2))?;

    let text = generate_text(&netlist, &cli.dialect).map_err(fail(3))?;

    if cli.stdout {
        print!("{text}");
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output(&cli.input, &cli.dialect));
    fs::write(&output, &text)
        .with_context(|| format!("failed to write {}", output.display()))
        .map_err(fail(4))?;

    println!(
        "{} Wrote {} ({} subcircuits, {} dialect)",
        style("✓").green().bold(),
        style(output.display()).green(),
        netlist.subckt_defs.len(),
        cli.dialect
    );
    Ok(())
}

/// Load the cell hierarchy and, if requested, map it onto a PDK.
fn load_netlist(
    input: &Path,
    pdk: Option<&Path>,
    corner: Option<&str>,
) -> anyhow::Result<Netlist> {
    let netlist = spicewright_frontend::load_file(input)
        .with_context(|| format!("failed to load {}", input.display()))?;
    tracing::info!(
        defs = netlist.subckt_defs.len(),
        top = netlist.top_cell.as_deref().unwrap_or(""),
        "hierarchy loaded"
    );

    let Some(pdk_path) = pdk else {
        return Ok(netlist);
    };
    let config = PdkConfig::load(pdk_path)
        .with_context(|| format!("failed to load PDK config {}", pdk_path.display()))?;
    let mapped = spicewright_pdk::resolve(&netlist, &config, corner)
        .with_context(|| format!("PDK mapping against '{}' failed", config.name))?;
    Ok(mapped)
}

fn generate_text(netlist: &Netlist, dialect: &str) -> anyhow::Result<String> {
    let generator = get_generator(dialect)
        .with_context(|| format!("available dialects: {}", DIALECTS.join(", ")))?;
    let text = generator.generate(netlist)?;
    Ok(text)
}

fn default_output(input: &Path, dialect: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "netlist".to_string());
    input.with_file_name(format!("{stem}_{dialect}.sp"))
}
