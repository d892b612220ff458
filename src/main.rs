//! Netgraph - net connectivity inspector
//!
//! Loads a netlist description, builds and validates the block, and prints
//! the selected nets.
//!
//! # Usage
//!
//! ```bash
//! netgraph design.net --net clk_buf --reject-cycles
//! ```

use std::path::PathBuf;

use clap::Parser;
use netgraph_core::{
    block::{validate_block, Block, BlockConfig},
    dsl,
    error::{NetgraphError, Result},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Net connectivity inspector
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the netlist description file
    #[arg(value_name = "NETLIST_FILE")]
    netlist_file: PathBuf,

    /// Only print these nets (default: all)
    #[arg(short, long = "net", value_name = "NAME")]
    nets: Vec<String>,

    /// Reject wiring that forms a cycle
    #[arg(long)]
    reject_cycles: bool,

    /// Fail if a net is connected to a second driver
    #[arg(long)]
    no_rewire: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = BlockConfig::new()
        .with_reject_cycles(args.reject_cycles)
        .with_allow_rewire(!args.no_rewire);

    // Parse the netlist file
    let ast = dsl::parse_file(&args.netlist_file)?;

    // Build the block
    let block = Block::from_ast(ast, config)?;

    // Validate
    validate_block(&block)?;
    info!(block = %block.name(), nets = block.len(), "netlist loaded");

    let selected = if args.nets.is_empty() {
        block.ids().to_vec()
    } else {
        args.nets
            .iter()
            .map(|name| {
                block.find(name).ok_or_else(|| NetgraphError::NetNotFound {
                    name: name.clone(),
                    block: block.name().to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?
    };

    let rendered: Vec<String> = selected.iter().filter_map(|id| block.render(*id)).collect();
    println!("{}", rendered.join("\n\n"));

    Ok(())
}
