use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use netlist_setup::run;

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Generate primitive device netlists and the netlist setup for a technology"
)]
pub struct Args {
    /// The technology configuration file (YAML, TOML or JSON).
    config: PathBuf,
    /// The directory to write generated files to.
    output_dir: PathBuf,
    /// The file name of the netlist setup document.
    #[arg(long, default_value = primgen::NETLIST_SETUP_FILE)]
    setup_name: String,
}

pub fn main() -> anyhow::Result<()> {
    clilog::init_stderr_color_debug();
    let args = Args::parse();
    let (path, _) = run(&args.config, &args.output_dir, &args.setup_name)
        .with_context(|| format!("failed to generate netlists from {:?}", args.config))?;
    log::info!("wrote netlist setup to {path:?}");
    Ok(())
}
