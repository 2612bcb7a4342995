use ::std::{error::Error, path::PathBuf};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Creates trigram models from `<inp>/<Script>/<language>.txt` files
#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[arg(short = 'i', required = true)]
    inp: PathBuf,

    #[arg(short = 'o', required = true)]
    out: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let models = langrank_train::create_models(&args.inp)?;
    langrank_train::write_models(&models, &args.out)?;

    Ok(())
}
