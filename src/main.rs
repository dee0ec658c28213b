use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use num::BigInt;
use recombine::{Modulus, ShareFile};
use tracing::info;

#[derive(Parser)]
#[command(name = "recombine")]
#[command(about = "Recover a secret from a threshold set of Shamir shares")]
struct Cli {
    /// Share file to recover the secret from
    #[arg(default_value = "input.json")]
    input: PathBuf,

    /// Exponent of the Mersenne prime 2^e - 1 the shares were generated in
    #[arg(long, default_value_t = 127)]
    mersenne: u32,

    /// Explicit prime modulus in decimal, replacing the Mersenne prime
    #[arg(long, conflicts_with = "mersenne")]
    modulus: Option<String>,

    /// Base the recovered secret is printed in
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(2..=36))]
    radix: u32,
}

/// The modulus selected on the command line: an explicit decimal modulus if given, otherwise the Mersenne prime with
/// the given exponent.
fn select_modulus(modulus: Option<&str>, mersenne: u32) -> anyhow::Result<Modulus> {
    match modulus {
        Some(modulus) => {
            let value = BigInt::from_str(modulus).with_context(|| format!("invalid modulus {:?}", modulus))?;
            Ok(Modulus::new(value)?)
        }
        None => Ok(Modulus::mersenne(mersenne)?),
    }
}

fn render_secret(secret: &BigInt, radix: u32) -> String {
    format!("Recovered Secret: {}", secret.to_str_radix(radix))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "recombine=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let modulus = select_modulus(cli.modulus.as_deref(), cli.mersenne)?;
    info!(%modulus, "recombining shares");

    let shares = ShareFile::load(&cli.input)?;
    let secret = shares
        .recover_secret(&modulus)
        .with_context(|| format!("cannot recover secret from {}", cli.input.display()))?;

    println!("{}", render_secret(&secret, cli.radix));
    Ok(())
}
