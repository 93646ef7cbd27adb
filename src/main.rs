use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
mod auth;
use passhash::{Encoding, KdfParams, hash_password, verify_password};

#[derive(Debug, clap::Args)]
struct PbkdfArgs {
    /// PBKDF2 iteration count (default: 200000)
    #[arg(long)]
    iterations: Option<u32>,

    /// Derived key length in bytes (default: 32)
    #[arg(long = "key-len")]
    key_len: Option<usize>,

    /// Salt length in bytes (default: 16)
    #[arg(long = "salt-len")]
    salt_len: Option<usize>,
}

impl PbkdfArgs {
    fn to_kdf_params(&self) -> anyhow::Result<KdfParams> {
        let default = KdfParams::default();

        KdfParams::new(
            self.iterations.unwrap_or(default.iterations()),
            self.key_len.unwrap_or(default.key_len()),
            self.salt_len.unwrap_or(default.salt_len()),
        )
    }
}

#[derive(Debug, Parser)]
#[command(name = "passhash")]
#[command(
    version,
    about = "Simple, offline password hashing and verification engine written in Rust."
)]
struct Cli {
    /// Use the legacy hex encoding era
    #[arg(long, global = true, default_value_t = false)]
    legacy: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hashes a password into a storable credential string
    Hash {
        #[command(flatten)]
        pbkdf2: PbkdfArgs,
    },

    /// Verifies a password against a stored credential string
    #[command(arg_required_else_help = true)]
    Verify { hash: String },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let encoding = Encoding::from_legacy_flag(args.legacy);
    let password = auth::read_password()?;

    match args.command {
        Commands::Hash { pbkdf2 } => {
            let params = pbkdf2.to_kdf_params()?;
            let hash = hash_password(&password, params, encoding)?;
            println!("{hash}");
        }
        Commands::Verify { hash } => {
            if verify_password(&password, &hash, encoding)? {
                println!("password verified");
            } else {
                bail!("password mismatch");
            }
        }
    }

    Ok(())
}
