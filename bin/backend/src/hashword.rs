//! Prints an argon2 hash for a roster entry's `hashword` field.
use clap::Parser;

#[derive(Parser)]
#[command(name = "hashword", about = "Hash a password for the member roster")]
struct Args {
    /// Password to hash
    password: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let hashword = arena_auth::Roster::hashword(&args.password)?;
    println!("{}", hashword);
    Ok(())
}
