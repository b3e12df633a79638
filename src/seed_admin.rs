//! Prints an `ADMIN_TOKEN_HASH` line for the token given as the first
//! argument, or read from `ADMIN_TOKEN`.

use color_eyre::eyre::{Result, eyre};
use dotenv::dotenv;
use meetbook_api::middleware::auth::{hash_password, verify_password};

fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let token = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("ADMIN_TOKEN").ok())
        .ok_or_else(|| eyre!("usage: seed-admin <token> (or set ADMIN_TOKEN)"))?;

    if token.trim().len() < 12 {
        return Err(eyre!("Admin token must be at least 12 characters"));
    }

    let hash = hash_password(token.trim())?;
    if !verify_password(token.trim(), &hash)? {
        return Err(eyre!("Generated hash did not verify"));
    }

    println!("ADMIN_TOKEN_HASH={}", hash);
    Ok(())
}
