//! Issue and verify a token using environment configuration.
//!
//! ```sh
//! JWT_SECRET=s3cr3t JWT_EXPIRY_SECONDS=60 cargo run --example issue_token -- u1 a@b.com
//! ```

use token_codec::telemetry::init_tracing;
use token_codec::{Claim, CodecConfig, TokenCodec};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let mut args = std::env::args().skip(1);
    let user_id = args.next().unwrap_or_else(|| "u1".to_string());
    let email = args.next().unwrap_or_else(|| "a@b.com".to_string());

    let config = CodecConfig::from_env()?;
    let codec = TokenCodec::from_config(&config)?;
    info!(expiry_secs = codec.expiry().as_secs(), "codec ready");

    let token = codec.sign(&Claim::new(user_id, email))?;
    println!("{token}");

    let claim = codec.verify(&token)?;
    info!(user_id = %claim.user_id, "token verified");

    Ok(())
}
