//! dnsbl - check IPv4 addresses against DNS-based blacklists.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dnsbl_cli::run().await
}
