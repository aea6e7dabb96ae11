//! Changemaker Service Entry Point
//!
//! Initializes configuration, the change engine, and starts the HTTP server.

use changemaker::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
