//! Recipe service entry point. Configuration is read from the environment, see the `server` crate docs.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::start_server().await
}
