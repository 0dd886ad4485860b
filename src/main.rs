use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    pokeverse::cli::run().await
}
