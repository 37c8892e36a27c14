use clap::Parser;
use ragchat_cli::Cli;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    ragchat_cli::run(cli).await?;
    Ok(())
}
