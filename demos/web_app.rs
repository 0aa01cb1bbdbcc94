use reversi_arena::web::{DEFAULT_ADDR, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    println!("Reversi Arena - Web Edition");
    println!("====================================");
    println!();

    run_server(DEFAULT_ADDR).await?;

    Ok(())
}
