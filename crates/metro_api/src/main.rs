use clap::Parser;
use metro_api::{GraphStore, create_app};
use std::path::PathBuf;

/// Command line arguments for the metro planner server
#[derive(Parser, Debug)]
#[command(name = "metro-api")]
#[command(about = "Metro transit route planner")]
struct Args {
    /// Directory holding the per-city metro JSON files
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Port to bind the server to
    #[arg(short, long, default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt().pretty().init();

    if !args.data_dir.is_dir() {
        return Err(format!(
            "Data directory '{}' does not exist",
            args.data_dir.display()
        )
        .into());
    }

    let store = GraphStore::new(&args.data_dir);
    let cities = store.cities();
    tracing::info!(
        "Serving {} cities from {}: [{}]",
        cities.len(),
        args.data_dir.display(),
        cities.join(", ")
    );

    // Build our application with routes
    let app = create_app(store);

    // Run our app with hyper
    let bind_addr = format!("0.0.0.0:{}", args.port);
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", bind_addr, e))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}
