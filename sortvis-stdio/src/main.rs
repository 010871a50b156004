use sortvis_stdio::{StdioError, config_from_env, init_tracing, serve};
use tokio::io::BufReader;

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("sortvis-stdio error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), StdioError> {
    if std::env::args().skip(1).any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return Ok(());
    }
    init_tracing();
    let config = config_from_env();
    tracing::debug!(config = ?config, "sortvis.stdio.config");
    serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), config).await?;
    Ok(())
}

fn print_usage() {
    println!("sortvis-stdio < requests.jsonl");
    println!();
    println!("Reads one JSON request per line from stdin and writes JSON lines to stdout.");
    println!("  {{\"event\":\"list_algorithms\"}}");
    println!("  {{\"event\":\"execute_algorithm\",\"name\":\"Bubble Sort\",\"input\":[3,1,2]}}");
    println!("  {{\"event\":\"stop_algorithm\"}}");
    println!();
    println!("Environment: SORTVIS_STEP_DELAY_MS, SORTVIS_MAX_COUNTING_RANGE, RUST_LOG");
}
