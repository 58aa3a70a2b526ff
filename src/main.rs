use pattern_lab::LabConfig;
use pattern_lab::scenarios;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("=== Pattern Lab ===");

    let config = match LabConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {} (using defaults)", e);
            LabConfig::default()
        }
    };
    tracing::debug!(?config, "configuration loaded");

    if let Err(e) = scenarios::run_all(&config) {
        eprintln!("ERROR: {}", e);
    }
}
