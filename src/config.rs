use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Output directory used when neither `--out-dir` nor `WATTBOARD_OUTPUT_DIR` is given
pub const DEFAULT_OUTPUT_DIR: &str = "charts";

/// Load `.env` into the process environment, returning the file that was read
pub fn load_env_file() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Initialize the tracing subscriber; `RUST_LOG` overrides the default `info` level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
