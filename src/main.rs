//! RSA-OAEP latency benchmark CLI
//! Tables go to stdout, logs to stderr

use rsa_bench::{BenchmarkSuite, Config, LoggingConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingConfig) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if logging.json_output {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_logging(&config.logging);

    info!(
        iterations = ?config.benchmark.iterations,
        keys = ?config.benchmark.keys,
        providers = ?config.providers,
        "Configuration loaded"
    );

    let reports = BenchmarkSuite::new(config).run()?;

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{report}");
    }

    Ok(())
}
