//! Configuration module

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};
use crate::provider::ProviderKind;
use crate::types::KeySize;

/// Environment variable naming the JSON config file
pub const CONFIG_ENV: &str = "RSA_BENCH_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/bench.json";

/// Main configuration struct
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Measurement grid
    pub benchmark: BenchConfig,

    /// Providers to compare, in report order
    pub providers: Vec<ProviderKind>,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Grid handed to the harness for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Repetition counts, strictly ascending
    pub iterations: Vec<usize>,

    /// RSA modulus sizes in bits, strictly ascending
    pub keys: Vec<KeySize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub json_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_output: false,
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: vec![10, 100, 1000, 10000],
            keys: vec![KeySize(2048), KeySize(4096)],
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            benchmark: BenchConfig::default(),
            providers: ProviderKind::all(),
            logging: LoggingConfig::default(),
        }
    }
}

impl BenchConfig {
    pub fn new(iterations: Vec<usize>, keys: Vec<u32>) -> Self {
        Self {
            iterations,
            keys: keys.into_iter().map(KeySize).collect(),
        }
    }

    /// Both axes must be non-empty, zero-free and strictly ascending
    pub fn validate(&self) -> Result<()> {
        if self.iterations.is_empty() {
            return Err(BenchError::InvalidConfig("no iteration counts".into()));
        }
        if self.keys.is_empty() {
            return Err(BenchError::InvalidConfig("no key sizes".into()));
        }
        if self.iterations.contains(&0) {
            return Err(BenchError::InvalidConfig(
                "iteration counts must be positive".into(),
            ));
        }
        if self.keys.contains(&KeySize(0)) {
            return Err(BenchError::InvalidConfig("key sizes must be positive".into()));
        }
        if !self.iterations.windows(2).all(|w| w[0] < w[1]) {
            return Err(BenchError::InvalidConfig(format!(
                "iteration counts must be strictly ascending: {:?}",
                self.iterations
            )));
        }
        if !self.keys.windows(2).all(|w| w[0] < w[1]) {
            return Err(BenchError::InvalidConfig(format!(
                "key sizes must be strictly ascending: {:?}",
                self.keys.iter().map(KeySize::bits).collect::<Vec<_>>()
            )));
        }
        Ok(())
    }

    /// Total timed calls per provider, both operations included
    pub fn total_operations(&self) -> usize {
        self.iterations.iter().sum::<usize>() * self.keys.len() * 2
    }
}

impl Config {
    /// Load config from environment
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let config_path =
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if std::path::Path::new(&config_path).exists() {
            Self::load(&config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Read and validate a JSON config file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.providers.is_empty() {
            return Err(BenchError::InvalidConfig("no providers selected".into()));
        }
        self.benchmark.validate()
    }

    /// Save config to file
    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
