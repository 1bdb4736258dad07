//! Result aggregation and the comparison report

mod table;

pub use table::HEADERS;

use serde::Serialize;
use std::collections::BTreeMap;

use crate::bench::stats;
use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::types::{KeySize, Operation, ReportRow, ResultCell, SampleSet};

/// Result cells of one run keyed by (iteration count, key size, operation)
#[derive(Debug, Default)]
pub struct ResultGrid {
    cells: BTreeMap<(usize, KeySize, Operation), ResultCell>,
}

impl ResultGrid {
    /// Reduce a sample set and file it under its configuration
    pub fn record(&mut self, iterations: usize, set: &SampleSet) -> Result<ResultCell> {
        let cell = stats::summarize(set).ok_or(BenchError::MissingCell {
            key_size: set.key_size,
            iterations,
            operation: set.operation,
        })?;
        self.cells
            .insert((iterations, set.key_size, set.operation), cell);
        Ok(cell)
    }

    pub fn get(
        &self,
        iterations: usize,
        key_size: KeySize,
        operation: Operation,
    ) -> Result<ResultCell> {
        self.cells
            .get(&(iterations, key_size, operation))
            .copied()
            .ok_or(BenchError::MissingCell {
                key_size,
                iterations,
                operation,
            })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Comparison table for one provider
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub provider: String,
    pub rows: Vec<ReportRow>,
}

/// Larger key measured no slower than a smaller one
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingAnomaly {
    pub operation: Operation,
    pub iterations: usize,
    pub smaller: KeySize,
    pub larger: KeySize,
    pub smaller_mean: f64,
    pub larger_mean: f64,
}

impl Report {
    /// One row per (iteration count, key size), iteration count outermost.
    /// Any missing cell fails the whole report.
    pub fn assemble(provider: &str, config: &BenchConfig, grid: &ResultGrid) -> Result<Self> {
        let mut rows = Vec::with_capacity(config.iterations.len() * config.keys.len());

        for &iterations in &config.iterations {
            for &key_size in &config.keys {
                rows.push(ReportRow {
                    key_size,
                    iterations,
                    encrypt: grid.get(iterations, key_size, Operation::Encrypt)?,
                    decrypt: grid.get(iterations, key_size, Operation::Decrypt)?,
                });
            }
        }

        Ok(Self {
            provider: provider.to_string(),
            rows,
        })
    }

    /// Adjacent key sizes whose mean latency does not grow with the modulus.
    /// Advisory only: scheduling noise can produce these on short runs.
    pub fn scaling_anomalies(&self) -> Vec<ScalingAnomaly> {
        let mut anomalies = Vec::new();

        for pair in self.rows.windows(2) {
            let (smaller, larger) = (&pair[0], &pair[1]);
            if smaller.iterations != larger.iterations {
                continue;
            }
            for (operation, small, large) in [
                (Operation::Encrypt, smaller.encrypt, larger.encrypt),
                (Operation::Decrypt, smaller.decrypt, larger.decrypt),
            ] {
                if large.mean <= small.mean {
                    anomalies.push(ScalingAnomaly {
                        operation,
                        iterations: smaller.iterations,
                        smaller: smaller.key_size,
                        larger: larger.key_size,
                        smaller_mean: small.mean,
                        larger_mean: large.mean,
                    });
                }
            }
        }

        anomalies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(key: u32, op: Operation, samples: Vec<f64>) -> SampleSet {
        SampleSet::new(KeySize(key), op, samples)
    }

    fn filled_grid(config: &BenchConfig) -> ResultGrid {
        let mut grid = ResultGrid::default();
        for &n in &config.iterations {
            for &key in &config.keys {
                let base = key.bits() as f64 * 1e-7;
                grid.record(n, &sample(key.bits(), Operation::Encrypt, vec![base; n]))
                    .unwrap();
                grid.record(n, &sample(key.bits(), Operation::Decrypt, vec![base * 10.0; n]))
                    .unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_row_order_iterations_outer_keys_inner() {
        let config = BenchConfig::new(vec![10, 100], vec![2048, 4096]);
        let report = Report::assemble("mock", &config, &filled_grid(&config)).unwrap();

        let order: Vec<_> = report
            .rows
            .iter()
            .map(|r| (r.iterations, r.key_size.bits()))
            .collect();
        assert_eq!(order, vec![(10, 2048), (10, 4096), (100, 2048), (100, 4096)]);
        assert_eq!(report.provider, "mock");
    }

    #[test]
    fn test_cells_land_in_their_row() {
        let config = BenchConfig::new(vec![4], vec![2048]);
        let mut grid = ResultGrid::default();
        grid.record(4, &sample(2048, Operation::Encrypt, vec![1.0, 2.0, 3.0, 4.0]))
            .unwrap();
        grid.record(4, &sample(2048, Operation::Decrypt, vec![5.0; 4]))
            .unwrap();

        let report = Report::assemble("mock", &config, &grid).unwrap();
        let row = &report.rows[0];
        assert_eq!(row.encrypt.mean, 2.5);
        assert!((row.encrypt.std_dev - 1.25f64.sqrt()).abs() < 1e-12);
        assert_eq!(row.decrypt, ResultCell { mean: 5.0, std_dev: 0.0 });
    }

    #[test]
    fn test_missing_cell_fails_report() {
        let config = BenchConfig::new(vec![10], vec![2048]);
        let mut grid = ResultGrid::default();
        grid.record(10, &sample(2048, Operation::Encrypt, vec![1.0; 10]))
            .unwrap();

        let err = Report::assemble("mock", &config, &grid).unwrap_err();
        assert!(matches!(
            err,
            BenchError::MissingCell { operation: Operation::Decrypt, iterations: 10, .. }
        ));
    }

    #[test]
    fn test_empty_sample_set_is_not_recorded() {
        let mut grid = ResultGrid::default();
        assert!(grid
            .record(0, &sample(2048, Operation::Encrypt, vec![]))
            .is_err());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_scaling_anomalies() {
        let config = BenchConfig::new(vec![10], vec![2048, 4096]);
        let report = Report::assemble("mock", &config, &filled_grid(&config)).unwrap();
        assert!(report.scaling_anomalies().is_empty());

        let mut inverted = report.clone();
        inverted.rows[1].decrypt.mean = 0.0;
        let anomalies = inverted.scaling_anomalies();
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].operation, Operation::Decrypt);
        assert_eq!(anomalies[0].smaller, KeySize(2048));
        assert_eq!(anomalies[0].larger, KeySize(4096));
    }

    #[test]
    fn test_no_scaling_comparison_across_iteration_counts() {
        let config = BenchConfig::new(vec![10, 100], vec![4096]);
        let mut report = Report::assemble("mock", &config, &filled_grid(&config)).unwrap();
        report.rows[1].encrypt.mean = 0.0;
        assert!(report.scaling_anomalies().is_empty());
    }
}
