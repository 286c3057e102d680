//! Price resolution for the tracked ETF basket.
//!
//! The engine only ever sees fully resolved values; whatever degradation
//! happens here is reported as diagnostic strings, never as errors. This
//! build ships the offline [`BackupResolver`]; a live-quote resolver would
//! implement the same trait.

use patrimonio_core::model::EtfPosition;
use rustc_hash::FxHashMap;

/// Resolved value per position name, plus non-fatal diagnostics to
/// surface verbatim on the dashboard.
#[derive(Debug, Default)]
pub struct Resolution {
    pub values: FxHashMap<String, f64>,
    pub diagnostics: Vec<String>,
}

impl Resolution {
    /// Sum of all resolved position values: the basket total injected
    /// into the portfolio before aggregation.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    /// Resolved value of one position, zero if unknown.
    #[must_use]
    pub fn value_of(&self, name: &str) -> f64 {
        self.values.get(name).copied().unwrap_or(0.0)
    }
}

/// Turns ETF positions into currency values.
pub trait PriceResolver {
    /// Resolve every position. Must produce a value for each input;
    /// degraded lookups fall back rather than fail.
    fn resolve(&self, positions: &[EtfPosition]) -> Resolution;
}

/// Offline resolver: every position is valued at its configured backup.
///
/// Invariant: a position without a ticker resolves to exactly its backup
/// value (there is nothing else it could resolve to, offline or not).
#[derive(Debug, Default)]
pub struct BackupResolver;

impl PriceResolver for BackupResolver {
    fn resolve(&self, positions: &[EtfPosition]) -> Resolution {
        let mut resolution = Resolution::default();

        let quoted = positions.iter().filter(|p| p.ticker.is_some()).count();
        if quoted > 0 {
            resolution.diagnostics.push(format!(
                "live pricing disabled: {quoted} quoted position(s) valued at their backups"
            ));
        }

        for position in positions {
            if position.ticker.is_none() {
                resolution.diagnostics.push(format!(
                    "{}: no ticker configured, using backup value",
                    position.name
                ));
            }
            resolution
                .values
                .insert(position.name.clone(), position.backup_value);
        }

        resolution
    }
}
