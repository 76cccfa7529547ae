//! Data source selection.

use data_spi::{DataError, DataSource, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::synthetic::{GeneratorConfig, SyntheticSource};

/// Which provider the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Synthetic,
    /// Live metering feed. No contract exists for it yet, so requesting it
    /// falls back to the synthetic source.
    Live,
}

impl SourceKind {
    pub fn from_live_flag(live: bool) -> Self {
        if live {
            Self::Live
        } else {
            Self::Synthetic
        }
    }
}

/// Open the data source for `kind`.
///
/// `seed` makes the synthetic series reproducible; `None` seeds from entropy.
pub fn open_source(
    kind: SourceKind,
    config: GeneratorConfig,
    seed: Option<u64>,
) -> Result<Box<dyn DataSource>> {
    if kind == SourceKind::Live {
        let reason = DataError::Unavailable {
            source_name: "live".to_string(),
            reason: "no live feed configured".to_string(),
        };
        warn!(error = %reason, "falling back to synthetic data");
    }

    let source = match seed {
        Some(seed) => SyntheticSource::seeded(config, seed)?,
        None => SyntheticSource::from_entropy(config)?,
    };
    Ok(Box::new(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_flag_mapping() {
        assert_eq!(SourceKind::from_live_flag(true), SourceKind::Live);
        assert_eq!(SourceKind::from_live_flag(false), SourceKind::Synthetic);
    }

    #[test]
    fn test_live_falls_back_to_synthetic() {
        let source = open_source(SourceKind::Live, GeneratorConfig::default(), Some(7)).unwrap();
        assert_eq!(source.name(), "synthetic");
    }

    #[test]
    fn test_invalid_config_propagates() {
        let config = GeneratorConfig {
            window_days: 0,
            ..GeneratorConfig::default()
        };
        assert!(open_source(SourceKind::Synthetic, config, None).is_err());
    }
}
