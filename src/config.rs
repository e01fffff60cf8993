use crate::errors::{MineError, Result};

/// Thresholds for a mining run. Defaults match the usual starting point for
/// retail basket data: 1% support, 30% confidence, lift 1.2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningConfig {
    /// Minimum itemset support, as a fraction of all transactions. In (0, 1].
    pub min_support: f64,
    /// Minimum rule confidence. In (0, 1].
    pub min_confidence: f64,
    /// Minimum rule lift. Must be positive; 1.0 keeps only rules at least as
    /// likely as independence.
    pub min_lift: f64,
}

impl Default for MiningConfig {
    fn default() -> MiningConfig {
        MiningConfig {
            min_support: 0.01,
            min_confidence: 0.3,
            min_lift: 1.2,
        }
    }
}

impl MiningConfig {
    /// Rejects out-of-domain thresholds before any computation starts.
    pub fn validate(&self) -> Result<()> {
        if !(self.min_support > 0.0 && self.min_support <= 1.0) {
            return Err(MineError::InvalidThreshold {
                name: "support",
                value: self.min_support,
                domain: "(0, 1]",
            });
        }
        if !(self.min_confidence > 0.0 && self.min_confidence <= 1.0) {
            return Err(MineError::InvalidThreshold {
                name: "confidence",
                value: self.min_confidence,
                domain: "(0, 1]",
            });
        }
        if !(self.min_lift > 0.0) {
            return Err(MineError::InvalidThreshold {
                name: "lift",
                value: self.min_lift,
                domain: "(0, ∞)",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MiningConfig;
    use crate::errors::MineError;

    #[test]
    fn test_defaults() {
        let config = MiningConfig::default();
        assert_eq!(config.min_support, 0.01);
        assert_eq!(config.min_confidence, 0.3);
        assert_eq!(config.min_lift, 1.2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_domain() {
        let cases = [
            MiningConfig {
                min_support: 0.0,
                ..MiningConfig::default()
            },
            MiningConfig {
                min_support: 1.5,
                ..MiningConfig::default()
            },
            MiningConfig {
                min_support: -0.1,
                ..MiningConfig::default()
            },
            MiningConfig {
                min_confidence: 0.0,
                ..MiningConfig::default()
            },
            MiningConfig {
                min_confidence: 1.01,
                ..MiningConfig::default()
            },
            MiningConfig {
                min_lift: 0.0,
                ..MiningConfig::default()
            },
            MiningConfig {
                min_lift: -1.0,
                ..MiningConfig::default()
            },
        ];
        for config in &cases {
            match config.validate() {
                Err(MineError::InvalidThreshold { .. }) => {}
                other => panic!("expected InvalidThreshold, got {:?}", other),
            }
        }
    }
}
