use crate::error::{MiningError, Result};
use std::str::FromStr;

/// Minimum support threshold, either as a raw transaction count or as a
/// fraction of the number of transactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    Absolute(usize),
    Relative(f64),
}

impl MinSupport {
    pub fn validate(&self) -> Result<()> {
        match *self {
            MinSupport::Absolute(0) => Err(MiningError::InvalidMinSupport(0)),
            MinSupport::Absolute(_) => Ok(()),
            MinSupport::Relative(f) if f.is_finite() && f > 0.0 && f <= 1.0 => Ok(()),
            MinSupport::Relative(f) => Err(MiningError::InvalidRelativeSupport(f)),
        }
    }

    /// Resolves the threshold to an absolute count for `num_transactions`.
    /// A relative threshold rounds up and never drops below one. Products
    /// within float noise of an integer snap to it first, so 0.07 of 100
    /// is 7 rather than 8.
    pub fn min_count(&self, num_transactions: usize) -> usize {
        match *self {
            MinSupport::Absolute(count) => count,
            MinSupport::Relative(f) => {
                let exact = f * num_transactions as f64;
                let snapped = exact.round();
                let count = if (exact - snapped).abs() <= 1e-9 * exact.max(1.0) {
                    snapped
                } else {
                    exact.ceil()
                };
                (count as usize).max(1)
            }
        }
    }
}

/// Parses integers (`"3"`) as absolute counts and anything else float-like
/// (`"0.25"`, `"5e-2"`) as a fraction.
impl FromStr for MinSupport {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let support = match s.parse::<usize>() {
            Ok(count) => MinSupport::Absolute(count),
            Err(_) => s.parse::<f64>().map(MinSupport::Relative).map_err(|e| e.to_string())?,
        };
        support.validate().map_err(|e| e.to_string())?;
        Ok(support)
    }
}

impl From<usize> for MinSupport {
    fn from(count: usize) -> Self {
        MinSupport::Absolute(count)
    }
}

impl From<f64> for MinSupport {
    fn from(fraction: f64) -> Self {
        MinSupport::Relative(fraction)
    }
}

#[derive(Debug, Clone)]
pub struct MiningConfig {
    pub min_support: MinSupport,
    /// Longest itemset to report. `None` means unbounded.
    pub max_len: Option<usize>,
    /// Enumerate single-chain trees directly instead of recursing into them.
    pub single_path: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: MinSupport::Absolute(1),
            max_len: None,
            single_path: false,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: impl Into<MinSupport>) -> Self {
        Self {
            min_support: min_support.into(),
            ..Self::default()
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_single_path(mut self, enabled: bool) -> Self {
        self.single_path = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.min_support.validate()?;
        if self.max_len == Some(0) {
            return Err(MiningError::InvalidMaxLen);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_support_rounds_up() {
        assert_eq!(MinSupport::Relative(0.5).min_count(5), 3);
        assert_eq!(MinSupport::Relative(0.4).min_count(5), 2);
        assert_eq!(MinSupport::Relative(0.01).min_count(0), 1);
    }

    #[test]
    fn test_relative_support_ignores_float_noise() {
        // 0.07 * 100 evaluates to 7.000000000000001
        assert_eq!(MinSupport::Relative(0.07).min_count(100), 7);
        assert_eq!(MinSupport::Relative(0.29).min_count(100), 29);
        assert_eq!(MinSupport::Relative(0.071).min_count(100), 8);
        assert_eq!(MinSupport::Relative(1.0).min_count(1000), 1000);
    }

    #[test]
    fn test_relative_support_keeps_itemsets_at_threshold() {
        let mut transactions = vec![vec!["a"]; 7];
        transactions.extend(vec![vec!["b"]; 93]);

        let result =
            crate::mine_with_config(&transactions, &MiningConfig::new(MinSupport::Relative(0.07)))
                .unwrap();
        assert_eq!(result.support_of(&["a"]), Some(7));
        assert_eq!(result.support_of(&["b"]), Some(93));
    }

    #[test]
    fn test_validation() {
        assert!(MiningConfig::new(0usize).validate().is_err());
        assert!(MiningConfig::new(0.0).validate().is_err());
        assert!(MiningConfig::new(1.5).validate().is_err());
        assert!(MiningConfig::new(f64::NAN).validate().is_err());
        assert!(MiningConfig::new(2usize).with_max_len(0).validate().is_err());
        assert!(MiningConfig::new(1.0).with_max_len(3).validate().is_ok());
    }

    #[test]
    fn test_parse() {
        assert_eq!("3".parse::<MinSupport>(), Ok(MinSupport::Absolute(3)));
        assert_eq!(" 0.25 ".parse::<MinSupport>(), Ok(MinSupport::Relative(0.25)));
        assert!("0".parse::<MinSupport>().is_err());
        assert!("2.5".parse::<MinSupport>().is_err());
        assert!("many".parse::<MinSupport>().is_err());
        assert_eq!("5e-2".parse::<MinSupport>(), Ok(MinSupport::Relative(0.05)));
        assert_eq!("1.0".parse::<MinSupport>(), Ok(MinSupport::Relative(1.0)));
    }
}
