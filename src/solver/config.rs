//! Search configuration

use std::time::Duration;

/// Tuning knobs for a turn search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Stop starting new lines once this much time has passed
    pub time_budget: Option<Duration>,
    /// Fan lines out across the rayon pool
    pub parallel: bool,
    /// Shortest primary word accepted
    pub min_word_len: usize,
}

impl SearchConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            time_budget: None,
            parallel: true,
            min_word_len: 2,
        }
    }

    #[must_use]
    pub const fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    #[must_use]
    pub const fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    #[must_use]
    pub const fn with_min_word_len(mut self, min_word_len: usize) -> Self {
        self.min_word_len = min_word_len;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SearchConfig::default();
        assert!(config.parallel);
        assert_eq!(config.min_word_len, 2);
        assert!(config.time_budget.is_none());
    }

    #[test]
    fn builder_methods_chain() {
        let config = SearchConfig::new()
            .sequential()
            .with_time_budget(Duration::from_millis(250))
            .with_min_word_len(3);
        assert!(!config.parallel);
        assert_eq!(config.time_budget, Some(Duration::from_millis(250)));
        assert_eq!(config.min_word_len, 3);
    }
}
