//! Search configuration.

use std::fmt;
use std::time::Duration;

use crate::cost::CostModel;
use crate::heuristic::Heuristic;

/// Which relaxation rule the search uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Grid-constrained: every path edge joins 8-neighbours.
    #[default]
    AStar,
    /// Any-angle: a cell may take its grandparent as parent when the two see
    /// each other.
    ThetaStar,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AStar => "A*",
            Self::ThetaStar => "Theta*",
        })
    }
}

/// Whether a closed cell may return to the frontier when a cheaper route to
/// it turns up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReopenPolicy {
    /// Reopen only when the heuristic is not consistent.
    #[default]
    Auto,
    Never,
    Always,
}

impl ReopenPolicy {
    /// Resolve the policy for `heuristic`.
    pub fn allows(self, heuristic: Heuristic) -> bool {
        match self {
            Self::Auto => !heuristic.is_consistent(),
            Self::Never => false,
            Self::Always => true,
        }
    }
}

/// Everything that parameterises a search apart from the grid and its
/// endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    pub cost_model: CostModel,
    pub variant: Variant,
    pub reopen: ReopenPolicy,
    /// Stop with [`Outcome::Cancelled`](crate::Outcome::Cancelled) after this
    /// many expansions.
    pub max_expansions: Option<usize>,
    /// Stop with [`Outcome::Cancelled`](crate::Outcome::Cancelled) once this
    /// much wall time has passed.
    pub timeout: Option<Duration>,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = cost_model;
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_reopen(mut self, reopen: ReopenPolicy) -> Self {
        self.reopen = reopen;
        self
    }

    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = SearchConfig::default();
        assert_eq!(c.heuristic, Heuristic::Octile);
        assert_eq!(c.cost_model, CostModel::Flat);
        assert_eq!(c.variant, Variant::AStar);
        assert_eq!(c.reopen, ReopenPolicy::Auto);
        assert_eq!(c.max_expansions, None);
        assert_eq!(c.timeout, None);
    }

    #[test]
    fn builder_sets_fields() {
        let c = SearchConfig::new()
            .with_heuristic(Heuristic::Euclidean)
            .with_cost_model(CostModel::Both)
            .with_variant(Variant::ThetaStar)
            .with_reopen(ReopenPolicy::Never)
            .with_max_expansions(10)
            .with_timeout(Duration::from_millis(5));
        assert_eq!(c.heuristic, Heuristic::Euclidean);
        assert_eq!(c.cost_model, CostModel::Both);
        assert_eq!(c.variant, Variant::ThetaStar);
        assert_eq!(c.reopen, ReopenPolicy::Never);
        assert_eq!(c.max_expansions, Some(10));
        assert_eq!(c.timeout, Some(Duration::from_millis(5)));
    }

    #[test]
    fn auto_reopen_follows_consistency() {
        assert!(ReopenPolicy::Auto.allows(Heuristic::Manhattan));
        assert!(!ReopenPolicy::Auto.allows(Heuristic::Octile));
        assert!(ReopenPolicy::Always.allows(Heuristic::Octile));
        assert!(!ReopenPolicy::Never.allows(Heuristic::Manhattan));
    }

    #[test]
    fn variant_names() {
        assert_eq!(Variant::AStar.to_string(), "A*");
        assert_eq!(Variant::ThetaStar.to_string(), "Theta*");
    }
}
