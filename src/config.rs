//! Configuration for appearance generation.

/// What to do with a text run whose quadrilateral has no positive height.
///
/// A run's height is the top-left y minus the bottom-left y. Zero collapses
/// the wave transform to a point; a negative value mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegenerateRunPolicy {
    /// Leave the run out of the appearance.
    #[default]
    Skip,
    /// Emit the run with whatever transform its height produces.
    ///
    /// Runs whose numbers are not finite, such as a zero height, are
    /// still left out.
    PassThrough,
}

/// Appearance generation configuration.
#[derive(Debug, Clone)]
pub struct AppearanceConfig {
    /// Fill the wave rectangle with the tiling pattern in the annotation color.
    ///
    /// When false the pattern is registered on each run's form but never
    /// selected, so the rectangle fills with the default non-stroking color.
    pub bind_pattern_color: bool,

    /// Handling of zero or negative height runs.
    pub degenerate_runs: DegenerateRunPolicy,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppearanceConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            bind_pattern_color: true,
            degenerate_runs: DegenerateRunPolicy::Skip,
        }
    }

    /// Bind (or leave unbound) the pattern fill to the annotation color.
    pub fn with_pattern_color(mut self, bind: bool) -> Self {
        self.bind_pattern_color = bind;
        self
    }

    /// Set the degenerate run policy.
    pub fn with_degenerate_runs(mut self, policy: DegenerateRunPolicy) -> Self {
        self.degenerate_runs = policy;
        self
    }
}
