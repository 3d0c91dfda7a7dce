use tracing::warn;

/// Tunables for the ledger and the drafts it seeds.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    depth_step_m: f64,
    time_step_minutes: i64,
    warn_on_depth_gap: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            depth_step_m: 0.1,
            time_step_minutes: 5,
            warn_on_depth_gap: true,
        }
    }
}

impl LedgerConfig {
    /// Granularity draft depths snap to. A step that is not a positive finite
    /// number is ignored and the current step kept.
    pub fn depth_step_m(mut self, step: f64) -> Self {
        if step.is_finite() && step > 0.0 {
            self.depth_step_m = step;
        } else {
            warn!(step, "ignoring unusable depth step");
        }
        self
    }

    pub fn time_step_minutes(mut self, minutes: i64) -> Self {
        self.time_step_minutes = minutes;
        self
    }

    /// Log a warning when an appended drilling block does not start where the
    /// previous drilling block ended.
    pub fn warn_on_depth_gap(mut self, warn: bool) -> Self {
        self.warn_on_depth_gap = warn;
        self
    }

    pub fn depth_step(&self) -> f64 {
        self.depth_step_m
    }

    pub fn time_step(&self) -> i64 {
        self.time_step_minutes
    }

    pub fn warns_on_depth_gap(&self) -> bool {
        self.warn_on_depth_gap
    }
}
