use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Accumulated wall time of one evaluation stage.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StageTiming {
    pub total: Duration,
    pub calls: u32,
}

/// Per-stage timings collected while evaluating fields.
#[derive(Default)]
pub struct Profiler {
    pub stages: HashMap<&'static str, StageTiming>,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, stage: &'static str, elapsed: Duration) {
        let timing = self.stages.entry(stage).or_default();
        timing.total += elapsed;
        timing.calls += 1;
    }

    /// Stages ordered by total time, slowest first.
    pub fn slowest_first(&self) -> Vec<(&'static str, StageTiming)> {
        let mut stages: Vec<_> = self.stages.iter().map(|(name, t)| (*name, *t)).collect();
        stages.sort_by(|a, b| b.1.total.cmp(&a.1.total));
        stages
    }

    pub fn clear(&mut self) {
        self.stages.clear();
    }

    pub fn log_and_clear(&mut self) {
        for (stage, timing) in self.slowest_first() {
            tracing::info!(
                stage,
                calls = timing.calls,
                total_us = timing.total.as_micros() as u64,
                "profile"
            );
        }
        self.clear();
    }
}

/// Times one stage from creation until it goes out of scope.
pub struct StageTimer {
    stage: &'static str,
    began: Instant,
}

impl StageTimer {
    pub fn begin(stage: &'static str) -> Self {
        Self {
            stage,
            began: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.began.elapsed()
    }
}

#[cfg(feature = "profiling")]
impl Drop for StageTimer {
    fn drop(&mut self) {
        crate::PROFILER.lock().record(self.stage, self.elapsed());
    }
}

/// Time the remainder of the current block as `$stage`. Expands to nothing
/// without the `profiling` feature.
#[macro_export]
macro_rules! profile_scope {
    ($stage:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::profiler::StageTimer::begin($stage);
    };
}
