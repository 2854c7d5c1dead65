use derive_more::Display;
use std::time::{Duration, Instant};

/// Collected search metrics.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(
    fmt = "time={}ms nodes={}|{:.0}/s evals={} cuts={}|{:.2}% timeouts={}",
    "self.time().as_millis()",
    "self.nodes()",
    "self.nps()",
    "self.evals()",
    "self.cuts()",
    "self.cut_rate() * 100.",
    "self.timeouts()"
)]
pub struct Metrics {
    time: Duration,
    nodes: u64,
    evals: u64,
    cuts: u64,
    timeouts: u64,
}

impl Metrics {
    /// Time elapsed.
    pub fn time(&self) -> Duration {
        self.time
    }

    /// Nodes counter.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Nodes visited per second.
    pub fn nps(&self) -> f64 {
        self.nodes() as f64 / self.time().as_secs_f64()
    }

    /// Static evaluations counter.
    pub fn evals(&self) -> u64 {
        self.evals
    }

    /// Beta cuts counter.
    pub fn cuts(&self) -> u64 {
        self.cuts
    }

    /// Beta cut rate.
    pub fn cut_rate(&self) -> f64 {
        self.cuts() as f64 / self.nodes() as f64
    }

    /// Nodes evaluated statically because the deadline elapsed.
    pub fn timeouts(&self) -> u64 {
        self.timeouts
    }
}

/// A collector for search metrics.
#[derive(Debug)]
pub struct MetricsCounters {
    time: Instant,
    nodes: u64,
    evals: u64,
    cuts: u64,
    timeouts: u64,
}

impl Default for MetricsCounters {
    fn default() -> Self {
        MetricsCounters {
            time: Instant::now(),
            nodes: 0,
            evals: 0,
            cuts: 0,
            timeouts: 0,
        }
    }
}

impl MetricsCounters {
    /// Increment nodes counter.
    pub fn node(&mut self) -> u64 {
        self.nodes += 1;
        self.nodes
    }

    /// Increment static evaluations counter.
    pub fn eval(&mut self) -> u64 {
        self.evals += 1;
        self.evals
    }

    /// Increment beta cuts counter.
    pub fn cut(&mut self) -> u64 {
        self.cuts += 1;
        self.cuts
    }

    /// Increment timeouts counter.
    pub fn timeout(&mut self) -> u64 {
        self.timeouts += 1;
        self.timeouts
    }

    /// Returns the metrics collected.
    pub fn snapshot(&self) -> Metrics {
        Metrics {
            time: self.time.elapsed(),
            nodes: self.nodes,
            evals: self.evals,
            cuts: self.cuts,
            timeouts: self.timeouts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn counters_start_at_zero() {
        let m = MetricsCounters::default().snapshot();
        assert_eq!((m.nodes(), m.evals(), m.cuts(), m.timeouts()), (0, 0, 0, 0));
    }

    #[proptest]
    fn counters_count_events(#[strategy(1u8..=16)] n: u8) {
        let mut counters = MetricsCounters::default();

        for i in 1..=u64::from(n) {
            assert_eq!(counters.node(), i);
            assert_eq!(counters.eval(), i);
            assert_eq!(counters.cut(), i);
            assert_eq!(counters.timeout(), i);
        }

        let m = counters.snapshot();
        let n = u64::from(n);
        assert_eq!((m.nodes(), m.evals(), m.cuts(), m.timeouts()), (n, n, n, n));
    }

    #[proptest]
    fn metrics_are_displayed_as_key_value_pairs(m: Metrics) {
        let s = m.to_string();
        assert!(s.starts_with(&format!("time={}ms nodes={}|", m.time().as_millis(), m.nodes())));
        assert!(s.ends_with(&format!("timeouts={}", m.timeouts())));
    }
}
