//! Call counts and wall time per label, behind the `profiling` feature.
//!
//! Without the feature every item here compiles to nothing.

#[cfg(feature = "profiling")]
mod enabled {
    use std::sync::OnceLock;
    use std::time::{Duration, Instant};

    use dashmap::DashMap;

    type Count = u64;
    type TotalNanos = u128;

    static STATS: OnceLock<DashMap<&'static str, (Count, TotalNanos)>> = OnceLock::new();

    #[inline]
    fn stats() -> &'static DashMap<&'static str, (Count, TotalNanos)> {
        STATS.get_or_init(DashMap::new)
    }

    /// Records its lifetime under `label` when dropped.
    pub struct Timer {
        label: &'static str,
        start: Instant,
    }

    impl Timer {
        #[inline]
        #[must_use]
        pub fn new(label: &'static str) -> Self {
            Self {
                label,
                start: Instant::now(),
            }
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            record(self.label, self.start.elapsed());
        }
    }

    pub fn record(label: &'static str, dur: Duration) {
        let mut entry = stats().entry(label).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += dur.as_nanos();
    }

    /// `(label, calls, total nanos)`, most expensive first.
    #[must_use]
    pub fn snapshot() -> Vec<(&'static str, Count, TotalNanos)> {
        let mut rows: Vec<_> = stats()
            .iter()
            .map(|kv| (*kv.key(), kv.value().0, kv.value().1))
            .collect();
        rows.sort_by(|a, b| b.2.cmp(&a.2));
        rows
    }

    pub fn reset() {
        stats().clear();
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn report() {
        println!("==== graphx_isomorphism feasibility profile ====");
        for (label, count, total_ns) in snapshot() {
            let avg_ns = if count == 0 {
                0.0
            } else {
                total_ns as f64 / count as f64
            };
            let total_ms = total_ns as f64 / 1_000_000.0;
            println!("{label:<48} calls={count:<10} total={total_ms:>9.3} ms avg= {avg_ns:>12.1} ns");
        }
        println!("================================================");
    }
}

#[cfg(not(feature = "profiling"))]
mod disabled {
    use std::time::Duration;

    #[derive(Clone, Copy)]
    pub struct Timer;

    impl Timer {
        #[inline]
        #[must_use]
        pub const fn new(_: &'static str) -> Self {
            Self
        }
    }

    pub const fn record(_: &'static str, _: Duration) {}

    #[must_use]
    pub const fn snapshot() -> Vec<(&'static str, u64, u128)> {
        Vec::new()
    }

    pub const fn reset() {}

    pub const fn report() {}
}

#[cfg(feature = "profiling")]
pub use enabled::*;

#[cfg(not(feature = "profiling"))]
pub use disabled::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GraphMatcher, MatchMode};
    use graphx_graph::GraphKind;
    use graphx_graph::generators::cycle_graph;

    #[test]
    fn labels_are_recorded_only_with_the_feature() {
        reset();
        let g = cycle_graph(4, GraphKind::GRAPH);
        let matcher = GraphMatcher::new(&g, &g).unwrap();
        assert_eq!(matcher.count(MatchMode::Graph), 8);

        let rows = snapshot();
        if cfg!(feature = "profiling") {
            assert!(rows.iter().all(|(_, calls, _)| *calls > 0));
        } else {
            assert!(rows.is_empty());
        }
        report();
    }
}
