//! Human-readable console output. Not a stable format.

use std::time::Duration;

use chrono::TimeDelta;

use crate::harness::{BenchReport, IterationTiming};

pub fn duration_millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

pub fn delta_millis(delta: TimeDelta) -> f64 {
    match delta.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64,
    }
}

/// `name: a, b, c`
pub fn format_vector(name: &str, values: &[f32]) -> String {
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{name}: {joined}")
}

pub fn format_progress(timing: &IterationTiming, total: u32) -> String {
    format!("Iteration {}/{}", timing.index + 1, total)
}

pub fn format_iteration(timing: &IterationTiming, delta: TimeDelta) -> String {
    format!(
        "  Operate elapsed time: {:.6} ms\n  Operate SIMD elapsed time: {:.6} ms\n  Saved: {:.6} ms",
        duration_millis(timing.scalar.elapsed),
        duration_millis(timing.vector.elapsed),
        delta_millis(delta)
    )
}

pub fn format_summary(report: &BenchReport) -> String {
    let average = report
        .average_saved()
        .map(|avg| format!("{:.6} ms", delta_millis(avg)))
        .unwrap_or_else(|| "n/a".to_string());

    format!(
        "Run started {} ({} backend, {} elements x {} iterations)\n\
         TOTAL TIME: {:.6} ms\n\
         TOTAL SAVED TIME: {:.6} ms\n\
         AVERAGE SAVED TIME: {}",
        report.started_at.format("%Y-%m-%d %H:%M:%S"),
        report.backend,
        report.vector_length,
        report.iterations,
        duration_millis(report.wall_time),
        delta_millis(report.total_saved()),
        average
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::RunStatistics;
    use crate::kernel::{Kernel, TimingSample};
    use chrono::Local;

    fn timing(index: usize, scalar_us: u64, vector_us: u64) -> IterationTiming {
        IterationTiming {
            index,
            scalar: TimingSample {
                kernel: Kernel::Scalar,
                elapsed: Duration::from_micros(scalar_us),
            },
            vector: TimingSample {
                kernel: Kernel::Vectorized,
                elapsed: Duration::from_micros(vector_us),
            },
        }
    }

    #[test]
    fn test_format_vector() {
        assert_eq!(format_vector("v1", &[0.0, 1.5, -2.0]), "v1: 0, 1.5, -2");
        assert_eq!(format_vector("res", &[]), "res: ");
    }

    #[test]
    fn test_format_vector_prints_non_finite_values_as_is() {
        assert_eq!(
            format_vector("res", &[f32::NAN, f32::INFINITY]),
            "res: NaN, inf"
        );
    }

    #[test]
    fn test_format_progress_is_one_based() {
        assert_eq!(format_progress(&timing(0, 1, 1), 10), "Iteration 1/10");
        assert_eq!(format_progress(&timing(9, 1, 1), 10), "Iteration 10/10");
    }

    #[test]
    fn test_format_iteration() {
        let t = timing(0, 1500, 500);
        let text = format_iteration(&t, t.delta().unwrap());
        assert!(text.contains("Operate elapsed time: 1.500000 ms"));
        assert!(text.contains("Operate SIMD elapsed time: 0.500000 ms"));
        assert!(text.contains("Saved: 1.000000 ms"));
    }

    #[test]
    fn test_delta_millis_negative() {
        assert_eq!(delta_millis(TimeDelta::microseconds(-2500)), -2.5);
    }

    #[test]
    fn test_format_summary() {
        let mut statistics = RunStatistics::new();
        statistics.push(TimeDelta::microseconds(300));
        statistics.push(TimeDelta::microseconds(100));

        let report = BenchReport {
            started_at: Local::now(),
            backend: "portable",
            vector_length: 8,
            iterations: 2,
            wall_time: Duration::from_millis(3),
            statistics,
        };

        let text = format_summary(&report);
        assert!(text.contains("portable backend, 8 elements x 2 iterations"));
        assert!(text.contains("TOTAL TIME: 3.000000 ms"));
        assert!(text.contains("TOTAL SAVED TIME: 0.400000 ms"));
        assert!(text.contains("AVERAGE SAVED TIME: 0.200000 ms"));
    }
}
