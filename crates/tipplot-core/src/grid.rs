// File: crates/tipplot-core/src/grid.rs
// Summary: Tick layout helpers (nice steps, tick values, label formatting).

/// Round a raw step to 1, 2, 5 or 10 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    let power = 10f64.powf(raw.log10().floor());
    let err = raw / power;
    let factor = if err >= 7.07 {
        10.0
    } else if err >= 3.16 {
        5.0
    } else if err >= 1.41 {
        2.0
    } else {
        1.0
    };
    factor * power
}

/// Roughly `count` evenly spaced round values inside `[start, end]`.
pub fn ticks(start: f64, end: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    if count == 0 || !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    if lo == hi {
        return vec![lo];
    }
    let step = nice_step((hi - lo) / count as f64);
    if step == 0.0 {
        return vec![lo, hi];
    }
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    if step < 1.0 {
        // Divide by the inverse so fractional steps stay exact (0.3, not 0.30000000000000004).
        let inv = (1.0 / step).round();
        (first..=last).map(|i| i as f64 / inv).collect()
    } else {
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// Decimal places needed to tell ticks `step` apart.
pub fn step_precision(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

/// Format a tick value with just enough precision for its step.
pub fn format_tick(value: f64, step: f64) -> String {
    let v = if value == 0.0 { 0.0 } else { value }; // no "-0"
    format!("{:.*}", step_precision(step), v)
}
