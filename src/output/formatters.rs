//! Formatting utilities for terminal output

/// Largest possible expected information of a single guess: log2(243)
pub const MAX_BITS: f64 = 7.924_812_503_605_781;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format expected information as a bar scaled to the maximum possible bits
#[must_use]
pub fn entropy_bar(bits: f64, width: usize) -> String {
    create_progress_bar(bits, MAX_BITS, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(-1.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn entropy_bar_scale() {
        assert!((MAX_BITS - 243_f64.log2()).abs() < 1e-12);
        assert_eq!(entropy_bar(MAX_BITS, 8), "████████");
        assert_eq!(entropy_bar(0.0, 8), "░░░░░░░░");
    }
}
