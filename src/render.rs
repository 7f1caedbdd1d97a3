/// Percentage of `current` over `total`, rounded to the nearest integer.
/// A zero total renders as 0 rather than dividing by zero.
#[must_use]
pub fn percentage(current: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((f64::from(current) / f64::from(total)) * 100.0).round() as u32
}

/// One-line text progress bar: label, filled/empty track, percentage and the
/// raw `current/total` pair. Purely a function of its inputs.
#[must_use]
pub fn progress_bar(current: u32, total: u32, label: &str) -> String {
    const WIDTH: usize = 30;

    let percent = percentage(current, total);
    let filled = (WIDTH * percent as usize) / 100;
    let mut bar = String::with_capacity(WIDTH);
    for i in 0..WIDTH {
        bar.push(if i < filled { '█' } else { '░' });
    }

    format!("{label} [{bar}] {percent}% ({current}/{total})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(percentage(2, 50), 4);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(50, 50), 100);
        assert_eq!(percentage(0, 50), 0);
    }

    #[test]
    fn zero_total_is_zero_percent() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(7, 0), 0);
    }

    #[test]
    fn bar_carries_label_percentage_and_counts() {
        let bar = progress_bar(2, 50, "總進度");
        assert!(bar.starts_with("總進度 ["));
        assert!(bar.ends_with("] 4% (2/50)"));
    }

    #[test]
    fn full_bar_is_entirely_filled() {
        let bar = progress_bar(5, 5, "x");
        assert!(bar.contains(&"█".repeat(30)));
        assert!(!bar.contains('░'));
    }
}
