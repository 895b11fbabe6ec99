use super::performance_model::ComparisonRow;

/// Row stride for a lookback window.
pub fn stride_for_window(window_days: u32) -> usize {
    match window_days {
        0..=7 => 1,
        8..=30 => 2,
        31..=90 => 4,
        91..=180 => 7,
        _ => 14,
    }
}

/// Downsample rows for charting: every k-th row from the first, plus the last.
///
/// The final row always appears exactly once. If a stride-selected row shares
/// its date, the final row replaces it.
pub fn sample_rows(rows: &[ComparisonRow], window_days: u32) -> Vec<ComparisonRow> {
    let Some(last) = rows.last() else {
        return Vec::new();
    };

    let stride = stride_for_window(window_days);
    let mut sampled: Vec<ComparisonRow> = rows
        .iter()
        .step_by(stride)
        .filter(|row| row.date != last.date)
        .cloned()
        .collect();
    sampled.push(last.clone());
    sampled
}
