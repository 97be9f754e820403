//! Text bar chart for point growth.

/// Widest bar, in characters.
pub const MAX_BAR_WIDTH: usize = 40;

/// One line per value: game number, bar, value. Bars scale down when the
/// largest value exceeds [`MAX_BAR_WIDTH`].
pub fn bar_chart(series: &[i64]) -> Vec<String> {
    let max = series.iter().copied().max().unwrap_or(0).max(1) as usize;
    let number_width = series.len().to_string().len();

    series
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let value_units = value.max(0) as usize;
            let bar = if max > MAX_BAR_WIDTH {
                value_units * MAX_BAR_WIDTH / max
            } else {
                value_units
            };
            format!(
                "game {:>number_width$} | {} {value}",
                i + 1,
                "#".repeat(bar)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_series_unscaled() {
        assert_eq!(
            bar_chart(&[2, 3, 5]),
            vec!["game 1 | ## 2", "game 2 | ### 3", "game 3 | ##### 5"]
        );
    }

    #[test]
    fn large_series_scaled() {
        let series: Vec<i64> = (1..=12).map(|i| i * 10).collect();
        let lines = bar_chart(&series);
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "game  1 | ### 10");
        assert_eq!(
            lines[11],
            format!("game 12 | {} 120", "#".repeat(MAX_BAR_WIDTH))
        );
    }

    #[test]
    fn empty_series() {
        assert!(bar_chart(&[]).is_empty());
    }
}
