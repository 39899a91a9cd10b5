//! Flex-style width distribution for status bar slots

/// Split `available` width between slots in proportion to `weights`,
/// leaving `spacing` between neighbouring slots.
pub fn flex_widths(weights: &[f32], available: f32, spacing: f32) -> Vec<f32> {
    if weights.is_empty() {
        return Vec::new();
    }

    let gaps = spacing * (weights.len() - 1) as f32;
    let usable = (available - gaps).max(0.0);
    let total: f32 = weights.iter().filter(|w| **w > 0.0).sum();

    if total <= 0.0 {
        return vec![usable / weights.len() as f32; weights.len()];
    }

    weights
        .iter()
        .map(|w| usable * w.max(0.0) / total)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths_fill_available() {
        let widths = flex_widths(&[20.0, 10.0, 10.0], 408.0, 4.0);
        assert_eq!(widths.len(), 3);
        let total: f32 = widths.iter().sum::<f32>() + 8.0;
        assert!((total - 408.0).abs() < 0.01);
        assert!((widths[0] - 2.0 * widths[1]).abs() < 0.01);
    }

    #[test]
    fn test_empty_and_degenerate() {
        assert!(flex_widths(&[], 100.0, 4.0).is_empty());
        assert_eq!(flex_widths(&[0.0, 0.0], 104.0, 4.0), vec![50.0, 50.0]);
        assert_eq!(flex_widths(&[1.0], 2.0, 4.0), vec![2.0]);
        assert_eq!(flex_widths(&[1.0, 1.0], 2.0, 4.0), vec![0.0, 0.0]);
    }
}
