/// Arithmetic mean. Defined as 0.0 for an empty slice so headline averages
/// render as zero instead of NaN.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_nonempty_list() {
        assert!((average(&[1.0, 2.0, 3.0]) - 2.0).abs() < 1e-9);
        assert!((average(&[0.25, 0.75]) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn empty_list_is_zero() {
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn single_value_is_itself() {
        assert_eq!(average(&[50.0]), 50.0);
    }
}
