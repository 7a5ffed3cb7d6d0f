//! Aggregates over the rows of the current page

/// Итоги по текущей странице
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AggregateSnapshot {
    pub total_value: f64,
    pub total_units: f64,
    /// total_value / number of rows
    pub mean: f64,
    /// total_value / total_units ("ticket médio")
    pub per_unit_average: f64,
    /// Rows with units > 0
    pub active_count: usize,
    pub row_count: usize,
}

impl AggregateSnapshot {
    /// `amount` and `units` pick the aggregated numbers out of a row.
    /// Non-finite numbers count as zero.
    pub fn compute<T>(items: &[T], amount: impl Fn(&T) -> f64, units: impl Fn(&T) -> f64) -> Self {
        let finite = |v: f64| if v.is_finite() { v } else { 0.0 };

        let mut snapshot = Self {
            row_count: items.len(),
            ..Self::default()
        };
        for item in items {
            let u = finite(units(item));
            snapshot.total_value += finite(amount(item));
            snapshot.total_units += u;
            if u > 0.0 {
                snapshot.active_count += 1;
            }
        }
        if !items.is_empty() {
            snapshot.mean = snapshot.total_value / items.len() as f64;
        }
        if snapshot.total_units > 0.0 {
            snapshot.per_unit_average = snapshot.total_value / snapshot.total_units;
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page() {
        let rows: Vec<(f64, f64)> = Vec::new();
        let s = AggregateSnapshot::compute(&rows, |r| r.0, |r| r.1);
        assert_eq!(s, AggregateSnapshot::default());
    }

    #[test]
    fn test_two_sales() {
        let rows = vec![(100.0, 2.0), (50.0, 1.0)];
        let s = AggregateSnapshot::compute(&rows, |r| r.0, |r| r.1);
        assert_eq!(s.total_value, 150.0);
        assert_eq!(s.total_units, 3.0);
        assert_eq!(s.mean, 75.0);
        assert_eq!(s.per_unit_average, 50.0);
        assert_eq!(s.active_count, 2);
        assert_eq!(s.row_count, 2);
    }

    #[test]
    fn test_zero_units_do_not_divide() {
        let rows = vec![(10.0, 0.0), (f64::NAN, 0.0)];
        let s = AggregateSnapshot::compute(&rows, |r| r.0, |r| r.1);
        assert_eq!(s.total_value, 10.0);
        assert_eq!(s.per_unit_average, 0.0);
        assert_eq!(s.active_count, 0);
        assert_eq!(s.mean, 5.0);
    }
}
