//! Number formatting for console tables (pt-BR conventions)

/// Форматирует число с разделителем тысяч (точка) и запятой перед дробной частью
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i.to_string(), Some(d.to_string())),
        None => (formatted.clone(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        result.insert(0, '-');
    }
    match decimal_part {
        Some(d) => format!("{},{}", result, d),
        None => result,
    }
}

/// Валюта: `R$ 1.234,56`
pub fn format_money(value: f64) -> String {
    format!("R$ {}", format_number_with_decimals(value, 2))
}

/// Целое с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "R$ 1.234,56");
        assert_eq!(format_money(1234567.89), "R$ 1.234.567,89");
        assert_eq!(format_money(0.0), "R$ 0,00");
        assert_eq!(format_money(-1234.5), "R$ -1.234,50");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1.234.567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-0.2), "0");
        assert_eq!(format_number_int(f64::NAN), "0");
    }
}
