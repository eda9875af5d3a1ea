//! # 数字格式化
//!
//! 金额与数量的千分位显示，例如 `1234567.891 -> "1,234,567.89"`。
//!
//! ## 依赖关系
//! - 被 `models/calculation.rs`, `commands/` 使用

/// 按千分位分组并保留固定位小数
pub fn format_thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    // 四舍五入到 0 时不输出 "-0.00"
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    if value.is_sign_negative() && !is_zero {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0, 2), "0.00");
        assert_eq!(format_thousands(999.999, 2), "1,000.00");
        assert_eq!(format_thousands(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_thousands(100.0, 2), "100.00");
        assert_eq!(format_thousands(123456.0, 0), "123,456");
        assert_eq!(format_thousands(-1500.5, 1), "-1,500.5");
        assert_eq!(format_thousands(-0.001, 2), "0.00");
    }
}
