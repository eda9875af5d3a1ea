//! # 历史价格表解析器
//!
//! 列: `Year, Month, Silver_Price_INR_per_kg`
//!
//! ## 依赖关系
//! - 被 `commands/analyze/`, `commands/dashboard.rs` 调用
//! - 使用 `models/price.rs`

use super::{csv_reader, open_dataset, require_columns, require_non_negative};
use crate::error::{Result, SilverError};
use crate::models::{Month, PriceRecord};

use serde::Deserialize;
use std::io::Read;
use std::path::Path;

pub const COL_YEAR: &str = "Year";
pub const COL_MONTH: &str = "Month";
pub const COL_PRICE: &str = "Silver_Price_INR_per_kg";

#[derive(Debug, Deserialize)]
struct RawPriceRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Month")]
    month: String,
    #[serde(rename = "Silver_Price_INR_per_kg")]
    price: f64,
}

/// 从文件加载价格表
pub fn load_prices_file(path: &Path) -> Result<Vec<PriceRecord>> {
    let file = open_dataset(path)?;
    load_prices_from_reader(file, &path.display().to_string())
}

/// 从任意读取器加载价格表，`label` 用于错误信息
pub fn load_prices_from_reader<R: Read>(reader: R, label: &str) -> Result<Vec<PriceRecord>> {
    let mut rdr = csv_reader(reader);
    require_columns(&mut rdr, label, &[COL_YEAR, COL_MONTH, COL_PRICE])?;

    let mut records = Vec::new();
    for (idx, row) in rdr.deserialize::<RawPriceRow>().enumerate() {
        // 表头占第 1 行
        let line = idx + 2;
        let row = row.map_err(|e| SilverError::data_shape(label, format!("line {}: {}", line, e)))?;

        let month: Month = row.month.parse().map_err(|_| {
            SilverError::data_shape(
                label,
                format!("line {}: unknown month code '{}'", line, row.month),
            )
        })?;
        let price = require_non_negative(label, line, COL_PRICE, row.price)?;

        records.push(PriceRecord::new(row.year, month, price));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_prices_basic() {
        let content = "Year,Month,Silver_Price_INR_per_kg\n2020,Jan,15000\n2020, Feb ,25000.5\n2021,Jan,35000\n";
        let records = load_prices_from_reader(content.as_bytes(), "test").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], PriceRecord::new(2020, Month::Jan, 15_000.0));
        assert_eq!(records[1].month, Month::Feb);
        assert!((records[1].price_inr_per_kg - 25_000.5).abs() < 1e-9);
    }

    #[test]
    fn test_load_prices_column_order_and_extra_columns() {
        let content = "Month,Note,Silver_Price_INR_per_kg,Year\nMar,x,41000,2019\n";
        let records = load_prices_from_reader(content.as_bytes(), "test").unwrap();
        assert_eq!(records, vec![PriceRecord::new(2019, Month::Mar, 41_000.0)]);
    }

    #[test]
    fn test_load_prices_missing_column() {
        let content = "Year,Month,Price\n2020,Jan,15000\n";
        let err = load_prices_from_reader(content.as_bytes(), "test").unwrap_err();
        match err {
            SilverError::DataShapeError { reason, .. } => {
                assert!(reason.contains("Silver_Price_INR_per_kg"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_prices_bad_month() {
        let content = "Year,Month,Silver_Price_INR_per_kg\n2020,Jan,15000\n2020,Janu,16000\n";
        let err = load_prices_from_reader(content.as_bytes(), "test").unwrap_err();
        match err {
            SilverError::DataShapeError { reason, .. } => assert!(reason.contains("line 3")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_prices_malformed_values() {
        let negative = "Year,Month,Silver_Price_INR_per_kg\n2020,Jan,-1\n";
        assert!(matches!(
            load_prices_from_reader(negative.as_bytes(), "test"),
            Err(SilverError::DataShapeError { .. })
        ));

        let not_a_number = "Year,Month,Silver_Price_INR_per_kg\n2020,Jan,abc\n";
        assert!(matches!(
            load_prices_from_reader(not_a_number.as_bytes(), "test"),
            Err(SilverError::DataShapeError { .. })
        ));
    }

    #[test]
    fn test_load_prices_header_only() {
        let content = "Year,Month,Silver_Price_INR_per_kg\n";
        assert!(load_prices_from_reader(content.as_bytes(), "test")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_load_prices_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("historical_silver_price.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "Year,Month,Silver_Price_INR_per_kg").unwrap();
        writeln!(f, "2018,Dec,37500").unwrap();
        drop(f);

        let records = load_prices_file(&path).unwrap();
        assert_eq!(records, vec![PriceRecord::new(2018, Month::Dec, 37_500.0)]);

        let missing = dir.path().join("nope.csv");
        assert!(matches!(
            load_prices_file(&missing),
            Err(SilverError::FileNotFound { .. })
        ));
    }
}
