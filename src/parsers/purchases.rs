//! # 州采购表解析器
//!
//! 列: `State, Silver_Purchased_kg`
//!
//! ## 依赖关系
//! - 被 `commands/analyze/states.rs`, `commands/dashboard.rs` 调用
//! - 使用 `models/purchase.rs`

use super::{csv_reader, open_dataset, require_columns, require_non_negative};
use crate::error::{Result, SilverError};
use crate::models::PurchaseRecord;

use serde::Deserialize;
use std::io::Read;
use std::path::Path;

pub const COL_STATE: &str = "State";
pub const COL_PURCHASED: &str = "Silver_Purchased_kg";

#[derive(Debug, Deserialize)]
struct RawPurchaseRow {
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Silver_Purchased_kg")]
    purchased_kg: f64,
}

/// 从文件加载采购表
pub fn load_purchases_file(path: &Path) -> Result<Vec<PurchaseRecord>> {
    let file = open_dataset(path)?;
    load_purchases_from_reader(file, &path.display().to_string())
}

/// 从任意读取器加载采购表，`label` 用于错误信息
pub fn load_purchases_from_reader<R: Read>(reader: R, label: &str) -> Result<Vec<PurchaseRecord>> {
    let mut rdr = csv_reader(reader);
    require_columns(&mut rdr, label, &[COL_STATE, COL_PURCHASED])?;

    let mut records = Vec::new();
    for (idx, row) in rdr.deserialize::<RawPurchaseRow>().enumerate() {
        let line = idx + 2;
        let row = row.map_err(|e| SilverError::data_shape(label, format!("line {}: {}", line, e)))?;

        if row.state.is_empty() {
            return Err(SilverError::data_shape(
                label,
                format!("line {}: empty state name", line),
            ));
        }
        let kg = require_non_negative(label, line, COL_PURCHASED, row.purchased_kg)?;

        records.push(PurchaseRecord::new(row.state, kg));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_purchases_basic() {
        let content = "State,Silver_Purchased_kg\nMaharashtra,1200\n\"Tamil Nadu\", 980.5\n";
        let records = load_purchases_from_reader(content.as_bytes(), "test").unwrap();
        assert_eq!(
            records,
            vec![
                PurchaseRecord::new("Maharashtra", 1200.0),
                PurchaseRecord::new("Tamil Nadu", 980.5),
            ]
        );
    }

    #[test]
    fn test_load_purchases_duplicates_allowed() {
        let content = "State,Silver_Purchased_kg\nGoa,1\nGoa,2\n";
        let records = load_purchases_from_reader(content.as_bytes(), "test").unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_load_purchases_missing_column() {
        let content = "State,Kg\nGoa,1\n";
        let err = load_purchases_from_reader(content.as_bytes(), "states.csv").unwrap_err();
        match err {
            SilverError::DataShapeError { path, reason } => {
                assert_eq!(path, "states.csv");
                assert!(reason.contains("Silver_Purchased_kg"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_purchases_rejects_bad_rows() {
        let negative = "State,Silver_Purchased_kg\nGoa,-3\n";
        assert!(matches!(
            load_purchases_from_reader(negative.as_bytes(), "test"),
            Err(SilverError::DataShapeError { .. })
        ));

        let empty_state = "State,Silver_Purchased_kg\n,3\n";
        assert!(matches!(
            load_purchases_from_reader(empty_state.as_bytes(), "test"),
            Err(SilverError::DataShapeError { .. })
        ));
    }

    #[test]
    fn test_load_purchases_empty_file() {
        // 完全空的文件没有表头
        assert!(matches!(
            load_purchases_from_reader("".as_bytes(), "test"),
            Err(SilverError::DataShapeError { .. })
        ));
    }
}
