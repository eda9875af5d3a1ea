//! # 数据集加载模块
//!
//! 从 CSV 文件加载历史价格表与州采购表，并在加载边界完成列校验，
//! 之后的查询代码只处理强类型记录。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: prices, purchases

pub mod prices;
pub mod purchases;

pub use prices::load_prices_file;
pub use purchases::load_purchases_file;

use crate::error::{Result, SilverError};

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 打开数据文件
fn open_dataset(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(SilverError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    File::open(path).map_err(|e| SilverError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 创建统一配置的 CSV 读取器（带表头，去除首尾空白）
fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// 校验表头包含全部必需列
fn require_columns<R: Read>(
    rdr: &mut csv::Reader<R>,
    label: &str,
    required: &[&str],
) -> Result<()> {
    let headers = rdr.headers()?;
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(SilverError::data_shape(
                label,
                format!("missing column '{}'", column),
            ));
        }
    }
    Ok(())
}

/// 校验数值非负且有限
fn require_non_negative(label: &str, line: usize, column: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(SilverError::data_shape(
            label,
            format!(
                "line {}: column '{}' must be a non-negative number, got {}",
                line, column, value
            ),
        ));
    }
    Ok(value)
}
