//! # 查询结果导出
//!
//! 将三个派生视图导出为 CSV：
//! - 年度平均价格: `Year, Average_Silver_Price_INR_per_kg`
//! - 前 N 个州: `Rank, State, Silver_Purchased_kg`
//! - 单月价格: `Year, Month, Silver_Price_INR_per_kg`
//!
//! ## 依赖关系
//! - 被 `commands/analyze/` 与 `commands/dashboard.rs` 调用
//! - 使用 `csv` 库写入 CSV 文件

use crate::analysis::query::YearlyAverages;
use crate::error::{Result, SilverError};
use crate::models::{PriceRecord, PurchaseRecord};

use std::path::Path;

fn finish(mut wtr: csv::Writer<std::fs::File>, output_path: &Path) -> Result<()> {
    wtr.flush().map_err(|e| SilverError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

/// 导出年度平均价格
pub fn yearly_averages_to_csv(averages: &YearlyAverages, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["Year", "Average_Silver_Price_INR_per_kg"])?;
    for (year, avg) in averages {
        wtr.write_record(&[year.to_string(), format!("{:.2}", avg)])?;
    }

    finish(wtr, output_path)
}

/// 导出前 N 个州采购量
pub fn top_states_to_csv(top: &[PurchaseRecord], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["Rank", "State", "Silver_Purchased_kg"])?;
    for (i, p) in top.iter().enumerate() {
        wtr.write_record(&[
            (i + 1).to_string(),
            p.state.clone(),
            format!("{:.2}", p.purchased_kg),
        ])?;
    }

    finish(wtr, output_path)
}

/// 导出价格记录
pub fn price_records_to_csv(records: &[PriceRecord], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["Year", "Month", "Silver_Price_INR_per_kg"])?;
    for r in records {
        wtr.write_record(&[
            r.year.to_string(),
            r.month.to_string(),
            format!("{:.2}", r.price_inr_per_kg),
        ])?;
    }

    finish(wtr, output_path)
}
