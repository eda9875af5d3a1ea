//! # 数据集查询
//!
//! 对已加载的价格表与采购表做筛选、分组和排序。所有函数都是纯函数：
//! 输入为只读切片，每次调用都重新计算结果。
//!
//! ## 依赖关系
//! - 被 `commands/analyze/` 与 `commands/dashboard.rs` 调用
//! - 使用 `models/price.rs`, `models/purchase.rs`

use crate::error::{Result, SilverError};
use crate::models::{Month, PriceRange, PriceRecord, PurchaseRecord};

use std::collections::BTreeMap;

/// 年份 → 平均价格 (₹/kg)，按年份升序
pub type YearlyAverages = BTreeMap<i32, f64>;

/// 按价格区间筛选后计算每年平均价格
///
/// 没有记录通过筛选的年份不会出现在结果中。
pub fn filter_and_average_by_year(prices: &[PriceRecord], range: PriceRange) -> YearlyAverages {
    let mut groups: BTreeMap<i32, (f64, usize)> = BTreeMap::new();

    for record in prices.iter().filter(|r| range.matches(r.price_inr_per_kg)) {
        let entry = groups.entry(record.year).or_insert((0.0, 0));
        entry.0 += record.price_inr_per_kg;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(year, (sum, count))| (year, sum / count as f64))
        .collect()
}

/// 按采购量降序取前 n 个州
///
/// 排序是稳定的，采购量相同时保留输入顺序。
pub fn top_n_by_purchase(purchases: &[PurchaseRecord], n: usize) -> Result<Vec<PurchaseRecord>> {
    if n == 0 {
        return Err(SilverError::InvalidInput(
            "top-n must be a positive integer".to_string(),
        ));
    }

    let mut sorted = purchases.to_vec();
    sorted.sort_by(|a, b| b.purchased_kg.total_cmp(&a.purchased_kg));
    sorted.truncate(n);

    Ok(sorted)
}

/// 选取指定月份的全部记录，保持输入顺序
pub fn select_month(prices: &[PriceRecord], month: Month) -> Vec<PriceRecord> {
    prices.iter().filter(|r| r.month == month).cloned().collect()
}

/// 价格表概要
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSummary {
    /// 记录数
    pub count: usize,
    /// 最早年份
    pub first_year: i32,
    /// 最晚年份
    pub last_year: i32,
    /// 最低价格 (₹/kg)
    pub min_price: f64,
    /// 最高价格 (₹/kg)
    pub max_price: f64,
    /// 平均价格 (₹/kg)
    pub mean_price: f64,
}

/// 计算价格表概要，空表返回 `None`
pub fn price_summary(prices: &[PriceRecord]) -> Option<PriceSummary> {
    let first = prices.first()?;

    let mut summary = PriceSummary {
        count: 0,
        first_year: first.year,
        last_year: first.year,
        min_price: f64::INFINITY,
        max_price: f64::NEG_INFINITY,
        mean_price: 0.0,
    };
    let mut total = 0.0;

    for r in prices {
        summary.count += 1;
        summary.first_year = summary.first_year.min(r.year);
        summary.last_year = summary.last_year.max(r.year);
        summary.min_price = summary.min_price.min(r.price_inr_per_kg);
        summary.max_price = summary.max_price.max(r.price_inr_per_kg);
        total += r.price_inr_per_kg;
    }

    summary.mean_price = total / summary.count as f64;
    Some(summary)
}
