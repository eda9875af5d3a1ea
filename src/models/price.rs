//! # 历史白银价格数据模型
//!
//! 一条价格记录对应某年某月的白银市场价格（₹/kg）。
//!
//! ## 依赖关系
//! - 被 `parsers/prices.rs` 构造
//! - 被 `analysis/query.rs`, `analysis/plot.rs`, `analysis/export.rs` 使用

use crate::error::SilverError;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 月份（三字母缩写）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// 全部月份，按日历顺序
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// 三字母代码
    pub fn code(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// 英文全称（用于图表标题）
    pub fn full_name(&self) -> &'static str {
        match self {
            Month::Jan => "January",
            Month::Feb => "February",
            Month::Mar => "March",
            Month::Apr => "April",
            Month::May => "May",
            Month::Jun => "June",
            Month::Jul => "July",
            Month::Aug => "August",
            Month::Sep => "September",
            Month::Oct => "October",
            Month::Nov => "November",
            Month::Dec => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Month {
    type Err = SilverError;

    /// 严格匹配数据集中的三字母代码（区分大小写）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::ALL
            .iter()
            .copied()
            .find(|m| m.code() == s)
            .ok_or_else(|| {
                SilverError::InvalidInput(format!(
                    "Unknown month code '{}'. Expected one of: Jan, Feb, Mar, Apr, May, Jun, Jul, Aug, Sep, Oct, Nov, Dec",
                    s
                ))
            })
    }
}

/// 单条历史价格记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// 年份
    pub year: i32,

    /// 月份
    pub month: Month,

    /// 白银价格 (₹/kg)，非负
    pub price_inr_per_kg: f64,
}

impl PriceRecord {
    pub fn new(year: i32, month: Month, price_inr_per_kg: f64) -> Self {
        PriceRecord {
            year,
            month,
            price_inr_per_kg,
        }
    }
}

/// 价格区间筛选
///
/// 区间边界均为闭区间：恰好 20,000 或 30,000 的记录会同时落入两个区间。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceRange {
    /// 不筛选
    #[default]
    All,
    /// price ≤ 20,000
    Le20000,
    /// 20,000 ≤ price ≤ 30,000
    Between20000And30000,
    /// price ≥ 30,000
    Ge30000,
}

impl PriceRange {
    pub const LOWER_BOUND: f64 = 20_000.0;
    pub const UPPER_BOUND: f64 = 30_000.0;

    /// 判断价格是否落在该区间内
    pub fn matches(&self, price: f64) -> bool {
        match self {
            PriceRange::All => true,
            PriceRange::Le20000 => price <= Self::LOWER_BOUND,
            PriceRange::Between20000And30000 => {
                (Self::LOWER_BOUND..=Self::UPPER_BOUND).contains(&price)
            }
            PriceRange::Ge30000 => price >= Self::UPPER_BOUND,
        }
    }

    /// 界面标签
    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::All => "All",
            PriceRange::Le20000 => "≤ 20,000",
            PriceRange::Between20000And30000 => "20,000 - 30,000",
            PriceRange::Ge30000 => "≥ 30,000",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
