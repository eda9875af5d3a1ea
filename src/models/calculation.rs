//! # 白银价格计算数据模型
//!
//! 价格计算器的输入与输出。
//!
//! ## 依赖关系
//! - 被 `analysis/calculator.rs` 使用
//! - 被 `commands/calc.rs` 使用
//! - 使用 `utils/format.rs` 格式化金额

use crate::utils::format::format_thousands;

use serde::{Deserialize, Serialize};
use std::fmt;

/// 重量单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeightUnit {
    #[default]
    Grams,
    Kilograms,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Grams => write!(f, "grams"),
            WeightUnit::Kilograms => write!(f, "kilograms"),
        }
    }
}

/// 结算货币
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    Inr,
    Usd,
}

impl Currency {
    /// 货币符号
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Inr => write!(f, "INR (₹)"),
            Currency::Usd => write!(f, "USD ($)"),
        }
    }
}

/// 计算输入
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// 白银重量
    pub weight: f64,

    /// 重量单位
    pub unit: WeightUnit,

    /// 每克价格 (₹)
    pub price_per_gram: f64,

    /// 结算货币
    pub currency: Currency,
}

/// 计算结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// 总价（以 `currency` 计）
    pub amount: f64,

    /// 结算货币
    pub currency: Currency,
}

impl CalculationResult {
    pub fn symbol(&self) -> &'static str {
        self.currency.symbol()
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.symbol(), format_thousands(self.amount, 2))
    }
}
