//! # calc 子命令 CLI 定义
//!
//! 白银总价计算器。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/calc.rs`

use crate::models::{CalculationInput, Currency, WeightUnit};

use clap::{Args, ValueEnum};

/// 重量单位
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitArg {
    /// Grams
    Grams,
    /// Kilograms
    Kilograms,
}

impl From<UnitArg> for WeightUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Grams => WeightUnit::Grams,
            UnitArg::Kilograms => WeightUnit::Kilograms,
        }
    }
}

/// 结算货币
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum CurrencyArg {
    /// Indian rupee (₹)
    Inr,
    /// US dollar ($), converted at a fixed 83 INR per USD
    Usd,
}

impl From<CurrencyArg> for Currency {
    fn from(currency: CurrencyArg) -> Self {
        match currency {
            CurrencyArg::Inr => Currency::Inr,
            CurrencyArg::Usd => Currency::Usd,
        }
    }
}

/// calc 子命令参数
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Weight of silver
    #[arg(short, long, allow_negative_numbers = true)]
    pub weight: f64,

    /// Unit of the weight
    #[arg(short, long, value_enum, default_value = "grams")]
    pub unit: UnitArg,

    /// Price per gram in INR (₹)
    #[arg(short, long, allow_negative_numbers = true)]
    pub price: f64,

    /// Currency of the result
    #[arg(short, long, value_enum, default_value = "inr")]
    pub currency: CurrencyArg,
}

impl CalcArgs {
    /// 转换为计算输入
    pub fn to_input(&self) -> CalculationInput {
        CalculationInput {
            weight: self.weight,
            unit: self.unit.into(),
            price_per_gram: self.price,
            currency: self.currency.into(),
        }
    }
}
