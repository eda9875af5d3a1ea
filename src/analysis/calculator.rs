//! # 白银价格计算器
//!
//! 根据重量、单位、每克价格和结算货币计算白银总价。
//!
//! ## 算法
//! 1. 单位统一为克（kg × 1000）
//! 2. 总价 (₹) = 克数 × 每克价格
//! 3. 结算货币为 USD 时除以固定汇率 83.0
//!
//! ## 依赖关系
//! - 被 `commands/calc.rs` 调用
//! - 使用 `models/calculation.rs`

use crate::error::{Result, SilverError};
use crate::models::{CalculationInput, CalculationResult, Currency, WeightUnit};

/// 1 kg = 1000 g
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// 固定汇率：83 INR = 1 USD
pub const INR_PER_USD: f64 = 83.0;

/// 计算白银总价
pub fn compute_total_cost(input: &CalculationInput) -> Result<CalculationResult> {
    ensure_non_negative("weight", input.weight)?;
    ensure_non_negative("price per gram", input.price_per_gram)?;

    let grams = match input.unit {
        WeightUnit::Grams => input.weight,
        WeightUnit::Kilograms => input.weight * GRAMS_PER_KILOGRAM,
    };

    let cost_inr = grams * input.price_per_gram;

    let amount = match input.currency {
        Currency::Inr => cost_inr,
        Currency::Usd => cost_inr / INR_PER_USD,
    };

    Ok(CalculationResult {
        amount,
        currency: input.currency,
    })
}

fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SilverError::InvalidInput(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )));
    }
    Ok(())
}
