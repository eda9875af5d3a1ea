//! # 数据模型模块
//!
//! 定义白银价格记录、州采购记录与价格计算的强类型数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `analysis/` 和 `commands/` 使用
//! - 子模块: price, purchase, calculation

pub mod calculation;
pub mod price;
pub mod purchase;

pub use calculation::{CalculationInput, CalculationResult, Currency, WeightUnit};
pub use price::{Month, PriceRange, PriceRecord};
pub use purchase::PurchaseRecord;
