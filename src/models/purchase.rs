//! # 州白银采购数据模型
//!
//! ## 依赖关系
//! - 被 `parsers/purchases.rs` 构造
//! - 被 `analysis/query.rs`, `analysis/plot.rs`, `analysis/export.rs` 使用

use serde::{Deserialize, Serialize};

/// 单个州的白银采购总量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// 州名（不强制唯一）
    pub state: String,

    /// 采购量 (kg)，非负
    pub purchased_kg: f64,
}

impl PurchaseRecord {
    pub fn new(state: impl Into<String>, purchased_kg: f64) -> Self {
        PurchaseRecord {
            state: state.into(),
            purchased_kg,
        }
    }
}
