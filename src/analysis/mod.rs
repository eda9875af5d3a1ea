//! # 分析模块
//!
//! 白银价格计算与数据集查询，以及查询结果的图表与 CSV 输出。
//!
//! ## 子模块
//! - `calculator`: 白银总价计算
//! - `query`: 价格表与采购表的筛选、分组、排序
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`

pub mod calculator;
pub mod export;
pub mod plot;
pub mod query;

pub use calculator::compute_total_cost;
pub use plot::ChartSpec;
pub use query::{
    filter_and_average_by_year, price_summary, select_month, top_n_by_purchase, PriceSummary,
    YearlyAverages,
};
