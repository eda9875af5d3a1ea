//! # analyze 命令实现
//!
//! 分析功能统一入口，包含多个子命令：
//! - `prices`: 年度平均价格
//! - `states`: 采购量前 N 个州
//! - `trend`: 单月价格趋势
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的参数
//! - 子模块: prices, states, trend

pub mod prices;
pub mod states;
pub mod trend;

use crate::cli::analyze::{AnalyzeArgs, AnalyzeCommands};
use crate::error::Result;

/// 执行 analyze 命令
pub fn execute(args: AnalyzeArgs) -> Result<()> {
    match args.command {
        AnalyzeCommands::Prices(prices_args) => prices::execute(prices_args),
        AnalyzeCommands::States(states_args) => states::execute(states_args),
        AnalyzeCommands::Trend(trend_args) => trend::execute(trend_args),
    }
}
