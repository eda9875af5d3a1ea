//! # dashboard 子命令 CLI 定义
//!
//! 一次性生成全部图表和 CSV 数据到输出目录。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/dashboard.rs`

use super::analyze::RangeArg;
use super::{parse_month, ChartFormat, ChartSizeArgs, PricesInput, PurchasesInput};
use crate::models::Month;

use clap::Args;
use std::path::PathBuf;

/// dashboard 子命令参数
#[derive(Args, Debug)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub prices: PricesInput,

    #[command(flatten)]
    pub purchases: PurchasesInput,

    /// Output directory for charts and CSV files
    #[arg(short, long, env = "SILVERDASH_OUTPUT_DIR", default_value = "silver_dashboard")]
    pub output: PathBuf,

    /// Chart image format
    #[arg(short, long, value_enum, default_value = "png")]
    pub format: ChartFormat,

    #[command(flatten)]
    pub size: ChartSizeArgs,

    /// Price range filter for the yearly average chart
    #[arg(short, long, value_enum, default_value = "all")]
    pub range: RangeArg,

    /// Number of states in the purchase ranking
    #[arg(short = 'n', long, default_value_t = 5)]
    pub top_n: usize,

    /// Month for the price trend chart
    #[arg(short, long, default_value = "Jan", value_parser = parse_month)]
    pub month: Month,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
