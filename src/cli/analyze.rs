//! # analyze 子命令 CLI 定义
//!
//! 分析功能统一入口，包含多个子命令：
//! - `prices`: 年度平均价格柱状图
//! - `states`: 采购量前 N 个州柱状图
//! - `trend`: 指定月份历年价格折线图
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/analyze/` 相应模块

use super::{parse_month, ChartFormat, ChartSizeArgs, PricesInput, PurchasesInput};
use crate::models::{Month, PriceRange};

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────
// Analyze 主命令
// ─────────────────────────────────────────────────────────────

/// analyze 主命令参数
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(subcommand)]
    pub command: AnalyzeCommands,
}

/// analyze 子命令
#[derive(Subcommand, Debug)]
pub enum AnalyzeCommands {
    /// Average silver price per year, optionally filtered by price range
    Prices(PricesArgs),

    /// Top states by silver purchased
    States(StatesArgs),

    /// Silver price trend for one month across years
    Trend(TrendArgs),
}

// ─────────────────────────────────────────────────────────────
// 价格区间
// ─────────────────────────────────────────────────────────────

/// 价格区间筛选 (₹/kg)
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum RangeArg {
    /// No filter
    #[default]
    All,
    /// Price ≤ 20,000
    Le20000,
    /// 20,000 ≤ price ≤ 30,000
    Between,
    /// Price ≥ 30,000
    Ge30000,
}

impl From<RangeArg> for PriceRange {
    fn from(range: RangeArg) -> Self {
        match range {
            RangeArg::All => PriceRange::All,
            RangeArg::Le20000 => PriceRange::Le20000,
            RangeArg::Between => PriceRange::Between20000And30000,
            RangeArg::Ge30000 => PriceRange::Ge30000,
        }
    }
}

// ─────────────────────────────────────────────────────────────
// prices 子命令
// ─────────────────────────────────────────────────────────────

/// prices 子命令参数
#[derive(Args, Debug)]
pub struct PricesArgs {
    #[command(flatten)]
    pub input: PricesInput,

    /// Price range filter applied before averaging
    #[arg(short, long, value_enum, default_value = "all")]
    pub range: RangeArg,

    /// Output chart file
    #[arg(short, long, default_value = "yearly_average_price.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<ChartFormat>,

    #[command(flatten)]
    pub size: ChartSizeArgs,

    /// Also export the yearly averages to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Skip chart generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}

// ─────────────────────────────────────────────────────────────
// states 子命令
// ─────────────────────────────────────────────────────────────

/// states 子命令参数
#[derive(Args, Debug)]
pub struct StatesArgs {
    #[command(flatten)]
    pub input: PurchasesInput,

    /// Number of states to show
    #[arg(short = 'n', long, default_value_t = 5)]
    pub top_n: usize,

    /// Output chart file
    #[arg(short, long, default_value = "top_states.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<ChartFormat>,

    #[command(flatten)]
    pub size: ChartSizeArgs,

    /// Also export the ranking to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Skip chart generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}

// ─────────────────────────────────────────────────────────────
// trend 子命令
// ─────────────────────────────────────────────────────────────

/// trend 子命令参数
#[derive(Args, Debug)]
pub struct TrendArgs {
    #[command(flatten)]
    pub input: PricesInput,

    /// Month code (Jan, Feb, ..., Dec)
    #[arg(short, long, default_value = "Jan", value_parser = parse_month)]
    pub month: Month,

    /// Output chart file
    #[arg(short, long, default_value = "month_trend.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<ChartFormat>,

    #[command(flatten)]
    pub size: ChartSizeArgs,

    /// Also export the selected records to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Skip chart generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}
