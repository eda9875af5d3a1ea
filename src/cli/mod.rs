//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `calc`: 白银总价计算
//! - `analyze`: 单项分析（嵌套子命令）
//!   - `prices`: 年度平均价格（可按价格区间筛选）
//!   - `states`: 采购量前 N 个州
//!   - `trend`: 指定月份历年价格趋势
//! - `dashboard`: 一次生成全部图表与数据
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: calc, analyze, dashboard

pub mod analyze;
pub mod calc;
pub mod dashboard;

use crate::models::Month;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// 默认历史价格表
pub const DEFAULT_PRICES_CSV: &str = "historical_silver_price.csv";

/// 默认州采购表
pub const DEFAULT_PURCHASES_CSV: &str = "state_wise_silver_purchased_kg.csv";

/// silverdash - 白银价格计算器与白银销售仪表盘
#[derive(Parser)]
#[command(name = "silverdash")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Silver price calculator and silver sales dashboard", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate the total cost of a quantity of silver
    Calc(calc::CalcArgs),

    /// Analyze the silver price and purchase datasets
    Analyze(analyze::AnalyzeArgs),

    /// Render every dashboard chart and data table into one directory
    Dashboard(dashboard::DashboardArgs),
}

// ─────────────────────────────────────────────────────────────
// 共享参数
// ─────────────────────────────────────────────────────────────

/// 图表输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ChartFormat {
    /// PNG image
    #[default]
    Png,
    /// SVG vector image
    Svg,
}

impl ChartFormat {
    /// 文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Svg => "svg",
        }
    }

    /// 从文件扩展名推断格式，未知扩展名按 PNG 处理
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("svg") => ChartFormat::Svg,
            _ => ChartFormat::Png,
        }
    }
}

impl std::fmt::Display for ChartFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// 图表尺寸参数
#[derive(Args, Debug, Clone)]
pub struct ChartSizeArgs {
    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 700)]
    pub height: u32,
}

/// 解析月份代码 (Jan ... Dec)
pub fn parse_month(input: &str) -> Result<Month, String> {
    input.parse::<Month>().map_err(|e| e.to_string())
}

/// 历史价格表路径参数
#[derive(Args, Debug, Clone)]
pub struct PricesInput {
    /// CSV with columns Year, Month, Silver_Price_INR_per_kg
    #[arg(long, env = "SILVERDASH_PRICES", default_value = DEFAULT_PRICES_CSV)]
    pub prices: PathBuf,
}

/// 州采购表路径参数
#[derive(Args, Debug, Clone)]
pub struct PurchasesInput {
    /// CSV with columns State, Silver_Purchased_kg
    #[arg(long, env = "SILVERDASH_PURCHASES", default_value = DEFAULT_PURCHASES_CSV)]
    pub purchases: PathBuf,
}
