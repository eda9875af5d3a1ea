//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑：加载数据集、调用 `analysis/`、
//! 输出表格、图表与 CSV。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `analysis/`, `utils/`
//! - 子模块: calc, analyze, dashboard

pub mod analyze;
pub mod calc;
pub mod dashboard;

use crate::analysis::ChartSpec;
use crate::cli::{ChartFormat, ChartSizeArgs, Commands};
use crate::error::Result;

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Calc(args) => calc::execute(args),
        Commands::Analyze(args) => analyze::execute(args),
        Commands::Dashboard(args) => dashboard::execute(args),
    }
}

/// 组合图表参数，未指定格式时由输出文件扩展名推断
pub(crate) fn chart_spec(
    format: Option<ChartFormat>,
    output: &Path,
    size: &ChartSizeArgs,
) -> ChartSpec {
    let format = format.unwrap_or_else(|| ChartFormat::from_path(output));
    ChartSpec {
        width: size.width,
        height: size.height,
        use_svg: format == ChartFormat::Svg,
    }
}
