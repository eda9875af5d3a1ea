//! # silverdash - 白银价格计算器与白银销售仪表盘
//!
//! 根据重量、单位与单价计算白银总价，并从历史价格表与州采购表生成
//! 描述性统计图表。
//!
//! ## 子命令
//! - `calc` - 白银总价计算（INR / USD）
//! - `analyze` - 单项分析
//!   - `prices` - 年度平均价格（价格区间筛选）
//!   - `states` - 采购量前 N 个州
//!   - `trend` - 单月历年价格趋势
//! - `dashboard` - 一次生成全部图表与 CSV
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (CSV 数据集加载与校验)
//!   │     ├── analysis/  (计算、查询、图表、导出)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod analysis;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
