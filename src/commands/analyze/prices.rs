//! # prices 子命令实现
//!
//! 按价格区间筛选历史价格，计算每年平均价格并可视化。
//!
//! ## 功能
//! - 加载并校验历史价格表
//! - 区间筛选 + 按年分组求平均
//! - 终端表格、可选 CSV 导出、柱状图
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的 PricesArgs
//! - 使用 `parsers/prices.rs`, `analysis/query.rs`, `analysis/plot.rs`, `analysis/export.rs`

use crate::analysis::{self, export, plot, PriceSummary, YearlyAverages};
use crate::cli::analyze::PricesArgs;
use crate::commands::chart_spec;
use crate::error::Result;
use crate::models::{PriceRange, PriceRecord};
use crate::parsers;
use crate::utils::format::format_thousands;
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 年度平均价格表格行
#[derive(Debug, Clone, Tabled)]
struct YearRow {
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Average Price (₹/kg)")]
    average: String,
}

/// 构造年度平均价格表格
pub(crate) fn yearly_table(averages: &YearlyAverages) -> Table {
    let rows: Vec<YearRow> = averages
        .iter()
        .map(|(year, avg)| YearRow {
            year: *year,
            average: format_thousands(*avg, 2),
        })
        .collect();
    Table::new(rows)
}

/// 打印价格表概要
pub(crate) fn print_summary(path: &Path, prices: &[PriceRecord]) {
    match analysis::price_summary(prices) {
        Some(PriceSummary {
            count,
            first_year,
            last_year,
            min_price,
            max_price,
            mean_price,
        }) => output::print_info(&format!(
            "Loaded {} price records from '{}' ({}-{}, ₹{} - ₹{} per kg, mean ₹{})",
            count,
            path.display(),
            first_year,
            last_year,
            format_thousands(min_price, 0),
            format_thousands(max_price, 0),
            format_thousands(mean_price, 0)
        )),
        None => output::print_warning(&format!("'{}' contains no price records", path.display())),
    }
}

/// 执行 prices 子命令
pub fn execute(args: PricesArgs) -> Result<()> {
    output::print_header("Historical Silver Price Analysis");

    let prices = parsers::load_prices_file(&args.input.prices)?;
    print_summary(&args.input.prices, &prices);

    let range: PriceRange = args.range.into();
    output::print_info(&format!("Price range filter: {}", range));

    let averages = analysis::filter_and_average_by_year(&prices, range);
    if averages.is_empty() {
        output::print_warning(&format!("No price records match the range '{}'", range));
        return Ok(());
    }

    output::print_header("Average Silver Price per Year (₹ per kg)");
    println!("{}", yearly_table(&averages));

    if let Some(ref csv_path) = args.csv {
        export::yearly_averages_to_csv(&averages, csv_path)?;
        output::print_saved("yearly averages", &csv_path.display().to_string());
    }

    if args.no_plot {
        return Ok(());
    }

    let spec = chart_spec(args.format, &args.output, &args.size);
    let title = format!("Average Silver Price per Year ({})", range);
    plot::plot_yearly_averages(&averages, &args.output, &title, spec)?;
    output::print_success(&format!("Chart saved to '{}'", args.output.display()));

    Ok(())
}
