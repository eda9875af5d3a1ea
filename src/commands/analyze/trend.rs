//! # trend 子命令实现
//!
//! 选取指定月份的全部价格记录，展示历年走势。
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的 TrendArgs
//! - 使用 `parsers/prices.rs`, `analysis/query.rs`, `analysis/plot.rs`, `analysis/export.rs`

use super::prices::print_summary;
use crate::analysis::{self, export, plot};
use crate::cli::analyze::TrendArgs;
use crate::commands::chart_spec;
use crate::error::Result;
use crate::models::PriceRecord;
use crate::parsers;
use crate::utils::format::format_thousands;
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Debug, Clone, Tabled)]
struct TrendRow {
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Price (₹/kg)")]
    price: String,
}

/// 构造单月价格表格
pub(crate) fn trend_table(records: &[PriceRecord]) -> Table {
    let rows: Vec<TrendRow> = records
        .iter()
        .map(|r| TrendRow {
            year: r.year,
            month: r.month.to_string(),
            price: format_thousands(r.price_inr_per_kg, 2),
        })
        .collect();
    Table::new(rows)
}

/// 执行 trend 子命令
pub fn execute(args: TrendArgs) -> Result<()> {
    output::print_header(&format!("{} Silver Price Trend", args.month.full_name()));

    let prices = parsers::load_prices_file(&args.input.prices)?;
    print_summary(&args.input.prices, &prices);

    let selected = analysis::select_month(&prices, args.month);
    if selected.is_empty() {
        output::print_warning(&format!("No price records for month '{}'", args.month));
        return Ok(());
    }

    println!("{}", trend_table(&selected));

    if let Some(ref csv_path) = args.csv {
        export::price_records_to_csv(&selected, csv_path)?;
        output::print_saved("month records", &csv_path.display().to_string());
    }

    if args.no_plot {
        return Ok(());
    }

    let spec = chart_spec(args.format, &args.output, &args.size);
    let title = format!("{} Silver Price Trend", args.month.full_name());
    plot::plot_month_trend(&selected, &args.output, &title, spec)?;
    output::print_success(&format!("Chart saved to '{}'", args.output.display()));

    Ok(())
}
