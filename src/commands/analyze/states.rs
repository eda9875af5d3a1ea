//! # states 子命令实现
//!
//! 按采购量对各州排序并展示前 N 名。
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的 StatesArgs
//! - 使用 `parsers/purchases.rs`, `analysis/query.rs`, `analysis/plot.rs`, `analysis/export.rs`

use crate::analysis::{self, export, plot};
use crate::cli::analyze::StatesArgs;
use crate::commands::chart_spec;
use crate::error::Result;
use crate::models::PurchaseRecord;
use crate::parsers;
use crate::utils::format::format_thousands;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 排名表格行
#[derive(Debug, Clone, Tabled)]
struct StateRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Silver Purchased (kg)")]
    purchased: String,
}

/// 构造排名表格
pub(crate) fn ranking_table(top: &[PurchaseRecord]) -> Table {
    let rows: Vec<StateRow> = top
        .iter()
        .enumerate()
        .map(|(i, p)| StateRow {
            rank: i + 1,
            state: p.state.clone(),
            purchased: format_thousands(p.purchased_kg, 2),
        })
        .collect();
    Table::new(rows)
}

/// 执行 states 子命令
pub fn execute(args: StatesArgs) -> Result<()> {
    output::print_header("Silver Purchases by State");

    let purchases = parsers::load_purchases_file(&args.input.purchases)?;
    output::print_info(&format!(
        "Loaded {} purchase records from '{}'",
        purchases.len(),
        args.input.purchases.display()
    ));

    let top = analysis::top_n_by_purchase(&purchases, args.top_n)?;
    if top.is_empty() {
        output::print_warning("No purchase records to rank.");
        return Ok(());
    }

    output::print_header(&format!("Top {} States by Silver Purchase", top.len()));
    println!("{}", ranking_table(&top));

    if let Some(ref csv_path) = args.csv {
        export::top_states_to_csv(&top, csv_path)?;
        output::print_saved("state ranking", &csv_path.display().to_string());
    }

    if args.no_plot {
        return Ok(());
    }

    let spec = chart_spec(args.format, &args.output, &args.size);
    let title = format!("Top {} States by Silver Purchase", top.len());
    plot::plot_top_states(&top, &args.output, &title, spec)?;
    output::print_success(&format!("Chart saved to '{}'", args.output.display()));

    Ok(())
}
