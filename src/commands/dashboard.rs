//! # dashboard 命令实现
//!
//! 一次加载两张数据表，生成全部派生视图：
//! - 年度平均价格（柱状图 + CSV）
//! - 前 N 个州采购量（柱状图 + CSV）
//! - 单月价格趋势（折线图 + CSV）
//!
//! 每个输出文件独立生成，单个失败不会中断其余输出。
//!
//! ## 依赖关系
//! - 使用 `cli/dashboard.rs` 定义的参数
//! - 使用 `parsers/`, `analysis/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use super::analyze::{prices, states, trend};
use crate::analysis::{self, export, plot, ChartSpec};
use crate::cli::dashboard::DashboardArgs;
use crate::cli::ChartFormat;
use crate::error::{Result, SilverError};
use crate::models::{PriceRange, PriceRecord, PurchaseRecord};
use crate::parsers;
use crate::utils::{output, progress};

use std::fs;
use std::path::{Path, PathBuf};

/// 单个输出文件的处理结果
#[derive(Debug)]
enum StepResult {
    Written(PathBuf),
    Skipped(String),
    Failed(PathBuf, String),
}

/// 一个输出任务
struct Step<'a> {
    file_name: String,
    /// 视图为空时跳过图表，记录视图名称
    empty_view: Option<&'static str>,
    run: Box<dyn Fn(&Path) -> Result<()> + 'a>,
}

/// 执行 dashboard 命令
pub fn execute(args: DashboardArgs) -> Result<()> {
    let results = render_dashboard(&args)?;
    report(&results);
    Ok(())
}

/// 加载数据、计算视图并写出全部文件，返回每个文件的处理结果
fn render_dashboard(args: &DashboardArgs) -> Result<Vec<StepResult>> {
    output::print_header("Silver Price Calculator & Silver Sales Dashboard");

    // 显式加载步骤：之后所有视图都从这两张只读表计算
    let price_table = parsers::load_prices_file(&args.prices.prices)?;
    prices::print_summary(&args.prices.prices, &price_table);

    let purchase_table = parsers::load_purchases_file(&args.purchases.purchases)?;
    output::print_info(&format!(
        "Loaded {} purchase records from '{}'",
        purchase_table.len(),
        args.purchases.purchases.display()
    ));

    let range: PriceRange = args.range.into();
    let averages = analysis::filter_and_average_by_year(&price_table, range);
    let top = analysis::top_n_by_purchase(&purchase_table, args.top_n)?;
    let selected = analysis::select_month(&price_table, args.month);

    print_views(range, &averages, &top, &selected, args);

    fs::create_dir_all(&args.output).map_err(|e| SilverError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let spec = ChartSpec {
        width: args.size.width,
        height: args.size.height,
        use_svg: args.format == ChartFormat::Svg,
    };
    let ext = args.format.extension();
    output::print_info(&format!(
        "Writing {} charts and CSV tables to '{}'",
        args.format,
        args.output.display()
    ));

    let yearly_title = format!("Average Silver Price per Year ({})", range);
    let states_title = format!("Top {} States by Silver Purchase", top.len());
    let trend_title = format!("{} Silver Price Trend", args.month.full_name());
    let month_slug = args.month.code().to_lowercase();

    let steps: Vec<Step> = vec![
        Step {
            file_name: format!("yearly_average_price.{}", ext),
            empty_view: averages.is_empty().then_some("yearly average price"),
            run: Box::new(|p: &Path| {
                plot::plot_yearly_averages(&averages, p, &yearly_title, spec)
            }),
        },
        Step {
            file_name: "yearly_average_price.csv".to_string(),
            empty_view: None,
            run: Box::new(|p: &Path| export::yearly_averages_to_csv(&averages, p)),
        },
        Step {
            file_name: format!("top_states.{}", ext),
            empty_view: top.is_empty().then_some("state ranking"),
            run: Box::new(|p: &Path| plot::plot_top_states(&top, p, &states_title, spec)),
        },
        Step {
            file_name: "top_states.csv".to_string(),
            empty_view: None,
            run: Box::new(|p: &Path| export::top_states_to_csv(&top, p)),
        },
        Step {
            file_name: format!("{}_price_trend.{}", month_slug, ext),
            empty_view: selected.is_empty().then_some("month trend"),
            run: Box::new(|p: &Path| {
                plot::plot_month_trend(&selected, p, &trend_title, spec)
            }),
        },
        Step {
            file_name: format!("{}_price_trend.csv", month_slug),
            empty_view: None,
            run: Box::new(|p: &Path| export::price_records_to_csv(&selected, p)),
        },
    ];

    let pb = progress::create_progress_bar(steps.len() as u64, "Rendering");
    let mut results = Vec::with_capacity(steps.len());

    for step in &steps {
        pb.set_message(step.file_name.clone());
        let result = run_step(step, &args.output, args.overwrite);
        results.push(result);
        pb.inc(1);
    }

    pb.finish_and_clear();

    Ok(results)
}

/// 执行单个输出任务
fn run_step(step: &Step, output_dir: &Path, overwrite: bool) -> StepResult {
    let path = output_dir.join(&step.file_name);

    if let Some(view) = step.empty_view {
        return StepResult::Skipped(format!("No data for {}: {}", view, path.display()));
    }

    if path.exists() && !overwrite {
        return StepResult::Skipped(format!("Output exists, skipping: {}", path.display()));
    }

    match (step.run)(&path) {
        Ok(()) => StepResult::Written(path),
        Err(e) => StepResult::Failed(path, e.to_string()),
    }
}

/// 打印各视图的终端表格
fn print_views(
    range: PriceRange,
    averages: &analysis::YearlyAverages,
    top: &[PurchaseRecord],
    selected: &[PriceRecord],
    args: &DashboardArgs,
) {
    output::print_header(&format!("Average Silver Price per Year - {}", range));
    if averages.is_empty() {
        output::print_warning(&format!("No price records match the range '{}'", range));
    } else {
        println!("{}", prices::yearly_table(averages));
    }

    output::print_header(&format!("Top {} States by Silver Purchase", top.len()));
    if top.is_empty() {
        output::print_warning("No purchase records to rank.");
    } else {
        println!("{}", states::ranking_table(top));
    }

    output::print_header(&format!("{} Silver Price Trend", args.month.full_name()));
    if selected.is_empty() {
        output::print_warning(&format!("No price records for month '{}'", args.month));
    } else {
        println!("{}", trend::trend_table(selected));
    }
}

/// 统计 (written, skipped, failed)
fn tally(results: &[StepResult]) -> (usize, usize, usize) {
    results
        .iter()
        .fold((0, 0, 0), |(w, s, f), result| match result {
            StepResult::Written(_) => (w + 1, s, f),
            StepResult::Skipped(_) => (w, s + 1, f),
            StepResult::Failed(..) => (w, s, f + 1),
        })
}

/// 打印输出统计
fn report(results: &[StepResult]) {
    output::print_separator();

    for result in results {
        match result {
            StepResult::Written(path) => output::print_saved("wrote", &path.display().to_string()),
            StepResult::Skipped(msg) => output::print_skip(msg),
            StepResult::Failed(path, err) => {
                output::print_warning(&format!("{}: {}", path.display(), err))
            }
        }
    }

    let (written, skipped, failed) = tally(results);
    output::print_separator();
    output::print_done(&format!(
        "Dashboard complete: {} written, {} skipped, {} failed",
        written, skipped, failed
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::analyze::RangeArg;
    use crate::cli::{ChartSizeArgs, PricesInput, PurchasesInput};
    use crate::models::Month;

    fn write(path: &Path, content: &str) {
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_dashboard_writes_csv_views_and_skips_existing() {
        let dir = tempfile::tempdir().unwrap();
        let prices_path = dir.path().join("prices.csv");
        let purchases_path = dir.path().join("purchases.csv");
        let out_dir = dir.path().join("out");

        write(
            &prices_path,
            "Year,Month,Silver_Price_INR_per_kg\n2020,Jan,15000\n2020,Feb,25000\n2021,Jan,35000\n",
        );
        write(
            &purchases_path,
            "State,Silver_Purchased_kg\nKerala,300\nGujarat,500\nPunjab,300\n",
        );

        let make_args = |overwrite: bool| DashboardArgs {
            prices: PricesInput {
                prices: prices_path.clone(),
            },
            purchases: PurchasesInput {
                purchases: purchases_path.clone(),
            },
            output: out_dir.clone(),
            format: ChartFormat::Svg,
            size: ChartSizeArgs {
                width: 640,
                height: 480,
            },
            range: RangeArg::All,
            top_n: 5,
            month: Month::Jan,
            overwrite,
        };

        let results = render_dashboard(&make_args(false)).unwrap();
        assert_eq!(tally(&results), (6, 0, 0));

        for chart in ["yearly_average_price.svg", "top_states.svg", "jan_price_trend.svg"] {
            let content = fs::read_to_string(out_dir.join(chart)).unwrap();
            assert!(content.contains("<svg"), "{} is not an SVG document", chart);
        }

        let yearly = fs::read_to_string(out_dir.join("yearly_average_price.csv")).unwrap();
        assert_eq!(
            yearly,
            "Year,Average_Silver_Price_INR_per_kg\n2020,20000.00\n2021,35000.00\n"
        );

        let states = fs::read_to_string(out_dir.join("top_states.csv")).unwrap();
        let order: Vec<&str> = states
            .lines()
            .skip(1)
            .filter_map(|l| l.split(',').nth(1))
            .collect();
        assert_eq!(order, vec!["Gujarat", "Kerala", "Punjab"]);

        let jan = parsers::load_prices_file(&out_dir.join("jan_price_trend.csv")).unwrap();
        assert_eq!(jan.len(), 2);
        assert!(jan.iter().all(|r| r.month == Month::Jan));

        // 已存在的文件在未指定 --overwrite 时保持不变
        write(&out_dir.join("top_states.csv"), "sentinel");
        let results = render_dashboard(&make_args(false)).unwrap();
        assert_eq!(tally(&results), (0, 6, 0));
        assert_eq!(
            fs::read_to_string(out_dir.join("top_states.csv")).unwrap(),
            "sentinel"
        );

        execute(make_args(true)).unwrap();
        assert_ne!(
            fs::read_to_string(out_dir.join("top_states.csv")).unwrap(),
            "sentinel"
        );
    }

    #[test]
    fn test_dashboard_skips_charts_for_empty_views() {
        let dir = tempfile::tempdir().unwrap();
        let prices_path = dir.path().join("prices.csv");
        let purchases_path = dir.path().join("purchases.csv");
        let out_dir = dir.path().join("out");
        write(
            &prices_path,
            "Year,Month,Silver_Price_INR_per_kg\n2020,Feb,15000\n",
        );
        write(&purchases_path, "State,Silver_Purchased_kg\n");

        let args = DashboardArgs {
            prices: PricesInput {
                prices: prices_path,
            },
            purchases: PurchasesInput {
                purchases: purchases_path,
            },
            output: out_dir.clone(),
            format: ChartFormat::Svg,
            size: ChartSizeArgs {
                width: 640,
                height: 480,
            },
            range: RangeArg::Ge30000,
            top_n: 5,
            month: Month::Jan,
            overwrite: false,
        };

        // 三个视图均为空：图表跳过，CSV 仅写表头
        let results = render_dashboard(&args).unwrap();
        assert_eq!(tally(&results), (3, 3, 0));
        assert!(!out_dir.join("yearly_average_price.svg").exists());
        assert!(!out_dir.join("top_states.svg").exists());
        assert!(!out_dir.join("jan_price_trend.svg").exists());
        assert_eq!(
            fs::read_to_string(out_dir.join("yearly_average_price.csv")).unwrap(),
            "Year,Average_Silver_Price_INR_per_kg\n"
        );
    }

    #[test]
    fn test_dashboard_rejects_zero_top_n() {
        let dir = tempfile::tempdir().unwrap();
        let prices_path = dir.path().join("prices.csv");
        let purchases_path = dir.path().join("purchases.csv");
        write(&prices_path, "Year,Month,Silver_Price_INR_per_kg\n");
        write(&purchases_path, "State,Silver_Purchased_kg\n");

        let args = DashboardArgs {
            prices: PricesInput {
                prices: prices_path,
            },
            purchases: PurchasesInput {
                purchases: purchases_path,
            },
            output: dir.path().join("out"),
            format: ChartFormat::Png,
            size: ChartSizeArgs {
                width: 640,
                height: 480,
            },
            range: RangeArg::All,
            top_n: 0,
            month: Month::Jan,
            overwrite: false,
        };

        assert!(matches!(execute(args), Err(SilverError::InvalidInput(_))));
    }
}
