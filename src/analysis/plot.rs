//! # 图表生成
//!
//! 使用 `plotters` 库生成仪表盘的三张图：
//! - 年度平均价格柱状图
//! - 采购量前 N 个州柱状图
//! - 指定月份历年价格折线图
//!
//! 支持 PNG 和 SVG 输出。
//!
//! ## 依赖关系
//! - 被 `commands/analyze/` 与 `commands/dashboard.rs` 调用
//! - 使用 `analysis/query.rs` 的查询结果
//! - 使用 `plotters` 渲染图表

use crate::analysis::query::YearlyAverages;
use crate::error::{Result, SilverError};
use crate::models::{PriceRecord, PurchaseRecord};

use plotters::coord::ranged1d::SegmentValue;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// 图表主色（棕色）
const BAR_COLOR: RGBColor = RGBColor(165, 42, 42);

/// 图表尺寸与格式
#[derive(Debug, Clone, Copy)]
pub struct ChartSpec {
    pub width: u32,
    pub height: u32,
    pub use_svg: bool,
}

fn plot_err<E: std::fmt::Debug>(e: E) -> SilverError {
    SilverError::Other(format!("{:?}", e))
}

fn no_data() -> SilverError {
    SilverError::Other("No data to plot".to_string())
}

/// 生成年度平均价格柱状图
pub fn plot_yearly_averages(
    averages: &YearlyAverages,
    output_path: &Path,
    title: &str,
    spec: ChartSpec,
) -> Result<()> {
    if averages.is_empty() {
        return Err(no_data());
    }

    if spec.use_svg {
        let root = SVGBackend::new(output_path, (spec.width, spec.height)).into_drawing_area();
        draw_yearly_chart(&root, averages, title)?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(output_path, (spec.width, spec.height)).into_drawing_area();
        draw_yearly_chart(&root, averages, title)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

/// 生成前 N 个州采购量柱状图
pub fn plot_top_states(
    top: &[PurchaseRecord],
    output_path: &Path,
    title: &str,
    spec: ChartSpec,
) -> Result<()> {
    if top.is_empty() {
        return Err(no_data());
    }

    if spec.use_svg {
        let root = SVGBackend::new(output_path, (spec.width, spec.height)).into_drawing_area();
        draw_states_chart(&root, top, title)?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(output_path, (spec.width, spec.height)).into_drawing_area();
        draw_states_chart(&root, top, title)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

/// 生成单月价格趋势折线图
pub fn plot_month_trend(
    records: &[PriceRecord],
    output_path: &Path,
    title: &str,
    spec: ChartSpec,
) -> Result<()> {
    if records.is_empty() {
        return Err(no_data());
    }

    if spec.use_svg {
        let root = SVGBackend::new(output_path, (spec.width, spec.height)).into_drawing_area();
        draw_trend_chart(&root, records, title)?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(output_path, (spec.width, spec.height)).into_drawing_area();
        draw_trend_chart(&root, records, title)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

/// y 轴上限，留出 10% 空间
fn y_upper(max: f64) -> f64 {
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

fn draw_yearly_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    averages: &YearlyAverages,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let first_year = averages.keys().next().copied().ok_or_else(no_data)?;
    let mut last_year = averages.keys().next_back().copied().ok_or_else(no_data)?;
    if last_year == first_year {
        last_year += 1;
    }
    let y_max = y_upper(averages.values().copied().fold(0.0, f64::max));

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d((first_year..last_year).into_segmented(), 0.0..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Year")
        .y_desc("Average Silver Price (₹/kg)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BAR_COLOR.filled())
                .margin(8)
                .data(averages.iter().map(|(year, avg)| (*year, *avg))),
        )
        .map_err(plot_err)?;

    Ok(())
}

fn draw_states_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    top: &[PurchaseRecord],
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let names: Vec<&str> = top.iter().map(|p| p.state.as_str()).collect();
    let last_idx = (top.len() as i32 - 1).max(1);
    let y_max = y_upper(top.iter().map(|p| p.purchased_kg).fold(0.0, f64::max));

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d((0..last_idx).into_segmented(), 0.0..y_max)
        .map_err(plot_err)?;

    let state_label = |v: &SegmentValue<i32>| match v {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => names
            .get(*i as usize)
            .map(|s| s.to_string())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(top.len())
        .x_label_formatter(&state_label)
        .x_desc("State")
        .y_desc("Silver Purchased (kg)")
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BAR_COLOR.filled())
                .margin(12)
                .data(top.iter().enumerate().map(|(i, p)| (i as i32, p.purchased_kg))),
        )
        .map_err(plot_err)?;

    Ok(())
}

fn draw_trend_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    records: &[PriceRecord],
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let x_min = records.iter().map(|r| r.year).min().ok_or_else(no_data)?;
    let x_max = records.iter().map(|r| r.year).max().ok_or_else(no_data)?;
    let y_min = records
        .iter()
        .map(|r| r.price_inr_per_kg)
        .fold(f64::INFINITY, f64::min);
    let y_max = records
        .iter()
        .map(|r| r.price_inr_per_kg)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_margin = ((y_max - y_min).abs() * 0.1).max(1.0);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(
            (x_min - 1)..(x_max + 1),
            (y_min - y_margin).max(0.0)..(y_max + y_margin),
        )
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Silver Price (₹/kg)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_err)?;

    // 按输入顺序连线
    chart
        .draw_series(LineSeries::new(
            records.iter().map(|r| (r.year, r.price_inr_per_kg)),
            BAR_COLOR.stroke_width(2),
        ))
        .map_err(plot_err)?;

    chart
        .draw_series(
            records
                .iter()
                .map(|r| Circle::new((r.year, r.price_inr_per_kg), 5, BAR_COLOR.filled())),
        )
        .map_err(plot_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;

    fn svg_spec() -> ChartSpec {
        ChartSpec {
            width: 640,
            height: 480,
            use_svg: true,
        }
    }

    #[test]
    fn test_plot_yearly_averages_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("yearly.svg");

        let mut averages = YearlyAverages::new();
        averages.insert(2019, 38_000.0);
        averages.insert(2020, 48_000.0);
        averages.insert(2021, 66_000.0);

        plot_yearly_averages(&averages, &path, "Average Silver Price", svg_spec()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
    }

    #[test]
    fn test_plot_single_year_and_state() {
        let dir = tempfile::tempdir().unwrap();

        let mut averages = YearlyAverages::new();
        averages.insert(2020, 48_000.0);
        plot_yearly_averages(&averages, &dir.path().join("one.svg"), "t", svg_spec()).unwrap();

        let top = vec![PurchaseRecord::new("Goa", 10.0)];
        plot_top_states(&top, &dir.path().join("goa.svg"), "t", svg_spec()).unwrap();
    }

    #[test]
    fn test_plot_top_states_and_trend_svg() {
        let dir = tempfile::tempdir().unwrap();

        let top = vec![
            PurchaseRecord::new("Maharashtra", 1200.0),
            PurchaseRecord::new("Gujarat", 900.0),
            PurchaseRecord::new("Kerala", 450.0),
        ];
        let states_path = dir.path().join("states.svg");
        plot_top_states(&top, &states_path, "Top States", svg_spec()).unwrap();
        assert!(states_path.exists());

        let jan = vec![
            PriceRecord::new(2019, Month::Jan, 40_000.0),
            PriceRecord::new(2020, Month::Jan, 47_000.0),
        ];
        let trend_path = dir.path().join("trend.svg");
        plot_month_trend(&jan, &trend_path, "January Trend", svg_spec()).unwrap();
        assert!(trend_path.exists());
    }

    #[test]
    fn test_plot_empty_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");

        assert!(plot_yearly_averages(&YearlyAverages::new(), &path, "t", svg_spec()).is_err());
        assert!(plot_top_states(&[], &path, "t", svg_spec()).is_err());
        assert!(plot_month_trend(&[], &path, "t", svg_spec()).is_err());
        assert!(!path.exists());
    }
}
