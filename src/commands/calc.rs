//! # calc 命令实现
//!
//! 计算白银总价并以千分位、两位小数显示。
//!
//! ## 依赖关系
//! - 使用 `cli/calc.rs` 定义的参数
//! - 使用 `analysis/calculator.rs`
//! - 使用 `utils/output.rs`

use crate::analysis::{self, calculator::INR_PER_USD};
use crate::cli::calc::CalcArgs;
use crate::error::Result;
use crate::models::Currency;
use crate::utils::format::format_thousands;
use crate::utils::output;

/// 执行 calc 命令
pub fn execute(args: CalcArgs) -> Result<()> {
    output::print_header("Silver Price Calculator");

    let input = args.to_input();
    let result = analysis::compute_total_cost(&input)?;

    output::print_info(&format!(
        "Weight: {} {} at ₹{} per gram, paid in {}",
        format_thousands(input.weight, 3),
        input.unit,
        format_thousands(input.price_per_gram, 2),
        input.currency
    ));

    if input.currency == Currency::Usd {
        output::print_info(&format!("Converted at a fixed rate of {} INR per USD", INR_PER_USD));
    }

    output::print_highlight("Total Silver Cost:", &result.to_string());

    Ok(())
}
