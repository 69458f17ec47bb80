//! # compute 子命令实现
//!
//! 从单次测量或测量 CSV 文件计算康普顿波长偏移。
//!
//! ## 功能
//! - 理论偏移、实验偏移（Pohl 透射法）与传播误差
//! - 结果表格输出（tabled）
//! - 可选导出为 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/compute.rs` 定义的 ComputeArgs
//! - 使用 `compton/` 模块进行计算
//! - 使用 `parsers/` 读取测量文件

use crate::cli::compute::ComputeArgs;
use crate::compton::{self, Calibration, ComptonCalculator};
use crate::error::{ComptonlabError, Result};
use crate::models::{ComptonAnalysis, LabeledMeasurement, Measurement};
use crate::parsers;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 执行 compute 命令
pub fn execute(args: ComputeArgs) -> Result<()> {
    output::print_header("Compton Scattering Wavelength Shift");

    let measurements = load_measurements(&args)?;
    if measurements.is_empty() {
        output::print_warning("Input file contains no measurements");
        return Ok(());
    }

    let calculator = ComptonCalculator::new(calibration_from_args(&args));

    let mut analyses = Vec::with_capacity(measurements.len());
    for lm in &measurements {
        let analysis = calculator.analyze(&lm.label, &lm.measurement)?;
        analyses.push(analysis);
    }

    print_analysis_table(&analyses);

    if analyses.len() == 1 {
        print_single_summary(&analyses[0]);
    }

    if let Some(ref path) = args.output {
        compton::export::to_csv(&analyses, path)?;
        output::print_success(&format!("Results saved to '{}'", path.display()));
    }

    Ok(())
}

/// 从命令行参数构造标定参数（λ₀ 以 pm 给出，内部转换为 m）
fn calibration_from_args(args: &ComputeArgs) -> Calibration {
    Calibration {
        lambda0: args.lambda0 * 1e-12,
        absorption_a: args.absorption_a,
        absorption_n: args.absorption_n,
    }
}

/// 加载测量数据：来自 CSV 文件，或来自命令行参数
fn load_measurements(args: &ComputeArgs) -> Result<Vec<LabeledMeasurement>> {
    if let Some(ref input) = args.input {
        if !input.is_file() {
            return Err(ComptonlabError::FileNotFound {
                path: input.display().to_string(),
            });
        }
        output::print_info(&format!("Reading measurements from '{}'", input.display()));
        return parsers::parse_measurement_csv(input);
    }

    // 命令行直接给出：六个测量量必须齐全
    match (args.theta, args.delta_t, args.r0, args.r1, args.r2, args.r_background) {
        (Some(theta), Some(delta_t), Some(r0), Some(r1), Some(r2), Some(r_background)) => {
            Ok(vec![LabeledMeasurement {
                label: args.label.clone(),
                measurement: Measurement {
                    theta: theta.to_radians(),
                    accelerating_voltage: args.voltage,
                    beam_current: args.current,
                    delta_t,
                    r0,
                    r1,
                    r2,
                    r_background,
                },
            }])
        }
        _ => Err(ComptonlabError::InvalidArgument(
            "Provide either --input FILE or the full measurement \
             (--theta, --delta-t, --r0, --r1, --r2, --r-background)"
                .to_string(),
        )),
    }
}

/// 打印分析结果表格
fn print_analysis_table(analyses: &[ComptonAnalysis]) {
    #[derive(Tabled)]
    struct AnalysisRow {
        #[tabled(rename = "Label")]
        label: String,
        #[tabled(rename = "θ (°)")]
        theta: String,
        #[tabled(rename = "Δλ theory (pm)")]
        theoretical: String,
        #[tabled(rename = "Δλ exp (pm)")]
        experimental: String,
        #[tabled(rename = "σ (pm)")]
        error: String,
        #[tabled(rename = "|Δ|/σ")]
        deviation: String,
    }

    let rows: Vec<AnalysisRow> = analyses
        .iter()
        .map(|a| AnalysisRow {
            label: a.label.clone(),
            theta: format!("{:.1}", a.measurement.theta_degrees()),
            theoretical: format!("{:.3}", a.theoretical_shift_pm()),
            experimental: format!("{:.3}", a.experimental_shift_pm()),
            error: format!("{:.3}", a.experimental_error_pm()),
            deviation: a
                .deviation_sigma()
                .map(|d| format!("{:.2}", d))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    println!("{}", Table::new(&rows));
}

/// 单次测量时额外打印完整精度的数值
fn print_single_summary(a: &ComptonAnalysis) {
    println!();
    output::print_quantity("Δλ (theory)", a.theoretical_shift_pm(), "pm");
    output::print_quantity("Δλ (experiment)", a.experimental_shift_pm(), "pm");
    output::print_quantity("σ (1-sigma)", a.experimental_error_pm(), "pm");

    if let Some(dev) = a.deviation_sigma() {
        println!();
        if dev <= 2.0 {
            output::print_success(&format!(
                "Experiment agrees with theory within {:.2}σ",
                dev
            ));
        } else {
            output::print_warning(&format!(
                "Experiment deviates from theory by {:.2}σ",
                dev
            ));
        }
    }
}
