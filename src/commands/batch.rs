//! # batch 子命令实现
//!
//! 批量处理测量 CSV 文件目录，每个输入文件产生一个结果 CSV。
//!
//! ## 功能
//! - 并行计算（rayon）
//! - 进度反馈与汇总统计
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的 BatchArgs
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `compton/` 模块进行计算
//! - 使用 `parsers/` 读取测量文件

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::batch::BatchArgs;
use crate::compton::{self, Calibration, ComptonCalculator};
use crate::error::{ComptonlabError, Result};
use crate::parsers;
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 批量处理配置
struct BatchComputeConfig {
    output_dir: PathBuf,
    calibration: Calibration,
    overwrite: bool,
}

/// 执行 batch 命令
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Compton Scattering Batch Analysis");

    if !args.input.is_dir() {
        return Err(ComptonlabError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    output::print_info(&format!("Input directory: '{}'", args.input.display()));

    // 收集文件
    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        return Err(ComptonlabError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }

    output::print_info(&format!("Found {} measurement files", files.len()));

    // 确保输出目录存在
    fs::create_dir_all(&args.output).map_err(|e| ComptonlabError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let config = Arc::new(BatchComputeConfig {
        output_dir: args.output.clone(),
        calibration: Calibration {
            lambda0: args.lambda0 * 1e-12,
            absorption_a: args.absorption_a,
            absorption_n: args.absorption_n,
        },
        overwrite: args.overwrite,
    });

    // 并行处理
    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(files, |file| process_batch_file(file, &config));

    // 打印统计
    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} success, {} skipped, {} failed",
        result.success, result.skipped, result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 处理批量模式中的单个文件
fn process_batch_file(input: &PathBuf, config: &Arc<BatchComputeConfig>) -> ProcessResult {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let output_file = config.output_dir.join(format!("{}_compton.csv", stem));

    if output_file.exists() && !config.overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            output_file.display()
        ));
    }

    match analyze_file(input, &output_file, config) {
        Ok(count) => ProcessResult::Success(format!(
            "{} -> {} ({} measurements)",
            input.display(),
            output_file.display(),
            count
        )),
        Err(e) => ProcessResult::Failed(input.display().to_string(), e.to_string()),
    }
}

/// 分析单个测量文件并导出结果，返回测量条数
fn analyze_file(input: &Path, output: &Path, config: &BatchComputeConfig) -> Result<usize> {
    let measurements = parsers::parse_measurement_csv(input)?;

    let calculator = ComptonCalculator::new(config.calibration);

    let mut analyses = Vec::with_capacity(measurements.len());
    for lm in &measurements {
        analyses.push(calculator.analyze(&lm.label, &lm.measurement)?);
    }

    compton::export::to_csv(&analyses, output)?;
    Ok(analyses.len())
}
