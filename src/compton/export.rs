//! # 分析结果导出
//!
//! 导出康普顿偏移分析结果到 CSV 格式。
//!
//! ## 列格式
//! label, theta_deg, theoretical_pm, experimental_pm, error_pm, deviation_sigma
//!
//! ## 依赖关系
//! - 被 `commands/compute.rs`, `commands/batch.rs` 调用
//! - 使用 `models/analysis.rs` 的 ComptonAnalysis 结构
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{ComptonlabError, Result};
use crate::models::ComptonAnalysis;

use std::io::Write;
use std::path::Path;

/// 导出分析结果为 CSV 文件
pub fn to_csv(analyses: &[ComptonAnalysis], output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path).map_err(|e| ComptonlabError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    write_csv(analyses, file)?;
    Ok(())
}

/// 写入分析结果到任意 Writer（便于测试）
fn write_csv<W: Write>(analyses: &[ComptonAnalysis], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "label",
        "theta_deg",
        "theoretical_pm",
        "experimental_pm",
        "error_pm",
        "deviation_sigma",
    ])?;

    for a in analyses {
        wtr.write_record([
            a.label.clone(),
            format!("{:.2}", a.measurement.theta_degrees()),
            format!("{:.4}", a.theoretical_shift_pm()),
            format!("{:.4}", a.experimental_shift_pm()),
            format!("{:.4}", a.experimental_error_pm()),
            a.deviation_sigma()
                .map(|d| format!("{:.2}", d))
                .unwrap_or_default(),
        ])?;
    }

    wtr.flush().map_err(|e| ComptonlabError::Other(format!("CSV flush failed: {}", e)))?;
    Ok(())
}
