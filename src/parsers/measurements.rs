//! # 测量 CSV 解析器
//!
//! 解析实验记录 CSV，每行一次测量。
//!
//! ## 文件格式
//! 必需列: theta_deg, delta_t_s, r0, r1, r2, r_background
//! 可选列: label, voltage_kv, current_ma
//!
//! 角度在文件中以度记录（实验室量角器读数），解析时转换为弧度。
//!
//! ## 依赖关系
//! - 被 `commands/compute.rs`, `commands/batch.rs` 调用
//! - 使用 `csv` + `serde` 反序列化
//! - 构造 `models/measurement.rs` 的 Measurement

use crate::error::{ComptonlabError, Result};
use crate::models::{LabeledMeasurement, Measurement};

use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// CSV 行的原始形式（角度为度）
#[derive(Debug, Deserialize)]
struct MeasurementRow {
    #[serde(default)]
    label: Option<String>,

    theta_deg: f64,

    #[serde(default)]
    voltage_kv: Option<f64>,

    #[serde(default)]
    current_ma: Option<f64>,

    delta_t_s: f64,

    r0: f64,
    r1: f64,
    r2: f64,
    r_background: f64,
}

impl MeasurementRow {
    /// 转换为内部模型（度 → 弧度），缺失标签时使用行号
    fn into_labeled(self, index: usize) -> LabeledMeasurement {
        LabeledMeasurement {
            label: self
                .label
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| format!("row{}", index + 1)),
            measurement: Measurement {
                theta: self.theta_deg.to_radians(),
                accelerating_voltage: self.voltage_kv,
                beam_current: self.current_ma,
                delta_t: self.delta_t_s,
                r0: self.r0,
                r1: self.r1,
                r2: self.r2,
                r_background: self.r_background,
            },
        }
    }
}

/// 解析测量 CSV 文件
pub fn parse_measurement_csv(path: &Path) -> Result<Vec<LabeledMeasurement>> {
    let file = std::fs::File::open(path).map_err(|e| ComptonlabError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    read_measurements(file).map_err(|e| match e {
        // 附加文件路径，便于批量模式定位出错文件
        ComptonlabError::CsvError(err) => ComptonlabError::ParseError {
            path: path.display().to_string(),
            reason: err.to_string(),
        },
        other => other,
    })
}

/// 从任意 Reader 读取测量记录
fn read_measurements<R: Read>(reader: R) -> Result<Vec<LabeledMeasurement>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut measurements = Vec::new();
    for (index, row) in rdr.deserialize::<MeasurementRow>().enumerate() {
        measurements.push(row?.into_labeled(index));
    }

    Ok(measurements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_rows() {
        let data = "\
label,theta_deg,voltage_kv,current_ma,delta_t_s,r0,r1,r2,r_background
run1,143.8,21.0,1.0,300,19.16,2.497,1.487,0.300
run2,143.5,21.0,1.0,600,18.15,2.223,1.613,0.300
";
        let parsed = read_measurements(data.as_bytes()).unwrap();
        assert_eq!(parsed.len(), 2);

        assert_eq!(parsed[0].label, "run1");
        let m = &parsed[0].measurement;
        assert!((m.theta - 143.8_f64.to_radians()).abs() < 1e-12);
        assert_eq!(m.accelerating_voltage, Some(21.0));
        assert_eq!(m.delta_t, 300.0);
        assert_eq!(m.r0, 19.16);

        assert_eq!(parsed[1].label, "run2");
        assert_eq!(parsed[1].measurement.delta_t, 600.0);
    }

    #[test]
    fn test_parse_without_optional_columns() {
        let data = "\
theta_deg,delta_t_s,r0,r1,r2,r_background
143.8,300,19.16,2.497,1.487,0.300
";
        let parsed = read_measurements(data.as_bytes()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].label, "row1");
        assert_eq!(parsed[0].measurement.accelerating_voltage, None);
        assert_eq!(parsed[0].measurement.beam_current, None);
    }

    #[test]
    fn test_parse_rejects_malformed_rate() {
        let data = "\
theta_deg,delta_t_s,r0,r1,r2,r_background
143.8,300,not-a-number,2.497,1.487,0.300
";
        assert!(read_measurements(data.as_bytes()).is_err());
    }
}
