//! # 康普顿偏移计算器
//!
//! 实现三个核心公式：
//! 1. 理论偏移 Δλ = (h/mₑc)·(1 − cos θ)
//! 2. 实验偏移（Pohl 透射法）Δλ = λ₀·[((1/a)·ln T₂)^(1/n) − ((1/a)·ln T₁)^(1/n)]
//! 3. 实验偏移的 1σ 传播误差
//!
//! 透射系数 Tᵢ = (R₀−R_b)/(Rᵢ−R_b)，由有无铜滤波片的计数率之比得到。
//!
//! ## 参考
//! - R. W. Pohl, Einführung in die Physik, Bd. 3
//! - PHYWE 实验手册 "Compton effect - energy-dispersive direct measurement"
//!
//! ## 依赖关系
//! - 被 `commands/compute.rs`, `commands/batch.rs` 调用
//! - 使用 `models/` 的 Measurement, ComptonAnalysis
//! - 使用 `compton/constants.rs` 的物理常数

use crate::compton::constants::COMPTON_WAVELENGTH;
use crate::error::{ComptonlabError, Result};
use crate::models::{ComptonAnalysis, Measurement};

/// 误差传播公式中作用于 ln Tᵢ 的固定指数。
///
/// 注意：该值不随标定参数 n 变化（默认 n = 2.75 时 1/n ≈ 0.364，
/// 而 7/11 ≈ 0.636）。这一不一致来自原始误差推导工作表，按原样保留。
const ERROR_LOG_EXPONENT: f64 = 7.0 / 11.0;

/// Pohl 透射法标定参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    /// 参考波长 λ₀ (m)
    pub lambda0: f64,
    /// 吸收标定常数 a（无量纲）
    pub absorption_a: f64,
    /// 吸收标定指数 n（无量纲）
    pub absorption_n: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Calibration {
            lambda0: 100.0e-12,
            absorption_a: 7.6,
            absorption_n: 2.75,
        }
    }
}

/// 康普顿偏移计算器
///
/// 无内部可变状态，所有计算都是输入的纯函数。
pub struct ComptonCalculator {
    calibration: Calibration,
}

impl ComptonCalculator {
    /// 使用给定标定参数创建计算器
    pub fn new(calibration: Calibration) -> Self {
        Self { calibration }
    }

    /// 使用默认标定参数（λ₀ = 100 pm, a = 7.6, n = 2.75）创建计算器
    pub fn with_defaults() -> Self {
        Self::new(Calibration::default())
    }

    /// 理论波长偏移 Δλ = λ_C·(1 − cos θ)
    ///
    /// 对所有实数 θ 均有定义，结果非负。
    pub fn theoretical_shift(&self, theta: f64) -> f64 {
        COMPTON_WAVELENGTH * (1.0 - theta.cos())
    }

    /// 实验波长偏移（Pohl 透射法）
    ///
    /// 失败条件：计数率差为零（除零），或透射系数的对数不为正
    /// （分数幂的底必须为正实数）。
    pub fn experimental_shift(&self, m: &Measurement) -> Result<f64> {
        let (log_t1, log_t2) = self.log_transmissions(m)?;

        let inv_n = 1.0 / self.calibration.absorption_n;
        let term1 = (log_t1 / self.calibration.absorption_a).powf(inv_n);
        let term2 = (log_t2 / self.calibration.absorption_a).powf(inv_n);

        Ok(self.calibration.lambda0 * (term2 - term1))
    }

    /// 实验偏移的 1σ 传播误差
    ///
    /// 四个方差贡献项分别来自 R₁、R₂、R₀ 和本底计数率的泊松涨落，
    /// 总方差随曝光时间 Δt 按 1/Δt 缩减。
    pub fn experimental_error(&self, m: &Measurement) -> Result<f64> {
        if m.delta_t <= 0.0 {
            return Err(ComptonlabError::InvalidArgument(format!(
                "delta_t must be positive, got {}",
                m.delta_t
            )));
        }

        let (log_t1, log_t2) = self.log_transmissions(m)?;

        let p1 = log_t1.powf(ERROR_LOG_EXPONENT);
        let p2 = log_t2.powf(ERROR_LOG_EXPONENT);

        let net0 = m.r0 - m.r_background;
        let net1 = m.r1 - m.r_background;
        let net2 = m.r2 - m.r_background;

        let term_r1 = m.r1 / (p1 * net1).powi(2);
        let term_r2 = m.r2 / (p2 * net2).powi(2);
        let term_r0 = m.r0 * ((1.0 / p2 - 1.0 / p1) / net0).powi(2);
        let term_bg = m.r_background
            * ((((m.r0 - m.r2) / net2) / p2 - ((m.r0 - m.r1) / net1) / p1) / net0).powi(2);

        let variance = (term_r1 + term_r2 + term_r0 + term_bg) / m.delta_t;

        let cal = &self.calibration;
        Ok(variance.sqrt()
            * (cal.lambda0 / cal.absorption_n)
            * (1.0 / cal.absorption_a).powf(1.0 / cal.absorption_n))
    }

    /// 对一次测量执行完整分析
    ///
    /// 三个导出量一次性计算，返回后不再变更。
    pub fn analyze(&self, label: &str, m: &Measurement) -> Result<ComptonAnalysis> {
        let theoretical_shift = self.theoretical_shift(m.theta);
        let experimental_shift = self.experimental_shift(m)?;
        let experimental_error = self.experimental_error(m)?;

        Ok(ComptonAnalysis {
            label: label.to_string(),
            measurement: *m,
            theoretical_shift,
            experimental_shift,
            experimental_error,
        })
    }

    /// 计算两个透射系数的自然对数 (ln T₁, ln T₂)
    ///
    /// 校验所有分母非零、透射系数为正且其对数为正，
    /// 否则后续的分数幂没有实数值。
    fn log_transmissions(&self, m: &Measurement) -> Result<(f64, f64)> {
        let net0 = m.r0 - m.r_background;
        let log_t1 = Self::log_transmission(net0, m.r1 - m.r_background, "T1", "r1")?;
        let log_t2 = Self::log_transmission(net0, m.r2 - m.r_background, "T2", "r2")?;
        Ok((log_t1, log_t2))
    }

    /// 单个透射系数 T = net0/net_i 的对数，带域校验
    fn log_transmission(net0: f64, net_i: f64, name: &str, rate: &str) -> Result<f64> {
        if net_i == 0.0 {
            return Err(ComptonlabError::DivisionByZero {
                quantity: format!("{} - r_background", rate),
            });
        }

        let t = net0 / net_i;
        if t <= 0.0 {
            return Err(ComptonlabError::DomainError {
                quantity: format!("transmission {}", name),
                value: t,
                reason: "logarithm requires a positive argument".to_string(),
            });
        }

        let log_t = t.ln();
        if log_t <= 0.0 {
            return Err(ComptonlabError::DomainError {
                quantity: format!("ln({})", name),
                value: log_t,
                reason: "fractional power requires a positive base; the filter must attenuate \
                         the beam (T > 1)"
                    .to_string(),
            });
        }

        Ok(log_t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    /// 实验第一组数据（θ = 143.8°, Δt = 300 s）
    fn session_one() -> Measurement {
        Measurement {
            theta: 143.8_f64.to_radians(),
            accelerating_voltage: Some(21.0),
            beam_current: Some(1.0),
            delta_t: 300.0,
            r0: 19.16,
            r1: 2.497,
            r2: 1.487,
            r_background: 0.300,
        }
    }

    /// 实验第二组数据（θ = 143.5°, Δt = 600 s）
    fn session_two() -> Measurement {
        Measurement {
            theta: 143.5_f64.to_radians(),
            accelerating_voltage: Some(21.0),
            beam_current: Some(1.0),
            delta_t: 600.0,
            r0: 18.15,
            r1: 2.223,
            r2: 1.613,
            r_background: 0.300,
        }
    }

    fn assert_close(actual: f64, expected: f64, rel_tol: f64) {
        let rel = (actual - expected).abs() / expected.abs();
        assert!(
            rel < rel_tol,
            "expected {:.6e}, got {:.6e} (rel. deviation {:.2e})",
            expected,
            actual,
            rel
        );
    }

    #[test]
    fn test_theoretical_shift_forward_scattering() {
        let calc = ComptonCalculator::with_defaults();
        assert_eq!(calc.theoretical_shift(0.0), 0.0);
    }

    #[test]
    fn test_theoretical_shift_backscattering() {
        // θ = π 时达到最大偏移 2h/(mₑc)
        let calc = ComptonCalculator::with_defaults();
        assert_close(calc.theoretical_shift(PI), 4.85262e-12, 1e-4);
    }

    #[test]
    fn test_session_one() {
        let calc = ComptonCalculator::with_defaults();
        let m = session_one();

        assert_close(calc.theoretical_shift(m.theta), 4.384e-12, 1e-3);
        assert_close(calc.experimental_shift(&m).unwrap(), 6.06e-12, 2e-3);
        assert_close(calc.experimental_error(&m).unwrap(), 0.705e-12, 2e-3);
    }

    #[test]
    fn test_session_two() {
        let calc = ComptonCalculator::with_defaults();
        let m = session_two();

        assert_close(calc.theoretical_shift(m.theta), 4.377e-12, 1e-3);
        assert_close(calc.experimental_shift(&m).unwrap(), 3.79e-12, 2e-3);
        assert_close(calc.experimental_error(&m).unwrap(), 0.500e-12, 2e-3);
    }

    #[test]
    fn test_analyze_is_pure() {
        // 同一测量两次分析必须逐位相同
        let calc = ComptonCalculator::with_defaults();
        let m = session_one();

        let a = calc.analyze("run1", &m).unwrap();
        let b = calc.analyze("run1", &m).unwrap();

        assert_eq!(a.theoretical_shift.to_bits(), b.theoretical_shift.to_bits());
        assert_eq!(
            a.experimental_shift.to_bits(),
            b.experimental_shift.to_bits()
        );
        assert_eq!(
            a.experimental_error.to_bits(),
            b.experimental_error.to_bits()
        );
    }

    #[test]
    fn test_error_scales_with_exposure_time() {
        // Δt 加倍，误差缩小 1/√2
        let calc = ComptonCalculator::with_defaults();
        let m = session_one();
        let mut doubled = m;
        doubled.delta_t *= 2.0;

        let e1 = calc.experimental_error(&m).unwrap();
        let e2 = calc.experimental_error(&doubled).unwrap();

        assert!(e2 < e1);
        assert_close(e2, e1 / 2.0_f64.sqrt(), 1e-12);
    }

    #[test]
    fn test_rate_equal_to_background_is_division_by_zero() {
        let calc = ComptonCalculator::with_defaults();
        let mut m = session_one();
        m.r1 = m.r_background;

        match calc.experimental_shift(&m) {
            Err(ComptonlabError::DivisionByZero { quantity }) => {
                assert!(quantity.contains("r1"));
            }
            other => panic!("expected DivisionByZero, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_negative_transmission_is_domain_error() {
        // R₁ 高于 R₀ 且本底夹在中间时 T₁ < 0
        let calc = ComptonCalculator::with_defaults();
        let mut m = session_one();
        m.r1 = 30.0;
        m.r_background = 25.0;

        assert!(matches!(
            calc.experimental_shift(&m),
            Err(ComptonlabError::DomainError { .. })
        ));
    }

    #[test]
    fn test_non_attenuating_filter_is_domain_error() {
        // T₁ ∈ (0, 1] 时 ln T₁ ≤ 0，分数幂无实数值
        let calc = ComptonCalculator::with_defaults();
        let mut m = session_one();
        m.r1 = m.r0;

        assert!(matches!(
            calc.experimental_shift(&m),
            Err(ComptonlabError::DomainError { .. })
        ));
    }

    #[test]
    fn test_non_positive_exposure_time_is_rejected() {
        let calc = ComptonCalculator::with_defaults();
        let mut m = session_one();
        m.delta_t = 0.0;

        assert!(matches!(
            calc.experimental_error(&m),
            Err(ComptonlabError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_custom_calibration_scales_shift() {
        // λ₀ 加倍时实验偏移线性加倍
        let m = session_one();
        let default_calc = ComptonCalculator::with_defaults();
        let doubled_calc = ComptonCalculator::new(Calibration {
            lambda0: 200.0e-12,
            ..Calibration::default()
        });

        let s1 = default_calc.experimental_shift(&m).unwrap();
        let s2 = doubled_calc.experimental_shift(&m).unwrap();
        assert_close(s2, 2.0 * s1, 1e-12);
    }
}
