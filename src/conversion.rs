//! 계산 체인에서 사용하는 단위 환산 모음.
//! 내부 계산 기준은 SI(K, Pa, m, kg, s)이며 입력 UI는 °C/bar/Nm³·h 단위를 쓴다.

/// 게이지/절대 모드를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureMode {
    Gauge,
    Absolute,
}

const ATM_BAR: f64 = 1.01325;
const PA_PER_BAR: f64 = 100_000.0;

/// 섭씨를 켈빈으로 변환한다.
pub fn celsius_to_kelvin(t_c: f64) -> f64 {
    t_c + 273.15
}

/// 켈빈을 섭씨로 변환한다.
pub fn kelvin_to_celsius(t_k: f64) -> f64 {
    t_k - 273.15
}

/// bar를 Pa로 변환한다. 모드가 게이지이면 대기압을 더해 절대 기준으로 환산한다.
pub fn bar_to_pascal_abs(p_bar: f64, mode: PressureMode) -> f64 {
    let bar_abs = match mode {
        PressureMode::Absolute => p_bar,
        PressureMode::Gauge => p_bar + ATM_BAR,
    };
    bar_abs * PA_PER_BAR
}

/// Pa(절대)를 bar(절대)로 변환한다.
pub fn pascal_to_bar_abs(p_pa: f64) -> f64 {
    p_pa / PA_PER_BAR
}

/// Nm³/hr 체적유량을 m³/s로 변환한다.
///
/// 노멀 조건과 입구 조건의 밀도 차이는 원 설계식 그대로 무시한다
/// (예비 설계용 단순화, config 문서 참고).
pub fn nm3_per_hr_to_m3_per_s(flow_nm3_hr: f64) -> f64 {
    flow_nm3_hr / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_kelvin_roundtrip() {
        assert!((celsius_to_kelvin(80.0) - 353.15).abs() < 1e-12);
        assert!((kelvin_to_celsius(353.15) - 80.0).abs() < 1e-12);
    }

    #[test]
    fn bar_to_pascal_modes() {
        assert!((bar_to_pascal_abs(16.0, PressureMode::Absolute) - 1.6e6).abs() < 1e-9);
        let gauge = bar_to_pascal_abs(0.0, PressureMode::Gauge);
        assert!((gauge - 101_325.0).abs() < 1e-6);
    }

    #[test]
    fn nm3_flow_to_m3s() {
        assert!((nm3_per_hr_to_m3_per_s(750.0) - 750.0 / 3600.0).abs() < 1e-15);
    }
}
