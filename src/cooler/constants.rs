use serde::{Deserialize, Serialize};

/// 사이징에 사용하는 고정 설계 상수.
///
/// 쉘측 막계수와 파울링 저항은 실제 쉘 형상으로부터 계산한 값이 아니라
/// 예비 설계용 대표값이다. config.toml의 `[constants]` 테이블로 덮어쓸 수 있다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConstants {
    /// 쉘측 막계수 [W/m²·K]
    pub shell_side_h_w_per_m2k: f64,
    /// 튜브 내면 파울링 저항 [m²K/W]
    pub fouling_inside_m2k_per_w: f64,
    /// 튜브 외면 파울링 저항 [m²K/W]
    pub fouling_outside_m2k_per_w: f64,
    /// 튜브 재질 열전도율 [W/m·K] (스테인리스 기준)
    pub tube_conductivity_w_per_mk: f64,
    /// 다중 패스 LMTD 보정계수 F
    pub multi_pass_correction: f64,
    /// 튜브 배열 충전 상수 K (쉘 내경 근사용)
    pub tube_layout_constant: f64,
}

impl Default for DesignConstants {
    fn default() -> Self {
        Self {
            shell_side_h_w_per_m2k: 3000.0,
            fouling_inside_m2k_per_w: 0.0001,
            fouling_outside_m2k_per_w: 0.0002,
            tube_conductivity_w_per_mk: 16.0,
            multi_pass_correction: 0.85,
            tube_layout_constant: 0.9,
        }
    }
}
