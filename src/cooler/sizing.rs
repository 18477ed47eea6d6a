//! 수소 가스쿨러 사이징 엔진.
//!
//! 순수 함수로 구성되어 있으며 물성 조회는 [`PropertyProvider`] 트레이트를 통해서만
//! 이루어진다. 덕분에 테스트에서는 고정 물성 스텁으로 결정론적 검증이 가능하다.

use serde::Deserialize;
use std::f64::consts::PI;

use crate::conversion::{bar_to_pascal_abs, celsius_to_kelvin, PressureMode};
use crate::fluids::{transport_properties, Fluid, Property, PropertyError, PropertyProvider};

use super::constants::DesignConstants;

/// 튜브 패스 수. 1/2/4 패스만 지원한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TubePasses {
    One,
    Two,
    Four,
}

impl TubePasses {
    pub fn count(&self) -> u32 {
        match self {
            TubePasses::One => 1,
            TubePasses::Two => 2,
            TubePasses::Four => 4,
        }
    }

    pub fn from_count(n: u32) -> Option<Self> {
        match n {
            1 => Some(TubePasses::One),
            2 => Some(TubePasses::Two),
            4 => Some(TubePasses::Four),
            _ => None,
        }
    }
}

/// 사이징 입력값. 단위는 필드명에 표기된 현장 단위 그대로 받는다.
///
/// 필드 간 정합성(출구>입구 등)은 사전 검증하지 않는다. 모순된 입력은
/// 계산 단계에서 [`SizingError`]로 드러난다.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoolerInput {
    /// 수소 유량 [Nm³/hr]
    pub flow_hot_nm3_per_hr: f64,
    /// 수소 입구 온도 [°C]
    pub t_hot_in_c: f64,
    /// 수소 출구 온도 [°C]
    pub t_hot_out_c: f64,
    /// 수소 압력 [bar, 절대]
    pub p_hot_bar: f64,
    /// 냉각수 입구 온도 [°C]
    pub t_cold_in_c: f64,
    /// 냉각수 출구 온도 [°C]
    pub t_cold_out_c: f64,
    /// 냉각수 압력 [bar, 절대]
    pub p_cold_bar: f64,
    /// 냉각수 질량유량 [kg/s]. `None`이면 열수지로 자동 계산한다.
    pub cooling_water_flow_kg_per_s: Option<f64>,
    /// 튜브 내경 [m]
    pub tube_inner_diameter_m: f64,
    /// 튜브 벽 두께 [m]
    pub tube_wall_thickness_m: f64,
    /// 설계 튜브 유속 [m/s]
    pub target_velocity_m_per_s: f64,
    /// 튜브 패스 수
    pub passes: TubePasses,
}

impl Default for CoolerInput {
    /// 전해조 BOP 예시 케이스 기본값.
    fn default() -> Self {
        Self {
            flow_hot_nm3_per_hr: 750.0,
            t_hot_in_c: 80.0,
            t_hot_out_c: 40.0,
            p_hot_bar: 16.0,
            t_cold_in_c: 35.0,
            t_cold_out_c: 40.0,
            p_cold_bar: 3.0,
            cooling_water_flow_kg_per_s: None,
            tube_inner_diameter_m: 0.025,
            tube_wall_thickness_m: 0.002,
            target_velocity_m_per_s: 9.0,
            passes: TubePasses::Two,
        }
    }
}

/// 사이징 결과. 계산이 끝나면 갱신되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolerResult {
    /// 열부하 [W]
    pub heat_duty_w: f64,
    /// 냉각수 질량유량 [kg/s]
    pub cooling_water_flow_kg_per_s: f64,
    /// 총괄 전열계수 U [W/m²·K]
    pub overall_u_w_per_m2k: f64,
    /// 필요 전열면적 [m²]
    pub required_area_m2: f64,
    /// 총 튜브 수
    pub total_tubes: u32,
    /// 쉘 내경 [m]
    pub shell_diameter_m: f64,
    /// 라운딩 후 실제 튜브 유속 [m/s]
    pub tube_velocity_m_per_s: f64,
}

/// 사이징 중 발생 가능한 오류.
///
/// 입력/물리적 모순(`InvalidInput`, `WaterSideZeroDeltaT`, `TemperatureCross`,
/// `DegenerateLmtd`)과 내부 계산 이상(`NonFinite`), 물성 백엔드 실패(`Property`)를
/// 구분한다.
#[derive(Debug, Clone)]
pub enum SizingError {
    /// 계산이 정의되지 않는 입력값
    InvalidInput(&'static str),
    /// 냉각수 입·출구 온도가 같아 열수지로 유량을 구할 수 없음
    WaterSideZeroDeltaT,
    /// 온도 교차: 향류 LMTD의 ΔT가 0 이하
    TemperatureCross { delta_t1_k: f64, delta_t2_k: f64 },
    /// ΔT1 == ΔT2 이라 로그 항이 퇴화함
    DegenerateLmtd,
    /// 물성 조회 실패
    Property(PropertyError),
    /// 계산 결과가 유한하지 않음 (내부 계산 이상)
    NonFinite(&'static str),
}

impl std::fmt::Display for SizingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizingError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
            SizingError::WaterSideZeroDeltaT => {
                write!(f, "냉각수 입구/출구 온도가 같아 유량을 계산할 수 없습니다.")
            }
            SizingError::TemperatureCross {
                delta_t1_k,
                delta_t2_k,
            } => write!(
                f,
                "온도 교차로 LMTD를 계산할 수 없습니다 (ΔT1={delta_t1_k:.2} K, ΔT2={delta_t2_k:.2} K)."
            ),
            SizingError::DegenerateLmtd => {
                write!(f, "ΔT1과 ΔT2가 같아 LMTD 로그 항이 정의되지 않습니다.")
            }
            SizingError::Property(e) => write!(f, "물성 조회 오류: {e}"),
            SizingError::NonFinite(what) => {
                write!(f, "계산 결과가 유한하지 않습니다: {what}")
            }
        }
    }
}

impl std::error::Error for SizingError {}

impl From<PropertyError> for SizingError {
    fn from(value: PropertyError) -> Self {
        SizingError::Property(value)
    }
}

/// 쉘&튜브 수소 가스쿨러를 사이징한다.
///
/// 계산 순서: 단위 환산 → 수소 물성 → 열부하/냉각수 열수지 → 튜브 본수(올림)
/// → Dittus-Boelter 관내 막계수 → 총괄 U → 향류 LMTD → 필요 면적 → 쉘 내경.
/// 튜브 본수는 항상 올림 처리하므로 실제 유속은 목표 유속 이하가 된다.
pub fn size(
    input: &CoolerInput,
    constants: &DesignConstants,
    props: &dyn PropertyProvider,
) -> Result<CoolerResult, SizingError> {
    if input.flow_hot_nm3_per_hr <= 0.0 {
        return Err(SizingError::InvalidInput("수소 유량은 0보다 커야 합니다."));
    }
    if input.tube_inner_diameter_m <= 0.0 {
        return Err(SizingError::InvalidInput("튜브 내경은 0보다 커야 합니다."));
    }
    if input.target_velocity_m_per_s <= 0.0 {
        return Err(SizingError::InvalidInput("설계 유속은 0보다 커야 합니다."));
    }

    // 단위 환산 (°C→K, bar→Pa, Nm³/hr→m³/s)
    let t_hot_in_k = celsius_to_kelvin(input.t_hot_in_c);
    let t_hot_out_k = celsius_to_kelvin(input.t_hot_out_c);
    let t_cold_in_k = celsius_to_kelvin(input.t_cold_in_c);
    let t_cold_out_k = celsius_to_kelvin(input.t_cold_out_c);
    let p_hot_pa = bar_to_pascal_abs(input.p_hot_bar, PressureMode::Absolute);
    let p_cold_pa = bar_to_pascal_abs(input.p_cold_bar, PressureMode::Absolute);
    let flow_m3_per_s = crate::conversion::nm3_per_hr_to_m3_per_s(input.flow_hot_nm3_per_hr);

    // 수소 물성은 입구 상태점 기준
    let h2 = transport_properties(props, Fluid::Hydrogen, t_hot_in_k, p_hot_pa)?;

    let mass_flow_kg_per_s = h2.density_kg_per_m3 * flow_m3_per_s;
    let heat_duty_w =
        mass_flow_kg_per_s * h2.specific_heat_j_per_kg_k * (t_hot_in_k - t_hot_out_k);

    // 냉각수 유량: 직접 입력이 없으면 열수지에서 역산
    let cooling_water_flow_kg_per_s = match input.cooling_water_flow_kg_per_s {
        Some(flow) => flow,
        None => {
            let cp_water =
                props.property(Fluid::Water, Property::SpecificHeat, t_cold_in_k, p_cold_pa)?;
            let delta_t = t_cold_out_k - t_cold_in_k;
            if delta_t == 0.0 {
                return Err(SizingError::WaterSideZeroDeltaT);
            }
            heat_duty_w / (cp_water * delta_t)
        }
    };

    // 튜브 본수: 목표 유속을 넘지 않도록 항상 올림
    let d_i = input.tube_inner_diameter_m;
    let single_tube_area_m2 = PI * d_i * d_i / 4.0;
    let raw_tubes = mass_flow_kg_per_s
        / (h2.density_kg_per_m3 * input.target_velocity_m_per_s * single_tube_area_m2);
    let tubes_per_pass = raw_tubes.ceil() as u32;
    if tubes_per_pass == 0 {
        return Err(SizingError::InvalidInput(
            "튜브 본수가 0으로 계산되었습니다. 유량/유속 입력을 확인하세요.",
        ));
    }
    let total_tubes = tubes_per_pass * input.passes.count();
    let tube_velocity_m_per_s = mass_flow_kg_per_s
        / (h2.density_kg_per_m3 * tubes_per_pass as f64 * single_tube_area_m2);

    // 관내측 막계수: Dittus-Boelter (Pr 지수 0.4 고정 — 원 설계식 그대로)
    let reynolds = h2.density_kg_per_m3 * tube_velocity_m_per_s * d_i / h2.viscosity_pa_s;
    let nusselt = 0.023 * reynolds.powf(0.8) * h2.prandtl.powf(0.4);
    let h_hot = nusselt * h2.conductivity_w_per_m_k / d_i;

    // 총괄 전열계수: 쉘측 막계수/파울링은 설계 상수 사용
    let overall_u_w_per_m2k = 1.0
        / (1.0 / h_hot
            + constants.fouling_inside_m2k_per_w
            + input.tube_wall_thickness_m / constants.tube_conductivity_w_per_mk
            + 1.0 / constants.shell_side_h_w_per_m2k
            + constants.fouling_outside_m2k_per_w);

    // 향류 LMTD
    let delta_t1_k = t_hot_in_k - t_cold_out_k;
    let delta_t2_k = t_hot_out_k - t_cold_in_k;
    if delta_t1_k <= 0.0 || delta_t2_k <= 0.0 {
        return Err(SizingError::TemperatureCross {
            delta_t1_k,
            delta_t2_k,
        });
    }
    if delta_t1_k == delta_t2_k {
        return Err(SizingError::DegenerateLmtd);
    }
    let lmtd_k = (delta_t1_k - delta_t2_k) / (delta_t1_k / delta_t2_k).ln();

    let correction_f = match input.passes {
        TubePasses::One => 1.0,
        TubePasses::Two | TubePasses::Four => constants.multi_pass_correction,
    };
    let required_area_m2 = heat_duty_w / (overall_u_w_per_m2k * correction_f * lmtd_k);

    // 쉘 내경: 튜브 배열 충전 근사 (실제 배치 계산 아님)
    let d_outer_m = d_i + 2.0 * input.tube_wall_thickness_m;
    let shell_diameter_m = d_outer_m
        * (total_tubes as f64 / (0.785 * constants.tube_layout_constant)).sqrt();

    let result = CoolerResult {
        heat_duty_w,
        cooling_water_flow_kg_per_s,
        overall_u_w_per_m2k,
        required_area_m2,
        total_tubes,
        shell_diameter_m,
        tube_velocity_m_per_s,
    };

    if !result.heat_duty_w.is_finite()
        || !result.cooling_water_flow_kg_per_s.is_finite()
        || !result.overall_u_w_per_m2k.is_finite()
        || !result.required_area_m2.is_finite()
        || !result.shell_diameter_m.is_finite()
        || !result.tube_velocity_m_per_s.is_finite()
    {
        return Err(SizingError::NonFinite("사이징 결과"));
    }
    Ok(result)
}
