//! 유체 물성 조회 계약.
//! 사이징 엔진은 이 모듈의 트레이트만 사용하므로 테스트에서는 고정값 스텁으로 대체할 수 있다.

pub mod coolprop;

pub use coolprop::CoolProp;

/// 지원하는 유체 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fluid {
    Hydrogen,
    Water,
}

impl Fluid {
    pub fn name(&self) -> &'static str {
        match self {
            Fluid::Hydrogen => "Hydrogen",
            Fluid::Water => "Water",
        }
    }
}

/// 조회 가능한 물성 코드.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    /// 밀도 [kg/m³]
    Density,
    /// 정압비열 [J/kg·K]
    SpecificHeat,
    /// 동점도 [Pa·s]
    DynamicViscosity,
    /// 열전도율 [W/m·K]
    ThermalConductivity,
    /// 프란틀수 [-]
    Prandtl,
}

/// 물성 조회 중 발생 가능한 오류.
#[derive(Debug, Clone)]
pub enum PropertyError {
    /// 백엔드(CoolProp) 호출 실패. 유효 범위 밖의 상태점 포함.
    Backend(String),
    /// 백엔드가 NaN/무한대를 반환한 경우
    NonFinite {
        fluid: &'static str,
        property: &'static str,
    },
}

impl std::fmt::Display for PropertyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyError::Backend(msg) => write!(f, "물성 조회 실패: {msg}"),
            PropertyError::NonFinite { fluid, property } => {
                write!(f, "물성값이 유한하지 않음: {fluid}/{property}")
            }
        }
    }
}

impl std::error::Error for PropertyError {}

impl Property {
    pub fn label(&self) -> &'static str {
        match self {
            Property::Density => "density",
            Property::SpecificHeat => "specific_heat",
            Property::DynamicViscosity => "viscosity",
            Property::ThermalConductivity => "conductivity",
            Property::Prandtl => "prandtl",
        }
    }
}

/// 온도[K]·압력[Pa] 상태점에서 물성 하나를 조회한다.
pub trait PropertyProvider {
    fn property(
        &self,
        fluid: Fluid,
        property: Property,
        t_k: f64,
        p_pa: f64,
    ) -> Result<f64, PropertyError>;
}

/// 수소측 열전달 계산에 필요한 물성 묶음.
#[derive(Debug, Clone, Copy)]
pub struct TransportProperties {
    pub density_kg_per_m3: f64,
    pub specific_heat_j_per_kg_k: f64,
    pub viscosity_pa_s: f64,
    pub conductivity_w_per_m_k: f64,
    pub prandtl: f64,
}

/// 한 상태점에서 다섯 가지 물성을 한번에 조회한다.
pub fn transport_properties(
    provider: &dyn PropertyProvider,
    fluid: Fluid,
    t_k: f64,
    p_pa: f64,
) -> Result<TransportProperties, PropertyError> {
    Ok(TransportProperties {
        density_kg_per_m3: provider.property(fluid, Property::Density, t_k, p_pa)?,
        specific_heat_j_per_kg_k: provider.property(fluid, Property::SpecificHeat, t_k, p_pa)?,
        viscosity_pa_s: provider.property(fluid, Property::DynamicViscosity, t_k, p_pa)?,
        conductivity_w_per_m_k: provider.property(fluid, Property::ThermalConductivity, t_k, p_pa)?,
        prandtl: provider.property(fluid, Property::Prandtl, t_k, p_pa)?,
    })
}
