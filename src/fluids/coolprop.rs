//! CoolProp(rfluids) 백엔드 물성 공급자.
//! 입력: 온도[K], 압력[Pa, 절대]. 출력은 SI 단위 그대로 반환한다.

use rfluids::prelude::*;

use super::{Fluid as FluidKind, Property, PropertyError, PropertyProvider};

/// rfluids 기반 물성 공급자. 상태를 갖지 않으므로 호출마다 새로 생성해도 된다.
#[derive(Debug, Default, Clone, Copy)]
pub struct CoolProp;

impl CoolProp {
    pub fn new() -> Self {
        Self
    }

    fn pure(fluid: FluidKind) -> Pure {
        match fluid {
            FluidKind::Hydrogen => Pure::Hydrogen,
            FluidKind::Water => Pure::Water,
        }
    }

    fn fluid_at_pt(fluid: FluidKind, t_k: f64, p_pa: f64) -> Result<Fluid, PropertyError> {
        Fluid::from(Self::pure(fluid))
            .in_state(FluidInput::pressure(p_pa), FluidInput::temperature(t_k))
            .map_err(|e| {
                PropertyError::Backend(format!(
                    "{} @ T={t_k} K, P={p_pa} Pa: {e}",
                    fluid.name()
                ))
            })
    }
}

impl PropertyProvider for CoolProp {
    fn property(
        &self,
        fluid: FluidKind,
        property: Property,
        t_k: f64,
        p_pa: f64,
    ) -> Result<f64, PropertyError> {
        let mut state = Self::fluid_at_pt(fluid, t_k, p_pa)?;
        let value = match property {
            Property::Density => state.density(),
            Property::SpecificHeat => state.specific_heat(),
            Property::DynamicViscosity => state.dynamic_viscosity(),
            Property::ThermalConductivity => state.conductivity(),
            Property::Prandtl => state.prandtl(),
        }
        .map_err(|e| {
            PropertyError::Backend(format!(
                "{}/{} @ T={t_k} K, P={p_pa} Pa: {e}",
                fluid.name(),
                property.label()
            ))
        })?;

        if !value.is_finite() {
            return Err(PropertyError::NonFinite {
                fluid: fluid.name(),
                property: property.label(),
            });
        }
        Ok(value)
    }
}
