use hydrogen_cooler_tool::cooler::{size, CoolerInput, DesignConstants, SizingError, TubePasses};
use hydrogen_cooler_tool::fluids::{Fluid, Property, PropertyError, PropertyProvider};

/// 상태점과 무관하게 고정 물성을 돌려주는 스텁. 결정론적 검증용.
struct StubProps;

impl PropertyProvider for StubProps {
    fn property(
        &self,
        fluid: Fluid,
        property: Property,
        _t_k: f64,
        _p_pa: f64,
    ) -> Result<f64, PropertyError> {
        Ok(match (fluid, property) {
            (Fluid::Hydrogen, Property::Density) => 1.1,
            (Fluid::Hydrogen, Property::SpecificHeat) => 14_300.0,
            (Fluid::Hydrogen, Property::DynamicViscosity) => 1.0e-5,
            (Fluid::Hydrogen, Property::ThermalConductivity) => 0.20,
            (Fluid::Hydrogen, Property::Prandtl) => 0.72,
            (Fluid::Water, Property::SpecificHeat) => 4_180.0,
            (Fluid::Water, _) => 1_000.0,
        })
    }
}

fn reference_input() -> CoolerInput {
    CoolerInput::default()
}

#[test]
fn reference_case_with_stub_properties() {
    let res = size(&reference_input(), &DesignConstants::default(), &StubProps)
        .expect("reference case");

    // Q = rho * V_dot * cp * dT = 1.1 * (750/3600) * 14300 * 40
    assert!((res.heat_duty_w - 131_083.33).abs() < 1.0, "Q={}", res.heat_duty_w);
    assert!(res.total_tubes % 2 == 0, "two passes => even tube count");
    assert_eq!(res.total_tubes, 96);
    assert!((res.shell_diameter_m - 0.338).abs() < 0.005);
    assert!(res.overall_u_w_per_m2k > 300.0 && res.overall_u_w_per_m2k < 450.0);
    assert!(res.required_area_m2 > 20.0 && res.required_area_m2 < 30.0);
}

#[test]
fn sizing_is_deterministic() {
    let input = reference_input();
    let constants = DesignConstants::default();
    let a = size(&input, &constants, &StubProps).expect("first run");
    let b = size(&input, &constants, &StubProps).expect("second run");
    assert_eq!(a, b);
}

#[test]
fn tube_count_rounds_up_so_velocity_stays_below_target() {
    let input = reference_input();
    let res = size(&input, &DesignConstants::default(), &StubProps).expect("sizing");
    assert!(res.tube_velocity_m_per_s <= input.target_velocity_m_per_s + 1e-12);
    assert_eq!(res.total_tubes % input.passes.count(), 0);
}

#[test]
fn auto_water_flow_closes_the_heat_balance() {
    let input = reference_input();
    assert!(input.cooling_water_flow_kg_per_s.is_none());
    let res = size(&input, &DesignConstants::default(), &StubProps).expect("sizing");
    let cp_water = 4_180.0;
    let delta_t = input.t_cold_out_c - input.t_cold_in_c;
    let rebuilt = res.cooling_water_flow_kg_per_s * cp_water * delta_t;
    assert!(
        (rebuilt - res.heat_duty_w).abs() / res.heat_duty_w < 1e-12,
        "water side {rebuilt} vs duty {}",
        res.heat_duty_w
    );
}

#[test]
fn manual_water_flow_is_passed_through() {
    let mut input = reference_input();
    input.cooling_water_flow_kg_per_s = Some(7.0);
    let res = size(&input, &DesignConstants::default(), &StubProps).expect("sizing");
    assert_eq!(res.cooling_water_flow_kg_per_s, 7.0);
}

#[test]
fn single_pass_skips_the_correction_factor() {
    let constants = DesignConstants::default();
    let mut one = reference_input();
    one.passes = TubePasses::One;
    let mut two = reference_input();
    two.passes = TubePasses::Two;

    let res_one = size(&one, &constants, &StubProps).expect("one pass");
    let res_two = size(&two, &constants, &StubProps).expect("two passes");

    // 패스 수는 패스당 본수와 유속을 바꾸지 않으므로 U가 같고,
    // 면적 비는 정확히 F(=0.85) 비가 된다.
    assert_eq!(res_one.overall_u_w_per_m2k, res_two.overall_u_w_per_m2k);
    assert!(
        (res_two.required_area_m2 * constants.multi_pass_correction - res_one.required_area_m2)
            .abs()
            < 1e-9
    );
    assert_eq!(res_two.total_tubes, 2 * res_one.total_tubes);
}

#[test]
fn temperature_cross_is_rejected() {
    let mut input = reference_input();
    input.t_cold_out_c = 85.0; // 냉각수 출구가 수소 입구보다 뜨거움
    let err = size(&input, &DesignConstants::default(), &StubProps).unwrap_err();
    assert!(matches!(err, SizingError::TemperatureCross { .. }), "{err:?}");
}

#[test]
fn temperature_cross_at_the_cold_end_is_rejected() {
    let mut input = reference_input();
    input.t_hot_out_c = 30.0; // 수소 출구가 냉각수 입구(35 °C)보다 차가움 → dT2 < 0
    let err = size(&input, &DesignConstants::default(), &StubProps).unwrap_err();
    assert!(
        matches!(err, SizingError::TemperatureCross { delta_t2_k, .. } if delta_t2_k <= 0.0),
        "{err:?}"
    );
}

#[test]
fn equal_terminal_differences_are_rejected() {
    let mut input = reference_input();
    // dT1 = 80-70 = 10, dT2 = 60-50 = 10
    input.t_hot_in_c = 80.0;
    input.t_hot_out_c = 60.0;
    input.t_cold_in_c = 50.0;
    input.t_cold_out_c = 70.0;
    let err = size(&input, &DesignConstants::default(), &StubProps).unwrap_err();
    assert!(matches!(err, SizingError::DegenerateLmtd), "{err:?}");
}

#[test]
fn zero_water_delta_t_is_rejected_in_auto_mode() {
    let mut input = reference_input();
    input.t_cold_out_c = input.t_cold_in_c;
    let err = size(&input, &DesignConstants::default(), &StubProps).unwrap_err();
    assert!(matches!(err, SizingError::WaterSideZeroDeltaT), "{err:?}");
}

#[test]
fn non_positive_inputs_are_rejected() {
    let constants = DesignConstants::default();
    for mutate in [
        (|i: &mut CoolerInput| i.flow_hot_nm3_per_hr = 0.0) as fn(&mut CoolerInput),
        |i| i.tube_inner_diameter_m = -0.01,
        |i| i.target_velocity_m_per_s = 0.0,
    ] {
        let mut input = reference_input();
        mutate(&mut input);
        let err = size(&input, &constants, &StubProps).unwrap_err();
        assert!(matches!(err, SizingError::InvalidInput(_)), "{err:?}");
    }
}

#[test]
fn constants_override_changes_the_result() {
    let input = reference_input();
    let base = size(&input, &DesignConstants::default(), &StubProps).expect("base");
    let constants = DesignConstants {
        shell_side_h_w_per_m2k: 6_000.0,
        ..DesignConstants::default()
    };
    let improved = size(&input, &constants, &StubProps).expect("improved");
    assert!(improved.overall_u_w_per_m2k > base.overall_u_w_per_m2k);
    assert!(improved.required_area_m2 < base.required_area_m2);
}
