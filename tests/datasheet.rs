use hydrogen_cooler_tool::cooler::{
    datasheet_rows, render_datasheet, CoolerInput, CoolerResult, DATASHEET_FILE_NAME,
};

fn sample_result() -> CoolerResult {
    CoolerResult {
        heat_duty_w: 131_083.33,
        cooling_water_flow_kg_per_s: 6.27,
        overall_u_w_per_m2k: 373.5,
        required_area_m2: 24.52,
        total_tubes: 96,
        shell_diameter_m: 0.338,
        tube_velocity_m_per_s: 8.84,
    }
}

#[test]
fn rows_follow_display_formatting() {
    let rows = datasheet_rows(&CoolerInput::default(), &sample_result());
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0].0, "Hydrogen Flow (Nm3/hr)");
    assert_eq!(rows[0].1, "750.0");
    assert_eq!(rows[1].1, "131.08"); // kW, 소수 둘째 자리
    assert_eq!(rows[5].1, "96"); // 튜브 수는 정수 그대로
    assert_eq!(rows[6].1, "0.34");
}

#[test]
fn rendered_datasheet_is_a_pdf() {
    let rows = datasheet_rows(&CoolerInput::default(), &sample_result());
    let bytes = render_datasheet(&rows).expect("render");
    assert!(bytes.starts_with(b"%PDF"), "missing PDF magic");
    assert!(bytes.len() > 1_000, "suspiciously small: {} bytes", bytes.len());
}

#[test]
fn default_file_name_matches_download_convention() {
    assert_eq!(DATASHEET_FILE_NAME, "Hydrogen_Gas_Cooler_Datasheet.pdf");
}
