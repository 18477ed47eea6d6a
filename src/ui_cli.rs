use std::io::{self, Write};
use std::path::Path;

use crate::app::AppError;
use crate::config::Config;
use crate::cooler::{datasheet_rows, render_datasheet, size, CoolerInput, CoolerResult, TubePasses};
use crate::feedback::{self, FEEDBACK_FILE_NAME};
use crate::fluids::CoolProp;
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Sizing,
    Feedback,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_SIZING));
    println!("{}", tr.t(keys::MAIN_MENU_FEEDBACK));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Sizing),
            "2" => return Ok(MenuChoice::Feedback),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 사이징 메뉴를 처리한다. 입력을 받아 계산하고 결과와 PDF 저장을 안내한다.
pub fn handle_sizing(tr: &Translator, config: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SIZING_HEADING));
    println!("{}", tr.t(keys::SIZING_NOTE_DEFAULTS));

    let defaults = CoolerInput::default();
    let flow = read_f64_default(tr, tr.t(keys::PROMPT_H2_FLOW), defaults.flow_hot_nm3_per_hr)?;
    let t_hot_in = read_f64_default(tr, tr.t(keys::PROMPT_T_HOT_IN), defaults.t_hot_in_c)?;
    let t_hot_out = read_f64_default(tr, tr.t(keys::PROMPT_T_HOT_OUT), defaults.t_hot_out_c)?;
    let p_hot = read_f64_default(tr, tr.t(keys::PROMPT_P_HOT), defaults.p_hot_bar)?;
    let t_cold_in = read_f64_default(tr, tr.t(keys::PROMPT_T_COLD_IN), defaults.t_cold_in_c)?;
    let t_cold_out = read_f64_default(tr, tr.t(keys::PROMPT_T_COLD_OUT), defaults.t_cold_out_c)?;
    let p_cold = read_f64_default(tr, tr.t(keys::PROMPT_P_COLD), defaults.p_cold_bar)?;

    let auto_water = {
        let ans = read_line(tr.t(keys::PROMPT_AUTO_WATER))?;
        !ans.trim().eq_ignore_ascii_case("n")
    };
    let water_flow = if auto_water {
        None
    } else {
        Some(read_f64_default(tr, tr.t(keys::PROMPT_WATER_FLOW), 7.0)?)
    };

    let tube_id = read_f64_default(tr, tr.t(keys::PROMPT_TUBE_ID), defaults.tube_inner_diameter_m)?;
    let wall = read_f64_default(
        tr,
        tr.t(keys::PROMPT_WALL_THICKNESS),
        defaults.tube_wall_thickness_m,
    )?;
    let velocity = read_f64_default(
        tr,
        tr.t(keys::PROMPT_TARGET_VELOCITY),
        defaults.target_velocity_m_per_s,
    )?;
    let passes = loop {
        let s = read_line(&format!("{} (2): ", tr.t(keys::PROMPT_PASSES)))?;
        if let Some(p) = parse_pass_count(&s, 2) {
            break p;
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    };

    let input = CoolerInput {
        flow_hot_nm3_per_hr: flow,
        t_hot_in_c: t_hot_in,
        t_hot_out_c: t_hot_out,
        p_hot_bar: p_hot,
        t_cold_in_c: t_cold_in,
        t_cold_out_c: t_cold_out,
        p_cold_bar: p_cold,
        cooling_water_flow_kg_per_s: water_flow,
        tube_inner_diameter_m: tube_id,
        tube_wall_thickness_m: wall,
        target_velocity_m_per_s: velocity,
        passes,
    };

    let result = size(&input, &config.constants, &CoolProp::new())?;
    print_result(tr, &result);

    let pdf_path = read_line(tr.t(keys::PROMPT_PDF_PATH))?;
    let pdf_path = pdf_path.trim();
    if !pdf_path.is_empty() {
        let bytes = render_datasheet(&datasheet_rows(&input, &result))?;
        std::fs::write(pdf_path, bytes)?;
        println!("{} {pdf_path}", tr.t(keys::PDF_SAVED));
    }
    Ok(())
}

/// 설계 결과를 한 줄씩 출력한다.
pub fn print_result(tr: &Translator, result: &CoolerResult) {
    println!("{}", tr.t(keys::RESULT_HEADING));
    println!(
        "{} {:.2} kW",
        tr.t(keys::RESULT_HEAT_DUTY),
        result.heat_duty_w / 1000.0
    );
    println!(
        "{} {:.2} kg/s",
        tr.t(keys::RESULT_WATER_FLOW),
        result.cooling_water_flow_kg_per_s
    );
    println!(
        "{} {:.1} W/m2-K",
        tr.t(keys::RESULT_OVERALL_U),
        result.overall_u_w_per_m2k
    );
    println!(
        "{} {:.2} m2",
        tr.t(keys::RESULT_AREA),
        result.required_area_m2
    );
    println!("{} {}", tr.t(keys::RESULT_TUBES), result.total_tubes);
    println!(
        "{} {:.2} m",
        tr.t(keys::RESULT_SHELL_DIAMETER),
        result.shell_diameter_m
    );
    println!(
        "{} {:.2} m/s",
        tr.t(keys::RESULT_TUBE_VELOCITY),
        result.tube_velocity_m_per_s
    );
}

/// 피드백 메뉴를 처리한다.
pub fn handle_feedback(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FEEDBACK_HEADING));
    println!("{}", tr.t(keys::FEEDBACK_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
    let path = Path::new(FEEDBACK_FILE_NAME);
    match sel.trim() {
        "1" => {
            let name = read_line(tr.t(keys::PROMPT_FEEDBACK_NAME))?;
            let text = read_line(tr.t(keys::PROMPT_FEEDBACK_TEXT))?;
            feedback::append_feedback(path, name.trim(), text.trim())?;
            println!("{}", tr.t(keys::FEEDBACK_SAVED));
        }
        "2" => {
            let entries = feedback::load_feedback(path)?;
            if entries.is_empty() {
                println!("{}", tr.t(keys::FEEDBACK_EMPTY));
            }
            for entry in entries {
                println!("[{}] {}: {}", entry.timestamp, entry.name, entry.text);
            }
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어만 바꾸며 설계 상수는 config.toml 직접 수정으로 안내한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_CONSTANTS_NOTE));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    let sel = sel.trim();
    if sel.is_empty() {
        return Ok(());
    }
    cfg.language = sel.to_string();
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 패스 수 입력을 해석한다. 빈 입력은 기본값, 그 외에는 정수만 허용한다
/// (2.9 같은 소수 입력을 2패스로 잘라서 받지 않는다).
fn parse_pass_count(s: &str, default: u32) -> Option<TubePasses> {
    let s = s.trim();
    if s.is_empty() {
        return TubePasses::from_count(default);
    }
    s.parse::<u32>().ok().and_then(TubePasses::from_count)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 기본값이 있는 숫자 입력. 빈 입력이면 기본값을 쓴다.
fn read_f64_default(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} ({default}): "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_count_accepts_only_supported_integers() {
        assert_eq!(parse_pass_count("1", 2), Some(TubePasses::One));
        assert_eq!(parse_pass_count(" 4 ", 2), Some(TubePasses::Four));
        assert_eq!(parse_pass_count("", 2), Some(TubePasses::Two));
        assert_eq!(parse_pass_count("3", 2), None);
        // 소수 입력을 잘라서 받지 않는다
        assert_eq!(parse_pass_count("2.9", 2), None);
    }
}
