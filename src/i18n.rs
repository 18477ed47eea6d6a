use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SIZING: &str = "main_menu.sizing";
    pub const MAIN_MENU_FEEDBACK: &str = "main_menu.feedback";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const SIZING_HEADING: &str = "sizing.heading";
    pub const SIZING_NOTE_DEFAULTS: &str = "sizing.note_defaults";
    pub const PROMPT_H2_FLOW: &str = "prompt.h2_flow";
    pub const PROMPT_T_HOT_IN: &str = "prompt.t_hot_in";
    pub const PROMPT_T_HOT_OUT: &str = "prompt.t_hot_out";
    pub const PROMPT_P_HOT: &str = "prompt.p_hot";
    pub const PROMPT_T_COLD_IN: &str = "prompt.t_cold_in";
    pub const PROMPT_T_COLD_OUT: &str = "prompt.t_cold_out";
    pub const PROMPT_P_COLD: &str = "prompt.p_cold";
    pub const PROMPT_AUTO_WATER: &str = "prompt.auto_water";
    pub const PROMPT_WATER_FLOW: &str = "prompt.water_flow";
    pub const PROMPT_TUBE_ID: &str = "prompt.tube_id";
    pub const PROMPT_WALL_THICKNESS: &str = "prompt.wall_thickness";
    pub const PROMPT_TARGET_VELOCITY: &str = "prompt.target_velocity";
    pub const PROMPT_PASSES: &str = "prompt.passes";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_HEAT_DUTY: &str = "result.heat_duty";
    pub const RESULT_WATER_FLOW: &str = "result.water_flow";
    pub const RESULT_OVERALL_U: &str = "result.overall_u";
    pub const RESULT_AREA: &str = "result.area";
    pub const RESULT_TUBES: &str = "result.tubes";
    pub const RESULT_SHELL_DIAMETER: &str = "result.shell_diameter";
    pub const RESULT_TUBE_VELOCITY: &str = "result.tube_velocity";

    pub const PROMPT_PDF_PATH: &str = "prompt.pdf_path";
    pub const PDF_SAVED: &str = "pdf.saved";

    pub const FEEDBACK_HEADING: &str = "feedback.heading";
    pub const FEEDBACK_OPTIONS: &str = "feedback.options";
    pub const PROMPT_FEEDBACK_NAME: &str = "prompt.feedback_name";
    pub const PROMPT_FEEDBACK_TEXT: &str = "prompt.feedback_text";
    pub const FEEDBACK_SAVED: &str = "feedback.saved";
    pub const FEEDBACK_EMPTY: &str = "feedback.empty";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_CONSTANTS_NOTE: &str = "settings.constants_note";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Hydrogen Gas Cooler Design Tool ===",
        MAIN_MENU_SIZING => "1) 가스쿨러 사이징",
        MAIN_MENU_FEEDBACK => "2) 피드백",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        SIZING_HEADING => "\n-- 수소 가스쿨러 사이징 --",
        SIZING_NOTE_DEFAULTS => "참고: 값을 비워두면 괄호 안의 기본값이 사용됩니다.",
        PROMPT_H2_FLOW => "수소 유량 [Nm3/hr]",
        PROMPT_T_HOT_IN => "수소 입구 온도 [°C]",
        PROMPT_T_HOT_OUT => "수소 출구 온도 [°C]",
        PROMPT_P_HOT => "수소 압력 [bar(a)]",
        PROMPT_T_COLD_IN => "냉각수 입구 온도 [°C]",
        PROMPT_T_COLD_OUT => "냉각수 출구 온도 [°C]",
        PROMPT_P_COLD => "냉각수 압력 [bar(a)]",
        PROMPT_AUTO_WATER => "냉각수 유량 자동 계산? (y/n, 기본 y): ",
        PROMPT_WATER_FLOW => "냉각수 유량 [kg/s]",
        PROMPT_TUBE_ID => "튜브 내경 [m]",
        PROMPT_WALL_THICKNESS => "튜브 벽 두께 [m]",
        PROMPT_TARGET_VELOCITY => "설계 튜브 유속 [m/s]",
        PROMPT_PASSES => "튜브 패스 수 (1/2/4)",
        RESULT_HEADING => "\n-- 설계 결과 --",
        RESULT_HEAT_DUTY => "열부하:",
        RESULT_WATER_FLOW => "냉각수 유량:",
        RESULT_OVERALL_U => "총괄 전열계수 U:",
        RESULT_AREA => "필요 전열면적:",
        RESULT_TUBES => "총 튜브 수:",
        RESULT_SHELL_DIAMETER => "쉘 내경:",
        RESULT_TUBE_VELOCITY => "튜브 유속:",
        PROMPT_PDF_PATH => "PDF 저장 경로 (저장하지 않으려면 엔터): ",
        PDF_SAVED => "데이터시트를 저장했습니다:",
        FEEDBACK_HEADING => "\n-- 피드백 --",
        FEEDBACK_OPTIONS => "1) 피드백 남기기  2) 피드백 목록 보기",
        PROMPT_FEEDBACK_NAME => "이름: ",
        PROMPT_FEEDBACK_TEXT => "피드백 내용: ",
        FEEDBACK_SAVED => "피드백이 저장되었습니다. 감사합니다!",
        FEEDBACK_EMPTY => "아직 등록된 피드백이 없습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (auto/ko/en, 취소하려면 엔터): ",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        SETTINGS_CONSTANTS_NOTE => {
            "설계 상수(쉘측 막계수/파울링/튜브 열전도율 등)는 config.toml의 [constants]에서 수정합니다."
        }
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Hydrogen Gas Cooler Design Tool ===",
        MAIN_MENU_SIZING => "1) Gas cooler sizing",
        MAIN_MENU_FEEDBACK => "2) Feedback",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        SIZING_HEADING => "\n-- Hydrogen Gas Cooler Sizing --",
        SIZING_NOTE_DEFAULTS => "Note: empty input keeps the default shown in parentheses.",
        PROMPT_H2_FLOW => "Hydrogen flow [Nm3/hr]",
        PROMPT_T_HOT_IN => "Hydrogen inlet temp [°C]",
        PROMPT_T_HOT_OUT => "Hydrogen outlet temp [°C]",
        PROMPT_P_HOT => "Hydrogen pressure [bar(a)]",
        PROMPT_T_COLD_IN => "Cooling water inlet temp [°C]",
        PROMPT_T_COLD_OUT => "Cooling water outlet temp [°C]",
        PROMPT_P_COLD => "Cooling water pressure [bar(a)]",
        PROMPT_AUTO_WATER => "Auto-calculate cooling water flow? (y/n, default y): ",
        PROMPT_WATER_FLOW => "Cooling water flow [kg/s]",
        PROMPT_TUBE_ID => "Tube inner diameter [m]",
        PROMPT_WALL_THICKNESS => "Tube wall thickness [m]",
        PROMPT_TARGET_VELOCITY => "Design tube velocity [m/s]",
        PROMPT_PASSES => "Tube passes (1/2/4)",
        RESULT_HEADING => "\n-- Design Results --",
        RESULT_HEAT_DUTY => "Heat duty:",
        RESULT_WATER_FLOW => "Cooling water flow:",
        RESULT_OVERALL_U => "Overall U:",
        RESULT_AREA => "Required area:",
        RESULT_TUBES => "Total tubes:",
        RESULT_SHELL_DIAMETER => "Shell diameter:",
        RESULT_TUBE_VELOCITY => "Tube velocity:",
        PROMPT_PDF_PATH => "PDF output path (enter to skip): ",
        PDF_SAVED => "Datasheet saved:",
        FEEDBACK_HEADING => "\n-- Feedback --",
        FEEDBACK_OPTIONS => "1) Leave feedback  2) Show feedback list",
        PROMPT_FEEDBACK_NAME => "Your name: ",
        PROMPT_FEEDBACK_TEXT => "Your feedback: ",
        FEEDBACK_SAVED => "Feedback saved. Thank you!",
        FEEDBACK_EMPTY => "No feedback recorded yet.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en, enter to cancel): ",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_CONSTANTS_NOTE => {
            "Design constants (shell-side h, fouling, tube conductivity, ...) live in the [constants] table of config.toml."
        }
        _ => return None,
    })
}
