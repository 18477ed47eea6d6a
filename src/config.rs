use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cooler::DesignConstants;

/// 애플리케이션 설정을 표현한다.
///
/// `[constants]` 테이블로 쉘측 막계수·파울링·튜브 열전도율 등 예비 설계 상수를
/// 덮어쓸 수 있다. 비워두면 원 설계식의 대표값이 사용된다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/ko-kr/en/en-us)
    pub language: String,
    /// 사이징 설계 상수
    pub constants: DesignConstants,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            constants: DesignConstants::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_override_partial_table() {
        let cfg: Config = toml::from_str(
            "language = \"ko\"\n[constants]\nshell_side_h_w_per_m2k = 2500.0\n",
        )
        .unwrap();
        assert_eq!(cfg.language, "ko");
        assert!((cfg.constants.shell_side_h_w_per_m2k - 2500.0).abs() < 1e-12);
        // 나머지 상수는 기본값 유지
        assert!((cfg.constants.tube_conductivity_w_per_mk - 16.0).abs() < 1e-12);
        assert!((cfg.constants.multi_pass_correction - 0.85).abs() < 1e-12);
    }
}
