use crate::config::Config;
use crate::cooler::{datasheet, sizing};
use crate::feedback;
use crate::fluids::PropertyError;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 사이징 계산 오류
    Sizing(sizing::SizingError),
    /// 물성 조회 오류
    Property(PropertyError),
    /// 데이터시트 PDF 생성 오류
    Datasheet(datasheet::DatasheetError),
    /// 피드백 파일 오류
    Feedback(feedback::FeedbackError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Sizing(e) => write!(f, "사이징 계산 오류: {e}"),
            AppError::Property(e) => write!(f, "물성 조회 오류: {e}"),
            AppError::Datasheet(e) => write!(f, "데이터시트 오류: {e}"),
            AppError::Feedback(e) => write!(f, "피드백 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<sizing::SizingError> for AppError {
    fn from(value: sizing::SizingError) -> Self {
        AppError::Sizing(value)
    }
}

impl From<PropertyError> for AppError {
    fn from(value: PropertyError) -> Self {
        AppError::Property(value)
    }
}

impl From<datasheet::DatasheetError> for AppError {
    fn from(value: datasheet::DatasheetError) -> Self {
        AppError::Datasheet(value)
    }
}

impl From<feedback::FeedbackError> for AppError {
    fn from(value: feedback::FeedbackError) -> Self {
        AppError::Feedback(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Sizing => {
                // 계산 실패는 루프를 끊지 않고 메시지로만 알린다.
                if let Err(e) = ui_cli::handle_sizing(tr, config) {
                    println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX));
                }
            }
            MenuChoice::Feedback => ui_cli::handle_feedback(tr)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
