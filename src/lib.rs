//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI 양쪽에서 동일하게 사용한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod cooler;
pub mod feedback;
pub mod fluids;
pub mod i18n;
pub mod ui_cli;
