//! 수소 가스쿨러(쉘&튜브) 예비 사이징 모듈 모음.

pub mod constants;
pub mod datasheet;
pub mod sizing;

pub use constants::DesignConstants;
pub use datasheet::{datasheet_rows, render_datasheet, DatasheetError, DATASHEET_FILE_NAME};
pub use sizing::{size, CoolerInput, CoolerResult, SizingError, TubePasses};
