//! 설계 결과를 1페이지 PDF 데이터시트로 렌더링한다.
//! 제목 + 2열(항목/값) 표, 회색 헤더 행, 검정 격자선 구성이다.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rect,
    Rgb,
};

use super::sizing::{CoolerInput, CoolerResult};

/// 다운로드 시 기본 파일명.
pub const DATASHEET_FILE_NAME: &str = "Hydrogen_Gas_Cooler_Datasheet.pdf";

// printpdf의 Mm은 f32 래퍼이므로 지면 좌표 계산도 f32로 한다.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const TABLE_LEFT_MM: f32 = 28.0;
const LABEL_COL_MM: f32 = 96.0;
const VALUE_COL_MM: f32 = 58.0;
const ROW_HEIGHT_MM: f32 = 9.0;
const TABLE_TOP_MM: f32 = 255.0;

/// PDF 생성 중 발생 가능한 오류.
#[derive(Debug)]
pub enum DatasheetError {
    /// printpdf 내부 오류
    Pdf(String),
}

impl std::fmt::Display for DatasheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasheetError::Pdf(msg) => write!(f, "PDF 생성 오류: {msg}"),
        }
    }
}

impl std::error::Error for DatasheetError {}

/// 데이터시트 표에 들어갈 (항목, 값) 목록을 만든다.
/// 수소 유량 한 줄과 사이징 결과 일곱 필드를 화면 표시와 동일한 서식으로 나열한다.
pub fn datasheet_rows(input: &CoolerInput, result: &CoolerResult) -> Vec<(String, String)> {
    vec![
        (
            "Hydrogen Flow (Nm3/hr)".to_string(),
            format!("{:.1}", input.flow_hot_nm3_per_hr),
        ),
        (
            "Heat Duty (kW)".to_string(),
            format!("{:.2}", result.heat_duty_w / 1000.0),
        ),
        (
            "Cooling Water Flow (kg/s)".to_string(),
            format!("{:.2}", result.cooling_water_flow_kg_per_s),
        ),
        (
            "Overall U (W/m2-K)".to_string(),
            format!("{:.1}", result.overall_u_w_per_m2k),
        ),
        (
            "Required Area (m2)".to_string(),
            format!("{:.2}", result.required_area_m2),
        ),
        ("Total Tubes".to_string(), result.total_tubes.to_string()),
        (
            "Shell Diameter (m)".to_string(),
            format!("{:.2}", result.shell_diameter_m),
        ),
        (
            "Tube Velocity (m/s)".to_string(),
            format!("{:.2}", result.tube_velocity_m_per_s),
        ),
    ]
}

fn horizontal_line(layer: &PdfLayerReference, y_mm: f32) {
    let line = Line {
        points: vec![
            (Point::new(Mm(TABLE_LEFT_MM), Mm(y_mm)), false),
            (
                Point::new(Mm(TABLE_LEFT_MM + LABEL_COL_MM + VALUE_COL_MM), Mm(y_mm)),
                false,
            ),
        ],
        is_closed: false,
    };
    layer.add_line(line);
}

fn vertical_line(layer: &PdfLayerReference, x_mm: f32, y_top_mm: f32, y_bottom_mm: f32) {
    let line = Line {
        points: vec![
            (Point::new(Mm(x_mm), Mm(y_top_mm)), false),
            (Point::new(Mm(x_mm), Mm(y_bottom_mm)), false),
        ],
        is_closed: false,
    };
    layer.add_line(line);
}

fn row_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    label: &str,
    value: &str,
    y_mm: f32,
) {
    layer.use_text(label, 11.0, Mm(TABLE_LEFT_MM + 2.5), Mm(y_mm), font);
    layer.use_text(
        value,
        11.0,
        Mm(TABLE_LEFT_MM + LABEL_COL_MM + 2.5),
        Mm(y_mm),
        font,
    );
}

/// (항목, 값) 목록을 받아 A4 한 장짜리 데이터시트 PDF 바이트를 생성한다.
pub fn render_datasheet(rows: &[(String, String)]) -> Result<Vec<u8>, DatasheetError> {
    let (doc, page, layer) = PdfDocument::new(
        "Hydrogen Gas Cooler Design Datasheet",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "datasheet",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| DatasheetError::Pdf(e.to_string()))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| DatasheetError::Pdf(e.to_string()))?;

    // 제목
    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    layer.use_text(
        "Hydrogen Gas Cooler Design Datasheet",
        18.0,
        Mm(TABLE_LEFT_MM),
        Mm(272.0),
        &font_bold,
    );

    let table_right = TABLE_LEFT_MM + LABEL_COL_MM + VALUE_COL_MM;
    let table_bottom = TABLE_TOP_MM - ROW_HEIGHT_MM * (rows.len() as f32 + 1.0);

    // 헤더 행 배경 (회색)
    layer.set_fill_color(Color::Rgb(Rgb::new(0.5, 0.5, 0.5, None)));
    let header_rect = Rect::new(
        Mm(TABLE_LEFT_MM),
        Mm(TABLE_TOP_MM - ROW_HEIGHT_MM),
        Mm(table_right),
        Mm(TABLE_TOP_MM),
    )
    .with_mode(PaintMode::Fill);
    layer.add_rect(header_rect);

    // 헤더 텍스트 (흰색)
    layer.set_fill_color(Color::Rgb(Rgb::new(0.96, 0.96, 0.96, None)));
    row_text(
        &layer,
        &font_bold,
        "Parameter",
        "Value",
        TABLE_TOP_MM - ROW_HEIGHT_MM + 2.8,
    );

    // 본문 행 (검정)
    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    for (i, (label, value)) in rows.iter().enumerate() {
        let y = TABLE_TOP_MM - ROW_HEIGHT_MM * (i as f32 + 2.0) + 2.8;
        row_text(&layer, &font, label, value, y);
    }

    // 격자선 (검정)
    layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    layer.set_outline_thickness(0.5);
    for i in 0..=(rows.len() + 1) {
        horizontal_line(&layer, TABLE_TOP_MM - ROW_HEIGHT_MM * i as f32);
    }
    vertical_line(&layer, TABLE_LEFT_MM, TABLE_TOP_MM, table_bottom);
    vertical_line(
        &layer,
        TABLE_LEFT_MM + LABEL_COL_MM,
        TABLE_TOP_MM,
        table_bottom,
    );
    vertical_line(&layer, table_right, TABLE_TOP_MM, table_bottom);

    doc.save_to_bytes()
        .map_err(|e| DatasheetError::Pdf(e.to_string()))
}
