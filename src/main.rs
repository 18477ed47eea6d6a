use clap::Parser;
use std::path::PathBuf;

use hydrogen_cooler_tool::cooler::{datasheet_rows, render_datasheet, size, CoolerInput};
use hydrogen_cooler_tool::fluids::CoolProp;
use hydrogen_cooler_tool::{app, config, i18n, ui_cli};

/// 수소 가스쿨러 예비 사이징 CLI.
#[derive(Debug, Parser)]
#[command(name = "hydrogen_cooler_tool_cli", version)]
struct Cli {
    /// 언어 코드 (auto/ko/ko-kr/en/en-us)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 비대화형 배치 모드: CoolerInput TOML 파일 경로
    #[arg(long)]
    input: Option<PathBuf>,
    /// 배치 모드에서 데이터시트 PDF를 저장할 경로
    #[arg(long)]
    pdf: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, None);

    if let Some(input_path) = cli.input {
        return run_batch(&tr, &cfg, &input_path, cli.pdf.as_deref());
    }

    app::run(&mut cfg, &tr)?;
    Ok(())
}

/// TOML로 기술된 입력 한 건을 계산하고 필요 시 PDF까지 저장한다.
fn run_batch(
    tr: &i18n::Translator,
    cfg: &config::Config,
    input_path: &std::path::Path,
    pdf_path: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(input_path)?;
    let input: CoolerInput = toml::from_str(&content)?;
    let result = size(&input, &cfg.constants, &CoolProp::new())?;
    ui_cli::print_result(tr, &result);
    if let Some(path) = pdf_path {
        let bytes = render_datasheet(&datasheet_rows(&input, &result))?;
        std::fs::write(path, bytes)?;
        println!("{} {}", tr.t(i18n::keys::PDF_SAVED), path.display());
    }
    Ok(())
}
