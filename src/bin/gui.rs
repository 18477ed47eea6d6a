#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.
//! 한 화면에서 공정/기계 입력 → 사이징 → 결과 표시 → PDF 저장 → 피드백까지 처리한다.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use hydrogen_cooler_tool::{
    config,
    cooler::{
        datasheet_rows, render_datasheet, size, CoolerInput, CoolerResult, TubePasses,
        DATASHEET_FILE_NAME,
    },
    feedback::{self, FeedbackEntry, FEEDBACK_FILE_NAME},
    fluids::CoolProp,
    i18n,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(980.0, 760.0));
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Hydrogen Gas Cooler Design Tool",
        native_options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["H2_Cooler.png", "icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 기본 폰트를 우선 적용한다.
/// 1) assets/fonts/ 아래의 프로젝트 폰트
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 모두 실패하면 Err를 반환하고 egui 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts_dir = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts_dir.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    Err("Korean-capable font not found; falling back to egui defaults.".into())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    show_settings_modal: bool,
    // 공정 입력
    flow_hot_nm3_per_hr: f64,
    t_hot_in_c: f64,
    t_hot_out_c: f64,
    p_hot_bar: f64,
    t_cold_in_c: f64,
    t_cold_out_c: f64,
    p_cold_bar: f64,
    auto_water: bool,
    water_flow_kg_per_s: f64,
    // 기계 입력
    tube_inner_diameter_m: f64,
    tube_wall_thickness_m: f64,
    target_velocity_m_per_s: f64,
    passes: TubePasses,
    // 결과/상태
    result: Option<CoolerResult>,
    last_input: Option<CoolerInput>,
    calc_error: Option<String>,
    pdf_status: Option<String>,
    // 피드백
    feedback_name: String,
    feedback_text: String,
    feedback_status: Option<String>,
    feedback_entries: Vec<FeedbackEntry>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang = i18n::resolve_language(&config.language, None);
        let tr = i18n::Translator::new_with_pack(&lang, None);
        let defaults = CoolerInput::default();
        let feedback_entries =
            feedback::load_feedback(Path::new(FEEDBACK_FILE_NAME)).unwrap_or_default();
        Self {
            lang_input: config.language.clone(),
            config,
            tr,
            show_settings_modal: false,
            flow_hot_nm3_per_hr: defaults.flow_hot_nm3_per_hr,
            t_hot_in_c: defaults.t_hot_in_c,
            t_hot_out_c: defaults.t_hot_out_c,
            p_hot_bar: defaults.p_hot_bar,
            t_cold_in_c: defaults.t_cold_in_c,
            t_cold_out_c: defaults.t_cold_out_c,
            p_cold_bar: defaults.p_cold_bar,
            auto_water: true,
            water_flow_kg_per_s: 7.0,
            tube_inner_diameter_m: defaults.tube_inner_diameter_m,
            tube_wall_thickness_m: defaults.tube_wall_thickness_m,
            target_velocity_m_per_s: defaults.target_velocity_m_per_s,
            passes: defaults.passes,
            result: None,
            last_input: None,
            calc_error: None,
            pdf_status: None,
            feedback_name: String::new(),
            feedback_text: String::new(),
            feedback_status: None,
            feedback_entries,
        }
    }

    fn collect_input(&self) -> CoolerInput {
        CoolerInput {
            flow_hot_nm3_per_hr: self.flow_hot_nm3_per_hr,
            t_hot_in_c: self.t_hot_in_c,
            t_hot_out_c: self.t_hot_out_c,
            p_hot_bar: self.p_hot_bar,
            t_cold_in_c: self.t_cold_in_c,
            t_cold_out_c: self.t_cold_out_c,
            p_cold_bar: self.p_cold_bar,
            cooling_water_flow_kg_per_s: if self.auto_water {
                None
            } else {
                Some(self.water_flow_kg_per_s)
            },
            tube_inner_diameter_m: self.tube_inner_diameter_m,
            tube_wall_thickness_m: self.tube_wall_thickness_m,
            target_velocity_m_per_s: self.target_velocity_m_per_s,
            passes: self.passes,
        }
    }

    fn run_sizing(&mut self) {
        let input = self.collect_input();
        self.pdf_status = None;
        match size(&input, &self.config.constants, &CoolProp::new()) {
            Ok(result) => {
                self.result = Some(result);
                self.last_input = Some(input);
                self.calc_error = None;
            }
            Err(e) => {
                self.result = None;
                self.last_input = None;
                self.calc_error = Some(e.to_string());
            }
        }
    }

    fn save_datasheet(&mut self) {
        let (Some(input), Some(result)) = (self.last_input.as_ref(), self.result.as_ref()) else {
            return;
        };
        let Some(path) = FileDialog::new()
            .set_file_name(DATASHEET_FILE_NAME)
            .add_filter("PDF", &["pdf"])
            .save_file()
        else {
            return;
        };
        let status = render_datasheet(&datasheet_rows(input, result))
            .map_err(|e| e.to_string())
            .and_then(|bytes| fs::write(&path, bytes).map_err(|e| e.to_string()));
        self.pdf_status = Some(match status {
            Ok(()) => format!("PDF saved: {}", path.display()),
            Err(e) => format!("PDF error: {e}"),
        });
    }

    fn submit_feedback(&mut self) {
        let path = Path::new(FEEDBACK_FILE_NAME);
        match feedback::append_feedback(path, &self.feedback_name, &self.feedback_text) {
            Ok(()) => {
                self.feedback_text.clear();
                self.feedback_entries = feedback::load_feedback(path).unwrap_or_default();
                self.feedback_status = Some(self.tr.t(i18n::keys::FEEDBACK_SAVED).to_string());
            }
            Err(e) => self.feedback_status = Some(e.to_string()),
        }
    }

    fn ui_process_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        egui::Frame::group(ui.style()).show(ui, |ui| {
            heading_with_tip(
                ui,
                &txt("gui.process.heading", "Hydrogen Process Inputs"),
                &txt(
                    "gui.process.tip",
                    "Hot-side hydrogen and cold-side cooling water conditions",
                ),
            );
            egui::Grid::new("process_grid")
                .num_columns(4)
                .spacing([10.0, 6.0])
                .show(ui, |ui| {
                    label_with_tip(
                        ui,
                        &txt("gui.process.h2_flow", "Hydrogen flow [Nm3/hr]"),
                        &txt(
                            "gui.process.h2_flow_tip",
                            "Normal volumetric flow from the electrolyzer",
                        ),
                    );
                    ui.add(egui::DragValue::new(&mut self.flow_hot_nm3_per_hr).speed(1.0));
                    label_with_tip(
                        ui,
                        &txt("gui.process.t_cold_in", "Water inlet [°C]"),
                        &txt("gui.process.t_cold_in_tip", "Cooling water inlet temperature"),
                    );
                    ui.add(egui::DragValue::new(&mut self.t_cold_in_c).speed(0.5));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.process.t_hot_in", "Hydrogen inlet [°C]"),
                        &txt("gui.process.t_hot_in_tip", "Hot-side inlet temperature"),
                    );
                    ui.add(egui::DragValue::new(&mut self.t_hot_in_c).speed(0.5));
                    label_with_tip(
                        ui,
                        &txt("gui.process.t_cold_out", "Water outlet [°C]"),
                        &txt(
                            "gui.process.t_cold_out_tip",
                            "Cooling water outlet temperature",
                        ),
                    );
                    ui.add(egui::DragValue::new(&mut self.t_cold_out_c).speed(0.5));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.process.t_hot_out", "Hydrogen outlet [°C]"),
                        &txt("gui.process.t_hot_out_tip", "Hot-side outlet temperature"),
                    );
                    ui.add(egui::DragValue::new(&mut self.t_hot_out_c).speed(0.5));
                    label_with_tip(
                        ui,
                        &txt("gui.process.p_cold", "Water pressure [bar(a)]"),
                        &txt("gui.process.p_cold_tip", "Cooling water absolute pressure"),
                    );
                    ui.add(egui::DragValue::new(&mut self.p_cold_bar).speed(0.1));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.process.p_hot", "Hydrogen pressure [bar(a)]"),
                        &txt("gui.process.p_hot_tip", "Hot-side absolute pressure"),
                    );
                    ui.add(egui::DragValue::new(&mut self.p_hot_bar).speed(0.1));
                    ui.end_row();
                });

            ui.add_space(4.0);
            ui.checkbox(
                &mut self.auto_water,
                txt("gui.process.auto_water", "Auto calculate cooling water flow"),
            )
            .on_hover_text(txt(
                "gui.process.auto_water_tip",
                "Solve the water flow from the heat balance",
            ));
            if !self.auto_water {
                ui.horizontal(|ui| {
                    label_with_tip(
                        ui,
                        &txt("gui.process.water_flow", "Cooling water flow [kg/s]"),
                        &txt("gui.process.water_flow_tip", "Manual cooling water mass flow"),
                    );
                    ui.add(egui::DragValue::new(&mut self.water_flow_kg_per_s).speed(0.1));
                });
            }
        });
    }

    fn ui_mechanical_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        egui::Frame::group(ui.style()).show(ui, |ui| {
            heading_with_tip(
                ui,
                &txt("gui.mech.heading", "Mechanical Inputs"),
                &txt("gui.mech.tip", "Tube geometry and target velocity"),
            );
            egui::Grid::new("mech_grid")
                .num_columns(4)
                .spacing([10.0, 6.0])
                .show(ui, |ui| {
                    label_with_tip(
                        ui,
                        &txt("gui.mech.tube_id", "Tube inner diameter [m]"),
                        &txt("gui.mech.tube_id_tip", "Single tube inner diameter"),
                    );
                    ui.add(
                        egui::DragValue::new(&mut self.tube_inner_diameter_m)
                            .speed(0.001)
                            .max_decimals(4),
                    );
                    label_with_tip(
                        ui,
                        &txt("gui.mech.velocity", "Design tube velocity [m/s]"),
                        &txt(
                            "gui.mech.velocity_tip",
                            "Target in-tube velocity; tube count is rounded up",
                        ),
                    );
                    ui.add(egui::DragValue::new(&mut self.target_velocity_m_per_s).speed(0.1));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.mech.wall", "Tube wall thickness [m]"),
                        &txt("gui.mech.wall_tip", "Tube wall thickness"),
                    );
                    ui.add(
                        egui::DragValue::new(&mut self.tube_wall_thickness_m)
                            .speed(0.0001)
                            .max_decimals(5),
                    );
                    label_with_tip(
                        ui,
                        &txt("gui.mech.passes", "Tube passes"),
                        &txt("gui.mech.passes_tip", "Number of tube passes (1/2/4)"),
                    );
                    ui.horizontal(|ui| {
                        ui.selectable_value(&mut self.passes, TubePasses::One, "1");
                        ui.selectable_value(&mut self.passes, TubePasses::Two, "2");
                        ui.selectable_value(&mut self.passes, TubePasses::Four, "4");
                    });
                    ui.end_row();
                });
        });
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        if let Some(err) = &self.calc_error {
            ui.colored_label(
                egui::Color32::LIGHT_RED,
                format!("{} {err}", txt("gui.result.error", "Calculation error:")),
            );
            return;
        }
        let Some(result) = self.result else {
            ui.small(txt(
                "gui.result.hint",
                "Enter the conditions above and press Run.",
            ));
            return;
        };

        egui::Frame::group(ui.style()).show(ui, |ui| {
            heading_with_tip(
                ui,
                &txt("gui.result.heading", "Design Results"),
                &txt("gui.result.tip", "Preliminary shell-and-tube sizing"),
            );
            egui::Grid::new("result_grid")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.result.heat_duty", "Heat duty"));
                    ui.strong(format!("{:.2} kW", result.heat_duty_w / 1000.0));
                    ui.end_row();
                    ui.label(txt("gui.result.water_flow", "Cooling water flow"));
                    ui.strong(format!("{:.2} kg/s", result.cooling_water_flow_kg_per_s));
                    ui.end_row();
                    ui.label(txt("gui.result.overall_u", "Overall U"));
                    ui.strong(format!("{:.1} W/m2-K", result.overall_u_w_per_m2k));
                    ui.end_row();
                    ui.label(txt("gui.result.area", "Required area"));
                    ui.strong(format!("{:.2} m2", result.required_area_m2));
                    ui.end_row();
                    ui.label(txt("gui.result.tubes", "Total tubes"));
                    ui.strong(result.total_tubes.to_string());
                    ui.end_row();
                    ui.label(txt("gui.result.shell_diameter", "Shell diameter"));
                    ui.strong(format!("{:.2} m", result.shell_diameter_m));
                    ui.end_row();
                    ui.label(txt("gui.result.tube_velocity", "Tube velocity"));
                    ui.strong(format!("{:.2} m/s", result.tube_velocity_m_per_s));
                    ui.end_row();
                });

            ui.add_space(6.0);
            if ui
                .button(txt("gui.result.download", "Download datasheet (PDF)"))
                .clicked()
            {
                self.save_datasheet();
            }
            if let Some(status) = &self.pdf_status {
                ui.small(status);
            }
        });
    }

    fn ui_feedback(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        egui::Frame::group(ui.style()).show(ui, |ui| {
            heading_with_tip(
                ui,
                &txt("gui.feedback.heading", "Feedback & Suggestions"),
                &txt("gui.feedback.tip", "Appended to feedback.csv next to the executable"),
            );
            egui::Grid::new("feedback_grid")
                .num_columns(2)
                .spacing([10.0, 6.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.feedback.name", "Your name"));
                    ui.text_edit_singleline(&mut self.feedback_name);
                    ui.end_row();
                    ui.label(txt("gui.feedback.text", "Your feedback"));
                    ui.text_edit_multiline(&mut self.feedback_text);
                    ui.end_row();
                });
            if ui.button(txt("gui.feedback.submit", "Submit feedback")).clicked() {
                self.submit_feedback();
            }
            if let Some(status) = &self.feedback_status {
                ui.small(status);
            }
            if !self.feedback_entries.is_empty() {
                ui.separator();
                ui.label(txt("gui.feedback.list", "Visitor feedback"));
                for entry in &self.feedback_entries {
                    ui.small(format!(
                        "[{}] {}: {}",
                        entry.timestamp, entry.name, entry.text
                    ));
                }
            }
        });
    }

    fn ui_settings_modal(&mut self, ctx: &egui::Context) {
        if !self.show_settings_modal {
            return;
        }
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        let mut open = self.show_settings_modal;
        let mut apply_language = false;
        let mut save_constants = false;
        egui::Window::new(txt("gui.settings.title", "Settings"))
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(txt("gui.settings.language", "Language (auto/ko/en)"));
                    ui.text_edit_singleline(&mut self.lang_input);
                    if ui.button(txt("gui.settings.apply", "Apply")).clicked() {
                        apply_language = true;
                    }
                });
                ui.separator();
                ui.label(txt(
                    "gui.settings.constants",
                    "Design constants (preliminary stand-ins, see config.toml)",
                ));
                egui::Grid::new("constants_grid")
                    .num_columns(2)
                    .spacing([10.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("Shell-side h [W/m2-K]");
                        ui.add(
                            egui::DragValue::new(&mut self.config.constants.shell_side_h_w_per_m2k)
                                .speed(50.0),
                        );
                        ui.end_row();
                        ui.label("Fouling inside [m2K/W]");
                        ui.add(
                            egui::DragValue::new(
                                &mut self.config.constants.fouling_inside_m2k_per_w,
                            )
                            .speed(0.00001)
                            .max_decimals(6),
                        );
                        ui.end_row();
                        ui.label("Fouling outside [m2K/W]");
                        ui.add(
                            egui::DragValue::new(
                                &mut self.config.constants.fouling_outside_m2k_per_w,
                            )
                            .speed(0.00001)
                            .max_decimals(6),
                        );
                        ui.end_row();
                        ui.label("Tube conductivity [W/m-K]");
                        ui.add(
                            egui::DragValue::new(
                                &mut self.config.constants.tube_conductivity_w_per_mk,
                            )
                            .speed(0.5),
                        );
                        ui.end_row();
                        ui.label("Multi-pass F [-]");
                        ui.add(
                            egui::DragValue::new(&mut self.config.constants.multi_pass_correction)
                                .speed(0.01)
                                .max_decimals(3),
                        );
                        ui.end_row();
                        ui.label("Tube layout K [-]");
                        ui.add(
                            egui::DragValue::new(&mut self.config.constants.tube_layout_constant)
                                .speed(0.01)
                                .max_decimals(3),
                        );
                        ui.end_row();
                    });
                if ui.button(txt("gui.settings.save", "Save to config.toml")).clicked() {
                    save_constants = true;
                }
            });
        self.show_settings_modal = open;

        if apply_language {
            self.config.language = self.lang_input.trim().to_string();
            let lang = i18n::resolve_language(&self.config.language, None);
            self.tr = i18n::Translator::new_with_pack(&lang, None);
            if let Err(e) = self.config.save() {
                eprintln!("config save error: {e}");
            }
        }
        if save_constants {
            if let Err(e) = self.config.save() {
                eprintln!("config save error: {e}");
            }
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Hydrogen Gas Cooler Design Tool"));
                ui.label(txt(
                    "gui.nav.subtitle",
                    "| Electrolyzer BOP preliminary engineering",
                ));
                ui.separator();
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        self.ui_settings_modal(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.ui_process_inputs(ui);
                ui.add_space(8.0);
                self.ui_mechanical_inputs(ui);
                ui.add_space(8.0);
                if ui
                    .button(
                        egui::RichText::new(txt("gui.run", "Run Hydrogen Cooler Design")).strong(),
                    )
                    .clicked()
                {
                    self.run_sizing();
                }
                ui.add_space(8.0);
                self.ui_results(ui);
                ui.add_space(8.0);
                self.ui_feedback(ui);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_reference_case() {
        let app = GuiApp::new(config::Config::default());
        assert_eq!(app.flow_hot_nm3_per_hr, 750.0);
        assert_eq!(app.t_hot_in_c, 80.0);
        assert_eq!(app.t_hot_out_c, 40.0);
        assert_eq!(app.p_hot_bar, 16.0);
        assert!(app.auto_water);
        assert_eq!(app.passes, TubePasses::Two);
    }

    #[test]
    fn manual_water_flow_round_trips_into_input() {
        let mut app = GuiApp::new(config::Config::default());
        app.auto_water = false;
        app.water_flow_kg_per_s = 5.5;
        let input = app.collect_input();
        assert_eq!(input.cooling_water_flow_kg_per_s, Some(5.5));
        app.auto_water = true;
        let input = app.collect_input();
        assert_eq!(input.cooling_water_flow_kg_per_s, None);
    }
}
