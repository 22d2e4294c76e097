use eframe::egui::{self, RichText};
use eframe::egui::{FontData, FontDefinitions, FontFamily};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

use excel_sum_common::report::{audit_table, render_audit, summary_text, AUDIT_LIMIT, AUDIT_TITLE};
use excel_sum_common::{Error, Session};

pub struct ExcelSumApp {
    session: Session,
    keyword: String,
    result_text: String,
    audit_text: String,
    show_audit: bool,
}

impl Default for ExcelSumApp {
    fn default() -> Self {
        Self {
            session: Session::new(),
            keyword: String::new(),
            result_text: "결과: -".to_string(),
            audit_text: audit_table(&[], 0, AUDIT_TITLE),
            show_audit: false,
        }
    }
}

impl ExcelSumApp {
    fn load_excel(&mut self) {
        let Some(path) = FileDialog::new()
            .add_filter("Excel Files", &["xlsx", "xls"])
            .pick_file()
        else {
            return;
        };

        match self.session.select_file(&path) {
            Ok(()) => show_dialog(
                MessageLevel::Info,
                "파일 선택",
                &format!("선택된 파일:\n{}", path.display()),
            ),
            Err(err) => show_dialog(MessageLevel::Error, "에러", &err.to_string()),
        }
    }

    fn calculate_sum(&mut self) {
        match self.session.calculate(&self.keyword) {
            Ok(calculation) => {
                self.result_text = summary_text(&calculation.summary);
                self.audit_text = render_audit(calculation, AUDIT_LIMIT);
            }
            Err(err @ (Error::MissingFile | Error::MissingKeyword)) => {
                show_dialog(MessageLevel::Warning, "경고", &err.to_string());
            }
            Err(err) => {
                tracing::warn!(error = %err, "합계 계산 실패");
                show_dialog(MessageLevel::Error, "에러", &err.to_string());
            }
        }
    }

    fn render_audit_window(&mut self, ctx: &egui::Context) {
        egui::Window::new(AUDIT_TITLE)
            .open(&mut self.show_audit)
            .default_size([900.0, 600.0])
            .show(ctx, |ui| {
                egui::ScrollArea::both().show(ui, |ui| {
                    ui.label(RichText::new(&self.audit_text).monospace());
                });
            });
    }
}

fn show_dialog(level: MessageLevel, title: &str, message: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();
    let candidates = [
        r"C:\Windows\Fonts\malgun.ttf",
        r"C:\Windows\Fonts\gulim.ttc",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    ];

    for path in candidates {
        if let Ok(data) = std::fs::read(path) {
            fonts.font_data.insert("ko_fallback".to_string(), FontData::from_owned(data));
            fonts.families
                .entry(FontFamily::Proportional)
                .or_default()
                .insert(0, "ko_fallback".to_string());
            fonts.families
                .entry(FontFamily::Monospace)
                .or_default()
                .push("ko_fallback".to_string());
            ctx.set_fonts(fonts);
            return;
        }
    }
}

impl eframe::App for ExcelSumApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.label("텍스트 입력 (등록상품명 검색)");
                ui.add_space(6.0);
                let response = ui.add(egui::TextEdit::singleline(&mut self.keyword).desired_width(300.0));
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.calculate_sum();
                }

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("엑셀 파일 선택").clicked() {
                        self.load_excel();
                    }
                    if ui.button("합계 계산").clicked() {
                        self.calculate_sum();
                    }
                    if ui.button("디버그 로그 보기").clicked() {
                        self.show_audit = true;
                    }
                });

                ui.add_space(10.0);
                ui.label(RichText::new(&self.result_text).size(16.0));

                if let Some(path) = self.session.file_path() {
                    ui.add_space(6.0);
                    ui.label(RichText::new(path.display().to_string()).small().weak());
                }
            });
        });

        if self.show_audit {
            self.render_audit_window(ctx);
        }
    }
}
