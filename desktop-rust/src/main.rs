mod app;

use app::{configure_fonts, ExcelSumApp};

fn main() -> eframe::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([460.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        "엑셀 합계 계산기",
        options,
        Box::new(|cc| {
            configure_fonts(&cc.egui_ctx);
            Box::new(ExcelSumApp::default())
        }),
    )
}
