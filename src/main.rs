#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use chessboard::RootState;
use chessboard::engine::Layout;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // The first argument picks the starting layout. A name outside the
    // known set must abort before any window is created.
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "default".to_owned());
    let layout = match mode.parse::<Layout>() {
        Ok(layout) => layout,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([320.0, 440.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Chessboard",
        native_options,
        Box::new(|cc| Ok(Box::new(RootState::new(cc, layout)))),
    )
}
