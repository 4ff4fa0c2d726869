use crate::engine::Layout;
use crate::ui::board::GameScreen;
use crate::ui::theme::Theme;

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct RootState {
    // The game itself is never persisted; it is rebuilt from the layout
    // chosen on the command line.
    #[serde(skip)]
    screen: GameScreen,

    theme: Theme,

    // pixels per point i.e. zoom level
    ppp: f32,
}

impl Default for RootState {
    fn default() -> Self {
        Self {
            screen: GameScreen::new(Layout::Default),
            theme: Theme::default(),
            ppp: 2.5,
        }
    }
}

impl RootState {
    pub fn new(cc: &eframe::CreationContext<'_>, layout: Layout) -> Self {
        // Load the previous theme and zoom level (if any).
        // Note that you must enable the `persistence` feature for this to work.
        let mut root: RootState = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        root.screen = GameScreen::new(layout);
        root
    }
}

impl eframe::App for RootState {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Allow changing the zoom with ctrl + scroll
        ctx.set_pixels_per_point(self.ppp);

        ctx.input(|input| {
            let scroll_y = input.raw_scroll_delta.y;
            if input.modifiers.ctrl && scroll_y != 0.0 {
                let step = 1.003f32;
                let mut new_scale = self.ppp * step.powf(scroll_y);
                new_scale = new_scale.clamp(0.2, 12.0);
                self.ppp = new_scale;
            }
        });

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("Theme", |ui| {
                    self.theme.ui(ui);
                });
                egui::widgets::global_theme_preference_buttons(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.screen.ui(ui, &self.theme);
        });
    }
}
