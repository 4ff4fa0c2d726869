use egui::Color32;

/// Colors used to draw the board. Part of the persisted app state, edited
/// from the menu bar, and passed by reference into the board screen. The
/// engine never sees it.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Theme {
    pub light_square: Color32,
    pub dark_square: Color32,
    pub cursor: Color32,
    pub selected: Color32,
    pub legal_move: Color32,
    pub capture: Color32,
    pub white_pieces: Color32,
    pub black_pieces: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            light_square: Color32::from_rgb(240, 217, 181),
            dark_square: Color32::from_rgb(181, 136, 99),
            cursor: Color32::YELLOW.gamma_multiply(0.8),
            selected: Color32::CYAN
                .lerp_to_gamma(Color32::BLUE, 0.5)
                .gamma_multiply(0.5),
            legal_move: Color32::CYAN
                .lerp_to_gamma(Color32::GREEN, 0.5)
                .gamma_multiply(0.5),
            capture: Color32::RED.gamma_multiply(0.5),
            white_pieces: Color32::WHITE,
            black_pieces: Color32::BLACK,
        }
    }
}

impl Theme {
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let mut row = |ui: &mut egui::Ui, label: &str, color: &mut Color32| {
            ui.horizontal(|ui| {
                ui.color_edit_button_srgba(color);
                ui.label(label);
            });
        };
        row(ui, "Light squares", &mut self.light_square);
        row(ui, "Dark squares", &mut self.dark_square);
        row(ui, "Cursor", &mut self.cursor);
        row(ui, "Selected piece", &mut self.selected);
        row(ui, "Legal move", &mut self.legal_move);
        row(ui, "Capture", &mut self.capture);
        row(ui, "White pieces", &mut self.white_pieces);
        row(ui, "Black pieces", &mut self.black_pieces);

        ui.separator();
        if ui.button("Reset to defaults").clicked() {
            *self = Self::default();
        }
    }
}
