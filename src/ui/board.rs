use egui::{Align2, FontId, Key, Pos2, Rect, RichText, Sense, Stroke, StrokeKind, Vec2};

use super::theme::Theme;
use crate::engine::{BOARD_SIZE, Coord, GameState, Layout, Piece, Player, Turn};

/// The playing screen: board, captured rows and status line. Input is
/// reduced to the engine's two entry points: cursor bookkeeping (clamped to
/// the board edges here, never in the engine) and square activation.
pub struct GameScreen {
    game: GameState,
}

impl GameScreen {
    pub fn new(layout: Layout) -> Self {
        Self {
            game: GameState::new(layout),
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        self.handle_keys(ui.ctx());

        captured_row(ui, "Player 2", self.game.captured(Player::Second));
        self.board_ui(ui, theme);
        captured_row(ui, "Player 1", self.game.captured(Player::First));
        ui.label(self.status_line());
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (left, right, up, down, activate) = ctx.input(|input| {
            (
                input.key_pressed(Key::ArrowLeft) || input.key_pressed(Key::H),
                input.key_pressed(Key::ArrowRight) || input.key_pressed(Key::L),
                input.key_pressed(Key::ArrowUp) || input.key_pressed(Key::K),
                input.key_pressed(Key::ArrowDown) || input.key_pressed(Key::J),
                input.key_pressed(Key::Enter) || input.key_pressed(Key::Space),
            )
        });

        let mut cursor = self.game.cursor();
        if left {
            cursor.x = (cursor.x - 1).max(0);
        }
        if right {
            cursor.x = (cursor.x + 1).min(BOARD_SIZE - 1);
        }
        if up {
            cursor.y = (cursor.y - 1).max(0);
        }
        if down {
            cursor.y = (cursor.y + 1).min(BOARD_SIZE - 1);
        }
        if cursor != self.game.cursor() {
            self.game.set_cursor(cursor);
        }

        if activate {
            self.game.activate();
        }
    }

    fn board_ui(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        // Leave room below the board for the second captured row and the
        // status line.
        let footer = 3.0 * ui.text_style_height(&egui::TextStyle::Body);
        let avail = ui.available_rect_before_wrap();
        let avail_size = Vec2::new(avail.width(), (avail.height() - footer).max(0.0));

        // Cells are square, so use the smaller dimension, and center the
        // board horizontally.
        let cell_size = avail_size.x.min(avail_size.y) / BOARD_SIZE as f32;
        let board_size = Vec2::splat(cell_size * BOARD_SIZE as f32);
        let board_top_left = Pos2::new(
            avail.left() + (avail_size.x - board_size.x) / 2.0,
            avail.top(),
        );
        let board_rect = Rect::from_min_size(board_top_left, board_size);
        let cell_rect = |at: Coord| {
            Rect::from_min_size(
                Pos2::new(
                    board_rect.left() + at.x as f32 * cell_size,
                    board_rect.top() + at.y as f32 * cell_size,
                ),
                Vec2::splat(cell_size),
            )
        };

        let response = ui.allocate_rect(board_rect, Sense::click());
        if response.clicked()
            && let Some(pos) = response.interact_pointer_pos()
        {
            let x = ((pos.x - board_rect.left()) / cell_size) as i32;
            let y = ((pos.y - board_rect.top()) / cell_size) as i32;
            let clicked = Coord::new(x.clamp(0, BOARD_SIZE - 1), y.clamp(0, BOARD_SIZE - 1));
            self.game.set_cursor(clicked);
            self.game.activate();
        }

        let painter = ui.painter();

        // Squares
        let border = Stroke::new(1.0, theme.dark_square.gamma_multiply(0.5));
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let at = Coord::new(x, y);
                let color = if (x + y) % 2 == 0 {
                    theme.light_square
                } else {
                    theme.dark_square
                };
                painter.rect_filled(cell_rect(at), 0.0, color);
                painter.rect_stroke(cell_rect(at), 0.0, border, StrokeKind::Inside);
            }
        }

        // Highlights: legal moves and the selection as filled rounded rects,
        // the cursor as a ring on top.
        let highlight = |at: Coord, color: egui::Color32| {
            let rect = cell_rect(at).shrink(0.06 * cell_size);
            painter.rect_filled(rect, 0.2 * cell_size, color);
        };
        for &mv in self.game.selected_moves() {
            let color = if self.game.board().is_empty(mv) {
                theme.legal_move
            } else {
                theme.capture
            };
            highlight(mv, color);
        }
        if let Some(selected) = self.game.selection() {
            highlight(selected, theme.selected);
        }
        painter.rect_stroke(
            cell_rect(self.game.cursor()).shrink(0.04 * cell_size),
            0.2 * cell_size,
            Stroke::new(0.06 * cell_size, theme.cursor),
            StrokeKind::Inside,
        );

        // Pieces
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let at = Coord::new(x, y);
                if let Some(piece) = self.game.board().get(at) {
                    let color = match piece.color {
                        crate::engine::Color::White => theme.white_pieces,
                        crate::engine::Color::Black => theme.black_pieces,
                    };
                    painter.text(
                        cell_rect(at).center(),
                        Align2::CENTER_CENTER,
                        piece.glyph(),
                        FontId::proportional(cell_size * 0.8),
                        color,
                    );
                }
            }
        }
    }

    fn status_line(&self) -> String {
        let mut status = match self.game.turn() {
            Turn::Player(Player::First) => "Player 1 to move".to_owned(),
            Turn::Player(Player::Second) => "Player 2 to move".to_owned(),
            Turn::Freeplay => "Freeplay".to_owned(),
        };
        if self.game.selection_threatens_king() {
            status.push_str(" · a king is in reach");
        }
        status
    }
}

fn captured_row(ui: &mut egui::Ui, name: &str, pieces: &[Piece]) {
    let glyphs: String = pieces
        .iter()
        .map(|piece| piece.glyph().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    ui.horizontal(|ui| {
        ui.label(format!("{name}:"));
        ui.label(RichText::new(format!("[{glyphs}]")).size(16.0));
    });
}
