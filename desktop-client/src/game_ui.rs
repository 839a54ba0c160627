use egui::{Color32, Painter, Rect, Sense, Stroke};
use tokio::sync::mpsc;

use common::{BOARD_SIZE, GameSnapshot, GameStatus, Mark};

use crate::state::{ClientCommand, SharedState};

pub struct GameApp {
    player: Mark,
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    last_hover: Option<(usize, usize)>,
}

impl GameApp {
    pub const CELL_SIZE: f32 = 100.0;
    const LINE_WIDTH: f32 = 2.0;
    const REPAINT_INTERVAL_MS: u64 = 100;

    pub fn new(
        player: Mark,
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
    ) -> Self {
        Self {
            player,
            shared_state,
            command_tx,
            last_hover: None,
        }
    }

    fn status_line(&self, snapshot: &GameSnapshot) -> String {
        match snapshot.winner {
            GameStatus::XWon => "Player X wins!".to_string(),
            GameStatus::OWon => "Player O wins!".to_string(),
            GameStatus::Draw => "Draw!".to_string(),
            GameStatus::InProgress => {
                if snapshot.current_player == self.player {
                    format!("Your turn ({:?})", self.player)
                } else {
                    format!("Waiting for {:?}...", snapshot.current_player)
                }
            }
        }
    }

    fn render_board(&mut self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let board_span = Self::CELL_SIZE * BOARD_SIZE as f32;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_span, board_span), Sense::click());

        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, Color32::from_rgb(240, 240, 240));

        for i in 0..=BOARD_SIZE {
            let x = rect.left() + i as f32 * Self::CELL_SIZE;
            painter.line_segment(
                [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
                Stroke::new(Self::LINE_WIDTH, Color32::BLACK),
            );
            let y = rect.top() + i as f32 * Self::CELL_SIZE;
            painter.line_segment(
                [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                Stroke::new(Self::LINE_WIDTH, Color32::BLACK),
            );
        }

        for (row, cells) in snapshot.board.iter().enumerate() {
            for (col, &mark) in cells.iter().enumerate() {
                let cell_rect = Rect::from_min_size(
                    egui::pos2(
                        rect.left() + col as f32 * Self::CELL_SIZE,
                        rect.top() + row as f32 * Self::CELL_SIZE,
                    ),
                    egui::vec2(Self::CELL_SIZE, Self::CELL_SIZE),
                );

                match mark {
                    Mark::X => Self::draw_x(painter, cell_rect),
                    Mark::O => Self::draw_o(painter, cell_rect),
                    Mark::Empty => {}
                }
            }
        }

        // Input is suppressed entirely once a winner is known.
        let may_move = snapshot.winner == GameStatus::InProgress
            && snapshot.current_player == self.player;

        if may_move {
            if let Some(hover_pos) = response.hover_pos() {
                let col = ((hover_pos.x - rect.left()) / Self::CELL_SIZE) as usize;
                let row = ((hover_pos.y - rect.top()) / Self::CELL_SIZE) as usize;

                if row < BOARD_SIZE
                    && col < BOARD_SIZE
                    && snapshot.board[row][col] == Mark::Empty
                {
                    let hover_rect = Rect::from_min_size(
                        egui::pos2(
                            rect.left() + col as f32 * Self::CELL_SIZE,
                            rect.top() + row as f32 * Self::CELL_SIZE,
                        ),
                        egui::vec2(Self::CELL_SIZE, Self::CELL_SIZE),
                    );

                    painter.rect_filled(
                        hover_rect,
                        0.0,
                        Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                    );

                    self.last_hover = Some((row, col));
                } else {
                    self.last_hover = None;
                }
            } else {
                self.last_hover = None;
            }

            if response.clicked()
                && let Some((row, col)) = self.last_hover
            {
                let _ = self.command_tx.send(ClientCommand::PlaceMark { row, col });
            }
        } else {
            self.last_hover = None;
        }
    }

    fn draw_x(painter: &Painter, rect: Rect) {
        let padding = rect.width() * 0.2;
        let stroke = Stroke::new(4.0, Color32::from_rgb(220, 50, 50));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(painter: &Painter, rect: Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = Stroke::new(4.0, Color32::from_rgb(50, 50, 220));

        painter.circle_stroke(rect.center(), radius, stroke);
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.shared_state.get_snapshot();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(self.status_line(&snapshot));

                if let Some(error) = self.shared_state.get_connection_error() {
                    ui.colored_label(Color32::from_rgb(200, 40, 40), error);
                }

                if let Some(notice) = self.shared_state.get_notice() {
                    ui.colored_label(Color32::from_rgb(200, 80, 0), notice);
                }

                ui.add_space(8.0);
                self.render_board(ui, &snapshot);
            });
        });

        // Redraw on a fixed cadence so polled state shows up without
        // input events.
        ctx.request_repaint_after(std::time::Duration::from_millis(
            Self::REPAINT_INTERVAL_MS,
        ));
    }
}
