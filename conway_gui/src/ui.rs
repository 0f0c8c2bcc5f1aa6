// ui.rs - Paints the latest published generation and forwards window resizes

use egui::{Align2, Color32, FontId, Rect, Sense, Vec2};
use tracing::info;

use crate::args::grid_dims;
use crate::GameOfLife;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.style.dead))
            .show(ctx, |ui| {
                let dims = grid_dims(ui.available_size(), self.style.cell_size);
                if dims != self.dims {
                    info!(width = dims.0, height = dims.1, "viewport resized");
                    self.dims = dims;
                    self.driver.resize(dims.0, dims.1);
                }

                let frame = self.driver.frame();
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
                let origin = response.rect.min;
                let cell = self.style.cell_size;

                // Dead cells are the panel background
                for (x, y) in frame.grid.alive_cells() {
                    let rect = Rect::from_min_size(
                        origin + Vec2::new(x as f32 * cell, y as f32 * cell),
                        Vec2::splat(cell),
                    );
                    painter.rect_filled(rect, 0.0, self.style.alive);
                }

                let status = format!(
                    "Generation: {}   Live: {}{}",
                    frame.generation,
                    frame.grid.live_count(),
                    if frame.settled { "   (settled)" } else { "" }
                );
                painter.text(
                    origin + Vec2::splat(4.0),
                    Align2::LEFT_TOP,
                    status,
                    FontId::monospace(12.0),
                    Color32::GRAY,
                );
            });
    }
}
