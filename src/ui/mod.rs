//! Terminal rendering. Everything here reads a [`SceneView`]; nothing here
//! touches the game state.

pub mod chrome;
pub mod flappy_scene;

use crate::game::SceneView;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Smallest terminal the scene lays out sensibly in.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 16;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, scene: &SceneView) {
    let size = frame.size();

    if size.width < MIN_COLS || size.height < MIN_ROWS {
        frame.render_widget(Clear, size);
        let message = Paragraph::new(format!(
            "Terminal too small ({}x{}), need {}x{}",
            size.width, size.height, MIN_COLS, MIN_ROWS
        ))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
        frame.render_widget(message, size);
        return;
    }

    flappy_scene::render_flappy_scene(frame, size, scene);
}
