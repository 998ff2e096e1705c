//! UI rendering for the Flappy scene.

use crate::game::{GamePhase, SceneView};
use crate::ui::chrome::{frame_scene, info_border, render_banner, render_status};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What occupies one terminal cell of the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Pole,
    Bird,
}

/// Sample the scene onto a `cols` × `rows` grid.
///
/// A cell belongs to a pole when its center lies inside the pole. The bird
/// is smaller than most cells at typical terminal sizes, so it also always
/// claims the cell under its center.
pub fn rasterize(scene: &SceneView, cols: usize, rows: usize) -> Vec<Vec<Cell>> {
    let mut grid = vec![vec![Cell::Empty; cols]; rows];
    if cols == 0 || rows == 0 {
        return grid;
    }

    let cell_w = scene.area.width / cols as f64;
    let cell_h = scene.area.height / rows as f64;

    for (r, row) in grid.iter_mut().enumerate() {
        let y = (r as f64 + 0.5) * cell_h;
        for (c, cell) in row.iter_mut().enumerate() {
            let x = (c as f64 + 0.5) * cell_w;
            if scene.bird.contains(x, y) {
                *cell = Cell::Bird;
            } else if scene.poles.iter().any(|pole| pole.contains(x, y)) {
                *cell = Cell::Pole;
            }
        }
    }

    if scene.bird.width > 0.0 {
        let center_x = scene.bird.x + scene.bird.width / 2.0;
        let center_y = scene.bird.y + scene.bird.height / 2.0;
        let col = ((center_x / cell_w).floor().max(0.0) as usize).min(cols - 1);
        let row = ((center_y / cell_h).floor().max(0.0) as usize).min(rows - 1);
        grid[row][col] = Cell::Bird;
    }

    grid
}

/// Render the Flappy scene.
pub fn render_flappy_scene(frame: &mut Frame, area: Rect, scene: &SceneView) {
    let layout = frame_scene(frame, area);

    render_play_area(frame, layout.play_field, scene);
    render_status_line(frame, layout.status, scene);
    render_info_panel(frame, layout.info, scene);

    match scene.phase {
        GamePhase::Idle => render_banner(
            frame,
            layout.play_field,
            Color::Yellow,
            "FLAPPY",
            "hold to climb, release to fall",
            "[R] or [Enter] to start",
        ),
        GamePhase::GameOver => render_banner(
            frame,
            layout.play_field,
            Color::Red,
            "CRASH!",
            &format!("You passed {} poles.", scene.score),
            "[R] or [Enter] to play again",
        ),
        GamePhase::Playing => {}
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, scene: &SceneView) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let bird_glyph = if scene.flapping { "▲" } else { "►" };
    let bird_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let pole_style = Style::default().fg(Color::Green);

    let lines: Vec<Line> = rasterize(scene, width, height)
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|cell| match cell {
                    Cell::Bird => Span::styled(bird_glyph, bird_style),
                    Cell::Pole => Span::styled("█", pole_style),
                    Cell::Empty => Span::raw(" "),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_line(frame: &mut Frame, area: Rect, scene: &SceneView) {
    let (text, color) = match scene.phase {
        GamePhase::Idle => ("Press R to start!".to_string(), Color::Yellow),
        GamePhase::Playing => (format!("Score: {}", scene.score), Color::Green),
        GamePhase::GameOver => ("Game over".to_string(), Color::Red),
    };
    render_status(frame, area, &text, color);
}

fn render_info_panel(frame: &mut Frame, area: Rect, scene: &SceneView) {
    let inner = info_border(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let speed = scene
        .speed
        .map(|speed| speed.to_string())
        .unwrap_or_default();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                scene.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::styled(speed, Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
    ];

    if scene.restart_visible {
        lines.push(Line::from(Span::styled(
            " [R] Restart",
            Style::default().fg(Color::Cyan),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
