//! Window chrome around the play field: the outer border, the two status
//! lines, the info panel border, and the idle/crash banner.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TITLE: &str = " Flappy ";
const BORDER_COLOR: Color = Color::Cyan;
const INFO_PANEL_WIDTH: u16 = 22;
const STATUS_LINES: u16 = 2;
const BANNER_HEIGHT: u16 = 4;
const CONTROLS: [(&str, &str); 3] = [("[Space/Click]", "Flap"), ("[R]", "Restart"), ("[Q]", "Quit")];

/// Areas inside the outer border.
pub struct SceneLayout {
    pub play_field: Rect,
    /// Status message and control legend, under the play field.
    pub status: Rect,
    pub info: Rect,
}

/// Draw the outer border and split its inside.
///
/// ```text
/// ┌─ Flappy ────────────────────────┬─ Info ──────┐
/// │   [play field]                  │  [info]     │
/// │ [status message]                │             │
/// │ [controls]                      │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn frame_scene(frame: &mut Frame, area: Rect) -> SceneLayout {
    frame.render_widget(Clear, area);

    let border = Block::default()
        .title(TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_COLOR));
    let inner = border.inner(area);
    frame.render_widget(border, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);

    let left = columns[0];
    let status_height = STATUS_LINES.min(left.height);
    SceneLayout {
        play_field: Rect {
            height: left.height - status_height,
            ..left
        },
        status: Rect {
            y: left.y + left.height - status_height,
            height: status_height,
            ..left
        },
        info: columns[1],
    }
}

pub fn render_status(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let legend: Vec<Span> = CONTROLS
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            [
                Span::raw(if i == 0 { "" } else { "  " }),
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {}", action), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();

    let lines = vec![
        Line::from(Span::styled(message, Style::default().fg(color))),
        Line::from(legend),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Border of the info panel. Returns the area inside it.
pub fn info_border(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Banner across the bottom of the play field. Only the banner's own rows
/// are cleared, so the poles and bird stay visible above it.
pub fn render_banner(
    frame: &mut Frame,
    area: Rect,
    color: Color,
    title: &str,
    message: &str,
    hint: &str,
) {
    if area.height < BANNER_HEIGHT {
        return;
    }
    let banner_area = Rect {
        y: area.y + area.height - BANNER_HEIGHT,
        height: BANNER_HEIGHT,
        ..area
    };

    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let mut headline = vec![Span::styled(
        title,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if !message.is_empty() {
        headline.push(Span::raw(" - "));
        headline.push(Span::styled(message, Style::default().fg(Color::White)));
    }

    let lines = vec![
        Line::from(headline),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
