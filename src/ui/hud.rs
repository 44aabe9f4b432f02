//! Text overlays around and on top of the play field: frame layout, status
//! bar, info panel, start and game-over panels, live score.

use crate::core::session::{Overlays, Phase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const ACCENT: Color = Color::Cyan;
const HOT: Color = Color::Magenta;

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Play field, inside the outer border.
    pub content: Rect,
    /// Two lines under the play field.
    pub status_bar: Rect,
    /// Right column with its own border.
    pub info_panel: Rect,
}

/// ```text
/// ┌─ Cyber Flap ────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [play field]                  │  [info]     │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(frame: &mut Frame, area: Rect, info_panel_width: u16) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Cyber Flap ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Status text and controls for the current phase.
pub fn status_for(phase: Phase, score: u32) -> (String, Color, &'static [(&'static str, &'static str)]) {
    match phase {
        Phase::NotStarted => (
            "Press Space or S to start".to_string(),
            Color::Yellow,
            &[("[Space/S]", "Start"), ("[Q]", "Quit")],
        ),
        Phase::Playing => (
            format!("Score: {}", score),
            Color::Green,
            &[("[Space/Up/Enter/Click]", "Flap"), ("[Q]", "Quit")],
        ),
        Phase::GameOver => (
            "Crashed!".to_string(),
            Color::Red,
            &[("[R/Space]", "Restart"), ("[Q]", "Quit")],
        ),
    }
}

/// Two lines: status message, then controls.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        frame.render_widget(
            Paragraph::new(controls_line(controls)).alignment(Alignment::Center),
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

fn controls_line<'a>(controls: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

pub fn render_info_panel(frame: &mut Frame, area: Rect, score: u32, overlays: &Overlays) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled(
            " CYBER FLAP ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", label),
            Span::styled(overlays.best_score.to_string(), Style::default().fg(HOT)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Large score at the top of the play field while playing.
pub fn render_live_score(frame: &mut Frame, area: Rect, score: u32) {
    if area.height == 0 {
        return;
    }
    let text = Paragraph::new(Span::styled(
        format!(" {} ", score),
        Style::default()
            .fg(Color::White)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(text, Rect { height: 1, ..area });
}

pub fn start_lines(best: u32) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "CYBER FLAP",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Flap through the neon gaps",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(format!("Best: {}", best), Style::default().fg(HOT))),
        Line::from(""),
        Line::from(Span::styled("[S] Start", Style::default().fg(Color::DarkGray))),
    ]
}

pub fn game_over_lines(final_score: u32, best: u32) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(HOT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}", final_score),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(format!("Best: {}", best), Style::default().fg(ACCENT))),
        Line::from(""),
        Line::from(Span::styled("[R] Restart", Style::default().fg(Color::DarkGray))),
    ]
}

/// Centered bordered panel over the play field. Only the panel itself is
/// cleared so the scene stays visible around it.
pub fn render_panel(frame: &mut Frame, area: Rect, border: Color, lines: Vec<Line<'static>>) {
    let height = (lines.len() as u16 + 2).min(area.height);
    let width = 30u16.min(area.width);
    let panel = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Draw whichever overlays are visible.
pub fn render_overlays(frame: &mut Frame, area: Rect, score: u32, overlays: &Overlays) {
    if overlays.score_visible {
        render_live_score(frame, area, score);
    }
    if overlays.start_visible {
        render_panel(frame, area, ACCENT, start_lines(overlays.best_score));
    }
    if overlays.game_over_visible {
        render_panel(
            frame,
            area,
            HOT,
            game_over_lines(overlays.final_score, overlays.best_score),
        );
    }
}
