use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::THEME;
use crate::game::GameState;

/// Renders the one-line HUD below the grid and returns the play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let fields = hud_fields(state);
    let line = if line_width(&fields) <= usize::from(hud_area.width) {
        hud_line(&fields)
    } else {
        // Narrow terminal: score only.
        hud_line(&fields[..1])
    };

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        hud_area,
    );

    play_area
}

fn hud_fields(state: &GameState) -> [(&'static str, String); 3] {
    [
        ("Score", state.score.to_string()),
        ("Length", state.snake.len().to_string()),
        ("Tick", format!("{}ms", state.tick_interval_ms)),
    ]
}

const SEPARATOR: &str = "  ·  ";

fn line_width(fields: &[(&str, String)]) -> usize {
    let content: usize = fields
        .iter()
        .map(|(label, value)| label.width() + 1 + value.width())
        .sum();
    content + SEPARATOR.width() * fields.len().saturating_sub(1)
}

fn hud_line(fields: &[(&'static str, String)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(fields.len() * 4);
    for (index, (label, value)) in fields.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(SEPARATOR, Style::new().fg(THEME.hud_label)));
        }
        spans.push(Span::styled(format!("{label} "), Style::new().fg(THEME.hud_label)));
        spans.push(Span::styled(value.clone(), Style::new().fg(THEME.hud_value)));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::{hud_fields, line_width};
    use crate::game::GameEngine;

    #[test]
    fn hud_reports_score_length_and_interval() {
        let state = GameEngine::with_seed(1).reset();

        let fields = hud_fields(&state);

        assert_eq!(fields[0], ("Score", "0".to_string()));
        assert_eq!(fields[1], ("Length", "1".to_string()));
        assert_eq!(fields[2], ("Tick", "200ms".to_string()));
    }

    #[test]
    fn width_counts_separator_as_display_columns() {
        let fields = [("Score", "12".to_string()), ("Length", "3".to_string())];

        // "Score 12" + "  ·  " + "Length 3"
        assert_eq!(line_width(&fields), 8 + 5 + 8);
    }
}
