use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::THEME;
use crate::game::EndReason;

/// Draws the start screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 80, 50);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(Block::bordered().title(" start ").inner(popup));
    frame.render_widget(Block::bordered().title(" start "), popup);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE"))
            .alignment(Alignment::Center)
            .style(
                Style::new()
                    .fg(THEME.menu_title)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    frame.render_widget(
        Paragraph::new(vec![
            Line::from("[Enter] Start"),
            Line::from("[P] Pause"),
            Line::from("[Q] Quit"),
        ])
        .alignment(Alignment::Center),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("arrows / WASD to steer"))
            .alignment(Alignment::Center)
            .style(Style::new().fg(THEME.menu_footer)),
        footer_row,
    );
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 70, 30);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[P] Resume"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the game-over screen with the final score and the restart hint.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, score: u32, reason: EndReason) {
    let popup = centered_popup(area, 80, 45);
    frame.render_widget(Clear, popup);

    let title = match reason {
        EndReason::GridFilled => "YOU WIN",
        EndReason::WallCollision | EndReason::SelfCollision => "GAME OVER",
    };
    let lines = vec![
        Line::from(title),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(format!("Cause: {reason}")),
        Line::from(""),
        Line::from("[Enter] Play Again"),
        Line::from("[Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
