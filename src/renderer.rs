use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::app::{App, HostStatus};
use crate::config::{CELL_WIDTH, GLYPH_CELL, GridSize, THEME};
use crate::snake::{Cell, Snake};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders the full game frame from the app's current snapshot.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let state = app.state();
    let bounds = app.engine().bounds();

    let field = centered_field(frame.area(), bounds);
    let play_area = render_hud(frame, field, state);

    let block = Block::bordered()
        .border_style(Style::new().fg(THEME.border_fg))
        .style(Style::new().bg(THEME.play_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    if let Some(food) = state.food {
        render_food(frame, inner, bounds, food);
    }
    render_snake(frame, inner, bounds, &state.snake);

    if let Some(reason) = state.end_reason {
        render_game_over_menu(frame, play_area, state.score, reason);
        return;
    }

    match app.status() {
        HostStatus::Ready => render_start_menu(frame, play_area),
        HostStatus::Paused => render_pause_menu(frame, play_area),
        HostStatus::Running => {}
    }
}

/// Centers the bordered grid plus one HUD row inside `area`.
fn centered_field(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds.width.saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = bounds.height.saturating_add(3);

    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, field, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(column);

    field
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize, food: Cell) {
    let Some((x, y)) = logical_to_terminal(inner, bounds, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_CELL, Style::new().fg(THEME.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize, snake: &Snake) {
    let buffer = frame.buffer_mut();
    for (index, segment) in snake.segments().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, bounds, *segment) else {
            continue;
        };

        let mut style = Style::new().fg(segment_color(snake, index, *segment));
        if index == 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

/// Head, tail and body segments get distinct colors; a one-cell snake is all head.
fn segment_color(snake: &Snake, index: usize, segment: Cell) -> Color {
    if index == 0 {
        THEME.snake_head
    } else if segment == snake.tail() {
        THEME.snake_tail
    } else {
        THEME.snake_body
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.saturating_mul(CELL_WIDTH);
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::{logical_to_terminal, segment_color};
    use crate::config::{GridSize, THEME};
    use crate::snake::{Cell, Snake};

    #[test]
    fn cells_map_to_double_width_columns() {
        let inner = Rect::new(1, 1, 40, 20);

        assert_eq!(
            logical_to_terminal(inner, GridSize::DEFAULT, Cell::new(0, 0)),
            Some((1, 1))
        );
        assert_eq!(
            logical_to_terminal(inner, GridSize::DEFAULT, Cell::new(19, 19)),
            Some((39, 20))
        );
    }

    #[test]
    fn out_of_bounds_or_clipped_cells_are_skipped() {
        let inner = Rect::new(0, 0, 10, 5);

        assert_eq!(
            logical_to_terminal(inner, GridSize::DEFAULT, Cell::new(-1, 0)),
            None
        );
        assert_eq!(
            logical_to_terminal(inner, GridSize::DEFAULT, Cell::new(5, 0)),
            None
        );
    }

    #[test]
    fn head_tail_and_body_use_their_own_colors() {
        let snake = Snake::from_segments(vec![Cell::new(3, 3), Cell::new(2, 3), Cell::new(1, 3)])
            .expect("segments are non-empty");

        assert_eq!(segment_color(&snake, 0, Cell::new(3, 3)), THEME.snake_head);
        assert_eq!(segment_color(&snake, 1, Cell::new(2, 3)), THEME.snake_body);
        assert_eq!(segment_color(&snake, 2, Cell::new(1, 3)), THEME.snake_tail);
    }

    #[test]
    fn single_cell_snake_is_drawn_as_head() {
        let snake = Snake::new(Cell::new(10, 10));

        assert_eq!(snake.tail(), snake.head());
        assert_eq!(segment_color(&snake, 0, snake.head()), THEME.snake_head);
    }
}
