use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{CELL_WIDTH, GLYPH_BLOCK, GLYPH_EMPTY, GridSize, Theme};
use crate::game::GameState;
use crate::random::RandomSource;
use crate::session::Session;
use crate::snake::Position;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::popup::{centered_rect, render_status_popup};

const HUD_HEIGHT: u16 = 2;

/// Renders the full frame from the session's current state.
pub fn render<R: RandomSource + Clone>(frame: &mut Frame<'_>, session: &Session<R>, theme: &Theme) {
    let state = session.state();
    let [board_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(HUD_HEIGHT)]).areas(frame.area());

    let (board_width, board_height) = board_extent(state.bounds());
    let board = centered_rect(
        board_area,
        board_width.min(board_area.width),
        board_height.min(board_area.height),
    );

    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_field(frame, inner, state.bounds(), theme);
    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    render_hud(
        frame,
        hud_area,
        HudInfo {
            score: state.score,
            length: state.snake.len(),
            best_score: session.best_score(),
        },
        theme,
    );

    if let Some(message) = session.status_message() {
        render_status_popup(frame, board_area, &message, theme);
    }
}

/// Terminal columns and rows taken by the bordered board.
#[must_use]
pub fn board_extent(bounds: GridSize) -> (u16, u16) {
    let side = bounds.side();
    (side * CELL_WIDTH + 2, side + 2)
}

fn render_field(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize, theme: &Theme) {
    let style = Style::new().fg(theme.grid_line).bg(theme.field_bg);
    let side = i32::from(bounds.side());
    let buffer = frame.buffer_mut();

    for y in 0..side {
        for x in 0..side {
            if let Some((column, row)) = cell_to_terminal(inner, bounds, Position { x, y }) {
                buffer.set_string(column, row, GLYPH_EMPTY, style);
            }
        }
    }
}

fn render_food<R: RandomSource + Clone>(
    frame: &mut Frame<'_>,
    inner: Rect,
    state: &GameState<R>,
    theme: &Theme,
) {
    let Some(food) = state.food else {
        return;
    };
    let Some((x, y)) = cell_to_terminal(inner, state.bounds(), food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_BLOCK, Style::new().fg(theme.food).bg(theme.field_bg));
}

fn render_snake<R: RandomSource + Clone>(
    frame: &mut Frame<'_>,
    inner: Rect,
    state: &GameState<R>,
    theme: &Theme,
) {
    let buffer = frame.buffer_mut();
    for (index, segment) in state.snake.segments().enumerate() {
        let Some((x, y)) = cell_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        let style = if index == 0 {
            Style::new()
                .fg(theme.snake_head)
                .bg(theme.field_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme.snake_body).bg(theme.field_bg)
        };
        buffer.set_string(x, y, GLYPH_BLOCK, style);
    }
}

/// Maps a grid cell to the top-left terminal coordinate of its glyph, or
/// `None` when it falls outside the drawable area.
#[must_use]
pub fn cell_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use crate::clock::TickClock;
    use crate::config::{GridSize, THEME_PAPER};
    use crate::game::GameState;
    use crate::random::SequenceSource;
    use crate::session::{GAME_OVER_MESSAGE, Session};
    use crate::snake::Position;

    use super::{board_extent, cell_to_terminal, render};

    fn grid(side: u16) -> GridSize {
        GridSize::new(side).expect("valid grid size")
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn cells_are_two_columns_wide() {
        let inner = Rect::new(3, 1, 20, 10);
        let bounds = grid(10);

        assert_eq!(cell_to_terminal(inner, bounds, Position::new(0, 0)), Some((3, 1)));
        assert_eq!(cell_to_terminal(inner, bounds, Position::new(4, 2)), Some((11, 3)));
        assert_eq!(cell_to_terminal(inner, bounds, Position::new(10, 0)), None);
    }

    #[test]
    fn clipped_cells_are_skipped() {
        let inner = Rect::new(0, 0, 5, 2);
        let bounds = grid(10);

        assert_eq!(cell_to_terminal(inner, bounds, Position::new(1, 1)), Some((2, 1)));
        assert_eq!(cell_to_terminal(inner, bounds, Position::new(2, 1)), None);
        assert_eq!(cell_to_terminal(inner, bounds, Position::new(0, 2)), None);
    }

    #[test]
    fn board_extent_includes_border() {
        assert_eq!(board_extent(grid(20)), (42, 22));
    }

    #[test]
    fn frame_shows_score_and_game_over_popup() {
        let state = GameState::new(grid(6), SequenceSource::new(vec![0.0]));
        let mut dead = state.clone();
        dead.alive = false;
        dead.score = 2;
        let session = Session::new(dead, TickClock::new(std::time::Duration::from_millis(140)), 5);

        let mut terminal = Terminal::new(TestBackend::new(60, 16)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, &session, &THEME_PAPER))
            .expect("draw should succeed");

        let text = buffer_text(&terminal);
        assert!(text.contains("Score 2"));
        assert!(text.contains("Best 5"));
        assert!(text.contains(GAME_OVER_MESSAGE));
    }
}
