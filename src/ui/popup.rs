use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;

/// Draws `message` in a bordered box centered over `area`.
pub fn render_status_popup(frame: &mut Frame<'_>, area: Rect, message: &str, theme: &Theme) {
    let width = u16::try_from(message.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .min(area.width);
    let popup = centered_rect(area, width, 3.min(area.height));
    frame.render_widget(Clear, popup);

    frame.render_widget(
        Paragraph::new(Line::from(message))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.status_fg)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::bordered().border_style(Style::default().fg(theme.border_fg))),
        popup,
    );
}

/// Returns a `width` x `height` rectangle centered inside `area`.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::centered_rect;

    #[test]
    fn centered_rect_sits_in_the_middle() {
        let area = Rect::new(0, 0, 40, 20);

        let rect = centered_rect(area, 10, 4);

        assert_eq!(rect.width, 10);
        assert_eq!(rect.height, 4);
        assert_eq!(rect.x, 15);
        assert_eq!(rect.y, 8);
    }
}
