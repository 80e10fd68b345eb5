use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;

const CONTROLS_HINT: &str = "arrows/WASD move  space pause  r restart  q quit";

/// Values shown on the HUD rows.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct HudInfo {
    pub score: u32,
    pub length: usize,
    pub best_score: u32,
}

/// Renders the score row and the controls hint into a two-row `area`.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, info: HudInfo, theme: &Theme) {
    let score_row = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(score_line(info, theme)).alignment(Alignment::Center),
        score_row,
    );

    if area.height > 1 {
        let hint_row = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(CONTROLS_HINT)
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.hud_muted)),
            hint_row,
        );
    }
}

fn score_line(info: HudInfo, theme: &Theme) -> Line<'static> {
    let label = Style::default().fg(theme.hud_muted);
    let value = Style::default()
        .fg(theme.hud_score)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled("Score ", label),
        Span::styled(info.score.to_string(), value),
        Span::styled("   Length ", label),
        Span::styled(info.length.to_string(), value),
        Span::styled("   Best ", label),
        Span::styled(info.best_score.max(info.score).to_string(), value),
    ])
}
