use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::round::{RoundState, DIGITS};
use super::view::{banner, can_redraw, confirm_control, digit_mark, ConfirmControl, DigitMark};
use crate::core::renderer::Renderer;

const STAR: &str = "★";

#[derive(Debug)]
pub struct PlayNineRenderer;

impl Renderer<RoundState> for PlayNineRenderer {
    fn render(frame: &mut Frame, state: &RoundState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(5), // Stars / controls / answer
                Constraint::Min(3),    // Numbers or game over
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let header = Paragraph::new("Play Nine")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(20),
                Constraint::Percentage(40),
            ])
            .split(chunks[1]);

        Self::render_stars(frame, row[0], state);
        Self::render_controls(frame, row[1], state);
        Self::render_answer(frame, row[2], state);

        match banner(state.outcome()) {
            Some(text) => Self::render_game_over(frame, chunks[2], text),
            None => Self::render_numbers(frame, chunks[2], state),
        }

        let help = if state.outcome().is_terminal() {
            "[Enter/N] Play Again  [Esc/Q] Quit"
        } else {
            "[1-9] Pick  [Bksp] Undo  [Enter] Check/Accept  [R] Redraw  [N] New  [Esc/Q] Quit"
        };
        let footer = Paragraph::new(help)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[3]);
    }
}

impl PlayNineRenderer {
    fn render_stars(frame: &mut Frame, area: Rect, state: &RoundState) {
        let stars = vec![STAR; state.target() as usize].join(" ");
        let widget = Paragraph::new(stars)
            .block(Block::default().borders(Borders::ALL).title(" Stars "))
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(widget, area);
    }

    fn render_controls(frame: &mut Frame, area: Rect, state: &RoundState) {
        let control = confirm_control(state);
        let control_style = match control {
            ConfirmControl::Check { enabled: true } => {
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
            }
            ConfirmControl::Check { enabled: false } => Style::default().fg(Color::DarkGray),
            ConfirmControl::Accept => {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            }
            ConfirmControl::Reject => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };
        let redraw_style = if can_redraw(state) {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let lines = vec![
            Line::from(Span::styled(format!("[ {} ]", control.glyph()), control_style)),
            Line::from(Span::styled(format!("↻ {}", state.redraws_remaining()), redraw_style)),
        ];
        let widget = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        frame.render_widget(widget, area);
    }

    fn render_answer(frame: &mut Frame, area: Rect, state: &RoundState) {
        let spans: Vec<Span> = state
            .selected()
            .iter()
            .map(|d| {
                Span::styled(format!(" {} ", d), Style::default().add_modifier(Modifier::BOLD))
            })
            .collect();
        let widget = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title(" Answer "));
        frame.render_widget(widget, area);
    }

    fn render_numbers(frame: &mut Frame, area: Rect, state: &RoundState) {
        let spans: Vec<Span> = DIGITS
            .map(|d| {
                let style = match digit_mark(state, d) {
                    DigitMark::Available => Style::default(),
                    DigitMark::Selected => Style::default().fg(Color::DarkGray),
                    DigitMark::Used => {
                        Style::default().fg(Color::Green).add_modifier(Modifier::CROSSED_OUT)
                    }
                };
                Span::styled(format!(" {} ", d), style)
            })
            .collect();
        let widget = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title(" Numbers "))
            .alignment(Alignment::Center);
        frame.render_widget(widget, area);
    }

    fn render_game_over(frame: &mut Frame, area: Rect, text: &str) {
        let lines = vec![
            Line::from(Span::styled(
                text.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("Press Enter to Play Again"),
        ];
        let widget = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        frame.render_widget(widget, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::play_nine::round::INITIAL_REDRAWS;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &RoundState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
        terminal.draw(|f| PlayNineRenderer::render(f, state)).unwrap();
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_star_count_matches_target() {
        for target in DIGITS {
            let screen = draw(&RoundState::with_parts(target, &[], INITIAL_REDRAWS));
            assert_eq!(screen.matches(STAR).count(), target as usize);
        }
    }

    #[test]
    fn test_in_progress_screen() {
        let mut state = RoundState::with_parts(4, &[7], 3);
        state.select(1);
        let screen = draw(&state);
        assert!(screen.contains("Play Nine"));
        assert!(screen.contains("[ = ]"));
        assert!(screen.contains("↻ 3"));
        assert!(screen.contains("Numbers"));
        assert!(!screen.contains("Play Again"));
    }

    #[test]
    fn test_game_over_banner() {
        let mut state = RoundState::with_parts(4, &[], 1);
        state.redraw(&mut rand::rng());
        let screen = draw(&state);
        assert!(screen.contains("You Lost!!"));
        assert!(screen.contains("Play Again"));
        assert!(!screen.contains("Numbers"));
    }
}
