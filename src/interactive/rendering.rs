//! TUI rendering with ratatui
//!
//! Visualizations for the lock code interface.

use super::app::{App, MessageStyle, Theme};
use crate::core::DigitMark;
use crate::round::GuessRecord;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Colours for one theme
struct Palette {
    accent: Color,
    text: Color,
    muted: Color,
}

const fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            accent: Color::Magenta,
            text: Color::White,
            muted: Color::DarkGray,
        },
        Theme::Light => Palette {
            accent: Color::Blue,
            text: Color::Black,
            muted: Color::Gray,
        },
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // History
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[1]);

    render_history(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let colors = palette(app.theme);
    let header = Paragraph::new("🔐 CODECRACK - Crack the 4-digit lock")
        .style(
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(colors.accent)),
        );
    f.render_widget(header, area);
}

fn tile_style(mark: DigitMark) -> Style {
    let bg = match mark {
        DigitMark::Exact => Color::Green,
        DigitMark::Present => Color::Blue,
        DigitMark::Absent => Color::DarkGray,
    };
    Style::default()
        .bg(bg)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn record_line(index: usize, record: &GuessRecord, colors: &Palette) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{index:>3}. "),
        Style::default().fg(colors.muted),
    )];

    for (digit, mark) in record.digits_with_marks() {
        spans.push(Span::styled(format!(" {digit} "), tile_style(mark)));
        spans.push(Span::raw(" "));
    }

    let feedback = record.feedback();
    spans.push(Span::styled(
        format!(
            "  {} exact  {} misplaced  {} absent",
            feedback.exact_matches, feedback.present_wrong_position, feedback.absent
        ),
        Style::default().fg(colors.text),
    ));

    Line::from(spans)
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let colors = palette(app.theme);
    let round = app.session.round();

    let content: Vec<Line> = if let Some(secret) = round.revealed_secret() {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "You successfully cracked the code",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::raw("The code was "),
                Span::styled(
                    secret.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from("Press 'n' for a new round"),
        ]
    } else if round.history().is_empty() {
        vec![Line::from(Span::styled(
            "No guesses yet",
            Style::default().fg(colors.muted),
        ))]
    } else {
        // Newest at the bottom, keep the tail visible
        let visible = usize::from(area.height.saturating_sub(2));
        let history = round.history();
        let skip = history.len().saturating_sub(visible);
        history
            .iter()
            .enumerate()
            .skip(skip)
            .map(|(i, record)| record_line(i + 1, record, &colors))
            .collect()
    };

    let title = if round.is_won() {
        " 🎉 Cracked! 🎉 "
    } else {
        " Guesses "
    };

    let paragraph = Paragraph::new(content)
        .alignment(if round.is_won() {
            Alignment::Center
        } else {
            Alignment::Left
        })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(colors.text)),
        );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let colors = palette(app.theme);
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(colors.text),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let colors = palette(app.theme);
    let (title, color) = match (app.session.round().is_won(), app.session.error()) {
        (true, _) => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new round or 'q' to quit ".to_string(),
            Color::Green,
        ),
        (false, Some(err)) => (format!(" {err} "), Color::Red),
        (false, None) => (
            " Enter 4 different digits | Enter to submit ".to_string(),
            colors.accent,
        ),
    };

    // Show typed digits followed by placeholders
    let mut slots: Vec<Span> = app
        .input_buffer
        .chars()
        .map(|c| Span::raw(format!(" {c} ")))
        .collect();
    while slots.len() < crate::core::CODE_LENGTH && !app.session.round().is_won() {
        slots.push(Span::styled(" _ ", Style::default().fg(colors.muted)));
    }

    let input = Paragraph::new(Line::from(slots))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let colors = palette(app.theme);
    let round = app.session.round();

    let mode = if round.is_won() { "Won" } else { "Playing" };
    let text = format!(
        "Round {} | {} | Guesses: {} | Enter: Submit  n: New  t: Theme  q: Quit",
        app.session.rounds_started(),
        mode,
        round.history().len()
    );

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors.muted));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;
    use crate::round::{RoundState, Session};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_string(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_with_secret(secret: &str) -> App {
        let round = RoundState::with_secret(Code::parse(secret).unwrap());
        App::new(Session::from_round(StdRng::seed_from_u64(2), round))
    }

    #[test]
    fn renders_history_counts() {
        let mut app = app_with_secret("1234");
        app.input_buffer = "1243".to_string();
        app.submit_guess();

        let screen = render_to_string(&app);
        assert!(screen.contains("2 exact"));
        assert!(screen.contains("Guesses: 1"));
    }

    #[test]
    fn secret_hidden_while_playing() {
        let app = app_with_secret("9053");
        let screen = render_to_string(&app);
        assert!(!screen.contains("9053"));
        assert!(screen.contains("No guesses yet"));
    }

    #[test]
    fn win_screen_reveals_code() {
        let mut app = app_with_secret("9053");
        app.input_buffer = "9053".to_string();
        app.submit_guess();

        let screen = render_to_string(&app);
        assert!(screen.contains("You successfully cracked the code"));
        assert!(screen.contains("9053"));
    }
}
