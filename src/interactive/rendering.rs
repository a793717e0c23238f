//! TUI rendering with ratatui
//!
//! Visualizations for the practice game interface.

use super::app::{App, MessageStyle};
use crate::core::{Fragment, Role};
use crate::game::{GameState, PracticeEntry, ScoreEvent, Trial};
use crate::output::formatters::format_latency;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Progress and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

const fn role_color(role: Role) -> Color {
    match role {
        Role::Prefix => Color::Blue,
        Role::Root => Color::Green,
        Role::Suffix => Color::Magenta,
    }
}

fn fragment_span(fragment: &Fragment) -> Span<'static> {
    Span::styled(
        fragment.text().to_string(),
        Style::default()
            .fg(role_color(fragment.role()))
            .add_modifier(Modifier::BOLD),
    )
}

fn rounded(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 MORPHEME LAB - Practice")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    match (app.game.state(), app.game.trial()) {
        (GameState::InTrial, Some(trial)) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(8), // Word and slots
                    Constraint::Min(5),    // Tile bank
                ])
                .split(area);
            render_slots(f, trial, chunks[0]);
            render_bank(f, app, trial, chunks[1]);
        }
        (GameState::Feedback, _) => {
            if let (Some(event), Some(entry)) = (app.game.events().last(), app.game.entry()) {
                render_feedback(f, event, entry, area);
            }
        }
        (GameState::Done, _) => render_summary(f, app, area),
        _ => {
            let paragraph = Paragraph::new("No active trial. Press n to start.")
                .block(rounded(" Practice "));
            f.render_widget(paragraph, area);
        }
    }
}

fn render_slots(f: &mut Frame, trial: &Trial, area: Rect) {
    let required = trial.required();
    let mut lines = vec![
        Line::from(Span::styled(
            trial.word().to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for role in Role::ALL {
        let content = trial.placed(role).map_or_else(
            || Span::styled("____", Style::default().fg(Color::DarkGray)),
            |tile| fragment_span(&Fragment::new(tile.text(), role)),
        );
        let mut spans = vec![Span::raw(format!("{:<8}", role.label())), content];
        if !*required.get(role) {
            spans.push(Span::styled(
                "  (optional)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(rounded(" Slots "));
    f.render_widget(paragraph, area);
}

fn render_bank(f: &mut Frame, app: &App, trial: &Trial, area: Rect) {
    let items: Vec<ListItem> = trial
        .bank()
        .enumerate()
        .map(|(i, tile)| {
            let selected = app.selected == Some(i);
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let mut spans = vec![
                Span::styled(format!(" {} ", i + 1), Style::default().fg(Color::Cyan)),
                Span::styled(tile.text().to_string(), style),
            ];
            if app.hint_dots {
                spans.push(Span::styled(
                    " •",
                    Style::default().fg(role_color(tile.fragment.role())),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let bank = List::new(items).block(rounded(" Tiles "));
    f.render_widget(bank, area);
}

fn render_feedback(f: &mut Frame, event: &ScoreEvent, entry: &PracticeEntry, area: Rect) {
    let (verdict, color) = if event.correct {
        ("✅ Correct!", Color::Green)
    } else {
        ("❌ Not quite.", Color::Red)
    };
    let mut lines = vec![
        Line::from(Span::styled(
            verdict,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for fragment in &entry.morphemes {
        let role = fragment.role();
        let ok = *event.per_slot.get(role);
        let placed = event.placed.get(role).clone().unwrap_or_else(|| "—".to_string());
        lines.push(Line::from(vec![
            Span::styled(
                if ok { "✓ " } else { "✗ " },
                Style::default().fg(if ok { Color::Green } else { Color::Red }),
            ),
            Span::raw(format!("{:<8}{placed:<10} ", role.label())),
            fragment_span(fragment),
            Span::styled(
                fragment.meaning().map(|m| format!(" = {m}")).unwrap_or_default(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    lines.push(Line::from(""));
    let mut word_line: Vec<Span> = Vec::new();
    for (i, fragment) in entry.morphemes.iter().enumerate() {
        if i > 0 {
            word_line.push(Span::raw("-"));
        }
        word_line.push(fragment_span(fragment));
    }
    word_line.push(Span::styled(
        format!("   {}", format_latency(event.latency_ms)),
        Style::default().fg(Color::DarkGray),
    ));
    if event.hint_used {
        word_line.push(Span::styled(
            "  (hint used)",
            Style::default().fg(Color::Yellow),
        ));
    }
    lines.push(Line::from(word_line));

    if !entry.families.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Word family: "),
            Span::styled(entry.families.join(", "), Style::default().fg(Color::Cyan)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(rounded(" Feedback "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_summary(f: &mut Frame, app: &App, area: Rect) {
    let summary = app.game.summary();
    let mut lines = vec![
        Line::from(Span::styled(
            "🎉 Session complete!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Items:        {}", summary.items)),
        Line::from(format!("Correct:      {}", summary.correct)),
        Line::from(format!("Accuracy:     {}%", summary.accuracy_pct)),
        Line::from(format!(
            "Avg latency:  {}",
            format_latency(summary.avg_latency_ms)
        )),
        Line::from(""),
    ];

    for event in app.game.events() {
        let mark = if event.correct { "✓" } else { "✗" };
        lines.push(Line::from(format!(
            "{mark} {:>2}. {:<16} {}",
            event.trial,
            event.word,
            format_latency(event.latency_ms)
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(rounded(" Summary "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.game.queue().len();
    let done = app.game.events().len();
    let progress_pct = if total == 0 {
        0
    } else {
        ((done * 100 / total).min(100)) as u16
    };

    let gauge = Gauge::default()
        .block(rounded(" Progress "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!(
            "{done}/{total} words | score {}",
            app.game.score()
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(area);

    let state = Paragraph::new(format!("State: {}", app.game.state())).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let help_text = match app.game.state() {
        GameState::InTrial => {
            "1-9: pick tile | p/r/s: drop or clear slot | h: hint | c: check | d: dots | q: quit"
        }
        GameState::Feedback => "Enter/n: next word | d: dots | q: quit",
        GameState::Done | GameState::Ready => "n: play again | q: quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::LoadedGame;
    use crate::game::Game;
    use crate::practice::seed_entries;
    use crate::store::Store;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::backend::TestBackend;
    use ratatui::{Terminal, buffer::Buffer};

    fn buffer_text(buffer: &Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_trial_board() {
        let loaded = LoadedGame {
            game: Game::new(seed_entries()),
            resumed: false,
            fallbacks: 0,
        };
        let app = App::with_rng(loaded, Store::in_memory(), StdRng::seed_from_u64(5));
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("UNBELIEVABLE"));
        assert!(text.contains("Prefix"));
        assert!(text.contains("0/3 words"));
    }
}
