//! TUI rendering with ratatui
//!
//! Every view is drawn from the session on each frame.

use super::app::{App, MessageStyle};
use crate::core::{SwappedLetter, Tier};
use crate::game::MAX_THRESHOLD;
use crate::output::formatters::{badge_level, badge_rgb, pool_letters, swap_list};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Current word
            Constraint::Length(3), // Swaps
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_current_word(f, app, chunks[1]);
    render_swaps(f, app, chunks[2]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30), // History
            Constraint::Percentage(35), // Difficulty table
            Constraint::Percentage(35), // Controls
        ])
        .split(chunks[3]);

    render_history(f, app, main_chunks[0]);
    render_scores(f, app, main_chunks[1]);
    render_controls(f, app, main_chunks[2]);

    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔀 LETTER SWAP")
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

fn render_current_word<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let session = &app.session;
    let placeholder = || {
        Line::from(Span::styled(
            "No word selected",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    };

    let (original, highlighted, swapped) = match session.current_word() {
        Some(word) => (
            vec![
                Line::from(Span::styled(
                    word.to_uppercase(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(format!(
                    "Difficulty: {}",
                    session.current_difficulty().unwrap_or(0)
                )),
            ],
            vec![highlighted_line(&session.apply_swaps_highlighted(word))],
            vec![Line::from(Span::styled(
                session.apply_swaps(word).to_uppercase(),
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ))],
        ),
        None => (vec![placeholder()], vec![placeholder()], vec![placeholder()]),
    };

    for (chunk, title, content) in [
        (chunks[0], " Original Word ", original),
        (chunks[1], " Swapped Letters ", highlighted),
        (chunks[2], " Word with Swaps Applied ", swapped),
    ] {
        let paragraph = Paragraph::new(content)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        f.render_widget(paragraph, chunk);
    }
}

fn highlighted_line(letters: &[SwappedLetter]) -> Line<'static> {
    let spans: Vec<Span> = letters
        .iter()
        .map(|l| {
            let style = if l.changed {
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            };
            Span::styled(l.letter.to_uppercase().to_string(), style)
        })
        .collect();
    Line::from(spans)
}

fn render_swaps<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let swaps = Paragraph::new(swap_list(app.session.swaps()))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Current Letter Swaps ")
                .borders(Borders::ALL),
        );
    f.render_widget(swaps, area);
}

fn render_history<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let history = app.session.history();
    let items: Vec<ListItem> = if history.is_empty() {
        vec![ListItem::new("No words selected yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        history
            .iter()
            .enumerate()
            .rev()
            .map(|(i, word)| ListItem::new(format!("{:>3}. {word}", i + 1)))
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Previously Selected Words ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_scores<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let scores = app.session.scores();
    let max = scores.iter().map(|s| s.difficulty).max().unwrap_or(0);

    let items: Vec<ListItem> = if scores.is_empty() {
        vec![ListItem::new("No words available (all words have been selected)")
            .style(Style::default().fg(Color::DarkGray))]
    } else {
        scores
            .iter()
            .map(|scored| {
                let badge_style = match badge_level(scored.difficulty, max) {
                    None => Style::default().fg(Color::DarkGray),
                    Some(level) => {
                        let (r, g, b) = badge_rgb(level);
                        Style::default()
                            .fg(Color::Rgb(r, g, b))
                            .add_modifier(Modifier::BOLD)
                    }
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<18}", scored.word)),
                    Span::styled(format!("{:>3}", scored.difficulty), badge_style),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Available Words & Difficulty ({}) ", scores.len()))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_controls<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Letters, tier and buttons
            Constraint::Length(3), // Threshold gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    let session = &app.session;

    let tier_spans: Vec<Span> = Tier::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, &tier)| {
            let style = if tier == session.tier() {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            [
                Span::styled(format!(" {}:{tier} ", i + 1), style),
                Span::raw(" "),
            ]
        })
        .collect();

    let letters = if session.pool().is_empty() {
        "none left".to_string()
    } else {
        pool_letters(session.pool())
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Letters: "),
            Span::styled(letters, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(tier_spans),
        Line::from(""),
        control_line("s", "Create Letter Swap", session.can_create_swap()),
        control_line(
            "Enter",
            &format!("Choose Next Word (Difficulty ≤ {})", session.threshold()),
            session.is_selection_enabled(),
        ),
    ];

    let controls = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Game Controls ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(controls, chunks[0]);

    let threshold = session.threshold();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Desired Difficulty (←/→) ")
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent((threshold * 100 / MAX_THRESHOLD) as u16)
        .label(format!("{threshold} / {MAX_THRESHOLD}"));
    f.render_widget(gauge, chunks[1]);

    render_messages(f, app, chunks[2]);
}

fn control_line(key: &str, label: &str, enabled: bool) -> Line<'static> {
    let style = if enabled {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    };
    Line::from(vec![
        Span::styled(format!("[{key}] "), Style::default().fg(Color::Yellow)),
        Span::styled(label.to_string(), style),
    ])
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
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

fn render_status<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let session = &app.session;

    let tier = Paragraph::new(format!("Tier: {}", session.tier())).alignment(Alignment::Center);
    f.render_widget(tier, chunks[0]);

    let shown = Paragraph::new(format!(
        "Shown: {}/{}",
        session.history().len(),
        session.table().len()
    ))
    .alignment(Alignment::Center);
    f.render_widget(shown, chunks[1]);

    let swaps = Paragraph::new(format!("Swaps: {}", session.swaps().len()))
        .alignment(Alignment::Center);
    f.render_widget(swaps, chunks[2]);

    let help = Paragraph::new("q: Quit | s: Swap | ←/→: Difficulty | Enter: Next | 1-3: Tier")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
