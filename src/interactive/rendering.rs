//! TUI rendering with ratatui
//!
//! One row of tiles per unlocked round, a message log and a status bar.

use super::app::{App, MessageStyle};
use crate::core::Verdict;
use crate::game::{NOT_A_WORD_NOTICE, Panel, PanelState, ROUNDS, RevealSource, SequencerStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: RevealSource>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Panels
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_panels(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.show_popup {
        render_popup(f);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 THRIDLE - three words, one letter each")
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

fn render_panels<R: RevealSource>(f: &mut Frame, app: &App<R>, area: Rect) {
    let block = Block::default()
        .title(" Rounds ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content = match app.sequencer.status() {
        SequencerStatus::Loading => {
            let text = app.sequencer.last_error().map_or_else(
                || "Fetching words...".to_string(),
                |err| format!("Could not start a game: {err}"),
            );
            vec![Line::from(text)]
        }
        SequencerStatus::Ready(_) | SequencerStatus::Complete => {
            let active = app.sequencer.active_round();
            let mut lines = Vec::new();
            for (round, panel) in app.sequencer.panels().iter().enumerate() {
                let cursor = (active == Some(round)).then_some(app.cursor);
                lines.push(panel_line(round, panel, cursor));
                lines.push(panel_notice(panel));
                lines.push(Line::from(""));
            }
            lines
        }
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn panel_line(round: usize, panel: &Panel, cursor: Option<usize>) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("Round {}/{ROUNDS}  ", round + 1),
        Style::default().fg(Color::Cyan),
    )];

    for (slot, letter) in panel.buffer().iter().enumerate() {
        let mut style = if slot == panel.revealed() {
            Style::default()
                .bg(Color::Green)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            verdict_style(panel.feedback().at(slot))
        };
        if cursor == Some(slot) {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
        }

        spans.push(Span::styled(format!(" {} ", letter.unwrap_or('_')), style));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::raw(" "));
    spans.push(Span::raw(panel.feedback().to_emoji()));
    Line::from(spans)
}

fn panel_notice(panel: &Panel) -> Line<'static> {
    match panel.state() {
        PanelState::Solved => Line::styled("solved", Style::default().fg(Color::Green)),
        PanelState::Validating => Line::styled("checking...", Style::default().fg(Color::Cyan)),
        PanelState::AwaitingGuess | PanelState::Retryable if panel.validity() == Some(false) => {
            Line::styled(NOT_A_WORD_NOTICE, Style::default().fg(Color::Red))
        }
        PanelState::AwaitingGuess | PanelState::Retryable => Line::from(""),
    }
}

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Neutral => Style::default().fg(Color::White),
        Verdict::Green => Style::default().bg(Color::Green).fg(Color::Black),
        Verdict::Yellow => Style::default().bg(Color::Yellow).fg(Color::Black),
        Verdict::Red => Style::default().bg(Color::Red).fg(Color::White),
    }
}

fn render_messages<R: RevealSource>(f: &mut Frame, app: &App<R>, area: Rect) {
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

fn render_status<R: RevealSource>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(50),
        ])
        .split(area);

    let round_text = match app.sequencer.status() {
        SequencerStatus::Loading => "Loading".to_string(),
        SequencerStatus::Ready(round) => format!("Round {}/{ROUNDS}", round + 1),
        SequencerStatus::Complete => "Complete".to_string(),
    };
    let round = Paragraph::new(round_text).alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let stats_text = format!(
        "Won: {}/{}",
        app.stats.games_won, app.stats.games_started
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Enter: Submit | ←/→: Move | ^R: Reset | ^N: New | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_popup(f: &mut Frame) {
    let area = centered(f.area(), 46, 7);
    let content = vec![
        Line::from(""),
        Line::styled(
            "🎉 Congratulations! You won the game! 🎉",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled("Press any key", Style::default().fg(Color::DarkGray)),
    ];

    let popup = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
