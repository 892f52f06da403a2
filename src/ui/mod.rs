mod account_card;
mod block_card;
mod helper;
mod tx_card;

use account_card::draw_account_card;
use block_card::draw_block_card;
use helper::*;
use tx_card::draw_tx_card;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Notice};
use crate::rpc::QueryResult;

const TITLE: &str = "Alkebuleum Block Explorer";
const SUBTITLE: &str = "Search for a block, transaction hash, or address";
const NAV_HELP: &str = "Enter search • Esc quit";

pub fn draw(frame: &mut Frame, app: &App) {
    let area = padded_rect(frame.area(), 1);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Length(1), // Subtitle
        Constraint::Length(1), // Spacing
        Constraint::Length(3), // Search bar
        Constraint::Length(2), // Loading / notice
        Constraint::Min(4),    // Result card
        Constraint::Length(3), // Latest block footer
        Constraint::Length(1), // Help
    ])
    .split(area);

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let subtitle = Paragraph::new(SUBTITLE)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[1]);

    draw_search_bar(frame, app, centered_rect(80, chunks[3]));
    draw_status(frame, app, chunks[4]);
    draw_result(frame, app, chunks[5]);
    draw_footer(frame, app, chunks[6]);

    let help = Paragraph::new(NAV_HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[7]);
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" 🔍 Search ")
        .title_style(Style::default().fg(Color::Cyan));

    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = app.search_input.visual_scroll(inner_width);

    let display_text = if app.search_input.value().is_empty() {
        Span::styled(
            "Enter block number, transaction hash, or address",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(app.search_input.value(), Style::default().fg(Color::White))
    };

    let input = Paragraph::new(display_text)
        .block(block)
        .scroll((0, scroll as u16));
    frame.render_widget(input, area);

    let cursor_x = area.x + 1 + (app.search_input.visual_cursor().saturating_sub(scroll)) as u16;
    let cursor_y = area.y + 1;
    if cursor_x < area.x + area.width.saturating_sub(1) {
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Loading line first, then any notice raised meanwhile
fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    if let Some(msg) = &app.loading {
        lines.push(Line::from(format!("⠋ {msg}")).fg(Color::Yellow));
    }
    match &app.notice {
        Some(Notice::Info(msg)) => lines.push(Line::from(format!("ℹ {msg}")).fg(Color::Yellow)),
        Some(Notice::Error(msg)) => lines.push(Line::from(format!("❌ {msg}")).fg(Color::Red)),
        None => {}
    }

    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(status, area);
}

fn draw_result(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = app.native_symbol();
    match &app.result {
        Some(QueryResult::Block(block)) => draw_block_card(frame, area, block),
        Some(QueryResult::Transaction(tx)) => draw_tx_card(frame, area, tx, symbol),
        Some(QueryResult::Account(account)) => draw_account_card(frame, area, account, symbol),
        None => {
            let empty = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, area);
        }
    }
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = match &app.chain_head {
        Some(head) => vec![
            Line::from(vec![
                Span::styled("Latest Block: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    head.number.to_string(),
                    Style::default().fg(Color::White).bold(),
                ),
            ]),
            Line::from(format!(
                "{} ({})",
                head.elapsed,
                format_local_time(head.timestamp)
            ))
            .fg(Color::Gray),
        ],
        None => vec![],
    };

    let footer = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
