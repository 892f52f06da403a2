use super::helper::*;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::rpc::TransactionSummary;

pub fn draw_tx_card(frame: &mut Frame, area: Rect, tx: &TransactionSummary, symbol: &str) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" 📝 Transaction Summary ");

    let to_line = match &tx.to {
        Some(to) => format_kv("To", to),
        None => Line::from(vec![
            Span::styled("To: ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Contract Creation]", Style::default().fg(Color::Magenta)),
        ]),
    };

    // Labelled "Gas Used" but carries the gas limit
    let lines = vec![
        format_kv("Transaction Hash", &tx.hash),
        format_kv("From", &tx.from),
        to_line,
        format_kv("Value", &format_native(&tx.value(), symbol)),
        format_kv("Gas Used", &tx.gas),
    ];

    frame.render_widget(Paragraph::new(lines).block(card), area);
}
