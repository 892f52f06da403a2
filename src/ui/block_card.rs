use super::helper::*;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::rpc::BlockSummary;

pub fn draw_block_card(frame: &mut Frame, area: Rect, block: &BlockSummary) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" 📦 Block Summary ");

    let lines = vec![
        format_kv("Block Number", &block.number.to_string()),
        format_kv("Block Hash", &block.hash),
        format_kv("Transaction Count", &block.transaction_count.to_string()),
        format_kv("Timestamp", &format_local_time(block.timestamp)),
    ];

    frame.render_widget(Paragraph::new(lines).block(card), area);
}
