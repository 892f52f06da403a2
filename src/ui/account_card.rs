use super::helper::*;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::rpc::AccountBalance;

pub fn draw_account_card(frame: &mut Frame, area: Rect, account: &AccountBalance, symbol: &str) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" 👤 Account Balance ");

    let lines = vec![
        format_kv("Address", &account.address),
        format_kv("Balance", &format_native(&account.balance(), symbol)),
    ];

    frame.render_widget(Paragraph::new(lines).block(card), area);
}
