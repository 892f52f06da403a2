//! UI rendering tests for akex
//!
//! These tests ensure the UI renders correctly by comparing against expected buffer output.
//! Run with: cargo test --test ui_tests

pub mod block_tests;
pub mod common_tests;
pub mod home_tests;
pub mod tx_tests;

use akex::app::App;
use akex::config::Config;
use akex::rpc::{AccountBalance, BlockSummary, ChainHead, QueryResult, TransactionSummary};
use akex::ui::draw;

use alloy::primitives::U256;
use chrono::DateTime;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

// ==================== Test Data Builders ====================

pub fn mock_config() -> Config {
    Config {
        rpc_url: "http://localhost:8545".to_string(),
        ..Config::default()
    }
}

pub fn mock_chain_head() -> ChainHead {
    ChainHead {
        number: 19000000,
        timestamp: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        elapsed: "45 secs ago".to_string(),
    }
}

pub fn mock_block() -> BlockSummary {
    BlockSummary {
        number: 19000000,
        hash: "0xabc123def456789abc123def456789abc123def456789abc123def456789abcd".to_string(),
        transaction_count: 150,
        timestamp: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
    }
}

pub fn mock_tx() -> TransactionSummary {
    TransactionSummary {
        hash: "0xaaaa111122223333444455556666777788889999aaaabbbbccccddddeeeeffff".to_string(),
        from: "0x1111111111111111111111111111111111111111".to_string(),
        to: Some("0x2222222222222222222222222222222222222222".to_string()),
        value_wei: U256::from(1_500_000_000_000_000_000u128), // 1.5 AKE
        gas: "0x5208".to_string(),
    }
}

pub fn mock_contract_creation() -> TransactionSummary {
    TransactionSummary {
        to: None,
        value_wei: U256::ZERO,
        ..mock_tx()
    }
}

pub fn mock_account() -> AccountBalance {
    AccountBalance {
        address: "0x3333333333333333333333333333333333333333".to_string(),
        balance_wei: U256::from(5_500_000_000_000_000_000u128), // 5.5 AKE
    }
}

pub fn create_test_app(result: Option<QueryResult>, with_head: bool) -> App {
    let mut app = App::new(mock_config());
    app.result = result;
    if with_head {
        app.chain_head = Some(mock_chain_head());
    }
    app
}

// ==================== Helper Functions ====================

/// Render the app to a buffer and return it
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            draw(frame, app);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Check if buffer contains a specific string anywhere
pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    let content = buffer_to_string(buffer);
    content.contains(needle)
}

/// Convert buffer to a single string for searching
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut content = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            content.push(
                buffer
                    .cell((x, y))
                    .map(|c| c.symbol().chars().next().unwrap_or(' '))
                    .unwrap_or(' '),
            );
        }
        content.push('\n');
    }
    content
}

/// Get a specific line from the buffer
#[allow(dead_code)]
pub fn buffer_line(buffer: &Buffer, y: u16) -> String {
    let mut line = String::new();
    for x in 0..buffer.area.width {
        if let Some(cell) = buffer.cell((x, y)) {
            line.push_str(cell.symbol());
        }
    }
    line.trim_end().to_string()
}

/// Print buffer for debugging
#[allow(dead_code)]
pub fn print_buffer(buffer: &Buffer) {
    for y in 0..buffer.area.height {
        println!("{}", buffer_line(buffer, y));
    }
}
