//! Block card UI tests

use super::*;

fn block_app() -> App {
    create_test_app(Some(QueryResult::Block(mock_block())), true)
}

#[test]
fn test_block_card_title() {
    let buffer = render_to_buffer(&block_app(), 100, 30);
    assert!(buffer_contains(&buffer, "Block Summary"));
}

#[test]
fn test_block_card_shows_number_and_count() {
    let buffer = render_to_buffer(&block_app(), 100, 30);

    assert!(buffer_contains(&buffer, "Block Number: 19000000"));
    assert!(buffer_contains(&buffer, "Transaction Count: 150"));
}

#[test]
fn test_block_card_shows_hash() {
    let buffer = render_to_buffer(&block_app(), 100, 30);
    assert!(buffer_contains(
        &buffer,
        "0xabc123def456789abc123def456789abc123def456789abc123def456789abcd"
    ));
}

#[test]
fn test_block_card_shows_timestamp() {
    let buffer = render_to_buffer(&block_app(), 100, 30);
    assert!(buffer_contains(&buffer, "Timestamp: 2023-11-1"));
}

#[test]
fn test_block_card_excludes_other_cards() {
    let buffer = render_to_buffer(&block_app(), 100, 30);

    assert!(!buffer_contains(&buffer, "Transaction Summary"));
    assert!(!buffer_contains(&buffer, "Account Balance"));
}
