//! Common UI tests - notices, loading, and layout

use super::*;
use akex::app::Notice;
use akex::error::ExplorerError;
use akex::search::SearchQuery;

// ==================== Notice Tests ====================

#[test]
fn test_error_notice_shows_message() {
    let mut app = create_test_app(None, true);
    app.report(ExplorerError::Rpc("connection timeout".to_string()));
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "RPC error: connection timeout"));
}

#[test]
fn test_info_notice_keeps_previous_result() {
    let mut app = create_test_app(Some(QueryResult::Block(mock_block())), true);
    app.notice = Some(Notice::Info("Transaction not found".to_string()));
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Transaction not found"));
    assert!(buffer_contains(&buffer, "Block Summary"));
}

// ==================== Loading Tests ====================

#[test]
fn test_loading_replaces_notice() {
    let mut app = create_test_app(None, true);
    app.report(ExplorerError::InvalidInput("bad".to_string()));
    app.begin_query(&SearchQuery::BlockNumber(19000000));
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Fetching block 19000000..."));
    assert!(!buffer_contains(&buffer, "Invalid input"));
}

#[test]
fn test_invalid_search_shown_while_loading() {
    let mut app = create_test_app(None, true);
    app.begin_query(&SearchQuery::BlockNumber(19000000));
    app.report(SearchQuery::resolve("vitalik.eth").unwrap_err());
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Fetching block 19000000..."));
    assert!(buffer_contains(&buffer, "Invalid input"));
}

// ==================== Layout Tests ====================

#[test]
fn test_every_state_shows_help() {
    let results = vec![
        None,
        Some(QueryResult::Block(mock_block())),
        Some(QueryResult::Transaction(mock_tx())),
        Some(QueryResult::Account(mock_account())),
    ];

    for result in results {
        let app = create_test_app(result, true);
        let buffer = render_to_buffer(&app, 100, 30);
        assert!(buffer_contains(&buffer, "Esc quit"));
    }
}

#[test]
fn test_small_terminal_does_not_panic() {
    let app = create_test_app(Some(QueryResult::Transaction(mock_tx())), true);
    let _ = render_to_buffer(&app, 20, 8);
    let _ = render_to_buffer(&app, 30, 10);
}
