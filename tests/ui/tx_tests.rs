//! Transaction card UI tests

use super::*;

fn tx_app(tx: TransactionSummary) -> App {
    create_test_app(Some(QueryResult::Transaction(tx)), true)
}

#[test]
fn test_tx_card_title() {
    let buffer = render_to_buffer(&tx_app(mock_tx()), 100, 30);
    assert!(buffer_contains(&buffer, "Transaction Summary"));
}

#[test]
fn test_tx_card_shows_parties() {
    let buffer = render_to_buffer(&tx_app(mock_tx()), 100, 30);

    assert!(buffer_contains(
        &buffer,
        "From: 0x1111111111111111111111111111111111111111"
    ));
    assert!(buffer_contains(
        &buffer,
        "To: 0x2222222222222222222222222222222222222222"
    ));
}

#[test]
fn test_tx_card_value_in_native_units() {
    let buffer = render_to_buffer(&tx_app(mock_tx()), 100, 30);
    assert!(buffer_contains(&buffer, "Value: 1.5 AKE"));
}

#[test]
fn test_tx_card_gas_shown_as_given() {
    let buffer = render_to_buffer(&tx_app(mock_tx()), 100, 30);
    assert!(buffer_contains(&buffer, "Gas Used: 0x5208"));
}

#[test]
fn test_tx_card_contract_creation() {
    let buffer = render_to_buffer(&tx_app(mock_contract_creation()), 100, 30);

    assert!(buffer_contains(&buffer, "[Contract Creation]"));
    assert!(buffer_contains(&buffer, "Value: 0 AKE"));
}

#[test]
fn test_tx_card_uses_configured_symbol() {
    let mut app = tx_app(mock_tx());
    app.config.native_symbol = "ETH".to_string();
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Value: 1.5 ETH"));
}
