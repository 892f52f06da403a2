//! Empty-state UI tests

use super::*;

#[test]
fn test_home_shows_title_and_subtitle() {
    let app = create_test_app(None, false);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Alkebuleum Block Explorer"));
    assert!(buffer_contains(
        &buffer,
        "Search for a block, transaction hash, or address"
    ));
}

#[test]
fn test_home_shows_search_placeholder() {
    let app = create_test_app(None, false);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Search"));
    assert!(buffer_contains(
        &buffer,
        "Enter block number, transaction hash, or address"
    ));
}

#[test]
fn test_home_shows_typed_query() {
    let mut app = create_test_app(None, false);
    app.search_input = tui_input::Input::new("12345".to_string());
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "12345"));
    assert!(!buffer_contains(&buffer, "Enter block number"));
}

#[test]
fn test_footer_hidden_until_first_poll() {
    let app = create_test_app(None, false);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(!buffer_contains(&buffer, "Latest Block"));
}

#[test]
fn test_footer_shows_latest_block() {
    let app = create_test_app(None, true);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Latest Block: 19000000"));
    assert!(buffer_contains(&buffer, "45 secs ago"));
    // Local time follows in parentheses
    assert!(buffer_contains(&buffer, "45 secs ago (2023-11-1"));
}
