use applyform_tui::event::{Key, KeyInput, Modifiers};
use applyform_tui::render::{Line, Tone, render};
use applyform_tui::FormApp;
use applyform_tui::focus::WidgetId;
use chrono::NaiveDateTime;

fn now() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2026-10-19T14:37", "%Y-%m-%dT%H:%M").unwrap()
}

fn find<'a>(lines: &'a [Line], needle: &str) -> &'a Line {
    lines
        .iter()
        .find(|line| line.plain().contains(needle))
        .unwrap_or_else(|| panic!("no line containing {:?}", needle))
}

#[test]
fn test_focused_label_is_marked() {
    let app = FormApp::new(false);
    let lines = render(&app, 80, 100);
    assert_eq!(find(&lines, "Full Name:").plain(), "> Full Name:");
    assert_eq!(find(&lines, "Email:").plain(), "  Email:");
}

#[test]
fn test_cursor_cell_is_reversed() {
    let mut app = FormApp::new(false);
    for c in "Ada".chars() {
        app.handle_key(KeyInput::new(Key::Char(c)), now());
    }
    app.handle_key(KeyInput::new(Key::Left), now());

    let lines = render(&app, 80, 100);
    let value = &lines[lines.iter().position(|l| l.plain() == "> Full Name:").unwrap() + 1];
    let cursor = value.spans.iter().find(|s| s.style.reverse).unwrap();
    assert_eq!(cursor.text, "a");
    assert_eq!(value.plain(), "    Ada");
}

#[test]
fn test_placeholders_are_muted() {
    let app = FormApp::new(false);
    let lines = render(&app, 80, 100);
    let email = find(&lines, "jane@example.com");
    assert!(email.spans.iter().any(|s| s.style.tone == Tone::Muted));
}

#[test]
fn test_long_values_scroll_with_cursor() {
    let mut app = FormApp::new(false);
    for c in "abcdefghijklmnopqrstuvwxyz".chars() {
        app.handle_key(KeyInput::new(Key::Char(c)), now());
    }

    let lines = render(&app, 14, 100);
    let value = &lines[lines.iter().position(|l| l.plain() == "> Full Name:").unwrap() + 1];
    // 4 columns of indent leave 10 for the value, one of them the cursor.
    assert_eq!(value.plain(), "    rstuvwxyz ");
}

#[test]
fn test_errors_render_below_field() {
    let app = FormApp::new(true);
    let lines = render(&app, 80, 100);
    let label = lines.iter().position(|l| l.plain() == "  Email:").unwrap();
    assert_eq!(lines[label + 2].plain(), "    ! Valid Email is required");
    assert!(lines[label + 2].spans.iter().all(|s| s.style.tone == Tone::Error));
}

/// A Designer form with every error shown, taller than a 24-row terminal.
fn tall_form() -> FormApp {
    let mut app = FormApp::new(true);
    while app.focused() != Some(WidgetId::Position) {
        app.handle_key(KeyInput::new(Key::Tab), now());
    }
    app.handle_key(KeyInput::new(Key::Right), now());
    app.handle_key(KeyInput::new(Key::Right), now());
    app
}

#[test]
fn test_focused_submit_scrolls_into_view() {
    let mut app = tall_form();
    assert!(render(&app, 80, 100).len() > 24);

    while app.focused() != Some(WidgetId::Submit) {
        app.handle_key(KeyInput::new(Key::Tab), now());
    }
    let lines = render(&app, 80, 24);
    assert_eq!(lines.len(), 24);
    assert_eq!(lines[0].plain(), "Job Application");
    assert_eq!(lines[23].plain(), "  [ Submit ]");
}

#[test]
fn test_focused_error_stays_visible() {
    let mut app = tall_form();
    while app.focused() != Some(WidgetId::InterviewTime) {
        app.handle_key(KeyInput::new(Key::Tab), now());
    }
    let lines = render(&app, 80, 24);
    assert!(lines.len() <= 24);
    assert_eq!(
        lines.last().map(Line::plain).as_deref(),
        Some("    ! Preferred Interview Time is required")
    );
    find(&lines, "> Preferred Interview Time:");
}

#[test]
fn test_status_is_pinned_below_fields() {
    let mut app = tall_form();
    while app.focused() != Some(WidgetId::Submit) {
        app.handle_key(KeyInput::new(Key::Tab), now());
    }
    app.handle_key(KeyInput::with_modifiers(Key::Char('s'), Modifiers::ctrl()), now());

    let lines = render(&app, 80, 12);
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[11].plain(), "7 field(s) need attention");
    assert!(lines[11].spans.iter().all(|s| s.style.tone == Tone::Error));
    find(&lines, "> Full Name:");
}
