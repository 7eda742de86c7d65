use applyform_lib::model::{Field, Position, Skill};
use applyform_tui::event::{Key, KeyInput, Modifiers};
use applyform_tui::focus::WidgetId;
use applyform_tui::render::render;
use applyform_tui::{Flow, FormApp, Screen};
use chrono::NaiveDateTime;

fn now() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2026-10-19T14:37", "%Y-%m-%dT%H:%M").unwrap()
}

fn press(app: &mut FormApp, key: Key) -> Flow {
    app.handle_key(KeyInput::new(key), now())
}

fn ctrl(app: &mut FormApp, c: char) -> Flow {
    app.handle_key(KeyInput::with_modifiers(Key::Char(c), Modifiers::ctrl()), now())
}

fn type_text(app: &mut FormApp, text: &str) {
    for c in text.chars() {
        press(app, Key::Char(c));
    }
}

fn focus(app: &mut FormApp, target: WidgetId) {
    for _ in 0..32 {
        if app.focused() == Some(target) {
            return;
        }
        press(app, Key::Tab);
    }
    panic!("{:?} is not focusable", target);
}

fn screen_text(app: &FormApp) -> String {
    render(app, 80, 100)
        .iter()
        .map(|line| line.plain())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fill in a valid Manager application.
fn fill_manager(app: &mut FormApp) {
    type_text(app, "Ada Lovelace");
    press(app, Key::Tab);
    type_text(app, "ada@example.com");
    press(app, Key::Tab);
    type_text(app, "5551234");
    press(app, Key::Tab);
    assert_eq!(app.focused(), Some(WidgetId::Position));
    press(app, Key::Left);
    assert_eq!(app.session().record().position, Position::Manager);
    press(app, Key::Tab);
    assert_eq!(app.focused(), Some(WidgetId::Text(Field::ManagementExperience)));
    type_text(app, "5 years");
    press(app, Key::Enter);
    type_text(app, "leading a team");
    focus(app, WidgetId::Skill(Skill::Python));
    press(app, Key::Char(' '));
    press(app, Key::Tab);
    assert_eq!(app.focused(), Some(WidgetId::InterviewTime));
    press(app, Key::Up);
}

#[test]
fn test_starts_on_first_field_without_visible_errors() {
    let app = FormApp::new(false);
    assert_eq!(app.focused(), Some(WidgetId::Text(Field::FullName)));
    assert_eq!(app.session().errors().len(), 5);
    assert_eq!(app.visible_error(Field::FullName), None);
    assert!(!screen_text(&app).contains("is required"));
}

#[test]
fn test_show_untouched_displays_all_errors() {
    let app = FormApp::new(true);
    let text = screen_text(&app);
    assert!(text.contains("! Full Name is required"));
    assert!(text.contains("! Valid Email is required"));
    assert!(text.contains("! At least one additional skill must be selected"));
}

#[test]
fn test_leaving_a_field_shows_its_error() {
    let mut app = FormApp::new(false);
    press(&mut app, Key::Tab);
    assert_eq!(app.visible_error(Field::FullName), Some("Full Name is required"));
    assert_eq!(app.visible_error(Field::Email), None);
}

#[test]
fn test_typing_revalidates() {
    let mut app = FormApp::new(false);
    type_text(&mut app, "A");
    assert_eq!(app.session().record().full_name, "A");
    assert_eq!(app.session().error(Field::FullName), None);

    press(&mut app, Key::Backspace);
    assert_eq!(app.visible_error(Field::FullName), Some("Full Name is required"));
}

#[test]
fn test_conditional_fields_follow_position() {
    let mut app = FormApp::new(false);
    assert!(!app.widget_order().contains(&WidgetId::Text(Field::RelevantExperience)));

    focus(&mut app, WidgetId::Position);
    press(&mut app, Key::Right);
    press(&mut app, Key::Right);
    assert_eq!(app.session().record().position, Position::Designer);

    let order = app.widget_order();
    assert!(order.contains(&WidgetId::Text(Field::RelevantExperience)));
    assert!(order.contains(&WidgetId::Text(Field::PortfolioUrl)));
    assert!(!order.contains(&WidgetId::Text(Field::ManagementExperience)));

    let text = screen_text(&app);
    assert!(text.contains("Portfolio URL:"));
    assert!(!text.contains("Management Experience:"));

    press(&mut app, Key::Tab);
    assert_eq!(app.focused(), Some(WidgetId::Text(Field::RelevantExperience)));
}

#[test]
fn test_arrow_keys_move_focus_outside_text() {
    let mut app = FormApp::new(false);
    press(&mut app, Key::Down);
    assert_eq!(app.focused(), Some(WidgetId::Text(Field::Email)));
    press(&mut app, Key::Up);
    assert_eq!(app.focused(), Some(WidgetId::Text(Field::FullName)));
    press(&mut app, Key::Up);
    assert_eq!(app.focused(), Some(WidgetId::Submit));
}

#[test]
fn test_failed_submit_focuses_first_invalid_field() {
    let mut app = FormApp::new(false);
    type_text(&mut app, "Ada");
    focus(&mut app, WidgetId::Submit);
    press(&mut app, Key::Enter);

    assert!(matches!(app.screen(), Screen::Form));
    assert_eq!(app.focused(), Some(WidgetId::Text(Field::Email)));
    assert_eq!(app.status(), Some("4 field(s) need attention"));
    assert_eq!(app.visible_error(Field::InterviewTime), Some("Preferred Interview Time is required"));
    assert!(screen_text(&app).contains("4 field(s) need attention"));
}

#[test]
fn test_enter_in_text_input_submits() {
    let mut app = FormApp::new(false);
    focus(&mut app, WidgetId::Text(Field::PhoneNumber));
    type_text(&mut app, "5551234");
    press(&mut app, Key::Enter);

    assert!(matches!(app.screen(), Screen::Form));
    assert_eq!(app.status(), Some("4 field(s) need attention"));
    assert_eq!(app.focused(), Some(WidgetId::Text(Field::FullName)));
    assert_eq!(app.visible_error(Field::Email), Some("Valid Email is required"));

    let mut app = FormApp::new(false);
    fill_manager(&mut app);
    focus(&mut app, WidgetId::Text(Field::Email));
    press(&mut app, Key::Enter);
    assert!(matches!(app.screen(), Screen::Submitted(_)));
}

#[test]
fn test_submit_valid_application() {
    let mut app = FormApp::new(false);
    fill_manager(&mut app);

    assert_eq!(app.session().record().management_experience, "5 years\nleading a team");
    assert_eq!(app.session().record().interview_time, "2026-10-19T15:00");
    assert!(app.session().is_valid());

    ctrl(&mut app, 's');
    let Screen::Submitted(submission) = app.screen() else {
        panic!("expected submitted screen");
    };
    assert_eq!(submission.record().full_name, "Ada Lovelace");

    let text = screen_text(&app);
    assert!(text.contains("Application submitted"));
    assert!(text.contains("\"position\": \"Manager\""));
    assert!(text.contains("Interview: Monday, 19 October 2026 at 15:00"));

    // Any key dismisses the result and starts over.
    assert_eq!(press(&mut app, Key::Char('x')), Flow::Continue);
    assert!(matches!(app.screen(), Screen::Form));
    assert_eq!(app.session().record().full_name, "");
    assert_eq!(app.focused(), Some(WidgetId::Text(Field::FullName)));
}

#[test]
fn test_reset_clears_everything() {
    let mut app = FormApp::new(false);
    fill_manager(&mut app);
    ctrl(&mut app, 'r');

    assert_eq!(app.session().record().full_name, "");
    assert_eq!(app.session().record().position, Position::Unset);
    assert_eq!(app.picker().value(), None);
    assert_eq!(app.text_data(Field::FullName).text, "");
    assert_eq!(app.status(), Some("Form reset"));
    assert_eq!(app.visible_error(Field::FullName), None);
}

#[test]
fn test_quit_keys() {
    let mut app = FormApp::new(false);
    assert_eq!(press(&mut app, Key::Escape), Flow::Quit);
    assert_eq!(ctrl(&mut app, 'c'), Flow::Quit);
    assert_eq!(press(&mut app, Key::Char('q')), Flow::Continue);
}
