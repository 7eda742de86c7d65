//! Rendering of the form into styled lines.
//!
//! Rendering is pure: it reads [`FormApp`] and produces [`Line`]s, which the
//! [`Terminal`](crate::terminal::Terminal) then draws.

use applyform_lib::model::{Field, Position, Skill};
use applyform_lib::{INTERVIEW_TIME_FORMAT, Submission};

use crate::app::{FormApp, Screen};
use crate::focus::WidgetId;
use crate::text::{char_width, display_width, scroll_offset, truncate_to_width};

/// Indentation of input values under their label.
const INDENT: &str = "    ";

/// Semantic color of a span; the terminal maps it to an actual color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Normal,
    Muted,
    Accent,
    Error,
    Success,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub tone: Tone,
    pub bold: bool,
    pub reverse: bool,
}

impl Style {
    pub fn new(tone: Tone) -> Self {
        Self {
            tone,
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            spans: vec![Span::new(text, style)],
        }
    }

    pub fn from_spans(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// The text of the line without styling.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Render the current screen for a terminal of `width` by `height` cells.
///
/// The result never has more than `height` lines. On the form screen the
/// header and the status line stay put while the fields scroll to keep the
/// focused widget, and its error, on screen.
pub fn render(app: &FormApp, width: u16, height: u16) -> Vec<Line> {
    let width = width as usize;
    let height = height as usize;
    let mut lines = match app.screen() {
        Screen::Form => render_form(app, width, height),
        Screen::Submitted(submission) => render_submission(submission, width),
    };
    lines.truncate(height);
    lines
}

fn render_form(app: &FormApp, width: usize, height: usize) -> Vec<Line> {
    let mut lines = vec![
        Line::styled("Job Application", Style::new(Tone::Accent).bold()),
        Line::styled(
            truncate_to_width(
                "Tab/Shift+Tab move  Enter/Ctrl+S submit  Ctrl+R reset  Esc quit",
                width,
            ),
            Style::new(Tone::Muted),
        ),
        Line::empty(),
    ];

    let focused = app.focused();
    let value_width = width.saturating_sub(INDENT.len());

    let mut body = Vec::new();
    // First and one-past-last body row of the focused widget.
    let mut focus_rows = None;

    for field in app.session().visible_fields() {
        let field_focused = focused.and_then(WidgetId::field) == Some(field);
        let start = body.len();
        body.push(label_line(field, field_focused));

        match field {
            Field::Position => {
                let position = app.session().record().position;
                body.push(position_line(position, field_focused));
            }
            Field::AdditionalSkills => {
                for (skill, selected) in app.session().record().additional_skills.iter() {
                    body.push(skill_line(skill, selected, focused == Some(WidgetId::Skill(skill))));
                }
            }
            Field::InterviewTime => {
                body.push(picker_line(app, field_focused));
            }
            Field::ManagementExperience => {
                body.extend(multiline_lines(app, field, field_focused, value_width));
            }
            _ => {
                body.push(text_line(app, field, field_focused, value_width));
            }
        }

        if let Some(message) = app.visible_error(field) {
            body.push(Line::styled(
                truncate_to_width(&format!("{}! {}", INDENT, message), width),
                Style::new(Tone::Error),
            ));
        }
        if field_focused {
            focus_rows = Some((start, body.len()));
        }
        body.push(Line::empty());
    }

    let button = Style::new(Tone::Accent).bold();
    let button = if focused == Some(WidgetId::Submit) {
        focus_rows = Some((body.len(), body.len() + 1));
        button.reverse()
    } else {
        button
    };
    body.push(Line::from_spans(vec![
        Span::new("  ", Style::default()),
        Span::new("[ Submit ]", button),
    ]));

    let mut footer = Vec::new();
    if let Some(status) = app.status() {
        footer.push(Line::empty());
        footer.push(Line::styled(
            truncate_to_width(status, width),
            Style::new(Tone::Error),
        ));
    }

    let rows = height.saturating_sub(lines.len() + footer.len());
    let offset = focus_rows.map_or(0, |(start, end)| body_offset(start, end, rows));
    lines.extend(body.into_iter().skip(offset).take(rows));
    lines.extend(footer);
    lines
}

/// First body row to show so that rows `start..end` fit in `rows` lines.
///
/// A block taller than the viewport keeps its first row visible.
fn body_offset(start: usize, end: usize, rows: usize) -> usize {
    end.saturating_sub(rows).min(start)
}

fn label_line(field: Field, focused: bool) -> Line {
    let (marker, style) = if focused {
        ("> ", Style::new(Tone::Accent).bold())
    } else {
        ("  ", Style::new(Tone::Normal).bold())
    };
    Line::styled(format!("{}{}:", marker, field.label()), style)
}

fn position_line(position: Position, focused: bool) -> Line {
    let tone = if position.is_set() {
        Tone::Normal
    } else {
        Tone::Muted
    };
    if focused {
        Line::from_spans(vec![
            Span::new(INDENT, Style::default()),
            Span::new(format!("‹ {} ›", position.label()), Style::new(tone).reverse()),
        ])
    } else {
        Line::styled(format!("{}{}", INDENT, position.label()), Style::new(tone))
    }
}

fn skill_line(skill: Skill, selected: bool, focused: bool) -> Line {
    let box_text = if selected { "[x]" } else { "[ ]" };
    let style = if focused {
        Style::new(Tone::Accent).reverse()
    } else {
        Style::default()
    };
    Line::from_spans(vec![
        Span::new(INDENT, Style::default()),
        Span::new(box_text, style),
        Span::new(format!(" {}", skill.name()), Style::default()),
    ])
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::FullName => "Jane Doe",
        Field::Email => "jane@example.com",
        Field::PhoneNumber => "5551234567",
        Field::RelevantExperience => "years",
        Field::PortfolioUrl => "https://",
        Field::ManagementExperience => "Teams led, size, duration",
        _ => "",
    }
}

fn text_line(app: &FormApp, field: Field, focused: bool, width: usize) -> Line {
    let data = app.text_data(field);
    let mut spans = vec![Span::new(INDENT, Style::default())];

    if focused {
        let chars: Vec<char> = data.text.chars().collect();
        spans.extend(cursor_spans(&chars, Some(data.cursor), width));
    } else if data.text.is_empty() {
        spans.push(Span::new(placeholder(field), Style::new(Tone::Muted)));
    } else {
        spans.push(Span::new(truncate_to_width(&data.text, width), Style::default()));
    }

    Line::from_spans(spans)
}

fn multiline_lines(app: &FormApp, field: Field, focused: bool, width: usize) -> Vec<Line> {
    let data = app.text_data(field);

    if !focused && data.text.is_empty() {
        return vec![Line::from_spans(vec![
            Span::new(INDENT, Style::default()),
            Span::new(placeholder(field), Style::new(Tone::Muted)),
        ])];
    }

    let mut remaining = focused.then_some(data.cursor);
    let mut lines = Vec::new();

    for text in data.text.split('\n') {
        let chars: Vec<char> = text.chars().collect();
        // The cursor belongs to this line if it falls within it (including its end).
        let cursor = match remaining {
            Some(c) if c <= chars.len() => {
                remaining = None;
                Some(c)
            }
            Some(c) => {
                remaining = Some(c - chars.len() - 1);
                None
            }
            None => None,
        };

        let mut spans = vec![Span::new(INDENT, Style::default())];
        if cursor.is_some() {
            spans.extend(cursor_spans(&chars, cursor, width));
        } else {
            let line: String = chars.iter().collect();
            spans.push(Span::new(truncate_to_width(&line, width), Style::default()));
        }
        lines.push(Line::from_spans(spans));
    }

    lines
}

/// Visible part of an input with the cursor cell reversed.
fn cursor_spans(chars: &[char], cursor: Option<usize>, width: usize) -> Vec<Span> {
    let cursor = cursor.unwrap_or(chars.len()).min(chars.len());
    let start = scroll_offset(chars, cursor, width);

    let before: String = chars[start..cursor].iter().collect();
    let mut used = display_width(&before);

    let (at, after_start) = match chars.get(cursor) {
        Some(c) => (c.to_string(), cursor + 1),
        None => (" ".to_string(), cursor),
    };
    used += display_width(&at);

    let mut after = String::new();
    for c in &chars[after_start..] {
        let w = char_width(*c);
        if used + w > width {
            break;
        }
        used += w;
        after.push(*c);
    }

    vec![
        Span::new(before, Style::default()),
        Span::new(at, Style::new(Tone::Accent).reverse()),
        Span::new(after, Style::default()),
    ]
}

fn picker_line(app: &FormApp, focused: bool) -> Line {
    let picker = app.picker();
    let literal = picker.literal();
    let (text, tone) = if literal.is_empty() {
        ("YYYY-MM-DDTHH:MM".to_string(), Tone::Muted)
    } else {
        (literal, Tone::Normal)
    };

    let mut spans = vec![Span::new(INDENT, Style::default())];
    if focused {
        let (from, to) = picker.segment().span();
        let chars: Vec<char> = text.chars().collect();
        spans.push(Span::new(chars[..from].iter().collect::<String>(), Style::new(tone)));
        spans.push(Span::new(
            chars[from..to].iter().collect::<String>(),
            Style::new(Tone::Accent).reverse(),
        ));
        spans.push(Span::new(chars[to..].iter().collect::<String>(), Style::new(tone)));
        spans.push(Span::new(
            "  ←/→ segment  ↑/↓ adjust",
            Style::new(Tone::Muted),
        ));
    } else {
        spans.push(Span::new(text, Style::new(tone)));
    }

    Line::from_spans(spans)
}

fn render_submission(submission: &Submission, width: usize) -> Vec<Line> {
    let mut lines = vec![
        Line::styled("Application submitted", Style::new(Tone::Success).bold()),
        Line::empty(),
    ];

    for json_line in submission.to_json().lines() {
        lines.push(Line::styled(
            truncate_to_width(json_line, width),
            Style::default(),
        ));
    }

    if let Some(time) = submission.interview_time() {
        lines.push(Line::empty());
        lines.push(Line::styled(
            format!("Interview: {}", time.format("%A, %d %B %Y at %H:%M")),
            Style::new(Tone::Accent),
        ));
    } else {
        log::debug!(
            "Interview time {:?} is not a {} literal",
            submission.record().interview_time,
            INTERVIEW_TIME_FORMAT
        );
    }

    lines.push(Line::empty());
    lines.push(Line::styled(
        "Press any key to start a new application",
        Style::new(Tone::Muted),
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_offset() {
        // Fits without scrolling.
        assert_eq!(body_offset(2, 5, 10), 0);
        // Scrolls just far enough to show the end of the block.
        assert_eq!(body_offset(20, 23, 10), 13);
        // Taller than the viewport: keep its first row.
        assert_eq!(body_offset(4, 20, 10), 4);
        assert_eq!(body_offset(4, 6, 0), 4);
    }
}
