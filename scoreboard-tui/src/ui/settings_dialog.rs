use super::utils::centered_rect;
use super::*;
use crate::app::{SettingsField, TextInput};

pub fn render_settings_dialog(frame: &mut Frame, app: &App) {
    let Some(form) = &app.settings_form else {
        return;
    };

    let height = if form.validation_error.is_some() { 15 } else { 13 };
    let area = centered_rect(68, height, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(""),
        field_line(
            "Home team:      ",
            &form.home_team,
            form.focused_field == SettingsField::HomeTeam,
        ),
        field_line(
            "Away team:      ",
            &form.away_team,
            form.focused_field == SettingsField::AwayTeam,
        ),
        field_line(
            "Duration (min): ",
            &form.duration,
            form.focused_field == SettingsField::Duration,
        ),
        Line::from(""),
    ];

    if let Some(err) = &form.validation_error {
        lines.push(Line::from(Span::styled(
            err.as_str(),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Names can change mid-match; the clock keeps its elapsed time.",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(": Switch field  "),
        Span::styled("Ctrl+X", Style::default().fg(Color::Yellow)),
        Span::raw(": Clear  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": Save  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Cancel"),
    ]));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Span::styled(
                " Match Settings ",
                Style::default().fg(Color::Yellow),
            ))
            .padding(Padding::horizontal(2)),
    );

    frame.render_widget(paragraph, area);
}

fn field_line<'a>(label: &'a str, input: &'a TextInput, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    if !focused {
        return Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(input.value.as_str(), value_style),
        ]);
    }

    // Show the cursor as an inverted cell
    let (before, after) = input.split_at_cursor();
    let mut chars = after.chars();
    let under_cursor = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
    let rest = chars.as_str();

    Line::from(vec![
        Span::styled(label, label_style),
        Span::styled(before, value_style),
        Span::styled(under_cursor, value_style.add_modifier(Modifier::REVERSED)),
        Span::styled(rest, value_style),
    ])
}
