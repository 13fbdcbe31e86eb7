use super::utils::centered_rect;
use super::*;
use scoreboard::MatchRecord;

/// Each record takes two lines plus a blank separator.
const ROWS_PER_RECORD: u16 = 3;

pub fn render_history_dialog(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(52, 20, frame.area());
    frame.render_widget(Clear, area);

    let records = app.scoreboard.history().records();
    let title = if records.is_empty() {
        " Match History ".to_string()
    } else {
        format!(" Match History ({} matches) ", records.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(title, Style::default().fg(Color::White)))
        .title_bottom(
            Line::from(vec![
                Span::styled(" j/k", Style::default().fg(Color::Yellow)),
                Span::raw(": Scroll  "),
                Span::styled("Esc", Style::default().fg(Color::Yellow)),
                Span::raw(": Close "),
            ])
            .centered(),
        )
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if records.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No matches recorded yet",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        app.history_view_height = 0;
        return;
    }

    let visible = (inner.height / ROWS_PER_RECORD).max(1) as usize;
    let scroll = app.history_scroll.min(records.len().saturating_sub(visible));

    let mut lines = Vec::new();
    for record in records.iter().skip(scroll).take(visible) {
        lines.extend(record_lines(record, inner.width));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
    app.history_view_height = visible;
}

fn record_lines(record: &MatchRecord, width: u16) -> [Line<'static>; 2] {
    let teams = format!("{} vs {}", record.home_team(), record.away_team());
    let score = format!("{} - {}", record.home_score(), record.away_score());
    let date = record.date_label();
    let played = format!("{} min", record.duration_minutes());

    [
        spread(
            Span::styled(teams, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(score, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            width,
        ),
        spread(
            Span::styled(date, Style::default().fg(Color::DarkGray)),
            Span::styled(played, Style::default().fg(Color::DarkGray)),
            width,
        ),
    ]
}

/// Left span flush left, right span flush right.
fn spread(left: Span<'static>, right: Span<'static>, width: u16) -> Line<'static> {
    let used = left.width() + right.width();
    let gap = (width as usize).saturating_sub(used).max(1);
    Line::from(vec![left, Span::raw(" ".repeat(gap)), right])
}
