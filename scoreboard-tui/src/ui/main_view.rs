use super::digits::{block_lines, GLYPH_ROWS};
use super::*;
use crate::app::TimerSize;
use scoreboard::ScoreboardView;

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    // 1 blank row, 1 content row
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);
    let content = Rect {
        x: rows[1].x + 2,
        width: rows[1].width.saturating_sub(4),
        ..rows[1]
    };

    let board = &app.scoreboard;
    let muted = Style::default().fg(Color::DarkGray);
    let yellow = Style::default().fg(Color::Yellow);
    let white = Style::default().fg(Color::White);

    let title = Paragraph::new(Span::styled(" Scoreboard", yellow));
    let info = Paragraph::new(Line::from(vec![
        Span::styled("Duration:", yellow),
        Span::styled(format!(" {} min", board.clock().duration()), white),
        Span::styled(" | ", muted),
        Span::styled("Matches:", yellow),
        Span::styled(format!(" {} ", board.history().len()), white),
    ]))
    .alignment(Alignment::Right);

    frame.render_widget(title, content);
    frame.render_widget(info, content);
}

pub fn render_main_view(frame: &mut Frame, app: &App, body: Rect) {
    let view = app.scoreboard.snapshot();

    let clock_height = match app.timer_size {
        TimerSize::Normal => 4,
        TimerSize::Large => GLYPH_ROWS as u16 + 5,
    };
    let banner_height = if view.expired { 4 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(clock_height),       // Clock
            Constraint::Min(GLYPH_ROWS as u16 + 4), // Teams and scores
            Constraint::Length(banner_height),      // Time's up
            Constraint::Length(3),                  // Status
            Constraint::Length(4),                  // Controls (2 rows)
        ])
        .split(body);

    render_clock(frame, chunks[0], &view, app.timer_size);
    render_scores(frame, chunks[1], &view);
    if view.expired {
        render_expired_banner(frame, chunks[2]);
    }
    render_status(frame, chunks[3], app);
    render_controls(frame, chunks[4]);
}

fn render_clock(frame: &mut Frame, area: Rect, view: &ScoreboardView<'_>, size: TimerSize) {
    let border_style = if view.expired {
        Style::default().fg(Color::Red)
    } else if view.running {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let state = if view.running {
        Span::styled("⏵ running", Style::default().fg(Color::Green))
    } else {
        Span::styled("⏸ paused", Style::default().fg(Color::DarkGray))
    };

    let mut details = vec![
        Span::styled("Remaining: ", Style::default().fg(Color::Yellow)),
        Span::styled(view.remaining.clone(), Style::default().fg(Color::White)),
        Span::raw("   "),
        Span::styled("Extra: ", Style::default().fg(Color::Yellow)),
        Span::styled(format!("+{}", view.extra), Style::default().fg(Color::White)),
    ];
    if let Some(minutes) = view.overtime_minutes {
        details.push(Span::raw("   "));
        details.push(Span::styled(
            format!("Overtime: +{}'", minutes),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let lines = match size {
        TimerSize::Normal => vec![
            Line::from(vec![
                Span::styled(
                    view.elapsed.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                state,
            ]),
            Line::from(details),
        ],
        TimerSize::Large => {
            let mut lines = block_lines(
                &view.elapsed,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
            lines.push(Line::from(""));
            lines.push(Line::from(state));
            lines.push(Line::from(details));
            lines
        }
    };

    let alignment = match size {
        TimerSize::Normal => Alignment::Left,
        TimerSize::Large => Alignment::Center,
    };
    let clock = Paragraph::new(lines).alignment(alignment).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Clock ")
            .border_style(border_style)
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(clock, area);
}

fn render_scores(frame: &mut Frame, area: Rect, view: &ScoreboardView<'_>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_team(frame, cols[0], view.home_team, view.home_score, "A/Z");
    render_team(frame, cols[1], view.away_team, view.away_score, "K/M");
}

fn render_team(frame: &mut Frame, area: Rect, name: &str, score: u32, keys: &str) {
    let mut lines = vec![Line::from("")];
    lines.extend(block_lines(
        &score.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));

    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            name.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ]);
    let hint = Line::from(vec![
        Span::raw(" "),
        Span::styled(keys.to_string(), Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
    ]);

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_bottom(hint.right_aligned())
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(panel, area);
}

fn render_expired_banner(frame: &mut Frame, area: Rect) {
    let red = Style::default().fg(Color::Red);
    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            "🚨 TIME'S UP! 🚨",
            red.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("The match has reached its end", red)),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(red));

    frame.render_widget(banner, area);
}

pub fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let contextual_status = app.get_contextual_status();
    let status_text = app.status_message.as_deref().unwrap_or(&contextual_status);

    let status_lower = status_text.to_lowercase();
    let is_alert = status_lower.contains("time's up") || status_lower.contains("removed");
    let is_success = status_lower.contains("goal for")
        || status_lower.contains("started")
        || status_lower.contains("saved");

    let color = if is_alert {
        Color::Red
    } else if is_success {
        Color::Green
    } else {
        Color::White
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .border_style(Style::default().fg(color))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(status, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);

    let line1 = vec![
        Span::styled("Space", key),
        Span::raw(": Start/Pause  "),
        Span::styled("A / Z", key),
        Span::raw(": Home +/-  "),
        Span::styled("K / M", key),
        Span::raw(": Away +/-  "),
        Span::styled("+ / ] / -", key),
        Span::raw(": Extra +1' / +5' / -1'"),
    ];

    let line2 = vec![
        Span::styled("N", key),
        Span::raw(": New match  "),
        Span::styled("S", key),
        Span::raw(": Settings  "),
        Span::styled("H", key),
        Span::raw(": History  "),
        Span::styled("T", key),
        Span::raw(": Toggle clock size  "),
        Span::styled("Q", key),
        Span::raw(": Quit"),
    ];

    let controls = Paragraph::new(vec![Line::from(line1), Line::from(line2)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(vec![Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                )]))
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(controls, area);
}
