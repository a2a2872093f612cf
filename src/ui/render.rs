use crate::platform::PermissionStatus;
use crate::ui::app::{App, Screen};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, centered_rect_by_size, layout_regions};
use crate::ui::theme::{ACCENT, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR, SYSTEM_SURFACE};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.permission_name(), app.platform_status());
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);
    draw_permission_screen(frame, app, body);

    let footer_widget = Footer::new(app.screen());
    frame.render_widget(footer_widget.widget(footer), footer);

    match app.screen() {
        Screen::Permission => {
            if app.state().is_rationale_visible {
                draw_rationale(frame, body);
            }
        }
        Screen::SystemPrompt => draw_system_prompt(frame, app, body),
        Screen::Settings => draw_settings(frame, app, body),
    }
}

fn draw_permission_screen(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.state();
    let mut lines = Vec::new();
    let middle = area.height.saturating_sub(3) / 2;
    lines.extend((0..middle).map(|_| Line::from("")));
    lines.push(Line::from(Span::styled(
        state.permission_text.clone(),
        Style::default().fg(HEADER_TEXT),
    )));

    if state.permission_permanently_denied {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[ Open Settings ]",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
    }

    if let Some(action) = app.last_rejected() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("({:?} is not available here)", action),
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::DIM),
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_rationale(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect_by_size(44, 5, area);
    frame.render_widget(Clear, popup);
    let lines = vec![
        Line::from("This is a rationale"),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(" Camera access ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        popup,
    );
}

fn draw_system_prompt(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let popup = centered_rect_by_size(48, 7, area);
    frame.render_widget(Clear, popup);
    let lines = vec![
        Line::from(format!("Allow permflow to use the {}?", app.permission_name())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[a] Allow", Style::default().fg(ACCENT)),
            Span::raw("      "),
            Span::styled("[d] Don't allow", Style::default().fg(ACCENT)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(SYSTEM_SURFACE))
            .block(
                Block::default()
                    .title(" System ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            ),
        popup,
    );
}

fn draw_settings(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let popup = centered_rect(80, 80, area);
    frame.render_widget(Clear, popup);
    let allowed = matches!(app.platform_status(), PermissionStatus::Granted);
    let toggle = if allowed { "[x]" } else { "[ ]" };
    let lines = vec![
        Line::from("App info › permflow › Permissions"),
        Line::from(""),
        Line::from(format!("{} {}", toggle, app.permission_name())),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(SYSTEM_SURFACE))
            .block(
                Block::default()
                    .title(" Settings ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            ),
        popup,
    );
}
