use crate::platform::PermissionStatus;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    permission: &'a str,
    status: PermissionStatus,
}

impl<'a> Header<'a> {
    pub fn new(permission: &'a str, status: PermissionStatus) -> Self {
        Self { permission, status }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (label, color) = status_label(self.status);
        let line = Line::from(vec![
            Span::styled("  permflow", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.permission.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("os: ", text_style),
            Span::styled(label, Style::default().fg(color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn status_label(status: PermissionStatus) -> (String, Color) {
    match status {
        PermissionStatus::NotDetermined => ("not determined".to_string(), HEADER_TEXT),
        PermissionStatus::Granted => ("granted".to_string(), STATUS_OK),
        PermissionStatus::Denied { count } => (format!("denied x{}", count), STATUS_WARN),
        PermissionStatus::PermanentlyDenied => ("permanently denied".to_string(), STATUS_ERROR),
    }
}
