//! Footer bar with key hints for the active context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(hints(app.input_context()))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

const fn hints(context: InputContext) -> &'static str {
    match context {
        InputContext::Main => "a:Add  Enter:Details  d:Delete  y:Copy count  q:Quit",
        InputContext::AddItem => "Tab:Field  +/-:Amount  Enter:Add  Ctrl+U:Clear  Esc:Close",
        InputContext::ItemDetails => "↑↓:Field  c:Copy  Esc:Close",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::AppCommand;
    use crate::test_utils::{buffer_to_string, mock_app};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn render_footer(app: &App, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[rstest]
    fn test_footer_displays_main_shortcuts(mock_app: App) {
        let content = render_footer(&mock_app, 80);

        for shortcut in ["a:Add", "Enter:Details", "d:Delete", "y:Copy count", "q:Quit"] {
            assert!(
                content.contains(shortcut),
                "Footer should contain '{shortcut}', got: {content}"
            );
        }
    }

    #[rstest]
    fn test_footer_follows_popup(mut mock_app: App) {
        mock_app.execute_command(AppCommand::OpenAddItem);
        let content = render_footer(&mock_app, 80);

        assert!(content.contains("Ctrl+U:Clear"), "got: {content}");
        assert!(!content.contains("q:Quit"));
    }

    #[rstest]
    fn test_footer_is_centered(mock_app: App) {
        let content = render_footer(&mock_app, 80);

        let leading = content.len() - content.trim_start().len();
        let trailing = content.len() - content.trim_end().len();
        assert!(leading.abs_diff(trailing) <= 1, "got: {content:?}");
    }

    #[rstest]
    fn test_footer_rendering_robustness(mock_app: App) {
        render_footer(&mock_app, 20);

        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 80, 0), &mock_app))
            .unwrap();
    }
}
