use crate::remote::Priority;
use crate::state::Severity;
use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for the highlighted list item.
///
pub fn active_list_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .bg(theme.highlight_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for secondary text.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for text of completed tasks.
///
pub fn completed_text_style(theme: &Theme) -> Style {
    muted_text_style(theme).add_modifier(Modifier::CROSSED_OUT)
}

pub fn priority_style(theme: &Theme, priority: Priority) -> Style {
    let color = match priority {
        Priority::High => theme.priority_high,
        Priority::Medium => theme.priority_medium,
        Priority::Low => theme.priority_low,
    };
    Style::default()
        .fg(color.to_color())
        .add_modifier(Modifier::BOLD)
}

pub fn severity_style(theme: &Theme, severity: Severity) -> Style {
    let color = match severity {
        Severity::Success => theme.success,
        Severity::Error => theme.error,
    };
    Style::default().fg(color.to_color())
}
