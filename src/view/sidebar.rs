//! Rule sidebar rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::notify::NotificationKind;
use crate::sync::{SidebarSnapshot, SyncPhase};

use super::ast::{ast_lines, has_ast};
use super::theme::{HEADER_TEXT, MUTED_TEXT, PANEL_BORDER, STATUS_ERROR, STATUS_OK};

const RULE_PLACEHOLDER: &str = "Enter new rule";
const USER_DATA_PLACEHOLDER: &str =
    r#"Enter user data in JSON format (e.g., {"age": 32, "department": "Sales"})"#;

/// Render the sidebar into `area`.
pub fn render_sidebar(frame: &mut Frame, area: Rect, snapshot: &SidebarSnapshot) {
    let block = Block::default()
        .title(title(snapshot.phase))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER));

    let paragraph = Paragraph::new(sidebar_lines(snapshot)).block(block);
    frame.render_widget(paragraph, area);
}

fn title(phase: SyncPhase) -> String {
    match phase {
        SyncPhase::Idle => " Your Rules ".to_string(),
        SyncPhase::Refreshing => " Your Rules · refreshing ".to_string(),
        SyncPhase::Mutating => " Your Rules · saving ".to_string(),
        SyncPhase::Evaluating => " Your Rules · evaluating ".to_string(),
    }
}

/// Sidebar content as styled lines.
pub fn sidebar_lines(snapshot: &SidebarSnapshot) -> Vec<Line<'static>> {
    let header = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(MUTED_TEXT);
    let mut lines = Vec::new();

    if snapshot.rules.is_empty() {
        lines.push(Line::from(Span::styled("No rules found.", muted)));
    }
    for rule in snapshot.rules.rules() {
        let tag = match &rule.id {
            Some(id) => format!("  #{}", id),
            None => "  (unsaved)".to_string(),
        };
        lines.push(Line::from(vec![
            Span::raw(format!("• {}", rule.rule_string)),
            Span::styled(tag, muted),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Add New Rule", header)));
    let evaluation = &snapshot.evaluation;
    lines.push(if evaluation.selected_rule.is_empty() {
        Line::from(Span::styled(format!("> {}", RULE_PLACEHOLDER), muted))
    } else {
        Line::from(format!("> {}", evaluation.selected_rule))
    });

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("User Data (as JSON)", header)));
    if evaluation.user_data_text.is_empty() {
        lines.push(Line::from(Span::styled(USER_DATA_PLACEHOLDER, muted)));
    }
    for text in evaluation.user_data_text.lines() {
        lines.push(Line::from(text.to_string()));
    }

    if let Some(label) = snapshot.result_label() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Evaluation Result: {}", label),
            header,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Abstract Syntax Tree (AST)", header)));
    match evaluation.outcome.as_ref().map(|o| &o.ast) {
        Some(ast) if has_ast(ast) => {
            lines.extend(ast_lines(ast).into_iter().map(Line::from));
        }
        _ => lines.push(Line::from(Span::styled("No AST available", muted))),
    }

    if let Some(notification) = &snapshot.notification {
        let color = match notification.kind {
            NotificationKind::Success => STATUS_OK,
            NotificationKind::Error => STATUS_ERROR,
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            notification.message.clone(),
            Style::default().fg(color),
        )));
    }

    lines
}
