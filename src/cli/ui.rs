use super::app::App;
use super::session::format_entry;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)].as_ref())
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)].as_ref())
        .split(rows[0]);

    draw_output(f, app, columns[0]);
    draw_history(f, app, columns[1]);

    let input_rect = rows[1];
    f.render_widget(&app.textarea, input_rect);

    if app.popup_open && !app.suggestions.is_empty() {
        draw_suggestions(f, app, input_rect);
    }
}

fn draw_output(f: &mut Frame, app: &App, area: Rect) {
    // Keep the newest lines visible
    let inner_height = area.height.saturating_sub(2) as usize;
    let skip_count = app.messages.len().saturating_sub(inner_height);

    let items: Vec<ListItem> = app
        .messages
        .iter()
        .skip(skip_count)
        .map(|line| ListItem::new(line.clone()))
        .collect();

    let panel = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Output "))
        .style(Style::default().fg(Color::White));

    f.render_widget(panel, area);
}

fn draw_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.calculator().history();
    let inner_height = area.height.saturating_sub(2) as usize;
    let skip_count = history.len().saturating_sub(inner_height);

    let items: Vec<ListItem> = history
        .iter()
        .skip(skip_count)
        .map(|entry| ListItem::new(format_entry(entry)))
        .collect();

    let title = format!(" History ({}) ", history.len());
    let panel = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(panel, area);
}

fn draw_suggestions(f: &mut Frame, app: &App, input_rect: Rect) {
    let (_, col) = app.textarea.cursor();
    let screen = f.area();

    let width: u16 = 24;
    let height = 6.min(app.suggestions.len() as u16 + 2);

    // Open above the input line, it is the last row of the screen
    let x = (input_rect.x + col as u16 + 1).min(screen.width.saturating_sub(width));
    let y = input_rect.y.saturating_sub(height);
    let area = Rect::new(x, y, width.min(screen.width), height);

    f.render_widget(Clear, area);

    let items: Vec<ListItem> = app
        .suggestions
        .iter()
        .map(|s| ListItem::new(s.as_str()))
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.suggestion_index));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Suggestions"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut state);
}
