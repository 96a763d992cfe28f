use super::*;
use crate::app::{Message, Model, ToastLevel, update};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(80, 24);
    Terminal::new(backend).unwrap()
}

fn draw(model: &Model) -> Buffer {
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(model, frame)).unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buffer: &Buffer, row: u16) -> String {
    (0..buffer.area.width)
        .map(|col| buffer[(col, row)].symbol())
        .collect()
}

fn screen_text(buffer: &Buffer) -> String {
    (0..buffer.area.height)
        .map(|row| row_text(buffer, row))
        .collect::<Vec<_>>()
        .join("\n")
}

fn model_with_text(text: &str) -> Model {
    update(Model::new((80, 24)), Message::InsertText(text.to_string()))
}

#[test]
fn test_empty_editor_shows_placeholder() {
    let buffer = draw(&Model::new((80, 24)));
    let screen = screen_text(&buffer);
    assert!(screen.contains("Enter your Markdown content here..."));
    assert!(screen.contains("# Heading 1"));
}

#[test]
fn test_editor_shows_text_with_line_numbers() {
    let buffer = draw(&model_with_text("first\nsecond"));
    assert!(row_text(&buffer, 0).starts_with("1 first"));
    assert!(row_text(&buffer, 1).starts_with("2 second"));
    assert!(!screen_text(&buffer).contains("Enter your Markdown"));
}

#[test]
fn test_editor_status_bar_shows_cursor_position() {
    let buffer = draw(&model_with_text("ab\ncd"));
    let status = row_text(&buffer, 23);
    assert!(status.contains("EDIT"));
    assert!(status.contains("Ln 2, Col 3"), "status: {status}");
}

#[test]
fn test_editor_cursor_cell_is_inverted() {
    let model = update(model_with_text("ab"), Message::MoveHome);
    let buffer = draw(&model);
    let cell = &buffer[(2, 0)];
    assert_eq!(cell.symbol(), "a");
    assert_eq!(cell.bg, Color::White);
}

#[test]
fn test_preview_renders_markdown_and_statistics() {
    let model = update(model_with_text("# Title\n\nhello world"), Message::ToggleMode);
    let buffer = draw(&model);
    let screen = screen_text(&buffer);

    assert!(screen.contains("Markdown Preview"));
    assert!(screen.contains("# Title"));
    assert!(screen.contains("hello world"));
    assert!(screen.contains("Metadata"));
    assert!(screen.contains("Characters"));
    assert!(screen.contains("Words"));
    assert!(screen.contains("Lines"));
    assert!(row_text(&buffer, 23).contains("PREVIEW"));
}

#[test]
fn test_statistics_panel_values() {
    let model = update(model_with_text("one two\nthree"), Message::ToggleMode);
    let buffer = draw(&model);
    let panel: Vec<String> = (0..24)
        .map(|row| row_text(&buffer, row).chars().skip(60).collect::<String>())
        .collect();
    let position = |label: &str| panel.iter().position(|row| row.contains(label)).unwrap();

    assert!(panel[position("Characters") + 1].contains("13"));
    assert!(panel[position("Words") + 1].contains('3'));
    assert!(panel[position("Lines") + 1].contains('2'));
}

#[test]
fn test_hidden_statistics_panel() {
    let model = update(model_with_text("hello"), Message::ToggleMode);
    let model = update(model, Message::ToggleStats);
    let screen = screen_text(&draw(&model));
    assert!(!screen.contains("Metadata"));
    assert!(screen.contains("hello"));
}

#[test]
fn test_blank_inline_preview_says_nothing_to_preview() {
    let model = update(Model::new((80, 24)), Message::ToggleMode);
    let screen = screen_text(&draw(&model));
    assert!(screen.contains("Nothing to preview"));
}

#[test]
fn test_navigated_preview_title_and_depth() {
    let model = update(model_with_text("hello"), Message::SubmitPreview);
    let buffer = draw(&model);
    assert!(screen_text(&buffer).contains("Markdown Preview (snapshot)"));
    assert!(row_text(&buffer, 23).contains("PREVIEW 1"));
}

#[test]
fn test_toast_replaces_status_bar() {
    let mut model = Model::new((80, 24));
    model.show_toast(ToastLevel::Error, "HTML conversion failed");
    let status = row_text(&draw(&model), 23);
    assert!(status.contains("[error] HTML conversion failed"));
    assert!(!status.contains("EDIT"));
}

#[test]
fn test_help_overlay_lists_view_bindings() {
    let model = update(Model::new((80, 24)), Message::ToggleHelp);
    let screen = screen_text(&draw(&model));
    assert!(screen.contains("Help"));
    assert!(screen.contains("Ctrl+S"));
    assert!(screen.contains("Press any key to close"));

    let model = update(model_with_text("x"), Message::SubmitPreview);
    let model = update(model, Message::ToggleHelp);
    let screen = screen_text(&draw(&model));
    assert!(screen.contains("Paste markdown and exit"));
}

#[test]
fn test_preview_scroll_skips_lines() {
    let text: String = (0..40).map(|i| format!("row{i}\n")).collect();
    let model = update(model_with_text(&text), Message::ToggleMode);
    let model = update(model, Message::ScrollDown(5));
    let screen = screen_text(&draw(&model));
    assert!(!screen.contains("row0 "));
    assert!(screen.contains("row5"));
}

#[test]
fn test_layout_helpers() {
    assert_eq!(editor_visible_rows(24), 23);
    assert_eq!(preview_visible_rows(24), 21);
    assert_eq!(preview_content_width(80, false), 77);
    assert!(preview_content_width(80, true) < 77);
    assert_eq!(preview_content_width(0, true), 1);
    let columns = split_preview_columns(Rect::new(0, 0, 80, 10));
    assert_eq!(columns[0].width + columns[1].width, 80);
}

#[test]
fn test_line_number_width() {
    use super::render::line_number_width;
    assert_eq!(line_number_width(0), 1);
    assert_eq!(line_number_width(9), 1);
    assert_eq!(line_number_width(10), 2);
    assert_eq!(line_number_width(1234), 4);
}
