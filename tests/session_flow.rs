//! End-to-end flows through the public message API.

use mdpad::app::{Message, Model, View, update};
use mdpad::config::PreviewStyle;
use mdpad::controller::{Controller, Mode};
use mdpad::markdown::{ComrakConverter, HtmlOptions, MarkdownConverter};

fn run(model: Model, msgs: impl IntoIterator<Item = Message>) -> Model {
    msgs.into_iter().fold(model, update)
}

#[test]
fn test_write_preview_and_paste_fixture() {
    let fixture = include_str!("fixtures/sample.md");
    let model = run(
        Model::new((100, 30)),
        [
            Message::InsertText(fixture.to_string()),
            Message::SubmitPreview,
        ],
    );
    assert_eq!(model.view(), View::NavigatedPreview);

    let stats = model.active_statistics();
    assert_eq!(stats.characters, fixture.chars().count());
    assert_eq!(stats.lines, fixture.matches('\n').count() + 1);

    let html = model.active_html().unwrap();
    assert!(html.contains("<h1>Release notes</h1>"));
    assert!(html.contains("<table>"));
    assert!(html.contains("<del>struck</del>"));

    let model = update(model, Message::PasteMarkdown);
    assert_eq!(model.pending_paste.as_deref(), Some(fixture));
    assert!(model.should_quit);
}

#[test]
fn test_inline_session_round_trip() {
    let model = Model::new((80, 24)).with_preview_style(PreviewStyle::Inline);
    let model = run(
        model,
        [
            Message::InsertText("draft".to_string()),
            Message::SubmitPreview,
        ],
    );
    assert_eq!(model.controller.mode(), Mode::Previewing);

    let model = run(model, [Message::Back, Message::InsertChar('!')]);
    assert_eq!(model.controller.mode(), Mode::Editing);
    assert_eq!(model.controller.text(), "draft!");
}

#[test]
fn test_clear_then_submit_opens_nothing() {
    let model = run(
        Model::new((80, 24)),
        [
            Message::InsertText("temporary".to_string()),
            Message::Clear,
            Message::SubmitPreview,
        ],
    );
    assert_eq!(model.view(), View::Editor);
    assert!(model.previews.is_empty());
}

#[test]
fn test_controller_standalone_usage() {
    let mut controller = Controller::new();
    assert!(controller.set_text("one\ntwo"));
    assert!(controller.request_preview());
    assert!(!controller.set_text("ignored"));
    assert!(!controller.clear());
    controller.toggle_mode();
    assert_eq!(controller.mode(), Mode::Editing);
    assert_eq!(controller.text(), "one\ntwo");
    let html = controller.to_html().unwrap();
    assert!(html.contains("one<br />"), "got: {html}");
}

#[test]
fn test_converter_without_hard_breaks() {
    let converter = ComrakConverter::new(HtmlOptions {
        hard_breaks: false,
        ..HtmlOptions::default()
    });
    let html = converter.convert("one\ntwo").unwrap();
    assert!(html.contains("<p>one\ntwo</p>"), "got: {html}");
    assert!(!html.contains("<br"));
}

#[test]
fn test_preview_and_export_both_keep_raw_html() {
    let markdown = "<details>\n<summary>More</summary>\n</details>";
    let preview: String = mdpad::markdown::render_lines(markdown, 80)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    let html = ComrakConverter::default().convert(markdown).unwrap();
    for tag in ["<details>", "<summary>More</summary>"] {
        assert!(preview.contains(tag), "preview: {preview}");
        assert!(html.contains(tag), "html: {html}");
    }
}
