//! Markdown rendering into styled terminal lines for the preview pane.

use comrak::nodes::{AstNode, ListType, NodeValue, TableAlignment};
use comrak::{Arena, Options, parse_document};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Render markdown into lines no wider than `width` display columns.
///
/// Soft line breaks are rendered as line breaks, matching the hard-break
/// behavior of the HTML export.
pub fn render_lines(markdown: &str, width: u16) -> Vec<Line<'static>> {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;

    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &options);

    let mut renderer = Renderer {
        lines: Vec::new(),
        width: usize::from(width.max(1)),
    };
    renderer.blocks(root, "", "");
    while renderer
        .lines
        .last()
        .is_some_and(|line| line.width() == 0)
    {
        renderer.lines.pop();
    }
    renderer.lines
}

#[derive(Debug, Clone)]
enum Inline {
    Text(String, Style),
    Break,
}

struct Renderer {
    lines: Vec<Line<'static>>,
    width: usize,
}

impl Renderer {
    fn blank(&mut self) {
        if self.lines.last().is_some_and(|line| line.width() > 0) {
            self.lines.push(Line::default());
        }
    }

    fn blocks<'a>(&mut self, node: &'a AstNode<'a>, first: &str, rest: &str) {
        let mut prefix = first.to_string();
        for child in node.children() {
            self.block(child, &prefix, rest);
            prefix = rest.to_string();
        }
    }

    fn block<'a>(&mut self, node: &'a AstNode<'a>, first: &str, rest: &str) {
        match &node.data.borrow().value {
            NodeValue::Heading(heading) => {
                self.blank();
                let style = heading_style(heading.level);
                let marker = "#".repeat(usize::from(heading.level));
                let mut items = vec![Inline::Text(format!("{marker} "), style)];
                collect_inlines(node, style, &mut items);
                self.wrap(&items, first, rest);
                self.lines.push(Line::default());
            }
            NodeValue::Paragraph => {
                let mut items = Vec::new();
                collect_inlines(node, Style::default(), &mut items);
                self.wrap(&items, first, rest);
                if rest.is_empty() {
                    self.lines.push(Line::default());
                }
            }
            NodeValue::CodeBlock(code) => {
                let style = Style::default().fg(Color::Yellow);
                let gutter = Style::default().fg(Color::DarkGray);
                if !code.info.is_empty() {
                    self.lines.push(Line::from(vec![
                        Span::raw(first.to_string()),
                        Span::styled(format!("  {}", code.info), gutter),
                    ]));
                }
                for (idx, text) in code.literal.trim_end_matches('\n').split('\n').enumerate() {
                    let lead = if idx == 0 && code.info.is_empty() { first } else { rest };
                    self.lines.push(Line::from(vec![
                        Span::raw(lead.to_string()),
                        Span::styled("  │ ", gutter),
                        Span::styled(text.to_string(), style),
                    ]));
                }
                if rest.is_empty() {
                    self.lines.push(Line::default());
                }
            }
            NodeValue::List(list) => {
                let mut number = list.start;
                let mut prefix = first.to_string();
                for item in node.children() {
                    let marker = match &item.data.borrow().value {
                        NodeValue::TaskItem(checked) => {
                            if checked.is_some() { "[x] ".to_string() } else { "[ ] ".to_string() }
                        }
                        _ => match list.list_type {
                            ListType::Bullet => "• ".to_string(),
                            ListType::Ordered => format!("{number}. "),
                        },
                    };
                    number += 1;
                    let pad = " ".repeat(marker.width());
                    self.blocks(item, &format!("{prefix}{marker}"), &format!("{rest}{pad}"));
                    prefix = rest.to_string();
                }
                if rest.is_empty() {
                    self.blank();
                }
            }
            NodeValue::BlockQuote => {
                self.blocks(node, &format!("{first}│ "), &format!("{rest}│ "));
                if rest.is_empty() {
                    self.blank();
                }
            }
            NodeValue::ThematicBreak => {
                let rule = "─".repeat(self.width.saturating_sub(first.width()).max(1));
                self.lines.push(Line::from(vec![
                    Span::raw(first.to_string()),
                    Span::styled(rule, Style::default().fg(Color::DarkGray)),
                ]));
                self.lines.push(Line::default());
            }
            NodeValue::Table(table) => {
                let alignments = table.alignments.clone();
                self.table(node, &alignments, rest);
                self.lines.push(Line::default());
            }
            NodeValue::HtmlBlock(html) => {
                let style = Style::default().fg(Color::DarkGray);
                for text in html.literal.trim_end_matches('\n').split('\n') {
                    self.lines.push(Line::from(vec![
                        Span::raw(rest.to_string()),
                        Span::styled(text.to_string(), style),
                    ]));
                }
            }
            _ => self.blocks(node, first, rest),
        }
    }

    /// Word-wrap inline items, emitting `first` before the first line and
    /// `rest` before continuation lines.
    fn wrap(&mut self, items: &[Inline], first: &str, rest: &str) {
        let mut spans = lead(first);
        let mut used = first.width();
        let mut fresh = true;

        for item in items {
            match item {
                Inline::Break => {
                    self.lines.push(finish(std::mem::replace(&mut spans, lead(rest))));
                    used = rest.width();
                    fresh = true;
                }
                Inline::Text(text, style) => {
                    for word in text.split_inclusive(' ') {
                        if !fresh && used + word.trim_end().width() > self.width {
                            self.lines.push(finish(std::mem::replace(&mut spans, lead(rest))));
                            used = rest.width();
                            fresh = true;
                        }
                        let word = if fresh { word.trim_start() } else { word };
                        if word.is_empty() {
                            continue;
                        }
                        spans.push(Span::styled(word.to_string(), *style));
                        used += word.width();
                        fresh = false;
                    }
                }
            }
        }
        self.lines.push(finish(spans));
    }

    fn table<'a>(&mut self, node: &'a AstNode<'a>, alignments: &[TableAlignment], indent: &str) {
        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut header = false;
        for row in node.children() {
            if let NodeValue::TableRow(is_header) = row.data.borrow().value {
                header |= is_header && rows.is_empty();
                rows.push(row.children().map(plain_text).collect());
            }
        }
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        if columns == 0 {
            return;
        }

        let mut widths = vec![1_usize; columns];
        for row in &rows {
            for (idx, cell) in row.iter().enumerate() {
                widths[idx] = widths[idx].max(cell.width());
            }
        }
        let budget = self.width.saturating_sub(indent.width()).max(4);
        while 1 + widths.iter().sum::<usize>() + 3 * columns > budget {
            let Some((widest, _)) = widths.iter().enumerate().max_by_key(|(_, w)| **w) else {
                break;
            };
            if widths[widest] <= 1 {
                break;
            }
            widths[widest] -= 1;
        }

        let border = Style::default().fg(Color::DarkGray);
        let push_border = |lines: &mut Vec<Line<'static>>, left: char, mid: char, right: char| {
            let mut out = String::from(left);
            for (idx, w) in widths.iter().enumerate() {
                out.push_str(&"─".repeat(w + 2));
                out.push(if idx + 1 < widths.len() { mid } else { right });
            }
            lines.push(Line::from(vec![
                Span::raw(indent.to_string()),
                Span::styled(out, border),
            ]));
        };

        push_border(&mut self.lines, '┌', '┬', '┐');
        for (row_idx, row) in rows.iter().enumerate() {
            let is_header = header && row_idx == 0;
            let cell_style = if is_header {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let mut spans = vec![Span::raw(indent.to_string()), Span::styled("│", border)];
            for (idx, width) in widths.iter().enumerate() {
                let cell = truncate(row.get(idx).map_or("", String::as_str), *width);
                let align = alignments.get(idx).copied().unwrap_or(TableAlignment::None);
                spans.push(Span::styled(
                    format!(" {} ", align_cell(&cell, *width, align)),
                    cell_style,
                ));
                spans.push(Span::styled("│", border));
            }
            self.lines.push(Line::from(spans));
            if is_header {
                push_border(&mut self.lines, '├', '┼', '┤');
            }
        }
        push_border(&mut self.lines, '└', '┴', '┘');
    }
}

fn lead(prefix: &str) -> Vec<Span<'static>> {
    if prefix.is_empty() {
        Vec::new()
    } else {
        vec![Span::raw(prefix.to_string())]
    }
}

fn finish(mut spans: Vec<Span<'static>>) -> Line<'static> {
    if let Some(last) = spans.last_mut() {
        let trimmed = last.content.trim_end().len();
        if trimmed < last.content.len() {
            last.content = last.content[..trimmed].to_string().into();
        }
    }
    Line::from(spans)
}

fn heading_style(level: u8) -> Style {
    let color = match level {
        1 => Color::Cyan,
        2 => Color::Green,
        3 => Color::Yellow,
        _ => Color::Magenta,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn collect_inlines<'a>(node: &'a AstNode<'a>, style: Style, out: &mut Vec<Inline>) {
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Text(text) => out.push(Inline::Text(text.clone(), style)),
            NodeValue::Code(code) => out.push(Inline::Text(
                code.literal.clone(),
                style.fg(Color::Yellow).bg(Color::Black),
            )),
            NodeValue::HtmlInline(html) => {
                out.push(Inline::Text(html.clone(), style.fg(Color::DarkGray)));
            }
            NodeValue::SoftBreak | NodeValue::LineBreak => out.push(Inline::Break),
            NodeValue::Emph => collect_inlines(child, style.add_modifier(Modifier::ITALIC), out),
            NodeValue::Strong => collect_inlines(child, style.add_modifier(Modifier::BOLD), out),
            NodeValue::Strikethrough => {
                collect_inlines(child, style.add_modifier(Modifier::CROSSED_OUT), out);
            }
            NodeValue::Link(_) => collect_inlines(
                child,
                style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
                out,
            ),
            NodeValue::Image(image) => {
                let alt = plain_text(child);
                let label = if alt.is_empty() { image.url.clone() } else { alt };
                out.push(Inline::Text(
                    format!("[image: {label}]"),
                    style.fg(Color::Magenta),
                ));
            }
            _ => collect_inlines(child, style, out),
        }
    }
}

fn plain_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for descendant in node.descendants() {
        match &descendant.data.borrow().value {
            NodeValue::Text(t) => text.push_str(t),
            NodeValue::Code(code) => text.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }
    text
}

fn truncate(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}

fn align_cell(cell: &str, width: usize, align: TableAlignment) -> String {
    let padding = width.saturating_sub(cell.width());
    match align {
        TableAlignment::Right => format!("{}{cell}", " ".repeat(padding)),
        TableAlignment::Center => {
            let left = padding / 2;
            format!("{}{cell}{}", " ".repeat(left), " ".repeat(padding - left))
        }
        TableAlignment::Left | TableAlignment::None => format!("{cell}{}", " ".repeat(padding)),
    }
}
