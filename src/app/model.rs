use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use ratatui::text::Line;

use crate::config::PreviewStyle;
use crate::controller::{Controller, Mode, Preview, Statistics};
use crate::editor::EditorBuffer;
use crate::markdown::{ConvertError, render_lines};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Terminal lines for one markdown source at one width.
struct RenderedPreview {
    markdown: String,
    width: u16,
    lines: Rc<[Line<'static>]>,
}

/// Which surface is on screen, derived from the controller and the
/// navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Editor,
    InlinePreview,
    NavigatedPreview,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// Document buffer and display mode
    pub controller: Controller,
    /// Text-entry surface mirrored into the controller
    pub editor: EditorBuffer,
    /// Navigated previews, topmost last
    pub previews: Vec<Preview>,
    /// What submitting the editor opens
    pub preview_style: PreviewStyle,
    /// Whether the statistics panel is shown next to previews
    pub stats_visible: bool,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// First visible editor line
    pub editor_scroll: usize,
    /// First visible preview line
    pub preview_scroll: usize,
    /// Markdown queued for the paste target on exit
    pub pending_paste: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Terminal size as (width, height)
    pub terminal_size: (u16, u16),
    toast: Option<Toast>,
    rendered: RefCell<Option<RenderedPreview>>,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("controller", &self.controller)
            .field("previews", &self.previews.len())
            .field("view", &self.view())
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a fresh session: empty buffer, editing.
    pub fn new(terminal_size: (u16, u16)) -> Self {
        Self::with_controller(Controller::new(), terminal_size)
    }

    /// Create a session around an existing controller.
    pub fn with_controller(controller: Controller, terminal_size: (u16, u16)) -> Self {
        let editor = EditorBuffer::from_text(controller.text());
        Self {
            controller,
            editor,
            previews: Vec::new(),
            preview_style: PreviewStyle::default(),
            stats_visible: true,
            help_visible: false,
            editor_scroll: 0,
            preview_scroll: 0,
            pending_paste: None,
            should_quit: false,
            terminal_size,
            toast: None,
            rendered: RefCell::new(None),
        }
    }

    pub const fn with_preview_style(mut self, style: PreviewStyle) -> Self {
        self.preview_style = style;
        self
    }

    pub const fn with_stats_visible(mut self, visible: bool) -> Self {
        self.stats_visible = visible;
        self
    }

    pub fn view(&self) -> View {
        if !self.previews.is_empty() {
            View::NavigatedPreview
        } else if self.controller.mode() == Mode::Previewing {
            View::InlinePreview
        } else {
            View::Editor
        }
    }

    /// Markdown shown by the current view.
    pub fn active_markdown(&self) -> &str {
        self.previews
            .last()
            .map_or_else(|| self.controller.text(), Preview::markdown)
    }

    pub fn active_statistics(&self) -> Statistics {
        self.previews
            .last()
            .map_or_else(|| self.controller.statistics(), Preview::statistics)
    }

    /// HTML for the current view.
    pub fn active_html(&self) -> Result<String, ConvertError> {
        match self.previews.last() {
            Some(preview) => preview.to_html(self.controller.converter()),
            None => self.controller.to_html(),
        }
    }

    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        let ttl = match level {
            ToastLevel::Info => Duration::from_secs(2),
            ToastLevel::Warning | ToastLevel::Error => Duration::from_secs(4),
        };
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + ttl,
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }

    /// Push the editor's text into the controller after an edit.
    pub(super) fn sync_editor(&mut self) {
        self.controller.set_text(self.editor.text());
        self.editor_ensure_cursor_visible();
    }

    pub(super) fn editor_ensure_cursor_visible(&mut self) {
        let rows = crate::ui::editor_visible_rows(self.terminal_size.1).max(1);
        let (line, _) = self.editor.cursor_position();
        if line < self.editor_scroll {
            self.editor_scroll = line;
        } else if line >= self.editor_scroll + rows {
            self.editor_scroll = line + 1 - rows;
        }
    }

    /// Largest useful preview scroll offset at the current size.
    pub fn max_preview_scroll(&self) -> usize {
        let (width, height) = self.terminal_size;
        let content_width = crate::ui::preview_content_width(width, self.stats_visible);
        let total = self.preview_lines(content_width).len();
        total.saturating_sub(crate::ui::preview_visible_rows(height))
    }

    /// Rendered lines of the shown markdown, reused until the markdown
    /// or the width changes.
    pub fn preview_lines(&self, width: u16) -> Rc<[Line<'static>]> {
        let markdown = self.active_markdown();
        let mut rendered = self.rendered.borrow_mut();
        if let Some(cached) = rendered
            .as_ref()
            .filter(|cached| cached.width == width && cached.markdown == markdown)
        {
            return Rc::clone(&cached.lines);
        }
        let lines: Rc<[Line<'static>]> = render_lines(markdown, width).into();
        *rendered = Some(RenderedPreview {
            markdown: markdown.to_string(),
            width,
            lines: Rc::clone(&lines),
        });
        lines
    }

    pub(super) fn preview_page(&self) -> usize {
        crate::ui::preview_visible_rows(self.terminal_size.1).max(1)
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new((80, 24))
    }
}
