//! The editable content model behind the surface.
//!
//! Content is plain text. Every `'\n'` starts a new block, which is how the
//! rendered content area separates lines: the first block renders as inline
//! text, each following block as its own `<div>`, and an empty following
//! block as `<div><br></div>`. [`ContentModel::value`] turns the blocks back
//! into a `'\n'`-joined string.

use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;

/// Normalize `"\r\n"` and lone `'\r'` line endings to `'\n'`.
pub fn normalize_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out
}

/// Escape text for inclusion in markup.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

/// Remove at most one leading and one trailing `'\n'`.
fn trim_line_break_artifacts(text: &str) -> &str {
    let text = text.strip_prefix('\n').unwrap_or(text);
    text.strip_suffix('\n').unwrap_or(text)
}

/// Text, caret and selection of the content area.
#[derive(Debug, Clone, Default)]
pub struct ContentModel {
    rope: Rope,
    /// Selection anchor as a char index.
    anchor: usize,
    /// Caret position as a char index.
    head: usize,
}

impl ContentModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole content verbatim. The caret moves to the start.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(&normalize_line_breaks(text));
        self.anchor = 0;
        self.head = 0;
    }

    /// Remove all content.
    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// The raw text, line breaks included.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// The blocks the content renders as.
    pub fn blocks(&self) -> Vec<String> {
        self.text().split('\n').map(str::to_string).collect()
    }

    /// The sanitized plain-text value.
    ///
    /// Blocks are joined with `'\n'`; a single leading and a single trailing
    /// line break are dropped, internal blank lines are kept.
    pub fn value(&self) -> String {
        trim_line_break_artifacts(&self.blocks().join("\n")).to_string()
    }

    /// The inner markup of the rendered content area.
    pub fn markup(&self) -> String {
        let mut out = String::new();
        for (i, block) in self.blocks().iter().enumerate() {
            if i == 0 {
                out.push_str(&escape_markup(block));
            } else if block.is_empty() {
                out.push_str("<div><br></div>");
            } else {
                out.push_str("<div>");
                out.push_str(&escape_markup(block));
                out.push_str("</div>");
            }
        }
        out
    }

    /// The caret position as a char index.
    pub fn caret(&self) -> usize {
        self.head
    }

    /// The selected char range, if the selection is not collapsed.
    pub fn selection(&self) -> Option<(usize, usize)> {
        if self.anchor == self.head {
            None
        } else {
            Some((self.anchor.min(self.head), self.anchor.max(self.head)))
        }
    }

    /// Select everything, caret at the end.
    pub fn select_all(&mut self) {
        self.anchor = 0;
        self.head = self.rope.len_chars();
    }

    /// Collapse the selection onto its end.
    pub fn collapse_to_end(&mut self) {
        let end = self.anchor.max(self.head);
        self.anchor = end;
        self.head = end;
    }

    /// Insert plain text at the caret, replacing the selection.
    pub fn insert_text(&mut self, text: &str) {
        self.delete_selection();
        let text = normalize_line_breaks(text);
        self.rope.insert(self.head, &text);
        self.head += text.chars().count();
        self.anchor = self.head;
    }

    /// Delete the selection, or the grapheme before the caret.
    pub fn delete_backward(&mut self) {
        if self.delete_selection() {
            return;
        }
        let start = self.prev_boundary(self.head);
        if start < self.head {
            self.rope.remove(start..self.head);
            self.head = start;
            self.anchor = start;
        }
    }

    /// Delete the selection, or the grapheme after the caret.
    pub fn delete_forward(&mut self) {
        if self.delete_selection() {
            return;
        }
        let end = self.next_boundary(self.head);
        if end > self.head {
            self.rope.remove(self.head..end);
        }
    }

    pub fn move_left(&mut self) {
        self.head = match self.selection() {
            Some((start, _)) => start,
            None => self.prev_boundary(self.head),
        };
        self.anchor = self.head;
    }

    pub fn move_right(&mut self) {
        self.head = match self.selection() {
            Some((_, end)) => end,
            None => self.next_boundary(self.head),
        };
        self.anchor = self.head;
    }

    /// Move the caret to the start of its block.
    pub fn move_home(&mut self) {
        let line = self.rope.char_to_line(self.head);
        self.head = self.rope.line_to_char(line);
        self.anchor = self.head;
    }

    /// Move the caret to the end of its block.
    pub fn move_end(&mut self) {
        let line = self.rope.char_to_line(self.head);
        let start = self.rope.line_to_char(line);
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
        }
        self.head = start + len;
        self.anchor = self.head;
    }

    fn delete_selection(&mut self) -> bool {
        match self.selection() {
            Some((start, end)) => {
                self.rope.remove(start..end);
                self.head = start;
                self.anchor = start;
                true
            }
            None => false,
        }
    }

    /// Char index of the grapheme boundary before `pos`.
    fn prev_boundary(&self, pos: usize) -> usize {
        if pos == 0 {
            return 0;
        }
        let text = self.text();
        let byte_pos = self.rope.char_to_byte(pos);
        text[..byte_pos]
            .grapheme_indices(true)
            .next_back()
            .map(|(byte, _)| self.rope.byte_to_char(byte))
            .unwrap_or(0)
    }

    /// Char index of the grapheme boundary after `pos`.
    fn next_boundary(&self, pos: usize) -> usize {
        let len = self.rope.len_chars();
        if pos >= len {
            return len;
        }
        let text = self.text();
        let byte_pos = self.rope.char_to_byte(pos);
        text[byte_pos..]
            .graphemes(true)
            .next()
            .map(|g| self.rope.byte_to_char(byte_pos + g.len()))
            .unwrap_or(len)
    }
}
