//! Word wrapping and column alignment for help text
//!
//! Text is broken into lines that fit between a left and a right margin, cutting only at word
//! boundaries, and each line is then aligned.
//!
//! ```
//! use optarg_layout::Align;
//! use optarg_layout::Layout;
//!
//! let lines = Layout::new(16)
//!     .left_margin(2)
//!     .align(Align::Justify)
//!     .wrap("fits in a narrow column");
//! assert_eq!(lines, ["  fits   in    a", "  narrow  column"]);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

/// Line width used when a width of `0` is requested
pub const DEFAULT_WIDTH: usize = 80;

/// How a line is placed within its column
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub enum Align {
    /// Start at the left margin
    #[default]
    Left,
    /// Centered between the margins, rounding towards the left
    Center,
    /// End at the right margin
    Right,
    /// Spaces between words are widened so the line fills the column
    Justify,
}

/// Column geometry for [`Layout::wrap`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    left_margin: usize,
    right_margin: usize,
    align: Align,
}

impl Layout {
    /// Lines of `width` characters, margins included
    pub fn new(width: usize) -> Self {
        let width = if width == 0 { DEFAULT_WIDTH } else { width };
        Self {
            width,
            left_margin: 0,
            right_margin: 0,
            align: Align::Left,
        }
    }

    /// Indent every line by `columns` spaces
    pub fn left_margin(mut self, columns: usize) -> Self {
        self.left_margin = columns;
        self
    }

    /// Keep `columns` free at the end of every line
    pub fn right_margin(mut self, columns: usize) -> Self {
        self.right_margin = columns;
        self
    }

    /// Set the alignment
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Columns available for text between the margins
    pub fn size(&self) -> usize {
        self.width
            .saturating_sub(self.left_margin + self.right_margin)
    }

    /// Break `text` into aligned lines
    ///
    /// Text that already fits is returned as a single line, untrimmed. Otherwise lines are cut
    /// at the last [boundary][is_boundary] that keeps them within [`Layout::size`], and
    /// whitespace around the cut is dropped. A boundary character other than whitespace starts
    /// the next line. Words are never split: one longer than the column gets a line of its own
    /// and overflows.
    pub fn wrap(&self, text: &str) -> Vec<String> {
        let size = self.size();
        if width(text) <= size {
            return vec![self.align_line(text)];
        }

        let mut lines = Vec::new();
        let mut rest = text.trim_start();
        while width(rest) > size {
            let Some(cut) = cut_point(rest, size) else {
                break;
            };
            lines.push(self.align_line(rest[..cut].trim()));
            rest = rest[cut..].trim_start();
        }
        let rest = rest.trim_end();
        if !rest.is_empty() || lines.is_empty() {
            lines.push(self.align_line(rest));
        }
        lines
    }

    /// Place a single line according to the margins and alignment
    pub fn align_line(&self, line: &str) -> String {
        let pad = " ".repeat(self.left_margin);
        match self.align {
            Align::Left => format!("{pad}{line}"),
            Align::Right => {
                let end = self.width.saturating_sub(self.right_margin);
                let indent = end.saturating_sub(width(line)).max(self.left_margin);
                format!("{}{line}", " ".repeat(indent))
            }
            Align::Center => {
                let indent = self.size().saturating_sub(width(line)) / 2;
                format!("{pad}{}{line}", " ".repeat(indent))
            }
            Align::Justify => format!("{pad}{}", justify(line, self.size())),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

/// Shorthand for [`Layout::wrap`]
pub fn wrap(
    text: &str,
    width: usize,
    left_margin: usize,
    right_margin: usize,
    align: Align,
) -> Vec<String> {
    Layout::new(width)
        .left_margin(left_margin)
        .right_margin(right_margin)
        .align(align)
        .wrap(text)
}

/// Whether a line may be broken at `c`
///
/// Everything except letters, digits, `,` and `.` is a boundary.
pub fn is_boundary(c: char) -> bool {
    !(c.is_alphanumeric() || c == ',' || c == '.')
}

fn width(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset to cut `text` at so the head fits in `size` columns
///
/// Falls back to the first boundary past `size` when a word is too long. The first character
/// is never a cut point so every cut makes progress.
fn cut_point(text: &str, size: usize) -> Option<usize> {
    let mut last = None;
    for (column, (offset, c)) in text.char_indices().enumerate().skip(1) {
        if !is_boundary(c) {
            continue;
        }
        if column <= size {
            last = Some(offset);
        } else {
            return Some(last.unwrap_or(offset));
        }
    }
    last
}

/// Widen the gaps of `line` until it is `size` columns wide
///
/// Every gap grows by one space per round until the line would overflow, then gaps are
/// narrowed again starting from the left. Lines without spaces, or already at least `size`
/// wide, are returned unchanged.
fn justify(line: &str, size: usize) -> String {
    if !line.contains(' ') || size <= width(line) {
        return line.to_owned();
    }

    let mut line = line.to_owned();
    let mut gap = 1;
    while width(&line) <= size {
        line = line.replace(&" ".repeat(gap), &" ".repeat(gap + 1));
        gap += 1;
    }
    while size < width(&line) && 1 < gap {
        let wide = " ".repeat(gap);
        if line.contains(&wide) {
            line = line.replacen(&wide, &" ".repeat(gap - 1), 1);
        } else {
            gap -= 1;
        }
    }
    line
}
