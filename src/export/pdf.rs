// src/export/pdf.rs

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use unicode_width::UnicodeWidthStr;

pub const PAGE_W: f32 = 595.0;
pub const PAGE_H: f32 = 842.0;
pub const MARGIN: f32 = 50.0;
/// A block starting below this cursor position goes to a fresh page.
pub const BREAK_THRESHOLD: f32 = 700.0;

const LINE_SPACING: f32 = 1.2;
const FOOTER_SIZE: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
    Oblique,
}

impl Face {
    fn resource(&self) -> Name<'static> {
        match self {
            Face::Regular => Name(b"F1"),
            Face::Bold => Name(b"F2"),
            Face::Oblique => Name(b"F3"),
        }
    }

    fn base_font(&self) -> Name<'static> {
        match self {
            Face::Regular => Name(b"Helvetica"),
            Face::Bold => Name(b"Helvetica-Bold"),
            Face::Oblique => Name(b"Helvetica-Oblique"),
        }
    }

    /// Average glyph advance as a fraction of the font size.
    fn avg_advance(&self) -> f32 {
        match self {
            Face::Bold => 0.56,
            _ => 0.52,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: Face,
    pub size: f32,
    pub color: (f32, f32, f32),
    pub indent: f32,
    pub align: Align,
}

impl TextStyle {
    pub const fn new(face: Face, size: f32) -> Self {
        Self {
            face,
            size,
            color: (0.0, 0.0, 0.0),
            indent: 0.0,
            align: Align::Left,
        }
    }

    pub const fn color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.color = (r, g, b);
        self
    }

    pub const fn indent(mut self, indent: f32) -> Self {
        self.indent = indent;
        self
    }

    pub const fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    fn line_height(&self) -> f32 {
        self.size * LINE_SPACING
    }
}

/// Maps text onto WinAnsi bytes; characters outside Latin-1 become `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

fn text_width(text: &str, face: Face, size: f32) -> f32 {
    UnicodeWidthStr::width(text) as f32 * size * face.avg_advance()
}

pub fn footer_text(page: usize, total: usize) -> String {
    format!("Page {page} of {total}")
}

/// A flowing, multi-page document.
///
/// Layout appends to buffered page contents; nothing is serialized until
/// `finalize`, which first stamps `Page i of N` on every page (N is only
/// known once layout is over) and then emits the PDF.
pub struct PdfDocument {
    pages: Vec<Content>,
    /// Distance from the top edge of the current page.
    cursor: f32,
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfDocument {
    pub fn new() -> Self {
        Self {
            pages: vec![Content::new()],
            cursor: MARGIN,
        }
    }

    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn add_page(&mut self) {
        self.pages.push(Content::new());
        self.cursor = MARGIN;
    }

    /// Block-start check: breaks the page once the cursor is past the threshold.
    /// Returns whether a new page was started.
    pub fn ensure_block_room(&mut self) -> bool {
        if self.cursor > BREAK_THRESHOLD {
            self.add_page();
            true
        } else {
            false
        }
    }

    /// Vertical space in units of a 12pt line.
    pub fn move_down(&mut self, lines: f32) {
        self.cursor += lines * 12.0;
    }

    fn current(&mut self) -> &mut Content {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn draw_line_of_text(&mut self, text: &str, style: &TextStyle) {
        let x = match style.align {
            Align::Left => MARGIN + style.indent,
            Align::Center => ((PAGE_W - text_width(text, style.face, style.size)) / 2.0).max(MARGIN),
        };
        let y = PAGE_H - self.cursor - style.size;
        let bytes = win_ansi(text);
        let (r, g, b) = style.color;

        let content = self.current();
        content.begin_text();
        content.set_fill_rgb(r, g, b);
        content.set_font(style.face.resource(), style.size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    /// Writes `text`, wrapped to the usable width. A line that would cross
    /// the bottom margin continues on a new page.
    pub fn text(&mut self, text: &str, style: &TextStyle) {
        let usable = PAGE_W - 2.0 * MARGIN - style.indent;
        let max_chars = (usable / (style.size * style.face.avg_advance())).max(1.0) as usize;

        for line in textwrap::wrap(text, max_chars) {
            if self.cursor + style.line_height() > PAGE_H - MARGIN {
                self.add_page();
            }
            self.draw_line_of_text(&line, style);
            self.cursor += style.line_height();
        }
    }

    /// Light grey horizontal separator across the text column.
    pub fn rule(&mut self) {
        if self.cursor + 1.0 > PAGE_H - MARGIN {
            self.add_page();
        }
        let y = PAGE_H - self.cursor;
        let content = self.current();
        content.save_state();
        content.set_stroke_rgb(0.8, 0.8, 0.8);
        content.set_line_width(0.5);
        content.move_to(MARGIN, y);
        content.line_to(PAGE_W - MARGIN, y);
        content.stroke();
        content.restore_state();
    }

    /// Second pass: number every buffered page against the final count.
    fn stamp_footers(&mut self) {
        let total = self.pages.len();
        let style = TextStyle::new(Face::Regular, FOOTER_SIZE).color(0.4, 0.4, 0.4);

        for (i, content) in self.pages.iter_mut().enumerate() {
            let label = footer_text(i + 1, total);
            let x = (PAGE_W - text_width(&label, style.face, style.size)) / 2.0;
            let (r, g, b) = style.color;
            content.begin_text();
            content.set_fill_rgb(r, g, b);
            content.set_font(style.face.resource(), style.size);
            content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, MARGIN - 2.0 * FOOTER_SIZE]);
            content.show(Str(label.as_bytes()));
            content.end_text();
        }
    }

    /// Stamps footers and serializes the whole document.
    pub fn finalize(mut self) -> Vec<u8> {
        self.stamp_footers();

        let mut pdf = Pdf::new();
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let faces = [Face::Regular, Face::Bold, Face::Oblique];
        let font_ids = [Ref::new(3), Ref::new(4), Ref::new(5)];
        let mut next_id = 6;

        for (face, id) in faces.iter().zip(font_ids) {
            pdf.type1_font(id)
                .base_font(face.base_font())
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let mut page_refs = Vec::with_capacity(self.pages.len());

        for content in self.pages {
            let page_id = Ref::new(next_id);
            let content_id = Ref::new(next_id + 1);
            next_id += 2;
            page_refs.push(page_id);

            {
                let mut page = pdf.page(page_id);
                page.parent(pages_id)
                    .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
                    .contents(content_id);
                let mut resources = page.resources();
                let mut fonts = resources.fonts();
                for (face, id) in faces.iter().zip(font_ids) {
                    fonts.pair(face.resource(), id);
                }
            }

            pdf.stream(content_id, &content.finish());
        }

        pdf.catalog(catalog_id).pages(pages_id);
        {
            let mut pages = pdf.pages(pages_id);
            pages.count(page_refs.len() as i32);
            pages.kids(page_refs);
        }

        pdf.finish()
    }
}
