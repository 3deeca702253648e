//! PDF Renderer
//!
//! Lays out [`AssessmentContent`] on fixed-size pages and produces one
//! content stream per page.
//!
//! The header is wrapped and placed first. Each question block is then
//! wrapped and measured as a whole, counting its closing spacer and, between
//! blocks, the separator line. A block that does not fit below the cursor
//! moves to a fresh page; blocks are never split.

use super::content::ContentStream;
use super::fonts::{encode_win_ansi, StandardFont};
use crate::{AssessmentContent, PdfSettings, TextLine};
use layout_engine::{
    mm_to_pt, place_block, Cursor, FontFace, LayoutError, LineBreaker, PageGeometry, Paginator,
    Result, StandardMetrics, TextStyle,
};
use std::collections::BTreeSet;

/// A wrapped line at its final position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    /// 0-based page index
    pub page: usize,
    /// Top of the line box, from the top edge of the page
    pub top: f32,
    pub text: String,
    pub face: FontFace,
}

/// Positions of every line in the document
#[derive(Debug, Clone, PartialEq)]
pub struct PdfLayout {
    pub lines: Vec<PlacedLine>,
    pub page_count: usize,
    /// Number of times a block moved to a new page
    pub page_breaks: usize,
}

/// One finished page
#[derive(Debug)]
pub struct RenderedPage {
    pub width: f32,
    pub height: f32,
    pub content: ContentStream,
    pub fonts: BTreeSet<StandardFont>,
}

/// Renders assessment content to PDF pages
pub struct PdfRenderer<'a> {
    settings: &'a PdfSettings,
    metrics: StandardMetrics,
}

impl<'a> PdfRenderer<'a> {
    pub fn new(settings: &'a PdfSettings) -> Self {
        Self {
            settings,
            metrics: StandardMetrics,
        }
    }

    /// Wrap and paginate `content`
    pub fn layout(&self, content: &AssessmentContent) -> Result<PdfLayout> {
        let font_size = self.settings.font_size;
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(LayoutError::InvalidFontSize(font_size));
        }
        let line_height = self.settings.line_height();
        if !line_height.is_finite() || line_height <= 0.0 {
            return Err(LayoutError::InvalidPageSetup(format!(
                "line height must be positive, got {line_height}"
            )));
        }

        let geometry = self.settings.geometry();
        let paginator = Paginator::new(geometry, mm_to_pt(self.settings.block_gap_mm))?;
        let breaker = LineBreaker::new(&self.metrics, geometry.content_width());

        let mut lines = Vec::new();
        let mut page_breaks = 0;
        let mut cursor = Cursor::start(&geometry);

        let header = self.wrap_lines(&breaker, &content.header);
        if !header.is_empty() {
            let height = header.len() as f32 * line_height;
            let header_gap = mm_to_pt(self.settings.header_gap_mm);
            let placement = place_block(&geometry, cursor, height, header_gap);
            push_lines(&mut lines, header, placement.page, placement.y, line_height);
            cursor = placement.next;
        }

        let blocks: Vec<_> = content
            .questions
            .iter()
            .enumerate()
            .map(|(i, block)| {
                let wrapped = self.wrap_lines(&breaker, &block.lines);
                let blank_lines = if content.has_separator_after(i) { 2 } else { 1 };
                let height = (wrapped.len() + blank_lines) as f32 * line_height;
                (block.number, wrapped, height)
            })
            .collect();

        let (placements, end) = paginator.paginate(cursor, blocks.iter().map(|(_, _, height)| *height));
        cursor = end;

        for ((number, wrapped, height), placement) in blocks.into_iter().zip(placements) {
            if placement.page_break {
                page_breaks += 1;
                tracing::trace!(
                    question = number,
                    page = placement.page + 1,
                    "question moved to new page"
                );
            }
            if height > geometry.content_height() {
                tracing::debug!(question = number, height, "question taller than a page");
            }

            push_lines(&mut lines, wrapped, placement.page, placement.y, line_height);
        }

        Ok(PdfLayout {
            lines,
            page_count: cursor.page + 1,
            page_breaks,
        })
    }

    /// Lay out `content` and build the page content streams
    pub fn render(&self, content: &AssessmentContent) -> Result<Vec<RenderedPage>> {
        let layout = self.layout(content)?;
        let geometry = self.settings.geometry();

        let mut pages: Vec<RenderedPage> = (0..layout.page_count)
            .map(|_| RenderedPage {
                width: geometry.width,
                height: geometry.height,
                content: ContentStream::new(),
                fonts: BTreeSet::new(),
            })
            .collect();

        for line in &layout.lines {
            if line.text.is_empty() {
                continue;
            }
            let Some(page) = pages.get_mut(line.page) else {
                continue;
            };
            let font = StandardFont::for_face(line.face);
            let baseline = self.baseline(&geometry, line.top);

            page.fonts.insert(font);
            page.content
                .begin_text()
                .set_font(font.resource_name(), f64::from(self.settings.font_size))
                .set_text_matrix(1.0, 0.0, 0.0, 1.0, f64::from(geometry.margin_left), f64::from(baseline))
                .show_bytes(&encode_win_ansi(&line.text))
                .end_text();
        }

        Ok(pages)
    }

    /// PDF y coordinate of the baseline of a line whose box starts at `top`
    fn baseline(&self, geometry: &PageGeometry, top: f32) -> f32 {
        geometry.height - (top + self.settings.font_size)
    }

    fn wrap_lines(
        &self,
        breaker: &LineBreaker<'_, StandardMetrics>,
        lines: &[TextLine],
    ) -> Vec<(String, FontFace)> {
        lines
            .iter()
            .flat_map(|line| {
                let face = line.style.face();
                let style = TextStyle::new(face, self.settings.font_size);
                breaker
                    .wrap(&line.text, style)
                    .into_iter()
                    .map(move |text| (text, face))
            })
            .collect()
    }
}

fn push_lines(
    out: &mut Vec<PlacedLine>,
    wrapped: Vec<(String, FontFace)>,
    page: usize,
    top: f32,
    line_height: f32,
) {
    out.extend(wrapped.into_iter().enumerate().map(|(k, (text, face))| PlacedLine {
        page,
        top: top + k as f32 * line_height,
        text,
        face,
    }));
}
