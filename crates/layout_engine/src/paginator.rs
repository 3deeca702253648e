//! Block pagination
//!
//! Blocks are placed greedily in a single pass. A cursor holds the page
//! index and the distance of the next free line from the top edge. Placing a
//! block either keeps it on the cursor's page or, when it would cross the
//! bottom margin, moves it to the top of the next page. A block that is
//! already at the top of a page stays there even if it is taller than the
//! page.

use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Points per millimetre
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimetres to points
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Standard page sizes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// A4 (210mm x 297mm)
    #[default]
    A4,
    /// US Letter (8.5" x 11")
    Letter,
    /// Custom size in points
    Custom { width: f32, height: f32 },
}

impl PageSize {
    /// Get the width and height in points
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.276, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

/// Page dimensions and margins, all in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageGeometry {
    /// A page of `size` with the same margin on every side
    pub fn new(size: PageSize, margin: f32) -> Self {
        let (width, height) = size.dimensions();
        Self {
            width,
            height,
            margin_top: margin,
            margin_bottom: margin,
            margin_left: margin,
            margin_right: margin,
        }
    }

    /// A4 with 20mm margins
    pub fn a4() -> Self {
        Self::new(PageSize::A4, mm_to_pt(20.0))
    }

    /// Check that the margins leave a usable content area
    pub fn validate(&self) -> Result<()> {
        let values = [
            self.width,
            self.height,
            self.margin_top,
            self.margin_bottom,
            self.margin_left,
            self.margin_right,
        ];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(LayoutError::InvalidPageSetup(
                "dimensions and margins must be finite and non-negative".to_string(),
            ));
        }
        if self.content_width() <= 0.0 {
            return Err(LayoutError::InvalidPageSetup(format!(
                "horizontal margins leave no room on a page {} points wide",
                self.width
            )));
        }
        if self.content_height() <= 0.0 {
            return Err(LayoutError::InvalidPageSetup(format!(
                "vertical margins leave no room on a page {} points high",
                self.height
            )));
        }
        Ok(())
    }

    /// Width between the side margins
    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Height between the top and bottom margins
    pub fn content_height(&self) -> f32 {
        self.height - self.margin_top - self.margin_bottom
    }

    /// Lowest point (from the top edge) a block may reach
    pub fn content_bottom(&self) -> f32 {
        self.height - self.margin_bottom
    }
}

/// Where the next block goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    /// 0-based page index
    pub page: usize,
    /// Distance from the top edge of the page
    pub y: f32,
}

impl Cursor {
    /// Top of the first page
    pub fn start(geometry: &PageGeometry) -> Self {
        Self {
            page: 0,
            y: geometry.margin_top,
        }
    }

    fn at_page_top(&self, geometry: &PageGeometry) -> bool {
        self.y <= geometry.margin_top
    }
}

/// Result of placing one block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Page the block is written on
    pub page: usize,
    /// Top of the block, measured from the top edge
    pub y: f32,
    /// Whether a new page was started for this block
    pub page_break: bool,
    /// Cursor after the block and its trailing gap
    pub next: Cursor,
}

/// Place a block of `height` at `cursor`, followed by `gap`
pub fn place_block(geometry: &PageGeometry, cursor: Cursor, height: f32, gap: f32) -> Placement {
    let overflows = cursor.y + height > geometry.content_bottom();
    let page_break = overflows && !cursor.at_page_top(geometry);

    let (page, y) = if page_break {
        (cursor.page + 1, geometry.margin_top)
    } else {
        (cursor.page, cursor.y)
    };

    Placement {
        page,
        y,
        page_break,
        next: Cursor {
            page,
            y: y + height + gap,
        },
    }
}

/// Greedy single-pass paginator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paginator {
    geometry: PageGeometry,
    block_gap: f32,
}

impl Paginator {
    pub fn new(geometry: PageGeometry, block_gap: f32) -> Result<Self> {
        geometry.validate()?;
        if !block_gap.is_finite() || block_gap < 0.0 {
            return Err(LayoutError::InvalidPageSetup(format!(
                "block gap must be non-negative, got {block_gap}"
            )));
        }
        Ok(Self { geometry, block_gap })
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn block_gap(&self) -> f32 {
        self.block_gap
    }

    /// Place one block followed by the regular block gap
    pub fn place(&self, cursor: Cursor, height: f32) -> Placement {
        place_block(&self.geometry, cursor, height, self.block_gap)
    }

    /// Place blocks of the given heights in order, starting at `cursor`.
    ///
    /// Returns one placement per block and the final cursor.
    pub fn paginate<I>(&self, cursor: Cursor, heights: I) -> (Vec<Placement>, Cursor)
    where
        I: IntoIterator<Item = f32>,
    {
        let mut placements = Vec::new();
        let cursor = heights.into_iter().fold(cursor, |cursor, height| {
            let placement = self.place(cursor, height);
            placements.push(placement);
            placement.next
        });
        (placements, cursor)
    }
}
