//! Options table panel
//!
//! A titled list of `{id, name}` rows. Ids are assigned as one past the
//! current maximum, so they stay unique after rows are appended in bulk.
//! Once the table reaches its height cap the rows scroll under a fixed
//! header.

use crate::geometry::{Point, Rect, Size};
use crate::panel::PanelContent;
use crate::theme::OverlayTheme;
use crate::view::frame::Frame;

use super::{card_body, paint_card, CARD_MIN_HEIGHT, CARD_PADDING, CARD_WIDTH, TITLE_HEIGHT};

/// Height of one table row (the header included)
pub const ROW_HEIGHT: f32 = 40.0;

/// Tallest the table viewport grows before rows start scrolling
pub const MAX_TABLE_HEIGHT: f32 = 256.0;

/// Height of the "no options" placeholder row
const EMPTY_ROW_HEIGHT: f32 = 56.0;

/// Width of the id column
const ID_COLUMN_WIDTH: f32 = 64.0;

const NAME_GLYPH_WIDTH: f32 = 8.0;

/// One table entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: u32,
    pub name: String,
}

/// Row list shown in the welcome panel
#[derive(Debug, Clone)]
pub struct OptionsTable {
    title: String,
    rows: Vec<TableRow>,
    /// Pixels the rows are scrolled up by
    scroll_offset: f32,
}

impl Default for OptionsTable {
    fn default() -> Self {
        Self::new("Options")
    }
}

impl OptionsTable {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
            scroll_offset: 0.0,
        }
    }

    /// Table seeded with `names`, ids numbered from 1
    pub fn with_initial_rows<I, S>(title: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(title);
        table.add_rows(names);
        table
    }

    /// The welcome panel's table
    pub fn welcome() -> Self {
        Self::with_initial_rows("Welcome", ["1", "2", "3"])
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    fn next_id(&self) -> u32 {
        self.rows.iter().map(|r| r.id).max().map_or(1, |max| max + 1)
    }

    /// Append one row. A missing or empty name defaults to the row's id.
    pub fn add_row(&mut self, name: Option<&str>) -> u32 {
        let id = self.next_id();
        let name = match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => id.to_string(),
        };
        self.rows.push(TableRow { id, name });
        id
    }

    /// Append rows with consecutive ids, returning the ids assigned
    pub fn add_rows<I, S>(&mut self, names: I) -> Vec<u32>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let start = self.next_id();
        let new_rows: Vec<TableRow> = names
            .into_iter()
            .zip(start..)
            .map(|(name, id)| TableRow {
                id,
                name: name.into(),
            })
            .collect();

        let ids = new_rows.iter().map(|r| r.id).collect();
        self.rows.extend(new_rows);
        ids
    }

    pub fn clear_rows(&mut self) {
        self.rows.clear();
        self.scroll_offset = 0.0;
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Height of the scrollable table area, header included
    fn table_height(&self) -> f32 {
        let body = if self.rows.is_empty() {
            EMPTY_ROW_HEIGHT
        } else {
            self.rows.len() as f32 * ROW_HEIGHT
        };
        (ROW_HEIGHT + body).min(MAX_TABLE_HEIGHT)
    }

    /// Furthest the rows can scroll before the last one is fully shown
    pub fn max_scroll(&self) -> f32 {
        let rows = self.rows.len() as f32 * ROW_HEIGHT;
        (rows - (self.table_height() - ROW_HEIGHT)).max(0.0)
    }

    /// Area below the header where rows are visible
    fn rows_viewport(&self, bounds: Rect) -> Rect {
        let body = card_body(bounds);
        Rect::new(
            body.x,
            body.y + ROW_HEIGHT,
            body.width,
            self.table_height() - ROW_HEIGHT,
        )
    }

    /// Bounds of row `index` inside a card drawn at `bounds`
    fn row_rect(&self, bounds: Rect, index: usize) -> Rect {
        let body = card_body(bounds);
        Rect::new(
            body.x,
            body.y + ROW_HEIGHT * (index as f32 + 1.0) - self.scroll_offset,
            body.width,
            ROW_HEIGHT,
        )
    }

    /// Row under `point` for a card drawn at `bounds`. Rows scrolled out of
    /// the viewport are not hit.
    pub fn row_at(&self, bounds: Rect, point: Point) -> Option<&TableRow> {
        if !self.rows_viewport(bounds).contains_point(point) {
            return None;
        }

        self.rows
            .iter()
            .enumerate()
            .find(|(i, _)| self.row_rect(bounds, *i).contains_point(point))
            .map(|(_, row)| row)
    }
}

impl PanelContent for OptionsTable {
    fn preferred_size(&self) -> Size {
        let height = 2.0 * CARD_PADDING + TITLE_HEIGHT + self.table_height();
        Size::new(CARD_WIDTH, height.max(CARD_MIN_HEIGHT))
    }

    fn paint(&self, frame: &mut Frame<'_>, bounds: Rect, theme: &OverlayTheme) {
        let body = paint_card(frame, bounds, &self.title, theme);
        let divider = theme.row_divider.to_argb_u32();
        let text = theme.panel_title.to_argb_u32();

        // Header: column separators only
        frame.fill_rect(
            Rect::new(body.x, body.y + ROW_HEIGHT - 1.0, body.width, 1.0),
            divider,
        );
        frame.fill_rect(
            Rect::new(body.x + ID_COLUMN_WIDTH, body.y + 8.0, 1.0, ROW_HEIGHT - 16.0),
            divider,
        );

        frame.set_clip(self.rows_viewport(bounds));

        if self.rows.is_empty() {
            let bar = Rect::new(
                body.x + body.width / 2.0 - 60.0,
                body.y + ROW_HEIGHT + EMPTY_ROW_HEIGHT / 2.0 - 4.0,
                120.0,
                8.0,
            );
            frame.fill_rect_blended(bar, theme.toggle_off.with_alpha(0xA0).to_argb_u32());
        }

        for (i, row) in self.rows.iter().enumerate() {
            let rect = self.row_rect(bounds, i);
            if i % 2 == 1 {
                frame.fill_rect_blended(rect, theme.row.with_alpha(0x80).to_argb_u32());
            }
            frame.fill_rect(
                Rect::new(rect.x, rect.bottom() - 1.0, rect.width, 1.0),
                divider,
            );

            let id_width = row.id.to_string().len() as f32 * NAME_GLYPH_WIDTH;
            frame.fill_rect(Rect::new(rect.x + 16.0, rect.y + 16.0, id_width, 8.0), text);

            let name_width = (row.name.chars().count() as f32 * NAME_GLYPH_WIDTH)
                .min(rect.width - ID_COLUMN_WIDTH - 32.0)
                .max(0.0);
            frame.fill_rect(
                Rect::new(rect.x + ID_COLUMN_WIDTH + 16.0, rect.y + 16.0, name_width, 8.0),
                text,
            );
        }

        frame.clear_clip();
    }

    fn scroll(&mut self, bounds: Rect, point: Point, delta_y: f32) -> bool {
        if !self.rows_viewport(bounds).contains_point(point) {
            return false;
        }
        let offset = (self.scroll_offset + delta_y).clamp(0.0, self.max_scroll());
        if offset == self.scroll_offset {
            return false;
        }
        self.scroll_offset = offset;
        true
    }

    fn click(&mut self, bounds: Rect, point: Point) -> bool {
        if let Some(row) = self.row_at(bounds, point) {
            tracing::info!(id = row.id, name = %row.name, "Row clicked");
        }
        false
    }
}
