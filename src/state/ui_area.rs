//! UI area positioning for mouse event handling
//!
//! Drawing and mouse handling both derive their geometry from
//! [`ContactLayout::compute`], so a click always maps to what was drawn.
//!
//! # Layout
//!
//! ```text
//! Row 0-2:  Header (3 rows with borders)
//! Row 3-4:  Intro text
//! Row 5+:   Name, Email, Subject (3 rows each), Message (6 rows),
//!           Submit button (3 rows), Status banner (3 rows)
//! Bottom:   Status bar (1 row)
//! ```
//!
//! The subject dropdown is an overlay anchored under the subject field.

use super::forms::{FieldName, SubjectSelector};
use ratatui::layout::Rect;

pub const HEADER_HEIGHT: u16 = 3;
pub const INTRO_HEIGHT: u16 = 2;
pub const FIELD_HEIGHT: u16 = 3;
pub const MESSAGE_HEIGHT: u16 = 6;
pub const BUTTON_HEIGHT: u16 = 3;
pub const BANNER_HEIGHT: u16 = 3;
pub const STATUS_BAR_HEIGHT: u16 = 1;
/// Widest the form column gets on large terminals
pub const MAX_CONTENT_WIDTH: u16 = 72;
/// Submit button width
pub const SUBMIT_WIDTH: u16 = 24;

/// Check whether a cell lies inside `rect`
#[inline]
pub fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && row >= rect.y
        && col < rect.x.saturating_add(rect.width)
        && row < rect.y.saturating_add(rect.height)
}

/// What a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Field(FieldName),
    Submit,
}

/// Where a click landed relative to the open dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownHit {
    Option(usize),
    /// Inside the dropdown but not on an option (border)
    Frame,
    Outside,
}

/// Screen regions of the contact page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLayout {
    pub header: Rect,
    pub intro: Rect,
    pub name: Rect,
    pub email: Rect,
    pub subject: Rect,
    pub message: Rect,
    pub submit: Rect,
    pub banner: Rect,
    pub dropdown: Rect,
    pub status_bar: Rect,
}

impl ContactLayout {
    pub fn compute(area: Rect) -> Self {
        let width = area.width.min(MAX_CONTENT_WIDTH);
        let x = area.x + (area.width - width) / 2;
        let bottom = area.y + area.height.saturating_sub(STATUS_BAR_HEIGHT);

        let mut y = area.y;
        let mut next = |height: u16| {
            let rect = clip(Rect::new(x, y, width, height), bottom);
            y = y.saturating_add(height);
            rect
        };

        let header = next(HEADER_HEIGHT);
        let intro = next(INTRO_HEIGHT);
        let name = next(FIELD_HEIGHT);
        let email = next(FIELD_HEIGHT);
        let subject = next(FIELD_HEIGHT);
        let message = next(MESSAGE_HEIGHT);
        let button_row = next(BUTTON_HEIGHT);
        let banner = next(BANNER_HEIGHT);

        let submit = Rect {
            width: button_row.width.min(SUBMIT_WIDTH),
            ..button_row
        };

        let dropdown_height = SubjectSelector::option_count() as u16 + 2;
        let dropdown = clip(
            Rect::new(
                subject.x,
                subject.y.saturating_add(subject.height),
                subject.width,
                dropdown_height,
            ),
            bottom,
        );

        let status_bar = Rect::new(area.x, bottom, area.width, area.height.min(STATUS_BAR_HEIGHT));

        Self {
            header,
            intro,
            name,
            email,
            subject,
            message,
            submit,
            banner,
            dropdown,
            status_bar,
        }
    }

    pub fn field(&self, name: FieldName) -> Rect {
        match name {
            FieldName::Name => self.name,
            FieldName::Email => self.email,
            FieldName::Subject => self.subject,
            FieldName::Message => self.message,
        }
    }

    /// Map a click on the page (dropdown closed) to a control
    pub fn hit(&self, col: u16, row: u16) -> Option<Hit> {
        if contains(self.submit, col, row) {
            return Some(Hit::Submit);
        }
        FieldName::ALL
            .into_iter()
            .find(|name| contains(self.field(*name), col, row))
            .map(Hit::Field)
    }

    /// Map a click while the dropdown is open
    pub fn hit_dropdown(&self, col: u16, row: u16) -> DropdownHit {
        if !contains(self.dropdown, col, row) {
            return DropdownHit::Outside;
        }
        let inner_row = row - self.dropdown.y;
        if inner_row == 0 || inner_row + 1 >= self.dropdown.height {
            return DropdownHit::Frame;
        }
        let index = (inner_row - 1) as usize;
        if index < SubjectSelector::option_count() {
            DropdownHit::Option(index)
        } else {
            DropdownHit::Frame
        }
    }
}

/// Cut `rect` so it ends at row `bottom`
fn clip(rect: Rect, bottom: u16) -> Rect {
    if rect.y >= bottom {
        return Rect { height: 0, ..rect };
    }
    Rect {
        height: rect.height.min(bottom - rect.y),
        ..rect
    }
}
