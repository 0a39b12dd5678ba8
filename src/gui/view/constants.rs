//! View constants (layout/sizing).

pub(crate) const ROW_SPACING: f32 = 12.0;
pub(crate) const PAGE_PADDING: f32 = 12.0;

pub(crate) const TITLE_TEXT: f32 = 14.0;
pub(crate) const SMALL_TEXT: f32 = 12.0;

pub(crate) const BUTTON_W: f32 = 80.0;
pub(crate) const TIME_W: f32 = 90.0;
pub(crate) const VOLUME_W: f32 = 140.0;
