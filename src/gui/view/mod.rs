//! GUI renderer (reads state, produces widgets; no mutation).
//!
//! Every control of a player reads the same snapshot during one view pass.

mod constants;
mod widgets;

use iced::widget::{Column, column, text};

use super::state::{Message, Sonora};
use constants::{PAGE_PADDING, ROW_SPACING, SMALL_TEXT};

pub(crate) fn view(state: &Sonora) -> Column<'_, Message> {
    let mut page = column![text(state.status.as_str()).size(SMALL_TEXT)]
        .spacing(ROW_SPACING)
        .padding(PAGE_PADDING);

    for row in &state.players {
        page = page.push(widgets::player_row(row));
    }

    page
}
