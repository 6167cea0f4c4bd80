//! Selectable-list navigation.
//!
//! Every menu-like screen owns a [`ListMenu`]: a fixed set of items, the
//! chosen index and the pressed flag. Navigation follows each item's
//! neighbor links; there is no bounds checking beyond the link sentinel, so
//! the screen building the list is responsible for a consistent graph (it
//! does not have to be symmetric).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::{BLACK, GREEN, WHITE};
use crate::context::Context;
use crate::input::{Direction, InputSnapshot};
use crate::styles::LABEL_FONT;

/// Visual state of a list item.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ListItemState {
    Unselected,
    Selected,
    Pressed,
}

/// Neighbor links of one item, one per direction. `None` means no neighbor.
#[derive(Clone, Copy, Default, Debug)]
pub struct Neighbors {
    pub left: Option<usize>,
    pub right: Option<usize>,
    pub up: Option<usize>,
    pub down: Option<usize>,
}

impl Neighbors {
    /// No links in any direction.
    pub const NONE: Self = Self {
        left: None,
        right: None,
        up: None,
        down: None,
    };

    /// Links for an item in a cyclic list: `prev` on left/up, `next` on
    /// right/down. This is the shape every stacked menu uses.
    pub const fn cycle(prev: usize, next: usize) -> Self {
        Self {
            left: Some(prev),
            right: Some(next),
            up: Some(prev),
            down: Some(next),
        }
    }

    fn towards(self, dir: Direction) -> Option<usize> {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::None => None,
        }
    }
}

/// One selectable rectangle with a centered label.
pub struct ListItem {
    pub label: &'static str,
    pub rect: Rectangle,
    pub neighbors: Neighbors,
    /// Draw a border around the rectangle.
    pub stroke: bool,
}

impl ListItem {
    pub fn new(label: &'static str, rect: Rectangle, neighbors: Neighbors) -> Self {
        Self {
            label,
            rect,
            neighbors,
            stroke: false,
        }
    }

    /// Render in `state`. Each state maps to a fixed fill/border/text color
    /// triple.
    pub fn render<D: DrawTarget<Color = Rgb565>>(&self, ctx: &mut Context<D>, state: ListItemState) {
        let (fill, border, text): (Rgb565, Rgb565, Rgb565) = match state {
            ListItemState::Pressed => (GREEN, GREEN, BLACK),
            ListItemState::Selected => (WHITE, WHITE, BLACK),
            ListItemState::Unselected => (BLACK, WHITE, WHITE),
        };

        if self.stroke {
            ctx.fill_rect_bordered(self.rect, border, fill);
        } else {
            ctx.fill_rect(self.rect, fill);
        }
        ctx.draw_text_centered(self.label, LABEL_FONT, self.rect, text);
    }
}

/// Cursor over a fixed set of list items.
pub struct ListMenu {
    items: Vec<ListItem>,
    chosen: usize,
    pressed: bool,
}

impl ListMenu {
    pub fn new(items: Vec<ListItem>, default_item: usize) -> Self {
        Self {
            items,
            chosen: default_item,
            pressed: false,
        }
    }

    /// Index of the currently chosen item.
    pub fn chosen(&self) -> usize {
        self.chosen
    }

    /// Draw every item; the chosen one as Selected, the rest Unselected.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(&self, ctx: &mut Context<D>) {
        for (index, item) in self.items.iter().enumerate() {
            let state = if index == self.chosen {
                ListItemState::Selected
            } else {
                ListItemState::Unselected
            };
            item.render(ctx, state);
        }
    }

    /// Per-tick navigation step.
    pub fn handle_input<D: DrawTarget<Color = Rgb565>>(&mut self, ctx: &mut Context<D>, input: &InputSnapshot) {
        self.move_cursor(ctx, input.turned, input.start_down);
    }

    /// Follow the chosen item's neighbor link for `dir`. When a neighbor
    /// exists the selection moves there (rendered Pressed while the start
    /// button is held). Without a neighbor, only a change of the pressed
    /// state re-renders the current item in place.
    pub fn move_cursor<D: DrawTarget<Color = Rgb565>>(&mut self, ctx: &mut Context<D>, dir: Direction, start_down: bool) {
        match self.items[self.chosen].neighbors.towards(dir) {
            Some(next) => {
                self.items[self.chosen].render(ctx, ListItemState::Unselected);
                let state = if start_down {
                    ListItemState::Pressed
                } else {
                    ListItemState::Selected
                };
                self.items[next].render(ctx, state);
                self.chosen = next;
                self.pressed = start_down;
            }
            None => {
                if start_down != self.pressed {
                    let state = if start_down {
                        ListItemState::Pressed
                    } else {
                        ListItemState::Selected
                    };
                    self.items[self.chosen].render(ctx, state);
                    self.pressed = start_down;
                }
            }
        }
    }

    /// Swap out one item and repaint it in its current role.
    pub fn replace_item<D: DrawTarget<Color = Rgb565>>(&mut self, ctx: &mut Context<D>, index: usize, item: ListItem) {
        self.items[index] = item;
        let state = if index != self.chosen {
            ListItemState::Unselected
        } else if self.pressed {
            ListItemState::Pressed
        } else {
            ListItemState::Selected
        };
        self.items[index].render(ctx, state);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
