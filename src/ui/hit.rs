//! Mouse hit-testing.
//!
//! Rendering records every clickable region in draw order. Later regions are
//! drawn on top, so lookups scan from the back.

use super::filters::FilterField;
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    SelectHeader(FilterField),
    SelectOption(FilterField, String),
    /// Search field and padding of an open dropdown. Swallows clicks.
    SelectPanel(FilterField),
    SearchBox,
    SortToggle,
    DarkModeToggle,
    /// Card body, by listing id.
    Card(String),
    /// Heart button inside a card, by listing id.
    Favorite(String),
    Page(usize),
    /// Detail overlay body. Swallows clicks.
    Overlay,
    CloseOverlay,
    CopyApplyLink,
}

#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target under terminal cell `(column, row)`.
    pub fn target_at(&self, column: u16, row: u16) -> Option<&HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| target)
    }

    /// Everything a dropdown covered this frame: its header plus, when open,
    /// its panel and option rows.
    pub fn select_region(&self, field: FilterField) -> Option<Rect> {
        self.regions
            .iter()
            .filter(|(_, target)| match target {
                HitTarget::SelectHeader(f)
                | HitTarget::SelectPanel(f)
                | HitTarget::SelectOption(f, _) => *f == field,
                _ => false,
            })
            .map(|(area, _)| *area)
            .reduce(|acc, area| acc.union(area))
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
