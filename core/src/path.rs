use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Ordered selection of cells. Most words are short, so the cells are kept inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path(SmallVec<[Coord2; 12]>);

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cells(&self) -> &[Coord2] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.0.iter().copied()
    }

    pub fn first(&self) -> Option<Coord2> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<Coord2> {
        self.0.last().copied()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.0.contains(&coords)
    }

    /// Every consecutive pair is adjacent and no cell appears twice.
    pub fn is_connected(&self) -> bool {
        let adjacent = self.0.windows(2).all(|pair| is_adjacent(pair[0], pair[1]));
        let unique = self
            .0
            .iter()
            .enumerate()
            .all(|(i, pos)| !self.0[..i].contains(pos));
        adjacent && unique
    }

    pub(crate) fn push(&mut self, coords: Coord2) {
        self.0.push(coords);
    }

    pub(crate) fn pop(&mut self) -> Option<Coord2> {
        self.0.pop()
    }
}

impl FromIterator<Coord2> for Path {
    fn from_iter<I: IntoIterator<Item = Coord2>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Drag selection state. Every extension is checked against the last selected cell, so the held path is always
/// connected.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathBuilder {
    path: Path,
    active: bool,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drops any unfinished selection, then starts a new one at `coords` unless the cell is not `selectable`.
    pub fn start(&mut self, coords: Coord2, selectable: bool) -> SelectOutcome {
        let had_selection = !self.path.is_empty();
        self.path = Path::new();

        if !selectable {
            self.active = false;
            log::trace!("Ignored drag start on unselectable cell {coords:?}");
            return if had_selection {
                SelectOutcome::Cleared
            } else {
                SelectOutcome::NoChange
            };
        }

        self.path.push(coords);
        self.active = true;
        SelectOutcome::Started
    }

    /// Appends `coords` when it is a fresh, `selectable` neighbour of the last selected cell.
    ///
    /// Moving back onto any already selected cell is ignored, so the path stays at its current length instead of
    /// backtracking.
    pub fn extend(&mut self, coords: Coord2, selectable: bool) -> SelectOutcome {
        if !self.active {
            return SelectOutcome::NoChange;
        }
        let Some(last) = self.path.last() else {
            return SelectOutcome::NoChange;
        };

        if self.path.contains(coords) || !is_adjacent(last, coords) || !selectable {
            log::trace!("Ignored extension from {last:?} to {coords:?}");
            return SelectOutcome::NoChange;
        }

        self.path.push(coords);
        SelectOutcome::Extended
    }

    /// Ends the drag, handing back the selection. The builder is always left empty.
    pub fn finish(&mut self) -> Option<Path> {
        let active = core::mem::take(&mut self.active);
        let path = core::mem::take(&mut self.path);
        if active && !path.is_empty() {
            Some(path)
        } else {
            None
        }
    }
}
