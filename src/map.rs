//! Mansion map data and management module.
//!
//! This module contains the `Room` tree and the layout table from which it is built, including the
//! fixed mansion layout and the post-order release of the whole tree.

use color_eyre::eyre::{bail, eyre, OptionExt as _, Result};

use crate::types::Direction;

/// Longest room label kept, in characters.
pub(crate) const MAX_NAME_LEN: usize = 49;

/// Node of the mansion map.
///
/// This structure represents a single room of the mansion. Each room owns its children outright, so
/// the tree has no shared nodes and no way back to a parent.
#[derive(Debug)]
pub(crate) struct Room {
    /// Display label of the room.
    ///
    /// This field holds the name shown to the player. It is not required to be unique within the
    /// map and never holds more than [`MAX_NAME_LEN`] characters.
    name: String,
    /// Room reached by walking left, if any.
    left: Option<Box<Self>>,
    /// Room reached by walking right, if any.
    right: Option<Box<Self>>,
}

/// Row of a layout table.
///
/// Each row describes one room by name plus the indexes of the rows holding its children. The first
/// row of a table is the root of the map.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RoomSpec {
    /// Display label of the room.
    name: &'static str,
    /// Row index of the left child.
    left: Option<usize>,
    /// Row index of the right child.
    right: Option<usize>,
}

impl RoomSpec {
    /// Describes a room with the given children.
    pub(crate) const fn new(
        name: &'static str,
        left: Option<usize>,
        right: Option<usize>,
    ) -> Self {
        Self { name, left, right }
    }

    /// Describes a room without children.
    pub(crate) const fn leaf(name: &'static str) -> Self {
        Self::new(name, None, None)
    }
}

/// Layout of the mansion explored by the game.
///
/// This table holds the one fixed topology of the mansion. Row 0 is the entrance hall and every
/// other row is claimed by exactly one parent.
pub(crate) static MANSION_LAYOUT: [RoomSpec; 8] = [
    RoomSpec::new("Entrance Hall", Some(1), Some(2)),
    RoomSpec::new("Living Room", Some(3), Some(4)),
    RoomSpec::new("Kitchen", Some(5), Some(6)),
    RoomSpec::new("Library", None, Some(7)),
    RoomSpec::leaf("Main Bedroom"),
    RoomSpec::leaf("Pantry"),
    RoomSpec::leaf("Winter Garden"),
    RoomSpec::leaf("Secret Office"),
];

impl Room {
    /// Creates a room without children.
    ///
    /// Labels longer than [`MAX_NAME_LEN`] characters are cut down to that length. The player is
    /// not told about the cut, but a warning is logged with both labels.
    pub(crate) fn new(name: &str) -> Self {
        let label: String = name.chars().take(MAX_NAME_LEN).collect();
        if label.len() < name.len() {
            tracing::warn!(original = name, kept = %label, "room name truncated");
        }

        Self {
            name: label,
            left: None,
            right: None,
        }
    }

    /// Builds the mansion explored by the game.
    ///
    /// # Errors
    ///
    /// This function may return errors if [`MANSION_LAYOUT`] stops describing a valid tree.
    pub(crate) fn mansion() -> Result<Self> {
        Self::from_layout(&MANSION_LAYOUT)
    }

    /// Builds a room tree from a layout table.
    ///
    /// This function starts at row 0 and follows the child indexes of each row, claiming every row
    /// as it goes. A row can only be claimed once, which rules out shared children and cycles.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - The table is empty
    /// - A child index points outside the table
    /// - A row is claimed by more than one parent, or by one of its own descendants
    /// - A row is not reachable from the root
    pub(crate) fn from_layout(layout: &[RoomSpec]) -> Result<Self> {
        if layout.is_empty() {
            bail!("layout has no rooms");
        }

        let mut claimed = vec![false; layout.len()];
        let root = Self::build(layout, 0, &mut claimed)?;

        if let Some(orphan) = claimed.iter().position(|&used| !used) {
            bail!("room {orphan} is not reachable from the root of the layout");
        }

        tracing::debug!(rooms = root.len(), root = %root.name, "map built");

        Ok(root)
    }

    /// Builds the subtree rooted at `index`, claiming each row it visits.
    fn build(layout: &[RoomSpec], index: usize, claimed: &mut [bool]) -> Result<Self> {
        let spec = layout
            .get(index)
            .ok_or_else(|| eyre!("room index {index} is outside the layout"))?;
        let slot = claimed
            .get_mut(index)
            .ok_or_eyre("claim table is shorter than the layout")?;
        if *slot {
            bail!("room {index} ({}) is claimed more than once", spec.name);
        }
        *slot = true;

        let mut room = Self::new(spec.name);
        room.left = Self::build_child(layout, spec.left, claimed)?;
        room.right = Self::build_child(layout, spec.right, claimed)?;

        Ok(room)
    }

    /// Builds an optional child subtree.
    fn build_child(
        layout: &[RoomSpec],
        index: Option<usize>,
        claimed: &mut [bool],
    ) -> Result<Option<Box<Self>>> {
        index
            .map(|child| Self::build(layout, child, claimed).map(Box::new))
            .transpose()
    }

    /// Returns the display label of the room.
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Returns the room reached by walking left.
    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the room reached by walking right.
    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns the room reached by walking in `direction`.
    pub(crate) fn child(&self, direction: Direction) -> Option<&Self> {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    /// Tells whether the room has no further paths.
    pub(crate) const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Counts the rooms of this subtree, the room itself included.
    pub(crate) fn len(&self) -> usize {
        1 + self.left().map_or(0, Self::len) + self.right().map_or(0, Self::len)
    }

    /// Releases the whole subtree in post-order.
    ///
    /// The left subtree goes first, then the right one, then the room itself, so no room is
    /// released before both of its children. The labels of the released rooms are returned in the
    /// order they were released.
    pub(crate) fn release(self) -> Vec<String> {
        let Self { name, left, right } = self;

        let mut released = release_subtree(left);
        released.extend(release_subtree(right));

        tracing::trace!(room = %name, "room released");
        released.push(name);

        released
    }
}

/// Releases an optional subtree, doing nothing when it is absent.
pub(crate) fn release_subtree(subtree: Option<Box<Room>>) -> Vec<String> {
    subtree.map_or_else(Vec::new, |room| room.release())
}
