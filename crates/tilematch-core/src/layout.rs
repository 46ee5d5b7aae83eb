//! Mapping between world coordinates and grid positions.
//!
//! The board is centered on an origin point in world space. Cell `(0, 0)`
//! starts at the bottom-left corner of the board, which is the origin minus half
//! the board extent on each axis. These functions hold no state; pointer input
//! is converted to a [`Position`] here before it reaches the engine.

use crate::{ConfigError, Position};

/// A point in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPoint {
    /// Horizontal coordinate, growing to the right.
    pub x: f32,
    /// Vertical coordinate, growing upward.
    pub y: f32,
}

impl WorldPoint {
    /// Creates a world point.
    #[must_use]
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Returns `true` if `pos` lies on a `dimension × dimension` board.
///
/// # Examples
///
/// ```
/// use tilematch_core::{Position, is_valid_position};
///
/// assert!(is_valid_position(Position::new(0, 7), 8));
/// assert!(!is_valid_position(Position::new(8, 0), 8));
/// assert!(!is_valid_position(Position::new(-1, 0), 8));
/// ```
#[must_use]
pub fn is_valid_position(pos: Position, dimension: usize) -> bool {
    let in_range = |v: i32| usize::try_from(v).is_ok_and(|v| v < dimension);
    in_range(pos.column) && in_range(pos.row)
}

/// Converts a world point to the grid position underneath it.
///
/// The result is not bounds-checked: points outside the board produce
/// negative or too-large coordinates. `spacing` must be positive.
///
/// # Examples
///
/// ```
/// use tilematch_core::{Position, WorldPoint, world_to_grid};
///
/// // An 8x8 board of unit cells centered on the world origin spans -4..4.
/// let origin = WorldPoint::new(0.0, 0.0);
/// assert_eq!(world_to_grid(WorldPoint::new(-3.5, -3.5), origin, 8, 1.0), Position::new(0, 0));
/// assert_eq!(world_to_grid(WorldPoint::new(0.2, 3.9), origin, 8, 1.0), Position::new(4, 7));
/// assert_eq!(world_to_grid(WorldPoint::new(-4.5, 0.0), origin, 8, 1.0), Position::new(-1, 4));
/// ```
#[must_use]
pub fn world_to_grid(
    world: WorldPoint,
    origin: WorldPoint,
    dimension: usize,
    spacing: f32,
) -> Position {
    let corner = bottom_left(origin, dimension, spacing);
    Position::new(
        floor_to_i32((world.x - corner.x) / spacing),
        floor_to_i32((world.y - corner.y) / spacing),
    )
}

#[expect(clippy::cast_precision_loss)]
fn bottom_left(origin: WorldPoint, dimension: usize, spacing: f32) -> WorldPoint {
    let half_extent = dimension as f32 * spacing / 2.0;
    WorldPoint::new(origin.x - half_extent, origin.y - half_extent)
}

#[expect(clippy::cast_possible_truncation)]
fn floor_to_i32(v: f32) -> i32 {
    // Saturates for values beyond the i32 range.
    v.floor() as i32
}

/// Placement of a board in world space.
///
/// Bundles the origin, dimension, and cell spacing used by
/// [`world_to_grid`], and adds the inverse mapping used to place tile visuals.
///
/// # Examples
///
/// ```
/// use tilematch_core::{BoardLayout, Position, WorldPoint};
///
/// let layout = BoardLayout::new(WorldPoint::new(10.0, 0.0), 4, 2.0)?;
/// let pos = Position::new(1, 3);
/// assert_eq!(layout.cell_origin(pos), WorldPoint::new(8.0, 2.0));
/// assert_eq!(layout.cell_center(pos), WorldPoint::new(9.0, 3.0));
/// assert_eq!(layout.world_to_grid(layout.cell_center(pos)), pos);
/// # Ok::<(), tilematch_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    origin: WorldPoint,
    dimension: usize,
    spacing: f32,
}

impl BoardLayout {
    /// Creates a layout for a `dimension × dimension` board centered on `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDimension`] if `dimension` is zero, or
    /// [`ConfigError::NonPositiveSpacing`] if `spacing` is not a positive finite
    /// number.
    pub fn new(origin: WorldPoint, dimension: usize, spacing: f32) -> Result<Self, ConfigError> {
        if dimension == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(ConfigError::NonPositiveSpacing);
        }
        Ok(Self {
            origin,
            dimension,
            spacing,
        })
    }

    /// Returns the world point the board is centered on.
    #[must_use]
    pub fn origin(&self) -> WorldPoint {
        self.origin
    }

    /// Returns the board dimension.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the distance between neighboring cells.
    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Returns the bottom-left corner of the board.
    #[must_use]
    pub fn bottom_left(&self) -> WorldPoint {
        bottom_left(self.origin, self.dimension, self.spacing)
    }

    /// Converts a world point to the grid position underneath it.
    ///
    /// The result may be off the board; see [`world_to_grid`].
    #[must_use]
    pub fn world_to_grid(&self, world: WorldPoint) -> Position {
        world_to_grid(world, self.origin, self.dimension, self.spacing)
    }

    /// Returns `true` if `pos` lies on the board.
    #[must_use]
    pub fn is_valid_position(&self, pos: Position) -> bool {
        is_valid_position(pos, self.dimension)
    }

    /// Returns the world point where the cell at `pos` starts (its bottom-left
    /// corner).
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn cell_origin(&self, pos: Position) -> WorldPoint {
        let corner = self.bottom_left();
        WorldPoint::new(
            corner.x + pos.column as f32 * self.spacing,
            corner.y + pos.row as f32 * self.spacing,
        )
    }

    /// Returns the world point at the middle of the cell at `pos`.
    #[must_use]
    pub fn cell_center(&self, pos: Position) -> WorldPoint {
        let start = self.cell_origin(pos);
        let half = self.spacing / 2.0;
        WorldPoint::new(start.x + half, start.y + half)
    }
}
