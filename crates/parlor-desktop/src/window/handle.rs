//! Resize handles
//!
//! Each of the eight handles affects a specific subset of
//! `{x, y, width, height}`: north/west handles move the origin by the
//! size delta so the opposite edge stays put.

/// Which window edge or corner a resize drag grabbed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeHandle {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeHandle {
    /// Handles on the west edge shift `x` when width changes
    #[inline]
    pub fn affects_x(self) -> bool {
        matches!(
            self,
            ResizeHandle::West | ResizeHandle::NorthWest | ResizeHandle::SouthWest
        )
    }

    /// Handles on the north edge shift `y` when height changes
    #[inline]
    pub fn affects_y(self) -> bool {
        matches!(
            self,
            ResizeHandle::North | ResizeHandle::NorthEast | ResizeHandle::NorthWest
        )
    }

    /// Whether this handle changes the window width
    #[inline]
    pub fn affects_width(self) -> bool {
        !matches!(self, ResizeHandle::North | ResizeHandle::South)
    }

    /// Whether this handle changes the window height
    #[inline]
    pub fn affects_height(self) -> bool {
        !matches!(self, ResizeHandle::East | ResizeHandle::West)
    }

    /// Check if this is a corner handle
    #[inline]
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            ResizeHandle::NorthEast
                | ResizeHandle::NorthWest
                | ResizeHandle::SouthEast
                | ResizeHandle::SouthWest
        )
    }
}
