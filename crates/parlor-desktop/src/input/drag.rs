//! Drag resolution contract
//!
//! Icon drags are resolved by an external collaborator. The engine hands
//! it a session on pointer-down, feeds it pointer deltas, and commits the
//! final grid position it reports on release. How the resolver animates,
//! snaps, or applies momentum in between is its own business.

use crate::grid::{Footprint, GridPosition};
use crate::math::{Size, Vec2};

/// An in-flight drag for one icon
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    /// Icon being dragged
    pub entity_id: String,
    /// Grid position when the drag started
    pub origin: GridPosition,
    /// Footprint of the dragged icon
    pub footprint: Footprint,
    /// Pointer delta accumulated since the start, in pixels
    pub accumulated: Vec2,
}

impl DragSession {
    /// Start a session for an icon at its current position
    pub fn new(entity_id: impl Into<String>, origin: GridPosition, footprint: Footprint) -> Self {
        Self {
            entity_id: entity_id.into(),
            origin,
            footprint,
            accumulated: Vec2::ZERO,
        }
    }
}

/// Intermediate state reported while a drag is in flight
///
/// Purely advisory; nothing is committed until the drag ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragProposal {
    /// Cell the icon would land on if released now
    pub position: GridPosition,
    /// Whether that cell currently collides with a sibling
    pub blocked: bool,
}

/// Final result of a completed drag
#[derive(Clone, Debug, PartialEq)]
pub struct DragOutcome {
    /// Icon that was dragged
    pub entity_id: String,
    /// Grid position the resolver settled on
    pub final_position: GridPosition,
}

/// Contract the external drag subsystem is driven through
///
/// The engine treats implementations as opaque: the outcome's
/// `final_position` is still clamped and collision-checked before it is
/// committed, so a misbehaving resolver cannot violate layout invariants.
pub trait DragResolver {
    /// Begin dragging an icon
    fn drag_start(&mut self, entity_id: &str, origin: GridPosition, footprint: Footprint)
        -> DragSession;

    /// Feed a pointer delta; `siblings` are the positions of every other
    /// icon, for collision previews
    fn drag_move(
        &mut self,
        session: &mut DragSession,
        pointer_delta: Vec2,
        siblings: &[(GridPosition, Footprint)],
    ) -> DragProposal;

    /// Finish the drag and report where the icon lands
    fn drag_end(&mut self, session: DragSession, viewport: Size) -> DragOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{overlaps, pixel_to_grid};

    /// Minimal resolver: accumulate deltas, land on the nearest cell
    struct DirectResolver;

    impl DragResolver for DirectResolver {
        fn drag_start(
            &mut self,
            entity_id: &str,
            origin: GridPosition,
            footprint: Footprint,
        ) -> DragSession {
            DragSession::new(entity_id, origin, footprint)
        }

        fn drag_move(
            &mut self,
            session: &mut DragSession,
            pointer_delta: Vec2,
            siblings: &[(GridPosition, Footprint)],
        ) -> DragProposal {
            session.accumulated += pointer_delta;
            let position = self.landing(session, 1920.0);
            let blocked = siblings
                .iter()
                .any(|&(pos, size)| overlaps(position, session.footprint, pos, size));
            DragProposal { position, blocked }
        }

        fn drag_end(&mut self, session: DragSession, viewport: Size) -> DragOutcome {
            let position = self.landing(&session, viewport.width);
            DragOutcome {
                entity_id: session.entity_id,
                final_position: position,
            }
        }
    }

    impl DirectResolver {
        fn landing(&self, session: &DragSession, viewport_width: f32) -> GridPosition {
            GridPosition::new(
                session.origin.row + pixel_to_grid(session.accumulated.y, viewport_width),
                session.origin.col + pixel_to_grid(session.accumulated.x, viewport_width),
            )
            .clamped(session.footprint)
        }
    }

    #[test]
    fn test_session_accumulates_deltas() {
        let mut resolver = DirectResolver;
        let mut session =
            resolver.drag_start("calendar", GridPosition::new(50, 50), Footprint::default());

        resolver.drag_move(&mut session, Vec2::new(96.0, 0.0), &[]);
        resolver.drag_move(&mut session, Vec2::new(96.0, 96.0), &[]);
        assert!((session.accumulated.x - 192.0).abs() < 0.001);
        assert!((session.accumulated.y - 96.0).abs() < 0.001);
    }

    #[test]
    fn test_proposal_flags_collisions() {
        let mut resolver = DirectResolver;
        let mut session =
            resolver.drag_start("calendar", GridPosition::new(50, 50), Footprint::default());

        let siblings = [(GridPosition::new(55, 60), Footprint::default())];
        let proposal = resolver.drag_move(&mut session, Vec2::new(96.0, 0.0), &siblings);
        assert!(proposal.blocked);
    }

    #[test]
    fn test_outcome_stays_in_bounds() {
        let mut resolver = DirectResolver;
        let mut session =
            resolver.drag_start("calendar", GridPosition::new(195, 195), Footprint::default());

        resolver.drag_move(&mut session, Vec2::new(5000.0, 5000.0), &[]);
        let outcome = resolver.drag_end(session, Size::new(1920.0, 1080.0));

        assert_eq!(outcome.entity_id, "calendar");
        assert!(outcome.final_position.in_bounds(Footprint::default()));
    }
}
