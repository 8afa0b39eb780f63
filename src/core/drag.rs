use bevy::math::Vec3;
use thiserror::Error;

use super::mesh::FaceId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DragError {
    #[error("a drag needs an anchor point, a normal and a face to start")]
    IncompleteSession,
    #[error("cannot start a drag with a zero length normal")]
    DegenerateNormal,
    #[error("a drag on face {0} is already in progress")]
    AlreadyDragging(FaceId),
}

/// Reference frame captured when a drag starts. Never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub anchor: Vec3,
    pub normal: Vec3,
    pub face: FaceId,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    /// Starts a drag. Only one drag exists at a time: starting while another
    /// is in progress is rejected and the running session is kept.
    pub fn begin(&mut self, anchor: Vec3, normal: Vec3, face: FaceId) -> Result<(), DragError> {
        if let DragState::Dragging(session) = self {
            return Err(DragError::AlreadyDragging(session.face));
        }
        if normal.length_squared() <= f32::EPSILON {
            return Err(DragError::DegenerateNormal);
        }

        *self = DragState::Dragging(DragSession {
            anchor,
            normal,
            face,
        });
        Ok(())
    }

    /// Clears the session, returning it if there was one.
    pub fn end(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    /// Flag style entry point. Activating requires all three values.
    pub fn set_drag_state(
        &mut self,
        active: bool,
        anchor: Option<Vec3>,
        normal: Option<Vec3>,
        face: Option<FaceId>,
    ) -> Result<(), DragError> {
        if !active {
            self.end();
            return Ok(());
        }

        match (anchor, normal, face) {
            (Some(anchor), Some(normal), Some(face)) => self.begin(anchor, normal, face),
            _ => Err(DragError::IncompleteSession),
        }
    }
}
