use glam::Vec3;

/// A high-level action the host applies to the field or camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Pick at a screen position (pixels, origin top-left).
    Pick { x: f32, y: f32 },
    /// Rebuild the field at rest.
    Reset,
    /// Stop or resume ticking.
    TogglePause,
    /// Move the camera along its local (right, up, forward) axes.
    Move(Vec3),
    /// Input that maps to nothing.
    Noop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_carries_coordinates() {
        let a = Action::Pick { x: 10.0, y: 20.0 };
        assert!(matches!(a, Action::Pick { x, y } if x == 10.0 && y == 20.0));
    }
}
