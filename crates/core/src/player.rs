//! Player state: the camera pose and movement with collision.

use crate::map::Map;
use crate::types::Pose;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pose: Pose,
}

impl Player {
    pub fn new(pose: Pose) -> Self {
        Self { pose }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Turn by `delta` radians. Rotation never collides.
    pub fn rotate(&mut self, delta: f32) {
        self.pose.angle += delta;
    }

    /// Walk `distance` cells along (or against) the facing direction.
    ///
    /// Both axes move together and the step is undone as a whole when the
    /// destination cell is a wall or off the map, so sliding along a wall
    /// does not happen and a diagonal approach to a corner may be blocked.
    /// Returns whether the player moved.
    pub fn try_move(&mut self, map: &Map, forward: bool, distance: f32) -> bool {
        let sign = if forward { 1.0 } else { -1.0 };
        let dx = self.pose.angle.sin() * distance * sign;
        let dy = self.pose.angle.cos() * distance * sign;

        let candidate = Pose::new(self.pose.x + dx, self.pose.y + dy, self.pose.angle);
        let (cx, cy) = candidate.cell();
        if map.kind_at_or_wall(cx, cy).is_wall() {
            return false;
        }
        self.pose = candidate;
        true
    }
}
