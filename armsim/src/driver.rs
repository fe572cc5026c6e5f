use crate::config::AnimationConfig;
use kinematics::{ArmModel, KinematicsErrors};
use std::time::Duration;

/// Owns the frame angle sequence and feeds it to an arm one frame at a time.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    animation: AnimationConfig,
    interval: Duration,
    next_frame: usize,
}

impl AnimationDriver {
    pub fn new(animation: AnimationConfig, interval: Duration) -> Self {
        Self {
            animation,
            interval,
            next_frame: 0,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.animation.frame_count()
    }

    /// Degrees for the requested frame without advancing the driver.
    pub fn angles_at(&self, frame: usize) -> Option<Vec<f64>> {
        self.animation.angles_at(frame)
    }

    /// Replaces the arm's angles with the next frame and returns its index,
    /// or `None` once the sequence is exhausted. A rejected frame leaves
    /// both the arm and the driver where they were.
    pub fn advance(&mut self, arm: &mut ArmModel) -> Result<Option<usize>, KinematicsErrors> {
        let frame = self.next_frame;
        let Some(degrees) = self.angles_at(frame) else {
            return Ok(None);
        };
        arm.set_angles_degrees(&degrees)?;
        self.next_frame += 1;
        Ok(Some(frame))
    }

    /// Sleeps for one frame interval.
    pub fn wait(&self) {
        if !self.interval.is_zero() {
            std::thread::sleep(self.interval);
        }
    }
}
