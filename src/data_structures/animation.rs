//! Frame-driven texture cycling and time-driven spinning.

use cgmath::Deg;
use instant::Duration;

use crate::transform::Step;

/// Picks one of `len` animation frames, advancing every `frames_per_step`
/// rendered frames and wrapping around at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameCycle {
    frames_per_step: u32,
    len: usize,
    frames: u64,
    counter: u64,
}

impl FrameCycle {
    pub fn new(frames_per_step: u32, len: usize) -> Self {
        Self {
            frames_per_step: frames_per_step.max(1),
            len: len.max(1),
            frames: 0,
            counter: 0,
        }
    }

    /// Count one rendered frame and return the index to show.
    pub fn advance(&mut self) -> usize {
        self.frames += 1;
        if self.frames % self.frames_per_step as u64 == 0 {
            self.counter += 1;
        }
        self.index()
    }

    pub fn index(&self) -> usize {
        (self.counter % self.len as u64) as usize
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Yaw, pitch and roll angles growing at a constant rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Spin {
    /// Degrees per second for yaw, pitch and roll.
    pub rates: [f32; 3],
    angles: [f32; 3],
}

impl Spin {
    pub fn new(rates: [f32; 3]) -> Self {
        Self {
            rates,
            angles: [0.0; 3],
        }
    }

    pub fn step(&mut self, dt: Duration) {
        let secs = dt.as_secs_f32();
        for (angle, rate) in self.angles.iter_mut().zip(self.rates) {
            // wrap at a full turn
            *angle = (*angle + rate * secs) % 360.0;
        }
    }

    pub fn angles(&self) -> [Deg<f32>; 3] {
        self.angles.map(Deg)
    }

    pub fn rotation(&self) -> Step {
        let [yaw, pitch, roll] = self.angles();
        Step::YawPitchRoll {
            yaw: yaw.into(),
            pitch: pitch.into(),
            roll: roll.into(),
        }
    }
}
