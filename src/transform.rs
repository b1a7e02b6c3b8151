//! Canned transform steps and their composition into world matrices.
//!
//! The tutorials build every world matrix from a short list of translation,
//! rotation and scale steps that are multiplied in an order specific to each
//! shape. A recipe here is written in the order the steps act on a vertex:
//! the first step is applied first.

use std::f32::consts::PI;

use cgmath::{Matrix4, Rad, SquareMatrix};
use instant::Duration;

/// Length of one full turn for time-driven rotations.
pub const SPIN_PERIOD_MILLIS: u128 = 1000;

/// A single affine step of a world transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Translate(f32, f32, f32),
    /// Uniform scale on all three axes.
    Scale(f32),
    RotateX(Rad<f32>),
    RotateY(Rad<f32>),
    RotateZ(Rad<f32>),
    /// Roll about Z, then pitch about X, then yaw about Y.
    YawPitchRoll {
        yaw: Rad<f32>,
        pitch: Rad<f32>,
        roll: Rad<f32>,
    },
}

impl Step {
    /// Column-vector matrix of this step.
    ///
    /// The rotation senses are those of a left-handed coordinate system
    /// viewed down +Z, which coincide with cgmath's `from_angle_*`.
    pub fn matrix(&self) -> Matrix4<f32> {
        match *self {
            Step::Translate(x, y, z) => Matrix4::from_translation([x, y, z].into()),
            Step::Scale(s) => Matrix4::from_scale(s),
            Step::RotateX(angle) => Matrix4::from_angle_x(angle),
            Step::RotateY(angle) => Matrix4::from_angle_y(angle),
            Step::RotateZ(angle) => Matrix4::from_angle_z(angle),
            Step::YawPitchRoll { yaw, pitch, roll } => {
                Matrix4::from_angle_y(yaw) * Matrix4::from_angle_x(pitch) * Matrix4::from_angle_z(roll)
            }
        }
    }
}

/// Compose `steps` into one world matrix, `steps[0]` acting first.
pub fn compose(steps: &[Step]) -> Matrix4<f32> {
    steps
        .iter()
        .fold(Matrix4::identity(), |acc, step| step.matrix() * acc)
}

/// Angle of a rotation that completes one turn per [`SPIN_PERIOD_MILLIS`].
///
/// Only the position inside the current period counts, so the angle jumps
/// back to zero at every period boundary.
pub fn spin_angle(elapsed: Duration) -> Rad<f32> {
    let millis = (elapsed.as_millis() % SPIN_PERIOD_MILLIS) as f32;
    Rad(millis * (2.0 * PI) / SPIN_PERIOD_MILLIS as f32)
}
