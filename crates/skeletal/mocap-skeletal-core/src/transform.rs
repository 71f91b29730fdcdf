//! Rigid world transforms emitted by the pose solver.

use serde::{Deserialize, Serialize};

use crate::quat::{self, Quat};

/// Rigid transform (translation + rotation). The pose computation applies no
/// scale; any visual scaling belongs to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointTransform {
    pub translation: [f32; 3],
    /// Unit quaternion `(x, y, z, w)`.
    pub rotation: Quat,
}

impl JointTransform {
    #[inline]
    pub fn identity() -> Self {
        Self {
            translation: [0.0, 0.0, 0.0],
            rotation: quat::IDENTITY,
        }
    }

    #[inline]
    pub fn from_translation(translation: [f32; 3]) -> Self {
        Self {
            translation,
            rotation: quat::IDENTITY,
        }
    }

    /// Compose `self` (parent) with a local transform: the local translation
    /// is rotated into the parent's frame, then offset by the parent's
    /// translation; rotations multiply.
    #[inline]
    pub fn then(&self, local: &JointTransform) -> Self {
        let rotated = quat::rotate_vec(self.rotation, local.translation);
        Self {
            translation: [
                self.translation[0] + rotated[0],
                self.translation[1] + rotated[1],
                self.translation[2] + rotated[2],
            ],
            rotation: quat::multiply(self.rotation, local.rotation),
        }
    }

    /// Apply this transform to a point.
    #[inline]
    pub fn transform_point(&self, p: [f32; 3]) -> [f32; 3] {
        let rotated = quat::rotate_vec(self.rotation, p);
        [
            self.translation[0] + rotated[0],
            self.translation[1] + rotated[1],
            self.translation[2] + rotated[2],
        ]
    }

    /// Row-major 4x4 affine matrix (translation in the last column), for
    /// presentation layers that consume matrices instead of TRS pairs.
    pub fn to_matrix(&self) -> [[f32; 4]; 4] {
        let [x, y, z, w] = self.rotation;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        let [tx, ty, tz] = self.translation;
        [
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy), tx],
            [2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx), ty],
            [2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy), tz],
            [0.0, 0.0, 0.0, 1.0],
        ]
    }
}

impl Default for JointTransform {
    fn default() -> Self {
        Self::identity()
    }
}
