//! Quaternion math for joint rotations.
//!
//! Quaternions are plain `[f32; 4]` arrays in `(x, y, z, w)` component order.
//! All functions are pure; angles are taken in degrees because that is what
//! motion-capture rotation channels carry.

use serde::{Deserialize, Serialize};

/// Quaternion as `(x, y, z, w)`.
pub type Quat = [f32; 4];

/// The identity rotation.
pub const IDENTITY: Quat = [0.0, 0.0, 0.0, 1.0];

/// Sequence in which the three per-axis rotations compose into one joint
/// rotation. Variant names list the axes in application order; fixed per
/// joint for the skeleton's lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationOrder {
    #[serde(rename = "XYZ")]
    Xyz,
    #[serde(rename = "XZY")]
    Xzy,
    #[serde(rename = "YXZ")]
    Yxz,
    #[serde(rename = "YZX")]
    Yzx,
    #[serde(rename = "ZXY")]
    Zxy,
    #[serde(rename = "ZYX")]
    Zyx,
}

impl RotationOrder {
    pub const ALL: [RotationOrder; 6] = [
        RotationOrder::Xyz,
        RotationOrder::Xzy,
        RotationOrder::Yxz,
        RotationOrder::Yzx,
        RotationOrder::Zxy,
        RotationOrder::Zyx,
    ];

    /// Application sequence as indices into an `[x, y, z]` triple.
    #[inline]
    fn sequence(self) -> [usize; 3] {
        match self {
            RotationOrder::Xyz => [0, 1, 2],
            RotationOrder::Xzy => [0, 2, 1],
            RotationOrder::Yxz => [1, 0, 2],
            RotationOrder::Yzx => [1, 2, 0],
            RotationOrder::Zxy => [2, 0, 1],
            RotationOrder::Zyx => [2, 1, 0],
        }
    }

    /// Get the name of this rotation order.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            RotationOrder::Xyz => "XYZ",
            RotationOrder::Xzy => "XZY",
            RotationOrder::Yxz => "YXZ",
            RotationOrder::Yzx => "YZX",
            RotationOrder::Zxy => "ZXY",
            RotationOrder::Zyx => "ZYX",
        }
    }
}

impl Default for RotationOrder {
    /// Rotation channels in motion-capture files are most commonly Z, X, Y.
    fn default() -> Self {
        RotationOrder::Zxy
    }
}

/// Hamilton product of two quaternions. Non-commutative.
#[inline]
pub fn multiply(q1: Quat, q2: Quat) -> Quat {
    [
        q1[3] * q2[0] + q1[0] * q2[3] + q1[1] * q2[2] - q1[2] * q2[1],
        q1[3] * q2[1] + q1[1] * q2[3] + q1[2] * q2[0] - q1[0] * q2[2],
        q1[3] * q2[2] + q1[2] * q2[3] + q1[0] * q2[1] - q1[1] * q2[0],
        q1[3] * q2[3] - q1[0] * q2[0] - q1[1] * q2[1] - q1[2] * q2[2],
    ]
}

/// Conjugate: negated vector part, same scalar part.
#[inline]
pub fn conjugate(q: Quat) -> Quat {
    [-q[0], -q[1], -q[2], q[3]]
}

#[inline]
pub fn dot(a: Quat, b: Quat) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

#[inline]
pub fn length(q: Quat) -> f32 {
    dot(q, q).sqrt()
}

#[inline]
pub fn normalize(mut q: Quat) -> Quat {
    let len2 = dot(q, q);
    if len2 > 0.0 {
        let inv_len = len2.sqrt().recip();
        q[0] *= inv_len;
        q[1] *= inv_len;
        q[2] *= inv_len;
        q[3] *= inv_len;
    }
    q
}

/// Rotate a 3-vector by a unit quaternion via the sandwich product
/// `q * v * conj(q)`.
#[inline]
pub fn rotate_vec(q: Quat, v: [f32; 3]) -> [f32; 3] {
    let p = multiply(multiply(q, [v[0], v[1], v[2], 0.0]), conjugate(q));
    [p[0], p[1], p[2]]
}

/// Rotation of `theta_degrees` about a normalized axis:
/// `w = cos(θ/2)`, vector part `sin(θ/2) * axis`.
#[inline]
pub fn axis_angle(axis: [f32; 3], theta_degrees: f32) -> Quat {
    let half = (theta_degrees / 2.0).to_radians();
    let (sin, cos) = half.sin_cos();
    [sin * axis[0], sin * axis[1], sin * axis[2], cos]
}

/// Compose the given Euler angles (degrees, `[x, y, z]`) into a single
/// rotation, multiplying the running product by each axis quaternion in the
/// order's application sequence. The result is re-normalized so callers
/// always get a unit quaternion despite floating-point drift.
pub fn from_euler(euler_degrees: [f32; 3], order: RotationOrder) -> Quat {
    let axis_quats = [
        axis_angle([1.0, 0.0, 0.0], euler_degrees[0]),
        axis_angle([0.0, 1.0, 0.0], euler_degrees[1]),
        axis_angle([0.0, 0.0, 1.0], euler_degrees[2]),
    ];
    let mut q = IDENTITY;
    for axis in order.sequence() {
        q = multiply(q, axis_quats[axis]);
    }
    normalize(q)
}

/// Spherical linear interpolation between two unit quaternions for `t` in
/// `[0, 1]`, along the shortest great-circle arc.
///
/// If the dot product is negative, `q2` is negated to force the shortest
/// path. The relative rotation's scalar part is clamped to `[-1, 1]` before
/// `acos` to absorb floating-point overshoot. Coincident or
/// antipodal-after-correction inputs (`sin θ == 0`) return `q1` unchanged.
pub fn slerp(q1: Quat, mut q2: Quat, t: f32) -> Quat {
    if dot(q1, q2) < 0.0 {
        q2 = [-q2[0], -q2[1], -q2[2], -q2[3]];
    }
    let r = multiply(q1, conjugate(q2));
    let theta = r[3].clamp(-1.0, 1.0).acos();
    let sin_theta = theta.sin();
    if sin_theta == 0.0 {
        return q1;
    }
    let w1 = (((1.0 - t) * theta).sin()) / sin_theta;
    let w2 = ((t * theta).sin()) / sin_theta;
    normalize([
        w1 * q1[0] + w2 * q2[0],
        w1 * q1[1] + w2 * q2[1],
        w1 * q1[2] + w2 * q2[2],
        w1 * q1[3] + w2 * q2[3],
    ])
}
