//! Loader for the stored-skeleton JSON contract.
//!
//! This is not a motion-capture file parser: it reads the already-parsed
//! hierarchy + keyframes (the shape an upstream parser produces) serialized
//! as JSON, then runs the same validation a direct in-memory hand-off gets.

use crate::error::SkeletonError;
use crate::skeleton::Skeleton;

/// Parse stored-skeleton JSON into a validated [`Skeleton`].
pub fn parse_skeleton_json(s: &str) -> Result<Skeleton, SkeletonError> {
    let skeleton: Skeleton =
        serde_json::from_str(s).map_err(|e| SkeletonError::Parse(e.to_string()))?;
    skeleton.validate()?;
    Ok(skeleton)
}
