mod camera;
mod types;

pub use {
    camera::{CameraCapability, CapabilityError},
    types::{CaptureConfig, Facing, MediaReference, PermissionStatus, QualityTier},
};
