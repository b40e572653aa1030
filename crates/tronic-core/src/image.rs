//! Opaque image handles.
//!
//! Pixel data lives with the host; widgets only hold a handle and ask the
//! canvas to draw it.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Identifier of an image registered with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(pub u64);

/// Handle to a host image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageHandle {
    id: ImageId,
    natural_size: Size,
}

impl ImageHandle {
    /// Create a handle for image `id` with its natural pixel size.
    #[must_use]
    pub const fn new(id: ImageId, natural_size: Size) -> Self {
        Self { id, natural_size }
    }

    /// Host identifier.
    #[must_use]
    pub const fn id(&self) -> ImageId {
        self.id
    }

    /// Natural (unscaled) size.
    #[must_use]
    pub const fn natural_size(&self) -> Size {
        self.natural_size
    }
}
