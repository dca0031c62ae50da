//! Which mode-bit predicates the host can actually express.
//!
//! Platforms disagree on which `S_IF*` encodings exist; rather than gating
//! classifier arms behind conditional compilation, the supported set is
//! probed once and handed to the classifier as a plain value, so tests can
//! exercise any platform shape without recompiling.

use cfg_if::cfg_if;
#[cfg(feature = "enable-serde")]
use serde::{Deserialize, Serialize};

/// The set of file-mode predicates the host platform supports.
///
/// The regular-file, directory, character-device, and symbolic-link
/// predicates are universal and always evaluated; only the ones that vary
/// across platforms are listed here.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub struct ModeCapabilities {
    /// The platform has a socket mode bit (`S_IFSOCK`).
    pub socket: bool,
    /// The platform has a FIFO mode bit (`S_IFIFO`).
    pub fifo: bool,
    /// The platform has a block-device mode bit (`S_IFBLK`).
    pub block_device: bool,
}

impl ModeCapabilities {
    /// Capabilities of the build target.
    pub fn host() -> Self {
        cfg_if! {
            if #[cfg(unix)] {
                Self::all()
            } else {
                // Non-unix hosts synthesize regular/directory/device bits
                // but have no socket, fifo, or block-device encoding.
                Self::none()
            }
        }
    }

    pub const fn all() -> Self {
        Self {
            socket: true,
            fifo: true,
            block_device: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            socket: false,
            fifo: false,
            block_device: false,
        }
    }
}

impl Default for ModeCapabilities {
    fn default() -> Self {
        Self::host()
    }
}
