//! Host-to-portable metadata and error translation for sandboxed runtimes.
//!
//! This crate is the boundary where platform divergence collapses: native
//! result codes, `stat` mode bits, and timespecs go in, and the normalized
//! representations consumed by the sandbox's system-call ABI come out. It
//! performs no I/O of its own — the host I/O abstraction (see
//! [`descriptor::HostIo`]) executes operations and hands the raw results
//! here for translation.
//!
//! Every function in this crate is pure, total, and reentrant: no shared
//! state, no locks, no retries, and no errors of its own — it only converts
//! between the host's representation and the portable one.

pub mod capability;
pub mod descriptor;
pub mod errno;
pub mod filestat;
pub mod filetype;
pub mod timestamp;

pub use capability::ModeCapabilities;
pub use descriptor::{Fd, HandleKind, HostIo};
pub use errno::Errno;
pub use filestat::{Filestat, HostStat};
pub use filetype::Filetype;
pub use timestamp::{HostTimespec, Timestamp, NANOS_PER_SEC};
