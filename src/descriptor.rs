//! Resolution of the portable file type of a live descriptor.
//!
//! Stat data alone cannot fully classify a descriptor: mode bits do not
//! distinguish stream from datagram sockets, and some platforms cannot stat
//! a terminal at all. Resolution is therefore a two-stage pipeline — a
//! stat-based classification followed by a hint-based override — with a
//! recovery path for unstatable terminals.

use tracing::trace;

use crate::capability::ModeCapabilities;
use crate::errno::Errno;
use crate::filestat::HostStat;
use crate::filetype::{self, Filetype};

/// A file descriptor handle.
pub type Fd = u32;

/// Side-channel classification of an open handle, obtainable without a stat.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HandleKind {
    /// A terminal device.
    Tty,
    /// A datagram-oriented socket.
    UdpSocket,
    /// Anything else, or the host cannot tell.
    Other,
}

/// The host I/O abstraction this layer translates for.
///
/// `fstat` performs a single native stat on the descriptor and reports
/// failure as the raw native result code; `handle_kind` answers from
/// handle-table bookkeeping alone and must not perform I/O.
pub trait HostIo {
    fn fstat(&self, fd: Fd) -> Result<HostStat, i32>;
    fn handle_kind(&self, fd: Fd) -> HandleKind;
}

/// The hint-based override stage: a stat that classified as a stream socket
/// is downgraded to a datagram socket when the handle kind says so. Every
/// other classification passes through untouched.
pub fn refine_socket_kind(filetype: Filetype, kind: HandleKind) -> Filetype {
    match (filetype, kind) {
        (Filetype::SocketStream, HandleKind::UdpSocket) => Filetype::SocketDgram,
        (filetype, _) => filetype,
    }
}

/// Determines the portable file type of an open descriptor.
///
/// A single stat attempt, no retries: stat failure is deterministic for a
/// given descriptor and platform. On failure the handle-kind hint is
/// consulted first — some platforms cannot stat a terminal, and a known
/// terminal must classify as a character device rather than surface an
/// error. Any other failure translates to its portable code; the caller
/// treats the type as [`Filetype::Unknown`] in that case.
pub fn resolve_filetype(
    io: &impl HostIo,
    fd: Fd,
    caps: &ModeCapabilities,
) -> Result<Filetype, Errno> {
    let stat = match io.fstat(fd) {
        Ok(stat) => stat,
        Err(code) => {
            if io.handle_kind(fd) == HandleKind::Tty {
                trace!(fd, "unstatable descriptor reports as a terminal");
                return Ok(Filetype::CharacterDevice);
            }
            return Err(Errno::from_native(code));
        }
    };

    let filetype = filetype::from_mode(stat.mode, caps);
    if filetype == Filetype::SocketStream {
        return Ok(refine_socket_kind(filetype, io.handle_kind(fd)));
    }
    Ok(filetype)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stream_socket_downgrades_on_udp_hint() {
        assert_eq!(
            refine_socket_kind(Filetype::SocketStream, HandleKind::UdpSocket),
            Filetype::SocketDgram
        );
    }

    #[test]
    fn non_sockets_ignore_the_hint() {
        assert_eq!(
            refine_socket_kind(Filetype::RegularFile, HandleKind::UdpSocket),
            Filetype::RegularFile
        );
        assert_eq!(
            refine_socket_kind(Filetype::SocketDgram, HandleKind::Tty),
            Filetype::SocketDgram
        );
        assert_eq!(
            refine_socket_kind(Filetype::SocketStream, HandleKind::Other),
            Filetype::SocketStream
        );
    }
}
