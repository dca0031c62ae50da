//! Translation of native host result codes into portable WASI error codes.
//!
//! The host I/O layer reports results the libuv way: `0` for success, a
//! negated errno value for failure, and (rarely) a positive value when the
//! code is already portable. [`Errno::from_native`] collapses all of that
//! into the closed portable set.

use num_enum::{IntoPrimitive, TryFromPrimitive};
#[cfg(feature = "enable-serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Error codes returned to the sandboxed guest.
///
/// Not all of these are produced by the translation table; some exist merely
/// for alignment with POSIX and are only ever forwarded from layers that
/// already speak the portable set.
#[repr(u16)]
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub enum Errno {
    /// No error occurred. System call completed successfully.
    #[error("no error")]
    Success,
    /// Argument list too long.
    #[error("argument list too long")]
    Toobig,
    /// Permission denied.
    #[error("permission denied")]
    Access,
    /// Address in use.
    #[error("address in use")]
    Addrinuse,
    /// Address not available.
    #[error("address not available")]
    Addrnotavail,
    /// Address family not supported.
    #[error("address family not supported")]
    Afnosupport,
    /// Resource unavailable, or operation would block.
    #[error("resource unavailable, or operation would block")]
    Again,
    /// Connection already in progress.
    #[error("connection already in progress")]
    Already,
    /// Bad file descriptor.
    #[error("bad file descriptor")]
    Badf,
    /// Bad message.
    #[error("bad message")]
    Badmsg,
    /// Device or resource busy.
    #[error("device or resource busy")]
    Busy,
    /// Operation canceled.
    #[error("operation canceled")]
    Canceled,
    /// No child processes.
    #[error("no child processes")]
    Child,
    /// Connection aborted.
    #[error("connection aborted")]
    Connaborted,
    /// Connection refused.
    #[error("connection refused")]
    Connrefused,
    /// Connection reset.
    #[error("connection reset")]
    Connreset,
    /// Resource deadlock would occur.
    #[error("resource deadlock would occur")]
    Deadlk,
    /// Destination address required.
    #[error("destination address required")]
    Destaddrreq,
    /// Mathematics argument out of domain of function.
    #[error("mathematics argument out of domain of function")]
    Dom,
    /// Reserved.
    #[error("disk quota exceeded")]
    Dquot,
    /// File exists.
    #[error("file exists")]
    Exist,
    /// Bad address.
    #[error("bad address")]
    Fault,
    /// File too large.
    #[error("file too large")]
    Fbig,
    /// Host is unreachable.
    #[error("host is unreachable")]
    Hostunreach,
    /// Identifier removed.
    #[error("identifier removed")]
    Idrm,
    /// Illegal byte sequence.
    #[error("illegal byte sequence")]
    Ilseq,
    /// Operation in progress.
    #[error("operation in progress")]
    Inprogress,
    /// Interrupted function.
    #[error("interrupted function call")]
    Intr,
    /// Invalid argument.
    #[error("invalid argument")]
    Inval,
    /// I/O error.
    #[error("input/output error")]
    Io,
    /// Socket is connected.
    #[error("socket is connected")]
    Isconn,
    /// Is a directory.
    #[error("is a directory")]
    Isdir,
    /// Too many levels of symbolic links.
    #[error("too many levels of symbolic links")]
    Loop,
    /// File descriptor value too large.
    #[error("file descriptor value too large")]
    Mfile,
    /// Too many links.
    #[error("too many hard links")]
    Mlink,
    /// Message too large.
    #[error("message too large")]
    Msgsize,
    /// Reserved.
    #[error("multihop attempted")]
    Multihop,
    /// Filename too long.
    #[error("filename too long")]
    Nametoolong,
    /// Network is down.
    #[error("network is down")]
    Netdown,
    /// Connection aborted by network.
    #[error("connection aborted by network")]
    Netreset,
    /// Network unreachable.
    #[error("network unreachable")]
    Netunreach,
    /// Too many files open in system.
    #[error("too many files open in system")]
    Nfile,
    /// No buffer space available.
    #[error("no buffer space available")]
    Nobufs,
    /// No such device.
    #[error("no such device")]
    Nodev,
    /// No such file or directory.
    #[error("no such file or directory")]
    Noent,
    /// Executable file format error.
    #[error("executable file format error")]
    Noexec,
    /// No locks available.
    #[error("no locks available")]
    Nolck,
    /// Reserved.
    #[error("link has been severed")]
    Nolink,
    /// Not enough space.
    #[error("not enough space")]
    Nomem,
    /// No message of the desired type.
    #[error("no message of the desired type")]
    Nomsg,
    /// Protocol not available.
    #[error("protocol not available")]
    Noprotoopt,
    /// No space left on device.
    #[error("no space left on device")]
    Nospc,
    /// Function not supported.
    #[error("function not supported")]
    Nosys,
    /// The socket is not connected.
    #[error("the socket is not connected")]
    Notconn,
    /// Not a directory or a symbolic link to a directory.
    #[error("not a directory or a symbolic link to a directory")]
    Notdir,
    /// Directory not empty.
    #[error("directory not empty")]
    Notempty,
    /// State not recoverable.
    #[error("state not recoverable")]
    Notrecoverable,
    /// Not a socket.
    #[error("not a socket")]
    Notsock,
    /// Not supported, or operation not supported on socket.
    #[error("not supported")]
    Notsup,
    /// Inappropriate I/O control operation.
    #[error("inappropriate I/O control operation")]
    Notty,
    /// No such device or address.
    #[error("no such device or address")]
    Nxio,
    /// Value too large to be stored in data type.
    #[error("value too large to be stored in data type")]
    Overflow,
    /// Previous owner died.
    #[error("previous owner died")]
    Ownerdead,
    /// Operation not permitted.
    #[error("operation not permitted")]
    Perm,
    /// Broken pipe.
    #[error("broken pipe")]
    Pipe,
    /// Protocol error.
    #[error("protocol error")]
    Proto,
    /// Protocol not supported.
    #[error("protocol not supported")]
    Protonosupport,
    /// Protocol wrong type for socket.
    #[error("protocol wrong type for socket")]
    Prototype,
    /// Result too large.
    #[error("result too large")]
    Range,
    /// Read-only file system.
    #[error("read-only file system")]
    Rofs,
    /// Invalid seek.
    #[error("invalid seek")]
    Spipe,
    /// No such process.
    #[error("no such process")]
    Srch,
    /// Reserved.
    #[error("stale file handle")]
    Stale,
    /// Connection timed out.
    #[error("connection timed out")]
    Timedout,
    /// Text file busy.
    #[error("text file busy")]
    Txtbsy,
    /// Cross-device link.
    #[error("cross-device link")]
    Xdev,
    /// Extension: capabilities insufficient.
    #[error("capabilities insufficient")]
    Notcapable,
}

// On at least some AIX machines ENOTEMPTY and EEXIST share an integer value,
// and EWOULDBLOCK/EOPNOTSUPP alias EAGAIN/ENOTSUP on mainstream platforms.
// The aliased arms below are gated on these so they never duplicate a case.
const NOTEMPTY_IS_DISTINCT: bool = libc::ENOTEMPTY != libc::EEXIST;
const WOULDBLOCK_IS_DISTINCT: bool = libc::EWOULDBLOCK != libc::EAGAIN;
const OPNOTSUPP_IS_DISTINCT: bool = libc::EOPNOTSUPP != libc::ENOTSUP;

impl Errno {
    /// Translates a native host result code into a portable error code.
    ///
    /// Total over `i32`: zero maps to [`Errno::Success`], negative codes are
    /// negated errno values looked up in the translation table, and positive
    /// codes are treated as already portable and reinterpreted into the
    /// `Errno` set. Negative codes with no portable counterpart (the
    /// resolver's address-family codes, vendor extensions) and positive codes
    /// outside the portable range collapse to [`Errno::Nosys`].
    pub fn from_native(code: i32) -> Errno {
        if code == 0 {
            return Errno::Success;
        }
        if code > 0 {
            return match u16::try_from(code).ok().and_then(|raw| Errno::try_from(raw).ok()) {
                Some(errno) => errno,
                None => {
                    debug!(code, "positive result code outside the portable range");
                    Errno::Nosys
                }
            };
        }

        // wrapping_neg keeps the lookup total for i32::MIN, which then falls
        // through to the default arm.
        match code.wrapping_neg() {
            libc::E2BIG => Errno::Toobig,
            libc::EACCES => Errno::Access,
            libc::EADDRINUSE => Errno::Addrinuse,
            libc::EADDRNOTAVAIL => Errno::Addrnotavail,
            libc::EAFNOSUPPORT => Errno::Afnosupport,
            libc::EAGAIN => Errno::Again,
            err if WOULDBLOCK_IS_DISTINCT && err == libc::EWOULDBLOCK => Errno::Again,
            libc::EALREADY => Errno::Already,
            libc::EBADF => Errno::Badf,
            libc::EBADMSG => Errno::Badmsg,
            libc::EBUSY => Errno::Busy,
            libc::ECANCELED => Errno::Canceled,
            libc::ECHILD => Errno::Child,
            libc::ECONNABORTED => Errno::Connaborted,
            libc::ECONNREFUSED => Errno::Connrefused,
            libc::ECONNRESET => Errno::Connreset,
            libc::EDEADLK => Errno::Deadlk,
            libc::EDESTADDRREQ => Errno::Destaddrreq,
            libc::EDOM => Errno::Dom,
            libc::EDQUOT => Errno::Dquot,
            err if NOTEMPTY_IS_DISTINCT && err == libc::ENOTEMPTY => Errno::Notempty,
            libc::EEXIST => Errno::Exist,
            libc::EFAULT => Errno::Fault,
            libc::EFBIG => Errno::Fbig,
            libc::EHOSTUNREACH => Errno::Hostunreach,
            libc::EIDRM => Errno::Idrm,
            libc::EILSEQ => Errno::Ilseq,
            libc::EINPROGRESS => Errno::Inprogress,
            libc::EINTR => Errno::Intr,
            libc::EINVAL => Errno::Inval,
            libc::EIO => Errno::Io,
            libc::EISCONN => Errno::Isconn,
            libc::EISDIR => Errno::Isdir,
            libc::ELOOP => Errno::Loop,
            libc::EMFILE => Errno::Mfile,
            libc::EMLINK => Errno::Mlink,
            libc::EMSGSIZE => Errno::Msgsize,
            libc::EMULTIHOP => Errno::Multihop,
            libc::ENAMETOOLONG => Errno::Nametoolong,
            libc::ENETDOWN => Errno::Netdown,
            libc::ENETRESET => Errno::Netreset,
            libc::ENETUNREACH => Errno::Netunreach,
            libc::ENFILE => Errno::Nfile,
            libc::ENOBUFS => Errno::Nobufs,
            libc::ENODEV => Errno::Nodev,
            libc::ENOENT => Errno::Noent,
            libc::ENOEXEC => Errno::Noexec,
            libc::ENOLCK => Errno::Nolck,
            libc::ENOLINK => Errno::Nolink,
            libc::ENOMEM => Errno::Nomem,
            libc::ENOMSG => Errno::Nomsg,
            libc::ENOPROTOOPT => Errno::Noprotoopt,
            libc::ENOSPC => Errno::Nospc,
            libc::ENOSYS => Errno::Nosys,
            libc::ENOTCONN => Errno::Notconn,
            libc::ENOTDIR => Errno::Notdir,
            libc::ENOTRECOVERABLE => Errno::Notrecoverable,
            libc::ENOTSOCK => Errno::Notsock,
            libc::ENOTSUP => Errno::Notsup,
            err if OPNOTSUPP_IS_DISTINCT && err == libc::EOPNOTSUPP => Errno::Notsup,
            libc::ENOTTY => Errno::Notty,
            libc::ENXIO => Errno::Nxio,
            libc::EOVERFLOW => Errno::Overflow,
            libc::EOWNERDEAD => Errno::Ownerdead,
            libc::EPERM => Errno::Perm,
            libc::EPIPE => Errno::Pipe,
            libc::EPROTO => Errno::Proto,
            libc::EPROTONOSUPPORT => Errno::Protonosupport,
            libc::EPROTOTYPE => Errno::Prototype,
            libc::ERANGE => Errno::Range,
            libc::EROFS => Errno::Rofs,
            libc::ESPIPE => Errno::Spipe,
            libc::ESRCH => Errno::Srch,
            libc::ESTALE => Errno::Stale,
            libc::ETIMEDOUT => Errno::Timedout,
            libc::ETXTBSY => Errno::Txtbsy,
            libc::EXDEV => Errno::Xdev,
            _ => {
                // The getaddrinfo EAI_* family and vendor-specific codes have
                // no counterpart in the portable set.
                debug!(code, "native error code has no portable counterpart");
                Errno::Nosys
            }
        }
    }

    /// The raw value carried across the ABI boundary.
    pub fn raw(self) -> u16 {
        self.into()
    }

    pub fn is_success(self) -> bool {
        self == Errno::Success
    }
}

impl From<std::io::Error> for Errno {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match err.kind() {
            ErrorKind::NotFound => Errno::Noent,
            ErrorKind::PermissionDenied => Errno::Access,
            ErrorKind::ConnectionRefused => Errno::Connrefused,
            ErrorKind::ConnectionReset => Errno::Connreset,
            ErrorKind::ConnectionAborted => Errno::Connaborted,
            ErrorKind::NotConnected => Errno::Notconn,
            ErrorKind::AddrInUse => Errno::Addrinuse,
            ErrorKind::AddrNotAvailable => Errno::Addrnotavail,
            ErrorKind::BrokenPipe => Errno::Pipe,
            ErrorKind::AlreadyExists => Errno::Exist,
            ErrorKind::WouldBlock => Errno::Again,
            ErrorKind::InvalidInput => Errno::Inval,
            ErrorKind::InvalidData => Errno::Io,
            ErrorKind::TimedOut => Errno::Timedout,
            ErrorKind::Interrupted => Errno::Intr,
            ErrorKind::Unsupported => Errno::Notsup,
            ErrorKind::OutOfMemory => Errno::Nomem,
            _ => Errno::Io,
        }
    }
}

impl From<Errno> for std::io::ErrorKind {
    fn from(errno: Errno) -> Self {
        use std::io::ErrorKind;
        match errno {
            Errno::Again => ErrorKind::WouldBlock,
            Errno::Already | Errno::Exist => ErrorKind::AlreadyExists,
            Errno::Badf | Errno::Inval => ErrorKind::InvalidInput,
            Errno::Badmsg | Errno::Nomsg => ErrorKind::InvalidData,
            Errno::Canceled | Errno::Intr => ErrorKind::Interrupted,
            Errno::Connaborted => ErrorKind::ConnectionAborted,
            Errno::Connrefused => ErrorKind::ConnectionRefused,
            Errno::Connreset | Errno::Netreset => ErrorKind::ConnectionReset,
            Errno::Noent => ErrorKind::NotFound,
            Errno::Nomem => ErrorKind::OutOfMemory,
            Errno::Notconn => ErrorKind::NotConnected,
            Errno::Access | Errno::Perm => ErrorKind::PermissionDenied,
            Errno::Pipe => ErrorKind::BrokenPipe,
            Errno::Timedout => ErrorKind::TimedOut,
            Errno::Notsup => ErrorKind::Unsupported,
            _ => ErrorKind::Other,
        }
    }
}

impl From<Errno> for std::io::Error {
    fn from(errno: Errno) -> Self {
        let kind: std::io::ErrorKind = errno.into();
        std::io::Error::new(kind, errno.to_string())
    }
}
