//! Drives the descriptor resolver through a scripted host I/O layer.

use pretty_assertions::assert_eq;
use wasi_host_mapping::{
    descriptor::resolve_filetype, Errno, Fd, Filetype, HandleKind, HostIo, HostStat, HostTimespec,
    ModeCapabilities,
};

const TIMESPEC_ZERO: HostTimespec = HostTimespec { secs: 0, nanos: 0 };

fn stat_with_mode(mode: u64) -> HostStat {
    HostStat {
        dev: 1,
        ino: 42,
        mode,
        nlink: 1,
        size: 0,
        atim: TIMESPEC_ZERO,
        mtim: TIMESPEC_ZERO,
        ctim: TIMESPEC_ZERO,
    }
}

struct ScriptedIo {
    fstat: Result<HostStat, i32>,
    kind: HandleKind,
}

impl HostIo for ScriptedIo {
    fn fstat(&self, _fd: Fd) -> Result<HostStat, i32> {
        self.fstat
    }

    fn handle_kind(&self, _fd: Fd) -> HandleKind {
        self.kind
    }
}

#[test]
fn regular_file_resolves_from_stat_alone() {
    let io = ScriptedIo {
        fstat: Ok(stat_with_mode(libc::S_IFREG as u64 | 0o644)),
        kind: HandleKind::Other,
    };
    assert_eq!(
        resolve_filetype(&io, 3, &ModeCapabilities::all()),
        Ok(Filetype::RegularFile)
    );
}

#[test]
fn udp_hint_overrides_stream_socket() {
    let io = ScriptedIo {
        fstat: Ok(stat_with_mode(libc::S_IFSOCK as u64)),
        kind: HandleKind::UdpSocket,
    };
    assert_eq!(
        resolve_filetype(&io, 4, &ModeCapabilities::all()),
        Ok(Filetype::SocketDgram)
    );
}

#[test]
fn stream_socket_stays_a_stream_without_the_hint() {
    let io = ScriptedIo {
        fstat: Ok(stat_with_mode(libc::S_IFSOCK as u64)),
        kind: HandleKind::Other,
    };
    assert_eq!(
        resolve_filetype(&io, 4, &ModeCapabilities::all()),
        Ok(Filetype::SocketStream)
    );
}

#[test]
fn unstatable_terminal_recovers_as_character_device() {
    let io = ScriptedIo {
        fstat: Err(-libc::EBADF),
        kind: HandleKind::Tty,
    };
    assert_eq!(
        resolve_filetype(&io, 0, &ModeCapabilities::all()),
        Ok(Filetype::CharacterDevice)
    );
}

#[test]
fn other_stat_failures_translate_to_portable_errors() {
    let io = ScriptedIo {
        fstat: Err(-libc::EBADF),
        kind: HandleKind::Other,
    };
    assert_eq!(
        resolve_filetype(&io, 9, &ModeCapabilities::all()),
        Err(Errno::Badf)
    );
}

#[test]
fn socket_mode_without_socket_capability_is_unknown() {
    let caps = ModeCapabilities {
        socket: false,
        ..ModeCapabilities::all()
    };
    let io = ScriptedIo {
        fstat: Ok(stat_with_mode(libc::S_IFSOCK as u64)),
        kind: HandleKind::UdpSocket,
    };
    assert_eq!(resolve_filetype(&io, 5, &caps), Ok(Filetype::Unknown));
}
