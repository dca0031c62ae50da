//! Classification of native file-mode bits into portable file types.

use cfg_if::cfg_if;
#[cfg(feature = "enable-serde")]
use serde::{Deserialize, Serialize};

use crate::capability::ModeCapabilities;

/// The type of a file descriptor or file.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub enum Filetype {
    /// The type is unknown or different from any of the other types.
    Unknown,
    /// A block device inode.
    BlockDevice,
    /// A character device inode.
    CharacterDevice,
    /// A directory inode.
    Directory,
    /// A regular file inode.
    RegularFile,
    /// A datagram socket.
    SocketDgram,
    /// A byte-stream socket.
    SocketStream,
    /// A symbolic link inode.
    SymbolicLink,
    /// A FIFO.
    Fifo,
}

cfg_if! {
    if #[cfg(unix)] {
        const S_IFMT: u64 = libc::S_IFMT as u64;
        const S_IFREG: u64 = libc::S_IFREG as u64;
        const S_IFDIR: u64 = libc::S_IFDIR as u64;
        const S_IFCHR: u64 = libc::S_IFCHR as u64;
        const S_IFLNK: u64 = libc::S_IFLNK as u64;
        const S_IFSOCK: u64 = libc::S_IFSOCK as u64;
        const S_IFIFO: u64 = libc::S_IFIFO as u64;
        const S_IFBLK: u64 = libc::S_IFBLK as u64;
    } else {
        // Hosts without <sys/stat.h> report the conventional encoding.
        const S_IFMT: u64 = 0o170000;
        const S_IFREG: u64 = 0o100000;
        const S_IFDIR: u64 = 0o040000;
        const S_IFCHR: u64 = 0o020000;
        const S_IFLNK: u64 = 0o120000;
        const S_IFSOCK: u64 = 0o140000;
        const S_IFIFO: u64 = 0o010000;
        const S_IFBLK: u64 = 0o060000;
    }
}

fn matches(mode: u64, bits: u64) -> bool {
    mode & S_IFMT == bits
}

/// Classifies raw native mode bits into a [`Filetype`].
///
/// Predicates are evaluated in a fixed priority order and the first match
/// wins; mode encodings can overlap on malformed or emulated filesystems,
/// so regular-file and directory checks must come before the device checks.
/// Predicates absent from `caps` are skipped. Never fails; bits matching no
/// supported predicate classify as [`Filetype::Unknown`].
pub fn from_mode(mode: u64, caps: &ModeCapabilities) -> Filetype {
    if matches(mode, S_IFREG) {
        return Filetype::RegularFile;
    }
    if matches(mode, S_IFDIR) {
        return Filetype::Directory;
    }
    if matches(mode, S_IFCHR) {
        return Filetype::CharacterDevice;
    }
    if matches(mode, S_IFLNK) {
        return Filetype::SymbolicLink;
    }
    if caps.socket && matches(mode, S_IFSOCK) {
        // Stream until proven otherwise; the descriptor resolver refines
        // this with the handle-kind hint.
        return Filetype::SocketStream;
    }
    if caps.fifo && matches(mode, S_IFIFO) {
        return Filetype::Fifo;
    }
    if caps.block_device && matches(mode, S_IFBLK) {
        return Filetype::BlockDevice;
    }
    Filetype::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL: ModeCapabilities = ModeCapabilities::all();

    #[test]
    fn classifies_each_format() {
        assert_eq!(from_mode(S_IFREG | 0o644, &ALL), Filetype::RegularFile);
        assert_eq!(from_mode(S_IFDIR | 0o755, &ALL), Filetype::Directory);
        assert_eq!(from_mode(S_IFCHR | 0o620, &ALL), Filetype::CharacterDevice);
        assert_eq!(from_mode(S_IFLNK | 0o777, &ALL), Filetype::SymbolicLink);
        assert_eq!(from_mode(S_IFSOCK, &ALL), Filetype::SocketStream);
        assert_eq!(from_mode(S_IFIFO, &ALL), Filetype::Fifo);
        assert_eq!(from_mode(S_IFBLK, &ALL), Filetype::BlockDevice);
    }

    #[test]
    fn unknown_mode_is_not_an_error() {
        assert_eq!(from_mode(0, &ALL), Filetype::Unknown);
        assert_eq!(from_mode(0o170000, &ALL), Filetype::Unknown);
    }

    #[test]
    fn priority_order_under_overlapping_bits() {
        // S_IFREG | S_IFDIR happens to equal S_IFSOCK in the conventional
        // encoding; the format field is matched whole, so this reads as a
        // socket, while permission bits never perturb classification.
        assert_eq!(from_mode(S_IFREG | 0o7777, &ALL), Filetype::RegularFile);
        assert_eq!(from_mode(S_IFDIR | 0o7777, &ALL), Filetype::Directory);
    }

    #[test]
    fn unsupported_predicates_are_skipped() {
        let caps = ModeCapabilities::none();
        assert_eq!(from_mode(S_IFSOCK, &caps), Filetype::Unknown);
        assert_eq!(from_mode(S_IFIFO, &caps), Filetype::Unknown);
        assert_eq!(from_mode(S_IFBLK, &caps), Filetype::Unknown);
        // Universal predicates still apply.
        assert_eq!(from_mode(S_IFREG, &caps), Filetype::RegularFile);
    }
}
