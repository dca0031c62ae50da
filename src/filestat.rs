//! Aggregation of native stat structures into portable file status records.

#[cfg(feature = "enable-serde")]
use serde::{Deserialize, Serialize};

use crate::capability::ModeCapabilities;
use crate::filetype::{self, Filetype};
use crate::timestamp::{self, HostTimespec, Timestamp};

/// A native stat structure as handed over by the host I/O abstraction.
///
/// Field widths follow the widest platform representation; narrower hosts
/// zero-extend.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub struct HostStat {
    pub dev: u64,
    pub ino: u64,
    pub mode: u64,
    pub nlink: u64,
    pub size: u64,
    pub atim: HostTimespec,
    pub mtim: HostTimespec,
    pub ctim: HostTimespec,
}

/// File attributes in the portable representation.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub struct Filestat {
    /// Device ID of the device containing the file.
    pub st_dev: u64,
    /// File serial number.
    pub st_ino: u64,
    /// File type.
    pub st_filetype: Filetype,
    /// Number of hard links to the file.
    pub st_nlink: u64,
    /// For regular files, the file size in bytes.
    pub st_size: u64,
    /// Last data access timestamp.
    pub st_atim: Timestamp,
    /// Last data modification timestamp.
    pub st_mtim: Timestamp,
    /// Last file status change timestamp.
    pub st_ctim: Timestamp,
}

/// Builds a full [`Filestat`] from a native stat structure.
///
/// Identity fields are copied verbatim; the file type and the three
/// timestamps are derived. Pure: identical input yields an identical record.
pub fn from_host_stat(stat: &HostStat, caps: &ModeCapabilities) -> Filestat {
    Filestat {
        st_dev: stat.dev,
        st_ino: stat.ino,
        st_filetype: filetype::from_mode(stat.mode, caps),
        st_nlink: stat.nlink,
        st_size: stat.size,
        st_atim: timestamp::from_timespec(stat.atim),
        st_mtim: timestamp::from_timespec(stat.mtim),
        st_ctim: timestamp::from_timespec(stat.ctim),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_stat() -> HostStat {
        HostStat {
            dev: 0x801,
            ino: 1_048_577,
            mode: 0o100644,
            nlink: 2,
            size: 4096,
            atim: HostTimespec {
                secs: 1_700_000_000,
                nanos: 1,
            },
            mtim: HostTimespec {
                secs: 1_700_000_100,
                nanos: 2,
            },
            ctim: HostTimespec {
                secs: 1_700_000_200,
                nanos: 3,
            },
        }
    }

    #[test]
    fn copies_identity_fields_and_derives_the_rest() {
        let caps = ModeCapabilities::all();
        let fs = from_host_stat(&sample_stat(), &caps);
        assert_eq!(fs.st_dev, 0x801);
        assert_eq!(fs.st_ino, 1_048_577);
        assert_eq!(fs.st_nlink, 2);
        assert_eq!(fs.st_size, 4096);
        assert_eq!(fs.st_filetype, Filetype::RegularFile);
        assert_eq!(fs.st_atim, 1_700_000_000_000_000_001);
        assert_eq!(fs.st_mtim, 1_700_000_100_000_000_002);
        assert_eq!(fs.st_ctim, 1_700_000_200_000_000_003);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let caps = ModeCapabilities::all();
        let stat = sample_stat();
        assert_eq!(from_host_stat(&stat, &caps), from_host_stat(&stat, &caps));
    }
}
