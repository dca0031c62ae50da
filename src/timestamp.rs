//! Normalization of native timespecs into nanosecond timestamps.

#[cfg(feature = "enable-serde")]
use serde::{Deserialize, Serialize};

/// Timestamp in nanoseconds.
pub type Timestamp = u64;

pub const NANOS_PER_SEC: u64 = 1_000_000_000;

/// A native `(seconds, nanoseconds)` pair as reported by the host stat call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub struct HostTimespec {
    pub secs: i64,
    pub nanos: u32,
}

#[cfg(unix)]
impl From<libc::timespec> for HostTimespec {
    fn from(ts: libc::timespec) -> Self {
        Self {
            secs: ts.tv_sec as i64,
            nanos: ts.tv_nsec as u32,
        }
    }
}

/// Converts a native timespec into a single nanosecond counter:
/// `secs * NANOS_PER_SEC + nanos`, exact for every timestamp a real
/// filesystem produces.
///
/// Second values too large for the nanosecond range saturate at
/// [`u64::MAX`]; so do pre-epoch (negative) second values, which have no
/// representation in an unsigned counter. Saturation keeps the conversion
/// deterministic and monotone instead of wrapping into small timestamps.
pub fn from_timespec(ts: HostTimespec) -> Timestamp {
    (ts.secs as u64)
        .saturating_mul(NANOS_PER_SEC)
        .saturating_add(ts.nanos as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn linear_in_seconds_and_nanos() {
        assert_eq!(from_timespec(HostTimespec { secs: 0, nanos: 0 }), 0);
        assert_eq!(from_timespec(HostTimespec { secs: 0, nanos: 1 }), 1);
        assert_eq!(
            from_timespec(HostTimespec {
                secs: 1,
                nanos: 999_999_999
            }),
            1_999_999_999
        );
        assert_eq!(
            from_timespec(HostTimespec {
                secs: 1_700_000_000,
                nanos: 123_456_789
            }),
            1_700_000_000 * NANOS_PER_SEC + 123_456_789
        );
    }

    #[test]
    fn extreme_seconds_saturate() {
        assert_eq!(
            from_timespec(HostTimespec {
                secs: i64::MAX,
                nanos: 0
            }),
            u64::MAX
        );
        assert_eq!(
            from_timespec(HostTimespec {
                secs: -1,
                nanos: 0
            }),
            u64::MAX
        );
    }
}
