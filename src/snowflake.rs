//! Snowflake ID decoding
//!
//! Layout of a 64-bit snowflake, high bits first:
//! - 42 bits timestamp (ms since [`SNOWFLAKE_EPOCH`])
//! - 5 bits worker id
//! - 5 bits process id
//! - 12 bits increment

/// Snowflake epoch: Thursday, January 1, 2015 00:00:00 UTC
pub const SNOWFLAKE_EPOCH: i64 = 1_420_070_400_000;

/// Number of low bits below the timestamp
pub const TIMESTAMP_SHIFT: u32 = 22;

const WORKER_SHIFT: u32 = 17;
const PROCESS_SHIFT: u32 = 12;
const WORKER_MASK: i64 = 0x1F;
const PROCESS_MASK: i64 = 0x1F;
const INCREMENT_MASK: i64 = 0xFFF;

/// Decode the epoch-millisecond instant embedded in a snowflake.
///
/// `None` decodes as snowflake `0`, which yields [`SNOWFLAKE_EPOCH`].
#[inline]
pub fn parse_snowflake(id: impl Into<Option<i64>>) -> i64 {
    SnowflakeExtractor::default().timestamp(id.into().unwrap_or(0))
}

/// Components of a snowflake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowflakeParts {
    /// Unix epoch milliseconds
    pub timestamp: i64,
    pub worker_id: u8,
    pub process_id: u8,
    pub increment: u16,
}

/// Snowflake component extractor
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SnowflakeExtractor {
    epoch: i64,
}

impl SnowflakeExtractor {
    /// Create an extractor for snowflakes counted from a custom epoch
    pub const fn with_epoch(epoch: i64) -> Self {
        Self { epoch }
    }

    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }

    /// Extract the Unix epoch milliseconds from a snowflake
    #[inline(always)]
    pub const fn timestamp(&self, id: i64) -> i64 {
        (id >> TIMESTAMP_SHIFT) + self.epoch
    }

    #[inline(always)]
    pub const fn worker_id(&self, id: i64) -> u8 {
        ((id >> WORKER_SHIFT) & WORKER_MASK) as u8
    }

    #[inline(always)]
    pub const fn process_id(&self, id: i64) -> u8 {
        ((id >> PROCESS_SHIFT) & PROCESS_MASK) as u8
    }

    #[inline(always)]
    pub const fn increment(&self, id: i64) -> u16 {
        (id & INCREMENT_MASK) as u16
    }

    /// Decompose a snowflake into all of its components in one pass
    #[inline]
    pub const fn decompose(&self, id: i64) -> SnowflakeParts {
        SnowflakeParts {
            timestamp: self.timestamp(id),
            worker_id: self.worker_id(id),
            process_id: self.process_id(id),
            increment: self.increment(id),
        }
    }

    /// Lowest snowflake whose timestamp is `millis`.
    ///
    /// Useful as a pagination boundary. Returns `None` when the instant
    /// precedes the epoch or does not fit a positive snowflake.
    pub fn lowest_for(&self, millis: i64) -> Option<i64> {
        let since_epoch = millis.checked_sub(self.epoch)?;
        if !(0..(1i64 << 41)).contains(&since_epoch) {
            return None;
        }
        Some(since_epoch << TIMESTAMP_SHIFT)
    }
}

impl Default for SnowflakeExtractor {
    fn default() -> Self {
        Self::with_epoch(SNOWFLAKE_EPOCH)
    }
}
