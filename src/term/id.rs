use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;

/// Compact identifier stored in place of a [`Term`](super::Term).
///
/// The top bit splits the id space in two disjoint halves:
///
/// ```text
///  63   62 .. 48    47 .. 0
/// [ 1 | partition | sequence ]   dynamic, minted by the allocator
/// [ 0 |       reserved       ]   vocabulary ids and the default context
/// ```
///
/// The partition of a dynamic id is recoverable from the id alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermId(u64);

const DYNAMIC_FLAG: u64 = 1 << 63;
const PARTITION_SHIFT: u32 = 48;

impl TermId {
    /// Context id of statements in the default graph.
    pub const DEFAULT_CONTEXT: TermId = TermId(0);
    /// Vocabulary ranges live below this bound.
    pub const RESERVED_LIMIT: u64 = 1 << 32;
    pub const MAX_PARTITIONS: u32 = 1 << 15;
    pub const MAX_SEQUENCE: u64 = (1 << PARTITION_SHIFT) - 1;

    pub const fn from_raw(raw: u64) -> TermId {
        TermId(raw)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Id in the reserved half. `None` if `raw` has the dynamic bit set.
    pub const fn reserved(raw: u64) -> Option<TermId> {
        if raw & DYNAMIC_FLAG == 0 {
            Some(TermId(raw))
        } else {
            None
        }
    }

    pub fn dynamic(partition: u16, sequence: u64) -> Option<TermId> {
        if u32::from(partition) >= Self::MAX_PARTITIONS || sequence > Self::MAX_SEQUENCE {
            return None;
        }
        Some(TermId(
            DYNAMIC_FLAG | (u64::from(partition) << PARTITION_SHIFT) | sequence,
        ))
    }

    pub const fn is_dynamic(self) -> bool {
        self.0 & DYNAMIC_FLAG != 0
    }

    pub fn partition(self) -> Option<u16> {
        self.is_dynamic()
            .then(|| ((self.0 & !DYNAMIC_FLAG) >> PARTITION_SHIFT) as u16)
    }

    pub fn sequence(self) -> Option<u64> {
        self.is_dynamic().then_some(self.0 & Self::MAX_SEQUENCE)
    }

    pub(crate) fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    pub(crate) fn from_be_slice(bytes: &[u8]) -> Option<TermId> {
        let bytes: [u8; 8] = bytes.try_into().ok()?;
        Some(TermId(u64::from_be_bytes(bytes)))
    }
}

impl Display for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.partition(), self.sequence()) {
            (Some(partition), Some(sequence)) => write!(f, "{}[{partition}:{sequence}]", self.0),
            _ => write!(f, "{}", self.0),
        }
    }
}

/// Accepts decimal or `0x`-prefixed hexadecimal.
impl FromStr for TermId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let raw = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16)?,
            None => s.replace('_', "").parse()?,
        };
        Ok(TermId(raw))
    }
}

impl From<TermId> for u64 {
    fn from(value: TermId) -> Self {
        value.0
    }
}
