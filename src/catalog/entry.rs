//! Resource entry definitions.

use crate::types::{
    ChannelValues,
    ResourceKey,
};

/// One translatable unit of the catalog.
///
/// Constructed once per load by the catalog host and read-only afterwards:
/// the diff core never mutates an entry, it works on its own records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub key: ResourceKey,

    /// Current value per channel. Absent values are normalized to the
    /// empty string at load time.
    pub values: ChannelValues,

    /// Values as of the baseline snapshot. `None` means the entry did not
    /// exist in the snapshot at all, which is distinct from
    /// `Some` with empty strings.
    pub snapshot: Option<ChannelValues>,

    /// Free-text annotation per channel. Carried through to reporting,
    /// never compared.
    pub comments: ChannelValues,

    /// Entry is excluded from the translation workflow entirely.
    pub is_invariant: bool,
}

impl ResourceEntry {
    /// Creates an entry with no snapshot record, no comments and no
    /// invariant marker.
    #[must_use]
    pub fn new(key: ResourceKey, values: ChannelValues) -> Self {
        Self {
            key,
            values,
            snapshot: None,
            comments: ChannelValues::default(),
            is_invariant: false,
        }
    }
}
