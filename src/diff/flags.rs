//! Change-flag definitions for classified entries.

use std::fmt;

use crate::types::Channel;

/// Outcome of comparing one channel's current value against its snapshot
/// value. The three outcomes are mutually exclusive per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelChange {
    /// Snapshot value was empty, current value is not.
    Added,
    /// Both values are non-empty and differ.
    Changed,
    /// Snapshot value was non-empty, current value is empty.
    Deleted,
}

impl ChannelChange {
    /// Compares a current value against a snapshot value.
    ///
    /// Comparison is exact: case-sensitive and whitespace-preserving.
    /// Returns `None` when the channel is unchanged.
    #[must_use]
    pub fn compare(current: &str, snapshot: &str) -> Option<Self> {
        match (current.is_empty(), snapshot.is_empty()) {
            (true, false) => Some(Self::Deleted),
            (false, true) => Some(Self::Added),
            (false, false) if current != snapshot => Some(Self::Changed),
            _ => None,
        }
    }
}

impl fmt::Display for ChannelChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Deleted => "Deleted",
        };
        write!(f, "{name}")
    }
}

/// The combined change flags of one entry: at most one outcome per channel,
/// plus the cross-channel `New` marker.
///
/// When `is_new` is set the per-channel outcomes are never populated — a new
/// entry has no snapshot record to compare against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeFlags {
    pub neutral: Option<ChannelChange>,
    pub german: Option<ChannelChange>,
    pub french: Option<ChannelChange>,
    /// Entry had no snapshot record at all.
    pub is_new: bool,
}

impl ChangeFlags {
    /// Flags for an entry with no detected difference.
    #[must_use]
    pub const fn none() -> Self {
        Self { neutral: None, german: None, french: None, is_new: false }
    }

    /// Flags for an entry with no snapshot record.
    #[must_use]
    pub const fn new_entry() -> Self {
        Self { neutral: None, german: None, french: None, is_new: true }
    }

    /// The outcome recorded for one channel.
    #[must_use]
    pub const fn get(&self, channel: Channel) -> Option<ChannelChange> {
        match channel {
            Channel::Neutral => self.neutral,
            Channel::German => self.german,
            Channel::French => self.french,
        }
    }

    /// Records the outcome for one channel.
    pub const fn set(&mut self, channel: Channel, change: Option<ChannelChange>) {
        match channel {
            Channel::Neutral => self.neutral = change,
            Channel::German => self.german = change,
            Channel::French => self.french = change,
        }
    }

    /// True when one specific outcome is recorded for the channel.
    #[must_use]
    pub fn has(&self, channel: Channel, change: ChannelChange) -> bool {
        self.get(channel) == Some(change)
    }

    /// True when no difference was detected at all.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.neutral.is_none() && self.german.is_none() && self.french.is_none() && !self.is_new
    }
}

impl fmt::Display for ChangeFlags {
    /// Renders the flag names as a readable list, e.g.
    /// `NeutralAdded | GermanChanged`. Used for audit logging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_new {
            return write!(f, "New");
        }
        if self.is_none() {
            return write!(f, "None");
        }

        let mut first = true;
        for channel in Channel::ALL {
            if let Some(change) = self.get(channel) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{channel}{change}")?;
                first = false;
            }
        }
        Ok(())
    }
}
