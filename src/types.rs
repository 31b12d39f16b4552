//! Core types used throughout the project.

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// A language channel of a resource entry.
///
/// The set is closed: one neutral (source) channel and exactly two
/// secondary (target) channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Primary / source-language channel.
    Neutral,
    /// First secondary channel ("de").
    German,
    /// Second secondary channel ("fr").
    French,
}

impl Channel {
    /// All channels, in comparison order.
    pub const ALL: [Self; 3] = [Self::Neutral, Self::German, Self::French];

    /// The file-name suffix identifying this channel, if any.
    #[must_use]
    pub const fn file_suffix(self) -> Option<&'static str> {
        match self {
            Self::Neutral => None,
            Self::German => Some("de"),
            Self::French => Some("fr"),
        }
    }

    /// Infers the channel from a file-name suffix (`None` for the neutral
    /// file without a language suffix).
    #[must_use]
    pub fn from_file_suffix(suffix: Option<&str>) -> Option<Self> {
        match suffix {
            None => Some(Self::Neutral),
            Some("de") => Some(Self::German),
            Some("fr") => Some(Self::French),
            Some(_) => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Neutral => "Neutral",
            Self::German => "German",
            Self::French => "French",
        };
        write!(f, "{name}")
    }
}

/// Identifies one translatable string within a load: the containing
/// resource file (project name + base name) plus the entry key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceKey {
    /// Name of the project the resource file belongs to.
    pub project_name: String,
    /// Base name of the resource file (without language suffix).
    pub file_name: String,
    /// Entry key within the file.
    pub key: String,
}

impl ResourceKey {
    #[must_use]
    pub fn new(
        project_name: impl Into<String>,
        file_name: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self { project_name: project_name.into(), file_name: file_name.into(), key: key.into() }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}:{}", self.project_name, self.file_name, self.key)
    }
}

/// One string value per channel.
///
/// An absent value is stored as the empty string; the distinction between
/// "entry has no snapshot record" and "snapshot value is empty" lives at
/// the entry level (`Option<ChannelValues>`), never inside this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelValues {
    pub neutral: String,
    pub german: String,
    pub french: String,
}

impl ChannelValues {
    #[must_use]
    pub fn new(
        neutral: impl Into<String>,
        german: impl Into<String>,
        french: impl Into<String>,
    ) -> Self {
        Self { neutral: neutral.into(), german: german.into(), french: french.into() }
    }

    /// The value for one channel.
    #[must_use]
    pub fn get(&self, channel: Channel) -> &str {
        match channel {
            Channel::Neutral => &self.neutral,
            Channel::German => &self.german,
            Channel::French => &self.french,
        }
    }

    /// Overwrites the value for one channel.
    pub fn set(&mut self, channel: Channel, value: impl Into<String>) {
        match channel {
            Channel::Neutral => self.neutral = value.into(),
            Channel::German => self.german = value.into(),
            Channel::French => self.french = value.into(),
        }
    }

    /// True when every channel value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neutral.is_empty() && self.german.is_empty() && self.french.is_empty()
    }

    /// True when all three channel values are identical and non-empty.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        !self.neutral.is_empty() && self.neutral == self.german && self.neutral == self.french
    }
}
