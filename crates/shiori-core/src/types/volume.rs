use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Volume and chapter-within-volume pair read from a single chapter title,
/// e.g. "Vol.2 Ch.3" or "Том 2 Глава 3".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VolumeChapterInfo {
    /// Volume number as printed in the title.
    pub volume_number: u32,
    /// Chapter number, restarting at each volume.
    pub chapter_number: u32,
}

impl VolumeChapterInfo {
    #[must_use]
    pub fn new(volume_number: u32, chapter_number: u32) -> Self {
        Self {
            volume_number,
            chapter_number,
        }
    }
}

impl fmt::Display for VolumeChapterInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}c{}", self.volume_number, self.chapter_number)
    }
}

/// Global chapter number at which each observed volume starts.
///
/// Built from the complete chapter list of one manga; a volume's offset is
/// one plus the sum of the highest chapter numbers of all lower volumes.
/// Volumes never seen in the list are absent and count as starting at 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VolumeOffsetTable {
    starts: BTreeMap<u32, u32>,
}

impl VolumeOffsetTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting chapter of `volume`, if it was observed.
    #[must_use]
    pub fn get(&self, volume: u32) -> Option<u32> {
        self.starts.get(&volume).copied()
    }

    /// Starting chapter of `volume`, falling back to 1 for unseen volumes.
    #[must_use]
    pub fn start_of(&self, volume: u32) -> u32 {
        self.get(volume).unwrap_or(1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Iterates `(volume, start)` pairs in ascending volume order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.starts.iter().map(|(v, s)| (*v, *s))
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<u32, u32> {
        self.starts
    }
}

impl From<BTreeMap<u32, u32>> for VolumeOffsetTable {
    fn from(starts: BTreeMap<u32, u32>) -> Self {
        Self { starts }
    }
}

impl From<VolumeOffsetTable> for BTreeMap<u32, u32> {
    fn from(table: VolumeOffsetTable) -> Self {
        table.starts
    }
}

impl FromIterator<(u32, u32)> for VolumeOffsetTable {
    fn from_iter<I: IntoIterator<Item = (u32, u32)>>(iter: I) -> Self {
        Self {
            starts: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for VolumeOffsetTable {
    type Item = (u32, u32);
    type IntoIter = btree_map::IntoIter<u32, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.starts.into_iter()
    }
}
