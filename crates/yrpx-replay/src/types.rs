//! Result types handed to the embedding host.

/// Outcome of [`ReplayExtractor::get_replay_data`](crate::ReplayExtractor::get_replay_data).
///
/// `Empty` covers both "nothing was ever decompressed" and "everything has
/// been read". `Bytes` owns its copy outright; nothing in the extractor
/// aliases it.
///
/// # Examples
///
/// ```
/// use yrpx_replay::ReplayData;
///
/// let data = ReplayData::Bytes(vec![0x03, 0x04]);
/// assert_eq!(data.len(), 2);
/// assert_eq!(data.into_option(), Some(vec![0x03, 0x04]));
///
/// assert!(ReplayData::Empty.is_empty());
/// assert_eq!(ReplayData::Empty.into_option(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReplayData {
    /// No unread data is available.
    #[default]
    Empty,
    /// A caller-owned copy of the unread bytes. Never empty.
    Bytes(Vec<u8>),
}

impl ReplayData {
    /// True for [`ReplayData::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Number of bytes carried (0 for `Empty`).
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Bytes(b) => b.len(),
        }
    }

    /// Borrow the bytes, if any.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Empty => None,
            Self::Bytes(b) => Some(b.as_slice()),
        }
    }

    /// Convert into the `Option` shape most host adapters want
    /// (`None` maps to the host's null).
    pub fn into_option(self) -> Option<Vec<u8>> {
        match self {
            Self::Empty => None,
            Self::Bytes(b) => Some(b),
        }
    }
}

impl From<ReplayData> for Option<Vec<u8>> {
    fn from(data: ReplayData) -> Self {
        data.into_option()
    }
}

/// Where the extractor's stream currently stands.
///
/// Finer-grained than [`ReplayData`]: separates a stream that never
/// started from one that has been read to the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamState {
    /// No buffer has been installed.
    NotStarted,
    /// A buffer is installed and has unread bytes.
    Active {
        /// Bytes between the cursor and the end of the buffer.
        remaining: usize,
    },
    /// A buffer is installed and its cursor is at the end.
    Exhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_bytes() {
        let data = ReplayData::default();
        assert!(data.is_empty());
        assert_eq!(data.len(), 0);
        assert!(data.as_bytes().is_none());
    }

    #[test]
    fn bytes_converts_to_some() {
        let data = ReplayData::Bytes(vec![1, 2, 3]);
        assert!(!data.is_empty());
        assert_eq!(data.as_bytes(), Some(&[1u8, 2, 3][..]));
        let opt: Option<Vec<u8>> = data.into();
        assert_eq!(opt, Some(vec![1, 2, 3]));
    }
}
