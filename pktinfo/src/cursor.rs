/// Offsets of the layers a classifier has already identified.
///
/// `mac_offset` and `net_offset` are produced upstream and only read here.
/// `trans_offset` is written when the extension header walk resolves a
/// transport header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HdrCursor {
    /// Start of the link layer header.
    pub mac_offset: usize,
    /// Start of the network layer header.
    pub net_offset: usize,
    /// Start of the transport layer header, once known.
    pub trans_offset: Option<usize>,
}

impl HdrCursor {
    /// A cursor for a frame whose network header follows the link header.
    #[inline]
    pub fn new(mac_offset: usize, net_offset: usize) -> Self {
        Self {
            mac_offset,
            net_offset,
            trans_offset: None,
        }
    }
}

/// The per-cpu state block handed to every invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PktInfo {
    cur: HdrCursor,
}

impl PktInfo {
    /// Wrap a cursor.
    #[inline]
    pub fn new(cur: HdrCursor) -> Self {
        Self { cur }
    }

    /// The cursor saved by the classifier.
    #[inline]
    pub fn cur(&self) -> &HdrCursor {
        &self.cur
    }

    /// Mutable access for the stage that fills the cursor.
    #[inline]
    pub fn cur_mut(&mut self) -> &mut HdrCursor {
        &mut self.cur
    }
}
