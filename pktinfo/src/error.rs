use core::fmt;

/// The requested byte range is not fully inside the packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// `[offset, offset + len)` is empty or runs past `window_len`.
    OutOfBounds {
        /// Requested start.
        offset: usize,
        /// Requested length.
        len: usize,
        /// Validated packet length at the time of the access.
        window_len: usize,
    },
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::OutOfBounds {
                offset,
                len,
                window_len,
            } => write!(
                f,
                "range {}+{} out of bounds for a {} byte packet",
                offset, len, window_len
            ),
        }
    }
}

/// Walk failures that leave the packet untrustworthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    /// A header in the chain does not fit in the packet.
    Truncated {
        /// Where the header starts.
        offset: usize,
        /// How many bytes it needs.
        needed: usize,
    },
    /// The chain is longer than [`MAX_EXT_HEADERS`](crate::chain::MAX_EXT_HEADERS).
    TooManyHeaders {
        /// Extension headers skipped before giving up.
        hops: usize,
    },
}

impl From<AccessError> for ChainError {
    #[inline]
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::OutOfBounds { offset, len, .. } => ChainError::Truncated {
                offset,
                needed: len,
            },
        }
    }
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::Truncated { offset, needed } => {
                write!(f, "truncated header chain: {} bytes at {}", needed, offset)
            }
            ChainError::TooManyHeaders { hops } => {
                write!(f, "extension header chain exceeds {} headers", hops)
            }
        }
    }
}

/// Why an invocation dropped the packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The per-cpu state block was not available.
    MissingState,
    /// The link layer header could not be read.
    LinkHeader(AccessError),
    /// The network layer header could not be read.
    NetworkHeader(AccessError),
    /// The extension header walk failed.
    TransportChain(ChainError),
    /// The resolved transport header could not be read.
    TransportHeader(AccessError),
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::MissingState => f.write_str("per-cpu state unavailable"),
            AbortReason::LinkHeader(e) => write!(f, "link layer: {}", e),
            AbortReason::NetworkHeader(e) => write!(f, "network layer: {}", e),
            AbortReason::TransportChain(e) => write!(f, "transport layer: {}", e),
            AbortReason::TransportHeader(e) => write!(f, "transport header: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AccessError {}

#[cfg(feature = "std")]
impl std::error::Error for ChainError {}

#[cfg(feature = "std")]
impl std::error::Error for AbortReason {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AbortReason::MissingState => None,
            AbortReason::LinkHeader(e)
            | AbortReason::NetworkHeader(e)
            | AbortReason::TransportHeader(e) => Some(e),
            AbortReason::TransportChain(e) => Some(e),
        }
    }
}
