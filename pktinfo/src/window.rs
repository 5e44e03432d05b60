use bytes::{Bytes, BytesMut};

use crate::AccessError;

/// Anything that can lend out the raw bytes of one packet.
///
/// The returned slice is the packet as the host sees it right now; a
/// [`PacketWindow`] built from it re-checks every access against its length.
pub trait ByteWindow {
    /// The packet bytes.
    fn window(&self) -> &[u8];
}

impl ByteWindow for [u8] {
    #[inline]
    fn window(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> ByteWindow for [u8; N] {
    #[inline]
    fn window(&self) -> &[u8] {
        &self[..]
    }
}

impl ByteWindow for Bytes {
    #[inline]
    fn window(&self) -> &[u8] {
        self.as_ref()
    }
}

impl ByteWindow for BytesMut {
    #[inline]
    fn window(&self) -> &[u8] {
        self.as_ref()
    }
}

#[cfg(feature = "std")]
impl ByteWindow for std::vec::Vec<u8> {
    #[inline]
    fn window(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<T: ByteWindow + ?Sized> ByteWindow for &T {
    #[inline]
    fn window(&self) -> &[u8] {
        (**self).window()
    }
}

/// A borrowed packet together with its validated length.
///
/// The validated length may be shorter than the backing slice, e.g. when the
/// host hands over a fixed-size frame buffer whose tail is not packet data.
#[derive(Debug, Clone, Copy)]
pub struct PacketWindow<'a> {
    data: &'a [u8],
    len: usize,
}

impl<'a> PacketWindow<'a> {
    /// Cover the whole slice.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            len: data.len(),
        }
    }

    /// Cover the first `len` bytes of `data`.
    ///
    /// Returns `None` if `len` is larger than the slice.
    #[inline]
    pub fn with_len(data: &'a [u8], len: usize) -> Option<Self> {
        if len <= data.len() {
            Some(Self { data, len })
        } else {
            None
        }
    }

    /// Borrow the bytes of any [`ByteWindow`].
    #[inline]
    pub fn from_window<W: ByteWindow + ?Sized>(w: &'a W) -> Self {
        Self::new(w.window())
    }

    /// The validated packet length.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the packet holds no bytes at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// See [`access`].
    #[inline]
    pub fn access(&self, offset: usize, len: usize) -> Result<HeaderView<'a>, AccessError> {
        access(self, offset, len)
    }
}

/// Bytes `[offset, offset + len)` of a packet, already checked to be present.
#[derive(Debug, Clone, Copy)]
pub struct HeaderView<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> HeaderView<'a> {
    /// The covered bytes.
    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Start of the view inside the packet.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes covered, never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`, a view covers at least one byte.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// First packet offset past the view.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.bytes.len()
    }
}

impl AsRef<[u8]> for HeaderView<'_> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

/// The header accessor.
///
/// Returns a view of exactly `[offset, offset + len)` when `len > 0` and the
/// whole range lies inside the window. `offset` and `len` may come straight
/// from packet fields: the end of the range is computed with a checked add,
/// so a wrapping sum is rejected instead of passing the comparison.
#[inline]
pub fn access<'a>(
    window: &PacketWindow<'a>,
    offset: usize,
    len: usize,
) -> Result<HeaderView<'a>, AccessError> {
    let out_of_bounds = AccessError::OutOfBounds {
        offset,
        len,
        window_len: window.len,
    };
    if len == 0 {
        return Err(out_of_bounds);
    }
    match offset.checked_add(len) {
        Some(end) if end <= window.len => {
            let bytes = window.data.get(offset..end).ok_or(out_of_bounds)?;
            Ok(HeaderView { bytes, offset })
        }
        _ => Err(out_of_bounds),
    }
}
