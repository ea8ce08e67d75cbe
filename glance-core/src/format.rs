//! Number formatting into fixed-size buffers
//!
//! Renders integers and fixed-point decimals as ASCII without allocation.
//! Every function NUL-terminates within the buffer it is given and returns
//! the number of characters written, terminator excluded.

/// Largest supported decimal precision
pub const MAX_PRECISION: u8 = 6;

/// Decimal digits in `u32::MAX`
const MAX_DIGITS: usize = 10;

/// Scale factors indexed by precision
const POWERS_OF_TEN: [u32; MAX_PRECISION as usize + 1] =
    [1, 10, 100, 1_000, 10_000, 100_000, 1_000_000];

/// Render `value` in decimal, left-padded with zeros to `min_width`
///
/// An empty buffer is left untouched and 0 is returned. When the buffer is
/// too short, the leading digits are dropped and the least significant
/// ones kept: `12345` in a 3-byte buffer becomes `"45"`.
pub fn format_unsigned(value: u32, buf: &mut [u8], min_width: usize) -> usize {
    let capacity = buf.len();
    if capacity == 0 {
        return 0;
    }

    // Least significant digit first
    let mut digits = [0u8; MAX_DIGITS];
    let mut count = 0;
    let mut rest = value;
    loop {
        digits[count] = b'0' + (rest % 10) as u8;
        count += 1;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    let width = count.max(min_width);
    let written = width.min(capacity - 1);

    for (i, slot) in buf[..written].iter_mut().enumerate() {
        // Place value of this column, counted from the right
        let place = written - 1 - i;
        *slot = if place < count { digits[place] } else { b'0' };
    }
    buf[written] = 0;

    written
}

/// Render `value` with `precision` fractional digits
///
/// Precision above [`MAX_PRECISION`] is clamped. Rounds half away from
/// zero: the magnitude is scaled by `10^precision`, offset by one half and
/// truncated.
/// The fractional part is only written when it fits completely, otherwise
/// the output stops after the integral part. Magnitudes beyond `u32::MAX`
/// saturate and NaN renders as `0`.
pub fn format_decimal(value: f64, precision: u8, buf: &mut [u8]) -> usize {
    let capacity = buf.len();
    if capacity == 0 {
        return 0;
    }

    let precision = precision.min(MAX_PRECISION);
    let scale = POWERS_OF_TEN[precision as usize];

    let mut pos = 0;
    let mut magnitude = value;
    if value < 0.0 {
        magnitude = -value;
        if capacity > 1 {
            buf[0] = b'-';
            pos = 1;
        }
    }

    // Scale before rounding so exact halves stay exact; float to int casts
    // saturate and NaN becomes 0
    let scale = scale as u64;
    let scaled = (magnitude * scale as f64 + 0.5) as u64;
    let (integral, fraction) = match u32::try_from(scaled / scale) {
        Ok(integral) => (integral, (scaled % scale) as u32),
        Err(_) => (u32::MAX, (scale - 1) as u32),
    };

    pos += format_unsigned(integral, &mut buf[pos..], 0);

    // Room for '.', every fractional digit and the terminator
    if precision > 0 && pos + 1 + (precision as usize) < capacity {
        buf[pos] = b'.';
        pos += 1;
        pos += format_unsigned(fraction, &mut buf[pos..], precision as usize);
    }

    pos
}

/// Formatted value stored on the stack
///
/// Holds `N` bytes including the terminator, so at most `N - 1`
/// characters of text.
#[derive(Clone, Copy)]
pub struct TextBuf<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> Default for TextBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TextBuf<N> {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    /// Format an unsigned integer
    pub fn unsigned(value: u32, min_width: usize) -> Self {
        let mut buf = Self::new();
        buf.len = format_unsigned(value, &mut buf.bytes, min_width);
        buf
    }

    /// Format a decimal value
    pub fn decimal(value: f64, precision: u8) -> Self {
        let mut buf = Self::new();
        buf.len = format_decimal(value, precision, &mut buf.bytes);
        buf
    }

    /// Copy literal text, truncated to fit
    pub fn text(text: &str) -> Self {
        let mut buf = Self::new();
        let max = N.saturating_sub(1);
        let mut len = text.len().min(max);
        while !text.is_char_boundary(len) {
            len -= 1;
        }
        buf.bytes[..len].copy_from_slice(&text.as_bytes()[..len]);
        buf.len = len;
        buf
    }

    /// Formatted text
    pub fn as_str(&self) -> &str {
        // Only ASCII digits, '-', '.' or a char-boundary-aligned copy
        core::str::from_utf8(&self.bytes[..self.len]).unwrap_or("")
    }

    /// Number of characters written
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if nothing was written
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<const N: usize> core::fmt::Debug for TextBuf<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("TextBuf").field(&self.as_str()).finish()
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for TextBuf<N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.as_str());
    }
}
