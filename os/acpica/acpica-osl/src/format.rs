//! `printf`-style rendering of ACPICA's diagnostic output.
//!
//! ACPICA formats its messages with C format strings. [`write_c_format`]
//! renders such a string into any [`fmt::Write`], drawing arguments from an
//! [`ArgSource`]. [`VaArgs`] is the source for a C `va_list`; any iterator of
//! [`Arg`] is one as well.
//!
//! Supported: flags `-+ #0`, width and precision (digits or `*`), length
//! modifiers `hh h l ll j z t L`, and conversions `d i u o x X c s p %`.
//! Anything else, floating point included, is echoed verbatim without
//! consuming an argument.
//!
//! ```
//! use acpica_osl::format::{Arg, write_c_format};
//!
//! let mut out = String::new();
//! let mut args = [Arg::Int(7), Arg::Int(0x2A)].into_iter();
//! write_c_format(&mut out, b"GPE %02u: %#06x", &mut args).unwrap();
//! assert_eq!(out, "GPE 07: 0x002a");
//! ```

use acpica_sys::{LONG_BITS, va_list};
use core::ffi::{CStr, c_char, c_void};
use core::fmt::{self, Write};

/// Supplies the arguments a format string consumes, in order.
///
/// Integer arguments narrower than `int` arrive promoted to `int`, as C
/// passes them.
pub trait ArgSource {
    /// Next argument of a 32-bit integer type.
    fn next_i32(&mut self) -> i32;
    /// Next argument of a 64-bit integer type.
    fn next_i64(&mut self) -> i64;
    /// Next pointer argument.
    fn next_ptr(&mut self) -> *const c_void;
}

/// A C `va_list` as an argument source.
pub struct VaArgs<'a> {
    list: va_list<'a>,
}

impl<'a> VaArgs<'a> {
    /// # Safety
    /// `list` must hold the arguments of the format string it is rendered
    /// with, with their C types.
    #[must_use]
    pub const unsafe fn new(list: va_list<'a>) -> Self {
        Self { list }
    }
}

impl ArgSource for VaArgs<'_> {
    fn next_i32(&mut self) -> i32 {
        // SAFETY: the format string describes the list (see `new`).
        unsafe { self.list.get::<i32>() }
    }

    fn next_i64(&mut self) -> i64 {
        // SAFETY: as above.
        unsafe { self.list.get::<i64>() }
    }

    fn next_ptr(&mut self) -> *const c_void {
        // SAFETY: as above.
        unsafe { self.list.get::<*const c_void>() }
    }
}

/// A typed argument, for rendering without a `va_list`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arg {
    Int(i32),
    Long(i64),
    Ptr(*const c_void),
}

/// Iterates arguments in order. Missing or mistyped arguments read as zero.
impl<I: Iterator<Item = Arg>> ArgSource for I {
    #[allow(clippy::cast_possible_truncation)]
    fn next_i32(&mut self) -> i32 {
        match self.next() {
            Some(Arg::Int(value)) => value,
            Some(Arg::Long(value)) => value as i32,
            _ => 0,
        }
    }

    fn next_i64(&mut self) -> i64 {
        match self.next() {
            Some(Arg::Int(value)) => i64::from(value),
            Some(Arg::Long(value)) => value,
            _ => 0,
        }
    }

    fn next_ptr(&mut self) -> *const c_void {
        match self.next() {
            Some(Arg::Ptr(value)) => value,
            _ => core::ptr::null(),
        }
    }
}

/// Renders the C format string `format` into `out`.
///
/// `format` excludes the terminating NUL. Literal text and `%s` strings that
/// are not valid UTF-8 are rendered lossily.
///
/// # Errors
/// Only errors of `out` are returned.
pub fn write_c_format<W: Write, A: ArgSource + ?Sized>(out: &mut W, format: &[u8], args: &mut A) -> fmt::Result {
    let mut rest = format;

    while !rest.is_empty() {
        let literal_len = rest.iter().position(|&b| b == b'%').unwrap_or(rest.len());
        let (literal, tail) = rest.split_at(literal_len);
        write_lossy(out, literal)?;
        rest = tail;

        if rest.is_empty() {
            break;
        }

        let (spec, consumed) = Spec::parse(&rest[1..], args);
        let directive = &rest[..=consumed];
        rest = &rest[consumed + 1..];

        match spec {
            Some(spec) => spec.render(out, args)?,
            None => write_lossy(out, directive)?,
        }
    }

    Ok(())
}

fn write_lossy<W: Write>(out: &mut W, bytes: &[u8]) -> fmt::Result {
    for chunk in bytes.utf8_chunks() {
        out.write_str(chunk.valid())?;
        if !chunk.invalid().is_empty() {
            out.write_char(char::REPLACEMENT_CHARACTER)?;
        }
    }
    Ok(())
}

fn lossy_len(bytes: &[u8]) -> usize {
    bytes
        .utf8_chunks()
        .map(|chunk| chunk.valid().chars().count() + usize::from(!chunk.invalid().is_empty()))
        .sum()
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Length {
    Default,
    Char,
    Short,
    Long,
    LongLong,
    IntMax,
    Size,
    PtrDiff,
    LongDouble,
}

impl Length {
    /// Width of the argument as passed.
    const fn arg_bits(self) -> u32 {
        match self {
            Self::Default | Self::Char | Self::Short => 32,
            Self::Long => LONG_BITS,
            Self::LongLong | Self::IntMax | Self::LongDouble => 64,
            Self::Size | Self::PtrDiff => usize::BITS,
        }
    }

    /// Width of the value after conversion.
    const fn value_bits(self) -> u32 {
        match self {
            Self::Char => 8,
            Self::Short => 16,
            other => other.arg_bits(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Conversion {
    Signed,
    Unsigned,
    Octal,
    Hex { upper: bool },
    Char,
    Str,
    Pointer,
    Percent,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Copy, Clone)]
struct Spec {
    left: bool,
    plus: bool,
    space: bool,
    alternate: bool,
    zero: bool,
    width: usize,
    precision: Option<usize>,
    length: Length,
    conversion: Conversion,
}

impl Spec {
    /// Parses the directive after a `%`. Returns the spec, if supported, and
    /// the number of bytes the directive spans.
    fn parse<A: ArgSource + ?Sized>(directive: &[u8], args: &mut A) -> (Option<Self>, usize) {
        let mut spec = Self {
            left: false,
            plus: false,
            space: false,
            alternate: false,
            zero: false,
            width: 0,
            precision: None,
            length: Length::Default,
            conversion: Conversion::Percent,
        };
        let mut at = 0;
        let peek = |at: usize| directive.get(at).copied();

        while let Some(flag) = peek(at) {
            match flag {
                b'-' => spec.left = true,
                b'+' => spec.plus = true,
                b' ' => spec.space = true,
                b'#' => spec.alternate = true,
                b'0' => spec.zero = true,
                _ => break,
            }
            at += 1;
        }

        if peek(at) == Some(b'*') {
            at += 1;
            let width = args.next_i32();
            if width < 0 {
                spec.left = true;
            }
            spec.width = usize::try_from(width.unsigned_abs()).unwrap_or(usize::MAX);
        } else {
            spec.width = parse_digits(directive, &mut at);
        }

        if peek(at) == Some(b'.') {
            at += 1;
            if peek(at) == Some(b'*') {
                at += 1;
                let precision = args.next_i32();
                spec.precision = usize::try_from(precision).ok();
            } else {
                spec.precision = Some(parse_digits(directive, &mut at));
            }
        }

        spec.length = match (peek(at), peek(at + 1)) {
            (Some(b'h'), Some(b'h')) => Length::Char,
            (Some(b'h'), _) => Length::Short,
            (Some(b'l'), Some(b'l')) => Length::LongLong,
            (Some(b'l'), _) => Length::Long,
            (Some(b'j'), _) => Length::IntMax,
            (Some(b'z'), _) => Length::Size,
            (Some(b't'), _) => Length::PtrDiff,
            (Some(b'L'), _) => Length::LongDouble,
            _ => Length::Default,
        };
        at += match spec.length {
            Length::Default => 0,
            Length::Char | Length::LongLong => 2,
            _ => 1,
        };

        let Some(conversion) = peek(at) else {
            // Directive runs into the end of the format string.
            return (None, at);
        };
        at += 1;

        spec.conversion = match conversion {
            b'd' | b'i' => Conversion::Signed,
            b'u' => Conversion::Unsigned,
            b'o' => Conversion::Octal,
            b'x' => Conversion::Hex { upper: false },
            b'X' => Conversion::Hex { upper: true },
            b'c' => Conversion::Char,
            b's' => Conversion::Str,
            b'p' => Conversion::Pointer,
            b'%' => Conversion::Percent,
            _ => return (None, at),
        };

        (Some(spec), at)
    }

    fn render<W: Write, A: ArgSource + ?Sized>(self, out: &mut W, args: &mut A) -> fmt::Result {
        match self.conversion {
            Conversion::Percent => out.write_char('%'),
            Conversion::Signed => {
                let value = read_signed(args, self.length);
                let sign = if value < 0 {
                    "-"
                } else if self.plus {
                    "+"
                } else if self.space {
                    " "
                } else {
                    ""
                };
                self.render_number(out, sign, value.unsigned_abs(), 10, false)
            }
            Conversion::Unsigned => self.render_number(out, "", read_unsigned(args, self.length), 10, false),
            Conversion::Octal => self.render_number(out, "", read_unsigned(args, self.length), 8, false),
            Conversion::Hex { upper } => {
                let value = read_unsigned(args, self.length);
                let prefix = match (self.alternate && value != 0, upper) {
                    (false, _) => "",
                    (true, false) => "0x",
                    (true, true) => "0X",
                };
                self.render_number(out, prefix, value, 16, upper)
            }
            Conversion::Char => {
                let [byte, ..] = args.next_i32().to_le_bytes();
                let ch = if byte.is_ascii() {
                    char::from(byte)
                } else {
                    char::REPLACEMENT_CHARACTER
                };
                self.pad(out, 1, |out| out.write_char(ch))
            }
            Conversion::Str => {
                let ptr = args.next_ptr().cast::<c_char>();
                let bytes: &[u8] = if ptr.is_null() {
                    let null = b"(null)";
                    &null[..self.precision.map_or(null.len(), |max| max.min(null.len()))]
                } else {
                    // SAFETY: `%s` arguments point to NUL-terminated strings,
                    // or to at least `precision` bytes.
                    unsafe { c_str_bytes(ptr, self.precision) }
                };
                self.pad(out, lossy_len(bytes), |out| write_lossy(out, bytes))
            }
            Conversion::Pointer => {
                let address = args.next_ptr().addr();
                let mut digits = Digits::new();
                let text = digits.render(address as u64, 16, false);
                self.pad(out, text.len() + 2, |out| {
                    out.write_str("0x")?;
                    out.write_str(text)
                })
            }
        }
    }

    fn render_number<W: Write>(&self, out: &mut W, prefix: &str, value: u64, base: u64, upper: bool) -> fmt::Result {
        let mut digits = Digits::new();
        let mut text = digits.render(value, base, upper);

        // An explicit zero precision prints no digits for zero.
        if value == 0 && self.precision == Some(0) {
            text = "";
        }

        let mut zeros = self.precision.map_or(0, |precision| precision.saturating_sub(text.len()));
        if base == 8 && self.alternate && !text.starts_with('0') && zeros == 0 {
            zeros = 1;
        }

        let body = prefix.len() + zeros + text.len();
        let padding = self.width.saturating_sub(body);

        if self.left {
            out.write_str(prefix)?;
            write_repeated(out, '0', zeros)?;
            out.write_str(text)?;
            write_repeated(out, ' ', padding)
        } else if self.zero && self.precision.is_none() {
            out.write_str(prefix)?;
            write_repeated(out, '0', zeros + padding)?;
            out.write_str(text)
        } else {
            write_repeated(out, ' ', padding)?;
            out.write_str(prefix)?;
            write_repeated(out, '0', zeros)?;
            out.write_str(text)
        }
    }

    fn pad<W: Write>(&self, out: &mut W, len: usize, body: impl FnOnce(&mut W) -> fmt::Result) -> fmt::Result {
        let padding = self.width.saturating_sub(len);
        if self.left {
            body(out)?;
            write_repeated(out, ' ', padding)
        } else {
            write_repeated(out, ' ', padding)?;
            body(out)
        }
    }
}

fn parse_digits(directive: &[u8], at: &mut usize) -> usize {
    let mut value = 0usize;
    while let Some(digit) = directive.get(*at).filter(|b| b.is_ascii_digit()) {
        value = value.saturating_mul(10).saturating_add(usize::from(digit - b'0'));
        *at += 1;
    }
    value
}

fn read_raw<A: ArgSource + ?Sized>(args: &mut A, length: Length) -> u64 {
    if length.arg_bits() == 64 {
        args.next_i64().cast_unsigned()
    } else {
        u64::from(args.next_i32().cast_unsigned())
    }
}

fn read_signed<A: ArgSource + ?Sized>(args: &mut A, length: Length) -> i64 {
    let shift = 64 - length.value_bits();
    (read_raw(args, length) << shift).cast_signed() >> shift
}

fn read_unsigned<A: ArgSource + ?Sized>(args: &mut A, length: Length) -> u64 {
    let raw = read_raw(args, length);
    match length.value_bits() {
        64 => raw,
        bits => raw & ((1 << bits) - 1),
    }
}

/// Reads a C string, stopping at `max` bytes if given.
///
/// # Safety
/// `ptr` must be NUL-terminated or, with `max`, readable for `max` bytes or up
/// to its terminator.
unsafe fn c_str_bytes<'a>(ptr: *const c_char, max: Option<usize>) -> &'a [u8] {
    match max {
        // SAFETY: caller guarantees NUL termination.
        None => unsafe { CStr::from_ptr(ptr) }.to_bytes(),
        Some(max) => {
            let bytes = ptr.cast::<u8>();
            // SAFETY: each byte read lies before the terminator and within `max`.
            let len = (0..max).take_while(|&i| unsafe { *bytes.add(i) } != 0).count();
            // SAFETY: the first `len` bytes were just read.
            unsafe { core::slice::from_raw_parts(bytes, len) }
        }
    }
}

fn write_repeated<W: Write>(out: &mut W, ch: char, count: usize) -> fmt::Result {
    (0..count).try_for_each(|_| out.write_char(ch))
}

/// Stack buffer for the digits of a `u64` in any base from 8 up.
struct Digits {
    buf: [u8; 22],
}

impl Digits {
    const fn new() -> Self {
        Self { buf: [0; 22] }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, mut value: u64, base: u64, upper: bool) -> &str {
        let symbols: &[u8; 16] = if upper { b"0123456789ABCDEF" } else { b"0123456789abcdef" };
        let mut at = self.buf.len();
        loop {
            at -= 1;
            self.buf[at] = symbols[(value % base) as usize];
            value /= base;
            if value == 0 {
                break;
            }
        }
        // Only ASCII digits were written.
        core::str::from_utf8(&self.buf[at..]).unwrap_or_default()
    }
}
