//! Integer width aliases.
//!
//! Every alias is checked at compile time against its declared width and
//! signedness. The [`WIDTH_TABLE`] records the same information for runtime
//! inspection (see the `acpica-layout` tool).

use core::ffi::{c_char, c_int, c_long, c_short, c_ulong};
use core::mem::size_of;

/// Declared signedness of a width alias.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Signedness {
    Signed,
    Unsigned,
    /// Follows the host (`char` is signed on x86, unsigned on Arm).
    Host,
}

/// Integer types a width alias may resolve to.
pub trait Integer: Copy {
    const SIGNED: bool;
}

macro_rules! impl_integer {
    ($($t:ty => $signed:literal),* $(,)?) => {
        $( impl Integer for $t { const SIGNED: bool = $signed; } )*
    };
}

impl_integer! {
    u8 => false, u16 => false, u32 => false, u64 => false, usize => false,
    i8 => true, i16 => true, i32 => true, i64 => true, isize => true,
}

/// Declared and actual width of one alias.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AliasWidth {
    /// Alias name as spelled by ACPICA.
    pub name: &'static str,
    /// Width the alias is declared to have, in bits.
    pub declared_bits: u32,
    /// Declared signedness.
    pub declared_signedness: Signedness,
    /// Width of the type the alias resolves to on this target, in bits.
    pub actual_bits: u32,
    /// Signedness of the type the alias resolves to on this target.
    pub actual_signed: bool,
}

impl AliasWidth {
    /// Records the alias `name` resolving to `T`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn of<T: Integer>(name: &'static str, declared_bits: u32, declared_signedness: Signedness) -> Self {
        Self {
            name,
            declared_bits,
            declared_signedness,
            actual_bits: (size_of::<T>() * 8) as u32,
            actual_signed: T::SIGNED,
        }
    }
}

/// A width alias that does not match its declaration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidthMismatch {
    #[error("{name} is declared {declared} bits wide but is {actual} bits on this target")]
    Width {
        name: &'static str,
        declared: u32,
        actual: u32,
    },
    #[error("{name} is declared {declared:?} but the target type disagrees")]
    Signedness {
        name: &'static str,
        declared: Signedness,
    },
}

/// Checks an alias against its declaration.
///
/// # Errors
/// Returns the first disagreement: width before signedness.
pub const fn check_width(alias: &AliasWidth) -> Result<(), WidthMismatch> {
    if alias.declared_bits != alias.actual_bits {
        return Err(WidthMismatch::Width {
            name: alias.name,
            declared: alias.declared_bits,
            actual: alias.actual_bits,
        });
    }

    let signedness_ok = match alias.declared_signedness {
        Signedness::Signed => alias.actual_signed,
        Signedness::Unsigned => !alias.actual_signed,
        Signedness::Host => true,
    };
    if !signedness_ok {
        return Err(WidthMismatch::Signedness {
            name: alias.name,
            declared: alias.declared_signedness,
        });
    }

    Ok(())
}

macro_rules! width_aliases {
    ($( $(#[$meta:meta])* $name:ident = $ty:ty => $bits:expr, $signedness:ident; )*) => {
        $(
            $(#[$meta])*
            pub type $name = $ty;

            const _: () = assert!(
                check_width(&AliasWidth::of::<$name>(stringify!($name), $bits, Signedness::$signedness)).is_ok(),
                concat!("width alias `", stringify!($name), "` does not match this target")
            );
        )*

        /// Every width alias with its declared and actual width, in declaration order.
        pub const WIDTH_TABLE: &[AliasWidth] = &[
            $( AliasWidth::of::<$name>(stringify!($name), $bits, Signedness::$signedness), )*
        ];
    };
}

/// Width of C `long` on this target.
#[cfg(all(target_pointer_width = "64", not(windows)))]
pub const LONG_BITS: u32 = 64;
/// Width of C `long` on this target.
#[cfg(not(all(target_pointer_width = "64", not(windows))))]
pub const LONG_BITS: u32 = 32;

/// Width ACPICA uses for its own size-dependent structures.
#[cfg(target_pointer_width = "64")]
pub const ACPI_MACHINE_WIDTH: u32 = 64;
/// Width ACPICA uses for its own size-dependent structures.
#[cfg(target_pointer_width = "32")]
pub const ACPI_MACHINE_WIDTH: u32 = 32;

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("ACPICA supports 32-bit and 64-bit targets only");

const _: () = assert!(ACPI_MACHINE_WIDTH == usize::BITS);

#[cfg(target_pointer_width = "64")]
type MachineInt = i64;
#[cfg(target_pointer_width = "64")]
type MachineUint = u64;
#[cfg(target_pointer_width = "32")]
type MachineInt = i32;
#[cfg(target_pointer_width = "32")]
type MachineUint = u32;

width_aliases! {
    CHAR = c_char => 8, Host;
    UINT8 = u8 => 8, Unsigned;
    UCHAR = UINT8 => 8, Unsigned;
    INT8 = i8 => 8, Signed;

    SHORT = c_short => 16, Signed;
    INT16 = i16 => 16, Signed;
    UINT16 = u16 => 16, Unsigned;
    USHORT = UINT16 => 16, Unsigned;

    INT = c_int => 32, Signed;
    UINT32 = u32 => 32, Unsigned;
    INT32 = i32 => 32, Signed;

    LONG = c_long => LONG_BITS, Signed;
    ULONG = c_ulong => LONG_BITS, Unsigned;

    INT64 = i64 => 64, Signed;
    LONGLONG = INT64 => 64, Signed;
    LONG64 = INT64 => 64, Signed;
    UINT64 = u64 => 64, Unsigned;
    ULONGLONG = UINT64 => 64, Unsigned;
    DWORDLONG = UINT64 => 64, Unsigned;
    ULONG64 = UINT64 => 64, Unsigned;
    DWORD64 = UINT64 => 64, Unsigned;

    /// Signed integer of machine width.
    ACPI_NATIVE_INT = MachineInt => ACPI_MACHINE_WIDTH, Signed;
    /// Object and buffer sizes.
    ACPI_SIZE = MachineUint => ACPI_MACHINE_WIDTH, Unsigned;
    /// I/O port addresses.
    ACPI_IO_ADDRESS = MachineUint => ACPI_MACHINE_WIDTH, Unsigned;
    /// Physical memory addresses.
    ACPI_PHYSICAL_ADDRESS = MachineUint => ACPI_MACHINE_WIDTH, Unsigned;
}

/// Number of bytes a native-size alias occupies on this target.
pub const NATIVE_SIZE: usize = size_of::<ACPI_SIZE>();

const _: () = assert!(NATIVE_SIZE == size_of::<*const ()>());
