//! # ACPICA exception codes (`acexcep.h`)
//!
//! An [`ACPI_STATUS`] is a 32-bit value whose bits 12–15 select an exception
//! class and bits 0–11 the code within that class. [`AE_OK`] is zero.
//!
//! ```
//! use acpica_sys::{ACPI_STATUS, AE_BAD_SIGNATURE, ExceptionClass};
//!
//! assert_eq!(AE_BAD_SIGNATURE.class(), ExceptionClass::Tables);
//! assert_eq!(AE_BAD_SIGNATURE.name(), Some("AE_BAD_SIGNATURE"));
//! assert!(AE_BAD_SIGNATURE.into_result().is_err());
//! ```

use bitfield_struct::bitfield;
use core::fmt;

use crate::platform::UINT32;
use crate::types::ACPI_STATUS;

/// Exception class of an [`ACPI_STATUS`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExceptionClass {
    /// Environmental and general errors.
    Environmental,
    /// Invalid use of the interface by the caller.
    Programmer,
    /// Malformed ACPI tables.
    Tables,
    /// AML interpreter errors.
    Aml,
    /// Internal control codes; not errors in the usual sense.
    Control,
    /// A class ACPICA does not define.
    Unknown(u8),
}

impl ExceptionClass {
    const fn into_bits(self) -> u8 {
        match self {
            Self::Environmental => 0x0,
            Self::Programmer => 0x1,
            Self::Tables => 0x2,
            Self::Aml => 0x3,
            Self::Control => 0x4,
            Self::Unknown(bits) => bits,
        }
    }

    const fn from_bits(bits: u8) -> Self {
        match bits {
            0x0 => Self::Environmental,
            0x1 => Self::Programmer,
            0x2 => Self::Tables,
            0x3 => Self::Aml,
            0x4 => Self::Control,
            other => Self::Unknown(other),
        }
    }
}

/// Bit layout of an exception code.
#[bitfield(u32)]
pub struct ExceptionBits {
    /// Code within the class.
    #[bits(12)]
    pub code: u16,
    /// Exception class.
    #[bits(4)]
    pub class: ExceptionClass,
    #[bits(16, default = 0)]
    _reserved: u16,
}

pub const AE_CODE_ENVIRONMENTAL: UINT32 = 0x0000;
pub const AE_CODE_PROGRAMMER: UINT32 = 0x1000;
pub const AE_CODE_ACPI_TABLES: UINT32 = 0x2000;
pub const AE_CODE_AML: UINT32 = 0x3000;
pub const AE_CODE_CONTROL: UINT32 = 0x4000;
pub const AE_CODE_MASK: UINT32 = 0xF000;

macro_rules! exceptions {
    ($($class:ident { $($name:ident = $code:literal,)* })*) => {
        $($(
            pub const $name: ACPI_STATUS = ACPI_STATUS($class | $code);
        )*)*

        /// Every defined exception with its name.
        pub const EXCEPTION_NAMES: &[(ACPI_STATUS, &str)] = &[
            $($( ($name, stringify!($name)), )*)*
        ];
    };
}

exceptions! {
    AE_CODE_ENVIRONMENTAL {
        AE_OK = 0x0000,
        AE_ERROR = 0x0001,
        AE_NO_ACPI_TABLES = 0x0002,
        AE_NO_NAMESPACE = 0x0003,
        AE_NO_MEMORY = 0x0004,
        AE_NOT_FOUND = 0x0005,
        AE_NOT_EXIST = 0x0006,
        AE_ALREADY_EXISTS = 0x0007,
        AE_TYPE = 0x0008,
        AE_NULL_OBJECT = 0x0009,
        AE_NULL_ENTRY = 0x000A,
        AE_BUFFER_OVERFLOW = 0x000B,
        AE_STACK_OVERFLOW = 0x000C,
        AE_STACK_UNDERFLOW = 0x000D,
        AE_NOT_IMPLEMENTED = 0x000E,
        AE_SUPPORT = 0x000F,
        AE_LIMIT = 0x0010,
        AE_TIME = 0x0011,
        AE_ACQUIRE_DEADLOCK = 0x0012,
        AE_RELEASE_DEADLOCK = 0x0013,
        AE_NOT_ACQUIRED = 0x0014,
        AE_ALREADY_ACQUIRED = 0x0015,
        AE_NO_HARDWARE_RESPONSE = 0x0016,
        AE_NO_GLOBAL_LOCK = 0x0017,
        AE_ABORT_METHOD = 0x0018,
        AE_SAME_HANDLER = 0x0019,
        AE_NO_HANDLER = 0x001A,
        AE_OWNER_ID_LIMIT = 0x001B,
        AE_NOT_CONFIGURED = 0x001C,
        AE_ACCESS = 0x001D,
        AE_IO_ERROR = 0x001E,
        AE_NUMERIC_OVERFLOW = 0x001F,
        AE_HEX_OVERFLOW = 0x0020,
        AE_DECIMAL_OVERFLOW = 0x0021,
        AE_OCTAL_OVERFLOW = 0x0022,
        AE_END_OF_TABLE = 0x0023,
    }
    AE_CODE_PROGRAMMER {
        AE_BAD_PARAMETER = 0x0001,
        AE_BAD_CHARACTER = 0x0002,
        AE_BAD_PATHNAME = 0x0003,
        AE_BAD_DATA = 0x0004,
        AE_BAD_HEX_CONSTANT = 0x0005,
        AE_BAD_OCTAL_CONSTANT = 0x0006,
        AE_BAD_DECIMAL_CONSTANT = 0x0007,
        AE_MISSING_ARGUMENTS = 0x0008,
        AE_BAD_ADDRESS = 0x0009,
    }
    AE_CODE_ACPI_TABLES {
        AE_BAD_SIGNATURE = 0x0001,
        AE_BAD_HEADER = 0x0002,
        AE_BAD_CHECKSUM = 0x0003,
        AE_BAD_VALUE = 0x0004,
        AE_INVALID_TABLE_LENGTH = 0x0005,
    }
    AE_CODE_AML {
        AE_AML_BAD_OPCODE = 0x0001,
        AE_AML_NO_OPERAND = 0x0002,
        AE_AML_OPERAND_TYPE = 0x0003,
        AE_AML_OPERAND_VALUE = 0x0004,
        AE_AML_UNINITIALIZED_LOCAL = 0x0005,
        AE_AML_UNINITIALIZED_ARG = 0x0006,
        AE_AML_UNINITIALIZED_ELEMENT = 0x0007,
        AE_AML_NUMERIC_OVERFLOW = 0x0008,
        AE_AML_REGION_LIMIT = 0x0009,
        AE_AML_BUFFER_LIMIT = 0x000A,
        AE_AML_PACKAGE_LIMIT = 0x000B,
        AE_AML_DIVIDE_BY_ZERO = 0x000C,
        AE_AML_BAD_NAME = 0x000D,
        AE_AML_NAME_NOT_FOUND = 0x000E,
        AE_AML_INTERNAL = 0x000F,
        AE_AML_INVALID_SPACE_ID = 0x0010,
        AE_AML_STRING_LIMIT = 0x0011,
        AE_AML_NO_RETURN_VALUE = 0x0012,
        AE_AML_METHOD_LIMIT = 0x0013,
        AE_AML_NOT_OWNER = 0x0014,
        AE_AML_MUTEX_ORDER = 0x0015,
        AE_AML_MUTEX_NOT_ACQUIRED = 0x0016,
        AE_AML_INVALID_RESOURCE_TYPE = 0x0017,
        AE_AML_INVALID_INDEX = 0x0018,
        AE_AML_REGISTER_LIMIT = 0x0019,
        AE_AML_NO_WHILE = 0x001A,
        AE_AML_ALIGNMENT = 0x001B,
        AE_AML_NO_RESOURCE_END_TAG = 0x001C,
        AE_AML_BAD_RESOURCE_VALUE = 0x001D,
        AE_AML_CIRCULAR_REFERENCE = 0x001E,
        AE_AML_BAD_RESOURCE_LENGTH = 0x001F,
        AE_AML_ILLEGAL_ADDRESS = 0x0020,
        AE_AML_LOOP_TIMEOUT = 0x0021,
        AE_AML_UNINITIALIZED_NODE = 0x0022,
        AE_AML_TARGET_TYPE = 0x0023,
        AE_AML_PROTOCOL = 0x0024,
        AE_AML_BUFFER_LENGTH = 0x0025,
    }
    AE_CODE_CONTROL {
        AE_CTRL_RETURN_VALUE = 0x0001,
        AE_CTRL_PENDING = 0x0002,
        AE_CTRL_TERMINATE = 0x0003,
        AE_CTRL_TRUE = 0x0004,
        AE_CTRL_FALSE = 0x0005,
        AE_CTRL_DEPTH = 0x0006,
        AE_CTRL_END = 0x0007,
        AE_CTRL_TRANSFER = 0x0008,
        AE_CTRL_BREAK = 0x0009,
        AE_CTRL_CONTINUE = 0x000A,
        AE_CTRL_PARSE_CONTINUE = 0x000B,
        AE_CTRL_PARSE_PENDING = 0x000C,
    }
}

impl ACPI_STATUS {
    /// Whether this is [`AE_OK`].
    #[must_use]
    pub const fn is_ok(self) -> bool {
        self.0 == AE_OK.0
    }

    /// Whether this is anything but [`AE_OK`].
    #[must_use]
    pub const fn is_err(self) -> bool {
        !self.is_ok()
    }

    /// Decoded class and code.
    #[must_use]
    pub const fn bits(self) -> ExceptionBits {
        ExceptionBits::from_bits(self.0)
    }

    /// Exception class.
    #[must_use]
    pub const fn class(self) -> ExceptionClass {
        self.bits().class()
    }

    /// ACPICA's name for this code, if it is a defined exception.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        EXCEPTION_NAMES
            .iter()
            .find(|(status, _)| *status == self)
            .map(|(_, name)| *name)
    }

    /// `Ok(())` for [`AE_OK`], `Err(self)` otherwise.
    ///
    /// # Errors
    /// Returns the status itself when it is not [`AE_OK`].
    pub const fn into_result(self) -> Result<(), Self> {
        if self.is_ok() { Ok(()) } else { Err(self) }
    }
}

impl Default for ACPI_STATUS {
    fn default() -> Self {
        AE_OK
    }
}

impl From<ACPI_STATUS> for UINT32 {
    fn from(status: ACPI_STATUS) -> Self {
        status.0
    }
}

impl fmt::Display for ACPI_STATUS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "AE_UNKNOWN({:#06X})", self.0),
        }
    }
}

impl fmt::Debug for ACPI_STATUS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} ({:#06X})", self.0)
    }
}
