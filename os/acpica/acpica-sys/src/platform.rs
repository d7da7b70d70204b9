//! # Platform environment
//!
//! The definitions ACPICA expects from its per-platform environment header,
//! established before any other ACPICA layer is declared:
//!
//! | ACPICA expects | Provided by |
//! |----------------|-------------|
//! | `UINT8` … `UINT64`, `INT8` … `INT64` and alternate spellings | [`widths`] |
//! | `ACPI_NATIVE_INT`, `ACPI_SIZE`, `ACPI_IO_ADDRESS`, `ACPI_PHYSICAL_ADDRESS` | [`widths`] |
//! | `ACPI_MACHINE_WIDTH` | [`ACPI_MACHINE_WIDTH`] |
//! | `ACPI_INLINE` | `#[inline]` on every generated stub |
//! | `ACPI_SYSTEM_XFACE`, `ACPI_INTERNAL_VAR_XFACE` | `acpi_system_xface!`, `acpi_internal_var_xface!`, `acpi_system_fn!` in [`linkage`] |
//! | `va_list` | [`va_list`] |
//! | `ACPI_EXTERNAL_RETURN_*` | [`stubs`] |
//!
//! `ACPI_INIT_FUNCTION` expands to nothing on this platform and has no
//! counterpart.

#[macro_use]
pub mod linkage;
#[macro_use]
pub mod stubs;
pub mod widths;

pub use stubs::NullReturn;
pub use widths::*;

/// ACPICA's internal `do { } while (0)` macro style is in use.
pub const ACPI_USE_DO_WHILE_0: bool = true;

/// ACPICA manages its object caches itself; the host provides no
/// `AcpiOs*Cache` functions.
pub const ACPI_USE_LOCAL_CACHE: bool = true;

/// Variadic argument list as passed by ACPICA to `AcpiOsVprintf`.
///
/// Matches the host toolchain's builtin `va_list`.
pub type va_list<'a> = ::va_list::VaList<'a>;
