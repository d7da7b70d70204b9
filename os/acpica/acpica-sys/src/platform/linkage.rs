//! Calling conventions of ACPICA's interface functions.
//!
//! ACPICA distinguishes two categories of externally visible functions. Both
//! use the C convention (`__cdecl`) on this platform. All ACPICA imports and
//! function-pointer types in this crate are declared through the macros below
//! so that the convention is chosen in one place.

/// Declares imports with the `ACPI_SYSTEM_XFACE` convention.
#[macro_export]
macro_rules! acpi_system_xface {
    ($($decl:tt)*) => {
        unsafe extern "C" {
            $($decl)*
        }
    };
}

/// Declares variadic imports with the `ACPI_INTERNAL_VAR_XFACE` convention.
#[macro_export]
macro_rules! acpi_internal_var_xface {
    ($($decl:tt)*) => {
        unsafe extern "C" {
            $($decl)*
        }
    };
}

/// Function pointer type with the `ACPI_SYSTEM_XFACE` convention.
///
/// ```
/// use acpica_sys::{acpi_system_fn, ACPI_STATUS, UINT32};
///
/// type Handler = acpi_system_fn!(fn(UINT32) -> ACPI_STATUS);
/// ```
#[macro_export]
macro_rules! acpi_system_fn {
    (fn($($arg:ty),* $(,)?) $(-> $ret:ty)?) => {
        unsafe extern "C" fn($($arg),*) $(-> $ret)?
    };
}
