//! "Not configured" stub templates.
//!
//! ACPICA marks optional interfaces with one of the `ACPI_EXTERNAL_RETURN_*`
//! categories. When an interface is not available, the platform expands the
//! prototype into an inline function returning a fixed sentinel:
//!
//! | Template | Sentinel |
//! |----------|----------|
//! | [`acpi_external_return_status!`] | [`AE_NOT_CONFIGURED`](crate::status::AE_NOT_CONFIGURED) |
//! | [`acpi_external_return_ok!`] | [`AE_OK`](crate::status::AE_OK) |
//! | [`acpi_external_return_void!`] | nothing |
//! | [`acpi_external_return_uint32!`] | `0` |
//! | [`acpi_external_return_ptr!`] | null ([`NullReturn`]) |
//!
//! The generated functions are `unsafe fn` with the prototype's signature, so
//! call sites read the same whether they reach a stub or a real ACPICA import.
//! They are `#[inline]` (`ACPI_INLINE`) and ignore their arguments.
//!
//! ```
//! use acpica_sys::{acpi_external_return_status, ACPI_STATUS, AE_NOT_CONFIGURED, UINT32};
//!
//! acpi_external_return_status! {
//!     fn AcpiSampleInterface(Flags: UINT32) -> ACPI_STATUS
//! }
//!
//! assert_eq!(unsafe { AcpiSampleInterface(7) }, AE_NOT_CONFIGURED);
//! ```

/// Pointer types a `ptr` category stub can return.
pub trait NullReturn {
    const NULL: Self;
}

impl<T> NullReturn for *const T {
    const NULL: Self = core::ptr::null();
}

impl<T> NullReturn for *mut T {
    const NULL: Self = core::ptr::null_mut();
}

#[doc(hidden)]
#[macro_export]
macro_rules! __acpi_stub {
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($($arg:ident: $ty:ty),*) $(-> $ret:ty)? $body:block
    ) => {
        $(#[$meta])*
        ///
        /// # Safety
        ///
        /// Generated "not configured" stub; it has no preconditions.
        #[inline]
        #[allow(
            clippy::missing_const_for_fn,
            clippy::must_use_candidate,
            clippy::let_unit_value,
            clippy::unused_unit
        )]
        $vis unsafe fn $name($($arg: $ty),*) $(-> $ret)? {
            let _ = ($($arg,)*);
            $body
        }
    };
}

/// Expands a prototype into a stub returning `AE_NOT_CONFIGURED`
/// (`ACPI_EXTERNAL_RETURN_STATUS`).
#[macro_export]
macro_rules! acpi_external_return_status {
    ($(#[$meta:meta])* $vis:vis fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty $(;)?) => {
        $crate::__acpi_stub! {
            $(#[$meta])* $vis fn $name($($arg: $ty),*) -> $ret { $crate::status::AE_NOT_CONFIGURED }
        }
    };
}

/// Expands a prototype into a stub returning `AE_OK` (`ACPI_EXTERNAL_RETURN_OK`).
#[macro_export]
macro_rules! acpi_external_return_ok {
    ($(#[$meta:meta])* $vis:vis fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty $(;)?) => {
        $crate::__acpi_stub! {
            $(#[$meta])* $vis fn $name($($arg: $ty),*) -> $ret { $crate::status::AE_OK }
        }
    };
}

/// Expands a prototype into a stub returning nothing (`ACPI_EXTERNAL_RETURN_VOID`).
#[macro_export]
macro_rules! acpi_external_return_void {
    ($(#[$meta:meta])* $vis:vis fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(;)?) => {
        $crate::__acpi_stub! {
            $(#[$meta])* $vis fn $name($($arg: $ty),*) {}
        }
    };
}

/// Expands a prototype into a stub returning `0` (`ACPI_EXTERNAL_RETURN_UINT32`).
#[macro_export]
macro_rules! acpi_external_return_uint32 {
    ($(#[$meta:meta])* $vis:vis fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty $(;)?) => {
        $crate::__acpi_stub! {
            $(#[$meta])* $vis fn $name($($arg: $ty),*) -> $ret { 0 }
        }
    };
}

/// Expands a prototype into a stub returning null (`ACPI_EXTERNAL_RETURN_PTR`).
#[macro_export]
macro_rules! acpi_external_return_ptr {
    ($(#[$meta:meta])* $vis:vis fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty $(;)?) => {
        $crate::__acpi_stub! {
            $(#[$meta])* $vis fn $name($($arg: $ty),*) -> $ret { <$ret as $crate::platform::NullReturn>::NULL }
        }
    };
}
