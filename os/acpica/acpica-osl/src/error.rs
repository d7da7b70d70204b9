use acpica_sys::{ACPI_STATUS, AcpiFormatException};
use core::ffi::CStr;

use crate::tables::Signature;

/// Errors of the safe ACPICA wrappers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AcpicaError {
    #[error("no OS services are registered")]
    ServicesNotRegistered,
    #[error("OS services are already registered")]
    ServicesAlreadyRegistered,
    #[error("{operation} failed with {status}")]
    Status {
        /// The ACPICA function that failed.
        operation: &'static str,
        status: ACPI_STATUS,
    },
    #[error("expected table {expected} but ACPICA returned {found}")]
    SignatureMismatch { expected: Signature, found: Signature },
}

impl AcpicaError {
    /// The ACPICA status behind this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<ACPI_STATUS> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Maps the status returned by `operation` to a `Result`.
pub(crate) fn check(operation: &'static str, status: ACPI_STATUS) -> Result<(), AcpicaError> {
    status
        .into_result()
        .map_err(|status| AcpicaError::Status { operation, status })
}

/// ACPICA's name for `status`.
///
/// Asks the linked ACPICA first and falls back to the exception table of
/// `acpica-sys`; unknown codes map to `"AE_UNKNOWN"`.
#[must_use]
pub fn exception_name(status: ACPI_STATUS) -> &'static str {
    // SAFETY: AcpiFormatException returns null or a pointer into ACPICA's
    // static exception table.
    let linked = unsafe { AcpiFormatException(status) };
    if !linked.is_null() {
        // SAFETY: non-null results are NUL-terminated static strings.
        if let Ok(name) = unsafe { CStr::from_ptr(linked) }.to_str() {
            return name;
        }
    }

    status.name().unwrap_or("AE_UNKNOWN")
}

#[cfg(test)]
mod tests {
    use super::*;
    use acpica_sys::{AE_NO_MEMORY, AE_OK};

    #[test]
    fn check_keeps_the_operation() {
        assert_eq!(check("AcpiLoadTables", AE_OK), Ok(()));

        let err = check("AcpiLoadTables", AE_NO_MEMORY).unwrap_err();
        assert_eq!(err.status(), Some(AE_NO_MEMORY));
        assert_eq!(err.to_string(), "AcpiLoadTables failed with AE_NO_MEMORY");
    }

    #[cfg(not(feature = "native"))]
    #[test]
    fn exception_name_uses_the_table() {
        assert_eq!(exception_name(AE_NO_MEMORY), "AE_NO_MEMORY");
        assert_eq!(exception_name(ACPI_STATUS(0x0FFF)), "AE_UNKNOWN");
    }
}
