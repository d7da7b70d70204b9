//! Looking up ACPI tables.
//!
//! ```no_run
//! use acpica_osl::tables::{self, Signature};
//!
//! if let Some(madt) = tables::find(Signature::APIC, 1)? {
//!     log::info!("MADT revision {}", madt.header().Revision);
//! } // the table is released here
//! # Ok::<(), acpica_osl::AcpicaError>(())
//! ```

use acpica_sys::{ACPI_STATUS, ACPI_TABLE_HEADER, AE_NOT_FOUND, AcpiGetTable, AcpiPutTable};
use core::ffi::c_char;
use core::fmt;
use core::ptr::NonNull;

use crate::error::{AcpicaError, check};

/// A four-character table signature such as `FACP`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Signature(pub [u8; 4]);

impl Signature {
    /// Fixed ACPI Description Table.
    pub const FACP: Self = Self(*b"FACP");
    /// Multiple APIC Description Table.
    pub const APIC: Self = Self(*b"APIC");
    /// Differentiated System Description Table.
    pub const DSDT: Self = Self(*b"DSDT");
    /// Secondary System Description Table.
    pub const SSDT: Self = Self(*b"SSDT");
    /// High Precision Event Timer table.
    pub const HPET: Self = Self(*b"HPET");
    /// PCI Express memory-mapped configuration table.
    pub const MCFG: Self = Self(*b"MCFG");

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<[u8; 4]> for Signature {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for &byte in &self.0 {
            f.write_char(if byte.is_ascii_graphic() { char::from(byte) } else { '?' })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({self})")
    }
}

/// A mapped ACPI table, released with `AcpiPutTable` on drop.
pub struct Table {
    header: NonNull<ACPI_TABLE_HEADER>,
}

// SAFETY: ACPICA tables are immutable while mapped and may be read from any
// thread.
unsafe impl Send for Table {}
// SAFETY: see above.
unsafe impl Sync for Table {}

impl Table {
    #[must_use]
    pub fn header(&self) -> &ACPI_TABLE_HEADER {
        // SAFETY: the header stays mapped until `self` is dropped.
        unsafe { self.header.as_ref() }
    }

    #[must_use]
    pub fn signature(&self) -> Signature {
        Signature(self.header().Signature)
    }

    /// The whole table, header included.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        let length = usize::try_from(self.header().Length).unwrap_or(0);
        // SAFETY: ACPICA maps `Length` bytes starting at the header.
        unsafe { core::slice::from_raw_parts(self.header.as_ptr().cast::<u8>(), length) }
    }
}

impl Drop for Table {
    fn drop(&mut self) {
        // SAFETY: the pointer came from AcpiGetTable and is released once.
        unsafe { AcpiPutTable(self.header.as_ptr()) };
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("signature", &self.signature())
            .field("length", &self.header().Length)
            .finish()
    }
}

/// Finds instance `instance` (1-based) of the table with `signature`.
///
/// # Errors
/// [`AcpicaError::Status`] if ACPICA fails for a reason other than a missing
/// table; [`AcpicaError::SignatureMismatch`] if it returns a different table.
pub fn find(signature: Signature, instance: u32) -> Result<Option<Table>, AcpicaError> {
    let mut name = signature.0.map(|byte| c_char::from_ne_bytes([byte]));
    let mut header: *mut ACPI_TABLE_HEADER = core::ptr::null_mut();

    // SAFETY: `name` is a four-character signature as ACPICA expects; it is
    // only read.
    let status = unsafe { AcpiGetTable(name.as_mut_ptr(), instance, &raw mut header) };
    resolve(signature, instance, status, header)
}

/// Interprets the outcome of an `AcpiGetTable` call.
fn resolve(
    signature: Signature,
    instance: u32,
    status: ACPI_STATUS,
    header: *mut ACPI_TABLE_HEADER,
) -> Result<Option<Table>, AcpicaError> {
    if status == AE_NOT_FOUND {
        log::debug!("table {signature} #{instance} not present");
        return Ok(None);
    }
    check("AcpiGetTable", status)?;

    let Some(header) = NonNull::new(header) else {
        return Ok(None);
    };
    let table = Table { header };

    let found = table.signature();
    if found != signature {
        log::warn!("requested table {signature} but ACPICA returned {found}");
        return Err(AcpicaError::SignatureMismatch {
            expected: signature,
            found,
        });
    }

    log::debug!("found table {signature} #{instance}, {} bytes", table.header().Length);
    Ok(Some(table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_display_masks_unprintable_bytes() {
        assert_eq!(Signature::FACP.to_string(), "FACP");
        assert_eq!(Signature(*b"A\0C\xFF").to_string(), "A?C?");
        assert_eq!(format!("{:?}", Signature::MCFG), "Signature(MCFG)");
    }

    #[cfg(not(feature = "native"))]
    #[test]
    fn find_without_acpica_reports_not_configured() {
        let err = find(Signature::DSDT, 1).unwrap_err();
        assert_eq!(err.status(), Some(acpica_sys::AE_NOT_CONFIGURED));
    }

    #[test]
    fn missing_table_is_none() {
        let found = resolve(Signature::HPET, 1, AE_NOT_FOUND, core::ptr::null_mut()).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn failed_lookup_is_an_error() {
        let err = resolve(Signature::HPET, 1, acpica_sys::AE_NO_MEMORY, core::ptr::null_mut()).unwrap_err();
        assert_eq!(err.status(), Some(acpica_sys::AE_NO_MEMORY));
    }

    fn header(signature: Signature) -> ACPI_TABLE_HEADER {
        ACPI_TABLE_HEADER {
            Signature: signature.0,
            Length: 36,
            Revision: 2,
            ..ACPI_TABLE_HEADER::default()
        }
    }

    // Dropping a `Table` calls `AcpiPutTable`, which only the stub build
    // tolerates for a header that ACPICA did not map.
    #[cfg(not(feature = "native"))]
    #[test]
    fn other_signature_is_rejected() {
        let mut ssdt = header(Signature::SSDT);
        let err = resolve(Signature::DSDT, 1, acpica_sys::AE_OK, &raw mut ssdt).unwrap_err();
        assert_eq!(
            err,
            AcpicaError::SignatureMismatch {
                expected: Signature::DSDT,
                found: Signature::SSDT,
            }
        );
    }

    #[cfg(not(feature = "native"))]
    #[test]
    fn matching_table_is_returned() {
        let mut dsdt = header(Signature::DSDT);
        let table = resolve(Signature::DSDT, 1, acpica_sys::AE_OK, &raw mut dsdt)
            .unwrap()
            .unwrap();
        assert_eq!(table.signature(), Signature::DSDT);
        assert_eq!(table.header().Revision, 2);
        assert_eq!(table.as_bytes().len(), 36);
    }
}
