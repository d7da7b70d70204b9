//! # Root System Description Pointer from UEFI
//!
//! For [`OsServices::root_pointer`](crate::OsServices::root_pointer) on
//! hosts booted through UEFI.

use uefi::system;
use uefi::table::cfg::{ACPI_GUID, ACPI2_GUID, ConfigTableEntry};

/// Physical address of the RSDP in the UEFI configuration table.
///
/// Prefers the ACPI 2.0 entry over the ACPI 1.0 one.
#[must_use]
pub fn from_uefi_config_table() -> Option<u64> {
    system::with_config_table(find)
}

fn find(table: &[ConfigTableEntry]) -> Option<u64> {
    let address = table
        .iter()
        .find(|entry| entry.guid == ACPI2_GUID)
        .or_else(|| table.iter().find(|entry| entry.guid == ACPI_GUID))?
        .address;
    log::debug!("RSDP at {address:p}");
    Some(address.addr() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ffi::c_void;

    fn entry(guid: uefi::Guid, address: usize) -> ConfigTableEntry {
        ConfigTableEntry {
            guid,
            address: core::ptr::without_provenance::<c_void>(address),
        }
    }

    #[test]
    fn prefers_acpi2() {
        let table = [entry(ACPI_GUID, 0xE_0000), entry(ACPI2_GUID, 0x7FF_0000)];
        assert_eq!(find(&table), Some(0x7FF_0000));
    }

    #[test]
    fn falls_back_to_acpi1() {
        assert_eq!(find(&[entry(ACPI_GUID, 0xE_0000)]), Some(0xE_0000));
        assert_eq!(find(&[]), None);
    }
}
