//! ACPICA resource types (`acrestyp.h`).
//!
//! Only the common resource header is modeled; the per-type payloads follow
//! it in memory and are decoded by the consumer.

use core::ffi::{c_char, c_void};
use core::mem::size_of;

use crate::platform::{UINT8, UINT32, UINT64};
use crate::types::ACPI_STATUS;

pub const ACPI_RESOURCE_TYPE_IRQ: UINT32 = 0;
pub const ACPI_RESOURCE_TYPE_DMA: UINT32 = 1;
pub const ACPI_RESOURCE_TYPE_START_DEPENDENT: UINT32 = 2;
pub const ACPI_RESOURCE_TYPE_END_DEPENDENT: UINT32 = 3;
pub const ACPI_RESOURCE_TYPE_IO: UINT32 = 4;
pub const ACPI_RESOURCE_TYPE_FIXED_IO: UINT32 = 5;
pub const ACPI_RESOURCE_TYPE_VENDOR: UINT32 = 6;
pub const ACPI_RESOURCE_TYPE_END_TAG: UINT32 = 7;
pub const ACPI_RESOURCE_TYPE_MEMORY24: UINT32 = 8;
pub const ACPI_RESOURCE_TYPE_MEMORY32: UINT32 = 9;
pub const ACPI_RESOURCE_TYPE_FIXED_MEMORY32: UINT32 = 10;
pub const ACPI_RESOURCE_TYPE_ADDRESS16: UINT32 = 11;
pub const ACPI_RESOURCE_TYPE_ADDRESS32: UINT32 = 12;
pub const ACPI_RESOURCE_TYPE_ADDRESS64: UINT32 = 13;
pub const ACPI_RESOURCE_TYPE_EXTENDED_ADDRESS64: UINT32 = 14;
pub const ACPI_RESOURCE_TYPE_EXTENDED_IRQ: UINT32 = 15;
pub const ACPI_RESOURCE_TYPE_GENERIC_REGISTER: UINT32 = 16;
pub const ACPI_RESOURCE_TYPE_GPIO: UINT32 = 17;
pub const ACPI_RESOURCE_TYPE_FIXED_DMA: UINT32 = 18;
pub const ACPI_RESOURCE_TYPE_SERIAL_BUS: UINT32 = 19;
pub const ACPI_RESOURCE_TYPE_PIN_FUNCTION: UINT32 = 20;
pub const ACPI_RESOURCE_TYPE_PIN_CONFIG: UINT32 = 21;
pub const ACPI_RESOURCE_TYPE_PIN_GROUP: UINT32 = 22;
pub const ACPI_RESOURCE_TYPE_PIN_GROUP_FUNCTION: UINT32 = 23;
pub const ACPI_RESOURCE_TYPE_PIN_GROUP_CONFIG: UINT32 = 24;
pub const ACPI_RESOURCE_TYPE_CLOCK_INPUT: UINT32 = 25;
pub const ACPI_RESOURCE_TYPE_MAX: UINT32 = 25;

/// Common header of a converted resource descriptor.
///
/// `Length` is the size of the whole record, header included; the next record
/// starts `Length` bytes after this one.
#[repr(C)]
#[derive(Debug)]
pub struct ACPI_RESOURCE {
    pub Type: UINT32,
    pub Length: UINT32,
    pub Data: [UINT8; 0],
}

/// Size of the resource header.
pub const ACPI_RESOURCE_HEADER_SIZE: usize = size_of::<ACPI_RESOURCE>();

const _: () = assert!(ACPI_RESOURCE_HEADER_SIZE == 8);

/// Entry of a `_PRT` routing table.
///
/// `Source` is a NUL-terminated path of variable length; the fixed part holds
/// its first four bytes.
#[repr(C)]
#[derive(Debug)]
pub struct ACPI_PCI_ROUTING_TABLE {
    pub Length: UINT32,
    pub Pin: UINT32,
    pub Address: UINT64,
    pub SourceIndex: UINT32,
    pub Source: [c_char; 4],
}

const _: () = assert!(size_of::<ACPI_PCI_ROUTING_TABLE>() == 24);

/// `AcpiWalkResources` per-record callback.
pub type ACPI_WALK_RESOURCE_CALLBACK = Option<acpi_system_fn!(fn(*mut ACPI_RESOURCE, *mut c_void) -> ACPI_STATUS)>;
