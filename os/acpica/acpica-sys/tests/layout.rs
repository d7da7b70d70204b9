use acpica_sys::*;
use std::mem::{align_of, offset_of, size_of};

#[test]
fn table_header_matches_the_acpi_layout() {
    assert_eq!(size_of::<ACPI_TABLE_HEADER>(), 36);
    assert_eq!(offset_of!(ACPI_TABLE_HEADER, Length), 4);
    assert_eq!(offset_of!(ACPI_TABLE_HEADER, Checksum), 9);
    assert_eq!(offset_of!(ACPI_TABLE_HEADER, OemId), 10);
    assert_eq!(offset_of!(ACPI_TABLE_HEADER, OemTableId), 16);
    assert_eq!(offset_of!(ACPI_TABLE_HEADER, OemRevision), 24);
    assert_eq!(offset_of!(ACPI_TABLE_HEADER, AslCompilerRevision), 32);
}

#[test]
fn status_is_a_plain_u32() {
    assert_eq!(size_of::<ACPI_STATUS>(), 4);
    assert_eq!(align_of::<ACPI_STATUS>(), 4);
    assert_eq!(u32::from(AE_NOT_CONFIGURED), 0x001C);
    assert_eq!(u32::from(AE_BAD_PARAMETER), 0x1001);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn pointer_sized_structures() {
    assert_eq!(size_of::<ACPI_BUFFER>(), 16);
    assert_eq!(size_of::<ACPI_TABLE_DESC>(), 32);
    assert_eq!(size_of::<ACPI_OBJECT>(), 24);
    assert_eq!(size_of::<ACPI_OBJECT_LIST>(), 16);
}

#[test]
fn callbacks_are_nullable_pointers() {
    assert_eq!(size_of::<ACPI_WALK_CALLBACK>(), size_of::<usize>());
    assert_eq!(size_of::<ACPI_OSD_HANDLER>(), size_of::<usize>());
    assert_eq!(size_of::<ACPI_WALK_RESOURCE_CALLBACK>(), size_of::<usize>());
}

#[test]
fn object_type_tag_is_shared() {
    let object = ACPI_OBJECT::integer(0x42);
    assert_eq!(object.object_type(), ACPI_TYPE_INTEGER);
    assert_eq!(unsafe { object.Integer.Value }, 0x42);
}

#[test]
fn buffer_allocation_markers() {
    let buffer = ACPI_BUFFER::allocate();
    assert_eq!(buffer.Length, ACPI_ALLOCATE_BUFFER);
    assert!(buffer.Pointer.is_null());
    assert_eq!(ACPI_ALLOCATE_LOCAL_BUFFER, ACPI_ALLOCATE_BUFFER - 1);
}

#[test]
fn root_object_is_all_ones() {
    assert_eq!(ACPI_ROOT_OBJECT as usize, usize::MAX);
}
