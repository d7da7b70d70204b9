use acpica_sys::{
    ACPI_IO_ADDRESS, ACPI_MACHINE_WIDTH, ACPI_NATIVE_INT, ACPI_PHYSICAL_ADDRESS, ACPI_SIZE, AliasWidth, NATIVE_SIZE,
    Signedness, WIDTH_TABLE, WidthMismatch, check_width,
};
use std::mem::size_of;

#[test]
fn every_alias_has_its_declared_width() {
    for alias in WIDTH_TABLE {
        assert_eq!(check_width(alias), Ok(()), "{}", alias.name);
    }
}

#[test]
fn duplicate_spellings_agree() {
    let width_of = |name: &str| {
        WIDTH_TABLE
            .iter()
            .find(|a| a.name == name)
            .map(|a| (a.actual_bits, a.actual_signed))
            .unwrap_or_else(|| panic!("{name} missing from the width table"))
    };

    assert_eq!(width_of("UCHAR"), width_of("UINT8"));
    assert_eq!(width_of("USHORT"), width_of("UINT16"));
    for name in ["ULONGLONG", "DWORDLONG", "ULONG64", "DWORD64"] {
        assert_eq!(width_of(name), width_of("UINT64"), "{name}");
    }
    for name in ["LONGLONG", "LONG64"] {
        assert_eq!(width_of(name), width_of("INT64"), "{name}");
    }
}

#[test]
fn native_aliases_follow_the_pointer_width() {
    let pointer = size_of::<*const u8>();
    assert_eq!(NATIVE_SIZE, pointer);
    assert_eq!(size_of::<ACPI_NATIVE_INT>(), pointer);
    assert_eq!(size_of::<ACPI_SIZE>(), pointer);
    assert_eq!(size_of::<ACPI_IO_ADDRESS>(), pointer);
    assert_eq!(size_of::<ACPI_PHYSICAL_ADDRESS>(), pointer);
    assert_eq!(ACPI_MACHINE_WIDTH as usize, pointer * 8);

    #[cfg(target_pointer_width = "64")]
    assert_eq!(NATIVE_SIZE, 8);
    #[cfg(target_pointer_width = "32")]
    assert_eq!(NATIVE_SIZE, 4);
}

#[test]
fn wrong_width_is_reported() {
    // UINT16 declared as 32 bits: what a bad port would write.
    let wrong = AliasWidth::of::<u16>("UINT16", 32, Signedness::Unsigned);
    assert_eq!(
        check_width(&wrong),
        Err(WidthMismatch::Width {
            name: "UINT16",
            declared: 32,
            actual: 16,
        })
    );
}

#[test]
fn wrong_signedness_is_reported() {
    let wrong = AliasWidth::of::<i32>("UINT32", 32, Signedness::Unsigned);
    assert_eq!(
        check_width(&wrong),
        Err(WidthMismatch::Signedness {
            name: "UINT32",
            declared: Signedness::Unsigned,
        })
    );

    let char_like = AliasWidth::of::<u8>("CHAR", 8, Signedness::Host);
    assert_eq!(check_width(&char_like), Ok(()));
}

#[test]
fn mismatch_message_names_the_alias() {
    let wrong = AliasWidth::of::<u64>("UINT32", 32, Signedness::Unsigned);
    let message = check_width(&wrong).unwrap_err().to_string();
    assert!(message.contains("UINT32"), "{message}");
    assert!(message.contains("64"), "{message}");
}
