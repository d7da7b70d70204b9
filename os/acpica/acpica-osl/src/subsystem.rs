//! Bringing the ACPICA subsystem up and down.

use acpica_sys::{
    ACPI_NO_ACPI_ENABLE, ACPI_NO_DEVICE_INIT, ACPI_NO_EVENT_INIT, ACPI_NO_FACS_INIT, ACPI_NO_HANDLER_INIT,
    ACPI_NO_HARDWARE_INIT, ACPI_NO_OBJECT_INIT, AcpiEnableSubsystem, AcpiInitializeObjects, AcpiInitializeSubsystem,
    AcpiInitializeTables, AcpiLoadTables, AcpiTerminate, BOOLEAN,
};
use bitfield_struct::bitfield;

use crate::error::{AcpicaError, check};
use crate::services::services;

/// The `ACPI_NO_*` flags of `AcpiEnableSubsystem` and `AcpiInitializeObjects`.
///
/// All clear means full initialization.
#[bitfield(u32)]
#[derive(PartialEq, Eq)]
pub struct InitFlags {
    /// Do not load the FACS (bit 0).
    pub no_facs_init: bool,
    /// Do not switch the platform into ACPI mode (bit 1).
    pub no_acpi_enable: bool,
    /// Do not initialize the ACPI hardware (bit 2).
    pub no_hardware_init: bool,
    /// Do not enable fixed and general-purpose events (bit 3).
    pub no_event_init: bool,
    /// Do not install the default address space handlers (bit 4).
    pub no_handler_init: bool,
    /// Do not run `_STA` and `_INI` on devices (bit 5).
    pub no_device_init: bool,
    /// Do not initialize operation regions and buffer fields (bit 6).
    pub no_object_init: bool,
    #[bits(25)]
    __: u32,
}

const _: () = {
    assert!(InitFlags::new().with_no_facs_init(true).into_bits() == ACPI_NO_FACS_INIT);
    assert!(InitFlags::new().with_no_acpi_enable(true).into_bits() == ACPI_NO_ACPI_ENABLE);
    assert!(InitFlags::new().with_no_hardware_init(true).into_bits() == ACPI_NO_HARDWARE_INIT);
    assert!(InitFlags::new().with_no_event_init(true).into_bits() == ACPI_NO_EVENT_INIT);
    assert!(InitFlags::new().with_no_handler_init(true).into_bits() == ACPI_NO_HANDLER_INIT);
    assert!(InitFlags::new().with_no_device_init(true).into_bits() == ACPI_NO_DEVICE_INIT);
    assert!(InitFlags::new().with_no_object_init(true).into_bits() == ACPI_NO_OBJECT_INIT);
};

/// How [`initialize`] brings the subsystem up.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InitOptions {
    pub flags: InitFlags,
    /// Entries of the initial root table list.
    pub initial_table_count: u32,
    /// Whether ACPICA may grow the root table list.
    pub allow_table_resize: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            flags: InitFlags::new(),
            initial_table_count: 16,
            allow_table_resize: true,
        }
    }
}

/// Initializes ACPICA and loads the namespace.
///
/// Runs `AcpiInitializeSubsystem`, `AcpiInitializeTables`, `AcpiLoadTables`,
/// `AcpiEnableSubsystem` and `AcpiInitializeObjects` in that order and stops
/// at the first failure.
///
/// # Errors
/// [`AcpicaError::ServicesNotRegistered`] if [`register`](crate::register)
/// was not called, otherwise [`AcpicaError::Status`] naming the step that
/// failed.
pub fn initialize(options: &InitOptions) -> Result<(), AcpicaError> {
    if services().is_none() {
        return Err(AcpicaError::ServicesNotRegistered);
    }

    log::trace!("AcpiInitializeSubsystem");
    // SAFETY: services are registered; this is the first ACPICA call.
    check("AcpiInitializeSubsystem", unsafe { AcpiInitializeSubsystem() })?;

    log::trace!(
        "AcpiInitializeTables: {} entries, resize {}",
        options.initial_table_count,
        options.allow_table_resize
    );
    // SAFETY: null storage lets ACPICA allocate the root table list.
    check("AcpiInitializeTables", unsafe {
        AcpiInitializeTables(
            core::ptr::null_mut(),
            options.initial_table_count,
            BOOLEAN::from(options.allow_table_resize),
        )
    })?;

    log::trace!("AcpiLoadTables");
    // SAFETY: the root table list is initialized.
    check("AcpiLoadTables", unsafe { AcpiLoadTables() })?;

    let flags = options.flags.into_bits();
    log::trace!("AcpiEnableSubsystem: flags {flags:#x}");
    // SAFETY: tables are loaded.
    check("AcpiEnableSubsystem", unsafe { AcpiEnableSubsystem(flags) })?;

    log::trace!("AcpiInitializeObjects: flags {flags:#x}");
    // SAFETY: the subsystem is enabled.
    check("AcpiInitializeObjects", unsafe { AcpiInitializeObjects(flags) })?;

    log::debug!("ACPICA initialized");
    Ok(())
}

/// Shuts ACPICA down.
///
/// # Errors
/// [`AcpicaError::Status`] if `AcpiTerminate` fails.
pub fn terminate() -> Result<(), AcpicaError> {
    log::trace!("AcpiTerminate");
    // SAFETY: AcpiTerminate tolerates an uninitialized subsystem.
    check("AcpiTerminate", unsafe { AcpiTerminate() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_initialize_everything() {
        let options = InitOptions::default();
        assert_eq!(options.flags.into_bits(), acpica_sys::ACPI_FULL_INITIALIZATION);
        assert_eq!(options.initial_table_count, 16);
        assert!(options.allow_table_resize);
    }

    #[test]
    fn flags_combine() {
        let flags = InitFlags::new().with_no_acpi_enable(true).with_no_device_init(true);
        assert_eq!(flags.into_bits(), ACPI_NO_ACPI_ENABLE | ACPI_NO_DEVICE_INIT);
        assert!(InitFlags::from_bits(ACPI_NO_EVENT_INIT).no_event_init());
    }
}
