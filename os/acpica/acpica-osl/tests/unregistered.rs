//! Nothing in this binary registers OS services.

use acpica_osl::osl::{
    AcpiOsAcquireLock, AcpiOsAllocate, AcpiOsCreateSemaphore, AcpiOsGetRootPointer, AcpiOsGetThreadId,
    AcpiOsGetTimer, AcpiOsInitialize, AcpiOsMapMemory, AcpiOsReadable, AcpiOsSleep, AcpiOsTerminate,
};
use acpica_osl::{AcpicaError, InitOptions, services, subsystem};
use acpica_sys::{AE_NOT_CONFIGURED, FALSE};

#[test]
fn status_functions_report_not_configured() {
    let mut handle = std::ptr::null_mut();
    unsafe {
        assert_eq!(AcpiOsInitialize(), AE_NOT_CONFIGURED);
        assert_eq!(AcpiOsTerminate(), AE_NOT_CONFIGURED);
        assert_eq!(AcpiOsCreateSemaphore(1, 1, &raw mut handle), AE_NOT_CONFIGURED);
    }
    assert!(handle.is_null());
}

#[test]
fn value_functions_return_empty_values() {
    unsafe {
        assert!(AcpiOsAllocate(64).is_null());
        assert!(AcpiOsMapMemory(0xE_0000, 36).is_null());
        assert_eq!(AcpiOsGetRootPointer(), 0);
        assert_eq!(AcpiOsGetTimer(), 0);
        assert_eq!(AcpiOsAcquireLock(std::ptr::null_mut()), 0);
        assert_eq!(AcpiOsReadable(std::ptr::null_mut(), 1), FALSE);
        AcpiOsSleep(10);
    }
}

#[test]
fn thread_id_is_never_zero() {
    assert_ne!(unsafe { AcpiOsGetThreadId() }, 0);
}

#[test]
fn subsystem_requires_services() {
    assert!(services().is_none());
    assert_eq!(
        subsystem::initialize(&InitOptions::default()),
        Err(AcpicaError::ServicesNotRegistered)
    );
}
