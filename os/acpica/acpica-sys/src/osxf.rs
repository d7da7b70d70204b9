//! # ACPICA OS interface (`acpiosxf.h`)
//!
//! The functions ACPICA imports from the host. They are not declared as
//! imports here; the host exports them (see the `acpica-osl` crate). This
//! module fixes their signatures as function-pointer types so an export can be
//! checked against its declaration at compile time:
//!
//! ```
//! use acpica_sys::{AcpiOsGetTimerFn, UINT64};
//!
//! unsafe extern "C" fn AcpiOsGetTimer() -> UINT64 {
//!     0
//! }
//!
//! const _: AcpiOsGetTimerFn = AcpiOsGetTimer;
//! ```

use core::ffi::{c_char, c_void};

use crate::platform::{ACPI_IO_ADDRESS, ACPI_PHYSICAL_ADDRESS, ACPI_SIZE, UINT8, UINT16, UINT32, UINT64, va_list};
use crate::types::{
    ACPI_CPU_FLAGS, ACPI_MUTEX, ACPI_OSD_EXEC_CALLBACK, ACPI_OSD_HANDLER, ACPI_PCI_ID, ACPI_PREDEFINED_NAMES,
    ACPI_SEMAPHORE, ACPI_SPINLOCK, ACPI_STATUS, ACPI_STRING, ACPI_TABLE_HEADER, ACPI_THREAD_ID, BOOLEAN,
};

/// Kind of work queued through `AcpiOsExecute`.
pub type ACPI_EXECUTE_TYPE = UINT32;

pub const OSL_GLOBAL_LOCK_HANDLER: ACPI_EXECUTE_TYPE = 0;
pub const OSL_NOTIFY_HANDLER: ACPI_EXECUTE_TYPE = 1;
pub const OSL_GPE_HANDLER: ACPI_EXECUTE_TYPE = 2;
pub const OSL_DEBUGGER_MAIN_THREAD: ACPI_EXECUTE_TYPE = 3;
pub const OSL_DEBUGGER_EXEC_THREAD: ACPI_EXECUTE_TYPE = 4;
pub const OSL_EC_POLL_HANDLER: ACPI_EXECUTE_TYPE = 5;
pub const OSL_EC_BURST_HANDLER: ACPI_EXECUTE_TYPE = 6;

/// `AcpiOsSignal` functions.
pub const ACPI_SIGNAL_FATAL: UINT32 = 0;
pub const ACPI_SIGNAL_BREAKPOINT: UINT32 = 1;

/// Payload of `ACPI_SIGNAL_FATAL`, from the AML `Fatal` operator.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ACPI_SIGNAL_FATAL_INFO {
    pub Type: UINT32,
    pub Code: UINT32,
    pub Argument: UINT32,
}

/// Interrupt handler return values.
pub const ACPI_INTERRUPT_NOT_HANDLED: UINT32 = 0x00;
pub const ACPI_INTERRUPT_HANDLED: UINT32 = 0x01;

/// Semaphore and mutex timeouts, in milliseconds.
pub const ACPI_DO_NOT_WAIT: UINT16 = 0;
pub const ACPI_WAIT_FOREVER: UINT16 = 0xFFFF;

/// `MaxUnits` of a semaphore without an upper bound.
pub const ACPI_NO_UNIT_LIMIT: UINT32 = UINT32::MAX;

/// Interpreter walk state, opaque to the host.
#[repr(C)]
pub struct ACPI_WALK_STATE {
    _private: [u8; 0],
}

/// Parse tree node, opaque to the host.
#[repr(C)]
pub struct ACPI_PARSE_OBJECT {
    _private: [u8; 0],
}

// Lifecycle
pub type AcpiOsInitializeFn = acpi_system_fn!(fn() -> ACPI_STATUS);
pub type AcpiOsTerminateFn = acpi_system_fn!(fn() -> ACPI_STATUS);
pub type AcpiOsGetRootPointerFn = acpi_system_fn!(fn() -> ACPI_PHYSICAL_ADDRESS);

// Overrides
pub type AcpiOsPredefinedOverrideFn =
    acpi_system_fn!(fn(*const ACPI_PREDEFINED_NAMES, *mut ACPI_STRING) -> ACPI_STATUS);
pub type AcpiOsTableOverrideFn =
    acpi_system_fn!(fn(*mut ACPI_TABLE_HEADER, *mut *mut ACPI_TABLE_HEADER) -> ACPI_STATUS);
pub type AcpiOsPhysicalTableOverrideFn =
    acpi_system_fn!(fn(*mut ACPI_TABLE_HEADER, *mut ACPI_PHYSICAL_ADDRESS, *mut UINT32) -> ACPI_STATUS);

// Spinlocks
pub type AcpiOsCreateLockFn = acpi_system_fn!(fn(*mut ACPI_SPINLOCK) -> ACPI_STATUS);
pub type AcpiOsDeleteLockFn = acpi_system_fn!(fn(ACPI_SPINLOCK));
pub type AcpiOsAcquireLockFn = acpi_system_fn!(fn(ACPI_SPINLOCK) -> ACPI_CPU_FLAGS);
pub type AcpiOsReleaseLockFn = acpi_system_fn!(fn(ACPI_SPINLOCK, ACPI_CPU_FLAGS));

// Semaphores
pub type AcpiOsCreateSemaphoreFn = acpi_system_fn!(fn(UINT32, UINT32, *mut ACPI_SEMAPHORE) -> ACPI_STATUS);
pub type AcpiOsDeleteSemaphoreFn = acpi_system_fn!(fn(ACPI_SEMAPHORE) -> ACPI_STATUS);
pub type AcpiOsWaitSemaphoreFn = acpi_system_fn!(fn(ACPI_SEMAPHORE, UINT32, UINT16) -> ACPI_STATUS);
pub type AcpiOsSignalSemaphoreFn = acpi_system_fn!(fn(ACPI_SEMAPHORE, UINT32) -> ACPI_STATUS);

// Mutexes
pub type AcpiOsCreateMutexFn = acpi_system_fn!(fn(*mut ACPI_MUTEX) -> ACPI_STATUS);
pub type AcpiOsDeleteMutexFn = acpi_system_fn!(fn(ACPI_MUTEX));
pub type AcpiOsAcquireMutexFn = acpi_system_fn!(fn(ACPI_MUTEX, UINT16) -> ACPI_STATUS);
pub type AcpiOsReleaseMutexFn = acpi_system_fn!(fn(ACPI_MUTEX));

// Memory
pub type AcpiOsAllocateFn = acpi_system_fn!(fn(ACPI_SIZE) -> *mut c_void);
pub type AcpiOsFreeFn = acpi_system_fn!(fn(*mut c_void));
pub type AcpiOsMapMemoryFn = acpi_system_fn!(fn(ACPI_PHYSICAL_ADDRESS, ACPI_SIZE) -> *mut c_void);
pub type AcpiOsUnmapMemoryFn = acpi_system_fn!(fn(*mut c_void, ACPI_SIZE));
pub type AcpiOsGetPhysicalAddressFn = acpi_system_fn!(fn(*mut c_void, *mut ACPI_PHYSICAL_ADDRESS) -> ACPI_STATUS);
pub type AcpiOsReadableFn = acpi_system_fn!(fn(*mut c_void, ACPI_SIZE) -> BOOLEAN);
pub type AcpiOsWritableFn = acpi_system_fn!(fn(*mut c_void, ACPI_SIZE) -> BOOLEAN);

// Interrupts
pub type AcpiOsInstallInterruptHandlerFn =
    acpi_system_fn!(fn(UINT32, ACPI_OSD_HANDLER, *mut c_void) -> ACPI_STATUS);
pub type AcpiOsRemoveInterruptHandlerFn = acpi_system_fn!(fn(UINT32, ACPI_OSD_HANDLER) -> ACPI_STATUS);

// Threads and timing
pub type AcpiOsGetThreadIdFn = acpi_system_fn!(fn() -> ACPI_THREAD_ID);
pub type AcpiOsExecuteFn = acpi_system_fn!(fn(ACPI_EXECUTE_TYPE, ACPI_OSD_EXEC_CALLBACK, *mut c_void) -> ACPI_STATUS);
pub type AcpiOsWaitEventsCompleteFn = acpi_system_fn!(fn());
pub type AcpiOsSleepFn = acpi_system_fn!(fn(UINT64));
pub type AcpiOsStallFn = acpi_system_fn!(fn(UINT32));
pub type AcpiOsGetTimerFn = acpi_system_fn!(fn() -> UINT64);

// Hardware access
pub type AcpiOsReadPortFn = acpi_system_fn!(fn(ACPI_IO_ADDRESS, *mut UINT32, UINT32) -> ACPI_STATUS);
pub type AcpiOsWritePortFn = acpi_system_fn!(fn(ACPI_IO_ADDRESS, UINT32, UINT32) -> ACPI_STATUS);
pub type AcpiOsReadMemoryFn = acpi_system_fn!(fn(ACPI_PHYSICAL_ADDRESS, *mut UINT64, UINT32) -> ACPI_STATUS);
pub type AcpiOsWriteMemoryFn = acpi_system_fn!(fn(ACPI_PHYSICAL_ADDRESS, UINT64, UINT32) -> ACPI_STATUS);
pub type AcpiOsReadPciConfigurationFn =
    acpi_system_fn!(fn(*mut ACPI_PCI_ID, UINT32, *mut UINT64, UINT32) -> ACPI_STATUS);
pub type AcpiOsWritePciConfigurationFn = acpi_system_fn!(fn(*mut ACPI_PCI_ID, UINT32, UINT64, UINT32) -> ACPI_STATUS);

// Miscellaneous
pub type AcpiOsSignalFn = acpi_system_fn!(fn(UINT32, *mut c_void) -> ACPI_STATUS);
pub type AcpiOsEnterSleepFn = acpi_system_fn!(fn(UINT8, UINT32, UINT32) -> ACPI_STATUS);
pub type AcpiOsRedirectOutputFn = acpi_system_fn!(fn(*mut c_void));
// Higher-ranked over the argument list's lifetime; not expressible through `acpi_system_fn!`.
pub type AcpiOsVprintfFn = for<'a> unsafe extern "C" fn(*const c_char, va_list<'a>);

// Debugger
pub type AcpiOsGetLineFn = acpi_system_fn!(fn(*mut c_char, UINT32, *mut UINT32) -> ACPI_STATUS);
pub type AcpiOsInitializeDebuggerFn = acpi_system_fn!(fn() -> ACPI_STATUS);
pub type AcpiOsTerminateDebuggerFn = acpi_system_fn!(fn());
pub type AcpiOsWaitCommandReadyFn = acpi_system_fn!(fn() -> ACPI_STATUS);
pub type AcpiOsNotifyCommandCompleteFn = acpi_system_fn!(fn() -> ACPI_STATUS);
pub type AcpiDmDisassembleFn = acpi_system_fn!(fn(*mut ACPI_WALK_STATE, *mut ACPI_PARSE_OBJECT, UINT32));
pub type AcpiDmParseDeferredOpsFn = acpi_system_fn!(fn(*mut ACPI_PARSE_OBJECT));
