//! # ACPICA external interface (`acpixf.h`)
//!
//! The functions ACPICA exports to the host. Each one belongs to a stub
//! category:
//!
//! * With feature `native`, functions are real imports from the linked ACPICA
//!   library.
//! * Without it, every function is generated from the stub template of its
//!   category and returns that category's sentinel.
//! * Hardware-dependent functions are always stubs returning
//!   `AE_NOT_CONFIGURED` when feature `reduced-hardware` is enabled.
//!
//! Call sites are the same in every configuration: all functions are
//! `unsafe fn`.
//!
//! Variadic diagnostics (`AcpiError`, `AcpiWarning`, `AcpiInfo`) and ACPICA's
//! global variables have no stub form and exist only with `native`.

use core::ffi::{c_char, c_void};

use crate::platform::{ACPI_PHYSICAL_ADDRESS, ACPI_SIZE, UINT8, UINT16, UINT32};
use crate::restype::ACPI_WALK_RESOURCE_CALLBACK;
use crate::types::{
    ACPI_ADR_SPACE_TYPE, ACPI_BUFFER, ACPI_DEVICE_INFO, ACPI_EVENT_HANDLER, ACPI_EVENT_STATUS, ACPI_HANDLE,
    ACPI_INIT_HANDLER, ACPI_INTERFACE_HANDLER, ACPI_NOTIFY_HANDLER, ACPI_OBJECT_HANDLER, ACPI_OBJECT_LIST,
    ACPI_OBJECT_TYPE, ACPI_STATUS, ACPI_STRING, ACPI_TABLE_DESC, ACPI_TABLE_HANDLER, ACPI_TABLE_HEADER,
    ACPI_WALK_CALLBACK, BOOLEAN,
};

/// Expands a group of prototypes into stubs of one category.
macro_rules! acpi_interface_stubs {
    (status { $( $(#[$meta:meta])* fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty; )* }) => {
        $( acpi_external_return_status! { $(#[$meta])* pub fn $name($($arg: $ty),*) -> $ret } )*
    };
    (ok { $( $(#[$meta:meta])* fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty; )* }) => {
        $( acpi_external_return_ok! { $(#[$meta])* pub fn $name($($arg: $ty),*) -> $ret } )*
    };
    (void { $( $(#[$meta:meta])* fn $name:ident($($arg:ident: $ty:ty),* $(,)?); )* }) => {
        $( acpi_external_return_void! { $(#[$meta])* pub fn $name($($arg: $ty),*) } )*
    };
    (uint32 { $( $(#[$meta:meta])* fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty; )* }) => {
        $( acpi_external_return_uint32! { $(#[$meta])* pub fn $name($($arg: $ty),*) -> $ret } )*
    };
    (ptr { $( $(#[$meta:meta])* fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty; )* }) => {
        $( acpi_external_return_ptr! { $(#[$meta])* pub fn $name($($arg: $ty),*) -> $ret } )*
    };
}

/// Declares a group of ACPICA functions of one category.
#[cfg(feature = "native")]
macro_rules! acpi_interface {
    (hw_status { $($body:tt)* }) => {
        #[cfg(feature = "reduced-hardware")]
        acpi_interface_stubs! { status { $($body)* } }
        #[cfg(not(feature = "reduced-hardware"))]
        acpi_interface! { status { $($body)* } }
    };
    ($kind:ident { $( $(#[$meta:meta])* fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?; )* }) => {
        acpi_system_xface! {
            $( $(#[$meta])* pub fn $name($($arg: $ty),*) $(-> $ret)?; )*
        }
    };
}

/// Declares a group of ACPICA functions of one category.
#[cfg(not(feature = "native"))]
macro_rules! acpi_interface {
    (hw_status { $($body:tt)* }) => {
        acpi_interface_stubs! { status { $($body)* } }
    };
    ($kind:ident { $($body:tt)* }) => {
        acpi_interface_stubs! { $kind { $($body)* } }
    };
}

// ---------------------------------------------------------------------------
// Initialization and control
// ---------------------------------------------------------------------------

acpi_interface! {
    status {
        /// Initializes all global state; first call into ACPICA.
        fn AcpiInitializeSubsystem() -> ACPI_STATUS;
        /// Enables the hardware and event handling, per the `ACPI_NO_*` flags.
        fn AcpiEnableSubsystem(Flags: UINT32) -> ACPI_STATUS;
        /// Runs `_INI` and `_STA` on the namespace, per the `ACPI_NO_*` flags.
        fn AcpiInitializeObjects(Flags: UINT32) -> ACPI_STATUS;
        /// Shuts the subsystem down and releases its resources.
        fn AcpiTerminate() -> ACPI_STATUS;
        fn AcpiSubsystemStatus() -> ACPI_STATUS;
        fn AcpiInstallInterface(InterfaceName: ACPI_STRING) -> ACPI_STATUS;
        fn AcpiRemoveInterface(InterfaceName: ACPI_STRING) -> ACPI_STATUS;
        fn AcpiInstallInterfaceHandler(Handler: ACPI_INTERFACE_HANDLER) -> ACPI_STATUS;
        fn AcpiInstallInitializationHandler(Handler: ACPI_INIT_HANDLER, Function: UINT32) -> ACPI_STATUS;
    }
}

acpi_interface! {
    ok {
        /// Enables or disables groups of `_OSI` interface strings.
        fn AcpiUpdateInterfaces(Action: UINT8) -> ACPI_STATUS;
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

acpi_interface! {
    status {
        /// Builds the root table list, optionally in caller-provided storage.
        fn AcpiInitializeTables(
            InitialStorage: *mut ACPI_TABLE_DESC,
            InitialTableCount: UINT32,
            AllowResize: BOOLEAN,
        ) -> ACPI_STATUS;
        /// Scans legacy memory for the RSDP.
        fn AcpiFindRootPointer(RsdpAddress: *mut ACPI_PHYSICAL_ADDRESS) -> ACPI_STATUS;
        /// Loads the DSDT and SSDTs into the namespace.
        fn AcpiLoadTables() -> ACPI_STATUS;
        fn AcpiLoadTable(Table: *mut ACPI_TABLE_HEADER, TableIdx: *mut UINT32) -> ACPI_STATUS;
        fn AcpiGetTableHeader(Signature: ACPI_STRING, Instance: UINT32, OutTableHeader: *mut ACPI_TABLE_HEADER) -> ACPI_STATUS;
        /// Maps a table; release it with `AcpiPutTable`.
        fn AcpiGetTable(Signature: ACPI_STRING, Instance: UINT32, OutTable: *mut *mut ACPI_TABLE_HEADER) -> ACPI_STATUS;
        fn AcpiGetTableByIndex(TableIndex: UINT32, OutTable: *mut *mut ACPI_TABLE_HEADER) -> ACPI_STATUS;
        fn AcpiInstallTableHandler(Handler: ACPI_TABLE_HANDLER, Context: *mut c_void) -> ACPI_STATUS;
        fn AcpiRemoveTableHandler(Handler: ACPI_TABLE_HANDLER) -> ACPI_STATUS;
    }
}

acpi_interface! {
    ok {
        /// Moves the root table list into dynamic memory.
        fn AcpiReallocateRootTable() -> ACPI_STATUS;
    }
}

acpi_interface! {
    void {
        /// Releases a table obtained with `AcpiGetTable`.
        fn AcpiPutTable(Table: *mut ACPI_TABLE_HEADER);
    }
}

// ---------------------------------------------------------------------------
// Namespace
// ---------------------------------------------------------------------------

acpi_interface! {
    status {
        /// Walks the namespace below `StartObject`, calling the callbacks per
        /// object of `Type`.
        fn AcpiWalkNamespace(
            Type: ACPI_OBJECT_TYPE,
            StartObject: ACPI_HANDLE,
            MaxDepth: UINT32,
            DescendingCallback: ACPI_WALK_CALLBACK,
            AscendingCallback: ACPI_WALK_CALLBACK,
            Context: *mut c_void,
            ReturnValue: *mut *mut c_void,
        ) -> ACPI_STATUS;
        fn AcpiGetDevices(
            HID: *mut c_char,
            UserFunction: ACPI_WALK_CALLBACK,
            Context: *mut c_void,
            ReturnValue: *mut *mut c_void,
        ) -> ACPI_STATUS;
        fn AcpiGetName(Object: ACPI_HANDLE, NameType: UINT32, RetPathPtr: *mut ACPI_BUFFER) -> ACPI_STATUS;
        fn AcpiGetHandle(Parent: ACPI_HANDLE, Pathname: ACPI_STRING, RetHandle: *mut ACPI_HANDLE) -> ACPI_STATUS;
        fn AcpiAttachData(Object: ACPI_HANDLE, Handler: ACPI_OBJECT_HANDLER, Data: *mut c_void) -> ACPI_STATUS;
        fn AcpiDetachData(Object: ACPI_HANDLE, Handler: ACPI_OBJECT_HANDLER) -> ACPI_STATUS;
        fn AcpiGetData(Object: ACPI_HANDLE, Handler: ACPI_OBJECT_HANDLER, Data: *mut *mut c_void) -> ACPI_STATUS;
        fn AcpiEvaluateObject(
            Object: ACPI_HANDLE,
            Pathname: ACPI_STRING,
            ParameterObjects: *mut ACPI_OBJECT_LIST,
            ReturnObjectBuffer: *mut ACPI_BUFFER,
        ) -> ACPI_STATUS;
        fn AcpiEvaluateObjectTyped(
            Object: ACPI_HANDLE,
            Pathname: ACPI_STRING,
            ExternalParams: *mut ACPI_OBJECT_LIST,
            ReturnBuffer: *mut ACPI_BUFFER,
            ReturnType: ACPI_OBJECT_TYPE,
        ) -> ACPI_STATUS;
        /// Returns an `ACPI_DEVICE_INFO` allocated with `AcpiOsAllocate`.
        fn AcpiGetObjectInfo(Object: ACPI_HANDLE, ReturnBuffer: *mut *mut ACPI_DEVICE_INFO) -> ACPI_STATUS;
        fn AcpiGetNextObject(
            Type: ACPI_OBJECT_TYPE,
            Parent: ACPI_HANDLE,
            Child: ACPI_HANDLE,
            OutHandle: *mut ACPI_HANDLE,
        ) -> ACPI_STATUS;
        fn AcpiGetType(Object: ACPI_HANDLE, OutType: *mut ACPI_OBJECT_TYPE) -> ACPI_STATUS;
        fn AcpiGetParent(Object: ACPI_HANDLE, OutHandle: *mut ACPI_HANDLE) -> ACPI_STATUS;
    }
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

acpi_interface! {
    status {
        /// Evaluates `_CRS` into a list of `ACPI_RESOURCE` records.
        fn AcpiGetCurrentResources(Device: ACPI_HANDLE, RetBuffer: *mut ACPI_BUFFER) -> ACPI_STATUS;
        /// Evaluates `_PRS` into a list of `ACPI_RESOURCE` records.
        fn AcpiGetPossibleResources(Device: ACPI_HANDLE, RetBuffer: *mut ACPI_BUFFER) -> ACPI_STATUS;
        fn AcpiWalkResources(
            Device: ACPI_HANDLE,
            Name: *mut c_char,
            UserFunction: ACPI_WALK_RESOURCE_CALLBACK,
            Context: *mut c_void,
        ) -> ACPI_STATUS;
        /// Evaluates `_PRT` into a list of `ACPI_PCI_ROUTING_TABLE` entries.
        fn AcpiGetIrqRoutingTable(Device: ACPI_HANDLE, RetBuffer: *mut ACPI_BUFFER) -> ACPI_STATUS;
    }
}

// ---------------------------------------------------------------------------
// Events, sleep and hardware
// ---------------------------------------------------------------------------

acpi_interface! {
    hw_status {
        /// Switches the platform into ACPI mode.
        fn AcpiEnable() -> ACPI_STATUS;
        /// Switches the platform back into legacy mode.
        fn AcpiDisable() -> ACPI_STATUS;
        fn AcpiEnterSleepStateS4bios() -> ACPI_STATUS;
        fn AcpiSetFirmwareWakingVector(
            PhysicalAddress: ACPI_PHYSICAL_ADDRESS,
            PhysicalAddress64: ACPI_PHYSICAL_ADDRESS,
        ) -> ACPI_STATUS;
        fn AcpiEnableEvent(Event: UINT32, Flags: UINT32) -> ACPI_STATUS;
        fn AcpiDisableEvent(Event: UINT32, Flags: UINT32) -> ACPI_STATUS;
        fn AcpiClearEvent(Event: UINT32) -> ACPI_STATUS;
        fn AcpiGetEventStatus(Event: UINT32, EventStatus: *mut ACPI_EVENT_STATUS) -> ACPI_STATUS;
        fn AcpiInstallFixedEventHandler(AcpiEvent: UINT32, Handler: ACPI_EVENT_HANDLER, Context: *mut c_void) -> ACPI_STATUS;
        fn AcpiRemoveFixedEventHandler(AcpiEvent: UINT32, Handler: ACPI_EVENT_HANDLER) -> ACPI_STATUS;
        fn AcpiEnableGpe(GpeDevice: ACPI_HANDLE, GpeNumber: UINT32) -> ACPI_STATUS;
        fn AcpiDisableGpe(GpeDevice: ACPI_HANDLE, GpeNumber: UINT32) -> ACPI_STATUS;
        fn AcpiUpdateAllGpes() -> ACPI_STATUS;
        fn AcpiEnableAllRuntimeGpes() -> ACPI_STATUS;
        fn AcpiAcquireGlobalLock(Timeout: UINT16, Handle: *mut UINT32) -> ACPI_STATUS;
        fn AcpiReleaseGlobalLock(Handle: UINT32) -> ACPI_STATUS;
    }
}

acpi_interface! {
    status {
        fn AcpiReset() -> ACPI_STATUS;
        fn AcpiEnterSleepStatePrep(SleepState: UINT8) -> ACPI_STATUS;
        fn AcpiEnterSleepState(SleepState: UINT8) -> ACPI_STATUS;
        fn AcpiLeaveSleepStatePrep(SleepState: UINT8) -> ACPI_STATUS;
        fn AcpiLeaveSleepState(SleepState: UINT8) -> ACPI_STATUS;
        fn AcpiInstallNotifyHandler(
            Device: ACPI_HANDLE,
            HandlerType: UINT32,
            Handler: ACPI_NOTIFY_HANDLER,
            Context: *mut c_void,
        ) -> ACPI_STATUS;
        fn AcpiRemoveNotifyHandler(Device: ACPI_HANDLE, HandlerType: UINT32, Handler: ACPI_NOTIFY_HANDLER) -> ACPI_STATUS;
    }
}

// ---------------------------------------------------------------------------
// Utilities
// ---------------------------------------------------------------------------

acpi_interface! {
    ptr {
        /// ACPICA's name for an exception code, as a static C string.
        fn AcpiFormatException(Exception: ACPI_STATUS) -> *const c_char;
    }
}

acpi_interface! {
    uint32 {
        /// Number of operation regions overlapping the given range.
        fn AcpiCheckAddressRange(
            SpaceId: ACPI_ADR_SPACE_TYPE,
            Address: ACPI_PHYSICAL_ADDRESS,
            Length: ACPI_SIZE,
            Warn: BOOLEAN,
        ) -> UINT32;
    }
}

#[cfg(feature = "native")]
acpi_internal_var_xface! {
    pub fn AcpiError(ModuleName: *const c_char, LineNumber: UINT32, Format: *const c_char, ...);
    pub fn AcpiWarning(ModuleName: *const c_char, LineNumber: UINT32, Format: *const c_char, ...);
    pub fn AcpiInfo(Format: *const c_char, ...);
}

#[cfg(feature = "native")]
acpi_system_xface! {
    /// Debug output level mask (`ACPI_LV_*`).
    pub static mut AcpiDbgLevel: UINT32;
    /// Debug output component mask.
    pub static mut AcpiDbgLayer: UINT32;
    pub static mut AcpiCurrentGpeCount: UINT32;
    pub static mut AcpiGbl_SystemAwakeAndRunning: BOOLEAN;
}
