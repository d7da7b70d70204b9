//! # ACPICA data types (`actypes.h`)
//!
//! Scalar types, handles, common structures and callback signatures shared by
//! the external interface ([`xface`](crate::xface)) and the OS interface
//! ([`osxf`](crate::osxf)). Only [`platform`](crate::platform) definitions are
//! used here.
//!
//! Structures that cross the FFI boundary by value or by array carry a
//! compile-time size assertion for 64-bit targets.

use core::ffi::{c_char, c_void};
use core::mem::size_of;

use crate::platform::{ACPI_IO_ADDRESS, ACPI_PHYSICAL_ADDRESS, ACPI_SIZE, CHAR, UINT8, UINT16, UINT32, UINT64};

pub type BOOLEAN = UINT8;
pub const TRUE: BOOLEAN = 1;
pub const FALSE: BOOLEAN = 0;

pub const ACPI_UINT8_MAX: UINT8 = UINT8::MAX;
pub const ACPI_UINT16_MAX: UINT16 = UINT16::MAX;
pub const ACPI_UINT32_MAX: UINT32 = UINT32::MAX;
pub const ACPI_UINT64_MAX: UINT64 = UINT64::MAX;

/// Exception code returned by nearly every ACPICA function.
///
/// Codes and their decoding live in [`status`](crate::status).
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ACPI_STATUS(pub UINT32);

pub type ACPI_STRING = *mut c_char;
pub type ACPI_HANDLE = *mut c_void;
pub type ACPI_NAME = UINT32;
pub type ACPI_OWNER_ID = UINT16;
pub type ACPI_OBJECT_TYPE = UINT32;
pub type ACPI_EVENT_STATUS = UINT32;
pub type ACPI_ADR_SPACE_TYPE = UINT8;

/// Handle of the namespace root, usable wherever a start object is expected.
pub const ACPI_ROOT_OBJECT: ACPI_HANDLE = core::ptr::without_provenance_mut(usize::MAX);

// OS-layer handle types. With ACPICA's default binary-semaphore mutexes,
// mutex handles are semaphore handles.
pub type ACPI_SPINLOCK = *mut c_void;
pub type ACPI_SEMAPHORE = *mut c_void;
pub type ACPI_MUTEX = ACPI_SEMAPHORE;
pub type ACPI_CPU_FLAGS = ACPI_SIZE;
pub type ACPI_THREAD_ID = UINT64;

// ---------------------------------------------------------------------------
// Buffers
// ---------------------------------------------------------------------------

/// Caller-provided or ACPICA-allocated data buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ACPI_BUFFER {
    pub Length: ACPI_SIZE,
    pub Pointer: *mut c_void,
}

/// `ACPI_BUFFER::Length` asking ACPICA to allocate the buffer with `AcpiOsAllocate`.
pub const ACPI_ALLOCATE_BUFFER: ACPI_SIZE = ACPI_SIZE::MAX;
/// `ACPI_BUFFER::Length` asking ACPICA to allocate the buffer from its local cache.
pub const ACPI_ALLOCATE_LOCAL_BUFFER: ACPI_SIZE = ACPI_SIZE::MAX - 1;

impl ACPI_BUFFER {
    /// A buffer ACPICA fills and allocates itself.
    #[must_use]
    pub const fn allocate() -> Self {
        Self {
            Length: ACPI_ALLOCATE_BUFFER,
            Pointer: core::ptr::null_mut(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

pub const ACPI_NAMESEG_SIZE: usize = 4;
pub const ACPI_OEM_ID_SIZE: usize = 6;
pub const ACPI_OEM_TABLE_ID_SIZE: usize = 8;

/// Common header of every System Description Table.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ACPI_TABLE_HEADER {
    pub Signature: [u8; ACPI_NAMESEG_SIZE],
    pub Length: UINT32,
    pub Revision: UINT8,
    pub Checksum: UINT8,
    pub OemId: [u8; ACPI_OEM_ID_SIZE],
    pub OemTableId: [u8; ACPI_OEM_TABLE_ID_SIZE],
    pub OemRevision: UINT32,
    pub AslCompilerId: [u8; ACPI_NAMESEG_SIZE],
    pub AslCompilerRevision: UINT32,
}

const _: () = assert!(size_of::<ACPI_TABLE_HEADER>() == 36);

/// Four-character name, viewable as an integer or as characters.
#[repr(C)]
#[derive(Copy, Clone)]
pub union ACPI_NAME_UNION {
    pub Integer: UINT32,
    pub Ascii: [CHAR; ACPI_NAMESEG_SIZE],
}

impl Default for ACPI_NAME_UNION {
    fn default() -> Self {
        Self { Integer: 0 }
    }
}

/// Entry of ACPICA's root table list.
///
/// Callers of `AcpiInitializeTables` may provide the initial array of these.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct ACPI_TABLE_DESC {
    pub Address: ACPI_PHYSICAL_ADDRESS,
    pub Pointer: *mut ACPI_TABLE_HEADER,
    pub Length: UINT32,
    pub Signature: ACPI_NAME_UNION,
    pub OwnerId: ACPI_OWNER_ID,
    pub Flags: UINT8,
    pub ValidationCount: UINT16,
}

impl Default for ACPI_TABLE_DESC {
    fn default() -> Self {
        Self {
            Address: 0,
            Pointer: core::ptr::null_mut(),
            Length: 0,
            Signature: ACPI_NAME_UNION::default(),
            OwnerId: 0,
            Flags: 0,
            ValidationCount: 0,
        }
    }
}

#[cfg(target_pointer_width = "64")]
const _: () = assert!(size_of::<ACPI_TABLE_DESC>() == 32);

/// Events reported to an `ACPI_TABLE_HANDLER`.
pub const ACPI_TABLE_EVENT_LOAD: UINT32 = 0x0;
pub const ACPI_TABLE_EVENT_UNLOAD: UINT32 = 0x1;
pub const ACPI_TABLE_EVENT_INSTALL: UINT32 = 0x2;
pub const ACPI_TABLE_EVENT_UNINSTALL: UINT32 = 0x3;

// ---------------------------------------------------------------------------
// PCI
// ---------------------------------------------------------------------------

/// PCI function address used by the OS configuration space accessors.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ACPI_PCI_ID {
    pub Segment: UINT16,
    pub Bus: UINT16,
    pub Device: UINT16,
    pub Function: UINT16,
}

const _: () = assert!(size_of::<ACPI_PCI_ID>() == 8);

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

/// Predefined object passed to `AcpiOsPredefinedOverride`.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ACPI_PREDEFINED_NAMES {
    pub Name: *const c_char,
    pub Type: UINT8,
    pub Val: *mut c_char,
}

// ---------------------------------------------------------------------------
// Namespace objects
// ---------------------------------------------------------------------------

pub const ACPI_TYPE_ANY: ACPI_OBJECT_TYPE = 0x00;
pub const ACPI_TYPE_INTEGER: ACPI_OBJECT_TYPE = 0x01;
pub const ACPI_TYPE_STRING: ACPI_OBJECT_TYPE = 0x02;
pub const ACPI_TYPE_BUFFER: ACPI_OBJECT_TYPE = 0x03;
pub const ACPI_TYPE_PACKAGE: ACPI_OBJECT_TYPE = 0x04;
pub const ACPI_TYPE_FIELD_UNIT: ACPI_OBJECT_TYPE = 0x05;
pub const ACPI_TYPE_DEVICE: ACPI_OBJECT_TYPE = 0x06;
pub const ACPI_TYPE_EVENT: ACPI_OBJECT_TYPE = 0x07;
pub const ACPI_TYPE_METHOD: ACPI_OBJECT_TYPE = 0x08;
pub const ACPI_TYPE_MUTEX: ACPI_OBJECT_TYPE = 0x09;
pub const ACPI_TYPE_REGION: ACPI_OBJECT_TYPE = 0x0A;
pub const ACPI_TYPE_POWER: ACPI_OBJECT_TYPE = 0x0B;
pub const ACPI_TYPE_PROCESSOR: ACPI_OBJECT_TYPE = 0x0C;
pub const ACPI_TYPE_THERMAL: ACPI_OBJECT_TYPE = 0x0D;
pub const ACPI_TYPE_BUFFER_FIELD: ACPI_OBJECT_TYPE = 0x0E;
pub const ACPI_TYPE_DDB_HANDLE: ACPI_OBJECT_TYPE = 0x0F;
pub const ACPI_TYPE_DEBUG_OBJECT: ACPI_OBJECT_TYPE = 0x10;
pub const ACPI_TYPE_EXTERNAL_MAX: ACPI_OBJECT_TYPE = 0x10;

/// Name formats for `AcpiGetName`.
pub const ACPI_FULL_PATHNAME: UINT32 = 0;
pub const ACPI_SINGLE_NAME: UINT32 = 1;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ACPI_OBJECT_INTEGER {
    pub Type: ACPI_OBJECT_TYPE,
    pub Value: UINT64,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ACPI_OBJECT_STRING {
    pub Type: ACPI_OBJECT_TYPE,
    pub Length: UINT32,
    pub Pointer: *mut c_char,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ACPI_OBJECT_BUFFER {
    pub Type: ACPI_OBJECT_TYPE,
    pub Length: UINT32,
    pub Pointer: *mut UINT8,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ACPI_OBJECT_PACKAGE {
    pub Type: ACPI_OBJECT_TYPE,
    pub Count: UINT32,
    pub Elements: *mut ACPI_OBJECT,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ACPI_OBJECT_REFERENCE {
    pub Type: ACPI_OBJECT_TYPE,
    pub ActualType: ACPI_OBJECT_TYPE,
    pub Handle: ACPI_HANDLE,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ACPI_OBJECT_PROCESSOR {
    pub Type: ACPI_OBJECT_TYPE,
    pub ProcId: UINT32,
    pub PblkAddress: ACPI_IO_ADDRESS,
    pub PblkLength: UINT32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ACPI_OBJECT_POWER_RESOURCE {
    pub Type: ACPI_OBJECT_TYPE,
    pub SystemLevel: UINT32,
    pub ResourceOrder: UINT32,
}

/// External representation of a namespace object, as passed to and returned
/// from control method evaluation. Every variant starts with `Type`.
#[repr(C)]
#[derive(Copy, Clone)]
pub union ACPI_OBJECT {
    pub Type: ACPI_OBJECT_TYPE,
    pub Integer: ACPI_OBJECT_INTEGER,
    pub String: ACPI_OBJECT_STRING,
    pub Buffer: ACPI_OBJECT_BUFFER,
    pub Package: ACPI_OBJECT_PACKAGE,
    pub Reference: ACPI_OBJECT_REFERENCE,
    pub Processor: ACPI_OBJECT_PROCESSOR,
    pub PowerResource: ACPI_OBJECT_POWER_RESOURCE,
}

impl ACPI_OBJECT {
    /// An integer object.
    #[must_use]
    pub const fn integer(value: UINT64) -> Self {
        Self {
            Integer: ACPI_OBJECT_INTEGER {
                Type: ACPI_TYPE_INTEGER,
                Value: value,
            },
        }
    }

    /// Type tag shared by every variant.
    #[must_use]
    pub const fn object_type(&self) -> ACPI_OBJECT_TYPE {
        // SAFETY: every variant is `repr(C)` and starts with the type tag.
        unsafe { self.Type }
    }
}

#[cfg(target_pointer_width = "64")]
const _: () = assert!(size_of::<ACPI_OBJECT>() == 24);

/// Argument list for control method evaluation.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ACPI_OBJECT_LIST {
    pub Count: UINT32,
    pub Pointer: *mut ACPI_OBJECT,
}

// ---------------------------------------------------------------------------
// Device information (AcpiGetObjectInfo)
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ACPI_PNP_DEVICE_ID {
    pub Length: UINT32,
    pub String: *mut c_char,
}

/// Variable-length list of compatible ids; `Ids` has `Count` entries.
#[repr(C)]
#[derive(Debug)]
pub struct ACPI_PNP_DEVICE_ID_LIST {
    pub Count: UINT32,
    pub ListSize: UINT32,
    pub Ids: [ACPI_PNP_DEVICE_ID; 0],
}

#[repr(C)]
#[derive(Debug)]
pub struct ACPI_DEVICE_INFO {
    pub InfoSize: UINT32,
    pub Name: UINT32,
    pub Type: ACPI_OBJECT_TYPE,
    pub ParamCount: UINT8,
    pub Valid: UINT16,
    pub Flags: UINT8,
    pub HighestDstates: [UINT8; 4],
    pub LowestDstates: [UINT8; 5],
    pub Address: UINT64,
    pub HardwareId: ACPI_PNP_DEVICE_ID,
    pub UniqueId: ACPI_PNP_DEVICE_ID,
    pub ClassCode: ACPI_PNP_DEVICE_ID,
    pub CompatibleIdList: ACPI_PNP_DEVICE_ID_LIST,
}

/// `ACPI_DEVICE_INFO::Valid` bits.
pub const ACPI_VALID_ADR: UINT16 = 0x0002;
pub const ACPI_VALID_HID: UINT16 = 0x0004;
pub const ACPI_VALID_UID: UINT16 = 0x0008;
pub const ACPI_VALID_CID: UINT16 = 0x0020;
pub const ACPI_VALID_CLS: UINT16 = 0x0040;
pub const ACPI_VALID_SXDS: UINT16 = 0x0100;
pub const ACPI_VALID_SXWS: UINT16 = 0x0200;

// ---------------------------------------------------------------------------
// Initialization flags (AcpiEnableSubsystem, AcpiInitializeObjects)
// ---------------------------------------------------------------------------

pub const ACPI_FULL_INITIALIZATION: UINT32 = 0x0000;
pub const ACPI_NO_FACS_INIT: UINT32 = 0x0001;
pub const ACPI_NO_ACPI_ENABLE: UINT32 = 0x0002;
pub const ACPI_NO_HARDWARE_INIT: UINT32 = 0x0004;
pub const ACPI_NO_EVENT_INIT: UINT32 = 0x0008;
pub const ACPI_NO_HANDLER_INIT: UINT32 = 0x0010;
pub const ACPI_NO_DEVICE_INIT: UINT32 = 0x0020;
pub const ACPI_NO_OBJECT_INIT: UINT32 = 0x0040;

// ---------------------------------------------------------------------------
// Fixed events
// ---------------------------------------------------------------------------

pub const ACPI_EVENT_PMTIMER: UINT32 = 0;
pub const ACPI_EVENT_GLOBAL: UINT32 = 1;
pub const ACPI_EVENT_POWER_BUTTON: UINT32 = 2;
pub const ACPI_EVENT_SLEEP_BUTTON: UINT32 = 3;
pub const ACPI_EVENT_RTC: UINT32 = 4;
pub const ACPI_EVENT_MAX: UINT32 = 4;

// ---------------------------------------------------------------------------
// Notify
// ---------------------------------------------------------------------------

pub const ACPI_SYSTEM_NOTIFY: UINT32 = 0x1;
pub const ACPI_DEVICE_NOTIFY: UINT32 = 0x2;
pub const ACPI_ALL_NOTIFY: UINT32 = ACPI_SYSTEM_NOTIFY | ACPI_DEVICE_NOTIFY;

// ---------------------------------------------------------------------------
// Address spaces
// ---------------------------------------------------------------------------

pub const ACPI_ADR_SPACE_SYSTEM_MEMORY: ACPI_ADR_SPACE_TYPE = 0;
pub const ACPI_ADR_SPACE_SYSTEM_IO: ACPI_ADR_SPACE_TYPE = 1;
pub const ACPI_ADR_SPACE_PCI_CONFIG: ACPI_ADR_SPACE_TYPE = 2;
pub const ACPI_ADR_SPACE_EC: ACPI_ADR_SPACE_TYPE = 3;
pub const ACPI_ADR_SPACE_SMBUS: ACPI_ADR_SPACE_TYPE = 4;
pub const ACPI_ADR_SPACE_CMOS: ACPI_ADR_SPACE_TYPE = 5;
pub const ACPI_ADR_SPACE_PCI_BAR_TARGET: ACPI_ADR_SPACE_TYPE = 6;
pub const ACPI_ADR_SPACE_IPMI: ACPI_ADR_SPACE_TYPE = 7;
pub const ACPI_ADR_SPACE_GPIO: ACPI_ADR_SPACE_TYPE = 8;
pub const ACPI_ADR_SPACE_GSBUS: ACPI_ADR_SPACE_TYPE = 9;
pub const ACPI_ADR_SPACE_PLATFORM_COMM: ACPI_ADR_SPACE_TYPE = 10;

// ---------------------------------------------------------------------------
// Sleep states
// ---------------------------------------------------------------------------

pub const ACPI_STATE_S0: UINT8 = 0;
pub const ACPI_STATE_S1: UINT8 = 1;
pub const ACPI_STATE_S2: UINT8 = 2;
pub const ACPI_STATE_S3: UINT8 = 3;
pub const ACPI_STATE_S4: UINT8 = 4;
pub const ACPI_STATE_S5: UINT8 = 5;

// ---------------------------------------------------------------------------
// Callbacks
// ---------------------------------------------------------------------------

/// `AcpiWalkNamespace` / `AcpiGetDevices` per-object callback.
pub type ACPI_WALK_CALLBACK = Option<
    acpi_system_fn!(fn(ACPI_HANDLE, UINT32, *mut c_void, *mut *mut c_void) -> ACPI_STATUS),
>;
pub type ACPI_TABLE_HANDLER = Option<acpi_system_fn!(fn(UINT32, *mut c_void, *mut c_void) -> ACPI_STATUS)>;
pub type ACPI_EVENT_HANDLER = Option<acpi_system_fn!(fn(*mut c_void) -> UINT32)>;
pub type ACPI_NOTIFY_HANDLER = Option<acpi_system_fn!(fn(ACPI_HANDLE, UINT32, *mut c_void))>;
pub type ACPI_OBJECT_HANDLER = Option<acpi_system_fn!(fn(ACPI_HANDLE, *mut c_void))>;
pub type ACPI_INIT_HANDLER = Option<acpi_system_fn!(fn(ACPI_HANDLE, UINT32) -> ACPI_STATUS)>;
pub type ACPI_INTERFACE_HANDLER = Option<acpi_system_fn!(fn(ACPI_STRING, UINT32) -> UINT32)>;
/// Interrupt handler installed through `AcpiOsInstallInterruptHandler`.
pub type ACPI_OSD_HANDLER = Option<acpi_system_fn!(fn(*mut c_void) -> UINT32)>;
/// Deferred procedure queued through `AcpiOsExecute`.
pub type ACPI_OSD_EXEC_CALLBACK = Option<acpi_system_fn!(fn(*mut c_void))>;
