//! The host side of ACPICA's OS interface.

use acpica_sys::{
    ACPI_CPU_FLAGS, ACPI_EXECUTE_TYPE, ACPI_IO_ADDRESS, ACPI_MUTEX, ACPI_PARSE_OBJECT, ACPI_PCI_ID,
    ACPI_PHYSICAL_ADDRESS, ACPI_PREDEFINED_NAMES, ACPI_SEMAPHORE, ACPI_SIGNAL_FATAL_INFO, ACPI_SIZE, ACPI_SPINLOCK,
    ACPI_STATUS, ACPI_STRING, ACPI_TABLE_HEADER, ACPI_THREAD_ID, ACPI_WALK_STATE, AE_NOT_IMPLEMENTED,
};
use core::ffi::{CStr, c_void};
use core::ptr::NonNull;
use spin::Once;

use crate::error::AcpicaError;
use crate::output;

/// Interrupt service routine ACPICA installs for the SCI.
pub type InterruptHandler = unsafe extern "C" fn(*mut c_void) -> u32;

/// Deferred procedure ACPICA queues through `AcpiOsExecute`.
pub type ExecCallback = unsafe extern "C" fn(*mut c_void);

/// Width of a memory, port or PCI configuration access.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AccessWidth {
    Bits8,
    Bits16,
    Bits32,
    Bits64,
}

impl AccessWidth {
    /// Width of a memory or PCI configuration access, in bits.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::Bits8),
            16 => Some(Self::Bits16),
            32 => Some(Self::Bits32),
            64 => Some(Self::Bits64),
            _ => None,
        }
    }

    /// Width of a port access, in bits. Ports are at most 32 bits wide.
    #[must_use]
    pub const fn from_port_bits(bits: u32) -> Option<Self> {
        match Self::from_bits(bits) {
            Some(Self::Bits64) | None => None,
            width => width,
        }
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits8 => 8,
            Self::Bits16 => 16,
            Self::Bits32 => 32,
            Self::Bits64 => 64,
        }
    }

    /// Clears every bit above this width.
    #[must_use]
    pub const fn truncate(self, value: u64) -> u64 {
        match self {
            Self::Bits64 => value,
            width => value & ((1 << width.bits()) - 1),
        }
    }
}

/// Event reported through `AcpiOsSignal`.
#[derive(Debug, Copy, Clone)]
pub enum Signal<'a> {
    /// The AML `Fatal` operator was executed.
    Fatal(&'a ACPI_SIGNAL_FATAL_INFO),
    /// The AML `BreakPoint` operator was executed.
    Breakpoint(Option<&'a CStr>),
    /// A signal this layer does not know.
    Unknown(u32),
}

/// Everything ACPICA needs from the host operating system.
///
/// Implementations must be usable from any CPU and any ACPICA thread. Methods
/// that may fail return the status ACPICA should see; the exported `AcpiOs*`
/// functions handle pointer validation and out-parameters.
pub trait OsServices: Send + Sync {
    /// Called once from `AcpiInitializeSubsystem`.
    fn initialize(&self) -> Result<(), ACPI_STATUS> {
        Ok(())
    }

    /// Called once from `AcpiTerminate`.
    fn terminate(&self) -> Result<(), ACPI_STATUS> {
        Ok(())
    }

    /// Physical address of the RSDP, if the host knows it (e.g. from UEFI).
    ///
    /// Without one, ACPICA scans legacy memory via `AcpiFindRootPointer`.
    fn root_pointer(&self) -> Option<ACPI_PHYSICAL_ADDRESS> {
        None
    }

    /// Replacement value for a predefined object.
    fn predefined_override(&self, _name: &ACPI_PREDEFINED_NAMES) -> Result<Option<ACPI_STRING>, ACPI_STATUS> {
        Ok(None)
    }

    /// Replacement for a table ACPICA is about to install, by logical address.
    fn table_override(&self, _existing: &ACPI_TABLE_HEADER) -> Result<Option<NonNull<ACPI_TABLE_HEADER>>, ACPI_STATUS> {
        Ok(None)
    }

    /// Replacement for a table ACPICA is about to install, by physical address
    /// and length.
    fn physical_table_override(
        &self,
        _existing: &ACPI_TABLE_HEADER,
    ) -> Result<Option<(ACPI_PHYSICAL_ADDRESS, u32)>, ACPI_STATUS> {
        Ok(None)
    }

    /// Maps `length` bytes of physical memory; null on failure.
    fn map(&self, physical_address: ACPI_PHYSICAL_ADDRESS, length: ACPI_SIZE) -> *mut c_void;

    /// Unmaps a region returned by [`map`](Self::map).
    fn unmap(&self, logical_address: *mut c_void, length: ACPI_SIZE);

    /// Physical address backing a logical address.
    fn physical_address(&self, logical_address: *mut c_void) -> Result<ACPI_PHYSICAL_ADDRESS, ACPI_STATUS>;

    /// Allocates `size` bytes; null on failure.
    fn allocate(&self, size: ACPI_SIZE) -> *mut c_void;

    /// Frees memory returned by [`allocate`](Self::allocate).
    fn free(&self, memory: *mut c_void);

    fn is_readable(&self, _memory: *mut c_void, _length: ACPI_SIZE) -> bool {
        true
    }

    fn is_writable(&self, _memory: *mut c_void, _length: ACPI_SIZE) -> bool {
        true
    }

    /// Identifier of the calling thread. Zero is mapped to a valid id by the
    /// export layer.
    fn thread_id(&self) -> ACPI_THREAD_ID;

    /// Queues `function(context)` for asynchronous execution.
    fn execute(&self, kind: ACPI_EXECUTE_TYPE, function: ExecCallback, context: *mut c_void) -> Result<(), ACPI_STATUS>;

    /// Sleeps, yielding the CPU.
    fn sleep(&self, milliseconds: u64);

    /// Busy-waits.
    fn stall(&self, microseconds: u32);

    /// Waits until every callback queued with [`execute`](Self::execute) has run.
    fn wait_events_complete(&self) {}

    /// Creates a counting semaphore. `initial_units <= max_units` is checked
    /// before this is called.
    fn create_semaphore(&self, max_units: u32, initial_units: u32) -> Result<ACPI_SEMAPHORE, ACPI_STATUS>;

    fn delete_semaphore(&self, handle: ACPI_SEMAPHORE) -> Result<(), ACPI_STATUS>;

    /// Takes `units` from the semaphore, waiting at most `timeout`
    /// milliseconds (`ACPI_WAIT_FOREVER` blocks, `ACPI_DO_NOT_WAIT` polls).
    fn wait_semaphore(&self, handle: ACPI_SEMAPHORE, units: u32, timeout: u16) -> Result<(), ACPI_STATUS>;

    fn signal_semaphore(&self, handle: ACPI_SEMAPHORE, units: u32) -> Result<(), ACPI_STATUS>;

    /// Creates a mutex. Defaults to a binary semaphore.
    fn create_mutex(&self) -> Result<ACPI_MUTEX, ACPI_STATUS> {
        self.create_semaphore(1, 1)
    }

    fn delete_mutex(&self, handle: ACPI_MUTEX) {
        if let Err(status) = self.delete_semaphore(handle) {
            log::warn!("deleting mutex {handle:p} failed: {status}");
        }
    }

    fn acquire_mutex(&self, handle: ACPI_MUTEX, timeout: u16) -> Result<(), ACPI_STATUS> {
        self.wait_semaphore(handle, 1, timeout)
    }

    fn release_mutex(&self, handle: ACPI_MUTEX) {
        if let Err(status) = self.signal_semaphore(handle, 1) {
            log::warn!("releasing mutex {handle:p} failed: {status}");
        }
    }

    fn create_lock(&self) -> Result<ACPI_SPINLOCK, ACPI_STATUS>;

    fn delete_lock(&self, handle: ACPI_SPINLOCK);

    /// Acquires a spinlock, returning the interrupt state to restore.
    fn acquire_lock(&self, handle: ACPI_SPINLOCK) -> ACPI_CPU_FLAGS;

    fn release_lock(&self, handle: ACPI_SPINLOCK, flags: ACPI_CPU_FLAGS);

    fn install_interrupt_handler(
        &self,
        interrupt_number: u32,
        handler: InterruptHandler,
        context: *mut c_void,
    ) -> Result<(), ACPI_STATUS>;

    fn remove_interrupt_handler(&self, interrupt_number: u32, handler: InterruptHandler) -> Result<(), ACPI_STATUS>;

    fn read_memory(&self, address: ACPI_PHYSICAL_ADDRESS, width: AccessWidth) -> Result<u64, ACPI_STATUS>;

    fn write_memory(&self, address: ACPI_PHYSICAL_ADDRESS, value: u64, width: AccessWidth) -> Result<(), ACPI_STATUS>;

    /// Reads an I/O port. `width` is at most [`AccessWidth::Bits32`].
    fn read_port(&self, address: ACPI_IO_ADDRESS, width: AccessWidth) -> Result<u32, ACPI_STATUS>;

    /// Writes an I/O port. `width` is at most [`AccessWidth::Bits32`].
    fn write_port(&self, address: ACPI_IO_ADDRESS, value: u32, width: AccessWidth) -> Result<(), ACPI_STATUS>;

    fn read_pci_configuration(&self, id: ACPI_PCI_ID, register: u32, width: AccessWidth) -> Result<u64, ACPI_STATUS>;

    fn write_pci_configuration(
        &self,
        id: ACPI_PCI_ID,
        register: u32,
        value: u64,
        width: AccessWidth,
    ) -> Result<(), ACPI_STATUS>;

    /// Monotonic timer in 100 ns units.
    fn timer(&self) -> u64;

    /// Handles `AcpiOsSignal`. Fatal signals are logged before this is called.
    fn signal(&self, _signal: Signal<'_>) -> Result<(), ACPI_STATUS> {
        Ok(())
    }

    /// Last step before entering a sleep state; `Ok` lets ACPICA write the
    /// sleep registers itself.
    fn enter_sleep(&self, _state: u8, _register_a: u32, _register_b: u32) -> Result<(), ACPI_STATUS> {
        Ok(())
    }

    /// Receives a fragment of ACPICA's diagnostic output. The default
    /// assembles lines and logs them with target `acpica`.
    fn print(&self, text: &str) {
        output::write(text);
    }

    fn redirect_output(&self, _destination: *mut c_void) {}

    /// Reads a debugger command line into `buffer`, returning its length.
    fn get_line(&self, _buffer: &mut [u8]) -> Result<usize, ACPI_STATUS> {
        Err(AE_NOT_IMPLEMENTED)
    }

    fn initialize_debugger(&self) -> Result<(), ACPI_STATUS> {
        Ok(())
    }

    fn terminate_debugger(&self) {}

    fn wait_command_ready(&self) -> Result<(), ACPI_STATUS> {
        Err(AE_NOT_IMPLEMENTED)
    }

    fn notify_command_complete(&self) -> Result<(), ACPI_STATUS> {
        Err(AE_NOT_IMPLEMENTED)
    }

    fn disassemble(&self, _walk_state: *mut ACPI_WALK_STATE, _origin: *mut ACPI_PARSE_OBJECT, _num_opcodes: u32) {}

    fn parse_deferred_operations(&self, _root: *mut ACPI_PARSE_OBJECT) {}
}

static SERVICES: Once<&'static dyn OsServices> = Once::new();

/// Installs the process-wide OS services.
///
/// # Errors
/// [`AcpicaError::ServicesAlreadyRegistered`] if services were registered
/// before; the earlier registration stays in place.
pub fn register(services: &'static dyn OsServices) -> Result<(), AcpicaError> {
    let mut installed = false;
    SERVICES.call_once(|| {
        installed = true;
        services
    });

    if installed {
        log::debug!("ACPICA OS services registered");
        Ok(())
    } else {
        Err(AcpicaError::ServicesAlreadyRegistered)
    }
}

/// The registered OS services, if any.
#[must_use]
pub fn services() -> Option<&'static dyn OsServices> {
    SERVICES.get().copied()
}

#[cfg(test)]
mod tests {
    use super::AccessWidth;

    #[test]
    fn access_widths() {
        assert_eq!(AccessWidth::from_bits(64), Some(AccessWidth::Bits64));
        assert_eq!(AccessWidth::from_bits(24), None);
        assert_eq!(AccessWidth::from_port_bits(32), Some(AccessWidth::Bits32));
        assert_eq!(AccessWidth::from_port_bits(64), None);
    }

    #[test]
    fn truncation() {
        assert_eq!(AccessWidth::Bits8.truncate(0x1234), 0x34);
        assert_eq!(AccessWidth::Bits32.truncate(u64::MAX), 0xFFFF_FFFF);
        assert_eq!(AccessWidth::Bits64.truncate(u64::MAX), u64::MAX);
    }
}
