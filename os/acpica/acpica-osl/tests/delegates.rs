//! The exported `AcpiOs*` functions against a mock host.

use acpica_osl::osl::{
    AcpiOsAcquireMutex, AcpiOsCreateLock, AcpiOsCreateMutex, AcpiOsCreateSemaphore, AcpiOsDeleteMutex,
    AcpiOsDeleteSemaphore, AcpiOsGetLine, AcpiOsGetRootPointer, AcpiOsGetThreadId, AcpiOsInstallInterruptHandler,
    AcpiOsPhysicalTableOverride, AcpiOsPredefinedOverride, AcpiOsReadMemory, AcpiOsReadPciConfiguration,
    AcpiOsReadPort, AcpiOsReleaseMutex, AcpiOsSignal, AcpiOsSignalSemaphore, AcpiOsTableOverride,
    AcpiOsWaitSemaphore, AcpiOsWriteMemory, AcpiOsWritePort, vprintf,
};
use acpica_osl::format::Arg;
use acpica_osl::{
    AccessWidth, AcpicaError, ExecCallback, InterruptHandler, OsServices, Signal, register, services,
};
use acpica_sys::{
    ACPI_CPU_FLAGS, ACPI_DO_NOT_WAIT, ACPI_EXECUTE_TYPE, ACPI_IO_ADDRESS, ACPI_MUTEX, ACPI_PCI_ID,
    ACPI_PHYSICAL_ADDRESS, ACPI_PREDEFINED_NAMES, ACPI_SEMAPHORE, ACPI_SIGNAL_BREAKPOINT, ACPI_SIGNAL_FATAL,
    ACPI_SIGNAL_FATAL_INFO, ACPI_SIZE, ACPI_SPINLOCK, ACPI_STATUS, ACPI_STRING, ACPI_TABLE_HEADER, ACPI_THREAD_ID, ACPI_WAIT_FOREVER, AE_BAD_PARAMETER, AE_LIMIT, AE_OK, AE_TIME,
};
use std::ffi::c_void;
use std::sync::{Mutex, OnceLock};

const RSDP: ACPI_PHYSICAL_ADDRESS = 0xE_0010;
const MEMORY_PATTERN: u64 = 0xDEAD_BEEF_CAFE_F00D;
const PORT_PATTERN: u32 = 0xABCD_1234;

/// A counting semaphore behind an `ACPI_SEMAPHORE` handle.
struct Semaphore {
    units: Mutex<u32>,
    max_units: u32,
}

#[derive(Default)]
struct MockHost {
    writes: Mutex<Vec<(u64, u64, u32)>>,
    interrupts: Mutex<Vec<u32>>,
    fatal: Mutex<Vec<ACPI_SIGNAL_FATAL_INFO>>,
    breakpoints: Mutex<Vec<Option<String>>>,
    printed: Mutex<String>,
}

impl MockHost {
    fn semaphore<'a>(handle: ACPI_SEMAPHORE) -> &'a Semaphore {
        unsafe { &*handle.cast::<Semaphore>() }
    }
}

impl OsServices for MockHost {
    fn root_pointer(&self) -> Option<ACPI_PHYSICAL_ADDRESS> {
        Some(RSDP)
    }

    fn map(&self, physical_address: ACPI_PHYSICAL_ADDRESS, _length: ACPI_SIZE) -> *mut c_void {
        std::ptr::without_provenance_mut(usize::try_from(physical_address).unwrap())
    }

    fn unmap(&self, _logical_address: *mut c_void, _length: ACPI_SIZE) {}

    fn physical_address(&self, logical_address: *mut c_void) -> Result<ACPI_PHYSICAL_ADDRESS, ACPI_STATUS> {
        Ok(logical_address.addr() as ACPI_PHYSICAL_ADDRESS)
    }

    fn allocate(&self, size: ACPI_SIZE) -> *mut c_void {
        let size = usize::try_from(size).unwrap();
        Box::into_raw(vec![0u8; size].into_boxed_slice()).cast()
    }

    fn free(&self, _memory: *mut c_void) {}

    fn thread_id(&self) -> ACPI_THREAD_ID {
        // Maps to 0 before the export layer adjusts it.
        ACPI_THREAD_ID::MAX
    }

    fn execute(&self, _kind: ACPI_EXECUTE_TYPE, function: ExecCallback, context: *mut c_void) -> Result<(), ACPI_STATUS> {
        unsafe { function(context) };
        Ok(())
    }

    fn sleep(&self, _milliseconds: u64) {}

    fn stall(&self, _microseconds: u32) {}

    fn create_semaphore(&self, max_units: u32, initial_units: u32) -> Result<ACPI_SEMAPHORE, ACPI_STATUS> {
        let semaphore = Box::new(Semaphore {
            units: Mutex::new(initial_units),
            max_units,
        });
        Ok(Box::into_raw(semaphore).cast())
    }

    fn delete_semaphore(&self, handle: ACPI_SEMAPHORE) -> Result<(), ACPI_STATUS> {
        drop(unsafe { Box::from_raw(handle.cast::<Semaphore>()) });
        Ok(())
    }

    fn wait_semaphore(&self, handle: ACPI_SEMAPHORE, units: u32, _timeout: u16) -> Result<(), ACPI_STATUS> {
        let mut available = Self::semaphore(handle).units.lock().unwrap();
        if *available < units {
            return Err(AE_TIME);
        }
        *available -= units;
        Ok(())
    }

    fn signal_semaphore(&self, handle: ACPI_SEMAPHORE, units: u32) -> Result<(), ACPI_STATUS> {
        let semaphore = Self::semaphore(handle);
        let mut available = semaphore.units.lock().unwrap();
        if *available + units > semaphore.max_units {
            return Err(AE_LIMIT);
        }
        *available += units;
        Ok(())
    }

    fn create_lock(&self) -> Result<ACPI_SPINLOCK, ACPI_STATUS> {
        Ok(Box::into_raw(Box::new(0u8)).cast())
    }

    fn delete_lock(&self, handle: ACPI_SPINLOCK) {
        drop(unsafe { Box::from_raw(handle.cast::<u8>()) });
    }

    fn acquire_lock(&self, _handle: ACPI_SPINLOCK) -> ACPI_CPU_FLAGS {
        0
    }

    fn release_lock(&self, _handle: ACPI_SPINLOCK, _flags: ACPI_CPU_FLAGS) {}

    fn install_interrupt_handler(
        &self,
        interrupt_number: u32,
        _handler: InterruptHandler,
        _context: *mut c_void,
    ) -> Result<(), ACPI_STATUS> {
        self.interrupts.lock().unwrap().push(interrupt_number);
        Ok(())
    }

    fn remove_interrupt_handler(&self, _interrupt_number: u32, _handler: InterruptHandler) -> Result<(), ACPI_STATUS> {
        Ok(())
    }

    fn read_memory(&self, _address: ACPI_PHYSICAL_ADDRESS, _width: AccessWidth) -> Result<u64, ACPI_STATUS> {
        Ok(MEMORY_PATTERN)
    }

    fn write_memory(&self, address: ACPI_PHYSICAL_ADDRESS, value: u64, width: AccessWidth) -> Result<(), ACPI_STATUS> {
        self.writes.lock().unwrap().push((u64::from(address), value, width.bits()));
        Ok(())
    }

    fn read_port(&self, _address: ACPI_IO_ADDRESS, _width: AccessWidth) -> Result<u32, ACPI_STATUS> {
        Ok(PORT_PATTERN)
    }

    fn write_port(&self, address: ACPI_IO_ADDRESS, value: u32, width: AccessWidth) -> Result<(), ACPI_STATUS> {
        self.writes
            .lock()
            .unwrap()
            .push((u64::from(address), u64::from(value), width.bits()));
        Ok(())
    }

    fn read_pci_configuration(&self, id: ACPI_PCI_ID, register: u32, _width: AccessWidth) -> Result<u64, ACPI_STATUS> {
        Ok((u64::from(id.Device) << 16) | u64::from(register))
    }

    fn write_pci_configuration(
        &self,
        _id: ACPI_PCI_ID,
        _register: u32,
        _value: u64,
        _width: AccessWidth,
    ) -> Result<(), ACPI_STATUS> {
        Ok(())
    }

    fn timer(&self) -> u64 {
        42
    }

    fn signal(&self, signal: Signal<'_>) -> Result<(), ACPI_STATUS> {
        match signal {
            Signal::Fatal(info) => self.fatal.lock().unwrap().push(*info),
            Signal::Breakpoint(message) => self
                .breakpoints
                .lock()
                .unwrap()
                .push(message.map(|m| m.to_string_lossy().into_owned())),
            Signal::Unknown(_) => {}
        }
        Ok(())
    }

    fn print(&self, text: &str) {
        self.printed.lock().unwrap().push_str(text);
    }

    fn get_line(&self, buffer: &mut [u8]) -> Result<usize, ACPI_STATUS> {
        let line = b"help";
        let read = line.len().min(buffer.len());
        buffer[..read].copy_from_slice(&line[..read]);
        Ok(read)
    }
}

fn host() -> &'static MockHost {
    static HOST: OnceLock<&'static MockHost> = OnceLock::new();
    HOST.get_or_init(|| {
        let host: &'static MockHost = Box::leak(Box::default());
        register(host).unwrap();
        host
    })
}

#[test]
fn second_registration_is_rejected() {
    let first = host();
    let second: &'static MockHost = Box::leak(Box::default());

    assert_eq!(register(second), Err(AcpicaError::ServicesAlreadyRegistered));
    let current = services().unwrap();
    assert!(std::ptr::addr_eq(current, first));
}

#[test]
fn root_pointer_comes_from_the_host() {
    host();
    assert_eq!(unsafe { AcpiOsGetRootPointer() }, RSDP);
}

#[test]
fn thread_id_is_never_zero() {
    host();
    assert_ne!(unsafe { AcpiOsGetThreadId() }, 0);
}

#[test]
fn semaphore_parameters_are_validated() {
    host();
    let mut handle: ACPI_SEMAPHORE = std::ptr::null_mut();
    unsafe {
        assert_eq!(AcpiOsCreateSemaphore(1, 2, &raw mut handle), AE_BAD_PARAMETER);
        assert_eq!(AcpiOsCreateSemaphore(1, 1, std::ptr::null_mut()), AE_BAD_PARAMETER);
        assert_eq!(AcpiOsWaitSemaphore(std::ptr::null_mut(), 1, ACPI_WAIT_FOREVER), AE_BAD_PARAMETER);
        assert_eq!(AcpiOsSignalSemaphore(std::ptr::null_mut(), 1), AE_BAD_PARAMETER);
        assert_eq!(AcpiOsDeleteSemaphore(std::ptr::null_mut()), AE_BAD_PARAMETER);
        assert_eq!(AcpiOsCreateLock(std::ptr::null_mut()), AE_BAD_PARAMETER);
    }
    assert!(handle.is_null());
}

#[test]
fn semaphore_counts_units() {
    host();
    let mut handle: ACPI_SEMAPHORE = std::ptr::null_mut();
    unsafe {
        assert_eq!(AcpiOsCreateSemaphore(2, 1, &raw mut handle), AE_OK);
        assert!(!handle.is_null());

        assert_eq!(AcpiOsWaitSemaphore(handle, 1, ACPI_DO_NOT_WAIT), AE_OK);
        assert_eq!(AcpiOsWaitSemaphore(handle, 1, ACPI_DO_NOT_WAIT), AE_TIME);
        assert_eq!(AcpiOsSignalSemaphore(handle, 2), AE_OK);
        assert_eq!(AcpiOsSignalSemaphore(handle, 1), AE_LIMIT);
        assert_eq!(AcpiOsDeleteSemaphore(handle), AE_OK);
    }
}

#[test]
fn mutexes_default_to_binary_semaphores() {
    host();
    let mut mutex: ACPI_MUTEX = std::ptr::null_mut();
    unsafe {
        assert_eq!(AcpiOsCreateMutex(&raw mut mutex), AE_OK);
        assert_eq!(AcpiOsAcquireMutex(mutex, ACPI_DO_NOT_WAIT), AE_OK);
        assert_eq!(AcpiOsAcquireMutex(mutex, ACPI_DO_NOT_WAIT), AE_TIME);
        AcpiOsReleaseMutex(mutex);
        assert_eq!(AcpiOsAcquireMutex(mutex, ACPI_DO_NOT_WAIT), AE_OK);
        AcpiOsReleaseMutex(mutex);
        AcpiOsDeleteMutex(mutex);
    }
}

#[test]
fn memory_access_checks_and_truncates_widths() {
    host();
    let mut value = 0u64;
    unsafe {
        assert_eq!(AcpiOsReadMemory(0x1000, &raw mut value, 24), AE_BAD_PARAMETER);
        assert_eq!(AcpiOsReadMemory(0x1000, std::ptr::null_mut(), 32), AE_BAD_PARAMETER);

        assert_eq!(AcpiOsReadMemory(0x1000, &raw mut value, 16), AE_OK);
        assert_eq!(value, 0xF00D);
        assert_eq!(AcpiOsReadMemory(0x1000, &raw mut value, 64), AE_OK);
        assert_eq!(value, MEMORY_PATTERN);

        assert_eq!(AcpiOsWriteMemory(0x2000, 0x1_2345_6789, 32), AE_OK);
    }
    assert!(host().writes.lock().unwrap().contains(&(0x2000, 0x2345_6789, 32)));
}

#[test]
fn port_access_rejects_64_bits() {
    host();
    let mut value = 0u32;
    unsafe {
        assert_eq!(AcpiOsReadPort(0x60, &raw mut value, 64), AE_BAD_PARAMETER);
        assert_eq!(AcpiOsWritePort(0x61, 0, 64), AE_BAD_PARAMETER);

        assert_eq!(AcpiOsReadPort(0x60, &raw mut value, 8), AE_OK);
        assert_eq!(value, 0x34);
        assert_eq!(AcpiOsWritePort(0x64, 0xFE, 8), AE_OK);
    }
    assert!(host().writes.lock().unwrap().contains(&(0x64, 0xFE, 8)));
}

#[test]
fn pci_configuration_requires_an_id() {
    host();
    let mut id = ACPI_PCI_ID {
        Device: 3,
        ..ACPI_PCI_ID::default()
    };
    let mut value = 0u64;
    unsafe {
        assert_eq!(
            AcpiOsReadPciConfiguration(std::ptr::null_mut(), 0x10, &raw mut value, 32),
            AE_BAD_PARAMETER
        );
        assert_eq!(AcpiOsReadPciConfiguration(&raw mut id, 0x10, &raw mut value, 32), AE_OK);
    }
    assert_eq!(value, 0x3_0010);
}

#[test]
fn interrupt_handler_must_be_present() {
    unsafe extern "C" fn sci(_context: *mut c_void) -> u32 {
        0
    }

    host();
    unsafe {
        assert_eq!(AcpiOsInstallInterruptHandler(9, None, std::ptr::null_mut()), AE_BAD_PARAMETER);
        assert_eq!(AcpiOsInstallInterruptHandler(9, Some(sci), std::ptr::null_mut()), AE_OK);
    }
    assert!(host().interrupts.lock().unwrap().contains(&9));
}

#[test]
fn fatal_signals_reach_the_host() {
    host();
    let mut info = ACPI_SIGNAL_FATAL_INFO {
        Type: 1,
        Code: 0xBAD,
        Argument: 7,
    };
    unsafe {
        assert_eq!(AcpiOsSignal(ACPI_SIGNAL_FATAL, std::ptr::null_mut()), AE_BAD_PARAMETER);
        assert_eq!(AcpiOsSignal(ACPI_SIGNAL_FATAL, (&raw mut info).cast()), AE_OK);
    }
    assert!(host().fatal.lock().unwrap().contains(&info));
}

#[test]
fn table_override_defaults_to_none() {
    host();
    let mut header = ACPI_TABLE_HEADER {
        Signature: *b"DSDT",
        Length: 36,
        Revision: 2,
        Checksum: 0,
        OemId: *b"BOCHS ",
        OemTableId: *b"BXPCDSDT",
        OemRevision: 1,
        AslCompilerId: *b"BXPC",
        AslCompilerRevision: 1,
    };
    let mut replacement: *mut ACPI_TABLE_HEADER = std::ptr::dangling_mut();
    unsafe {
        assert_eq!(AcpiOsTableOverride(&raw mut header, std::ptr::null_mut()), AE_BAD_PARAMETER);
        assert_eq!(AcpiOsTableOverride(&raw mut header, &raw mut replacement), AE_OK);
    }
    assert!(replacement.is_null());
}

#[test]
fn breakpoints_reach_the_host() {
    host();
    unsafe {
        assert_eq!(AcpiOsSignal(ACPI_SIGNAL_BREAKPOINT, std::ptr::null_mut()), AE_OK);
        assert_eq!(
            AcpiOsSignal(ACPI_SIGNAL_BREAKPOINT, c"BreakPoint in _PS0".as_ptr().cast_mut().cast()),
            AE_OK
        );
    }
    let breakpoints = host().breakpoints.lock().unwrap();
    assert!(breakpoints.contains(&None));
    assert!(breakpoints.contains(&Some("BreakPoint in _PS0".to_string())));
}

#[test]
fn predefined_override_validates_pointers() {
    host();
    let name = ACPI_PREDEFINED_NAMES {
        Name: c"_OS_".as_ptr(),
        Type: 2,
        Val: c"Microsoft Windows NT".as_ptr().cast_mut(),
    };
    let mut value: ACPI_STRING = std::ptr::dangling_mut();
    unsafe {
        assert_eq!(AcpiOsPredefinedOverride(&raw const name, std::ptr::null_mut()), AE_BAD_PARAMETER);
        assert_eq!(AcpiOsPredefinedOverride(std::ptr::null(), &raw mut value), AE_BAD_PARAMETER);
        assert_eq!(AcpiOsPredefinedOverride(&raw const name, &raw mut value), AE_OK);
    }
    assert!(value.is_null());
}

#[test]
fn physical_table_override_validates_pointers() {
    host();
    let mut header = ACPI_TABLE_HEADER {
        Signature: *b"SSDT",
        Length: 36,
        ..ACPI_TABLE_HEADER::default()
    };
    let mut address: ACPI_PHYSICAL_ADDRESS = 0xFFFF;
    let mut length = 0xFFFF_u32;
    unsafe {
        assert_eq!(
            AcpiOsPhysicalTableOverride(&raw mut header, std::ptr::null_mut(), &raw mut length),
            AE_BAD_PARAMETER
        );
        assert_eq!(
            AcpiOsPhysicalTableOverride(&raw mut header, &raw mut address, std::ptr::null_mut()),
            AE_BAD_PARAMETER
        );
        assert_eq!(
            AcpiOsPhysicalTableOverride(std::ptr::null_mut(), &raw mut address, &raw mut length),
            AE_BAD_PARAMETER
        );
        assert_eq!(AcpiOsPhysicalTableOverride(&raw mut header, &raw mut address, &raw mut length), AE_OK);
    }
    assert_eq!((address, length), (0, 0));
}

#[test]
fn rendered_output_reaches_the_host() {
    let host = host();
    let mut args = [Arg::Int(4), Arg::Ptr(c"GPE".as_ptr().cast())].into_iter();
    vprintf(host, b"ACPI: Enabled %u %s blocks\n", &mut args);
    assert!(host.printed.lock().unwrap().contains("ACPI: Enabled 4 GPE blocks\n"));
}

#[test]
fn get_line_terminates_the_buffer() {
    host();
    let mut buffer = [0x7F_u8; 8];
    let mut read = 0u32;
    unsafe {
        assert_eq!(AcpiOsGetLine(buffer.as_mut_ptr().cast(), 8, &raw mut read), AE_OK);
    }
    assert_eq!(read, 4);
    assert_eq!(&buffer[..5], b"help\0");

    let mut short = [0x7F_u8; 3];
    unsafe {
        assert_eq!(AcpiOsGetLine(short.as_mut_ptr().cast(), 3, &raw mut read), AE_OK);
    }
    assert_eq!(read, 2);
    assert_eq!(&short, b"he\0");
}

#[cfg(not(feature = "native"))]
#[test]
fn subsystem_reports_the_failing_step() {
    use acpica_osl::{InitOptions, subsystem};
    use acpica_sys::AE_NOT_CONFIGURED;

    host();
    assert_eq!(
        subsystem::initialize(&InitOptions::default()),
        Err(AcpicaError::Status {
            operation: "AcpiInitializeSubsystem",
            status: AE_NOT_CONFIGURED,
        })
    );
}
