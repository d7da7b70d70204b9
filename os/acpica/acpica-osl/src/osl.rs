//! The `AcpiOs*` functions ACPICA imports from its host.
//!
//! Every function is exported unmangled with the C calling convention and
//! forwards to the registered [`OsServices`](crate::OsServices). Before
//! registration each one logs an error and returns the "not configured"
//! value of its category:
//!
//! | Returns | Unregistered value |
//! |---------|--------------------|
//! | `ACPI_STATUS` | `AE_NOT_CONFIGURED` |
//! | pointer | null |
//! | integer / address | `0` |
//! | `BOOLEAN` | `FALSE` |
//! | nothing | nothing |
//!
//! Null out-parameters and null handles are rejected with `AE_BAD_PARAMETER`
//! before the services are called. Signatures are checked against the
//! function types of [`acpica_sys::osxf`] at compile time.
//!
//! `AcpiOsPrintf` is variadic and is compiled into the ACPICA library by its
//! platform header as a wrapper around [`AcpiOsVprintf`].

#![allow(non_snake_case, clippy::missing_safety_doc)]

use acpica_sys::{
    ACPI_CPU_FLAGS, ACPI_EXECUTE_TYPE, ACPI_IO_ADDRESS, ACPI_MUTEX, ACPI_OSD_EXEC_CALLBACK, ACPI_OSD_HANDLER,
    ACPI_PCI_ID, ACPI_PHYSICAL_ADDRESS, ACPI_PREDEFINED_NAMES, ACPI_SEMAPHORE, ACPI_SIGNAL_BREAKPOINT,
    ACPI_SIGNAL_FATAL, ACPI_SIGNAL_FATAL_INFO, ACPI_SIZE, ACPI_SPINLOCK, ACPI_STATUS, ACPI_STRING, ACPI_TABLE_HEADER,
    ACPI_THREAD_ID, AE_BAD_PARAMETER, AE_NOT_CONFIGURED, AE_OK, AcpiFindRootPointer, BOOLEAN, FALSE, UINT8, UINT16,
    UINT32, UINT64, va_list,
};
use core::ffi::{CStr, c_char, c_void};
use core::ptr::NonNull;

use crate::format::{ArgSource, VaArgs, write_c_format};
use crate::services::{AccessWidth, OsServices, Signal, services};

/// The registered services, or an early return of `$unconfigured`.
macro_rules! services_or {
    ($function:literal $(, $unconfigured:expr)?) => {
        match services() {
            Some(services) => services,
            None => {
                not_registered($function);
                return $($unconfigured)?;
            }
        }
    };
}

#[cold]
fn not_registered(function: &str) {
    log::error!("{function} called before OS services were registered");
}

/// Collapses a service result into the status ACPICA expects.
fn status(result: Result<(), ACPI_STATUS>) -> ACPI_STATUS {
    result.err().unwrap_or(AE_OK)
}

// -- Lifecycle --

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsInitialize() -> ACPI_STATUS {
    let services = services_or!("AcpiOsInitialize", AE_NOT_CONFIGURED);
    status(services.initialize())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsTerminate() -> ACPI_STATUS {
    let services = services_or!("AcpiOsTerminate", AE_NOT_CONFIGURED);
    crate::output::flush();
    status(services.terminate())
}

/// RSDP address from the services, or from ACPICA's legacy memory scan.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsGetRootPointer() -> ACPI_PHYSICAL_ADDRESS {
    let services = services_or!("AcpiOsGetRootPointer", 0);
    if let Some(address) = services.root_pointer() {
        return address;
    }

    let mut address: ACPI_PHYSICAL_ADDRESS = 0;
    // SAFETY: `address` is a valid out-parameter.
    match unsafe { AcpiFindRootPointer(&raw mut address) }.into_result() {
        Ok(()) => address,
        Err(status) => {
            log::error!("no RSDP found: {status}");
            0
        }
    }
}

// -- Overrides --

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsPredefinedOverride(
    InitVal: *const ACPI_PREDEFINED_NAMES,
    NewVal: *mut ACPI_STRING,
) -> ACPI_STATUS {
    let services = services_or!("AcpiOsPredefinedOverride", AE_NOT_CONFIGURED);
    if NewVal.is_null() {
        return AE_BAD_PARAMETER;
    }
    // SAFETY: ACPICA passes null or a valid predefined name.
    let Some(name) = (unsafe { InitVal.as_ref() }) else {
        return AE_BAD_PARAMETER;
    };

    match services.predefined_override(name) {
        Ok(value) => {
            // SAFETY: checked non-null above.
            unsafe { NewVal.write(value.unwrap_or(core::ptr::null_mut())) };
            AE_OK
        }
        Err(status) => status,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsTableOverride(
    ExistingTable: *mut ACPI_TABLE_HEADER,
    NewTable: *mut *mut ACPI_TABLE_HEADER,
) -> ACPI_STATUS {
    let services = services_or!("AcpiOsTableOverride", AE_NOT_CONFIGURED);
    if NewTable.is_null() {
        return AE_BAD_PARAMETER;
    }
    // SAFETY: ACPICA passes null or a mapped table header.
    let Some(existing) = (unsafe { ExistingTable.as_ref() }) else {
        return AE_BAD_PARAMETER;
    };

    match services.table_override(existing) {
        Ok(table) => {
            // SAFETY: checked non-null above.
            unsafe { NewTable.write(table.map_or(core::ptr::null_mut(), NonNull::as_ptr)) };
            AE_OK
        }
        Err(status) => status,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsPhysicalTableOverride(
    ExistingTable: *mut ACPI_TABLE_HEADER,
    NewAddress: *mut ACPI_PHYSICAL_ADDRESS,
    NewTableLength: *mut UINT32,
) -> ACPI_STATUS {
    let services = services_or!("AcpiOsPhysicalTableOverride", AE_NOT_CONFIGURED);
    if NewAddress.is_null() || NewTableLength.is_null() {
        return AE_BAD_PARAMETER;
    }
    // SAFETY: ACPICA passes null or a mapped table header.
    let Some(existing) = (unsafe { ExistingTable.as_ref() }) else {
        return AE_BAD_PARAMETER;
    };

    match services.physical_table_override(existing) {
        Ok(replacement) => {
            let (address, length) = replacement.unwrap_or((0, 0));
            // SAFETY: both checked non-null above.
            unsafe {
                NewAddress.write(address);
                NewTableLength.write(length);
            }
            AE_OK
        }
        Err(status) => status,
    }
}

// -- Spinlocks --

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsCreateLock(OutHandle: *mut ACPI_SPINLOCK) -> ACPI_STATUS {
    let services = services_or!("AcpiOsCreateLock", AE_NOT_CONFIGURED);
    if OutHandle.is_null() {
        return AE_BAD_PARAMETER;
    }

    match services.create_lock() {
        Ok(handle) => {
            // SAFETY: checked non-null above.
            unsafe { OutHandle.write(handle) };
            AE_OK
        }
        Err(status) => status,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsDeleteLock(Handle: ACPI_SPINLOCK) {
    let services = services_or!("AcpiOsDeleteLock");
    if !Handle.is_null() {
        services.delete_lock(Handle);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsAcquireLock(Handle: ACPI_SPINLOCK) -> ACPI_CPU_FLAGS {
    let services = services_or!("AcpiOsAcquireLock", 0);
    if Handle.is_null() {
        log::error!("AcpiOsAcquireLock called with a null handle");
        return 0;
    }
    services.acquire_lock(Handle)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsReleaseLock(Handle: ACPI_SPINLOCK, Flags: ACPI_CPU_FLAGS) {
    let services = services_or!("AcpiOsReleaseLock");
    if !Handle.is_null() {
        services.release_lock(Handle, Flags);
    }
}

// -- Semaphores --

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsCreateSemaphore(
    MaxUnits: UINT32,
    InitialUnits: UINT32,
    OutHandle: *mut ACPI_SEMAPHORE,
) -> ACPI_STATUS {
    let services = services_or!("AcpiOsCreateSemaphore", AE_NOT_CONFIGURED);
    if OutHandle.is_null() || InitialUnits > MaxUnits {
        return AE_BAD_PARAMETER;
    }

    match services.create_semaphore(MaxUnits, InitialUnits) {
        Ok(handle) => {
            // SAFETY: checked non-null above.
            unsafe { OutHandle.write(handle) };
            AE_OK
        }
        Err(status) => status,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsDeleteSemaphore(Handle: ACPI_SEMAPHORE) -> ACPI_STATUS {
    let services = services_or!("AcpiOsDeleteSemaphore", AE_NOT_CONFIGURED);
    if Handle.is_null() {
        return AE_BAD_PARAMETER;
    }
    status(services.delete_semaphore(Handle))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsWaitSemaphore(Handle: ACPI_SEMAPHORE, Units: UINT32, Timeout: UINT16) -> ACPI_STATUS {
    let services = services_or!("AcpiOsWaitSemaphore", AE_NOT_CONFIGURED);
    if Handle.is_null() {
        return AE_BAD_PARAMETER;
    }
    status(services.wait_semaphore(Handle, Units, Timeout))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsSignalSemaphore(Handle: ACPI_SEMAPHORE, Units: UINT32) -> ACPI_STATUS {
    let services = services_or!("AcpiOsSignalSemaphore", AE_NOT_CONFIGURED);
    if Handle.is_null() {
        return AE_BAD_PARAMETER;
    }
    status(services.signal_semaphore(Handle, Units))
}

// -- Mutexes --

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsCreateMutex(OutHandle: *mut ACPI_MUTEX) -> ACPI_STATUS {
    let services = services_or!("AcpiOsCreateMutex", AE_NOT_CONFIGURED);
    if OutHandle.is_null() {
        return AE_BAD_PARAMETER;
    }

    match services.create_mutex() {
        Ok(handle) => {
            // SAFETY: checked non-null above.
            unsafe { OutHandle.write(handle) };
            AE_OK
        }
        Err(status) => status,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsDeleteMutex(Handle: ACPI_MUTEX) {
    let services = services_or!("AcpiOsDeleteMutex");
    if !Handle.is_null() {
        services.delete_mutex(Handle);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsAcquireMutex(Handle: ACPI_MUTEX, Timeout: UINT16) -> ACPI_STATUS {
    let services = services_or!("AcpiOsAcquireMutex", AE_NOT_CONFIGURED);
    if Handle.is_null() {
        return AE_BAD_PARAMETER;
    }
    status(services.acquire_mutex(Handle, Timeout))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsReleaseMutex(Handle: ACPI_MUTEX) {
    let services = services_or!("AcpiOsReleaseMutex");
    if !Handle.is_null() {
        services.release_mutex(Handle);
    }
}

// -- Memory --

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsAllocate(Size: ACPI_SIZE) -> *mut c_void {
    let services = services_or!("AcpiOsAllocate", core::ptr::null_mut());
    services.allocate(Size)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsFree(Memory: *mut c_void) {
    let services = services_or!("AcpiOsFree");
    if !Memory.is_null() {
        services.free(Memory);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsMapMemory(Where: ACPI_PHYSICAL_ADDRESS, Length: ACPI_SIZE) -> *mut c_void {
    let services = services_or!("AcpiOsMapMemory", core::ptr::null_mut());
    services.map(Where, Length)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsUnmapMemory(LogicalAddress: *mut c_void, Size: ACPI_SIZE) {
    let services = services_or!("AcpiOsUnmapMemory");
    if !LogicalAddress.is_null() {
        services.unmap(LogicalAddress, Size);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsGetPhysicalAddress(
    LogicalAddress: *mut c_void,
    PhysicalAddress: *mut ACPI_PHYSICAL_ADDRESS,
) -> ACPI_STATUS {
    let services = services_or!("AcpiOsGetPhysicalAddress", AE_NOT_CONFIGURED);
    if LogicalAddress.is_null() || PhysicalAddress.is_null() {
        return AE_BAD_PARAMETER;
    }

    match services.physical_address(LogicalAddress) {
        Ok(address) => {
            // SAFETY: checked non-null above.
            unsafe { PhysicalAddress.write(address) };
            AE_OK
        }
        Err(status) => status,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsReadable(Pointer: *mut c_void, Length: ACPI_SIZE) -> BOOLEAN {
    let services = services_or!("AcpiOsReadable", FALSE);
    BOOLEAN::from(services.is_readable(Pointer, Length))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsWritable(Pointer: *mut c_void, Length: ACPI_SIZE) -> BOOLEAN {
    let services = services_or!("AcpiOsWritable", FALSE);
    BOOLEAN::from(services.is_writable(Pointer, Length))
}

// -- Interrupts --

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsInstallInterruptHandler(
    InterruptNumber: UINT32,
    ServiceRoutine: ACPI_OSD_HANDLER,
    Context: *mut c_void,
) -> ACPI_STATUS {
    let services = services_or!("AcpiOsInstallInterruptHandler", AE_NOT_CONFIGURED);
    let Some(handler) = ServiceRoutine else {
        return AE_BAD_PARAMETER;
    };
    status(services.install_interrupt_handler(InterruptNumber, handler, Context))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsRemoveInterruptHandler(
    InterruptNumber: UINT32,
    ServiceRoutine: ACPI_OSD_HANDLER,
) -> ACPI_STATUS {
    let services = services_or!("AcpiOsRemoveInterruptHandler", AE_NOT_CONFIGURED);
    let Some(handler) = ServiceRoutine else {
        return AE_BAD_PARAMETER;
    };
    status(services.remove_interrupt_handler(InterruptNumber, handler))
}

// -- Threads and timing --

/// Never returns 0, which ACPICA reserves for "no thread".
#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsGetThreadId() -> ACPI_THREAD_ID {
    let services = services_or!("AcpiOsGetThreadId", 1);
    services.thread_id().wrapping_add(1).max(1)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsExecute(
    Type: ACPI_EXECUTE_TYPE,
    Function: ACPI_OSD_EXEC_CALLBACK,
    Context: *mut c_void,
) -> ACPI_STATUS {
    let services = services_or!("AcpiOsExecute", AE_NOT_CONFIGURED);
    let Some(function) = Function else {
        return AE_BAD_PARAMETER;
    };
    status(services.execute(Type, function, Context))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsWaitEventsComplete() {
    let services = services_or!("AcpiOsWaitEventsComplete");
    services.wait_events_complete();
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsSleep(Milliseconds: UINT64) {
    let services = services_or!("AcpiOsSleep");
    services.sleep(Milliseconds);
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsStall(Microseconds: UINT32) {
    let services = services_or!("AcpiOsStall");
    services.stall(Microseconds);
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsGetTimer() -> UINT64 {
    let services = services_or!("AcpiOsGetTimer", 0);
    services.timer()
}

// -- Hardware access --

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsReadPort(Address: ACPI_IO_ADDRESS, Value: *mut UINT32, Width: UINT32) -> ACPI_STATUS {
    let services = services_or!("AcpiOsReadPort", AE_NOT_CONFIGURED);
    let Some(width) = AccessWidth::from_port_bits(Width) else {
        return AE_BAD_PARAMETER;
    };
    if Value.is_null() {
        return AE_BAD_PARAMETER;
    }

    match services.read_port(Address, width) {
        Ok(value) => {
            // Truncation keeps at most 32 bits.
            #[allow(clippy::cast_possible_truncation)]
            let value = width.truncate(u64::from(value)) as u32;
            // SAFETY: checked non-null above.
            unsafe { Value.write(value) };
            AE_OK
        }
        Err(status) => status,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsWritePort(Address: ACPI_IO_ADDRESS, Value: UINT32, Width: UINT32) -> ACPI_STATUS {
    let services = services_or!("AcpiOsWritePort", AE_NOT_CONFIGURED);
    let Some(width) = AccessWidth::from_port_bits(Width) else {
        return AE_BAD_PARAMETER;
    };
    status(services.write_port(Address, Value, width))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsReadMemory(
    Address: ACPI_PHYSICAL_ADDRESS,
    Value: *mut UINT64,
    Width: UINT32,
) -> ACPI_STATUS {
    let services = services_or!("AcpiOsReadMemory", AE_NOT_CONFIGURED);
    let Some(width) = AccessWidth::from_bits(Width) else {
        return AE_BAD_PARAMETER;
    };
    if Value.is_null() {
        return AE_BAD_PARAMETER;
    }

    match services.read_memory(Address, width) {
        Ok(value) => {
            // SAFETY: checked non-null above.
            unsafe { Value.write(width.truncate(value)) };
            AE_OK
        }
        Err(status) => status,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsWriteMemory(Address: ACPI_PHYSICAL_ADDRESS, Value: UINT64, Width: UINT32) -> ACPI_STATUS {
    let services = services_or!("AcpiOsWriteMemory", AE_NOT_CONFIGURED);
    let Some(width) = AccessWidth::from_bits(Width) else {
        return AE_BAD_PARAMETER;
    };
    status(services.write_memory(Address, width.truncate(Value), width))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsReadPciConfiguration(
    PciId: *mut ACPI_PCI_ID,
    Reg: UINT32,
    Value: *mut UINT64,
    Width: UINT32,
) -> ACPI_STATUS {
    let services = services_or!("AcpiOsReadPciConfiguration", AE_NOT_CONFIGURED);
    let Some(width) = AccessWidth::from_bits(Width) else {
        return AE_BAD_PARAMETER;
    };
    // SAFETY: ACPICA passes null or a valid PCI id.
    let Some(id) = (unsafe { PciId.as_ref() }).copied() else {
        return AE_BAD_PARAMETER;
    };
    if Value.is_null() {
        return AE_BAD_PARAMETER;
    }

    match services.read_pci_configuration(id, Reg, width) {
        Ok(value) => {
            // SAFETY: checked non-null above.
            unsafe { Value.write(width.truncate(value)) };
            AE_OK
        }
        Err(status) => status,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsWritePciConfiguration(
    PciId: *mut ACPI_PCI_ID,
    Reg: UINT32,
    Value: UINT64,
    Width: UINT32,
) -> ACPI_STATUS {
    let services = services_or!("AcpiOsWritePciConfiguration", AE_NOT_CONFIGURED);
    let Some(width) = AccessWidth::from_bits(Width) else {
        return AE_BAD_PARAMETER;
    };
    // SAFETY: ACPICA passes null or a valid PCI id.
    let Some(id) = (unsafe { PciId.as_ref() }).copied() else {
        return AE_BAD_PARAMETER;
    };
    status(services.write_pci_configuration(id, Reg, width.truncate(Value), width))
}

// -- Miscellaneous --

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsSignal(Function: UINT32, Info: *mut c_void) -> ACPI_STATUS {
    let services = services_or!("AcpiOsSignal", AE_NOT_CONFIGURED);

    let signal = match Function {
        ACPI_SIGNAL_FATAL => {
            // SAFETY: fatal signals carry null or an ACPI_SIGNAL_FATAL_INFO.
            let Some(info) = (unsafe { Info.cast::<ACPI_SIGNAL_FATAL_INFO>().as_ref() }) else {
                return AE_BAD_PARAMETER;
            };
            log::error!(
                "AML fatal error: type {:#04x}, code {:#010x}, argument {:#010x}",
                info.Type,
                info.Code,
                info.Argument
            );
            Signal::Fatal(info)
        }
        ACPI_SIGNAL_BREAKPOINT => {
            // SAFETY: breakpoints carry null or a NUL-terminated message.
            let message = (!Info.is_null()).then(|| unsafe { CStr::from_ptr(Info.cast::<c_char>()) });
            log::warn!("AML breakpoint: {}", message.map_or("", |m| m.to_str().unwrap_or("<invalid>")));
            Signal::Breakpoint(message)
        }
        other => Signal::Unknown(other),
    };

    status(services.signal(signal))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsEnterSleep(SleepState: UINT8, RegaValue: UINT32, RegbValue: UINT32) -> ACPI_STATUS {
    let services = services_or!("AcpiOsEnterSleep", AE_NOT_CONFIGURED);
    status(services.enter_sleep(SleepState, RegaValue, RegbValue))
}

/// Renders an ACPICA message and hands it to [`OsServices::print`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsVprintf(Format: *const c_char, Args: va_list<'_>) {
    let services = services_or!("AcpiOsVprintf");
    if Format.is_null() {
        return;
    }

    // SAFETY: ACPICA passes a NUL-terminated format string.
    let format = unsafe { CStr::from_ptr(Format) }.to_bytes();
    // SAFETY: `Args` holds the arguments `format` describes.
    let mut args = unsafe { VaArgs::new(Args) };
    vprintf(services, format, &mut args);
}

/// Renders the C `format` with `args` and hands the text to `services`.
pub fn vprintf<A: ArgSource + ?Sized>(services: &dyn OsServices, format: &[u8], args: &mut A) {
    let _ = write_c_format(&mut Printer(services), format, args);
}

/// Forwards rendered text to the services.
struct Printer<'s>(&'s dyn OsServices);

impl core::fmt::Write for Printer<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.0.print(s);
        Ok(())
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsRedirectOutput(Destination: *mut c_void) {
    let services = services_or!("AcpiOsRedirectOutput");
    services.redirect_output(Destination);
}

// -- Debugger --

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsGetLine(Buffer: *mut c_char, BufferLength: UINT32, BytesRead: *mut UINT32) -> ACPI_STATUS {
    let services = services_or!("AcpiOsGetLine", AE_NOT_CONFIGURED);
    if Buffer.is_null() || BufferLength == 0 {
        return AE_BAD_PARAMETER;
    }

    let Ok(capacity) = usize::try_from(BufferLength) else {
        return AE_BAD_PARAMETER;
    };
    // SAFETY: ACPICA passes a writable buffer of `BufferLength` bytes.
    let buffer = unsafe { core::slice::from_raw_parts_mut(Buffer.cast::<u8>(), capacity) };
    // Leave room for the terminator.
    let (line, _) = buffer.split_at_mut(capacity - 1);

    match services.get_line(line) {
        Ok(read) => {
            let read = read.min(capacity - 1);
            buffer[read] = 0;
            if !BytesRead.is_null() {
                // `read` is below `BufferLength`.
                let read = UINT32::try_from(read).unwrap_or(BufferLength);
                // SAFETY: checked non-null above.
                unsafe { BytesRead.write(read) };
            }
            AE_OK
        }
        Err(status) => status,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsInitializeDebugger() -> ACPI_STATUS {
    let services = services_or!("AcpiOsInitializeDebugger", AE_NOT_CONFIGURED);
    status(services.initialize_debugger())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsTerminateDebugger() {
    let services = services_or!("AcpiOsTerminateDebugger");
    services.terminate_debugger();
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsWaitCommandReady() -> ACPI_STATUS {
    let services = services_or!("AcpiOsWaitCommandReady", AE_NOT_CONFIGURED);
    status(services.wait_command_ready())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiOsNotifyCommandComplete() -> ACPI_STATUS {
    let services = services_or!("AcpiOsNotifyCommandComplete", AE_NOT_CONFIGURED);
    status(services.notify_command_complete())
}

#[cfg(feature = "debugger")]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiDmDisassemble(
    WalkState: *mut acpica_sys::ACPI_WALK_STATE,
    Origin: *mut acpica_sys::ACPI_PARSE_OBJECT,
    NumOpcodes: UINT32,
) {
    let services = services_or!("AcpiDmDisassemble");
    services.disassemble(WalkState, Origin, NumOpcodes);
}

#[cfg(feature = "debugger")]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn AcpiDmParseDeferredOps(Root: *mut acpica_sys::ACPI_PARSE_OBJECT) {
    let services = services_or!("AcpiDmParseDeferredOps");
    services.parse_deferred_operations(Root);
}

/// Binds every export to its declared function type.
macro_rules! check_signatures {
    ($($function:ident: $declared:ident),* $(,)?) => {
        $( const _: acpica_sys::$declared = $function; )*
    };
}

check_signatures! {
    AcpiOsInitialize: AcpiOsInitializeFn,
    AcpiOsTerminate: AcpiOsTerminateFn,
    AcpiOsGetRootPointer: AcpiOsGetRootPointerFn,
    AcpiOsPredefinedOverride: AcpiOsPredefinedOverrideFn,
    AcpiOsTableOverride: AcpiOsTableOverrideFn,
    AcpiOsPhysicalTableOverride: AcpiOsPhysicalTableOverrideFn,
    AcpiOsCreateLock: AcpiOsCreateLockFn,
    AcpiOsDeleteLock: AcpiOsDeleteLockFn,
    AcpiOsAcquireLock: AcpiOsAcquireLockFn,
    AcpiOsReleaseLock: AcpiOsReleaseLockFn,
    AcpiOsCreateSemaphore: AcpiOsCreateSemaphoreFn,
    AcpiOsDeleteSemaphore: AcpiOsDeleteSemaphoreFn,
    AcpiOsWaitSemaphore: AcpiOsWaitSemaphoreFn,
    AcpiOsSignalSemaphore: AcpiOsSignalSemaphoreFn,
    AcpiOsCreateMutex: AcpiOsCreateMutexFn,
    AcpiOsDeleteMutex: AcpiOsDeleteMutexFn,
    AcpiOsAcquireMutex: AcpiOsAcquireMutexFn,
    AcpiOsReleaseMutex: AcpiOsReleaseMutexFn,
    AcpiOsAllocate: AcpiOsAllocateFn,
    AcpiOsFree: AcpiOsFreeFn,
    AcpiOsMapMemory: AcpiOsMapMemoryFn,
    AcpiOsUnmapMemory: AcpiOsUnmapMemoryFn,
    AcpiOsGetPhysicalAddress: AcpiOsGetPhysicalAddressFn,
    AcpiOsReadable: AcpiOsReadableFn,
    AcpiOsWritable: AcpiOsWritableFn,
    AcpiOsInstallInterruptHandler: AcpiOsInstallInterruptHandlerFn,
    AcpiOsRemoveInterruptHandler: AcpiOsRemoveInterruptHandlerFn,
    AcpiOsGetThreadId: AcpiOsGetThreadIdFn,
    AcpiOsExecute: AcpiOsExecuteFn,
    AcpiOsWaitEventsComplete: AcpiOsWaitEventsCompleteFn,
    AcpiOsSleep: AcpiOsSleepFn,
    AcpiOsStall: AcpiOsStallFn,
    AcpiOsGetTimer: AcpiOsGetTimerFn,
    AcpiOsReadPort: AcpiOsReadPortFn,
    AcpiOsWritePort: AcpiOsWritePortFn,
    AcpiOsReadMemory: AcpiOsReadMemoryFn,
    AcpiOsWriteMemory: AcpiOsWriteMemoryFn,
    AcpiOsReadPciConfiguration: AcpiOsReadPciConfigurationFn,
    AcpiOsWritePciConfiguration: AcpiOsWritePciConfigurationFn,
    AcpiOsSignal: AcpiOsSignalFn,
    AcpiOsEnterSleep: AcpiOsEnterSleepFn,
    AcpiOsVprintf: AcpiOsVprintfFn,
    AcpiOsRedirectOutput: AcpiOsRedirectOutputFn,
    AcpiOsGetLine: AcpiOsGetLineFn,
    AcpiOsInitializeDebugger: AcpiOsInitializeDebuggerFn,
    AcpiOsTerminateDebugger: AcpiOsTerminateDebuggerFn,
    AcpiOsWaitCommandReady: AcpiOsWaitCommandReadyFn,
    AcpiOsNotifyCommandComplete: AcpiOsNotifyCommandCompleteFn,
}

#[cfg(feature = "debugger")]
check_signatures! {
    AcpiDmDisassemble: AcpiDmDisassembleFn,
    AcpiDmParseDeferredOps: AcpiDmParseDeferredOpsFn,
}
