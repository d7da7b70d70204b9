//! Closure-based namespace walks.

use acpica_sys::{
    ACPI_HANDLE, ACPI_OBJECT_TYPE, ACPI_STATUS, AE_CTRL_DEPTH, AE_CTRL_TERMINATE, AE_OK, AcpiWalkNamespace, UINT32,
};
use core::ffi::c_void;

use crate::error::{AcpicaError, check};

/// What a walk does after visiting an object.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WalkControl {
    Continue,
    /// Do not descend below the object just visited.
    SkipSubtree,
    /// End the walk.
    Stop,
}

impl WalkControl {
    const fn status(self) -> ACPI_STATUS {
        match self {
            Self::Continue => AE_OK,
            Self::SkipSubtree => AE_CTRL_DEPTH,
            Self::Stop => AE_CTRL_TERMINATE,
        }
    }
}

/// Descending callback handed to ACPICA; `context` points at the closure.
unsafe extern "C" fn walk_trampoline<F>(
    object: ACPI_HANDLE,
    nesting_level: UINT32,
    context: *mut c_void,
    _return_value: *mut *mut c_void,
) -> ACPI_STATUS
where
    F: FnMut(ACPI_HANDLE, u32) -> WalkControl,
{
    // SAFETY: `walk` passes a pointer to an `F` that outlives the walk.
    let callback = unsafe { &mut *context.cast::<F>() };
    callback(object, nesting_level).status()
}

/// Visits every object of `object_type` below `start`, at most `max_depth`
/// levels deep, depth first.
///
/// `callback` receives the object handle and its nesting level (1 for direct
/// children of `start`).
///
/// # Errors
/// [`AcpicaError::Status`] if ACPICA rejects the walk.
///
/// ```no_run
/// use acpica_osl::namespace::{self, WalkControl};
/// use acpica_sys::{ACPI_ROOT_OBJECT, ACPI_TYPE_DEVICE, ACPI_UINT32_MAX};
///
/// let mut devices = 0;
/// namespace::walk(ACPI_TYPE_DEVICE, ACPI_ROOT_OBJECT, ACPI_UINT32_MAX, |_, _| {
///     devices += 1;
///     WalkControl::Continue
/// })?;
/// # Ok::<(), acpica_osl::AcpicaError>(())
/// ```
pub fn walk<F>(object_type: ACPI_OBJECT_TYPE, start: ACPI_HANDLE, max_depth: u32, mut callback: F) -> Result<(), AcpicaError>
where
    F: FnMut(ACPI_HANDLE, u32) -> WalkControl,
{
    // SAFETY: the trampoline matches `F`, and `callback` lives across the call.
    let status = unsafe {
        AcpiWalkNamespace(
            object_type,
            start,
            max_depth,
            Some(walk_trampoline::<F>),
            None,
            (&raw mut callback).cast::<c_void>(),
            core::ptr::null_mut(),
        )
    };
    check("AcpiWalkNamespace", status)
}
