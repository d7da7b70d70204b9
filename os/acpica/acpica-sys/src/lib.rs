//! # ACPICA Platform Adaptation Shim
//!
//! This crate adapts the ACPI Component Architecture (ACPICA) reference
//! implementation to the build target. It supplies the integer aliases,
//! linkage mappings and "not configured" stub templates the ACPICA interface
//! expects from its host environment, and declares that interface on top of
//! them.
//!
//! ## Overview
//!
//! ACPICA is vendored, unmodified C. Its headers assume a handful of
//! definitions from a per-platform environment header: integer widths, the
//! machine width, how to spell `inline`, the calling convention of exported
//! functions, `va_list`, and a set of macros that turn optional interfaces into
//! trivial inline functions. This crate is that environment header, expressed
//! as Rust modules, followed by the ACPICA declarations that depend on it.
//!
//! ## Layering
//!
//! The modules below are declared in the same order the ACPICA headers must be
//! included. Each layer only refers to layers declared before it:
//!
//! ```text
//! platform   (acenv / platform header: widths, linkage, stubs)
//!     ↓
//! types      (actypes.h)
//!     ↓
//! status     (acexcep.h)
//!     ↓
//! restype    (acrestyp.h)
//!     ↓
//! xface      (acpixf.h: functions ACPICA exports)
//!     ↓
//! osxf       (acpiosxf.h: functions ACPICA imports from the host)
//! ```
//!
//! ## Compile-Time Guarantees
//!
//! Every width alias carries a `const` assertion on its size and signedness.
//! Structures shared with ACPICA carry `const` assertions on their size. A
//! mismatch with the host ABI is a build failure rather than silent layout
//! corruption at runtime.
//!
//! ## Features
//!
//! * **`native`**: link the prebuilt ACPICA static library (see `build.rs`)
//!   and declare its interface as real `extern "C"` imports. Without it, every
//!   interface function is generated from the stub template of its category.
//! * **`reduced-hardware`**: ACPICA was built for ACPI hardware-reduced
//!   platforms; hardware-dependent interfaces always return
//!   [`AE_NOT_CONFIGURED`](status::AE_NOT_CONFIGURED).

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(non_camel_case_types, non_snake_case, non_upper_case_globals)] // follows ACPICA naming
#![allow(clippy::upper_case_acronyms, clippy::module_name_repetitions)]

// Declaration order is include order; keep it.
#[macro_use]
pub mod platform;
// actypes.h
pub mod types;
// acexcep.h
pub mod status;
// acrestyp.h
pub mod restype;
// acpixf.h
pub mod xface;
// acpiosxf.h
pub mod osxf;

pub use osxf::*;
pub use platform::*;
pub use restype::*;
pub use status::*;
pub use types::*;
pub use xface::*;
