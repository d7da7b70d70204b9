//! # ACPICA OS Services Layer
//!
//! Binds the ACPICA library to a host operating system. ACPICA calls out to
//! its host through the `AcpiOs*` functions of `acpiosxf.h`; this crate exports
//! all of them with C linkage and forwards each call to a single
//! [`OsServices`] implementation the host registers at boot.
//!
//! ## Overview
//!
//! ```text
//! Host kernel
//!     │ register(&'static dyn OsServices)
//!     ↓
//! acpica-osl ──── safe wrappers (subsystem, tables, namespace, resources)
//!     ↑ AcpiOs* exports            ↓ Acpi* calls
//! ACPICA (C, linked with `native`)
//!     ↓
//! acpica-sys (platform shim + declarations)
//! ```
//!
//! ## Key Components
//!
//! ### OS Services ([`OsServices`], [`register`])
//! One trait covering memory mapping, allocation, synchronization, interrupt
//! handlers, port/memory/PCI access, timing and output. Out-parameters of the
//! C interface are return values; failures are [`ACPI_STATUS`] codes.
//!
//! ### Exported OS Interface ([`osl`])
//! The `AcpiOs*` symbols ACPICA links against. Every export validates its
//! pointers and widths before calling into the registered services and
//! returns the "not configured" sentinel of its category while nothing is
//! registered.
//!
//! ### Diagnostic Output ([`format`], [`output`])
//! ACPICA prints through `AcpiOsVprintf`. The C format string is rendered in
//! Rust and the text is assembled into lines which are logged with target
//! `acpica`.
//!
//! ### Safe Wrappers
//! * [`subsystem`]: bring-up and shutdown sequence
//! * [`tables`]: table lookup with automatic release
//! * [`namespace`]: closure-based namespace walks
//! * [`resources`]: `_CRS` resource iteration
//!
//! ## Usage
//!
//! ```no_run
//! # use acpica_osl::{register, subsystem, InitOptions, OsServices};
//! # fn services() -> &'static dyn OsServices { unimplemented!() }
//! register(services())?;
//! subsystem::initialize(&InitOptions::default())?;
//! # Ok::<(), acpica_osl::AcpicaError>(())
//! ```
//!
//! ## Features
//!
//! * **`native`**: link the ACPICA library (forwarded to `acpica-sys`).
//! * **`reduced-hardware`**: forwarded to `acpica-sys`.
//! * **`debugger`**: export the AML disassembler hooks.
//! * **`uefi`**: locate the RSDP through the UEFI configuration table.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(clippy::module_name_repetitions)]

mod error;
pub mod format;
pub mod namespace;
pub mod osl;
pub mod output;
pub mod resources;
#[cfg(feature = "uefi")]
pub mod rsdp;
mod services;
pub mod subsystem;
pub mod tables;

pub use acpica_sys::ACPI_STATUS;
pub use error::{AcpicaError, exception_name};
pub use services::{AccessWidth, ExecCallback, InterruptHandler, OsServices, Signal, register, services};
pub use subsystem::{InitFlags, InitOptions};
pub use tables::{Signature, Table};
