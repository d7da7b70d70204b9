use acpica_sys::{ACPI_MACHINE_WIDTH, LONG_BITS, Signedness, WIDTH_TABLE, check_width};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("machine width {ACPI_MACHINE_WIDTH}, long {LONG_BITS} bits");
    println!("{:<24} {:>8} {:>8}  {:<10} status", "alias", "declared", "actual", "signedness");

    let mut mismatches = 0usize;
    for alias in WIDTH_TABLE {
        let signedness = match alias.declared_signedness {
            Signedness::Signed => "signed",
            Signedness::Unsigned => "unsigned",
            Signedness::Host => "host",
        };
        let status = match check_width(alias) {
            Ok(()) => "ok".to_string(),
            Err(err) => {
                mismatches += 1;
                err.to_string()
            }
        };
        println!(
            "{:<24} {:>8} {:>8}  {:<10} {status}",
            alias.name, alias.declared_bits, alias.actual_bits, signedness
        );
    }

    if mismatches == 0 {
        eprintln!("{} aliases match this target", WIDTH_TABLE.len());
        ExitCode::SUCCESS
    } else {
        eprintln!("{mismatches} of {} aliases do not match this target", WIDTH_TABLE.len());
        ExitCode::FAILURE
    }
}
