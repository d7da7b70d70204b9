//! Links the prebuilt ACPICA static library when the `native` feature is on.
//!
//! * `ACPICA_LIB_DIR`: directory holding the archive (default: this crate's directory)
//! * `ACPICA_LIB_NAME`: library name without `lib` prefix and `.a` suffix (default: `acpica`)

use std::env;

const DEFAULT_LIB_NAME: &str = "acpica";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=ACPICA_LIB_DIR");
    println!("cargo:rerun-if-env-changed=ACPICA_LIB_NAME");

    // Without `native` every interface is a stub template; nothing to link.
    if env::var_os("CARGO_FEATURE_NATIVE").is_none() {
        return;
    }

    let lib_dir = env::var("ACPICA_LIB_DIR")
        .or_else(|_| env::var("CARGO_MANIFEST_DIR"))
        .unwrap_or_else(|_| String::from("."));
    let lib_name = env::var("ACPICA_LIB_NAME").unwrap_or_else(|_| DEFAULT_LIB_NAME.to_owned());

    println!("cargo:rustc-link-search=native={lib_dir}");
    println!("cargo:rustc-link-lib=static={lib_name}");
}
