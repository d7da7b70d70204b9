use acpica_osl::format::{Arg, write_c_format};
use std::ffi::CStr;

fn render(format: &str, args: &[Arg]) -> String {
    let mut out = String::new();
    let mut args = args.iter().copied();
    write_c_format(&mut out, format.as_bytes(), &mut args).unwrap();
    out
}

fn text(s: &CStr) -> Arg {
    Arg::Ptr(s.as_ptr().cast())
}

#[test]
fn table_banner() {
    let out = render(
        "%-4.4s 0x%016llX %06X (v%.2d %6.6s)",
        &[
            text(c"DSDTxyz"),
            Arg::Long(0x7FE0_0000),
            Arg::Int(0x1234),
            Arg::Int(2),
            text(c"BOCHS "),
        ],
    );
    assert_eq!(out, "DSDT 0x000000007FE00000 001234 (v02 BOCHS )");
}

#[test]
fn flags() {
    let out = render(
        "%+d % d %05d %-5d| %x %X %#o %#x",
        &[
            Arg::Int(7),
            Arg::Int(7),
            Arg::Int(-42),
            Arg::Int(3),
            Arg::Int(255),
            Arg::Int(255),
            Arg::Int(8),
            Arg::Int(0),
        ],
    );
    assert_eq!(out, "+7  7 -0042 3    | ff FF 010 0");
}

#[test]
fn star_width_and_precision() {
    assert_eq!(render("[%*d]", &[Arg::Int(5), Arg::Int(42)]), "[   42]");
    assert_eq!(render("[%*d]", &[Arg::Int(-5), Arg::Int(42)]), "[42   ]");
    assert_eq!(render("[%.*s]", &[Arg::Int(2), text(c"hello")]), "[he]");
    assert_eq!(render("[%.*s]", &[Arg::Int(-1), text(c"hello")]), "[hello]");
}

#[test]
fn strings() {
    assert_eq!(render("[%-8s]", &[text(c"abc")]), "[abc     ]");
    assert_eq!(render("[%8.2s]", &[text(c"abcdef")]), "[      ab]");
    assert_eq!(render("%s", &[Arg::Ptr(std::ptr::null())]), "(null)");
    assert_eq!(render("%.3s", &[Arg::Ptr(std::ptr::null())]), "(nu");
}

#[test]
fn invalid_utf8_is_rendered_lossily() {
    let bytes = b"AB\xFFC\0";
    assert_eq!(render("%s", &[Arg::Ptr(bytes.as_ptr().cast())]), "AB\u{FFFD}C");

    let mut out = String::new();
    write_c_format(&mut out, b"x\xFEy", &mut std::iter::empty::<Arg>()).unwrap();
    assert_eq!(out, "x\u{FFFD}y");
}

#[test]
fn characters() {
    assert_eq!(
        render("[%c%3c]", &[Arg::Int(i32::from(b'A')), Arg::Int(i32::from(b'z'))]),
        "[A  z]"
    );
}

#[test]
fn pointers() {
    let address = std::ptr::without_provenance(0x1000);
    assert_eq!(render("%p", &[Arg::Ptr(address)]), "0x1000");
    assert_eq!(render("%p", &[Arg::Ptr(std::ptr::null())]), "0x0");
}

#[test]
fn unsupported_directives_are_echoed() {
    assert_eq!(render("%f %d", &[Arg::Int(3)]), "%f 3");
    assert_eq!(render("[%5.2f]", &[]), "[%5.2f]");
    assert_eq!(render("%q%d", &[Arg::Int(1)]), "%q1");
}

#[test]
fn trailing_percent_is_kept() {
    assert_eq!(render("50%", &[]), "50%");
    assert_eq!(render("50%-", &[]), "50%-");
}

#[test]
fn missing_arguments_read_as_zero() {
    assert_eq!(render("%d %x %s", &[]), "0 0 (null)");
}
