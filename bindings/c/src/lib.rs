//! C bindings for numerix.
//!
//! Exposes the discriminant, the factorial sums and the shell passthrough
//! through a plain C ABI. The header `include/numerix.h` is generated by
//! `cbindgen` at build time.
//!
//! Every fallible function returns an `NMX_*` status code and writes its
//! result through an out-pointer only on `NMX_OK`.

#![allow(unsafe_op_in_unsafe_fn)]

use std::ffi::CStr;
use std::os::raw::{c_char, c_double, c_int};

use numerix::prelude::{
    NumerixError, calculate_discriminant, cfactorial_sum, exec_system, ifactorial_sum,
};

// ============================================================================
// Status Codes
// ============================================================================

/// Success.
pub const NMX_OK: c_int = 0;
/// A required pointer argument was NULL.
pub const NMX_NULL_POINTER: c_int = 1;
/// A string argument is not valid UTF-8.
pub const NMX_INVALID_UTF8: c_int = 2;
/// A character is not a decimal digit.
pub const NMX_INVALID_DIGIT: c_int = 3;
/// A factorial argument is negative.
pub const NMX_NEGATIVE_ARGUMENT: c_int = 4;
/// A factorial argument is above 20.
pub const NMX_ARGUMENT_TOO_LARGE: c_int = 5;
/// The factorial sum does not fit in 64 bits.
pub const NMX_OVERFLOW: c_int = 6;
/// The command string cannot be passed to the interpreter.
pub const NMX_INVALID_COMMAND: c_int = 7;
/// The command interpreter could not be started.
pub const NMX_SPAWN_FAILED: c_int = 8;
/// Any other invalid input.
pub const NMX_INVALID_INPUT: c_int = 9;

/// Map a core error onto its status code.
fn status_of(e: &NumerixError) -> c_int {
    match e {
        NumerixError::InvalidDigit { .. } => NMX_INVALID_DIGIT,
        NumerixError::NegativeArgument(_) => NMX_NEGATIVE_ARGUMENT,
        NumerixError::ArgumentTooLarge { .. } => NMX_ARGUMENT_TOO_LARGE,
        NumerixError::Overflow => NMX_OVERFLOW,
        NumerixError::InvalidCommand(_) => NMX_INVALID_COMMAND,
        NumerixError::Spawn(_) => NMX_SPAWN_FAILED,
        _ => NMX_INVALID_INPUT,
    }
}

/// Borrow a NUL-terminated string.
unsafe fn parse_c_str<'a>(s: *const c_char) -> Result<&'a str, c_int> {
    if s.is_null() {
        return Err(NMX_NULL_POINTER);
    }
    CStr::from_ptr(s).to_str().map_err(|_| NMX_INVALID_UTF8)
}

/// Store `res` through `out` on success and return the status code.
unsafe fn write_result<T>(res: Result<T, NumerixError>, out: *mut T) -> c_int {
    match res {
        Ok(value) => {
            out.write(value);
            NMX_OK
        }
        Err(e) => status_of(&e),
    }
}

// ============================================================================
// Exported Functions
// ============================================================================

/// Discriminant `b*b - 4*a*c`. Never fails.
#[unsafe(no_mangle)]
pub extern "C" fn nmx_calculate_discriminant(a: c_double, b: c_double, c: c_double) -> c_double {
    calculate_discriminant(a, b, c)
}

/// Sum of the factorials of the decimal digits in `digits`.
///
/// # Safety
/// `digits` must be NULL or a valid NUL-terminated string. `out` must be NULL
/// or point to writable storage for one `uint64_t`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nmx_cfactorial_sum(digits: *const c_char, out: *mut u64) -> c_int {
    if out.is_null() {
        return NMX_NULL_POINTER;
    }
    let digits = match parse_c_str(digits) {
        Ok(s) => s,
        Err(code) => return code,
    };
    write_result(cfactorial_sum(digits), out)
}

/// Sum of the factorials of `len` integers starting at `values`.
///
/// `values` may be NULL when `len` is 0.
///
/// # Safety
/// `values` must point to `len` readable `int64_t`. `out` must be NULL or
/// point to writable storage for one `uint64_t`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nmx_ifactorial_sum(
    values: *const i64,
    len: usize,
    out: *mut u64,
) -> c_int {
    if out.is_null() {
        return NMX_NULL_POINTER;
    }
    let values: &[i64] = if len == 0 {
        &[]
    } else if values.is_null() {
        return NMX_NULL_POINTER;
    } else {
        std::slice::from_raw_parts(values, len)
    };
    write_result(ifactorial_sum(values), out)
}

/// Run `command` through the platform command interpreter.
///
/// The string is passed verbatim with no sanitization; never call this with
/// untrusted input. On `NMX_OK`, `*status` holds the interpreter's exit status.
///
/// # Safety
/// `command` must be NULL or a valid NUL-terminated string. `status` must be
/// NULL or point to writable storage for one `int`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nmx_exec_system(command: *const c_char, status: *mut c_int) -> c_int {
    if status.is_null() {
        return NMX_NULL_POINTER;
    }
    let command = match parse_c_str(command) {
        Ok(s) => s,
        Err(code) => return code,
    };
    write_result(exec_system(command), status)
}

/// Static description of a status code. The returned string is never freed.
#[unsafe(no_mangle)]
pub extern "C" fn nmx_status_message(code: c_int) -> *const c_char {
    let msg: &'static CStr = match code {
        NMX_OK => c"ok",
        NMX_NULL_POINTER => c"null pointer argument",
        NMX_INVALID_UTF8 => c"string is not valid UTF-8",
        NMX_INVALID_DIGIT => c"character is not a decimal digit",
        NMX_NEGATIVE_ARGUMENT => c"factorial argument is negative",
        NMX_ARGUMENT_TOO_LARGE => c"factorial argument exceeds 20",
        NMX_OVERFLOW => c"factorial sum overflows 64 bits",
        NMX_INVALID_COMMAND => c"command contains an interior NUL byte",
        NMX_SPAWN_FAILED => c"command interpreter could not be started",
        NMX_INVALID_INPUT => c"invalid input",
        _ => c"unknown status code",
    };
    msg.as_ptr()
}
