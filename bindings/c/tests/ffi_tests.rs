//! Tests for the C ABI, called from Rust as a C caller would.

use std::ffi::CStr;
use std::os::raw::c_int;
use std::ptr;

use numerix_c::*;

/// Test the discriminant export.
#[test]
fn test_ffi_discriminant() {
    assert_eq!(nmx_calculate_discriminant(1.0, -3.0, 1.0), 5.0);
}

/// Test the digit-string sum and its error codes.
#[test]
fn test_ffi_cfactorial_sum() {
    let mut out = 0u64;

    let code = unsafe { nmx_cfactorial_sum(c"12345".as_ptr(), &mut out) };
    assert_eq!((code, out), (NMX_OK, 153));

    out = 7;
    let code = unsafe { nmx_cfactorial_sum(c"12x".as_ptr(), &mut out) };
    assert_eq!(code, NMX_INVALID_DIGIT);
    assert_eq!(out, 7, "out must be untouched on failure");

    let code = unsafe { nmx_cfactorial_sum(ptr::null(), &mut out) };
    assert_eq!(code, NMX_NULL_POINTER);

    let code = unsafe { nmx_cfactorial_sum(c"1".as_ptr(), ptr::null_mut()) };
    assert_eq!(code, NMX_NULL_POINTER);
}

/// Test invalid UTF-8 is reported, not decoded lossily.
#[test]
fn test_ffi_cfactorial_sum_invalid_utf8() {
    let bytes = [0xFFu8, 0x00];
    let mut out = 0u64;
    let code = unsafe { nmx_cfactorial_sum(bytes.as_ptr().cast(), &mut out) };
    assert_eq!(code, NMX_INVALID_UTF8);
}

/// Test the integer sum and its error codes.
#[test]
fn test_ffi_ifactorial_sum() {
    let mut out = 0u64;

    let values = [1i64, 2, 3, 4, 5];
    let code = unsafe { nmx_ifactorial_sum(values.as_ptr(), values.len(), &mut out) };
    assert_eq!((code, out), (NMX_OK, 153));

    let code = unsafe { nmx_ifactorial_sum(ptr::null(), 0, &mut out) };
    assert_eq!((code, out), (NMX_OK, 0));

    let code = unsafe { nmx_ifactorial_sum(ptr::null(), 3, &mut out) };
    assert_eq!(code, NMX_NULL_POINTER);

    let negative = [-1i64];
    let code = unsafe { nmx_ifactorial_sum(negative.as_ptr(), 1, &mut out) };
    assert_eq!(code, NMX_NEGATIVE_ARGUMENT);

    let large = [21i64];
    let code = unsafe { nmx_ifactorial_sum(large.as_ptr(), 1, &mut out) };
    assert_eq!(code, NMX_ARGUMENT_TOO_LARGE);

    let many = [20i64; 8];
    let code = unsafe { nmx_ifactorial_sum(many.as_ptr(), many.len(), &mut out) };
    assert_eq!(code, NMX_OVERFLOW);
}

/// Test the shell passthrough reports the exit status through the out-pointer.
#[test]
fn test_ffi_exec_system() {
    let mut status: c_int = -1;

    let code = unsafe { nmx_exec_system(c"echo ok".as_ptr(), &mut status) };
    assert_eq!((code, status), (NMX_OK, 0));

    let code = unsafe { nmx_exec_system(c"exit 4".as_ptr(), &mut status) };
    assert_eq!((code, status), (NMX_OK, 4));

    let code = unsafe { nmx_exec_system(ptr::null(), &mut status) };
    assert_eq!(code, NMX_NULL_POINTER);
}

/// Test every status code has a message.
#[test]
fn test_ffi_status_messages() {
    let message = |code| unsafe { CStr::from_ptr(nmx_status_message(code)) };

    assert_eq!(message(NMX_OK).to_str(), Ok("ok"));
    assert_eq!(
        message(NMX_OVERFLOW).to_str(),
        Ok("factorial sum overflows 64 bits")
    );
    for code in NMX_OK..=NMX_INVALID_INPUT {
        assert_ne!(message(code).to_str(), Ok("unknown status code"));
    }
    assert_eq!(message(42).to_str(), Ok("unknown status code"));
}
