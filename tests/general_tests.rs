#![cfg(any(target_os = "linux", target_os = "macos", windows))]

use dybind::error::ErrorKind;
use dybind::*;
use std::ffi::{c_char, c_double, c_int};

#[cfg(target_os = "linux")]
const MATH_LIB: &str = "libm.so.6";
#[cfg(target_os = "macos")]
const MATH_LIB: &str = "libm.dylib";
#[cfg(windows)]
const MATH_LIB: &str = "msvcrt.dll";

#[cfg(target_os = "linux")]
const C_LIB: &str = "libc.so.6";
#[cfg(target_os = "macos")]
const C_LIB: &str = "libSystem.B.dylib";
#[cfg(windows)]
const C_LIB: &str = "msvcrt.dll";

type UnaryFn = unsafe extern "C" fn(c_double) -> c_double;

#[test]
fn test_open_missing_library() {
	let err = Library::open("definitely_not_a_real_library.so.404").unwrap_err();
	assert_eq!(err.kind(), ErrorKind::LibNotFound);
	assert!(err.symbol().is_none());
	assert!(err.to_string().contains("definitely_not_a_real_library"));
}

#[test]
fn test_bind_and_call() {
	let libm = Library::open(MATH_LIB).unwrap();
	let fabs = unsafe { libm.bind::<UnaryFn>("fabs").unwrap() };
	assert_eq!(unsafe { fabs(-1.5) }, 1.5);
	assert!(!libm.is_closed());
}

#[test]
fn test_bound_fn_shows_native_behavior() {
	let libc = Library::open(C_LIB).unwrap();
	let atoi = unsafe {
		libc.bind::<unsafe extern "C" fn(*const c_char) -> c_int>("atoi")
			.unwrap()
	};
	assert_eq!(unsafe { atoi(b"42\0".as_ptr().cast()) }, 42);
}

#[test]
fn test_strict_missing_symbol_closes() {
	let libm = Library::open(MATH_LIB).unwrap();
	let err = unsafe { libm.bind::<UnaryFn>("fabs_but_not_really") }.unwrap_err();
	assert_eq!(err.kind(), ErrorKind::SymNotFound);
	assert_eq!(err.symbol(), Some("fabs_but_not_really"));
	assert_eq!(err.library(), std::path::Path::new(MATH_LIB));
	assert!(err.to_string().contains("fabs_but_not_really"));
	assert!(libm.is_closed());

	// the released handle fails further resolutions the same way
	let err = unsafe { libm.bind::<UnaryFn>("fabs") }.unwrap_err();
	assert_eq!(err.kind(), ErrorKind::SymNotFound);
	assert!(libm.try_symbol("fabs").is_none());
}

#[test]
fn test_probe_missing_symbol_keeps_open() {
	let libm = Library::open(MATH_LIB).unwrap();
	assert!(unsafe { libm.try_bind::<UnaryFn>("fabs_but_not_really") }.is_none());
	assert!(!libm.is_closed());

	let fabs = unsafe { libm.bind::<UnaryFn>("fabs").unwrap() };
	assert_eq!(unsafe { fabs(-2.5) }, 2.5);
}

#[test]
fn test_close_idempotent() {
	let libm = Library::open(MATH_LIB).unwrap();
	libm.close();
	libm.close();
	libm.close();
	assert!(libm.is_closed());
	// drop performs one more, no-op release
}

#[test]
fn test_instances_do_not_share_handles() {
	let first = Library::open(MATH_LIB).unwrap();
	let second = Library::open(MATH_LIB).unwrap();
	drop(first);
	let fabs = unsafe { second.bind::<UnaryFn>("fabs").unwrap() };
	assert_eq!(unsafe { fabs(-3.0) }, 3.0);
}

#[test]
fn test_raw_symbol_probe() {
	let libm = Library::open(MATH_LIB).unwrap();
	let sym = libm.try_symbol("fabs").unwrap();
	assert!(!sym.cast::<std::ffi::c_void>().is_null());
}
