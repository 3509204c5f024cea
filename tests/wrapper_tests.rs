#![cfg(any(target_os = "linux", target_os = "macos", windows))]

use dybind::dybind;
use dybind::error::ErrorKind;
use std::ffi::c_double;

#[cfg(target_os = "linux")]
const MATH_LIB: &str = "libm.so.6";
#[cfg(target_os = "macos")]
const MATH_LIB: &str = "libm.dylib";
#[cfg(windows)]
const MATH_LIB: &str = "msvcrt.dll";

#[dybind(wrapper = Math)]
extern "C" {
	fn fabs(x: c_double) -> c_double;
	#[dybind(link_name = "pow")]
	fn power(base: c_double, exp: c_double) -> c_double;
	#[dybind(optional)]
	fn fabs_but_faster(x: c_double) -> c_double;
}

#[test]
fn test_wrapper_binds_eagerly() {
	let math = unsafe { Math::open(MATH_LIB).unwrap() };
	assert_eq!(unsafe { math.fabs(-1.5) }, 1.5);
	assert_eq!(unsafe { math.power(2.0, 10.0) }, 1024.0);
	assert!(!math.library().is_closed());
}

#[test]
fn test_wrapper_optional_symbol() {
	let math = unsafe { Math::open(MATH_LIB).unwrap() };
	assert_eq!(unsafe { math.fabs_but_faster(1.0) }, None);
}

#[test]
fn test_wrapper_missing_library() {
	let err = unsafe { Math::open("not_a_math_library.so.404") }.unwrap_err();
	assert_eq!(err.kind(), ErrorKind::LibNotFound);
}

#[dybind(wrapper = Broken)]
extern "C" {
	fn this_symbol_does_not_exist(x: c_double) -> c_double;
}

#[test]
fn test_wrapper_missing_required_symbol() {
	let err = unsafe { Broken::open(MATH_LIB) }.unwrap_err();
	assert_eq!(err.kind(), ErrorKind::SymNotFound);
	assert_eq!(err.symbol(), Some("this_symbol_does_not_exist"));
}
