use super::Handle;
use crate::SymAddr;
use std::os::unix::ffi::OsStrExt;
use std::{ffi, ptr};

mod c;

pub(crate) unsafe fn dylib_open(path: &ffi::OsStr) -> Handle {
	let Ok(c_str) = ffi::CString::new(path.as_bytes()) else {
		return ptr::null_mut();
	};
	c::dlopen(c_str.as_ptr(), c::RTLD_NOW | c::RTLD_LOCAL)
}

pub(crate) unsafe fn dylib_symbol(lib_handle: Handle, name: &str) -> SymAddr {
	let Ok(c_str) = ffi::CString::new(name) else {
		return ptr::null();
	};
	c::dlsym(lib_handle, c_str.as_ptr()).cast_const().cast()
}

pub(crate) unsafe fn dylib_close(lib_handle: Handle) -> bool {
	c::dlclose(lib_handle) == 0
}
