use super::Handle;
use crate::SymAddr;
use std::os::windows::ffi::OsStrExt;
use std::{ffi, ptr};

mod c;

fn to_wide(path: &ffi::OsStr) -> Vec<u16> {
	path.encode_wide().chain(std::iter::once(0u16)).collect()
}

pub(crate) unsafe fn dylib_open(path: &ffi::OsStr) -> Handle {
	let wide_str: Vec<u16> = to_wide(path);
	c::LoadLibraryExW(wide_str.as_ptr(), ptr::null_mut(), 0)
}

pub(crate) unsafe fn dylib_symbol(lib_handle: Handle, name: &str) -> SymAddr {
	let Ok(c_str) = ffi::CString::new(name) else {
		return ptr::null();
	};
	c::GetProcAddress(lib_handle, c_str.as_ptr()).cast()
}

pub(crate) unsafe fn dylib_close(lib_handle: Handle) -> bool {
	c::FreeLibrary(lib_handle) != 0
}
