// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason

use crate::error::Error;
use crate::os;
use crate::sym::Symbol;
use crate::Result;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::{cell, ptr};

/// An open shared library on the filesystem.
///
/// A `Library` exclusively owns its handle from a successful [`open`] until
/// it is released, either through [`close`] or on drop, whichever comes
/// first. The handle is released at most once.
///
/// `Library` performs no internal synchronization; it is `!Sync` by
/// construction. Threads that need the same library should each open their
/// own instance; the OS loader reference-counts per-path loads.
///
/// [`open`]: Library::open
/// [`close`]: Library::close
#[derive(Debug)]
pub struct Library {
	// null once the handle has been released
	hlib: cell::Cell<os::Handle>,
	path: PathBuf,
}

impl Library {
	/// Opens the shared library at `path`.
	///
	/// # Errors
	/// Returns [`ErrorKind::LibNotFound`](crate::error::ErrorKind::LibNotFound)
	/// if the library cannot be loaded. This is the only way construction
	/// fails; a `Library` you hold always reached the loaded state.
	///
	/// # Examples
	/// ```no_run
	/// let lib = dybind::Library::open("libfrob.so")?;
	/// # Ok::<(), dybind::error::Error>(())
	/// ```
	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let hlib = unsafe { os::dylib_open(path.as_os_str()) };
		if hlib.is_null() {
			Err(Error::lib_not_found(path.to_path_buf()))
		} else {
			Ok(Self {
				hlib: cell::Cell::new(hlib),
				path: path.to_path_buf(),
			})
		}
	}

	/// Path this library was opened from.
	#[inline]
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Returns `true` once the handle has been released.
	#[inline]
	pub fn is_closed(&self) -> bool {
		self.hlib.get().is_null()
	}

	/// Resolves `name` without raising or changing state.
	///
	/// Returns `None` if the symbol is absent or the library has already
	/// been closed. Use this to probe optional symbols before committing.
	pub fn try_symbol(&self, name: &str) -> Option<Symbol<'_>> {
		let hlib = self.hlib.get();
		// The released handle is never handed to the OS resolver: dlsym
		// treats a null handle as RTLD_DEFAULT on some platforms.
		if hlib.is_null() {
			return None;
		}
		let addr = unsafe { os::dylib_symbol(hlib, name) };
		if addr.is_null() {
			None
		} else {
			Some(Symbol(addr, PhantomData))
		}
	}

	/// Resolves `name` and returns it as a function pointer of type `F`.
	///
	/// Failure releases the handle as a side effect: the instance ends up
	/// closed and every further `bind` fails the same way. Use
	/// [`try_bind`](Library::try_bind) for symbols that may be absent.
	///
	/// # Errors
	/// Returns [`ErrorKind::SymNotFound`](crate::error::ErrorKind::SymNotFound),
	/// carrying the symbol name and the library path.
	///
	/// # Safety
	/// `F` must be a function pointer type whose signature and calling
	/// convention match the exported procedure. Calling the returned
	/// pointer after this library is closed is undefined behavior.
	///
	/// # Examples
	/// ```no_run
	/// let libm = dybind::Library::open("libm.so.6")?;
	/// let fabs = unsafe { libm.bind::<unsafe extern "C" fn(f64) -> f64>("fabs")? };
	/// assert_eq!(unsafe { fabs(-1.0) }, 1.0);
	/// # Ok::<(), dybind::error::Error>(())
	/// ```
	pub unsafe fn bind<F: Copy>(&self, name: &str) -> Result<F> {
		match self.try_symbol(name) {
			Some(sym) => Ok(sym.into_fn()),
			None => {
				self.close();
				Err(Error::sym_not_found(name, &self.path))
			}
		}
	}

	/// Non-raising variant of [`bind`](Library::bind).
	///
	/// Returns `None` if the symbol is absent, leaving the library open so
	/// further resolutions may still succeed.
	///
	/// # Safety
	/// Same contract as [`bind`](Library::bind).
	pub unsafe fn try_bind<F: Copy>(&self, name: &str) -> Option<F> {
		self.try_symbol(name).map(|sym| unsafe { sym.into_fn() })
	}

	/// Releases the library handle.
	///
	/// Closing is idempotent: the first call releases the handle and every
	/// later call, including the implicit one on drop, is a no-op. The OS
	/// result is discarded, as there is no recovery action for a failed
	/// unload.
	pub fn close(&self) {
		let hlib = self.hlib.replace(ptr::null_mut());
		if !hlib.is_null() {
			let _ = unsafe { os::dylib_close(hlib) };
		}
	}
}

impl Drop for Library {
	fn drop(&mut self) {
		self.close();
	}
}
