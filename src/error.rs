use std::{error, fmt, path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	LibNotFound,
	SymNotFound,
}

/// The error type produced by [`Library`](crate::Library) operations.
#[derive(Debug)]
pub struct Error {
	kind: ErrorKind,
	lib: path::PathBuf,
	sym: Option<String>,
}

impl error::Error for Error {}

impl Error {
	pub(crate) fn lib_not_found(lib: path::PathBuf) -> Self {
		Self {
			kind: ErrorKind::LibNotFound,
			lib,
			sym: None,
		}
	}

	pub(crate) fn sym_not_found(sym: &str, lib: &path::Path) -> Self {
		Self {
			kind: ErrorKind::SymNotFound,
			lib: lib.to_path_buf(),
			sym: Some(sym.to_owned()),
		}
	}

	#[inline]
	pub const fn kind(&self) -> ErrorKind {
		self.kind
	}

	/// Path of the library the failed operation was issued against.
	#[inline]
	pub fn library(&self) -> &path::Path {
		&self.lib
	}

	/// Symbol name of a failed resolution, if any.
	#[inline]
	pub fn symbol(&self) -> Option<&str> {
		self.sym.as_deref()
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let err = match self.kind {
			ErrorKind::LibNotFound => format!("library `{}` not found", self.lib.display()),
			ErrorKind::SymNotFound => match self.sym {
				Some(ref name) => {
					format!("symbol `{name}` not found in `{}`", self.lib.display())
				}
				None => format!("symbol not found in `{}`", self.lib.display()),
			},
		};
		write!(f, "dybind error: {err}")
	}
}
