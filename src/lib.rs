// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
//! Run-time dynamic library loading and typed binding utilities.
//!
//! `dybind` opens a shared library by path, resolves exported symbols by
//! name, and converts resolved addresses into typed function pointers. The
//! library handle is owned by exactly one [`Library`] and released exactly
//! once, whether [`close`](Library::close) is called explicitly or the
//! owner goes out of scope.
//!
//! The [`dybind`] attribute generates a wrapper struct that eagerly binds a
//! whole `extern` block at construction:
//!
//! ```no_run
//! use std::ffi::c_int;
//!
//! #[dybind::dybind(wrapper = Frob)]
//! extern "C" {
//! 	fn frob_version() -> c_int;
//! 	#[dybind(optional)]
//! 	fn frob_fast_path(x: c_int) -> c_int;
//! }
//!
//! # fn main() -> dybind::Result<()> {
//! let frob = unsafe { Frob::open("libfrob.so")? };
//! let version = unsafe { frob.frob_version() };
//! # Ok(())
//! # }
//! ```

pub mod error;
mod library;
mod os;
mod sym;

pub use library::Library;
pub use sym::Symbol;

/// Generates a typed wrapper struct over an `extern` block.
///
/// See the crate-level documentation for an example.
pub use dybind_macro::dybind;

/// A raw address to an exported symbol. A null value means "not found".
pub type SymAddr = *const ();
/// The result of a dybind function
pub type Result<T> = std::result::Result<T, error::Error>;
