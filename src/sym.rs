use crate::SymAddr;
use std::{marker, mem};

// `F` can be anything as long as it's the size of a function pointer.
trait AssertSize<T, U> {
	const ASSERT_SIZE: () = assert!(mem::size_of::<T>() == mem::size_of::<U>());
}
impl<F: Copy> AssertSize<SymAddr, F> for Symbol<'_> {}

/// A resolved symbol address, borrowed from the [`Library`](crate::Library)
/// that produced it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(transparent)]
pub struct Symbol<'a>(pub(crate) SymAddr, pub(crate) marker::PhantomData<&'a ()>);

impl<'a> Symbol<'a> {
	/// Casts to a pointer of another type.
	#[inline]
	pub const fn cast<T>(self) -> *const T {
		self.0.cast()
	}

	/// Reinterprets the resolved address as a function pointer of type `F`.
	///
	/// # Safety
	/// `F` must be a function pointer type whose signature and calling
	/// convention match the exported procedure behind this address. The
	/// returned value must not be called after the owning library has been
	/// closed.
	pub unsafe fn into_fn<F: Copy>(self) -> F {
		#[allow(clippy::let_unit_value)]
		let _ = <Self as AssertSize<SymAddr, F>>::ASSERT_SIZE;
		mem::transmute_copy(&self.0)
	}
}
