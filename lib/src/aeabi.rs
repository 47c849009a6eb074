//! ARM run-time ABI memory helpers.
//!
//! clang's ARM backend lowers struct copies and zero-initialisation to calls
//! such as `__aeabi_memcpy4` or `__aeabi_memclr8`, picking the suffix from the
//! alignment it can prove. newlib normally supplies these; a `-nostdlib` image
//! has to bring its own. The hinted names are advisory only, so every alias
//! forwards to the byte-granular base of its family.

use core::ffi::c_int;

use crate::memory::{memclr_internal, memcpy_internal, memmove_internal, memset_internal};

/// Define an exported `__aeabi_*` base routine plus its `4` and `8` aliases.
macro_rules! aeabi_family {
    (
        $(#[$meta:meta])*
        $name:ident($($arg:ident: $ty:ty),* $(,)?) => $internal:path
    ) => {
        ::paste::paste! {
            $(#[$meta])*
            #[unsafe(no_mangle)]
            pub unsafe extern "C" fn $name($($arg: $ty),*) {
                unsafe { $internal($($arg),*) }
            }

            #[doc = concat!("`", stringify!($name), "` with 4-byte aligned operands.")]
            ///
            /// # Safety
            #[doc = concat!("Same contract as [`", stringify!($name), "`].")]
            #[unsafe(no_mangle)]
            pub unsafe extern "C" fn [<$name 4>]($($arg: $ty),*) {
                unsafe { $name($($arg),*) }
            }

            #[doc = concat!("`", stringify!($name), "` with 8-byte aligned operands.")]
            ///
            /// # Safety
            #[doc = concat!("Same contract as [`", stringify!($name), "`].")]
            #[unsafe(no_mangle)]
            pub unsafe extern "C" fn [<$name 8>]($($arg: $ty),*) {
                unsafe { $name($($arg),*) }
            }
        }
    };
}

aeabi_family! {
    /// Copy `n` bytes from `src` to `dest`.
    ///
    /// # Safety
    /// `dest` must be writable and `src` readable for `n` bytes, and the two
    /// regions must not overlap.
    __aeabi_memcpy(dest: *mut u8, src: *const u8, n: usize) => memcpy_internal
}

aeabi_family! {
    /// Copy `n` bytes from `src` to `dest`; the regions may overlap.
    ///
    /// # Safety
    /// `dest` must be writable and `src` readable for `n` bytes.
    __aeabi_memmove(dest: *mut u8, src: *const u8, n: usize) => memmove_internal
}

aeabi_family! {
    /// Fill `n` bytes of `dest` with the low byte of `c`.
    ///
    /// Note the argument order differs from C `memset`.
    ///
    /// # Safety
    /// `dest` must be writable for `n` bytes.
    __aeabi_memset(dest: *mut u8, n: usize, c: c_int) => memset_internal
}

aeabi_family! {
    /// Zero `n` bytes of `dest`.
    ///
    /// # Safety
    /// `dest` must be writable for `n` bytes.
    __aeabi_memclr(dest: *mut u8, n: usize) => memclr_internal
}
