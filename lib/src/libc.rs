//! Plain C memory symbols for images that link no C library at all.
//!
//! LLVM emits `memcpy`/`memset` for its own intrinsics and `memcmp` for slice
//! comparisons, independently of the `__aeabi_*` helpers.

use core::ffi::c_int;

use crate::memory::{memcmp_internal, memcpy_internal, memmove_internal, memset_internal};

#[unsafe(no_mangle)]
pub unsafe extern "C" fn memcpy(dest: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    unsafe { memcpy_internal(dest, src, n) };
    dest
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn memmove(dest: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    unsafe { memmove_internal(dest, src, n) };
    dest
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn memset(dest: *mut u8, value: c_int, n: usize) -> *mut u8 {
    unsafe { memset_internal(dest, n, value) };
    dest
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn memcmp(s1: *const u8, s2: *const u8, n: usize) -> c_int {
    unsafe { memcmp_internal(s1, s2, n) }
}
