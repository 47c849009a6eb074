use core::ffi::c_int;

/// Copy `n` bytes from `src` to `dest`, lowest address first.
///
/// # Safety
/// `dest` must be writable and `src` readable for `n` bytes. The regions must
/// not overlap; use [`memmove_internal`] when they might.
pub unsafe fn memcpy_internal(dest: *mut u8, src: *const u8, n: usize) {
    unsafe {
        let mut i = 0usize;
        while i < n {
            *dest.add(i) = *src.add(i);
            i += 1;
        }
    }
}

/// Copy `n` bytes from `src` to `dest` where the regions may overlap.
///
/// Walks forward when `dest` sits below `src` and backward otherwise, so every
/// source byte is read before the write that would clobber it. `dest == src`
/// takes the backward path and rewrites each byte with itself.
///
/// # Safety
/// `dest` must be writable and `src` readable for `n` bytes.
pub unsafe fn memmove_internal(dest: *mut u8, src: *const u8, n: usize) {
    unsafe {
        if (dest as *const u8) < src {
            let mut i = 0usize;
            while i < n {
                *dest.add(i) = *src.add(i);
                i += 1;
            }
        } else {
            let mut i = n;
            while i > 0 {
                i -= 1;
                *dest.add(i) = *src.add(i);
            }
        }
    }
}

/// Write `value` truncated to a byte across `n` bytes of `dest`.
///
/// # Safety
/// `dest` must be writable for `n` bytes.
pub unsafe fn memset_internal(dest: *mut u8, n: usize, value: c_int) {
    unsafe {
        let byte = value as u8;
        let mut i = 0usize;
        while i < n {
            *dest.add(i) = byte;
            i += 1;
        }
    }
}

/// Zero `n` bytes of `dest`.
///
/// # Safety
/// `dest` must be writable for `n` bytes.
pub unsafe fn memclr_internal(dest: *mut u8, n: usize) {
    unsafe {
        let mut i = 0usize;
        while i < n {
            *dest.add(i) = 0;
            i += 1;
        }
    }
}

/// # Safety
/// Both regions must be readable for `n` bytes.
pub unsafe fn memcmp_internal(s1: *const u8, s2: *const u8, n: usize) -> c_int {
    unsafe {
        let mut i = 0usize;
        while i < n {
            let a = *s1.add(i);
            let b = *s2.add(i);
            if a != b {
                return if a < b { -1 } else { 1 };
            }
            i += 1;
        }
        0
    }
}
