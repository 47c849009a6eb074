//! Freestanding memory helpers that the ARM code generator calls implicitly
//! (`__aeabi_memcpy`, `__aeabi_memmove`, `__aeabi_memset`, `__aeabi_memclr`
//! and their `4`/`8` aligned aliases), plus the logging and test harness
//! used to exercise them on target.

#![no_std]
// The byte loops below must not be recognised as memcpy/memset idioms and
// lowered back into calls to the symbols they implement.
#![no_builtins]

#[cfg(test)]
extern crate std;

pub mod aeabi;
pub mod klog;
#[cfg(feature = "libc-names")]
pub mod libc;
pub mod memory;
pub mod testing;

#[doc(hidden)]
pub use paste;

pub use aeabi::{
    __aeabi_memclr, __aeabi_memclr4, __aeabi_memclr8, __aeabi_memcpy, __aeabi_memcpy4,
    __aeabi_memcpy8, __aeabi_memmove, __aeabi_memmove4, __aeabi_memmove8, __aeabi_memset,
    __aeabi_memset4, __aeabi_memset8,
};
pub use klog::{
    klog_attach_sink, klog_detach_sink, klog_get_level, klog_init, klog_set_level, KlogLevel,
    KlogSink,
};
pub use memory::{
    memclr_internal, memcmp_internal, memcpy_internal, memmove_internal, memset_internal,
};
