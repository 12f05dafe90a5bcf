//! The lockc-rs eBPF program: declares the shared state tables (§3/§6)
//! and attaches the pure decision logic in `lockc-core` to the kernel
//! hooks named in §6.
//!
//! Built for the `bpfel-unknown-none`/`bpfeb-unknown-none` target and
//! loaded by `lockc-loader`, never run directly.

#![no_std]
#![no_main]

mod adapters;
mod bindings;
mod hooks;
mod maps;
mod util;

#[cfg(not(test))]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    unsafe { core::hint::unreachable_unchecked() }
}
