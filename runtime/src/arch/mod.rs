//! Architecture-specific glue.

cfg_if::cfg_if! {
    if #[cfg(any(target_arch = "mips", target_arch = "mips64"))] {
        pub mod mips;
    }
}
