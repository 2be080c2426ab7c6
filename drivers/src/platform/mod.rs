//! Platform Abstraction Layer
//!
//! Each supported console exposes its interrupt sources and the driver for
//! its interrupt controller. The runtime uses whichever platform is selected
//! through Cargo features.
//!
//! # Usage
//!
//! ```rust,ignore
//! use drivers::platform::{CurrentInterruptController, CurrentSource};
//! ```

// Platform selection based on Cargo features
cfg_if::cfg_if! {
    if #[cfg(feature = "n64")] {
        pub mod n64;
        pub use n64::InterruptSource as CurrentSource;
        pub use n64::MipsInterface as CurrentInterruptController;
    } else {
        compile_error!(
            "No platform selected!\n\
            Use: cargo build --features n64"
        );
    }
}
