//! Build script for ambiencefx.
//!
//! Bakes git commit metadata into the binary; see `build_support/`.

mod build_support;

fn main() {
    build_support::run();
}
