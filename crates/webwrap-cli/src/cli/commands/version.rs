//! `webwrap version`.

use webwrap_core::version;

pub fn run_version() {
    println!("webwrap native {}", version::native_version());
}
