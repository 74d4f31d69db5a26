//! Command: print version information.

/// Print the installer version to stdout.
#[allow(clippy::print_stdout)]
pub fn run() {
    println!("devtools-setup {}", crate::version());
}
