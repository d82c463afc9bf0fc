//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - Quantum Fourier Transform circuit builder",
        style("qfourier").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qfourier-ir   Circuit model and QFT builder");
    println!("  qfourier-sim  Reference statevector simulator");
    println!("  qfourier-cli  Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}
