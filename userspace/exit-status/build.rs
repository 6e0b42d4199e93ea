//! Build script for the exit-status demo.
//!
//! Bakes the status `main` returns in from `RAWSTART_STATUS` (default 0), and
//! links without the C runtime so the loader enters at our `_start`.

use std::fmt::Write as _;

fn main() {
    println!("cargo:rerun-if-env-changed=RAWSTART_STATUS");

    let status = match std::env::var("RAWSTART_STATUS") {
        Ok(raw) => raw
            .trim()
            .parse::<i32>()
            .unwrap_or_else(|e| panic!("RAWSTART_STATUS={raw:?} is not an i32: {e}")),
        Err(_) => 0,
    };

    let out_dir = std::env::var("OUT_DIR").unwrap();
    let mut source = String::new();
    writeln!(source, "/// Status returned by `main`, from `RAWSTART_STATUS`.").unwrap();
    writeln!(source, "const STATUS: i32 = {status};").unwrap();
    std::fs::write(std::path::Path::new(&out_dir).join("status.rs"), source).unwrap();

    // No crt1.o/crti.o, no libc, no dynamic loader. `_start` lives in an
    // rlib, so mark it undefined to make the linker pull it in.
    for arg in ["-nostartfiles", "-nostdlib", "-static", "-Wl,--undefined=_start"] {
        println!("cargo:rustc-link-arg-bins={arg}");
    }
}
