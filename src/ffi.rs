//! C-callable entry points for the driver linked against compiled programs.
//! The emitted driver runs the program, gets one word back, and hands it to
//! [`prim__Result_print`] for display.

use std::io::{self, Write};

use crate::immediate::write_result;

#[no_mangle]
pub extern "C" fn prim__Result_print(word: u32) {
    let mut out = io::stdout().lock();

    if let Err(err) = write_result(word, &mut out) {
        let _ = writeln!(io::stderr(), "prim__Result_print: {err}");
    }
}
