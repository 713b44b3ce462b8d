//! Output macros for the reuni CLI.
//!
//! Command results go to stdout through `reuni_println!`.
//! Failures that end a command go to stderr through `reuni_error!`.
//! Diagnostics belong to `tracing`, not to these macros.

#[macro_export]
macro_rules! reuni_println {
    () => {
        println!()
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*))
    };
}

#[macro_export]
macro_rules! reuni_error {
    ($($arg:tt)*) => {
        eprintln!("{}", format!($($arg)*))
    };
}
