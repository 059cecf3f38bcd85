//! Operator-facing status-line macros.
//!
//! These print directly to the terminal with the same level glyphs the
//! tracing formatter uses. Diagnostics that should be filterable go
//! through `tracing` instead.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        println!("{} {}", "[+]".green().bold(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        println!("{} {}", "[✓]".green().bold(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        println!("{} {}", "[*]".yellow().bold(), format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{} {}", "[-]".red().bold(), format!($($arg)*));
    }};
}
