//! User-facing status messages and section headers.

use ansi_term::Colour;
use std::fmt;

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Blue.bold().paint("ℹ"), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Green.bold().paint("✔"), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Yellow.bold().paint("⚠"), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Red.bold().paint("✘"), msg);
}

/// Section header: bold title over a dashed rule.
pub fn header<T: fmt::Display>(msg: T) {
    let title = msg.to_string();
    println!("{}", Colour::Blue.bold().paint(title.as_str()));
    println!(
        "{}",
        "─".repeat(crate::utils::formatting::display_width(&title).max(8))
    );
}
