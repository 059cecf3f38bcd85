use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

const BANNER_0: &str = r#"
     █     █░ ▄▄▄     ▄▄▄█████▓ ▄████▄   ██░ ██  ██▀███
    ▓█░ █ ░█░▒████▄   ▓  ██▒ ▓▒▒██▀ ▀█  ▓██░ ██▒▓██ ▒ ██▒
    ▒█░ █ ░█ ▒██  ▀█▄ ▒ ▓██░ ▒░▒▓█    ▄ ▒██▀▀██░▓██ ░▄█ ▒
    ░█░ █ ░█ ░██▄▄▄▄██░ ▓██▓ ░ ▒▓▓▄ ▄██▒░▓█ ░██ ▒██▀▀█▄
    ░░██▒██▓  ▓█   ▓██▒ ▒██▒ ░ ▒ ▓███▀ ░░▓█▒░██▓░██▓ ▒██▒
    ░ ▓░▒ ▒   ▒▒   ▓▒█░ ▒ ░░   ░ ░▒ ▒  ░ ▒ ░░▒░▒░ ▒▓ ░▒▓░
      ▒ ░ ░    ▒   ▒▒ ░   ░      ░  ▒    ▒ ░▒░ ░  ░▒ ░ ▒░
"#;

const BANNER_1: &str = r#"
     __      __  ______  ______  ___  _  _  ____
    /  \    /  \/  __  \|__  __|/ __|| || ||  _ \
    \   \/\/   /|  /\  |  |  | | |   | __ || /\_/
     \        / |  ||  |  |  | | |__ | || || |\ \
      \__/\__/  |__||__|  |__|  \___||_||_||_| \_\
"#;

pub fn banner(no_banner: bool) {
    if no_banner {
        return;
    }

    println!();
    let text_content: String = format!("⟦ WATCHR v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat((TOTAL_WIDTH - text_width) / 2).bright_black();
    println!("{}{}{}", sep, text, sep);

    match rand::random_range(0..=1) {
        0 => println!("{}", BANNER_0.cyan()),
        _ => println!("{}", BANNER_1.truecolor(255, 165, 0)),
    }
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{}", line);
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    println!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
}

/// One entry of the operator's selection menu. `idx` is the number the
/// operator types, so it is 1-based.
pub fn numbered_line(idx: usize, value: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    println!(
        " {} {}",
        idx_str.color(colors::SEPARATOR),
        value.color(colors::PRIMARY)
    );
}

pub fn fat_separator() {
    println!("{}", "═".repeat(TOTAL_WIDTH).bright_black());
}

pub fn centerln(msg: &str) {
    let width: usize = console::measure_text_width(msg);
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(width) / 2);
    println!("{}{}", space, msg);
}

const NO_RESULTS_0: &str = r#"
                       _  _    ___  _  _
                      | || |  / _ \| || |
                      | || |_| | | | || |_
                      |__   _| |_| |__   _|
         _   _  ___ _____|_|__\___/__ |_|  _ _   _ ____
        | \ | |/ _ \_   _| |  ___/ _ \| | | | \ | |  _ \
        |  \| | | | || |   | |_ | | | | | | |  \| | | | |
        | |\  | |_| || |   |  _|| |_| | |_| | |\  | |_| |
        |_| \_|\___/ |_|   |_|   \___/ \___/|_| \_|____/
"#;

pub fn no_results() {
    println!("{}", NO_RESULTS_0.red().bold());
}

pub fn end_of_program() {
    println!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR));
}
