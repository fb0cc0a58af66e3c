use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};

const TITLE: [&str; 5] = [
    " _                    _      ",
    "| |    ___   __ _  __| |_ __ ",
    "| |   / _ \\ / _` |/ _` | '__|",
    "| |__| (_) | (_| | (_| | |   ",
    "|_____\\___/ \\__,_|\\__,_|_|   ",
];

const TITLE_COLORS: [Color; 5] = [
    Color::Rgb { r: 0x3a, g: 0xa9, b: 0xff },
    Color::Rgb { r: 0x4f, g: 0x93, b: 0xff },
    Color::Rgb { r: 0x65, g: 0x7c, b: 0xff },
    Color::Rgb { r: 0x7a, g: 0x66, b: 0xff },
    Color::Rgb { r: 0x90, g: 0x4f, b: 0xff },
];

/// Prints the title block. Plain text when colors are off or stdout is piped.
pub(crate) fn print_cli_banner(no_color: bool) {
    let use_color = !no_color && std::io::stdout().is_terminal();
    for (line, color) in TITLE.iter().zip(TITLE_COLORS) {
        if use_color {
            println!("{}", line.with(color));
        } else {
            println!("{line}");
        }
    }

    let description = format!(
        "loadr v{} | rate-driven HTTP load generator",
        env!("CARGO_PKG_VERSION")
    );
    if use_color {
        println!("{}", description.dark_grey());
    } else {
        println!("{description}");
    }
}
