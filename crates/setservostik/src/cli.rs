//! Command-line surface
//!
//! One positional restrictor value requests a rotation. Any other number of
//! positional values prints the banner and usage instead.

use clap::Parser;
use protocol::Mode;

/// Way value used when the argument is not a number
pub const DEFAULT_WAY: i64 = 8;

#[derive(Parser, Debug)]
#[command(name = "setservostik")]
#[command(
    version,
    about = "Rotate an Ultimarc ServoStik joystick to 4-way or 8-way"
)]
#[command(long_about = "
Rotates the restrictor gate of an Ultimarc ServoStik joystick.

A value from 1 to 4 selects 4-way. Any other value, including 0, negative
numbers and non-numeric input, selects 8-way.

EXAMPLES:
    # Switch to 4-way
    setservostik 4

    # Switch to 8-way
    setservostik 8

    # Show the banner
    setservostik
")]
pub struct Args {
    /// Restrictor way (1-4 for 4-way, anything else for 8-way)
    ///
    /// Values starting with `-` are taken as ways unless they name a known
    /// option, so `-3` and `-x` both select 8-way.
    #[arg(
        value_name = "RESTRICTORWAY",
        allow_negative_numbers = true,
        allow_hyphen_values = true
    )]
    pub way: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

/// What a parsed command line asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    Banner,
    Rotate(Mode),
}

impl Args {
    pub fn invocation(&self) -> Invocation {
        match self.way.as_slice() {
            [way] => Invocation::Rotate(Mode::from_way(parse_way(way))),
            _ => Invocation::Banner,
        }
    }
}

/// Parse a base-10 way value the way `strtol` would
///
/// Leading whitespace and a sign are accepted, and parsing stops at the
/// first non-digit. Input with no leading digits, or out of `i64` range,
/// yields [`DEFAULT_WAY`].
pub fn parse_way(arg: &str) -> i64 {
    let trimmed = arg.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits == 0 {
        return DEFAULT_WAY;
    }

    trimmed[..sign_len + digits].parse().unwrap_or(DEFAULT_WAY)
}

/// Banner and usage text
pub fn banner(program: &str) -> String {
    let art = r#" _____     _   _____                 _____ _   _ _    
|   __|___| |_|   __|___ ___ _ _ ___|   __| |_|_| |_  
|__   | -_|  _|__   | -_|  _| | | . |__   |  _| | '_| 
|_____|___|_| |_____|___|_|  \_/|___|_____|_| |_|_,_| 
"#;

    format!(
        "{art}setservostik Copyright (C) 2018  De Waegeneer Gijsbrecht\n\
         Ultimarc ServoStik switcher Version {version}\n\n\
         [ {program} restrictorway ] change joystick(s) to 4 or 8 way\n\n\
         This program comes with ABSOLUTELY NO WARRANTY. This is free software,\n\
         and you are welcome to redistribute it under certain conditions.\n\
         license: GNU GENERAL PUBLIC LICENSE Version 3, 29 June 2007\n\
         Copyright (C) 2007 Free Software Foundation, Inc. <https://fsf.org/>\n",
        version = env!("CARGO_PKG_VERSION"),
    )
}
