//! The fixed table of 256 terminal color names.
//!
//! Names follow the xterm color table. Where xterm assigns one name to
//! several color numbers, one number keeps the bare name and the others get
//! an `a` or `b` suffix (`DeepSkyBlue4`, `DeepSkyBlue4a`, `DeepSkyBlue4b`), so
//! every name maps to exactly one number.
//!
//! Lookups by name are case-insensitive.
//!
//! # Example
//!
//! ```rust
//! use decor::color;
//!
//! assert_eq!(color::number("grey37"), Some(59));
//! assert_eq!(color::number("GREY37"), Some(59));
//! assert_eq!(color::name(59), "Grey37");
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Color names indexed by color number.
#[rustfmt::skip]
pub const NAMES: [&str; 256] = [
    "BLACK", "RED", "GREEN", "YELLOW",
    "BLUE", "MAGENTA", "CYAN", "WHITE",
    "BOLD_BLACK", "BOLD_RED", "BOLD_GREEN", "BOLD_YELLOW",
    "BOLD_BLUE", "BOLD_MAGENTA", "BOLD_CYAN", "BOLD_WHITE",
    "Grey0", "NavyBlue", "DarkBlue", "Blue3a",
    "Blue3", "Blue1", "DarkGreen", "DeepSkyBlue4a",
    "DeepSkyBlue4b", "DeepSkyBlue4", "DodgerBlue3", "DodgerBlue2",
    "Green4", "SpringGreen4", "Turquoise4", "DeepSkyBlue3a",
    "DeepSkyBlue3", "DodgerBlue1", "Green3a", "SpringGreen3a",
    "DarkCyan", "LightSeaGreen", "DeepSkyBlue2", "DeepSkyBlue1",
    "Green3", "SpringGreen3", "SpringGreen2a", "Cyan3",
    "DarkTurquoise", "Turquoise2", "Green1", "SpringGreen2",
    "SpringGreen1", "MediumSpringGreen", "Cyan2", "Cyan1",
    "DarkRed1", "DeepPink4", "Purple4a", "Purple4",
    "Purple3", "BlueViolet", "Orange4", "Grey37",
    "MediumPurple4", "SlateBlue3a", "SlateBlue3", "RoyalBlue1",
    "Chartreuse4", "DarkSeaGreen4a", "PaleTurquoise4", "SteelBlue",
    "SteelBlue3", "CornflowerBlue", "Chartreuse3a", "DarkSeaGreen4",
    "CadetBlue2", "CadetBlue", "SkyBlue3", "SteelBlue1a",
    "Chartreuse3", "PaleGreen3", "SeaGreen3", "Aquamarine3",
    "MediumTurquoise", "SteelBlue1", "Chartreuse2", "SeaGreen2",
    "SeaGreen1a", "SeaGreen1", "Aquamarine1", "DarkSlateGray2",
    "DarkRed2", "DeepPink4a", "DarkMagenta2", "DarkMagenta",
    "DarkViolet2", "Purple2", "Orange4a", "LightPink4",
    "Plum4", "MediumPurple3a", "MediumPurple3", "SlateBlue1",
    "Yellow4a", "Wheat4", "Grey53", "LightSlateGrey",
    "MediumPurple", "LightSlateBlue", "Yellow4", "DarkOliveGreen3a",
    "DarkSeaGreen", "LightSkyBlue3a", "LightSkyBlue3", "SkyBlue2",
    "Chartreuse2a", "DarkOliveGreen3b", "PaleGreen3a", "DarkSeaGreen3a",
    "DarkSlateGray3", "SkyBlue1", "Chartreuse1", "LightGreen2",
    "LightGreen", "PaleGreen1a", "Aquamarine1a", "DarkSlateGray1",
    "Red3a", "DeepPink4b", "MediumVioletRed", "Magenta3a",
    "DarkViolet", "Purple", "DarkOrange3a", "IndianRed2",
    "HotPink3a", "MediumOrchid3", "MediumOrchid", "MediumPurple2a",
    "DarkGoldenrod", "LightSalmon3", "RosyBrown", "Grey63",
    "MediumPurple2", "MediumPurple1", "Gold3", "DarkKhaki",
    "NavajoWhite3", "Grey69", "LightSteelBlue3", "LightSteelBlue",
    "Yellow3", "DarkOliveGreen3", "DarkSeaGreen3", "DarkSeaGreen2a",
    "LightCyan3", "LightSkyBlue1", "GreenYellow", "DarkOliveGreen2",
    "PaleGreen1", "DarkSeaGreen2", "DarkSeaGreen1", "PaleTurquoise1",
    "Red3", "DeepPink3a", "DeepPink3", "Magenta3b",
    "Magenta3", "Magenta2", "DarkOrange3", "IndianRed",
    "HotPink3", "HotPink2", "Orchid", "MediumOrchid1a",
    "Orange3", "LightSalmon3a", "LightPink3", "Pink3",
    "Plum3", "Violet", "Gold3a", "LightGoldenrod3",
    "Tan", "MistyRose3", "Thistle3", "Plum2",
    "Yellow3a", "Khaki3", "LightGoldenrod2a", "LightYellow3",
    "Grey84", "LightSteelBlue1", "Yellow2", "DarkOliveGreen1a",
    "DarkOliveGreen1", "DarkSeaGreen1a", "Honeydew2", "LightCyan1",
    "Red1", "DeepPink2", "DeepPink1a", "DeepPink1",
    "Magenta2a", "Magenta1", "OrangeRed1", "IndianRed1a",
    "IndianRed1", "HotPink4", "HotPink", "MediumOrchid1",
    "DarkOrange", "Salmon1", "LightCoral", "PaleVioletRed1",
    "Orchid2", "Orchid1", "Orange1", "SandyBrown",
    "LightSalmon1", "LightPink1", "Pink1", "Plum1",
    "Gold1", "LightGoldenrod2b", "LightGoldenrod2", "NavajoWhite1",
    "MistyRose1", "Thistle1", "Yellow1", "LightGoldenrod1",
    "Khaki1", "Wheat1", "Cornsilk1", "Grey100",
    "Grey3", "Grey7", "Grey11", "Grey15",
    "Grey19", "Grey23", "Grey27", "Grey30",
    "Grey35", "Grey39", "Grey42", "Grey46",
    "Grey50", "Grey54", "Grey58", "Grey62",
    "Grey66", "Grey70", "Grey74", "Grey78",
    "Grey82", "Grey85", "Grey89", "Grey93",
];

static NUMBERS: Lazy<HashMap<String, u8>> = Lazy::new(|| {
    (0..=u8::MAX)
        .map(|n| (NAMES[usize::from(n)].to_lowercase(), n))
        .collect()
});

/// Returns the name of color number `number`.
pub fn name(number: u8) -> &'static str {
    NAMES[usize::from(number)]
}

/// Returns the color number for `name`, ignoring case.
pub fn number(name: &str) -> Option<u8> {
    NUMBERS.get(&name.to_lowercase()).copied()
}

/// Resolves a color argument: a known name first, then a decimal number in
/// `0..=255`.
pub fn resolve(arg: &str) -> Option<u8> {
    number(arg).or_else(|| arg.parse().ok())
}
