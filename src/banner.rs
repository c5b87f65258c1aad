use vexide::startup::banner::themes::BannerTheme;

macro_rules! ansi_rgb_bold {
    ($r:expr, $g:expr, $b:expr) => {
        concat!("\x1b[1;38;2;", $r, ";", $g, ";", $b, "m")
    };
}

pub const THEME_BUTTERFINGERS: BannerTheme = BannerTheme {
    emoji: "🧈",
    logo_primary: [
        ansi_rgb_bold!(255, 236, 139),
        ansi_rgb_bold!(255, 228, 117),
        ansi_rgb_bold!(255, 219, 94),
        ansi_rgb_bold!(252, 208, 72),
        ansi_rgb_bold!(247, 196, 52),
        ansi_rgb_bold!(240, 183, 35),
        ansi_rgb_bold!(230, 168, 23),
    ],
    logo_secondary: ansi_rgb_bold!(120, 84, 48),
    crate_version: "[1;33m",
    metadata_key: "[1;33m",
};
