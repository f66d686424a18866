use ratatui::style::Color;

// Logo colors
pub const LOGO_CORAL: Color = Color::Rgb(232, 131, 136);     // #E88388
pub const LOGO_GOLD: Color = Color::Rgb(219, 171, 121);      // #DBAB79
pub const LOGO_LIGHT_BLUE: Color = Color::Rgb(124, 175, 194); // #7CAFC2
pub const LOGO_MINT: Color = Color::Rgb(161, 193, 129);       // #A1C181

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);        // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);      // #FFFFFF
pub const TAG_BG: Color = Color::Rgb(58, 52, 46);             // Favorite dish chips

// Confetti palette
pub const CONFETTI_COLORS: [Color; 5] = [
    Color::Rgb(255, 107, 107), // #FF6B6B
    Color::Rgb(255, 217, 61),  // #FFD93D
    Color::Rgb(107, 203, 255), // #6BCBFF
    Color::Rgb(139, 195, 74),  // #8BC34A
    Color::Rgb(171, 71, 188),  // #AB47BC
];
