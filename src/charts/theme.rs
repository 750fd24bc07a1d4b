// Catppuccin Mocha, the subset the loss chart draws with

pub mod catppuccin {
    pub const BASE: (u8, u8, u8) = (30, 30, 46); // #1e1e2e
    pub const TEXT: (u8, u8, u8) = (205, 214, 244); // #cdd6f4
    pub const SURFACE0: (u8, u8, u8) = (49, 50, 68); // #313244
    pub const SURFACE1: (u8, u8, u8) = (69, 71, 90); // #45475a
    pub const BLUE: (u8, u8, u8) = (137, 180, 250); // #89b4fa
    pub const RED: (u8, u8, u8) = (243, 139, 168); // #f38ba8
}

pub mod plotters_colors {
    use super::catppuccin;
    use plotters::style::RGBColor;

    pub const BASE: RGBColor = RGBColor(catppuccin::BASE.0, catppuccin::BASE.1, catppuccin::BASE.2);
    pub const TEXT: RGBColor = RGBColor(catppuccin::TEXT.0, catppuccin::TEXT.1, catppuccin::TEXT.2);
    pub const SURFACE0: RGBColor = RGBColor(
        catppuccin::SURFACE0.0,
        catppuccin::SURFACE0.1,
        catppuccin::SURFACE0.2,
    );
    pub const SURFACE1: RGBColor = RGBColor(
        catppuccin::SURFACE1.0,
        catppuccin::SURFACE1.1,
        catppuccin::SURFACE1.2,
    );
    pub const BLUE: RGBColor = RGBColor(catppuccin::BLUE.0, catppuccin::BLUE.1, catppuccin::BLUE.2);
    pub const RED: RGBColor = RGBColor(catppuccin::RED.0, catppuccin::RED.1, catppuccin::RED.2);
}
