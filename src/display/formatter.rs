//! Markdown terminal formatting using termimad

use termimad::MadSkin;

use crate::display::terminal::should_use_colors;

/// Print markdown to the terminal, styled when colors are enabled
pub fn print_markdown(markdown: &str) {
    if should_use_colors() {
        build_skin().print_text(markdown);
    } else {
        println!("{}", markdown);
    }
}

/// Skin used for entry listings and summaries
fn build_skin() -> MadSkin {
    use termimad::crossterm::style::{Attribute, Color::*};

    let mut skin = MadSkin::default();

    skin.headers[0].set_fg(Green);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Cyan);

    skin.inline_code.set_fg(Yellow);
    skin.table.set_fg(White);

    skin.bold.add_attr(Attribute::Bold);
    skin.italic.add_attr(Attribute::Italic);
    skin.bullet.set_fg(Green);

    skin
}
