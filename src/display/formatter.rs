//! Markdown terminal formatting using termimad

use termimad::MadSkin;

use crate::display::terminal::should_use_colors;
use crate::models::ContentItem;

/// Build the markdown table shown by `quire drafts`
pub fn drafts_markdown(drafts: &[ContentItem]) -> String {
    let mut output = String::new();

    output.push_str("## Drafts\n\n");

    if drafts.is_empty() {
        output.push_str("*No drafts*");
        return output;
    }

    output.push_str("| Index | File | Title |\n");
    output.push_str("|-------|------|-------|\n");
    for (index, draft) in drafts.iter().enumerate() {
        output.push_str(&format!(
            "| {} | `{}` | {} |\n",
            index,
            draft.file_name(),
            draft.title()
        ));
    }

    output.trim_end().to_string()
}

/// Print markdown to terminal with rich formatting (or plain fallback)
pub fn print_markdown(markdown: &str) {
    if should_use_colors() {
        let mut skin = MadSkin::default();
        customize_skin(&mut skin);
        skin.print_text(markdown);
    } else {
        println!("{}", markdown);
    }
}

fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    skin.headers[1].set_fg(Cyan);
    skin.headers[1].add_attr(Attribute::Bold);

    skin.inline_code.set_fg(Yellow);
    skin.table.set_fg(White);
    skin.italic.set_fg(DarkGrey);
}
