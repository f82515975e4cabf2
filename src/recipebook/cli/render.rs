use colored::Colorize;
use recipebook::api::{CmdMessage, MessageLevel};
use recipebook::index::DisplayRecipe;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_full_recipes(recipes: &[DisplayRecipe]) {
    for (i, dr) in recipes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            format!("{}.", dr.index).yellow(),
            dr.recipe.title.bold()
        );
        println!("--------------------------------");
        print_section("Ingredients", &dr.recipe.ingredients);
        print_section("Preparation", &dr.recipe.preparation);
    }
}

fn print_section(heading: &str, body: &str) {
    println!("{}", heading.underline());
    if body.is_empty() {
        println!("{}", "(none)".dimmed());
    } else {
        println!("{}", body);
    }
}

pub(super) fn print_recipe_list(recipes: &[DisplayRecipe]) {
    if recipes.is_empty() {
        println!("No recipes yet.");
        return;
    }

    for dr in recipes {
        let idx_str = format!("{}. ", dr.index);
        let left_prefix = "  ";
        let fixed_width = left_prefix.width() + idx_str.width();
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let title = &dr.recipe.title;
        let preview = one_line(&dr.recipe.ingredients);
        let line = if preview.is_empty() {
            title.bold().to_string()
        } else {
            let rest = truncate_to_width(&preview, available.saturating_sub(title.width() + 1));
            format!("{} {}", title.bold(), rest.dimmed())
        };

        println!("{}{}{}", left_prefix, idx_str, line);
    }
}

fn one_line(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("ovos", 10), "ovos");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate_to_width("farinha, ovos, leite", 8), "farinha…");
    }

    #[test]
    fn newlines_are_flattened() {
        assert_eq!(one_line("a\nb\r\nc"), "a b  c");
    }
}
