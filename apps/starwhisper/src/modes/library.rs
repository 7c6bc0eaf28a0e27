use super::Context;
use crate::console::{heading, hint, say_error, BOLD, DIM, GOLD, RESET};
use crate::cues::Cue;
use urania::{find_item, LibraryCategory, LibraryItem};

/// Where a library command leads.
#[derive(Debug, Clone, PartialEq)]
enum Choice {
    Category(LibraryCategory),
    Item(LibraryCategory, LibraryItem),
    Back,
}

fn parse_choice(input: &str, open: Option<LibraryCategory>) -> Option<Choice> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "q" | "back" => return Some(Choice::Back),
        "p" | "planets" => return Some(Choice::Category(LibraryCategory::Planets)),
        "s" | "signs" => return Some(Choice::Category(LibraryCategory::Signs)),
        "h" | "houses" => return Some(Choice::Category(LibraryCategory::Houses)),
        _ => {}
    }
    if let Ok(n) = input.parse::<usize>() {
        let index = n.checked_sub(1)?;
        return match open {
            Some(category) => category.item(index).map(|item| Choice::Item(category, item)),
            None => LibraryCategory::ALL.get(index).copied().map(Choice::Category),
        };
    }
    find_item(input).map(|(category, item)| Choice::Item(category, item))
}

/// Browse the planet, sign and house reference until the user goes back.
pub async fn browse(ctx: &mut Context) -> anyhow::Result<()> {
    heading("占星知识百科");
    let mut open: Option<LibraryCategory> = None;

    loop {
        match open {
            None => print_categories(),
            Some(category) => print_category(category),
        }
        let label = if open.is_some() {
            "编号或名称查看详情 | p 行星 | s 星座 | h 宫位 | q 返回"
        } else {
            "选择分类 (编号或名称) | q 返回"
        };
        let Some(input) = ctx.console.prompt(label).await? else {
            return Ok(());
        };

        match parse_choice(&input, open) {
            Some(Choice::Back) => {
                ctx.cues.play(Cue::Click);
                return Ok(());
            }
            Some(Choice::Category(category)) => {
                ctx.cues.play(Cue::Click);
                open = Some(category);
            }
            Some(Choice::Item(category, item)) => {
                ctx.cues.play(Cue::Hover);
                print_item(&item);
                open = Some(category);
                ctx.console.prompt("回车继续").await?;
            }
            None => say_error("百科中没有这个条目"),
        }
    }
}

fn print_categories() {
    for (i, category) in LibraryCategory::ALL.iter().enumerate() {
        println!("  {GOLD}{}{RESET}. {}", i + 1, category.title());
    }
}

fn print_category(category: LibraryCategory) {
    println!("\n{GOLD}{BOLD}{}{RESET}", category.title());
    for (i, item) in category.items().iter().enumerate() {
        let element = item
            .element
            .map(|e| format!(" [{e}象]"))
            .unwrap_or_default();
        let keywords: Vec<&str> = item.keywords.iter().take(3).copied().collect();
        println!(
            "  {:>2}. {} {}{}  {DIM}{}{RESET}",
            i + 1,
            item.symbol,
            item.name,
            element,
            keywords.join(" · ")
        );
    }
}

fn print_item(item: &LibraryItem) {
    println!("\n  {GOLD}{BOLD}{} {}{RESET}", item.symbol, item.name);
    if let Some(element) = item.element {
        println!("  {element}象");
    }
    println!("  {}", item.keywords.join(" · "));
    println!("\n  {}", item.description);
    if let Some(ruler) = item.ruler {
        hint(&format!("  守护星: {ruler}"));
    }
    if let Some(meaning) = item.meaning {
        hint(&format!("  核心意涵: {meaning}"));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_pick_a_category_then_an_entry() {
        assert_eq!(
            parse_choice("2", None),
            Some(Choice::Category(LibraryCategory::Signs))
        );
        assert_eq!(parse_choice("4", None), None);

        match parse_choice("8", Some(LibraryCategory::Signs)) {
            Some(Choice::Item(LibraryCategory::Signs, item)) => assert_eq!(item.name, "天蝎座"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(parse_choice("13", Some(LibraryCategory::Houses)), None);
        assert_eq!(parse_choice("0", Some(LibraryCategory::Houses)), None);
    }

    #[test]
    fn names_and_shortcuts() {
        assert_eq!(parse_choice("H", None), Some(Choice::Category(LibraryCategory::Houses)));
        assert_eq!(parse_choice("q", Some(LibraryCategory::Planets)), Some(Choice::Back));
        match parse_choice("木星", None) {
            Some(Choice::Item(LibraryCategory::Planets, item)) => assert_eq!(item.symbol, "♃"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(parse_choice("Ophiuchus", None), None);
    }
}
