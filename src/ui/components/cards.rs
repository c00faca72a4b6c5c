//! Advert card component renderer.
//!
//! Renders the populated list as a table with NAME, PRICE and KIND columns,
//! followed by the tags and the detail route on an indented line.

use super::push_line;
use crate::ui::viewmodel::AdvertCard;

const NAME_WIDTH: usize = 32;
const PRICE_WIDTH: usize = 16;

/// Renders column headers and one entry per card.
///
/// # Example
///
/// ```text
/// NAME                             PRICE            KIND
/// Bike                             € 1.500          Sell
///     motor, lifestyle  →  /adverts/1
/// ```
pub fn render_cards(out: &mut String, cards: &[AdvertCard]) {
    push_line(
        out,
        &format!("{:<NAME_WIDTH$} {:<PRICE_WIDTH$} KIND", "NAME", "PRICE"),
    );
    for card in cards {
        render_card(out, card);
    }
}

fn render_card(out: &mut String, card: &AdvertCard) {
    push_line(
        out,
        &format!(
            "{:<NAME_WIDTH$} {:<PRICE_WIDTH$} {}",
            truncate(&card.name, NAME_WIDTH),
            card.price,
            card.kind
        ),
    );

    let mut detail = format!("    {}  →  {}", card.tags.join(", "), card.link);
    if let Some(photo) = &card.photo {
        detail.push_str(&format!("  [{photo}]"));
    }
    push_line(out, &detail);
}

/// Cuts `text` to `width` characters, marking the cut with `…`.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Route;

    #[test]
    fn test_truncate_long_names() {
        assert_eq!(truncate("Bike", 8), "Bike");
        assert_eq!(truncate("Mountain bike", 8), "Mountai…");
    }

    #[test]
    fn test_card_lines() {
        let card = AdvertCard {
            name: "Bike".to_string(),
            price: "€ 1.500".to_string(),
            kind: "Sell",
            tags: vec!["motor".to_string(), "lifestyle".to_string()],
            photo: Some("/img/bike.jpg".to_string()),
            link: Route::Detail("1".to_string()),
        };
        let mut out = String::new();
        render_cards(&mut out, &[card]);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("NAME"));
        assert!(lines[1].starts_with("Bike"));
        assert!(lines[1].ends_with("Sell"));
        assert_eq!(lines[2], "    motor, lifestyle  →  /adverts/1  [/img/bike.jpg]");
    }
}
