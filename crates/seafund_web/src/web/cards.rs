use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use seafund::catalog::GameRecord;
use seafund::num_fmt::{fmt_currency_whole, fmt_grouped_u64};

/// Class shared by every rendered card; clearing is scoped to it.
pub(super) const CARD_CLASS: &str = "game-card";

/// Remove every rendered card from the container.
///
/// Scoped to `.game-card` children so unrelated siblings (the search error
/// element) survive. Idempotent: clearing an already-empty container is a
/// no-op.
pub(super) fn clear_game_cards(container: &Element) -> Result<(), JsValue> {
    let cards = container.query_selector_all(&format!(".{CARD_CLASS}"))?;
    for i in 0..cards.length() {
        let Some(card) = cards.item(i) else { continue };
        if let Some(parent) = card.parent_node() {
            parent.remove_child(&card)?;
        }
    }
    Ok(())
}

/// Append one card per record, preserving sequence order.
///
/// Cards are batched into a `DocumentFragment` and appended in one step.
/// An empty slice renders zero cards. Callers clear first, except on the
/// initial load where the container starts empty.
pub(super) fn append_game_cards(
    document: &Document,
    container: &Element,
    games: &[&GameRecord],
) -> Result<(), JsValue> {
    let fragment = document.create_document_fragment();
    for game in games {
        let card = document.create_element("div")?;
        card.set_class_name(CARD_CLASS);
        card.set_inner_html(&card_markup(game));
        fragment.append_child(&card)?;
    }
    container.append_child(&fragment)?;
    Ok(())
}

/// Clear-then-render pair used by the filter and search controllers.
pub(super) fn replace_game_cards(
    document: &Document,
    container: &Element,
    games: &[&GameRecord],
) -> Result<(), JsValue> {
    clear_game_cards(container)?;
    append_game_cards(document, container, games)
}

/// Fixed card layout: image, name, description, pledged, goal, backers.
fn card_markup(game: &GameRecord) -> String {
    let name = escape_text(&game.name);
    format!(
        "<img src=\"{image}\" class=\"game-img\" alt=\"{name}\">\
         <strong>{name}</strong>\
         <p>{description}</p>\
         <p>Pledged: {pledged}</p>\
         <p>Goal: {goal}</p>\
         <p>Backers: {backers}</p>",
        image = escape_text(&game.image),
        description = escape_text(&game.description),
        pledged = fmt_currency_whole(game.pledged),
        goal = fmt_currency_whole(game.goal),
        backers = fmt_grouped_u64(game.backers),
    )
}

/// Minimal escaping for text interpolated into card markup.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
