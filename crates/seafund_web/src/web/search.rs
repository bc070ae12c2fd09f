use leptos::html;
use leptos::logging;
use leptos::prelude::*;

use seafund::catalog::Catalog;
use seafund::filter::FilterKind;
use seafund::search::{self, SearchOutcome};

use super::cards;
use super::debounce::Debouncer;
use super::document;

/// Quiet window between the last keystroke and the filter evaluation.
const SEARCH_DEBOUNCE_MS: i32 = 500;

#[component]
pub(super) fn SearchBox(
    catalog: StoredValue<Catalog>,
    games_ref: NodeRef<html::Div>,
    set_search_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let debouncer = StoredValue::new_local(Debouncer::new(SEARCH_DEBOUNCE_MS));

    // Runs once per quiet window, with the last received input value only.
    let run_search = move |raw: String| {
        let Some(container) = games_ref.get_untracked() else {
            return;
        };
        let res = catalog.with_value(|c| -> Result<(), String> {
            let doc = document()?;
            match search::evaluate(c, &raw) {
                // Disallowed input: no render change, no error shown.
                SearchOutcome::Ignored => Ok(()),
                SearchOutcome::ShowAll => {
                    set_search_error.set(None);
                    let games = FilterKind::All.apply(c);
                    cards::replace_game_cards(&doc, &container, &games)
                        .map_err(|e| format!("search render failed: {e:?}"))
                }
                SearchOutcome::Matches(games) => {
                    set_search_error.set(None);
                    cards::replace_game_cards(&doc, &container, &games)
                        .map_err(|e| format!("search render failed: {e:?}"))
                }
                SearchOutcome::NotFound { query } => {
                    cards::clear_game_cards(&container)
                        .map_err(|e| format!("search clear failed: {e:?}"))?;
                    set_search_error.set(Some(query));
                    Ok(())
                }
            }
        });
        if let Err(e) = res {
            logging::error!("{e}");
        }
    };

    view! {
        <div class="search-row">
            <label class="search-label" for="search-bar">
                "Search"
            </label>
            <input
                type="text"
                id="search-bar"
                placeholder="Find a game by name"
                autocomplete="off"
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    debouncer.update_value(|d| {
                        if let Err(e) = d.schedule(move || run_search(raw.clone())) {
                            logging::error!("debounce schedule failed: {e}");
                        }
                    });
                }
            />
        </div>
    }
}
