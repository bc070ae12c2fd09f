use leptos::html;
use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use seafund::catalog::{Catalog, GameRecord};
use seafund::highlight;
use seafund::stats::CatalogTotals;

use crate::data;
use crate::ui_model::FilterTab;

mod cards;
mod debounce;
mod search;

use search::SearchBox;

/// Mount the app. The embedded catalog is parsed exactly once here; a
/// parse failure is fatal to page initialization.
pub fn start() -> Result<(), JsValue> {
    let catalog = data::load_catalog().map_err(|e| JsValue::from_str(&e.to_string()))?;
    mount_to_body(move || view! { <App catalog=catalog /> });
    Ok(())
}

/// Resolve the page document, with a readable error for the console.
pub(crate) fn document() -> Result<web_sys::Document, String> {
    let w = web_sys::window().ok_or("no window")?;
    w.document().ok_or_else(|| "no document".to_string())
}

#[component]
fn App(catalog: Catalog) -> impl IntoView {
    // Whole-catalog reductions and the top-pledged pair are fixed for the
    // lifetime of the page view; compute them once, before the catalog
    // moves into storage.
    let totals = CatalogTotals::compute(&catalog);
    let (top, runner_up) = {
        let (top, runner_up) = highlight::top_two(&catalog);
        (
            top.map(|g| g.name.clone()),
            runner_up.map(|g| g.name.clone()),
        )
    };

    let catalog = StoredValue::new(catalog);
    let (search_error, set_search_error) = signal::<Option<String>>(None);

    let games_ref = NodeRef::<html::Div>::new();
    let interact_ref = NodeRef::<html::Section>::new();

    // Initial render, once the games container exists. Later renders go
    // through an explicit clear step; the initial one appends into the
    // empty container.
    Effect::new(move |_| {
        let Some(container) = games_ref.get() else {
            return;
        };
        let res = catalog.with_value(|c| -> Result<(), String> {
            let doc = document()?;
            let games: Vec<&GameRecord> = c.games().iter().collect();
            cards::append_game_cards(&doc, &container, &games)
                .map_err(|e| format!("initial render failed: {e:?}"))
        });
        if let Err(e) = res {
            logging::error!("{e}");
        }
    });

    let apply_filter = move |tab: FilterTab| {
        if let Some(section) = interact_ref.get_untracked() {
            section.scroll_into_view();
        }
        let Some(container) = games_ref.get_untracked() else {
            return;
        };
        let res = catalog.with_value(|c| -> Result<(), String> {
            let doc = document()?;
            let games = tab.kind().apply(c);
            cards::replace_game_cards(&doc, &container, &games)
                .map_err(|e| format!("filter render failed: {e:?}"))
        });
        if let Err(e) = res {
            logging::error!("{e}");
        }
    };

    view! {
        <main class="page">
            <header class="masthead">
                <h1>"Sea Fund"</h1>
                <p class="tagline">"Crowdfunding the games worth waiting for."</p>
            </header>

            <section class="stats-row">
                <StatCard
                    id="num-contributions"
                    label="Individual Contributions"
                    value=totals.contributions_display()
                />
                <StatCard id="total-raised" label="Total Raised" value=totals.raised_display() />
                <StatCard id="num-games" label="Games on Sea Fund" value=totals.game_count_display() />
            </section>

            <section class="description" id="description-container">
                <p>{totals.funding_status()}</p>
                <p>{totals.call_to_action()}</p>
            </section>

            <TopGames top=top runner_up=runner_up />

            <section class="interaction" id="interaction-container" node_ref=interact_ref>
                <h2>"Our Games"</h2>

                <div class="filter-row">
                    {FilterTab::all()
                        .iter()
                        .map(|&tab| {
                            view! {
                                <button
                                    class="btn"
                                    id=tab.element_id()
                                    on:click=move |_| apply_filter(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <SearchBox catalog=catalog games_ref=games_ref set_search_error=set_search_error />

                <div class="games-grid" id="games-container" node_ref=games_ref>
                    <Show when=move || search_error.get().is_some()>
                        <p class="error">
                            <strong>{move || search_error.get().unwrap_or_default()}</strong>
                            " could not be found... :("
                        </p>
                    </Show>
                </div>
            </section>
        </main>
    }
}

#[component]
fn StatCard(id: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card" id=id>
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[component]
fn TopGames(top: Option<String>, runner_up: Option<String>) -> impl IntoView {
    // A catalog with fewer than two games simply hides the missing slot.
    view! {
        <section class="highlights">
            {top.map(|name| {
                view! {
                    <div class="highlight-slot" id="first-game">
                        <h3>"Top Funded Game"</h3>
                        <p>{name}</p>
                    </div>
                }
            })}
            {runner_up.map(|name| {
                view! {
                    <div class="highlight-slot" id="second-game">
                        <h3>"Runner Up"</h3>
                        <p>{name}</p>
                    </div>
                }
            })}
        </section>
    }
}
