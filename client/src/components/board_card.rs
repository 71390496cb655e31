//! Clickable card for one board in the board list.

#[cfg(test)]
#[path = "board_card_test.rs"]
mod board_card_test;

use leptos::prelude::*;

use crate::pages::workflow::Driver;
use crate::state::boards::Board;
use crate::state::workflow::Event;

fn board_stats(board: &Board) -> String {
    format!("📌 {} · 👥 {}", board.pin_count, board.follower_count)
}

/// A board card; clicking it selects the board for pinning.
#[component]
pub fn BoardCard(board: Board) -> impl IntoView {
    let driver = expect_context::<Driver>();
    let stats = board_stats(&board);
    let description = board.display_description().map(str::to_owned);
    let id = board.id.clone();
    let is_new = board.is_locally_created;
    let class = if is_new { "board-card board-card--new" } else { "board-card" };

    view! {
        <li class=class on:click=move |_| driver.dispatch(Event::SelectBoard(id.clone()))>
            <div class="board-card__name">
                {board.name}
                {is_new.then(|| view! { <span class="board-card__badge">"new"</span> })}
            </div>
            {description.map(|d| view! { <div class="board-card__desc">{d}</div> })}
            <div class="board-card__stats">{stats}</div>
        </li>
    }
}
