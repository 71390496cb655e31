//! Board list view with the empty-boards sub-state and the "new board" entry point.

use leptos::prelude::*;

use crate::components::board_card::BoardCard;
use crate::pages::workflow::Driver;
use crate::state::workflow::Event;

#[component]
pub fn BoardList() -> impl IntoView {
    let driver = expect_context::<Driver>();
    let workflow = driver.workflow();
    let boards = move || workflow.with(|wf| wf.boards.clone());
    let empty = move || workflow.with(|wf| wf.shows_empty_boards());

    view! {
        <section class="boards-section">
            <div class="boards-section__header">
                <h2>"Your boards"</h2>
                <button class="btn" on:click=move |_| driver.dispatch(Event::OpenCreateBoard)>
                    "+ New Board"
                </button>
            </div>
            <Show when=empty>
                <p class="boards-section__empty">"No boards yet. Create one to start pinning."</p>
            </Show>
            <ul class="boards-section__list">
                {move || boards().into_iter().map(|board| view! { <BoardCard board=board/> }).collect_view()}
            </ul>
        </section>
    }
}
