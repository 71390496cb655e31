//! Create Board view.

use leptos::prelude::*;

use crate::pages::workflow::Driver;
use crate::state::forms::BoardField;
use crate::state::workflow::Event;

#[component]
pub fn CreateBoardForm() -> impl IntoView {
    let driver = expect_context::<Driver>();
    let workflow = driver.workflow();
    let busy = move || workflow.with(|wf| wf.in_flight.create_board.is_some());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        driver.dispatch(Event::SubmitBoard);
    };

    view! {
        <section class="create-board-section">
            <button class="btn btn--link" on:click=move |_| driver.dispatch(Event::BackToBoards)>
                "← Back to boards"
            </button>
            <h2>"Create a board"</h2>
            <form class="board-form" on:submit=on_submit>
                <label for="board-name">"Name"</label>
                <input
                    id="board-name"
                    type="text"
                    placeholder="Summer Sale"
                    prop:value=move || workflow.with(|wf| wf.board_form.name.clone())
                    on:input=move |ev| {
                        driver.dispatch(Event::BoardFieldChanged(BoardField::Name, event_target_value(&ev)));
                    }
                />
                <label for="board-description">"Description (optional)"</label>
                <textarea
                    id="board-description"
                    prop:value=move || workflow.with(|wf| wf.board_form.description.clone())
                    on:input=move |ev| {
                        driver.dispatch(Event::BoardFieldChanged(BoardField::Description, event_target_value(&ev)));
                    }
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=busy>
                    {move || if busy() { "Creating..." } else { "Create Board" }}
                </button>
            </form>
        </section>
    }
}
