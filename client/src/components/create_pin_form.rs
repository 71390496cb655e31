//! Create Pin view: optional product parse, pin fields, image preview.

use leptos::prelude::*;

use crate::components::parse_result::ParseResult;
use crate::pages::workflow::Driver;
use crate::state::forms::PinField;
use crate::state::workflow::Event;

#[component]
pub fn CreatePinForm() -> impl IntoView {
    let driver = expect_context::<Driver>();
    let workflow = driver.workflow();

    let board_name = move || workflow.with(|wf| wf.selection.as_ref().map(|s| s.board_name.clone()).unwrap_or_default());
    let parsing = move || workflow.with(|wf| wf.in_flight.parse.is_some());
    let submitting = move || workflow.with(|wf| wf.in_flight.create_pin.is_some());
    let preview = move || workflow.with(|wf| wf.pin_form.preview_url().map(str::to_owned));

    let on_field = move |target: PinField| {
        move |ev: leptos::ev::Event| driver.dispatch(Event::PinFieldChanged(target, event_target_value(&ev)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        driver.dispatch(Event::SubmitPin);
    };

    view! {
        <section class="create-pin-section">
            <button class="btn btn--link" on:click=move |_| driver.dispatch(Event::BackToBoards)>
                "← Back to boards"
            </button>
            <h2>"New pin on " <span class="create-pin-section__board">{board_name}</span></h2>

            <div class="parse-box">
                <label for="product-url">"Product URL"</label>
                <input
                    id="product-url"
                    type="url"
                    placeholder="https://shop.example.com/item"
                    prop:value=move || workflow.with(|wf| wf.pin_form.product_url.clone())
                    on:input=on_field(PinField::ProductUrl)
                />
                <button
                    class="btn"
                    type="button"
                    disabled=parsing
                    on:click=move |_| driver.dispatch(Event::ParseRequested)
                >
                    {move || if parsing() { "Parsing..." } else { "🤖 Parse" }}
                </button>
                <ParseResult/>
            </div>

            <form class="pin-form" on:submit=on_submit>
                <label for="pin-title">"Title"</label>
                <input
                    id="pin-title"
                    type="text"
                    prop:value=move || workflow.with(|wf| wf.pin_form.title.clone())
                    on:input=on_field(PinField::Title)
                />
                <label for="pin-description">"Description"</label>
                <textarea
                    id="pin-description"
                    prop:value=move || workflow.with(|wf| wf.pin_form.description.clone())
                    on:input=on_field(PinField::Description)
                ></textarea>
                <label for="pin-image-url">"Image URL"</label>
                <input
                    id="pin-image-url"
                    type="url"
                    prop:value=move || workflow.with(|wf| wf.pin_form.image_url.clone())
                    on:input=on_field(PinField::ImageUrl)
                />
                {move || {
                    preview()
                        .map(|src| {
                            view! {
                                <div class="image-preview">
                                    <img src=src alt="Pin image preview"/>
                                </div>
                            }
                        })
                }}
                <label for="pin-link">"Link"</label>
                <input
                    id="pin-link"
                    type="url"
                    prop:value=move || workflow.with(|wf| wf.pin_form.link.clone())
                    on:input=on_field(PinField::Link)
                />
                <button class="btn btn--primary" type="submit" disabled=submitting>
                    {move || if submitting() { "Creating..." } else { "🚀 Create Pin" }}
                </button>
            </form>
        </section>
    }
}
