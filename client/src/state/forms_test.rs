use super::*;

// =============================================================
// PinForm
// =============================================================

#[test]
fn to_request_trims_and_maps_image_to_media_source() {
    let form = PinForm {
        product_url: String::new(),
        title: "  Shoes ".to_owned(),
        description: " Comfy ".to_owned(),
        image_url: " https://img/x.png ".to_owned(),
        link: "https://shop.test/shoes".to_owned(),
    };
    let req = form.to_request("b1").unwrap();
    assert_eq!(req.board_id, "b1");
    assert_eq!(req.title, "Shoes");
    assert_eq!(req.media_source, "https://img/x.png");
    assert_eq!(req.description, "Comfy");
    assert_eq!(req.link, "https://shop.test/shoes");
}

#[test]
fn to_request_requires_title() {
    let form = PinForm { title: "   ".to_owned(), image_url: "https://img/x.png".to_owned(), ..PinForm::default() };
    assert_eq!(form.to_request("b1"), Err(WorkflowError::Validation("Title and image required")));
}

#[test]
fn to_request_requires_image_url() {
    let form = PinForm { title: "Shoes".to_owned(), ..PinForm::default() };
    assert_eq!(form.to_request("b1"), Err(WorkflowError::Validation("Title and image required")));
}

#[test]
fn parse_target_rejects_malformed_url() {
    let form = PinForm { product_url: "not a url".to_owned(), ..PinForm::default() };
    assert_eq!(form.parse_target(), Err(WorkflowError::Validation("Enter valid URL")));
}

#[test]
fn parse_target_returns_trimmed_url() {
    let form = PinForm { product_url: " https://example.com/item ".to_owned(), ..PinForm::default() };
    assert_eq!(form.parse_target(), Ok("https://example.com/item".to_owned()));
}

#[test]
fn preview_url_only_for_valid_image_urls() {
    let mut form = PinForm::default();
    assert_eq!(form.preview_url(), None);
    form.set(PinField::ImageUrl, "nope".to_owned());
    assert_eq!(form.preview_url(), None);
    form.set(PinField::ImageUrl, "https://img/x.png".to_owned());
    assert_eq!(form.preview_url(), Some("https://img/x.png"));
}

#[test]
fn prefill_copies_product_and_sets_link() {
    let mut form = PinForm { product_url: "https://shop.test/p".to_owned(), ..PinForm::default() };
    let product = ParsedProduct {
        title: "Runner".to_owned(),
        description: "Light".to_owned(),
        image: "https://img/r.png".to_owned(),
        ..ParsedProduct::default()
    };
    form.prefill(&product, "https://shop.test/p");
    assert_eq!(form.title, "Runner");
    assert_eq!(form.description, "Light");
    assert_eq!(form.image_url, "https://img/r.png");
    assert_eq!(form.link, "https://shop.test/p");
    assert_eq!(form.product_url, "https://shop.test/p");
}

// =============================================================
// BoardForm
// =============================================================

#[test]
fn board_request_allows_empty_description() {
    let mut form = BoardForm::default();
    form.set(BoardField::Name, " Summer Sale ".to_owned());
    let req = form.to_request().unwrap();
    assert_eq!(req.name, "Summer Sale");
    assert_eq!(req.description, "");
}

#[test]
fn board_request_requires_name() {
    let form = BoardForm { name: "  ".to_owned(), description: "x".to_owned() };
    assert_eq!(form.to_request(), Err(WorkflowError::Validation("Board name required")));
}
