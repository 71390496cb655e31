//! Create Pin and Create Board form contents plus their client-side validation.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::error::WorkflowError;
use crate::net::types::{CreateBoardRequest, CreatePinRequest, ParsedProduct};
use crate::util::url_check::is_valid_url;

/// Editable fields of the Create Pin view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PinForm {
    pub product_url: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinField {
    ProductUrl,
    Title,
    Description,
    ImageUrl,
    Link,
}

impl PinForm {
    pub fn set(&mut self, field: PinField, value: String) {
        match field {
            PinField::ProductUrl => self.product_url = value,
            PinField::Title => self.title = value,
            PinField::Description => self.description = value,
            PinField::ImageUrl => self.image_url = value,
            PinField::Link => self.link = value,
        }
    }

    /// Image URL to preview, when the field holds a valid URL.
    #[must_use]
    pub fn preview_url(&self) -> Option<&str> {
        let url = self.image_url.trim();
        (!url.is_empty() && is_valid_url(url)).then_some(url)
    }

    /// The trimmed product URL, if it is valid for parsing.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Validation`] for an empty or malformed URL.
    pub fn parse_target(&self) -> Result<String, WorkflowError> {
        let url = self.product_url.trim();
        if url.is_empty() || !is_valid_url(url) {
            return Err(WorkflowError::Validation("Enter valid URL"));
        }
        Ok(url.to_owned())
    }

    /// Overwrite the pin fields from a parse result. `source_url` becomes the link.
    pub fn prefill(&mut self, product: &ParsedProduct, source_url: &str) {
        self.title.clone_from(&product.title);
        self.description.clone_from(&product.description);
        self.image_url.clone_from(&product.image);
        source_url.clone_into(&mut self.link);
    }

    /// Build the pin-creation payload for `board_id`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Validation`] when the trimmed title or image URL is empty.
    pub fn to_request(&self, board_id: &str) -> Result<CreatePinRequest, WorkflowError> {
        let title = self.title.trim();
        let image_url = self.image_url.trim();
        if title.is_empty() || image_url.is_empty() {
            return Err(WorkflowError::Validation("Title and image required"));
        }
        Ok(CreatePinRequest {
            board_id: board_id.to_owned(),
            title: title.to_owned(),
            media_source: image_url.to_owned(),
            description: self.description.trim().to_owned(),
            link: self.link.trim().to_owned(),
        })
    }
}

/// Editable fields of the Create Board view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardForm {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardField {
    Name,
    Description,
}

impl BoardForm {
    pub fn set(&mut self, field: BoardField, value: String) {
        match field {
            BoardField::Name => self.name = value,
            BoardField::Description => self.description = value,
        }
    }

    /// Build the board-creation payload. The description may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Validation`] when the trimmed name is empty.
    pub fn to_request(&self) -> Result<CreateBoardRequest, WorkflowError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(WorkflowError::Validation("Board name required"));
        }
        Ok(CreateBoardRequest { name: name.to_owned(), description: self.description.trim().to_owned() })
    }
}
