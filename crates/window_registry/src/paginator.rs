//! Page navigation state for the PDF viewer window.
//!
//! The shell renders no document content. A host that embeds a PDF renderer in the
//! `pdfviewer` frame owns a [`DocumentPager`] and draws [`DocumentPager::page_buttons`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageButton {
    pub number: u32,
    pub disabled: bool,
    /// Whether a `/` separator follows this button.
    pub separator_after: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPager {
    file_name: String,
    num_pages: Option<u32>,
    current_page: u32,
}

impl DocumentPager {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            num_pages: None,
            current_page: 1,
        }
    }

    /// File name up to the first `.`.
    pub fn title(&self) -> &str {
        self.file_name
            .split('.')
            .next()
            .unwrap_or(self.file_name.as_str())
    }

    pub fn num_pages(&self) -> Option<u32> {
        self.num_pages
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Records the page count once the document has loaded. Zero pages counts as not loaded.
    pub fn on_load(&mut self, num_pages: u32) {
        self.num_pages = (num_pages > 0).then_some(num_pages);
        if let Some(total) = self.num_pages {
            self.current_page = self.current_page.clamp(1, total);
        }
    }

    /// Moves to `page` and returns it as the scroll target, or `None` when out of range.
    pub fn jump_to(&mut self, page: u32) -> Option<u32> {
        let total = self.num_pages?;
        if !(1..=total).contains(&page) {
            return None;
        }
        self.current_page = page;
        Some(page)
    }

    pub fn page_buttons(&self) -> Vec<PageButton> {
        let Some(total) = self.num_pages else {
            return Vec::new();
        };
        (1..=total)
            .map(|number| PageButton {
                number,
                disabled: number == self.current_page,
                separator_after: number != total,
            })
            .collect()
    }
}
