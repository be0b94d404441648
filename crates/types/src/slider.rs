//! Slider (carousel) options and the static slide text table.
//!
//! Option names mirror the carousel widget the page was designed against:
//! `slides_per_view`, `space_between`, `pagination`, `navigation`,
//! `slides_per_column` and `slides_per_column_fill`.

use serde::{Deserialize, Serialize};

/// Order in which a multi-row page is filled
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SlidesPerColumnFill {
    #[serde(rename = "row")]
    Row, // Left to right, then next row
    #[serde(rename = "column")]
    #[default]
    Column, // Top to bottom, then next column
}

/// Pagination bullets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationOptions {
    /// Selector of the element hosting the bullets
    pub el: String,
    #[serde(default)]
    pub clickable: bool,
}

/// Previous/next buttons
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigationOptions {
    pub next_el: String,
    pub prev_el: String,
}

/// Slider configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SliderOptions {
    #[serde(default = "default_one")]
    pub slides_per_view: u32,
    /// Gap between slides in pixels
    #[serde(default)]
    pub space_between: u32,
    #[serde(default)]
    pub pagination: Option<PaginationOptions>,
    #[serde(default)]
    pub navigation: Option<NavigationOptions>,
    #[serde(default = "default_one")]
    pub slides_per_column: u32,
    #[serde(default)]
    pub slides_per_column_fill: SlidesPerColumnFill,
}

fn default_one() -> u32 {
    1
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            slides_per_view: 1,
            space_between: 0,
            pagination: None,
            navigation: None,
            slides_per_column: 1,
            slides_per_column_fill: SlidesPerColumnFill::Column,
        }
    }
}

/// Where a slide lands once the slider is split into pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidePlacement {
    pub page: usize,
    pub column: u32,
    pub row: u32,
}

impl SliderOptions {
    /// Works section: one slide per view, 25px gap, clickable bullets.
    pub fn works() -> Self {
        Self {
            slides_per_view: 1,
            space_between: 25,
            pagination: Some(PaginationOptions {
                el: ".works-pagination".to_string(),
                clickable: true,
            }),
            ..Self::default()
        }
    }

    /// Skills section: three columns by two rows, filled row first.
    pub fn skills() -> Self {
        Self {
            slides_per_view: 3,
            slides_per_column: 2,
            slides_per_column_fill: SlidesPerColumnFill::Row,
            navigation: Some(NavigationOptions {
                next_el: "#skills-next".to_string(),
                prev_el: "#skills-prev".to_string(),
            }),
            ..Self::default()
        }
    }

    /// Testimonials section: defaults plus arrows.
    pub fn testimonials() -> Self {
        Self {
            navigation: Some(NavigationOptions {
                next_el: "#testimonials-next".to_string(),
                prev_el: "#testimonials-prev".to_string(),
            }),
            ..Self::default()
        }
    }

    /// Number of slide cells on one page (at least one).
    pub fn slides_per_page(&self) -> usize {
        (self.slides_per_view.max(1) * self.slides_per_column.max(1)) as usize
    }

    /// Number of pages needed for `item_count` slides.
    pub fn page_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.slides_per_page())
    }

    /// Place `item_count` slides onto pages and grid cells.
    pub fn page_layout(&self, item_count: usize) -> Vec<SlidePlacement> {
        let columns = self.slides_per_view.max(1);
        let rows = self.slides_per_column.max(1);
        let per_page = self.slides_per_page();

        (0..item_count)
            .map(|index| {
                let page = index / per_page;
                let cell = (index % per_page) as u32;
                let (column, row) = match self.slides_per_column_fill {
                    SlidesPerColumnFill::Row => (cell % columns, cell / columns),
                    SlidesPerColumnFill::Column => (cell / rows, cell % rows),
                };
                SlidePlacement { page, column, row }
            })
            .collect()
    }
}

/// Descriptive text shown next to the works slider for one slide id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlideText {
    pub id: String,
    pub text: String,
}

impl SlideText {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// First entry whose id matches.
    pub fn lookup<'a>(entries: &'a [SlideText], id: &str) -> Option<&'a SlideText> {
        entries.iter().find(|entry| entry.id == id)
    }

    /// Text table shipped with the page.
    pub fn default_works() -> Vec<SlideText> {
        vec![
            SlideText::new(
                "works-item-1",
                "Lorem ipsum dolor sit amet consectetur adipisicing elit. Pariatur numquam reiciendis ipsam nisi veniam tempore.",
            ),
            SlideText::new(
                "works-item-2",
                "Lorem ipsum dolor sit amet consectetur adipisicing elit. Corporis explicabo harum perferendis soluta omnis, quo assumenda sunt pariatur.",
            ),
            SlideText::new(
                "works-item-3",
                "Lorem ipsum dolor sit amet consectetur adipisicing elit. Hic nesciunt dolore fugiat? Repellendus repudiandae maxime nihil quasi voluptates? Voluptatem?",
            ),
            SlideText::new(
                "works-item-4",
                "Lorem ipsum dolor sit amet consectetur adipisicing elit. Pariatur numquam reiciendis ipsam nisi veniam tempore.",
            ),
            SlideText::new(
                "works-item-5",
                "Lorem dolor sit amet consectetur adipisicing elit. Corporis explicabo harum perferendis soluta omnis, quo assumenda sunt pariatur.",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_layout_fills_rows_first() {
        let layout = SliderOptions::skills().page_layout(8);
        assert_eq!(layout.len(), 8);
        assert_eq!(layout[0], SlidePlacement { page: 0, column: 0, row: 0 });
        assert_eq!(layout[2], SlidePlacement { page: 0, column: 2, row: 0 });
        assert_eq!(layout[3], SlidePlacement { page: 0, column: 0, row: 1 });
        assert_eq!(layout[6], SlidePlacement { page: 1, column: 0, row: 0 });
        assert_eq!(SliderOptions::skills().page_count(8), 2);
    }

    #[test]
    fn test_column_fill() {
        let options = SliderOptions {
            slides_per_view: 2,
            slides_per_column: 2,
            ..SliderOptions::default()
        };
        let layout = options.page_layout(4);
        assert_eq!(layout[1], SlidePlacement { page: 0, column: 0, row: 1 });
        assert_eq!(layout[2], SlidePlacement { page: 0, column: 1, row: 0 });
    }

    #[test]
    fn test_zero_counts_are_treated_as_one() {
        let options = SliderOptions {
            slides_per_view: 0,
            slides_per_column: 0,
            ..SliderOptions::default()
        };
        assert_eq!(options.slides_per_page(), 1);
        assert_eq!(options.page_count(3), 3);
        assert!(options.page_layout(0).is_empty());
    }

    #[test]
    fn test_works_preset_json() {
        let json = serde_json::to_value(SliderOptions::works()).unwrap();
        assert_eq!(json["space_between"], 25);
        assert_eq!(json["pagination"]["clickable"], true);
        assert_eq!(json["slides_per_column_fill"], "column");

        let partial: SliderOptions =
            serde_json::from_str(r#"{"slides_per_column_fill": "row"}"#).unwrap();
        assert_eq!(partial.slides_per_view, 1);
        assert_eq!(partial.slides_per_column_fill, SlidesPerColumnFill::Row);
    }

    #[test]
    fn test_lookup_slide_text() {
        let entries = SlideText::default_works();
        assert_eq!(entries.len(), 5);
        let third = SlideText::lookup(&entries, "works-item-3").unwrap();
        assert!(third.text.starts_with("Lorem ipsum dolor sit amet consectetur adipisicing elit. Hic"));
        assert!(SlideText::lookup(&entries, "works-item-9").is_none());
    }
}
