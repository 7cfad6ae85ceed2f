//! Askama templates for the web frontend.

use askama::Template;

use crate::nearby::{RankedStation, SearchOutcome};

/// Home page with the town picker.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    /// Town names, sorted ascending
    pub towns: &'a [String],
}

/// Search results page.
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub selected_town: String,
    pub error: Option<String>,
    pub stations: Vec<RankedStation>,
}

impl ResultsTemplate {
    /// Heading line above the results table.
    pub fn summary(&self) -> String {
        match self.stations.len() {
            0 => format!("No stations found near {}", self.selected_town),
            1 => format!("1 station near {}", self.selected_town),
            n => format!("{} stations near {}", n, self.selected_town),
        }
    }
}

impl From<SearchOutcome> for ResultsTemplate {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            selected_town: outcome.selected_town,
            error: outcome.error,
            stations: outcome.stations,
        }
    }
}
