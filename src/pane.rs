use clap::ValueEnum;
use serde::Serialize;

/// One of the two editor columns a file can be opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Pane {
    One,
    Two,
}

impl Pane {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pane::One => "one",
            Pane::Two => "two",
        }
    }
}

/// Pane to open a side-by-side file in: the first pane when nothing is
/// active or the second pane is active, the second pane otherwise.
pub fn other_pane(active: Option<Pane>) -> Pane {
    match active {
        None | Some(Pane::Two) => Pane::One,
        Some(Pane::One) => Pane::Two,
    }
}
