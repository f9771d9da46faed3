//! The two user-facing commands: open the corresponding file, either in
//! place or in the other pane.

use tracing::error;

use crate::discovery::WorkspaceIndex;
use crate::editor::Editor;
use crate::error::{Error, FindError, Result};
use crate::finder::find_file;
use crate::pane::{other_pane, Pane};

pub const NO_MATCH_MESSAGE: &str = "No corresponding test file found.";

#[derive(Debug, Clone, Copy)]
pub struct OpenRequest<'a> {
    pub active_file: &'a str,
    pub active_pane: Option<Pane>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened { path: String, pane: Option<Pane> },
    NoMatch,
    NotFound,
}

impl OpenOutcome {
    pub fn is_opened(&self) -> bool {
        matches!(self, OpenOutcome::Opened { .. })
    }
}

pub fn open_corresponding<I, E>(
    index: &I,
    editor: &mut E,
    request: OpenRequest<'_>,
) -> Result<OpenOutcome>
where
    I: WorkspaceIndex + ?Sized,
    E: Editor + ?Sized,
{
    open_test_file(index, editor, request, false)
}

pub fn open_corresponding_to_the_side<I, E>(
    index: &I,
    editor: &mut E,
    request: OpenRequest<'_>,
) -> Result<OpenOutcome>
where
    I: WorkspaceIndex + ?Sized,
    E: Editor + ?Sized,
{
    open_test_file(index, editor, request, true)
}

/// Resolves the counterpart of the active file and shows it.
///
/// A missing counterpart is reported to the user through the editor. An
/// active file the index does not know is only logged. Anything else is
/// returned to the caller untouched.
pub fn open_test_file<I, E>(
    index: &I,
    editor: &mut E,
    request: OpenRequest<'_>,
    open_to_the_side: bool,
) -> Result<OpenOutcome>
where
    I: WorkspaceIndex + ?Sized,
    E: Editor + ?Sized,
{
    match find_file(request.active_file, index) {
        Ok(path) => {
            let pane = open_to_the_side.then(|| other_pane(request.active_pane));
            editor.show(&path, pane)?;
            Ok(OpenOutcome::Opened { path, pane })
        }
        Err(Error::Find(err @ FindError::NoMatch { .. })) => {
            editor.notify(NO_MATCH_MESSAGE);
            error!(%err, "no corresponding file");
            Ok(OpenOutcome::NoMatch)
        }
        Err(Error::Find(err @ FindError::NotFound { .. })) => {
            error!(%err, "active file missing from workspace index");
            Ok(OpenOutcome::NotFound)
        }
        Err(err) => Err(err),
    }
}
