use crate::domain::areas::editor::Editor;
use crate::domain::areas::repository::Repository;
use crate::domain::working_dir;

const WORKING_DIR_NOT_FOUND_MESSAGE: &str = "Git: working directory not found";

/// Opens every file reported as modified in the working tree of the
/// repository resolved from the editor's project context.
///
/// The editor context is read exactly once, up front. When no working
/// directory can be resolved the user is told through a status message and
/// the command ends without error; a failing status query propagates.
pub fn open_modified(editor: &mut dyn Editor) -> anyhow::Result<()> {
    let folders = editor.project_folders();
    let active_file = editor.active_file();

    let Some(working_dir) = working_dir::resolve(&folders, active_file.as_deref()) else {
        editor.show_status_message(WORKING_DIR_NOT_FOUND_MESSAGE)?;
        return Ok(());
    };

    let repository = Repository::new(&working_dir);

    for modified_file in repository.modified_files()? {
        let path = repository.working_dir().join(modified_file.trim_matches('"'));

        // a modified submodule entry would resolve to a directory
        if !path.is_dir() {
            editor.open_file(&path)?;
        }
    }

    Ok(())
}
