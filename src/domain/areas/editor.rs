use anyhow::Context;
use colored::Colorize;
use std::cell::RefCell;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Editor-side collaborator.
///
/// The command depends on exactly these four operations. Project context is
/// looked up once by the boundary and replayed from here, so the core stays
/// free of global editor state.
pub trait Editor {
    fn project_folders(&self) -> Vec<PathBuf>;
    fn active_file(&self) -> Option<PathBuf>;
    fn open_file(&mut self, path: &Path) -> anyhow::Result<()>;
    fn show_status_message(&mut self, text: &str) -> anyhow::Result<()>;
}

/// CLI-backed editor: context comes from the command line, and opened files
/// are handed to the configured opener command. Without an opener the paths
/// are written to the injected writer instead, which makes the default mode
/// a plain lister.
pub struct CliEditor {
    folders: Vec<PathBuf>,
    active_file: Option<PathBuf>,
    opener: Option<String>,
    writer: RefCell<Box<dyn Write>>,
}

impl CliEditor {
    pub fn new(
        folders: Vec<PathBuf>,
        active_file: Option<PathBuf>,
        opener: Option<String>,
        writer: Box<dyn Write>,
    ) -> Self {
        CliEditor {
            folders,
            active_file,
            opener,
            writer: RefCell::new(writer),
        }
    }
}

impl Editor for CliEditor {
    fn project_folders(&self) -> Vec<PathBuf> {
        self.folders.clone()
    }

    fn active_file(&self) -> Option<PathBuf> {
        self.active_file.clone()
    }

    fn open_file(&mut self, path: &Path) -> anyhow::Result<()> {
        match &self.opener {
            Some(opener) => {
                // the open request is issued, not awaited
                Command::new(opener)
                    .arg(path)
                    .spawn()
                    .with_context(|| format!("Failed to launch editor command {:?}", opener))?;

                Ok(())
            }
            None => {
                writeln!(self.writer.borrow_mut(), "{}", path.display())?;

                Ok(())
            }
        }
    }

    fn show_status_message(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.writer.borrow_mut(), "{}", text.yellow())?;

        Ok(())
    }
}
