//! DirWalker - pull-driven depth-first file enumeration

use std::fs::{self, DirEntry, ReadDir};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::WalkError;

use super::entry::{FileEntry, WalkWarning};

type DirPredicate = Box<dyn Fn(&Path) -> bool>;

/// Lazily walks every regular file under a root directory.
///
/// Yields `Ok(FileEntry)` per file. Unreadable directories and files that
/// disappear mid-walk are skipped and recorded in [`warnings`](Self::warnings).
/// Any other I/O error is yielded once as `Err`, after which the walker is
/// exhausted.
///
/// Symlinks are neither descended into nor counted.
pub struct DirWalker {
    /// Directories discovered but not yet listed.
    pending: Vec<PathBuf>,
    /// Directory currently being listed.
    current: Option<(PathBuf, ReadDir)>,
    exclude: DirPredicate,
    warnings: Vec<WalkWarning>,
    finished: bool,
}

impl DirWalker {
    /// Create a walker rooted at `root`.
    ///
    /// Fails before yielding anything if the root does not exist or is not a
    /// directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, WalkError> {
        let root = root.as_ref().to_path_buf();
        let metadata = match fs::metadata(&root) {
            Ok(m) => m,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(WalkError::RootNotFound { path: root });
            }
            Err(e) => return Err(WalkError::io(root, e)),
        };
        if !metadata.is_dir() {
            return Err(WalkError::NotADirectory { path: root });
        }

        Ok(Self {
            pending: vec![root],
            current: None,
            exclude: Box::new(|_| false),
            warnings: Vec::new(),
            finished: false,
        })
    }

    /// Skip every subdirectory (and its subtree) for which `predicate` is true.
    ///
    /// The predicate is called once per discovered subdirectory, never for the
    /// root itself.
    pub fn with_filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Path) -> bool + 'static,
    {
        self.exclude = Box::new(predicate);
        self
    }

    /// Recoverable conditions met so far.
    pub fn warnings(&self) -> &[WalkWarning] {
        &self.warnings
    }

    /// Produce the next file, or `Ok(None)` once every directory is exhausted.
    fn advance(&mut self) -> Result<Option<FileEntry>, WalkError> {
        loop {
            let next = match &mut self.current {
                Some((_, entries)) => entries.next(),
                None => match self.pending.pop() {
                    Some(dir) => {
                        self.open_dir(dir)?;
                        continue;
                    }
                    None => return Ok(None),
                },
            };

            match next {
                Some(Ok(entry)) => {
                    if let Some(file) = self.visit(entry)? {
                        return Ok(Some(file));
                    }
                }
                Some(Err(err)) => {
                    // The rest of this listing is abandoned.
                    if let Some((dir, _)) = self.current.take() {
                        self.skip_dir(dir, err)?;
                    }
                }
                None => self.current = None,
            }
        }
    }

    fn open_dir(&mut self, dir: PathBuf) -> Result<(), WalkError> {
        debug!("listing {}", dir.display());
        match fs::read_dir(&dir) {
            Ok(entries) => {
                self.current = Some((dir, entries));
                Ok(())
            }
            Err(err) => self.skip_dir(dir, err),
        }
    }

    fn visit(&mut self, entry: DirEntry) -> Result<Option<FileEntry>, WalkError> {
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(err) => return self.skip_file(path, err),
        };

        if file_type.is_symlink() {
            return Ok(None);
        }

        if file_type.is_dir() {
            if (self.exclude)(&path) {
                debug!("excluding {}", path.display());
            } else {
                self.pending.push(path);
            }
            return Ok(None);
        }

        if !file_type.is_file() {
            return Ok(None);
        }

        match entry.metadata() {
            Ok(metadata) => Ok(Some(FileEntry::new(path, metadata.len()))),
            Err(err) => self.skip_file(path, err),
        }
    }

    fn skip_dir(&mut self, dir: PathBuf, err: io::Error) -> Result<(), WalkError> {
        match err.kind() {
            ErrorKind::PermissionDenied | ErrorKind::NotFound => {
                self.record(WalkWarning::unreadable_dir(dir, &err));
                Ok(())
            }
            _ => Err(WalkError::io(dir, err)),
        }
    }

    fn skip_file(&mut self, path: PathBuf, err: io::Error) -> Result<Option<FileEntry>, WalkError> {
        if err.kind() == ErrorKind::NotFound {
            self.record(WalkWarning::vanished_file(path, &err));
            Ok(None)
        } else {
            Err(WalkError::io(path, err))
        }
    }

    fn record(&mut self, warning: WalkWarning) {
        warn!("{warning}");
        self.warnings.push(warning);
    }
}

impl Iterator for DirWalker {
    type Item = Result<FileEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.advance() {
            Ok(Some(file)) => Some(Ok(file)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                self.current = None;
                self.pending.clear();
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for DirWalker {}
