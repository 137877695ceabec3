//! Test doubles
//!
//! In-memory filesystem and reporter that record every call, so tests can
//! assert on side effects without touching disk.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::storage::Filesystem;
use crate::utils::Reporter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Dir,
    File,
    Symlink(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsCall {
    Exists(PathBuf),
    IsDir(PathBuf),
    ReadLink(PathBuf),
    CreateDir(PathBuf),
    Symlink { target: PathBuf, link: PathBuf },
}

impl FsCall {
    fn is_mutation(&self) -> bool {
        matches!(self, FsCall::CreateDir(_) | FsCall::Symlink { .. })
    }
}

#[derive(Debug, Default)]
struct State {
    entries: BTreeMap<PathBuf, Entry>,
    denied: HashSet<PathBuf>,
    racing: HashSet<PathBuf>,
    symlink_error: Option<io::ErrorKind>,
    calls: Vec<FsCall>,
}

#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    state: RefCell<State>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&self, path: &str) {
        let mut state = self.state.borrow_mut();
        for ancestor in Path::new(path).ancestors() {
            state.entries.insert(ancestor.to_path_buf(), Entry::Dir);
        }
    }

    pub fn add_file(&self, path: &str) {
        let path = Path::new(path);
        if let Some(parent) = path.parent() {
            self.add_dir(&parent.to_string_lossy());
        }
        self.state
            .borrow_mut()
            .entries
            .insert(path.to_path_buf(), Entry::File);
    }

    pub fn add_symlink(&self, link: &str, target: &str) {
        let link = Path::new(link);
        if let Some(parent) = link.parent() {
            self.add_dir(&parent.to_string_lossy());
        }
        self.state
            .borrow_mut()
            .entries
            .insert(link.to_path_buf(), Entry::Symlink(PathBuf::from(target)));
    }

    /// Creating `path` fails with permission denied
    pub fn deny(&self, path: &str) {
        self.state.borrow_mut().denied.insert(PathBuf::from(path));
    }

    /// Creating `path` fails, but the directory appears anyway
    pub fn race_create(&self, path: &str) {
        self.state.borrow_mut().racing.insert(PathBuf::from(path));
    }

    pub fn fail_symlinks(&self, kind: io::ErrorKind) {
        self.state.borrow_mut().symlink_error = Some(kind);
    }

    pub fn entry(&self, path: &str) -> Option<Entry> {
        self.state.borrow().entries.get(Path::new(path)).cloned()
    }

    pub fn entries(&self) -> BTreeMap<PathBuf, Entry> {
        self.state.borrow().entries.clone()
    }

    pub fn calls(&self) -> Vec<FsCall> {
        self.state.borrow().calls.clone()
    }

    pub fn mutations(&self) -> Vec<FsCall> {
        self.calls().into_iter().filter(FsCall::is_mutation).collect()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    fn record(&self, call: FsCall) {
        self.state.borrow_mut().calls.push(call);
    }

    fn resolves_to_dir(&self, path: &Path) -> bool {
        let state = self.state.borrow();
        match state.entries.get(path) {
            Some(Entry::Dir) => true,
            Some(Entry::Symlink(target)) => matches!(state.entries.get(target), Some(Entry::Dir)),
            _ => false,
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.record(FsCall::Exists(path.to_path_buf()));
        self.state.borrow().entries.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.record(FsCall::IsDir(path.to_path_buf()));
        self.resolves_to_dir(path)
    }

    fn read_link(&self, path: &Path) -> Option<PathBuf> {
        self.record(FsCall::ReadLink(path.to_path_buf()));
        match self.state.borrow().entries.get(path) {
            Some(Entry::Symlink(target)) => Some(target.clone()),
            _ => None,
        }
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.record(FsCall::CreateDir(path.to_path_buf()));

        if self.state.borrow().racing.contains(path) {
            self.add_dir(&path.to_string_lossy());
            return Err(io::Error::from(io::ErrorKind::AlreadyExists));
        }

        let mut state = self.state.borrow_mut();
        if path.ancestors().any(|a| state.denied.contains(a)) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }

        let ancestors: Vec<PathBuf> = path.ancestors().map(Path::to_path_buf).collect();
        for ancestor in &ancestors {
            match state.entries.get(ancestor) {
                None | Some(Entry::Dir) => {}
                Some(_) => return Err(io::Error::from(io::ErrorKind::AlreadyExists)),
            }
        }
        for ancestor in ancestors {
            state.entries.insert(ancestor, Entry::Dir);
        }
        Ok(())
    }

    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        self.record(FsCall::Symlink {
            target: target.to_path_buf(),
            link: link.to_path_buf(),
        });

        let mut state = self.state.borrow_mut();
        if let Some(kind) = state.symlink_error {
            return Err(io::Error::new(kind, "simulated symlink failure"));
        }
        if state.entries.contains_key(link) {
            return Err(io::Error::from(io::ErrorKind::AlreadyExists));
        }
        let parent_is_dir = link
            .parent()
            .is_some_and(|p| matches!(state.entries.get(p), Some(Entry::Dir)));
        if !parent_is_dir {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        state
            .entries
            .insert(link.to_path_buf(), Entry::Symlink(target.to_path_buf()));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Error,
}

#[derive(Debug, Default)]
pub struct RecordingReporter {
    lines: RefCell<Vec<(Level, String)>>,
}

impl RecordingReporter {
    fn lines_at(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn debug_lines(&self) -> Vec<String> {
        self.lines_at(Level::Debug)
    }

    pub fn info_lines(&self) -> Vec<String> {
        self.lines_at(Level::Info)
    }

    pub fn error_lines(&self) -> Vec<String> {
        self.lines_at(Level::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl Reporter for RecordingReporter {
    fn debug(&self, message: &str) {
        self.lines.borrow_mut().push((Level::Debug, message.to_string()));
    }

    fn info(&self, message: &str) {
        self.lines.borrow_mut().push((Level::Info, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.lines.borrow_mut().push((Level::Error, message.to_string()));
    }
}
