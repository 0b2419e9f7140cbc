//! Local File System Store Implementation
//!
//! Implements the IntermediatesManager port on a local directory tree, one
//! subdirectory per step and one file per output (see `layout`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace, warn};

use super::atomic;
use super::layout;
use crate::domain::ports::{Codec, IntermediatesManager};
use crate::domain::value_objects::{validate_segment, ContentDigest, StepOutputHandle};
use crate::error::{StoreError, StoreResult};
use crate::infrastructure::codec::Encoding;

/// Durable intermediate store rooted at an existing directory
///
/// Values are encoded with `C` and published atomically; a file that
/// `has_value` reports is always complete.
#[derive(Debug, Clone)]
pub struct FileSystemIntermediatesManager<C = Encoding> {
    root: PathBuf,
    codec: C,
    fsync: bool,
}

/// Layout inconsistency found by [`FileSystemIntermediatesManager::verify`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutIssue {
    /// Entry directly under the root that is not a step directory
    NotAStepDirectory { path: PathBuf },
    /// Entry inside a step directory that is not a regular file
    NotAnOutputFile { path: PathBuf },
    /// Leftover temp file from an interrupted write
    PartialWrite { path: PathBuf },
    /// Entry whose name cannot be a step key or output name
    ForeignName { path: PathBuf },
}

impl LayoutIssue {
    pub fn path(&self) -> &Path {
        match self {
            LayoutIssue::NotAStepDirectory { path }
            | LayoutIssue::NotAnOutputFile { path }
            | LayoutIssue::PartialWrite { path }
            | LayoutIssue::ForeignName { path } => path,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            LayoutIssue::NotAStepDirectory { .. } => "not a step directory",
            LayoutIssue::NotAnOutputFile { .. } => "not a regular file",
            LayoutIssue::PartialWrite { .. } => "interrupted write",
            LayoutIssue::ForeignName { .. } => "name is not a valid identifier",
        }
    }
}

impl FileSystemIntermediatesManager<Encoding> {
    /// Open a store with the default (JSON) encoding
    pub fn new(root: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::with_codec(root, Encoding::default())
    }
}

impl<C: Codec> FileSystemIntermediatesManager<C> {
    /// Open a store; `root` must be an existing directory
    pub fn with_codec(root: impl Into<PathBuf>, codec: C) -> StoreResult<Self> {
        let root = root.into();
        match fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(StoreError::InvalidRoot {
                    path: root,
                    reason: "not a directory".to_string(),
                })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::InvalidRoot {
                    path: root,
                    reason: "does not exist".to_string(),
                })
            }
            Err(e) => return Err(StoreError::io(root, e)),
        }

        debug!(root = %root.display(), codec = codec.name(), "opened filesystem store");
        Ok(Self {
            root,
            codec,
            fsync: true,
        })
    }

    /// Toggle flushing to disk before a write reports success
    pub fn with_fsync(mut self, fsync: bool) -> Self {
        self.fsync = fsync;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Where the value of `handle` lives (whether or not it exists)
    pub fn path_for(&self, handle: &StepOutputHandle) -> PathBuf {
        layout::output_path(&self.root, handle)
    }

    /// Whether a value is stored for `handle`
    ///
    /// An existing path that is not a regular file (or a step entry that is
    /// not a directory) is `CorruptStore`, never "absent". Dangling symlinks
    /// count as existing.
    pub fn has_value(&self, handle: &StepOutputHandle) -> StoreResult<bool> {
        if !self.step_dir_exists(handle.step_key())? {
            return Ok(false);
        }

        let path = self.path_for(handle);
        match stat(&path, "output")? {
            Some(meta) if meta.is_file() => Ok(true),
            Some(_) => Err(StoreError::CorruptStore {
                path,
                reason: "output entry is not a regular file".to_string(),
            }),
            None => Ok(false),
        }
    }

    fn step_dir_exists(&self, step_key: &str) -> StoreResult<bool> {
        let step_dir = layout::step_dir(&self.root, step_key);
        match stat(&step_dir, "step")? {
            Some(meta) if meta.is_dir() => Ok(true),
            Some(_) => Err(StoreError::CorruptStore {
                path: step_dir,
                reason: "step entry is not a directory".to_string(),
            }),
            None => Ok(false),
        }
    }

    /// Raw payload stored for `handle`; requires `has_value(handle)`
    pub fn get_bytes(&self, handle: &StepOutputHandle) -> StoreResult<Vec<u8>> {
        if !self.has_value(handle)? {
            return Err(StoreError::not_set(handle));
        }
        let path = self.path_for(handle);
        trace!(%handle, path = %path.display(), "reading intermediate");
        fs::read(&path).map_err(|e| StoreError::io(path, e))
    }

    /// Store a raw payload for `handle`; requires `!has_value(handle)`
    pub fn set_bytes(&self, handle: &StepOutputHandle, bytes: &[u8]) -> StoreResult<()> {
        if self.has_value(handle)? {
            return Err(StoreError::already_set(handle));
        }
        self.publish(handle, bytes)
    }

    // Callers have already checked that `handle` is unset.
    fn publish(&self, handle: &StepOutputHandle, bytes: &[u8]) -> StoreResult<()> {
        let step_dir = layout::step_dir(&self.root, handle.step_key());
        fs::create_dir_all(&step_dir).map_err(|e| StoreError::io(&step_dir, e))?;

        let path = self.path_for(handle);
        match atomic::publish_new(&step_dir, &path, bytes, self.fsync) {
            Ok(()) => {
                debug!(%handle, bytes = bytes.len(), "stored intermediate");
                Ok(())
            }
            // Lost a race against another writer of the same handle.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(StoreError::already_set(handle))
            }
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    /// Decode the value stored for `handle`
    pub fn get_value<V>(&self, handle: &StepOutputHandle) -> StoreResult<V>
    where
        V: DeserializeOwned,
    {
        let bytes = self.get_bytes(handle)?;
        self.codec
            .decode(&bytes)
            .map_err(|source| StoreError::Codec {
                handle: handle.clone(),
                source,
            })
    }

    /// Encode and store `value` for `handle`
    pub fn set_value<V>(&self, handle: &StepOutputHandle, value: &V) -> StoreResult<()>
    where
        V: Serialize + ?Sized,
    {
        // Check before encoding so a duplicate write never pays for it.
        if self.has_value(handle)? {
            return Err(StoreError::already_set(handle));
        }
        let bytes = self
            .codec
            .encode(value)
            .map_err(|source| StoreError::Codec {
                handle: handle.clone(),
                source,
            })?;
        self.publish(handle, &bytes)
    }

    /// SHA-256 digest of the payload stored for `handle`
    pub fn digest(&self, handle: &StepOutputHandle) -> StoreResult<ContentDigest> {
        Ok(ContentDigest::of(&self.get_bytes(handle)?))
    }

    /// Every stored handle, sorted; entries outside the layout are skipped
    pub fn handles(&self) -> StoreResult<Vec<StepOutputHandle>> {
        let mut handles = Vec::new();
        for entry in read_dir(&self.root)? {
            let entry = entry.map_err(|e| StoreError::io(&self.root, e))?;
            if !entry_is_dir(&entry)? {
                continue;
            }
            let step = entry.file_name();
            if let Some(step_key) = step.to_str() {
                if validate_segment("step key", step_key).is_ok() {
                    handles.extend(self.step_handles(step_key)?);
                }
            }
        }
        handles.sort();
        Ok(handles)
    }

    /// Stored handles of one step, sorted
    pub fn step_handles(&self, step_key: &str) -> StoreResult<Vec<StepOutputHandle>> {
        validate_segment("step key", step_key)?;
        if !self.step_dir_exists(step_key)? {
            return Ok(Vec::new());
        }
        let step_dir = layout::step_dir(&self.root, step_key);

        let mut handles = Vec::new();
        for entry in read_dir(&step_dir)? {
            let entry = entry.map_err(|e| StoreError::io(&step_dir, e))?;
            let name = entry.file_name();
            if layout::is_temp_name(&name) || !entry_is_file(&entry)? {
                continue;
            }
            if let Some(handle) = layout::handle_from_segments(step_key.as_ref(), &name) {
                handles.push(handle);
            }
        }
        handles.sort();
        Ok(handles)
    }

    /// Walk the tree and report entries that break the layout
    ///
    /// Nothing is repaired; cleanup is left to external tooling.
    pub fn verify(&self) -> StoreResult<Vec<LayoutIssue>> {
        let mut issues = Vec::new();
        for entry in read_dir(&self.root)? {
            let entry = entry.map_err(|e| StoreError::io(&self.root, e))?;
            let path = entry.path();
            if !entry_is_dir(&entry)? {
                issues.push(LayoutIssue::NotAStepDirectory { path });
                continue;
            }
            let name = entry.file_name();
            if !name
                .to_str()
                .is_some_and(|n| validate_segment("step key", n).is_ok())
            {
                issues.push(LayoutIssue::ForeignName { path });
                continue;
            }

            for output in read_dir(&path)? {
                let output = output.map_err(|e| StoreError::io(&path, e))?;
                let output_path = output.path();
                let output_name = output.file_name();
                if layout::is_temp_name(&output_name) {
                    issues.push(LayoutIssue::PartialWrite { path: output_path });
                } else if !entry_is_file(&output)? {
                    issues.push(LayoutIssue::NotAnOutputFile { path: output_path });
                } else if layout::handle_from_segments(&name, &output_name).is_none() {
                    issues.push(LayoutIssue::ForeignName { path: output_path });
                }
            }
        }

        issues.sort_by(|a, b| a.path().cmp(b.path()));
        for issue in &issues {
            warn!(path = %issue.path().display(), "{}", issue.describe());
        }
        Ok(issues)
    }
}

impl<V, C> IntermediatesManager<V> for FileSystemIntermediatesManager<C>
where
    V: Serialize + DeserializeOwned,
    C: Codec + Send + Sync,
{
    fn has_value(&self, handle: &StepOutputHandle) -> StoreResult<bool> {
        Self::has_value(self, handle)
    }

    fn get_value(&self, handle: &StepOutputHandle) -> StoreResult<V> {
        Self::get_value(self, handle)
    }

    fn set_value(&self, handle: &StepOutputHandle, value: V) -> StoreResult<()> {
        Self::set_value(self, handle, &value)
    }
}

/// Metadata of `path` following symlinks, `None` if nothing is there
///
/// A symlink whose target is missing is `CorruptStore`, not absent.
fn stat(path: &Path, entry: &str) -> StoreResult<Option<fs::Metadata>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => match fs::symlink_metadata(path) {
            Ok(_) => Err(StoreError::CorruptStore {
                path: path.to_path_buf(),
                reason: format!("{} entry is a dangling symlink", entry),
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(path, e)),
        },
        Err(e) => Err(StoreError::io(path, e)),
    }
}

fn read_dir(path: &Path) -> StoreResult<fs::ReadDir> {
    fs::read_dir(path).map_err(|e| StoreError::io(path, e))
}

// `DirEntry::file_type` does not follow symlinks; the store does.
fn entry_is_dir(entry: &fs::DirEntry) -> StoreResult<bool> {
    let path = entry.path();
    match fs::metadata(&path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(StoreError::io(path, e)),
    }
}

fn entry_is_file(entry: &fs::DirEntry) -> StoreResult<bool> {
    let path = entry.path();
    match fs::metadata(&path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(StoreError::io(path, e)),
    }
}
