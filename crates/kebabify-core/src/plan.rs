use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::transformer::{EntryKind, KebabTransformer};
use crate::KebabError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameScope {
    Directories,
    Files,
    Both,
}

/// A planned rename of `source` to `destination` within the same parent directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOperation {
    source: PathBuf,
    destination: PathBuf,
}

impl RenameScope {
    pub fn includes_files(&self) -> bool {
        matches!(self, RenameScope::Files | RenameScope::Both)
    }

    pub fn includes_directories(&self) -> bool {
        matches!(self, RenameScope::Directories | RenameScope::Both)
    }
}

impl FromStr for RenameScope {
    type Err = KebabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d" => Ok(RenameScope::Directories),
            "f" => Ok(RenameScope::Files),
            "b" => Ok(RenameScope::Both),
            _ => Err(KebabError::InvalidScopeChoice {
                choice: s.trim().to_string(),
            }),
        }
    }
}

impl RenameOperation {
    pub fn new(source: PathBuf, destination: PathBuf) -> Self {
        Self { source, destination }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn depth(&self) -> usize {
        self.source.components().count()
    }

    pub fn new_name(&self) -> String {
        self.destination
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The source relative to `target`, with `.` standing for the target itself.
    pub fn display_source(&self, target: &Path) -> String {
        match self.source.strip_prefix(target) {
            Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
            Ok(relative) => relative.display().to_string(),
            Err(_) => self.source.display().to_string(),
        }
    }
}

/// Walks `target` children-first and returns every rename needed to bring the
/// selected entries to kebab-case, deepest paths first.
pub fn collect_operations(
    target: &Path,
    scope: RenameScope,
    transformer: &KebabTransformer,
) -> Result<Vec<RenameOperation>> {
    info!("Collecting rename operations under {:?} ({:?})", target, scope);

    let mut operations = Vec::new();
    collect_recursive(target, scope, transformer, &mut operations)?;

    if scope.includes_directories() {
        if let Some(new_name) = transformer.rename_target(target, EntryKind::Directory) {
            if let Some(parent) = target.parent() {
                operations.push(RenameOperation::new(
                    target.to_path_buf(),
                    parent.join(new_name),
                ));
            }
        }
    }

    sort_by_depth(&mut operations);

    info!("Collected {} rename operations", operations.len());
    Ok(operations)
}

/// Stable sort placing deeper sources before their ancestors.
pub fn sort_by_depth(operations: &mut [RenameOperation]) {
    operations.sort_by_key(|operation| std::cmp::Reverse(operation.depth()));
}

fn collect_recursive(
    dir: &Path,
    scope: RenameScope,
    transformer: &KebabTransformer,
    operations: &mut Vec<RenameOperation>,
) -> Result<()> {
    debug!("Scanning directory: {:?}", dir);

    let mut entries: Vec<_> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut files = Vec::new();
    let mut directories = Vec::new();
    for entry in &entries {
        let path = entry.path();
        let is_symlink = entry.file_type().map(|t| t.is_symlink()).unwrap_or(false);
        if path.is_dir() {
            directories.push((path, is_symlink));
        } else {
            files.push(path);
        }
    }

    // Descend first so children are planned before their parent
    for (path, is_symlink) in &directories {
        if *is_symlink {
            debug!("Not following symlinked directory: {:?}", path);
            continue;
        }
        if let Err(e) = collect_recursive(path, scope, transformer, operations) {
            warn!("Skipping unreadable directory {:?}: {}", path, e);
        }
    }

    if scope.includes_files() {
        for path in &files {
            plan_entry(dir, path, EntryKind::File, transformer, operations);
        }
    }

    if scope.includes_directories() {
        for (path, _) in &directories {
            plan_entry(dir, path, EntryKind::Directory, transformer, operations);
        }
    }

    Ok(())
}

fn plan_entry(
    dir: &Path,
    path: &Path,
    kind: EntryKind,
    transformer: &KebabTransformer,
    operations: &mut Vec<RenameOperation>,
) {
    if let Some(new_name) = transformer.rename_target(path, kind) {
        operations.push(RenameOperation::new(path.to_path_buf(), dir.join(new_name)));
    }
}
