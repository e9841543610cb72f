use std::collections::HashMap;
use std::path::Path;
use regex::Regex;
use tracing::debug;

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Names that are mapped verbatim instead of going through the generic conversion.
///
/// Lookups are exact and case-sensitive against the whole name.
#[derive(Debug, Clone)]
pub struct SpecialNames {
    mappings: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

pub struct KebabTransformer<'a> {
    special_names: &'a SpecialNames,
    separator_pattern: Regex,
    hyphen_pattern: Regex,
}

impl SpecialNames {
    pub fn new<I, K, V>(mappings: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            mappings: mappings
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.mappings.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl Default for SpecialNames {
    fn default() -> Self {
        Self::new([
            ("C#", "c-sharp"),
            ("C++", "cpp"),
            ("C", "c"),
        ])
    }
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::File => "File",
            EntryKind::Directory => "Directory",
        }
    }
}

impl<'a> KebabTransformer<'a> {
    pub fn new(special_names: &'a SpecialNames) -> Result<Self, regex::Error> {
        // Underscore is a word character for the regex engine but a separator here.
        let separator_pattern = Regex::new(r"[\W_]+")?;
        let hyphen_pattern = Regex::new(r"-+")?;
        Ok(Self {
            special_names,
            separator_pattern,
            hyphen_pattern,
        })
    }

    pub fn transform(&self, name: &str, kind: EntryKind) -> String {
        if name == "." || name == ".." {
            return name.to_string();
        }

        if let Some(mapped) = self.special_names.get(name) {
            debug!("Special name mapping: '{}' -> '{}'", name, mapped);
            return mapped.to_string();
        }

        match kind {
            EntryKind::File => {
                let (base, extension) = split_extension(name);
                // A hidden name without an extension goes through the core conversion whole
                if name.starts_with('.') && extension.is_empty() {
                    return self.kebab(name);
                }
                let mut result = self.kebab(base);
                result.push_str(&extension.to_lowercase());
                result
            }
            EntryKind::Directory => self.kebab(name),
        }
    }

    /// Returns the new basename for `path`, or `None` when nothing would change.
    pub fn rename_target(&self, path: &Path, kind: EntryKind) -> Option<String> {
        let name = path.file_name()?.to_str()?;
        let new_name = self.transform(name, kind);
        if new_name == name {
            None
        } else {
            debug!("{} rename: '{}' -> '{}'", kind.label(), name, new_name);
            Some(new_name)
        }
    }

    fn kebab(&self, name: &str) -> String {
        if name.is_empty() {
            return String::new();
        }

        let (hidden, working) = match name.strip_prefix('.') {
            Some(rest) => (true, rest),
            None => (false, name),
        };

        let without_apostrophes: String = working
            .chars()
            .filter(|c| !APOSTROPHES.contains(c))
            .collect();
        let separated = self
            .separator_pattern
            .replace_all(&without_apostrophes, "-")
            .to_lowercase();
        let collapsed = self.hyphen_pattern.replace_all(&separated, "-");
        let trimmed = collapsed.trim_matches('-');

        if trimmed.is_empty() {
            return name.to_string();
        }

        if hidden {
            format!(".{}", trimmed)
        } else {
            trimmed.to_string()
        }
    }
}

/// Splits `name` at its extension dot. Leading dots never start an extension,
/// so `.bashrc` and `..` have none while `.env.local` has `.local`.
fn split_extension(name: &str) -> (&str, &str) {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(index) => name.split_at(stem_start + index),
        None => (name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_kebab(name: &str, kind: EntryKind) -> String {
        let special_names = SpecialNames::default();
        let transformer = KebabTransformer::new(&special_names).unwrap();
        transformer.transform(name, kind)
    }

    #[test]
    fn test_directory_names() {
        assert_eq!(to_kebab("My Documents", EntryKind::Directory), "my-documents");
        assert_eq!(to_kebab("snake_case_dir", EntryKind::Directory), "snake-case-dir");
        assert_eq!(to_kebab("  Lots   of -- Space  ", EntryKind::Directory), "lots-of-space");
        assert_eq!(to_kebab("Photos (2023)", EntryKind::Directory), "photos-2023");
        assert_eq!(to_kebab("already-kebab", EntryKind::Directory), "already-kebab");
    }

    #[test]
    fn test_directory_dots_are_separators() {
        assert_eq!(to_kebab("v1.2 Release", EntryKind::Directory), "v1-2-release");
    }

    #[test]
    fn test_file_extension_preserved() {
        assert_eq!(to_kebab("My File.TXT", EntryKind::File), "my-file.txt");
        assert_eq!(to_kebab("Report_Final v2.pdf", EntryKind::File), "report-final-v2.pdf");
        assert_eq!(to_kebab("archive.tar.GZ", EntryKind::File), "archive-tar.gz");
        assert_eq!(to_kebab("README", EntryKind::File), "readme");
    }

    #[test]
    fn test_hidden_files() {
        assert_eq!(to_kebab(".bashrc", EntryKind::File), ".bashrc");
        assert_eq!(to_kebab(".My File.TXT", EntryKind::File), ".my-file.txt");
        assert_eq!(to_kebab(".Hidden Stuff!", EntryKind::File), ".hidden-stuff");
        assert_eq!(to_kebab(".env.Local", EntryKind::File), ".env.local");
    }

    #[test]
    fn test_hidden_directories() {
        assert_eq!(to_kebab(".Config Dir", EntryKind::Directory), ".config-dir");
        assert_eq!(to_kebab(".git", EntryKind::Directory), ".git");
    }

    #[test]
    fn test_apostrophes_removed() {
        assert_eq!(to_kebab("Don't Stop", EntryKind::Directory), "dont-stop");
        assert_eq!(to_kebab("Rock’n’Roll.mp3", EntryKind::File), "rocknroll.mp3");
    }

    #[test]
    fn test_special_names() {
        assert_eq!(to_kebab("C++", EntryKind::Directory), "cpp");
        assert_eq!(to_kebab("C#", EntryKind::Directory), "c-sharp");
        assert_eq!(to_kebab("C", EntryKind::Directory), "c");
        assert_eq!(to_kebab("C++", EntryKind::File), "cpp");
    }

    #[test]
    fn test_special_names_match_whole_name_only() {
        assert_eq!(to_kebab("Learning C++", EntryKind::Directory), "learning-c");
        assert_eq!(to_kebab("c#", EntryKind::Directory), "c");
    }

    #[test]
    fn test_custom_special_names() {
        let special_names = SpecialNames::new([("F#", "f-sharp")]);
        let transformer = KebabTransformer::new(&special_names).unwrap();
        assert_eq!(transformer.transform("F#", EntryKind::Directory), "f-sharp");
        assert_eq!(transformer.transform("C#", EntryKind::Directory), "c");
        assert_eq!(special_names.len(), 1);
    }

    #[test]
    fn test_traversal_sentinels_untouched() {
        assert_eq!(to_kebab(".", EntryKind::Directory), ".");
        assert_eq!(to_kebab("..", EntryKind::Directory), "..");
        assert_eq!(to_kebab("..", EntryKind::File), "..");
    }

    #[test]
    fn test_punctuation_only_falls_back_to_original() {
        assert_eq!(to_kebab("!!!", EntryKind::Directory), "!!!");
        assert_eq!(to_kebab("___", EntryKind::Directory), "___");
        assert_eq!(to_kebab("!!!.TXT", EntryKind::File), "!!!.txt");
        assert_eq!(to_kebab("", EntryKind::Directory), "");
    }

    #[test]
    fn test_unicode_case_folding() {
        assert_eq!(to_kebab("Ärger Über", EntryKind::Directory), "ärger-über");
        assert_eq!(to_kebab("ΣΟΦΙΑ", EntryKind::Directory), "σοφια");
    }

    #[test]
    fn test_idempotent() {
        let names = [
            "My File.TXT",
            ".My File.TXT",
            ".bashrc",
            "C++",
            "!!!",
            "Don't Stop",
            "a__b--c",
            "-.txt",
            "Photos (2023)",
        ];
        for name in names {
            for kind in [EntryKind::File, EntryKind::Directory] {
                let once = to_kebab(name, kind);
                assert_eq!(to_kebab(&once, kind), once, "not stable for {:?}", name);
            }
        }
    }

    #[test]
    fn test_output_shape() {
        let names = ["Hello World", "__init__", "A - B - C", "it's-ME", "x...y"];
        for name in names {
            let result = to_kebab(name, EntryKind::Directory);
            assert!(!result.chars().any(char::is_uppercase), "{}", result);
            assert!(!result.contains('\''), "{}", result);
            assert!(!result.contains("--"), "{}", result);
            assert!(!result.starts_with('-') && !result.ends_with('-'), "{}", result);
        }
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("file.txt"), ("file", ".txt"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension(".bashrc"), (".bashrc", ""));
        assert_eq!(split_extension("..hidden.md"), ("..hidden", ".md"));
        assert_eq!(split_extension("trailing."), ("trailing", "."));
        assert_eq!(split_extension("plain"), ("plain", ""));
    }

    #[test]
    fn test_rename_target() {
        let special_names = SpecialNames::default();
        let transformer = KebabTransformer::new(&special_names).unwrap();

        let result = transformer.rename_target(Path::new("/tmp/My Notes.MD"), EntryKind::File);
        assert_eq!(result, Some("my-notes.md".to_string()));

        let result = transformer.rename_target(Path::new("/tmp/my-notes.md"), EntryKind::File);
        assert!(result.is_none());

        let result = transformer.rename_target(Path::new("/"), EntryKind::Directory);
        assert!(result.is_none());
    }
}
