//! Resume file intake.
//!
//! Files are read as raw bytes. No PDF or DOCX structure is parsed; the
//! extractor decodes whatever bytes it gets as best-effort text.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File extensions accepted as resumes.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "txt"];

/// An uploaded resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }
}

/// Whether `path` has an accepted resume extension.
pub fn is_accepted(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}

/// Read a single resume file.
pub fn read_resume(path: &Path) -> Result<ResumeFile> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read resume: {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(ResumeFile { filename, bytes })
}

/// Read resumes from a list of files and directories, in the order given.
///
/// Directories contribute their accepted files sorted by name; hidden
/// entries are skipped. Explicitly named files with other extensions are
/// skipped with a warning.
pub fn collect_resumes(paths: &[PathBuf]) -> Result<Vec<ResumeFile>> {
    let mut resumes = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?
                .map(|entry| entry.map(|e| e.path()))
                .collect::<std::io::Result<_>>()?;
            entries.sort();

            for entry in entries {
                let hidden = entry
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with('.'));
                if hidden || !entry.is_file() {
                    continue;
                }
                if is_accepted(&entry) {
                    resumes.push(read_resume(&entry)?);
                } else {
                    tracing::debug!("ignoring {}: not a resume file", entry.display());
                }
            }
        } else if is_accepted(path) {
            resumes.push(read_resume(path)?);
        } else {
            tracing::warn!(
                "skipping {}: accepted formats are {}",
                path.display(),
                ACCEPTED_EXTENSIONS.join(", ")
            );
        }
    }

    Ok(resumes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_extensions_are_case_insensitive() {
        assert!(is_accepted(Path::new("cv.PDF")));
        assert!(is_accepted(Path::new("cv.docx")));
        assert!(is_accepted(Path::new("notes/cv.txt")));
        assert!(!is_accepted(Path::new("cv.png")));
        assert!(!is_accepted(Path::new("README")));
    }

    #[test]
    fn collect_reads_directory_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "SQL").unwrap();
        std::fs::write(dir.path().join("a.pdf"), "Python").unwrap();
        std::fs::write(dir.path().join("photo.png"), [0u8, 1, 2]).unwrap();
        std::fs::write(dir.path().join(".hidden.txt"), "Docker").unwrap();

        let resumes = collect_resumes(&[dir.path().to_path_buf()]).unwrap();
        let names: Vec<&str> = resumes.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.txt"]);
        assert_eq!(resumes[0].bytes, b"Python");
    }

    #[test]
    fn collect_keeps_argument_order_and_skips_unaccepted() {
        let dir = tempfile::tempdir().unwrap();
        let second = dir.path().join("z.txt");
        let first = dir.path().join("y.docx");
        let other = dir.path().join("x.csv");
        std::fs::write(&second, "two").unwrap();
        std::fs::write(&first, "one").unwrap();
        std::fs::write(&other, "three").unwrap();

        let resumes = collect_resumes(&[second, other, first]).unwrap();
        let names: Vec<&str> = resumes.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["z.txt", "y.docx"]);
    }

    #[test]
    fn read_missing_resume_fails() {
        assert!(read_resume(Path::new("/definitely/not/here.pdf")).is_err());
    }
}
