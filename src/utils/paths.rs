use crate::error::{AnalyzerError, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// One discovered session file
#[derive(Debug, Clone)]
pub struct SessionFile {
    pub id: String,
    pub path: PathBuf,
    pub project: String,
    pub modified: DateTime<Local>,
}

/// Where Claude Code keeps per-project session transcripts
pub fn claude_projects_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|h| h.join(".claude").join("projects"))
        .ok_or(AnalyzerError::ClaudePathNotFound)
}

/// Claude's directory naming convention for a project path
fn project_dir_name(project_path: &str) -> String {
    project_path.replace('/', "-")
}

fn project_dirs(projects_dir: &Path, project: Option<&str>) -> Result<Vec<PathBuf>> {
    if let Some(project) = project {
        let dir = projects_dir.join(project_dir_name(project));
        return if dir.is_dir() { Ok(vec![dir]) } else { Ok(Vec::new()) };
    }

    let entries = fs::read_dir(projects_dir).map_err(|source| AnalyzerError::DirectoryAccess {
        path: projects_dir.to_path_buf(),
        source,
    })?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| AnalyzerError::DirectoryAccess {
            path: projects_dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Resolve a session identifier to a file: direct path first, then
/// `<projects>/<project>/<id>.jsonl`, then every project directory.
pub fn find_session_file(identifier: &str, project: Option<&str>) -> Result<PathBuf> {
    let direct = Path::new(identifier);
    if direct.exists() {
        return Ok(direct.to_path_buf());
    }

    let projects_dir = claude_projects_dir()?;
    if projects_dir.is_dir() {
        for dir in project_dirs(&projects_dir, project)? {
            let candidate = dir.join(format!("{identifier}.jsonl"));
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    Err(AnalyzerError::SessionNotFound {
        identifier: identifier.to_string(),
    })
}

/// The most recently modified session file, optionally scoped to a project
pub fn find_latest_session(project: Option<&str>) -> Result<PathBuf> {
    list_session_files(project)?
        .into_iter()
        .next()
        .map(|s| s.path)
        .ok_or(AnalyzerError::NoSessions)
}

/// All session files, newest first
pub fn list_session_files(project: Option<&str>) -> Result<Vec<SessionFile>> {
    let projects_dir = claude_projects_dir()?;
    if !projects_dir.is_dir() {
        return Err(AnalyzerError::ClaudePathNotFound);
    }

    let mut sessions = Vec::new();
    for dir in project_dirs(&projects_dir, project)? {
        let project_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let entries = fs::read_dir(&dir).map_err(|source| AnalyzerError::DirectoryAccess {
            path: dir.clone(),
            source,
        })?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_none_or(|e| e != "jsonl") {
                continue;
            }
            let modified = entry
                .metadata()
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);

            sessions.push(SessionFile {
                id: path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                path,
                project: project_name.clone(),
                modified: DateTime::<Local>::from(modified),
            });
        }
    }

    sessions.sort_by(|a, b| b.modified.cmp(&a.modified));
    Ok(sessions)
}
