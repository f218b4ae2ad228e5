use std::fs;
use std::path::Path;

use client_logging::{client_error, client_info, client_warn};
use jobscope_core::SortBy;
use serde::{Deserialize, Serialize};

const SESSION_FILENAME: &str = ".jobscope_session.ron";

/// Last confirmed search, stored as its shareable query string so the
/// session file and the location bar agree on one representation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedSession {
    query: String,
    sort_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SessionSnapshot {
    pub query: String,
    pub sort_by: Option<SortBy>,
}

pub(crate) fn load_session(dir: &Path) -> Option<SessionSnapshot> {
    let path = dir.join(SESSION_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return None;
        }
        Err(err) => {
            client_warn!("Failed to read session file {:?}: {}", path, err);
            return None;
        }
    };

    let session: PersistedSession = match ron::from_str(&content) {
        Ok(session) => session,
        Err(err) => {
            client_warn!("Failed to parse session file {:?}: {}", path, err);
            return None;
        }
    };

    client_info!("Restored previous session from {:?}", path);
    Some(SessionSnapshot {
        query: session.query,
        sort_by: SortBy::parse(&session.sort_by),
    })
}

pub(crate) fn save_session(dir: &Path, query: &str, sort_by: SortBy) {
    let session = PersistedSession {
        query: query.to_string(),
        sort_by: sort_by.as_str().to_string(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&session, pretty) {
        Ok(text) => text,
        Err(err) => {
            client_error!("Failed to serialize session: {}", err);
            return;
        }
    };

    // Write-then-rename so a crash never leaves a torn session file.
    let path = dir.join(SESSION_FILENAME);
    let tmp_path = dir.join(format!("{SESSION_FILENAME}.tmp"));
    let result = fs::write(&tmp_path, content).and_then(|()| fs::rename(&tmp_path, &path));
    if let Err(err) = result {
        client_error!("Failed to write session file {:?}: {}", path, err);
    }
}
