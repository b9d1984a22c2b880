use crate::error::{CatalogError, Result};
use agent_protocol::Agent;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Loader for the partitioned catalog.
///
/// The catalog ships as `part*.json` files, each holding an array of agent
/// records. Unreadable or malformed parts are skipped with a warning; the
/// loader only fails when the directory itself is unusable.
pub struct CatalogLoader {
    dir: PathBuf,
}

impl CatalogLoader {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Load all parts, flatten, and de-duplicate by id.
    ///
    /// Later occurrences win, so later part files can override records from
    /// earlier ones.
    pub fn load(&self) -> Result<Vec<Agent>> {
        if !self.dir.is_dir() {
            return Err(CatalogError::InvalidDir(self.dir.display().to_string()));
        }

        let mut part_files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with("part") && name.ends_with(".json") {
                part_files.push(path);
            }
        }
        part_files.sort();

        let mut by_id: HashMap<String, usize> = HashMap::new();
        let mut agents: Vec<Agent> = Vec::new();
        for path in &part_files {
            for agent in load_part(path) {
                match by_id.get(&agent.id) {
                    Some(&idx) => agents[idx] = agent,
                    None => {
                        by_id.insert(agent.id.clone(), agents.len());
                        agents.push(agent);
                    }
                }
            }
        }

        log::info!(
            "Loaded {} agents from {} catalog parts",
            agents.len(),
            part_files.len()
        );
        Ok(agents)
    }
}

fn load_part(path: &Path) -> Vec<Agent> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("Failed to read catalog part {}: {e}", path.display());
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Agent>>(&raw) {
        Ok(agents) => agents,
        Err(e) => {
            log::warn!("Skipping malformed catalog part {}: {e}", path.display());
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_part(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn loads_and_flattens_parts_in_order() {
        let temp = TempDir::new().unwrap();
        write_part(
            temp.path(),
            "part1.json",
            r#"[{"id":"a1","name":"First"},{"id":"a2","name":"Second"}]"#,
        );
        write_part(temp.path(), "part2.json", r#"[{"id":"a3","name":"Third"}]"#);

        let agents = CatalogLoader::new(temp.path()).load().unwrap();

        assert_eq!(agents.len(), 3);
        assert_eq!(agents[0].id, "a1");
        assert_eq!(agents[2].id, "a3");
    }

    #[test]
    fn later_parts_override_duplicate_ids() {
        let temp = TempDir::new().unwrap();
        write_part(temp.path(), "part1.json", r#"[{"id":"a1","name":"Old"}]"#);
        write_part(temp.path(), "part2.json", r#"[{"id":"a1","name":"New"}]"#);

        let agents = CatalogLoader::new(temp.path()).load().unwrap();

        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].name, "New");
    }

    #[test]
    fn malformed_part_is_skipped_not_fatal() {
        let temp = TempDir::new().unwrap();
        write_part(temp.path(), "part1.json", r#"[{"id":"a1","name":"Kept"}]"#);
        write_part(temp.path(), "part2.json", "{ not json ]");

        let agents = CatalogLoader::new(temp.path()).load().unwrap();

        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].id, "a1");
    }

    #[test]
    fn non_part_files_are_ignored() {
        let temp = TempDir::new().unwrap();
        write_part(temp.path(), "part1.json", r#"[{"id":"a1","name":"Kept"}]"#);
        write_part(temp.path(), "readme.json", r#"[{"id":"zz","name":"Nope"}]"#);

        let agents = CatalogLoader::new(temp.path()).load().unwrap();

        assert_eq!(agents.len(), 1);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let result = CatalogLoader::new("/definitely/not/here").load();
        assert!(matches!(result, Err(CatalogError::InvalidDir(_))));
    }
}
