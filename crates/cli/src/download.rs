/// Resolve an agent's `config_url` into a redirect target.
///
/// Absolute `http(s)` and `sandbox:` URLs pass through untouched, as do
/// paths already under `/configs/`. Anything else is treated as a bare file
/// name under `/configs/`.
pub fn resolve_download_url(config_url: &str) -> String {
    if config_url.starts_with("/configs/") {
        return config_url.to_string();
    }
    if config_url.starts_with("http") || config_url.starts_with("sandbox:") {
        return config_url.to_string();
    }
    format!("/configs/{config_url}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn configs_paths_pass_through() {
        assert_eq!(resolve_download_url("/configs/a1.json"), "/configs/a1.json");
    }

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            resolve_download_url("https://example.com/a1.json"),
            "https://example.com/a1.json"
        );
        assert_eq!(
            resolve_download_url("sandbox:/mnt/a1.json"),
            "sandbox:/mnt/a1.json"
        );
    }

    #[test]
    fn bare_names_land_under_configs() {
        assert_eq!(resolve_download_url("a1.json"), "/configs/a1.json");
    }
}
