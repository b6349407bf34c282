use wasm_bindgen::prelude::*;

/// Version information for the frontend bundle
pub struct Version;

impl Version {
    /// Returns the current version of the application
    pub fn current() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Returns the application name
    pub fn name() -> &'static str {
        env!("CARGO_PKG_NAME")
    }

    /// Returns the full version string with name
    pub fn full() -> String {
        format!("{} v{}", Self::name(), Self::current())
    }

    pub fn build_date() -> &'static str {
        option_env!("BUILD_DATE").unwrap_or("unknown")
    }

    pub fn git_commit() -> &'static str {
        option_env!("GIT_COMMIT").unwrap_or("unknown")
    }

    /// Returns build information
    pub fn build_info() -> String {
        format!(
            "{} v{} (build: {}, commit: {})",
            Self::name(),
            Self::current(),
            Self::build_date(),
            Self::git_commit()
        )
    }

    pub fn build_metadata() -> serde_json::Value {
        serde_json::json!({
            "name": Self::name(),
            "version": Self::current(),
            "build_date": Self::build_date(),
            "git_commit": Self::git_commit(),
        })
    }
}

#[wasm_bindgen]
pub fn get_version() -> String {
    Version::current().to_string()
}

#[wasm_bindgen]
pub fn get_build_info() -> String {
    Version::build_info()
}

/// Returns build metadata as a JSON string
#[wasm_bindgen]
pub fn get_build_metadata() -> String {
    Version::build_metadata().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_current() {
        let version = Version::current();
        assert!(!version.is_empty());
        assert!(version.contains('.'));
    }

    #[test]
    fn test_version_full() {
        let full = Version::full();
        assert!(full.starts_with("frontend v"));
    }

    #[test]
    fn test_build_metadata() {
        let metadata = Version::build_metadata();
        assert_eq!(metadata["name"], "frontend");
        assert_eq!(metadata["version"], Version::current());
        assert!(get_build_info().contains(Version::git_commit()));
    }
}
