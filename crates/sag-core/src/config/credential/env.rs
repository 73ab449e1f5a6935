//! Environment variable lookup used by the resolver

use std::collections::HashMap;

/// Read-only view of environment variables
///
/// The resolver only ever reads through this trait, so tests can hand it a
/// `HashMap` instead of touching the process environment.
pub trait Environment {
    /// Value of `name`, or `None` when unset
    fn var(&self, name: &str) -> Option<String>;

    /// Value of `name`, treating an empty string as unset
    fn non_empty_var(&self, name: &str) -> Option<String> {
        self.var(name).filter(|value| !value.is_empty())
    }
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env() {
        let mut env = HashMap::new();
        env.insert("SAG_API_KEY".to_string(), "sag-key".to_string());
        env.insert("ELEVENLABS_API_KEY".to_string(), String::new());

        assert_eq!(env.var("SAG_API_KEY"), Some("sag-key".to_string()));
        assert_eq!(env.var("ELEVENLABS_API_KEY"), Some(String::new()));
        assert_eq!(env.non_empty_var("ELEVENLABS_API_KEY"), None);
        assert_eq!(env.var("SAG_API_KEY_FILE"), None);
    }

    #[test]
    fn test_process_env() {
        // Use unsafe block for Rust 2024
        unsafe {
            std::env::set_var("SAG_TEST_PROCESS_ENV_LOOKUP", "from-process");
        }

        let env = ProcessEnv;
        assert_eq!(
            env.non_empty_var("SAG_TEST_PROCESS_ENV_LOOKUP"),
            Some("from-process".to_string())
        );
        assert_eq!(env.var("SAG_TEST_PROCESS_ENV_NEVER_SET_XYZ"), None);

        // Clean up
        unsafe {
            std::env::remove_var("SAG_TEST_PROCESS_ENV_LOOKUP");
        }
    }
}
