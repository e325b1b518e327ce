// src/core/map_composer.rs
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Compose NavigationName -> ComponentName with ComponentName -> FilePath
/// into NavigationName -> FilePath.
///
/// An entry survives only when both links exist; navigation names whose
/// component was never located are dropped silently. This is the expected
/// shape for screens implemented by external libraries.
pub fn compose(
    nav_to_component: &BTreeMap<String, String>,
    component_to_file: &BTreeMap<String, PathBuf>,
) -> BTreeMap<String, PathBuf> {
    nav_to_component
        .iter()
        .filter_map(|(nav_name, component)| {
            component_to_file
                .get(component)
                .map(|file| (nav_name.clone(), file.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn file_map(pairs: &[(&str, &str)]) -> BTreeMap<String, PathBuf> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), PathBuf::from(v)))
            .collect()
    }

    #[test]
    fn full_chain_preserves_size() {
        let nav = nav_map(&[("Login", "LoginScreen"), ("Home", "HomeScreen")]);
        let files = file_map(&[("LoginScreen", "Login.tsx"), ("HomeScreen", "Home.tsx")]);

        let composed = compose(&nav, &files);
        assert_eq!(composed.len(), nav.len());
        assert_eq!(composed["Login"], PathBuf::from("Login.tsx"));
        assert_eq!(composed["Home"], PathBuf::from("Home.tsx"));
    }

    #[test]
    fn broken_chain_shrinks_result() {
        let nav = nav_map(&[("Login", "LoginScreen"), ("Help", "ExternalHelp")]);
        let files = file_map(&[("LoginScreen", "Login.tsx")]);

        let composed = compose(&nav, &files);
        assert_eq!(composed.len(), 1);
        assert!(!composed.contains_key("Help"));
    }

    #[test]
    fn empty_inputs_compose_to_empty() {
        let composed = compose(&BTreeMap::new(), &BTreeMap::new());
        assert!(composed.is_empty());
    }
}
