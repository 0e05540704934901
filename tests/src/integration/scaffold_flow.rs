//! # Scaffold Flow
//!
//! A generated workspace skeleton has the promised shape, inspected with
//! the collection algorithms.

#[cfg(test)]
mod tests {
    use groundwork_collections::algorithms;
    use groundwork_quickstart::{ProjectSpec, Scaffolder};

    #[test]
    fn test_generated_skeleton_shape() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("demo");

        let spec = ProjectSpec::new("demo", ["demo-core", "demo-codec"])
            .expect("valid spec")
            .with_bin();
        let created = Scaffolder::new().generate(&spec, &target).expect("clean target");

        let names: Vec<String> = algorithms::transform(created, |p: std::path::PathBuf| {
            p.strip_prefix(&target)
                .expect("created under target")
                .display()
                .to_string()
        });

        // Two files per member, two per binary member, plus root
        // manifest and README.
        let manifests = algorithms::count_matching(names.clone(), |n: &String| {
            n.ends_with("Cargo.toml")
        });
        assert_eq!(manifests, 4);
        assert_eq!(names.len(), 8);

        let (sources, other) =
            algorithms::partition(names, |n: &String| n.ends_with(".rs"));
        assert_eq!(sources.len(), 3); // two lib.rs and one main.rs
        assert!(other.contains(&"README.md".to_string()));

        let main = algorithms::find_first(sources, |n: &String| n.ends_with("main.rs"));
        assert_eq!(main.as_deref(), Some("crates/demo-cli/src/main.rs"));
    }

    #[test]
    fn test_generation_into_occupied_dir_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("keep.me"), "occupied").expect("writable");

        let spec = ProjectSpec::new("demo", ["demo-core"]).expect("valid spec");
        assert!(Scaffolder::new().generate(&spec, dir.path()).is_err());
    }
}
