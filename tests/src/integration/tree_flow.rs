//! # Tree Flow
//!
//! A tree travels through the codec, gets addressed by paths, and
//! announces its mutations on the event bus.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;

    use groundwork_bus::{EventBus, EventPublisher, TopicFilter};
    use groundwork_codec::{Envelope, TreeDto};
    use groundwork_convert::{ConversionError, ConverterRegistry};
    use groundwork_trees::ListPath;

    use crate::fixtures::{config_tree, string_path, TreeEvent, TreeTopic};

    #[test]
    fn test_tree_through_envelope_and_back() {
        let (tree, _) = config_tree();

        // Flatten, seal, ship as JSON, open, rebuild.
        let dto = TreeDto::from_tree(&tree).expect("tree handles are live");
        let wire = serde_json::to_string(&Envelope::seal(dto.clone())).expect("serializable");

        let envelope: Envelope<TreeDto<String, String>> =
            serde_json::from_str(&wire).expect("deserializable");
        let rebuilt = envelope.open().expect("version matches").into_tree().expect("rows connect");

        let port = rebuilt
            .get(&string_path(&["config", "network", "port"]))
            .expect("path resolves");
        assert_eq!(rebuilt.value(port).unwrap(), "8080");
        assert_eq!(rebuilt.len(), tree.len());
    }

    #[tokio::test]
    async fn test_mutations_are_announced_on_the_bus() {
        let (mut tree, root) = config_tree();
        let bus: EventBus<TreeEvent> = EventBus::new();

        let mut structure = bus.subscribe(TopicFilter::topics(vec![TreeTopic::Structure]));
        let mut all = bus.subscribe(TopicFilter::all());

        // Add a node, announce it.
        let metrics = tree
            .add_child(root, "metrics".to_string(), "on".to_string())
            .expect("root is alive");
        let added_path = tree.path_of(metrics).expect("node is alive").to_string();
        bus.publish(TreeEvent::NodeAdded { path: added_path }).await;

        // Change a value, announce it. The structure subscriber must not
        // see this one.
        let port = tree
            .get(&crate::fixtures::string_path(&["config", "network", "port"]))
            .expect("path resolves");
        tree.set_value(port, "9090".to_string()).expect("node is alive");
        bus.publish(TreeEvent::ValueChanged {
            path: "config/network/port".to_string(),
        })
        .await;

        let first = timeout(Duration::from_millis(100), structure.recv())
            .await
            .expect("timeout")
            .expect("event");
        assert_eq!(
            first,
            TreeEvent::NodeAdded {
                path: "config/metrics".to_string()
            }
        );
        assert!(matches!(structure.try_recv(), Ok(None)));

        // The unfiltered subscriber sees both.
        assert!(all.recv().await.is_some());
        assert!(matches!(all.recv().await, Some(TreeEvent::ValueChanged { .. })));
    }

    #[test]
    fn test_registry_converts_paths_for_display() {
        let registry = ConverterRegistry::new();
        registry.register(0, |path: &ListPath<String>| Ok(path.to_string()));
        registry.register(0, |text: &String| {
            if text.is_empty() {
                return Err(ConversionError::failed::<String, ListPath<String>>(
                    "empty path text",
                ));
            }
            Ok(text.split('/').map(str::to_string).collect::<ListPath<String>>())
        });

        let path = string_path(&["config", "network"]);
        let text: String = registry.convert(&path).expect("converter registered");
        assert_eq!(text, "config/network");

        let back: ListPath<String> = registry.convert(&text).expect("converter registered");
        assert_eq!(back, path);

        let round: Result<ListPath<String>, _> = registry.convert(&String::new());
        assert!(round.is_err());
    }
}
