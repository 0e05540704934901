//! # Lifecycle Flow
//!
//! Components owning shared infrastructure (a bus, a cache) are started
//! in dependency order, used, and shut down cleanly.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use groundwork_bus::{EventBus, EventPublisher, TopicFilter};
    use groundwork_cache::{Cache, TtlCache};
    use groundwork_runtime::{Component, ComponentError, ComponentRegistry, ComponentStatus};

    use crate::fixtures::{TreeEvent, TreeTopic};

    /// Owns the event bus other components publish on.
    struct BusComponent {
        bus: Arc<EventBus<TreeEvent>>,
    }

    #[async_trait]
    impl Component for BusComponent {
        fn name(&self) -> &'static str {
            "bus"
        }

        async fn start(&self) -> Result<(), ComponentError> {
            Ok(())
        }

        async fn stop(&self) -> Result<(), ComponentError> {
            Ok(())
        }
    }

    /// Caches path lookups and announces activity on the bus.
    struct CacheComponent {
        bus: Arc<EventBus<TreeEvent>>,
        cache: Arc<Mutex<TtlCache<String, String>>>,
    }

    #[async_trait]
    impl Component for CacheComponent {
        fn name(&self) -> &'static str {
            "path-cache"
        }

        fn dependencies(&self) -> Vec<&'static str> {
            vec!["bus"]
        }

        async fn start(&self) -> Result<(), ComponentError> {
            self.cache
                .lock()
                .put("config/network/port".to_string(), "8080".to_string());
            self.bus
                .publish(TreeEvent::NodeAdded {
                    path: "config/network/port".to_string(),
                })
                .await;
            Ok(())
        }

        async fn stop(&self) -> Result<(), ComponentError> {
            self.cache.lock().clear();
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_components_share_bus_and_cache() {
        let bus = Arc::new(EventBus::new());
        let cache = Arc::new(Mutex::new(TtlCache::new(Duration::from_secs(60))));

        let mut subscriber = bus.subscribe(TopicFilter::topics(vec![TreeTopic::Structure]));

        let mut registry = ComponentRegistry::new();
        registry.register(Box::new(CacheComponent {
            bus: Arc::clone(&bus),
            cache: Arc::clone(&cache),
        }));
        registry.register(Box::new(BusComponent {
            bus: Arc::clone(&bus),
        }));

        registry.start_all().await.expect("all components start");

        // The cache component ran after its bus dependency and primed
        // the cache.
        assert_eq!(
            cache.lock().get(&"config/network/port".to_string()),
            Some(&"8080".to_string())
        );
        let announced = subscriber.recv().await.expect("event was published");
        assert!(matches!(announced, TreeEvent::NodeAdded { .. }));

        let health = registry.health_all().await;
        assert_eq!(health.get("bus"), Some(&ComponentStatus::Healthy));
        assert_eq!(health.get("path-cache"), Some(&ComponentStatus::Healthy));

        registry.stop_all().await;
        assert!(cache.lock().is_empty());
        assert_eq!(registry.status("path-cache"), Some(ComponentStatus::Stopped));
    }
}
