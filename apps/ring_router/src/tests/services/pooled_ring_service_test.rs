#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hash_ring::{BuiltinHasher, KeyHasher, NodeId, RingConfig, RingError};

    use crate::{
        core::domain::{models::NodeEntry, services::ConsistentHasherService},
        infrastructure::adapters::services::PooledRingService,
    };

    fn service() -> PooledRingService {
        PooledRingService::new(RingConfig::new(32, BuiltinHasher::Xxh3))
    }

    #[test]
    fn pools_are_created_on_first_add() {
        let svc = service();
        assert!(svc.pools().is_empty());

        svc.add_node("sessions", "r1", 1).unwrap();
        svc.add_node("cache", "m1", 1).unwrap();
        svc.add_node("cache", "m2", 2).unwrap();

        assert_eq!(svc.pools(), vec!["cache".to_string(), "sessions".to_string()]);
        assert_eq!(
            svc.list_nodes("cache"),
            vec![NodeEntry::new("m1", 1), NodeEntry::new("m2", 2)]
        );
    }

    #[test]
    fn pools_are_independent() {
        let svc = service();
        svc.add_node("cache", "m1", 1).unwrap();
        svc.add_node("sessions", "r1", 1).unwrap();

        for i in 0..100 {
            let key = format!("key-{i}");
            assert_eq!(svc.get_node_id("cache", &key).unwrap(), "m1");
            assert_eq!(svc.get_node_id("sessions", &key).unwrap(), "r1");
        }

        // same node id may live in two pools
        svc.add_node("sessions", "m1", 1).unwrap();
        assert_eq!(svc.remove_node("cache", "m1"), Ok(()));
        assert_eq!(svc.list_nodes("sessions").len(), 2);
    }

    #[test]
    fn missing_pool_behaves_like_an_empty_ring() {
        let svc = service();

        assert_eq!(svc.get_node_id("nope", "k"), Err(RingError::EmptyRing));
        assert_eq!(svc.get_replica_ids("nope", "k", 2), Err(RingError::EmptyRing));
        assert_eq!(
            svc.remove_node("nope", "n1"),
            Err(RingError::NodeNotFound(NodeId::new("n1")))
        );
        assert_eq!(
            svc.reweight_node("nope", "n1", 2),
            Err(RingError::NodeNotFound(NodeId::new("n1")))
        );
        assert!(svc.list_nodes("nope").is_empty());

        // lookups must not create the pool
        assert!(svc.pools().is_empty());
    }

    #[test]
    fn failed_first_add_does_not_create_the_pool() {
        let svc = PooledRingService::new(RingConfig::new(160, BuiltinHasher::Xxh3));

        assert!(matches!(
            svc.add_node("ghost", "n", u32::MAX),
            Err(RingError::InvalidWeight { .. })
        ));
        assert!(matches!(
            svc.add_node("ghost", "n", 26_000_000),
            Err(RingError::InvalidWeight { .. })
        ));
        assert!(svc.pools().is_empty());
        assert_eq!(svc.get_node_id("ghost", "k"), Err(RingError::EmptyRing));

        svc.add_node("ghost", "n", 1).unwrap();
        assert_eq!(svc.pools(), vec!["ghost".to_string()]);
        assert_eq!(svc.list_nodes("ghost"), vec![NodeEntry::new("n", 1)]);
    }

    #[test]
    fn failed_add_to_existing_pool_keeps_its_members() {
        let svc = service();
        svc.add_node("cache", "a", 1).unwrap();

        assert!(svc.add_node("cache", "b", u32::MAX).is_err());
        assert_eq!(svc.pools(), vec!["cache".to_string()]);
        assert_eq!(svc.list_nodes("cache"), vec![NodeEntry::new("a", 1)]);
    }

    #[test]
    fn emptied_pool_stays_listed_and_reports_empty_ring() {
        let svc = service();
        svc.add_node("cache", "m1", 1).unwrap();
        svc.remove_node("cache", "m1").unwrap();

        assert_eq!(svc.pools(), vec!["cache".to_string()]);
        assert_eq!(svc.get_node_id("cache", "k"), Err(RingError::EmptyRing));
    }

    #[test]
    fn replica_ids_are_distinct_and_capped() {
        let svc = service();
        svc.add_node("cache", "a", 1).unwrap();
        svc.add_node("cache", "b", 1).unwrap();
        svc.add_node("cache", "c", 1).unwrap();

        let ids = svc.get_replica_ids("cache", "user:7", 10).unwrap();
        assert_eq!(ids.len(), 3);

        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 3);

        assert_eq!(ids[0], svc.get_node_id("cache", "user:7").unwrap());
    }

    #[test]
    fn reweight_changes_listed_weight() {
        let svc = service();
        svc.add_node("cache", "a", 1).unwrap();

        svc.reweight_node("cache", "a", 4).unwrap();
        assert_eq!(svc.list_nodes("cache"), vec![NodeEntry::new("a", 4)]);

        assert!(matches!(
            svc.reweight_node("cache", "a", 0),
            Err(RingError::InvalidWeight { weight: 0, .. })
        ));
        assert_eq!(svc.list_nodes("cache"), vec![NodeEntry::new("a", 4)]);
    }

    #[test]
    fn duplicate_add_is_rejected() {
        let svc = service();
        svc.add_node("cache", "a", 1).unwrap();

        assert_eq!(
            svc.add_node("cache", "a", 2),
            Err(RingError::NodeAlreadyExists(NodeId::new("a")))
        );
        assert_eq!(svc.list_nodes("cache"), vec![NodeEntry::new("a", 1)]);
    }

    #[test]
    fn create_hash_is_padded_hex_of_configured_hasher() {
        let svc = PooledRingService::new(RingConfig::new(8, BuiltinHasher::Fnv1a));

        assert_eq!(svc.create_hash(""), "cbf29ce484222325");
        assert_eq!(
            svc.create_hash("user:1"),
            format!("{:016x}", BuiltinHasher::Fnv1a.hash(b"user:1"))
        );
        assert_eq!(svc.create_hash("user:1").len(), 16);
    }

    #[test]
    fn concurrent_adds_to_one_pool_all_land() {
        let svc = Arc::new(service());

        std::thread::scope(|s| {
            for t in 0..4 {
                let svc = svc.clone();
                s.spawn(move || {
                    for i in 0..10 {
                        svc.add_node("cache", &format!("n{t}-{i}"), 1).unwrap();
                    }
                });
            }
        });

        assert_eq!(svc.pools(), vec!["cache".to_string()]);
        assert_eq!(svc.list_nodes("cache").len(), 40);
    }
}
