#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hash_ring::{BuiltinHasher, RingConfig};

    use crate::{
        core::services::{CommandParserService, RequestControllerService},
        infrastructure::adapters::services::PooledRingService,
        tests::test_mocks::MockHasher,
    };

    fn controller() -> RequestControllerService {
        RequestControllerService::new(PooledRingService::new_shared(RingConfig::new(
            32,
            BuiltinHasher::Xxh3,
        )))
    }

    async fn send(controller: &RequestControllerService, line: &str) -> String {
        controller
            .handle(CommandParserService::parse(line))
            .await
            .to_wire()
    }

    #[tokio::test]
    async fn membership_round_trip() {
        let c = controller();

        assert_eq!(send(&c, "ADD cache a").await, "OK");
        assert_eq!(send(&c, "ADD cache b 2").await, "OK");
        assert_eq!(send(&c, "NODES cache").await, "MEMBERS a:1 b:2");

        assert_eq!(send(&c, "REWEIGHT cache b 3").await, "OK");
        assert_eq!(send(&c, "NODES cache").await, "MEMBERS a:1 b:3");

        assert_eq!(send(&c, "REMOVE cache a").await, "OK");
        assert_eq!(send(&c, "NODES cache").await, "MEMBERS b:3");
        assert_eq!(send(&c, "LOOKUP cache anything").await, "NODE b");
        assert_eq!(send(&c, "POOLS").await, "POOLS cache");
    }

    #[tokio::test]
    async fn replicas_lists_distinct_owners_primary_first() {
        let c = controller();
        send(&c, "ADD cache a").await;
        send(&c, "ADD cache b").await;

        let primary = send(&c, "LOOKUP cache user:9").await;
        let replicas = send(&c, "REPLICAS cache user:9 5").await;

        let owners: Vec<&str> = replicas.split(' ').skip(1).collect();
        assert_eq!(owners.len(), 2);
        assert_ne!(owners[0], owners[1]);
        assert_eq!(primary, format!("NODE {}", owners[0]));
    }

    #[tokio::test]
    async fn ring_errors_become_error_lines() {
        let c = controller();

        assert_eq!(send(&c, "LOOKUP cache k").await, "ERROR: ring has no nodes");
        assert_eq!(send(&c, "REMOVE cache a").await, "ERROR: node a not found");

        send(&c, "ADD cache a").await;
        assert_eq!(send(&c, "ADD cache a").await, "ERROR: node a already exists");
        assert_eq!(send(&c, "NODES nope").await, "MEMBERS");
    }

    #[tokio::test]
    async fn bad_requests_become_error_lines() {
        let c = controller();

        assert_eq!(
            send(&c, "ADD cache a 0").await,
            "ERROR: Bad request: usage: ADD <pool> <node> [weight]"
        );
        assert_eq!(
            send(&c, "FROB").await,
            "ERROR: Bad request: unknown command FROB"
        );
        assert_eq!(
            send(&c, r#"LOOKUP cache """#).await,
            "ERROR: Bad request: Key is empty"
        );
    }

    #[tokio::test]
    async fn quoted_node_ids_come_back_quoted() {
        let c = controller();

        assert_eq!(send(&c, r#"ADD cache "node one" 2"#).await, "OK");
        assert_eq!(send(&c, "LOOKUP cache k").await, r#"NODE "node one""#);
        assert_eq!(send(&c, "NODES cache").await, r#"MEMBERS "node one":2"#);
        assert_eq!(send(&c, r#"REMOVE cache "node one""#).await, "OK");
    }

    #[tokio::test]
    async fn oversized_weight_is_rejected_without_creating_the_pool() {
        let c = controller();

        let answer = send(&c, "ADD cache n 26000000").await;
        assert!(answer.starts_with("ERROR: invalid weight 26000000 for node n"), "{answer}");
        assert_eq!(send(&c, "POOLS").await, "POOLS");
    }

    #[tokio::test]
    async fn hash_and_quit() {
        let c = RequestControllerService::new(Arc::new(MockHasher::new()));

        assert_eq!(send(&c, "HASH k").await, "hash");
        assert_eq!(send(&c, "POOLS").await, "POOLS cache");
        assert_eq!(send(&c, "QUIT").await, "BYE");
    }
}
