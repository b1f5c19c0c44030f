use app_core::utils::split_message;

use crate::core::domain::models::Command;

const ADD_USAGE: &str = "usage: ADD <pool> <node> [weight]";
const REMOVE_USAGE: &str = "usage: REMOVE <pool> <node>";
const REWEIGHT_USAGE: &str = "usage: REWEIGHT <pool> <node> <weight>";
const LOOKUP_USAGE: &str = "usage: LOOKUP <pool> <key>";
const REPLICAS_USAGE: &str = "usage: REPLICAS <pool> <key> <count>";
const NODES_USAGE: &str = "usage: NODES <pool>";
const HASH_USAGE: &str = "usage: HASH <key>";

pub struct CommandParserService;

impl CommandParserService {
    pub fn parse(line: &str) -> Command {
        let tokens = split_message(line);
        let Some((action, args)) = tokens.split_first() else {
            return Command::Unknown(String::new());
        };

        match (action.to_ascii_uppercase().as_str(), args) {
            ("ADD", [pool, node_id]) => Command::Add {
                pool: pool.clone(),
                node_id: node_id.clone(),
                weight: 1,
            },
            ("ADD", [pool, node_id, weight]) => match parse_positive(weight) {
                Some(weight) => Command::Add {
                    pool: pool.clone(),
                    node_id: node_id.clone(),
                    weight,
                },
                None => Command::Invalid(ADD_USAGE.to_string()),
            },
            ("ADD", _) => Command::Invalid(ADD_USAGE.to_string()),

            ("REMOVE", [pool, node_id]) => Command::Remove {
                pool: pool.clone(),
                node_id: node_id.clone(),
            },
            ("REMOVE", _) => Command::Invalid(REMOVE_USAGE.to_string()),

            ("REWEIGHT", [pool, node_id, weight]) => match parse_positive(weight) {
                Some(weight) => Command::Reweight {
                    pool: pool.clone(),
                    node_id: node_id.clone(),
                    weight,
                },
                None => Command::Invalid(REWEIGHT_USAGE.to_string()),
            },
            ("REWEIGHT", _) => Command::Invalid(REWEIGHT_USAGE.to_string()),

            ("LOOKUP", [pool, key]) => Command::Lookup {
                pool: pool.clone(),
                key: key.clone(),
            },
            ("LOOKUP", _) => Command::Invalid(LOOKUP_USAGE.to_string()),

            ("REPLICAS", [pool, key, count]) => match parse_positive::<usize>(count) {
                Some(count) => Command::Replicas {
                    pool: pool.clone(),
                    key: key.clone(),
                    count,
                },
                None => Command::Invalid(REPLICAS_USAGE.to_string()),
            },
            ("REPLICAS", _) => Command::Invalid(REPLICAS_USAGE.to_string()),

            ("NODES", [pool]) => Command::Nodes { pool: pool.clone() },
            ("NODES", _) => Command::Invalid(NODES_USAGE.to_string()),

            ("POOLS", []) => Command::Pools,

            ("HASH", [key]) => Command::Hash { key: key.clone() },
            ("HASH", _) => Command::Invalid(HASH_USAGE.to_string()),

            ("QUIT" | "EXIT", []) => Command::Quit,

            _ => Command::Unknown(action.clone()),
        }
    }
}

fn parse_positive<T>(raw: &str) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    raw.parse::<T>().ok().filter(|v| *v > T::default())
}
