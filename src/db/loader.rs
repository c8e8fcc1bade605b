use super::schema::RuleSetFile;
use super::store::{DataStore, InternalRuleSet};
use crate::model::types::Terminology;
use std::collections::HashSet;

pub fn load_all_rule_sets() -> DataStore {
    macro_rules! load_rule_set {
        ($path:literal, $terminology:expr) => {{
            let content = include_str!(concat!("../../rules/", $path));
            let schema: RuleSetFile = toml::from_str(content)
                .unwrap_or_else(|e| panic!("Failed to parse rule file '{}': {}", $path, e));

            if schema.info.terminology != $terminology {
                panic!(
                    "Rule file '{}' declares terminology {} but is loaded as {}",
                    $path, schema.info.terminology, $terminology
                );
            }

            let mut keys = HashSet::new();
            for rule in &schema.charge_states {
                if !keys.insert((rule.residue.clone(), rule.flag)) {
                    panic!(
                        "Duplicate charge-state rule {}{} in '{}'",
                        rule.residue, rule.flag, $path
                    );
                }
            }

            InternalRuleSet { schema }
        }};
    }

    DataStore {
        amber: load_rule_set!("amber.toml", Terminology::Amber),
        gamber: load_rule_set!("gamber.toml", Terminology::GromacsAmber),
    }
}
