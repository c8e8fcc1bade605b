use super::loader;
use super::schema::RuleSetFile;
use crate::model::types::Terminology;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct InternalRuleSet {
    pub schema: RuleSetFile,
}

pub struct DataStore {
    pub amber: InternalRuleSet,
    pub gamber: InternalRuleSet,
}

impl DataStore {
    pub fn rule_set(&self, terminology: Terminology) -> &InternalRuleSet {
        match terminology {
            Terminology::Amber => &self.amber,
            Terminology::GromacsAmber => &self.gamber,
        }
    }
}

static STORE: OnceLock<DataStore> = OnceLock::new();

pub fn get_store() -> &'static DataStore {
    STORE.get_or_init(loader::load_all_rule_sets)
}
