//! Agents.

pub mod model;

use crate::store::Record;
use model::Agent;

impl Record for Agent {
    const KIND: &'static str = "agent";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::model::Agent;

    #[test]
    fn test_debug_hides_password() {
        let agent = Agent {
            id: "a1".to_string(),
            name: "Door Staff".to_string(),
            agent_id: "AG-01".to_string(),
            password: "hunter2".to_string(),
            avatar: None,
        };
        let out = format!("{:?}", agent);
        assert!(out.contains("AG-01"));
        assert!(!out.contains("hunter2"));
    }
}
