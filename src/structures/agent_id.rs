/*!
The identity of an agent.

Modal operators are indexed by agent identities, rather than [agents](crate::agent::Agent), as a formula only needs to know *whose* relation to follow.
*/

/// An agent identity, by name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgentId {
    name: String,
}

impl AgentId {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for AgentId {
    fn from(name: &str) -> Self {
        AgentId {
            name: name.to_owned(),
        }
    }
}

impl From<String> for AgentId {
    fn from(name: String) -> Self {
        AgentId { name }
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
