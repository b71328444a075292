//! The fixed variable set a search runs over.

use serde::{Deserialize, Serialize};

/// Dense index of a variable in the [`VariableSet`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct VarId(pub u32);

impl VarId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for VarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A variable: an opaque identity with a stable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub id: VarId,
    pub name: String,
}

/// The immutable variable registry, fixed for the whole run and shared
/// read-only by every component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableSet {
    vars: Vec<Variable>,
}

impl VariableSet {
    /// Build a registry from names; ids are assigned in iteration order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let vars = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Variable {
                id: VarId(i as u32),
                name: name.into(),
            })
            .collect();
        Self { vars }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn contains(&self, id: VarId) -> bool {
        id.index() < self.vars.len()
    }

    pub fn get(&self, id: VarId) -> Option<&Variable> {
        self.vars.get(id.index())
    }

    /// The variable's stable name, or a placeholder for an unknown id.
    pub fn name(&self, id: VarId) -> &str {
        self.get(id).map_or("?", |v| v.name.as_str())
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = VarId> + '_ {
        (0..self.vars.len() as u32).map(VarId)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.vars.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_and_ordered() {
        let vars = VariableSet::new(["W", "X", "Y", "Z"]);
        assert_eq!(vars.len(), 4);
        let ids: Vec<_> = vars.ids().collect();
        assert_eq!(ids, vec![VarId(0), VarId(1), VarId(2), VarId(3)]);
        assert_eq!(vars.name(VarId(2)), "Y");
        assert!(vars.contains(VarId(3)));
        assert!(!vars.contains(VarId(4)));
    }
}
