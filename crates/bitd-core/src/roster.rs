//! A roster is a JSON document listing every actor a host knows about:
//!
//! ```json
//! { "actors": [ { "type": "character", "name": "Silver" },
//!               { "type": "crew", "name": "Shadows", "tier": 2 } ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::actor::Actor;
use crate::error::CoreResult;
use crate::registry::InMemoryRegistry;

/// Every actor in a roster document, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Characters and crews.
    #[serde(default)]
    pub actors: Vec<Actor>,
}

impl Roster {
    /// Parse a roster from JSON text.
    pub fn from_json(text: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load every actor into a fresh registry. Fails on duplicate ids.
    pub fn into_registry(self) -> CoreResult<InMemoryRegistry> {
        let mut registry = InMemoryRegistry::new();
        for actor in self.actors {
            registry.insert(actor)?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::id::ActorId;
    use crate::registry::ActorRegistry;

    const ROSTER: &str = r#"{
        "actors": [
            {
                "type": "character",
                "id": "c1",
                "name": "Silver",
                "attributes": [
                    { "name": "insight", "bonus": "1", "skills": [ { "name": "hunt", "value": 2 } ] }
                ],
                "stress": { "value": 3, "max": 9 },
                "crew": [ { "id": "k1", "name": "Shadows" } ]
            },
            {
                "type": "crew",
                "id": "k1",
                "name": "Shadows",
                "tier": "2",
                "scoundrel": { "mastery": true, "add_stress": "1" }
            }
        ]
    }"#;

    #[test]
    fn parses_characters_and_crews() {
        let registry = Roster::from_json(ROSTER).unwrap().into_registry().unwrap();
        assert_eq!(registry.len(), 2);

        let silver = registry.find_character("silver").unwrap();
        assert_eq!(silver.attribute("insight").unwrap().bonus, 1);
        assert_eq!(silver.skill("hunt").unwrap().value, 2);
        assert_eq!(silver.stress.value, 3);

        let crew = registry.lookup(&ActorId::from("k1")).unwrap();
        let crew = crew.as_crew().unwrap();
        assert_eq!(crew.tier, 2);
        assert!(crew.scoundrel.mastery);
        assert_eq!(crew.scoundrel.add_stress, 1.0);
    }

    #[test]
    fn empty_document_is_empty_roster() {
        assert!(Roster::from_json("{}").unwrap().actors.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            Roster::from_json("{ actors: "),
            Err(CoreError::Roster(_))
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let text = r#"{ "actors": [
            { "type": "crew", "id": "k1", "name": "A" },
            { "type": "crew", "id": "k1", "name": "B" }
        ] }"#;
        let err = Roster::from_json(text).unwrap().into_registry().unwrap_err();
        assert!(matches!(err, CoreError::DuplicateId(_)));
    }
}
