use crate::domain::standings::ConferenceRef;

/// Builds the standings-engine conference reference from an entity row.
pub fn conference_ref(entity: &entity::conference::Model) -> ConferenceRef {
    ConferenceRef {
        id: entity.id,
        name: entity.name.clone(),
        color: entity.color.clone(),
    }
}
