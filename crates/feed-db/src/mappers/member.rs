//! Member entity <-> model mapper

use feed_core::entities::Member;
use feed_core::error::DomainError;
use feed_core::value_objects::UserAuthority;

use crate::models::MemberModel;

/// Convert MemberModel to Member entity
impl TryFrom<MemberModel> for Member {
    type Error = DomainError;

    fn try_from(model: MemberModel) -> Result<Self, Self::Error> {
        let role = UserAuthority::from_value(&model.role).map_err(|_| {
            DomainError::DatabaseError(format!("member {} has unknown role {}", model.id, model.role))
        })?;

        Ok(Member {
            id: model.id,
            email: model.email,
            nickname: model.nickname,
            profile_image: model.profile_image,
            animal_name: model.animal_name,
            role,
            displayed: model.displayed,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
