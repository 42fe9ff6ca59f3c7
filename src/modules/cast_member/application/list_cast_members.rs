use crate::cast_member::application::domain::entities::CastMember;
use crate::shared::listing::ListService;

pub type ListCastMembersService<R> = ListService<CastMember, R>;
