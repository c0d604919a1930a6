use crate::modules::user::model::User;

/// Lookup capability the handler delegates to.
///
/// Implementors decide what an unknown id yields; the handler serializes
/// whatever comes back without inspecting it.
pub trait UserService {
    fn find_by_id(&self, id: &str) -> User;
}
