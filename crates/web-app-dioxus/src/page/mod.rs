pub mod about;
pub mod category;
pub mod exercise;
pub mod home;
pub mod not_found;
pub mod search;

/// Return the output of a resource only if it was produced for `key`.
///
/// A restarted resource keeps its previous output until the new request finishes.
fn current<'a, K: PartialEq, T>(key: &K, output: Option<&'a (K, T)>) -> Option<&'a T> {
    output.filter(|(k, _)| k == key).map(|(_, value)| value)
}
