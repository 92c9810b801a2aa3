use serde_json::Value;

/// Follows `keys` from `root` through nested objects.
///
/// Returns `None` as soon as a key is missing or a level is not an object; never fails.
pub fn lookup<'a>(root: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .try_fold(root, |node, key| node.as_object()?.get(*key))
}
