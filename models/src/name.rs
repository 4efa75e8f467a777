use heck::ToSnakeCase;

/// Folds a kind name into a comparison key so that `JawWorm`, `jaw_worm`
/// and `Jaw Worm` all resolve to the same entry.
pub fn name_key(name: &str) -> String {
    name.trim().to_snake_case().replace('_', "")
}
