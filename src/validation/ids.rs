use uuid::{Uuid, Variant};

/// Check that `id` is a canonical hyphenated version-4 identifier:
/// 8-4-4-4-12 hexadecimal groups, version nibble `4`, variant nibble in
/// `{8, 9, a, b}`, case-insensitive.
///
/// The length guard rejects the simple, braced and URN forms that
/// `Uuid::try_parse` would otherwise accept.
pub fn is_canonical_v4(id: &str) -> bool {
    if id.len() != 36 {
        return false;
    }

    let Ok(parsed) = Uuid::try_parse(id) else {
        return false;
    };

    parsed.get_version_num() == 4 && parsed.get_variant() == Variant::RFC4122
}
