//! Owner / TTL / class disambiguation for the text left of the type token.
//!
//! Any of the three leading fields may be omitted, so their meaning is
//! decided by how many tokens are present, whether the token nearest the
//! type is a class mnemonic, and whether the line starts with whitespace
//! (which means the owner is inherited from the previous record).

pub const VALID_CLASSES: [&str; 4] = ["IN", "CH", "CS", "HS"];

pub fn is_class(token: &str) -> bool {
    VALID_CLASSES
        .iter()
        .any(|class| class.eq_ignore_ascii_case(token))
}

/// What a leading token stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Ttl,
    Class,
    Owner,
}

/// Roles of the prefix tokens, nearest-to-type first, keyed by
/// (token count, nearest token is a class, owner inherited).
///
/// Four tokens or more use the three-token row; the extra leftmost tokens
/// are ignored.
pub fn layout(count: usize, nearest_is_class: bool, inherit_owner: bool) -> &'static [Role] {
    use Role::*;

    match (count, nearest_is_class, inherit_owner) {
        (0, _, _) => &[],
        (1, true, true) => &[Class],
        (1, true, false) => &[Owner],
        (1, false, true) => &[Ttl],
        (1, false, false) => &[Owner],
        (2, true, true) => &[Class, Ttl],
        (2, true, false) => &[Class, Owner],
        (2, false, true) => &[Ttl, Class],
        (2, false, false) => &[Ttl, Owner],
        (_, true, _) => &[Class, Ttl, Owner],
        (_, false, _) => &[Ttl, Class, Owner],
    }
}

/// Leading fields present on the line; `None` means inherit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeadingFields<'a> {
    pub ttl: Option<&'a str>,
    pub class: Option<&'a str>,
    pub owner: Option<&'a str>,
}

pub fn split_leading_fields(prefix: &str) -> LeadingFields<'_> {
    let inherit_owner = prefix.is_empty() || prefix.starts_with(char::is_whitespace);
    let tokens: Vec<&str> = prefix.split_whitespace().rev().collect();
    let nearest_is_class = tokens.first().is_some_and(|t| is_class(t));

    let mut fields = LeadingFields::default();
    for (role, token) in layout(tokens.len(), nearest_is_class, inherit_owner)
        .iter()
        .zip(tokens.iter().copied())
    {
        match role {
            Role::Ttl => fields.ttl = Some(token),
            Role::Class => fields.class = Some(token),
            Role::Owner => fields.owner = Some(token),
        }
    }

    fields
}
