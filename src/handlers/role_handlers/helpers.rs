use crate::models::parse_id;
use crate::models::role::RoleFormInput;

/// Parse URL-encoded form body, supporting duplicate keys (e.g. checkboxes).
pub fn parse_form_body(body: &str) -> Vec<(String, String)> {
    serde_urlencoded::from_str(body).unwrap_or_else(|e| {
        log::warn!("Malformed form body: {e}");
        vec![]
    })
}

pub fn get_field<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
    params.iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or("")
}

pub fn get_all<'a>(params: &'a [(String, String)], key: &str) -> Vec<&'a str> {
    params.iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect()
}

/// Read a role form submission. Every checked box repeats `permissions`.
pub fn parse_role_form(body: &str) -> RoleFormInput {
    let params = parse_form_body(body);
    RoleFormInput {
        csrf_token: get_field(&params, "csrf_token").to_string(),
        acting_role: get_field(&params, "acting_role").to_string(),
        id: parse_id(Some(get_field(&params, "id"))),
        name: get_field(&params, "name").to_string(),
        permissions: get_all(&params, "permissions")
            .into_iter()
            .map(String::from)
            .collect(),
    }
}
