use serde::{Deserialize, Serialize};

/// Compound tenant key scoping every stored chunk and every query.
///
/// No read or delete may ever cross a `(client_id, project_id)` boundary;
/// the vector store gateway conjoins this key with every filter it builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantKey {
    pub client_id: String,
    pub project_id: String,
}

/// True when `value` can be embedded in a quoted filter literal verbatim.
///
/// Tenant ids and file ids are interpolated into store filter expressions,
/// so they may never carry a quote or an escape character.
pub fn is_filter_safe(value: &str) -> bool {
    !value.contains(['\'', '"', '\\'])
}

impl TenantKey {
    pub fn new(client_id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            project_id: project_id.into(),
        }
    }

    /// Like `new`, but rejects ids that could break out of a quoted filter
    /// literal. Request boundaries build tenant keys through this.
    pub fn checked(
        client_id: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Result<Self, String> {
        let client_id = client_id.into();
        let project_id = project_id.into();
        for (field, value) in [("client_id", &client_id), ("project_id", &project_id)] {
            if !is_filter_safe(value) {
                return Err(format!(
                    "'{}' must not contain quote or backslash characters.",
                    field
                ));
            }
        }
        Ok(Self {
            client_id,
            project_id,
        })
    }
}

impl std::fmt::Display for TenantKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.client_id, self.project_id)
    }
}
