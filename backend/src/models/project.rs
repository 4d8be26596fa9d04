use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Project an employee is assigned to, with the manager who approves its leaves.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub approver_id: Option<String>,
    pub approver_name: Option<String>,
}

impl Project {
    /// Returns `true` when `name` is the approver configured for this project.
    pub fn is_approved_by(&self, name: &str) -> bool {
        self.approver_name.as_deref() == Some(name.trim())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub approver_name: Option<String>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        ProjectResponse {
            id: project.id,
            name: project.name,
            description: project.description,
            approver_name: project.approver_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approver_match_ignores_surrounding_whitespace() {
        let project = Project {
            id: 1,
            name: "Atlas".into(),
            description: String::new(),
            approver_id: Some("EMP001".into()),
            approver_name: Some("Jane Smith".into()),
        };
        assert!(project.is_approved_by(" Jane Smith "));
        assert!(!project.is_approved_by("John Doe"));
    }

    #[test]
    fn missing_approver_serializes_as_null() {
        let response = ProjectResponse::from(Project {
            id: 2,
            name: "Internal".into(),
            description: "Bench".into(),
            approver_id: None,
            approver_name: None,
        });
        let json = serde_json::to_value(response).unwrap();
        assert!(json["approverName"].is_null());
        assert!(!Project {
            id: 2,
            name: "Internal".into(),
            description: String::new(),
            approver_id: None,
            approver_name: None,
        }
        .is_approved_by(""));
    }
}
