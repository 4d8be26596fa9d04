use serde::Deserialize;
use utoipa::IntoParams;

use crate::{error::AppError, models::user::User};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeQuery {
    /// Employee whose records are requested; must be the caller.
    #[serde(rename = "EmpId")]
    pub emp_id: Option<String>,
}

/// Employees may only read or act on their own records.
///
/// `param` names the query parameter carrying the id so the message points
/// at what the client sent.
pub fn ensure_self<'a>(
    user: &User,
    requested: Option<&'a str>,
    param: &str,
) -> Result<&'a str, AppError> {
    let requested = requested
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{} is required", param)))?;

    if requested != user.emp_id {
        return Err(AppError::Forbidden(
            "You can only access your own records".into(),
        ));
    }
    Ok(requested)
}
