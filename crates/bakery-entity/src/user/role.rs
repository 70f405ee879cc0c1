//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles recognized by the notification workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Reviews and decides change requests; receives request fan-outs.
    Administrador,
    /// Files change requests for privileged mutations.
    Empleado,
}

impl UserRole {
    /// Check if this role is an administrator.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Administrador)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrador => "administrador",
            Self::Empleado => "empleado",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = bakery_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "administrador" => Ok(Self::Administrador),
            "empleado" => Ok(Self::Empleado),
            _ => Err(bakery_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: administrador, empleado"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "administrador".parse::<UserRole>().unwrap(),
            UserRole::Administrador
        );
        assert_eq!("EMPLEADO".parse::<UserRole>().unwrap(), UserRole::Empleado);
        assert!("gerente".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_is_admin() {
        assert!(UserRole::Administrador.is_admin());
        assert!(!UserRole::Empleado.is_admin());
    }
}
