//! Domain context of a notification: the module and action it refers to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use bakery_core::AppError;

/// Domain area a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "modulo", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Modulo {
    /// Ingredient inventory.
    Ingredientes,
    /// Dessert catalog.
    Postres,
    /// Recipes and recipe lines.
    Recetas,
    /// User administration.
    Usuarios,
    /// Anything not tied to a specific resource.
    General,
}

impl Modulo {
    /// Return the modulo as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ingredientes => "ingredientes",
            Self::Postres => "postres",
            Self::Recetas => "recetas",
            Self::Usuarios => "usuarios",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Modulo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Modulo {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ingredientes" => Ok(Self::Ingredientes),
            "postres" => Ok(Self::Postres),
            "recetas" => Ok(Self::Recetas),
            "usuarios" => Ok(Self::Usuarios),
            "general" => Ok(Self::General),
            _ => Err(AppError::validation(format!(
                "Invalid modulo: '{s}'. Expected one of: ingredientes, postres, recetas, usuarios, general"
            ))),
        }
    }
}

/// Mutation (or mutation request) a notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "accion", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Accion {
    /// A resource was created.
    Crear,
    /// A resource was updated.
    Actualizar,
    /// A resource was deleted.
    Eliminar,
    /// An employee requested a deletion.
    SolicitarEliminar,
    /// An employee requested an update.
    SolicitarActualizar,
    /// Free-form notification from a module.
    Personalizada,
}

impl Accion {
    /// Return the accion as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crear => "crear",
            Self::Actualizar => "actualizar",
            Self::Eliminar => "eliminar",
            Self::SolicitarEliminar => "solicitar_eliminar",
            Self::SolicitarActualizar => "solicitar_actualizar",
            Self::Personalizada => "personalizada",
        }
    }
}

impl fmt::Display for Accion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
