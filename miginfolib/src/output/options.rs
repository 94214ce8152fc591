//! Rendering options for the migration table.

use std::str::FromStr;

use crate::error::MigInfoError;

/// How the width of the type column is computed.
///
/// The classic layout sizes the type column from the longest *description*
/// while its cells show the type name. Long type names next to short
/// descriptions get cut (`SPRING_JDBC` becomes `SPRI`). `TypeName` sizes the
/// column from what it actually shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeWidth {
    /// Size from the longest description (compatible layout)
    #[default]
    Description,
    /// Size from the longest type name
    TypeName,
}

impl FromStr for TypeWidth {
    type Err = MigInfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "description" | "desc" => Ok(TypeWidth::Description),
            "type-name" | "type_name" | "name" => Ok(TypeWidth::TypeName),
            _ => Err(MigInfoError::InvalidOption {
                option: "type width",
                value: s.to_string(),
            }),
        }
    }
}

/// Options for [`dump_to_ascii_table_with`](super::table::dump_to_ascii_table_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableOptions {
    /// Type column sizing
    pub type_width: TypeWidth,
}

impl TableOptions {
    /// Create options with the compatible layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set type column sizing
    pub fn type_width(mut self, type_width: TypeWidth) -> Self {
        self.type_width = type_width;
        self
    }
}
