//! Resource catalog: the fixed route-to-table mapping served by the API.

use std::collections::HashMap;

/// One exposed table: where it lives, how it is keyed and which columns a client writes.
#[derive(Clone, Debug)]
pub struct Resource {
    pub path_segment: &'static str,
    pub table_name: &'static str,
    /// Auto-increment primary key. Never written by clients.
    pub key_column: &'static str,
    /// Writable columns in statement order for INSERT and UPDATE.
    pub columns: &'static [&'static str],
    pub updated_message: &'static str,
    pub deleted_message: &'static str,
}

impl Resource {
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains(&name)
    }
}

pub const PERSONA: Resource = Resource {
    path_segment: "personas",
    table_name: "PERSONA",
    key_column: "id",
    columns: &[
        "nombre",
        "telefono",
        "edad",
        "sexo",
        "VIVIENDA_id_viv",
        "dependiente_de",
    ],
    updated_message: "Persona actualizada correctamente",
    deleted_message: "Persona eliminada correctamente",
};

pub const VIVIENDA: Resource = Resource {
    path_segment: "viviendas",
    table_name: "VIVIENDA",
    key_column: "id_viv",
    columns: &["direccion", "capacidad", "niveles", "MUNICIPIO_id_mun"],
    updated_message: "Vivienda modificada correctamente",
    deleted_message: "Vivienda eliminada correctamente",
};

pub const MUNICIPIO: Resource = Resource {
    path_segment: "municipios",
    table_name: "MUNICIPIO",
    key_column: "id_mun",
    columns: &["nombre", "area", "presupuesto"],
    updated_message: "Municipio modificado correctamente",
    deleted_message: "Municipio eliminado correctamente",
};

#[derive(Clone, Debug)]
pub struct Catalog {
    pub resources: Vec<Resource>,
    resource_by_path: HashMap<&'static str, usize>,
}

impl Catalog {
    pub fn new(resources: Vec<Resource>) -> Self {
        let resource_by_path = resources
            .iter()
            .enumerate()
            .map(|(i, r)| (r.path_segment, i))
            .collect();
        Catalog {
            resources,
            resource_by_path,
        }
    }

    /// PERSONA, VIVIENDA and MUNICIPIO.
    pub fn standard() -> Self {
        Self::new(vec![PERSONA, VIVIENDA, MUNICIPIO])
    }

    pub fn resource_by_path(&self, path: &str) -> Option<&Resource> {
        self.resource_by_path
            .get(path)
            .and_then(|&i| self.resources.get(i))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
