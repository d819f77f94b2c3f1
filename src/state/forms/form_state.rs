//! The memorial form: its fields and which groups are currently shown

use super::field::{FieldGroup, FormField};
use crate::state::{DocumentType, Section};
use std::collections::HashSet;

const YES_NO: &[(&str, &str)] = &[("Não", "Não"), ("Sim", "Sim")];
const TOPOGRAFIA: &[(&str, &str)] = &[("Acentuada", "Acentuada"), ("Plana", "Plana")];
const TIPO_PROJETO: &[(&str, &str)] = &[("condominio", "Condomínio"), ("loteamento", "Loteamento")];
const COORD_FORMATS: &[(&str, &str)] = &[
    ("utm", "UTM"),
    ("dec", "Graus decimais"),
    ("gms", "Graus, minutos e segundos"),
];
const USOS: &[(&str, &str)] = &[
    ("Residencial", "Residencial"),
    ("Comercial", "Comercial"),
    ("Industrial", "Industrial"),
    ("Misto", "Misto"),
    ("Institucional", "Institucional"),
];

/// Field holding the document type selector
pub const DOCUMENT_TYPE_FIELD: &str = "tipo_emp";
/// Field holding the non-buildable area yes/no selector
pub const ANE_FIELD: &str = "ane_drop";
pub const HAS_AI_FIELD: &str = "has_ai";
pub const HAS_RESTRICAO_FIELD: &str = "has_restricao";
pub const USOS_FIELD: &str = "usos_multi";

/// Ordered fields of the memorial form plus their current visibility
#[derive(Debug, Clone)]
pub struct MemorialForm {
    pub fields: Vec<FormField>,
    shown: HashSet<Section>,
    ane_width_shown: bool,
}

impl Default for MemorialForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorialForm {
    /// Build the standard memorial form with every group hidden
    pub fn new() -> Self {
        let general = FieldGroup::General;
        let condominium = FieldGroup::Section(Section::Condominium);
        let summary = FieldGroup::Section(Section::Summary);
        let non_buildable = FieldGroup::Section(Section::NonBuildable);
        let coordinates = FieldGroup::Section(Section::Coordinates);
        let doc_types: Vec<(&str, &str)> = DocumentType::OPTIONS.to_vec();

        let fields = vec![
            FormField::select(DOCUMENT_TYPE_FIELD, "Tipo de memorial", &doc_types, general),
            FormField::text("nome_emp", "Nome do empreendimento", general),
            FormField::text("endereco_emp", "Endereço", general),
            FormField::text("bairro_emp", "Bairro", general),
            FormField::text("cidade_emp", "Cidade", general),
            FormField::text("area_total_emp", "Área total (m²)", general),
            FormField::text("perimetro_emp", "Perímetro (m)", general),
            FormField::text("matricula_emp", "Matrícula", general),
            FormField::select("topografia", "Topografia", TOPOGRAFIA, general),
            FormField::multi_select(USOS_FIELD, "Usos", USOS, general),
            FormField::checkbox(HAS_AI_FIELD, "Possui área institucional", general),
            FormField::checkbox(HAS_RESTRICAO_FIELD, "Possui restrição", general),
            FormField::text("num_lotes_emp", "Número de lotes", condominium),
            FormField::text("area_tot_priv_emp", "Área total privativa (m²)", condominium),
            FormField::text("area_tot_cond_emp", "Área total condominial (m²)", condominium),
            FormField::select("tipo_proj_resumo", "Tipo de projeto", TIPO_PROJETO, summary),
            FormField::select(ANE_FIELD, "Área não edificante", YES_NO, non_buildable),
            FormField::text("ane_largura", "Largura da faixa (m)", FieldGroup::AneWidth),
            FormField::select("coord_fmt", "Formato das coordenadas", COORD_FORMATS, coordinates),
        ];

        Self::with_fields(fields)
    }

    /// Build a form from arbitrary fields; names may repeat
    pub fn with_fields(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            shown: HashSet::new(),
            ane_width_shown: false,
        }
    }

    /// First field carrying `name`
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Current value of the first field named `name`, or empty
    pub fn value_of(&self, name: &str) -> String {
        self.field(name).map(FormField::value).unwrap_or_default()
    }

    /// Every `(name, value)` entry in field order, hidden groups included
    pub fn entries(&self) -> Vec<(String, String)> {
        self.fields.iter().flat_map(FormField::entries).collect()
    }

    pub fn set_section_visible(&mut self, section: Section, visible: bool) {
        if visible {
            self.shown.insert(section);
        } else {
            self.shown.remove(&section);
        }
    }

    pub fn is_section_visible(&self, section: Section) -> bool {
        self.shown.contains(&section)
    }

    pub fn set_ane_width_visible(&mut self, visible: bool) {
        self.ane_width_shown = visible;
    }

    pub fn is_ane_width_visible(&self) -> bool {
        self.ane_width_shown
    }

    pub fn is_group_visible(&self, group: FieldGroup) -> bool {
        match group {
            FieldGroup::General => true,
            FieldGroup::Section(section) => self.is_section_visible(section),
            // The width group sits inside the ANE section
            FieldGroup::AneWidth => {
                self.ane_width_shown && self.is_section_visible(Section::NonBuildable)
            }
        }
    }

    /// Indices of the fields currently on screen
    pub fn visible_field_indices(&self) -> Vec<usize> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, f)| self.is_group_visible(f.group))
            .map(|(i, _)| i)
            .collect()
    }
}
