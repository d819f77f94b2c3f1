//! Document types and the form sections each one uses

/// Kind of memorial the server is asked to generate (`tipo_emp`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentType {
    Condominio,
    Loteamento,
    MemorialResumo,
    SolicitacaoAnalise,
    Unificacao,
    Desmembramento,
    UnifDesm,
    /// Any value the form does not know about
    Other(String),
}

impl DocumentType {
    /// Known values, in the order the selector offers them
    pub const OPTIONS: [(&'static str, &'static str); 7] = [
        ("condominio", "Condomínio"),
        ("loteamento", "Loteamento"),
        ("memorial_resumo", "Memorial Resumo"),
        ("solicitacao_analise", "Solicitação de Análise"),
        ("unificacao", "Unificação"),
        ("desmembramento", "Desmembramento"),
        ("unif_desm", "Unificação e Desmembramento"),
    ];

    pub fn parse(value: &str) -> Self {
        match value {
            "condominio" => Self::Condominio,
            "loteamento" => Self::Loteamento,
            "memorial_resumo" => Self::MemorialResumo,
            "solicitacao_analise" => Self::SolicitacaoAnalise,
            "unificacao" => Self::Unificacao,
            "desmembramento" => Self::Desmembramento,
            "unif_desm" => Self::UnifDesm,
            other => Self::Other(other.to_string()),
        }
    }

    /// Sections shown for this type; everything else stays hidden
    pub fn visible_sections(&self) -> &'static [Section] {
        use Section::*;
        match self {
            Self::Condominio => &[Condominium, NonBuildable, Coordinates, Upload, ExcelTrigger],
            Self::Loteamento => &[NonBuildable, Coordinates, Upload, ExcelTrigger],
            Self::MemorialResumo | Self::SolicitacaoAnalise => &[Summary],
            Self::Unificacao | Self::Desmembramento | Self::UnifDesm => {
                &[Coordinates, Upload, ExcelTrigger]
            }
            Self::Other(_) => &[],
        }
    }
}

/// Toggleable groups of the memorial form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Condominium-only fields (lots, private and common areas)
    Condominium,
    /// Summary memorial / analysis request fields
    Summary,
    /// Non-buildable area ("área não edificante")
    NonBuildable,
    Coordinates,
    Upload,
    /// The "generate Excel" button
    ExcelTrigger,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Self::Condominium,
        Self::Summary,
        Self::NonBuildable,
        Self::Coordinates,
        Self::Upload,
        Self::ExcelTrigger,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Condominium => "Condomínio",
            Self::Summary => "Resumo",
            Self::NonBuildable => "Área Não Edificante",
            Self::Coordinates => "Coordenadas",
            Self::Upload => "Arquivos",
            Self::ExcelTrigger => "Excel",
        }
    }
}
