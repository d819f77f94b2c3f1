//! Section visibility rules

use super::ViewBinding;
use crate::state::{DocumentType, Section};

/// Literal value of `ane_drop` that reveals the width field
const ANE_YES: &str = "Sim";

/// Show exactly the sections the selected document type uses.
///
/// Every section is hidden first, so the result never depends on what was
/// visible before.
pub fn refresh_sections<V: ViewBinding + ?Sized>(view: &mut V) {
    for section in Section::ALL {
        view.set_section_visible(section, false);
    }

    let doc_type = DocumentType::parse(&view.document_type());
    for section in doc_type.visible_sections() {
        view.set_section_visible(*section, true);
    }
    tracing::debug!(?doc_type, "sections refreshed");
}

/// Show the width field iff the non-buildable area answer is "Sim"
pub fn refresh_ane_width<V: ViewBinding + ?Sized>(view: &mut V) {
    let shown = view.ane_choice() == ANE_YES;
    view.set_ane_width_visible(shown);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppState, DOCUMENT_TYPE_FIELD, ANE_FIELD};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn state_with_type(value: &str) -> AppState {
        let mut state = AppState::new("http://localhost:5000", PathBuf::from("/tmp"));
        set_type(&mut state, value);
        state
    }

    fn set_type(state: &mut AppState, value: &str) {
        let field = state.form.field_mut(DOCUMENT_TYPE_FIELD).unwrap();
        if !field.set_value(value) {
            // Unknown values cannot be picked from the selector; swap in a text field
            *field = crate::state::FormField::text(
                DOCUMENT_TYPE_FIELD,
                "Tipo",
                crate::state::FieldGroup::General,
            );
            field.set_value(value);
        }
    }

    fn shown(state: &AppState) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| state.form.is_section_visible(*s))
            .collect()
    }

    #[test]
    fn test_visibility_table() {
        use Section::*;
        let table: &[(&str, &[Section])] = &[
            ("condominio", &[Condominium, NonBuildable, Coordinates, Upload, ExcelTrigger]),
            ("loteamento", &[NonBuildable, Coordinates, Upload, ExcelTrigger]),
            ("memorial_resumo", &[Summary]),
            ("solicitacao_analise", &[Summary]),
            ("unificacao", &[Coordinates, Upload, ExcelTrigger]),
            ("desmembramento", &[Coordinates, Upload, ExcelTrigger]),
            ("unif_desm", &[Coordinates, Upload, ExcelTrigger]),
            ("retificacao", &[]),
            ("", &[]),
        ];

        for (value, expected) in table {
            let mut state = state_with_type(value);
            refresh_sections(&mut state);
            assert_eq!(&shown(&state), expected, "document type {value:?}");
        }
    }

    #[test]
    fn test_refresh_independent_of_previous_state() {
        let values = [
            "condominio",
            "memorial_resumo",
            "unif_desm",
            "loteamento",
            "other",
            "solicitacao_analise",
        ];

        for from in values {
            for to in values {
                let mut state = state_with_type(from);
                refresh_sections(&mut state);
                set_type(&mut state, to);
                refresh_sections(&mut state);

                let mut fresh = state_with_type(to);
                refresh_sections(&mut fresh);
                assert_eq!(shown(&state), shown(&fresh), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let mut state = state_with_type("condominio");
        refresh_sections(&mut state);
        let once = shown(&state);
        refresh_sections(&mut state);
        assert_eq!(shown(&state), once);
    }

    #[test]
    fn test_ane_width_shown_only_for_sim() {
        let mut state = state_with_type("condominio");
        refresh_sections(&mut state);

        refresh_ane_width(&mut state);
        assert!(!state.form.is_ane_width_visible());

        state.form.field_mut(ANE_FIELD).unwrap().set_value("Sim");
        refresh_ane_width(&mut state);
        assert!(state.form.is_ane_width_visible());

        state.form.field_mut(ANE_FIELD).unwrap().set_value("Não");
        refresh_ane_width(&mut state);
        assert!(!state.form.is_ane_width_visible());
    }

    #[test]
    fn test_ane_width_is_case_sensitive() {
        let mut state = state_with_type("loteamento");
        let field = state.form.field_mut(ANE_FIELD).unwrap();
        *field = crate::state::FormField::text(ANE_FIELD, "ANE", crate::state::FieldGroup::General);
        for value in ["sim", "SIM", " Sim", ""] {
            state.form.field_mut(ANE_FIELD).unwrap().set_value(value);
            refresh_ane_width(&mut state);
            assert!(!state.form.is_ane_width_visible(), "{value:?}");
        }
    }

    #[test]
    fn test_ane_width_ignores_document_type_refresh() {
        let mut state = state_with_type("condominio");
        state.form.field_mut(ANE_FIELD).unwrap().set_value("Sim");
        refresh_ane_width(&mut state);
        set_type(&mut state, "memorial_resumo");
        refresh_sections(&mut state);
        assert!(state.form.is_ane_width_visible());
    }
}
