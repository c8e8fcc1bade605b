//! Internal database API exposing read-only views over the renaming rule tables.
//!
//! Each [`Terminology`] owns one embedded TOML table. Callers obtain a [`RuleSetView`]
//! and query it by residue name and protonation flag instead of branching on the
//! terminology at every call site.

mod loader;
mod schema;
mod store;

use crate::model::types::{ProtonationFlag, Terminology};

/// Retrieves the rule table for a terminology.
///
/// # Arguments
///
/// * `terminology` - Naming convention to look up.
///
/// # Returns
///
/// A [`RuleSetView`] borrowing the process-wide rule store.
pub fn rules(terminology: Terminology) -> RuleSetView<'static> {
    RuleSetView::new(store::get_store().rule_set(terminology))
}

/// Read-only wrapper around one loaded rule table.
#[derive(Debug, Clone, Copy)]
pub struct RuleSetView<'a> {
    inner: &'a store::InternalRuleSet,
}

impl<'a> RuleSetView<'a> {
    fn new(inner: &'a store::InternalRuleSet) -> Self {
        Self { inner }
    }

    /// Returns the terminology the table was declared for.
    pub fn terminology(&self) -> Terminology {
        self.inner.schema.info.terminology
    }

    /// Residue name assigned to disulfide-bonded cysteines (`CYS2` or `CYX`).
    pub fn disulfide_name(&self) -> &'a str {
        &self.inner.schema.info.disulfide
    }

    /// Looks up the charge-state rule for a residue name and flag.
    ///
    /// # Arguments
    ///
    /// * `residue` - Three-letter residue name as labeled by MCCE.
    /// * `flag` - Protonation flag of the residue.
    ///
    /// # Returns
    ///
    /// `Some(ChargeRuleView)` when the table has a matching row, otherwise `None`.
    pub fn charge_rule(&self, residue: &str, flag: ProtonationFlag) -> Option<ChargeRuleView<'a>> {
        self.charge_rules()
            .find(|rule| rule.residue() == residue && rule.flag() == flag)
    }

    /// Iterates all charge-state rules in declaration order.
    pub fn charge_rules(&self) -> impl Iterator<Item = ChargeRuleView<'a>> + 'a {
        self.inner
            .schema
            .charge_states
            .iter()
            .map(|rule| ChargeRuleView { inner: rule })
    }
}

/// Read-only view of one charge-state rule.
#[derive(Debug, Clone, Copy)]
pub struct ChargeRuleView<'a> {
    inner: &'a schema::ChargeStateRule,
}

impl<'a> ChargeRuleView<'a> {
    pub fn residue(&self) -> &'a str {
        &self.inner.residue
    }

    pub fn flag(&self) -> ProtonationFlag {
        self.inner.flag
    }

    pub fn target(&self) -> &'a str {
        &self.inner.target
    }

    /// Iterates `(from, to)` atom renames bundled with the rule.
    pub fn atom_renames(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.inner
            .atoms
            .iter()
            .map(|a| (a.from.as_str(), a.to.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(
        terminology: Terminology,
        residue: &str,
        flag: ProtonationFlag,
    ) -> Option<&'static str> {
        rules(terminology)
            .charge_rule(residue, flag)
            .map(|rule| rule.target())
    }

    #[test]
    fn both_rule_tables_load_with_matching_terminology() {
        assert_eq!(rules(Terminology::Amber).terminology(), Terminology::Amber);
        assert_eq!(
            rules(Terminology::GromacsAmber).terminology(),
            Terminology::GromacsAmber
        );
    }

    #[test]
    fn disulfide_names_differ_per_terminology() {
        assert_eq!(rules(Terminology::Amber).disulfide_name(), "CYS2");
        assert_eq!(rules(Terminology::GromacsAmber).disulfide_name(), "CYX");
    }

    #[test]
    fn amber_table_matches_mcce_charge_states() {
        use ProtonationFlag::*;
        let t = Terminology::Amber;

        assert_eq!(target(t, "HIS", Positive), Some("HIP"));
        assert_eq!(target(t, "LYS", Neutral), Some("LYN"));
        assert_eq!(target(t, "LYS", Positive), Some("LYP"));
        assert_eq!(target(t, "CYS", Neutral), Some("CYN"));
        assert_eq!(target(t, "CYS", Negative), Some("CYM"));
        assert_eq!(target(t, "ASP", Neutral), Some("ASH"));
        assert_eq!(target(t, "GLU", Neutral), Some("GLH"));
    }

    #[test]
    fn gamber_table_keeps_charged_lysine_and_neutral_cysteine() {
        use ProtonationFlag::*;
        let t = Terminology::GromacsAmber;

        assert_eq!(target(t, "LYS", Positive), Some("LYS"));
        assert_eq!(target(t, "CYS", Neutral), Some("CYS"));
        assert_eq!(target(t, "LYS", Neutral), Some("LYN"));
        assert_eq!(target(t, "CYS", Negative), Some("CYM"));
    }

    #[test]
    fn tyrosine_and_charged_acids_have_no_rules() {
        use ProtonationFlag::*;
        for t in [Terminology::Amber, Terminology::GromacsAmber] {
            assert_eq!(target(t, "TYR", Negative), None);
            assert_eq!(target(t, "TYR", Neutral), None);
            assert_eq!(target(t, "ASP", Negative), None);
            assert_eq!(target(t, "GLU", Negative), None);
        }
    }

    #[test]
    fn protonated_acids_carry_hydrogen_renames() {
        let rules = rules(Terminology::Amber);

        let ash = rules
            .charge_rule("ASP", ProtonationFlag::Neutral)
            .expect("ASP0 rule");
        assert_eq!(ash.atom_renames().collect::<Vec<_>>(), vec![("HD1", "HD2")]);

        let glh = rules
            .charge_rule("GLU", ProtonationFlag::Neutral)
            .expect("GLU0 rule");
        assert_eq!(glh.atom_renames().collect::<Vec<_>>(), vec![("HE1", "HE2")]);

        let hip = rules
            .charge_rule("HIS", ProtonationFlag::Positive)
            .expect("HIS+ rule");
        assert_eq!(hip.atom_renames().count(), 0);
    }
}
