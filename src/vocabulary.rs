//! Well-known IRIs with statically reserved ids.
//!
//! The registry is built once at startup from the compiled-in tables plus
//! any vocabularies declared in the configuration, and is read-only after
//! that. Every inconsistency between vocabularies is a startup failure,
//! because a reserved id that resolves two ways would corrupt stored data.

use std::collections::HashSet;

use bimap::BiHashMap;
use tracing::info;
use vocab::VocabularyTable;

use crate::config::VocabularyConfig;
use crate::error::{CoderError, Result};
use crate::term::{Term, TermId};

/// Reserved range owned by one vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyInfo {
    pub name: String,
    pub namespace: String,
    pub base: u64,
    pub span: u64,
    /// Number of populated ids
    pub terms: usize,
}

impl VocabularyInfo {
    /// One past the last reserved id.
    pub fn end(&self) -> u64 {
        self.base + self.span
    }

    pub fn contains(&self, id: TermId) -> bool {
        !id.is_dynamic() && (self.base..self.end()).contains(&id.as_u64())
    }

    fn overlaps(&self, other: &VocabularyInfo) -> bool {
        self.base < other.end() && other.base < self.end()
    }
}

#[derive(Debug)]
pub struct VocabularyRegistry {
    iris: BiHashMap<String, TermId>,
    /// Sorted by base
    ranges: Vec<VocabularyInfo>,
}

impl VocabularyRegistry {
    /// Registry of the compiled-in vocabularies only.
    pub fn builtin() -> Result<VocabularyRegistry> {
        VocabularyRegistry::new(&[])
    }

    /// Registry of the compiled-in vocabularies plus `custom`.
    pub fn new(custom: &[VocabularyConfig]) -> Result<VocabularyRegistry> {
        let mut builder = RegistryBuilder::default();
        for table in vocab::BUILTIN {
            builder.add_table(table)?;
        }
        for config in custom {
            builder.add_config(config)?;
        }
        Ok(builder.build())
    }

    /// Exact match on the full IRI. Literals and blank nodes never match.
    pub fn lookup_id(&self, term: &Term) -> Option<TermId> {
        let iri = term.as_iri()?;
        self.iris.get_by_left(iri).copied()
    }

    /// `None` for ids that no vocabulary populates, including ids inside a
    /// vocabulary range that have no term yet.
    pub fn lookup_term(&self, id: TermId) -> Option<Term> {
        self.iris.get_by_right(&id).map(|iri| Term::iri(iri.as_str()))
    }

    pub fn range_of(&self, id: TermId) -> Option<&VocabularyInfo> {
        if id.is_dynamic() {
            return None;
        }
        let index = self
            .ranges
            .partition_point(|range| range.base <= id.as_u64());
        let range = self.ranges.get(index.checked_sub(1)?)?;
        range.contains(id).then_some(range)
    }

    /// Whether `id` belongs to the reserved half of the id space.
    pub fn is_reserved(&self, id: TermId) -> bool {
        !id.is_dynamic()
    }

    /// Number of populated reserved ids.
    pub fn len(&self) -> usize {
        self.iris.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iris.is_empty()
    }

    pub fn vocabularies(&self) -> &[VocabularyInfo] {
        &self.ranges
    }
}

#[derive(Default)]
struct RegistryBuilder {
    iris: BiHashMap<String, TermId>,
    ranges: Vec<VocabularyInfo>,
}

impl RegistryBuilder {
    fn add_table(&mut self, table: &VocabularyTable) -> Result<()> {
        let entries = table
            .entries
            .iter()
            .map(|(local, offset)| (*local, u64::from(*offset)));
        self.add(table.name, table.namespace, table.base, table.span, entries)
    }

    fn add_config(&mut self, config: &VocabularyConfig) -> Result<()> {
        let entries = config
            .terms
            .iter()
            .enumerate()
            .map(|(offset, local)| (local.as_str(), offset as u64));
        self.add(
            &config.name,
            &config.namespace,
            config.base,
            config.span,
            entries,
        )
    }

    fn add<'a>(
        &mut self,
        name: &str,
        namespace: &str,
        base: u64,
        span: u64,
        entries: impl Iterator<Item = (&'a str, u64)>,
    ) -> Result<()> {
        if name.is_empty() {
            return Err(CoderError::configuration("vocabulary without a name"));
        }
        if self.ranges.iter().any(|range| range.name == name) {
            return Err(CoderError::configuration(format!(
                "vocabulary {name} is declared twice"
            )));
        }
        if namespace.is_empty() {
            return Err(CoderError::configuration(format!(
                "vocabulary {name} has an empty namespace"
            )));
        }
        if span == 0 {
            return Err(CoderError::configuration(format!(
                "vocabulary {name} has an empty range"
            )));
        }
        let in_bounds = base >= 1
            && base
                .checked_add(span)
                .is_some_and(|end| end <= TermId::RESERVED_LIMIT);
        if !in_bounds {
            return Err(CoderError::configuration(format!(
                "vocabulary {name} range {base:#x}+{span:#x} is outside [1, {:#x})",
                TermId::RESERVED_LIMIT
            )));
        }
        let mut info = VocabularyInfo {
            name: name.to_owned(),
            namespace: namespace.to_owned(),
            base,
            span,
            terms: 0,
        };
        if let Some(other) = self.ranges.iter().find(|range| range.overlaps(&info)) {
            return Err(CoderError::configuration(format!(
                "vocabulary {name} range {:#x}..{:#x} overlaps {} range {:#x}..{:#x}",
                info.base,
                info.end(),
                other.name,
                other.base,
                other.end()
            )));
        }

        let mut locals = HashSet::new();
        let mut offsets = HashSet::new();
        for (local, offset) in entries {
            if offset >= span {
                return Err(CoderError::configuration(format!(
                    "{name}:{local} offset {offset} is outside the range of {span} ids"
                )));
            }
            if !locals.insert(local) {
                return Err(CoderError::configuration(format!(
                    "{name}:{local} is declared twice"
                )));
            }
            if !offsets.insert(offset) {
                return Err(CoderError::configuration(format!(
                    "{name}:{local} reuses offset {offset}"
                )));
            }
            let iri = format!("{namespace}{local}");
            let id = TermId::from_raw(base + offset);
            if let Err((iri, _)) = self.iris.insert_no_overwrite(iri, id) {
                return Err(CoderError::configuration(format!(
                    "<{iri}> is registered by more than one vocabulary"
                )));
            }
            info.terms += 1;
        }

        info!(
            target: "vocabulary",
            vocabulary = name,
            base,
            span,
            terms = info.terms,
            "registered vocabulary"
        );
        self.ranges.push(info);
        Ok(())
    }

    fn build(mut self) -> VocabularyRegistry {
        self.ranges.sort_by_key(|range| range.base);
        info!(
            target: "vocabulary",
            vocabularies = self.ranges.len(),
            terms = self.iris.len(),
            "vocabulary registry ready"
        );
        VocabularyRegistry {
            iris: self.iris,
            ranges: self.ranges,
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::VocabularyRegistry;
    use crate::config::VocabularyConfig;
    use crate::error::CoderError;
    use crate::term::{Term, TermId};

    fn custom(name: &str, base: u64, span: u64, terms: &[&str]) -> VocabularyConfig {
        VocabularyConfig {
            name: name.to_owned(),
            namespace: format!("http://example.org/{name}#"),
            base,
            span,
            terms: terms.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn assert_rejected(vocabularies: &[VocabularyConfig]) {
        assert!(
            matches!(
                VocabularyRegistry::new(vocabularies),
                Err(CoderError::Configuration(_))
            ),
            "{vocabularies:?}"
        );
    }

    #[test]
    fn builtin_lookup() -> Result<()> {
        let registry = VocabularyRegistry::builtin()?;
        let name = Term::iri("http://schema.org/name");
        let id = registry.lookup_id(&name).unwrap();
        assert!(registry.is_reserved(id));
        assert_eq!("schema", registry.range_of(id).unwrap().name);
        assert_eq!(Some(name), registry.lookup_term(id));

        let rdf_type = Term::iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
        assert_eq!(Some(TermId::from_raw(0x100)), registry.lookup_id(&rdf_type));
        assert_eq!(vocab::BUILTIN.len(), registry.vocabularies().len());
        Ok(())
    }

    #[test]
    fn only_exact_iris_match() -> Result<()> {
        let registry = VocabularyRegistry::builtin()?;
        assert_eq!(None, registry.lookup_id(&Term::iri("http://schema.org/nam")));
        assert_eq!(None, registry.lookup_id(&Term::iri("http://schema.org/name/")));
        assert_eq!(None, registry.lookup_id(&Term::string("http://schema.org/name")));
        assert_eq!(None, registry.lookup_id(&Term::blank_node("name")));
        Ok(())
    }

    #[test]
    fn unpopulated_ids() -> Result<()> {
        let registry = VocabularyRegistry::builtin()?;
        let rdf = registry.range_of(TermId::from_raw(0x100)).unwrap().clone();
        let unused = TermId::from_raw(rdf.end() - 1);
        assert_eq!(None, registry.lookup_term(unused));
        assert_eq!(Some(&rdf), registry.range_of(unused));

        let outside = TermId::from_raw(TermId::RESERVED_LIMIT - 1);
        assert_eq!(None, registry.range_of(outside));
        assert_eq!(None, registry.range_of(TermId::DEFAULT_CONTEXT));
        assert_eq!(None, registry.range_of(TermId::dynamic(0, 1).unwrap()));
        assert!(!registry.is_reserved(TermId::dynamic(0, 1).unwrap()));
        Ok(())
    }

    #[test]
    fn custom_offsets_follow_declaration_order() -> Result<()> {
        let registry =
            VocabularyRegistry::new(&[custom("ex", 0x2000_0000, 16, &["Thing", "label"])])?;
        assert_eq!(
            Some(TermId::from_raw(0x2000_0001)),
            registry.lookup_id(&Term::iri("http://example.org/ex#label"))
        );
        assert_eq!(
            Some(Term::iri("http://example.org/ex#Thing")),
            registry.lookup_term(TermId::from_raw(0x2000_0000))
        );
        let builtin = VocabularyRegistry::builtin()?;
        assert_eq!(builtin.len() + 2, registry.len());
        Ok(())
    }

    #[test]
    fn invalid_ranges() {
        assert_rejected(&[custom("zero", 0, 16, &[])]);
        assert_rejected(&[custom("empty", 0x2000_0000, 0, &[])]);
        assert_rejected(&[custom("high", TermId::RESERVED_LIMIT - 8, 16, &[])]);
        assert_rejected(&[custom("wrap", u64::MAX - 1, 16, &[])]);
        assert_rejected(&[custom("small", 0x2000_0000, 1, &["a", "b"])]);
    }

    #[test]
    fn overlapping_builtin_range() {
        assert_rejected(&[custom("clash", 0x1ff, 2, &[])]);
        assert_rejected(&[custom("inside", 0x1_0100, 1, &[])]);
    }

    #[test]
    fn ranges_may_touch() -> Result<()> {
        let registry = VocabularyRegistry::new(&[
            custom("a", 0x2000_0000, 16, &["x"]),
            custom("b", 0x2000_0010, 16, &["x"]),
        ])?;
        let b = registry.range_of(TermId::from_raw(0x2000_0010)).unwrap();
        assert_eq!("b", b.name);
        Ok(())
    }

    #[test]
    fn duplicate_declarations() {
        assert_rejected(&[custom("dup", 0x2000_0000, 16, &["a", "a"])]);
        assert_rejected(&[
            custom("dup", 0x2000_0000, 16, &[]),
            custom("dup", 0x3000_0000, 16, &[]),
        ]);
        assert_rejected(&[custom("rdf", 0x2000_0000, 16, &[])]);

        let mut schema = custom("schema2", 0x2000_0000, 16, &["name"]);
        schema.namespace = "http://schema.org/".into();
        assert_rejected(&[schema]);

        let mut nameless = custom("x", 0x2000_0000, 16, &[]);
        nameless.namespace.clear();
        assert_rejected(&[nameless]);
    }

    #[test]
    fn random_layouts_are_accepted_iff_disjoint() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let count = rng.random_range(2..6);
            let vocabularies: Vec<_> = (0..count)
                .map(|i| {
                    let base = rng.random_range(0x2000_0000..0x2000_0100);
                    let span = rng.random_range(1..64);
                    custom(&format!("v{i}"), base, span, &["a"])
                })
                .collect();
            let disjoint = vocabularies.iter().enumerate().all(|(i, a)| {
                vocabularies[i + 1..]
                    .iter()
                    .all(|b| a.base + a.span <= b.base || b.base + b.span <= a.base)
            });
            let registry = VocabularyRegistry::new(&vocabularies);
            assert_eq!(disjoint, registry.is_ok(), "{vocabularies:?}");
            if let Ok(registry) = registry {
                for pair in registry.vocabularies().windows(2) {
                    assert!(pair[0].end() <= pair[1].base);
                }
            }
        }
    }
}
